//! Pluggable search and merge strategies
//!
//! The composer is generic over one of each. Closures work too, so a one-off
//! strategy does not need its own type.

use crate::types::{Fragment, SelectedPair};

/// Picks the next pair of fragments to merge
pub trait PairSelector {
    /// Choose a pair from the current collection
    ///
    /// While more than one fragment remains an implementation must return two
    /// distinct in-bounds indices, or [`SelectedPair::SENTINEL`] when nothing
    /// is worth merging.
    fn select_pair(&self, fragments: &[Fragment]) -> SelectedPair;

    /// Strategy name for debugging
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Produces the text of a merged fragment
pub trait Splicer {
    /// Splice `head` into `recipient`
    ///
    /// Absent inputs model slots that hold nothing; returning `None` rejects
    /// the merge.
    fn merge(&self, head: Option<&str>, recipient: Option<&str>) -> Option<String>;

    /// Strategy name for debugging
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> PairSelector for F
where
    F: Fn(&[Fragment]) -> SelectedPair,
{
    fn select_pair(&self, fragments: &[Fragment]) -> SelectedPair {
        self(fragments)
    }
}

impl<F> Splicer for F
where
    F: Fn(Option<&str>, Option<&str>) -> Option<String>,
{
    fn merge(&self, head: Option<&str>, recipient: Option<&str>) -> Option<String> {
        self(head, recipient)
    }
}
