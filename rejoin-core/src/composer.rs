//! Fragment composer
//!
//! Owns the mutable fragment collection and drives the select/splice loop
//! until one fragment remains or nothing more can be merged. A single backup
//! slot lets the caller roll back a failed attempt.

use crate::error::{CoreError, Result};
use crate::strategies::{MaximalOverlapSelector, OverlapSplicer, PairSelector, Splicer};
use crate::types::{Fragment, SelectedPair};

/// Lifecycle of a composer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComposerState {
    /// Built, no backup written yet
    Idle,
    /// Backup written or restored, ready to reassemble
    Ready,
    /// Reassembled down to at most one fragment
    Done,
    /// Stopped with several fragments left and no mergeable pair
    Stalled,
    /// The selector broke its contract
    Failed,
}

/// Result of a reassembly run that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// At most one fragment remains
    Done {
        /// Merges performed during this run
        merges: usize,
    },
    /// More than one fragment remains and no pair could be merged
    Stalled {
        /// Merges performed during this run
        merges: usize,
        /// Fragments left in the collection
        remaining: usize,
    },
}

impl Outcome {
    /// Merges performed during the run
    pub fn merges(&self) -> usize {
        match self {
            Outcome::Done { merges } | Outcome::Stalled { merges, .. } => *merges,
        }
    }

    /// True when the collection converged to a single fragment
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done { .. })
    }
}

/// Reassembles a collection of fragments with pluggable strategies
#[derive(Debug, Clone)]
pub struct Composer<S = MaximalOverlapSelector, M = OverlapSplicer> {
    selector: S,
    splicer: M,
    fragments: Vec<Fragment>,
    backup: Vec<Fragment>,
    state: ComposerState,
}

impl Composer {
    /// Composer using maximal-overlap search and overlap splicing
    pub fn standard<I, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Fragment>,
    {
        Self::from_texts(MaximalOverlapSelector, OverlapSplicer, texts)
    }
}

impl<S: PairSelector, M: Splicer> Composer<S, M> {
    /// Create a composer, dropping absent entries on intake
    ///
    /// The backup slot starts out holding the intake collection.
    pub fn new<I, T>(selector: S, splicer: M, fragments: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
        T: Into<Fragment>,
    {
        let fragments: Vec<Fragment> = fragments.into_iter().flatten().map(Into::into).collect();
        Self {
            selector,
            splicer,
            backup: fragments.clone(),
            fragments,
            state: ComposerState::Idle,
        }
    }

    /// Create a composer from fragments that are all present
    pub fn from_texts<I, T>(selector: S, splicer: M, texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Fragment>,
    {
        Self::new(selector, splicer, texts.into_iter().map(Some))
    }

    /// Snapshot the current collection, replacing any previous snapshot
    pub fn write_backup(&mut self) {
        self.backup = self.fragments.clone();
        self.state = ComposerState::Ready;
    }

    /// Replace the current collection with a copy of the snapshot
    pub fn restore_backup(&mut self) {
        self.fragments = self.backup.clone();
        self.state = ComposerState::Ready;
    }

    /// Splice the fragment at `head` into the one at `recipient`
    ///
    /// Returns false and leaves the collection untouched when an index is out
    /// of bounds, both indices name the same slot, or the splicer rejects the
    /// pair. On success the collection shrinks by one.
    pub fn merge_at(&mut self, head: usize, recipient: usize) -> bool {
        self.try_merge(head, recipient).is_ok()
    }

    fn try_merge(&mut self, head: usize, recipient: usize) -> Result<()> {
        let len = self.fragments.len();
        if head >= len || recipient >= len || head == recipient {
            return Err(CoreError::InvalidMergeIndex {
                head,
                recipient,
                len,
            });
        }

        let merged = self
            .splicer
            .merge(
                Some(self.fragments[head].as_str()),
                Some(self.fragments[recipient].as_str()),
            )
            .ok_or(CoreError::InvalidMergeIndex {
                head,
                recipient,
                len,
            })?;

        // Write before removing: removal shifts every later index down
        self.fragments[recipient] = Fragment::from(merged);
        self.fragments.remove(head);
        Ok(())
    }

    /// Ask the selector for the next pair without merging
    pub fn next_pair(&self) -> SelectedPair {
        self.selector.select_pair(&self.fragments)
    }

    /// Merge the best pair repeatedly until one fragment remains or none can merge
    ///
    /// Runs at most `len() - 1` merges. A selector answer naming an
    /// out-of-bounds index or the same slot twice (other than the `(0, 0)`
    /// "no overlap" sentinel) aborts with [`CoreError::DegenerateSearch`] and
    /// leaves the partially merged collection in place for inspection or
    /// [`restore_backup`](Self::restore_backup).
    pub fn reassemble(&mut self) -> Result<Outcome> {
        let mut merges = 0;

        while self.fragments.len() > 1 {
            let len = self.fragments.len();
            let pair = self.next_pair();

            if !pair.is_sentinel() && !pair.is_usable(len) {
                self.state = ComposerState::Failed;
                return Err(CoreError::DegenerateSearch {
                    head: pair.head,
                    recipient: pair.recipient,
                    len,
                });
            }

            if !self.merge_at(pair.head, pair.recipient) {
                self.state = ComposerState::Stalled;
                return Ok(Outcome::Stalled {
                    merges,
                    remaining: len,
                });
            }
            merges += 1;
        }

        self.state = ComposerState::Done;
        Ok(Outcome::Done { merges })
    }

    /// Concatenate the remaining fragments with no separator
    pub fn to_text(&self) -> String {
        self.fragments.iter().map(Fragment::as_str).collect()
    }

    /// Current fragments in collection order
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Current snapshot
    pub fn backup(&self) -> &[Fragment] {
        &self.backup
    }

    /// Number of fragments in the collection
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// True when the collection holds no fragments
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Lifecycle state
    pub fn state(&self) -> ComposerState {
        self.state
    }

    /// The search strategy
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// The merge strategy
    pub fn splicer(&self) -> &M {
        &self.splicer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_entries_filtered_on_intake() {
        let composer = Composer::new(
            MaximalOverlapSelector,
            OverlapSplicer,
            vec![None, Some("abc"), None, Some("cde"), Some("abc")],
        );
        assert_eq!(composer.fragments(), &["abc", "cde", "abc"]);
        assert_eq!(composer.state(), ComposerState::Idle);
    }

    #[test]
    fn test_merge_at_shrinks_collection() {
        let mut composer = Composer::standard(["abcd", "cdef", "xyz"]);
        assert!(composer.merge_at(1, 0));
        assert_eq!(composer.fragments(), &["abcdef", "xyz"]);
    }

    #[test]
    fn test_merge_at_recipient_after_head() {
        let mut composer = Composer::standard(["cdef", "xyz", "abcd"]);
        assert!(composer.merge_at(0, 2));
        assert_eq!(composer.fragments(), &["xyz", "abcdef"]);
    }

    #[test]
    fn test_merge_at_rejects_bad_indices() {
        let mut composer = Composer::standard(["abcd", "cdef"]);
        assert!(!composer.merge_at(2, 0));
        assert!(!composer.merge_at(0, 5));
        assert!(!composer.merge_at(1, 1));
        assert_eq!(composer.len(), 2);
    }

    #[test]
    fn test_merge_at_rejected_by_splicer() {
        let refuse = |_: Option<&str>, _: Option<&str>| -> Option<String> { None };
        let mut composer = Composer::from_texts(MaximalOverlapSelector, refuse, ["ab", "bc"]);
        assert!(!composer.merge_at(1, 0));
        assert_eq!(composer.fragments(), &["ab", "bc"]);
    }

    #[test]
    fn test_reassemble_done() {
        let mut composer = Composer::standard(["abcd", "cdef", "efgh"]);
        composer.write_backup();
        let outcome = composer.reassemble().unwrap();
        assert_eq!(outcome, Outcome::Done { merges: 2 });
        assert_eq!(composer.to_text(), "abcdefgh");
        assert_eq!(composer.state(), ComposerState::Done);
    }

    #[test]
    fn test_reassemble_stalls_without_overlap() {
        let mut composer = Composer::standard(["abc", "xyz", "123"]);
        let outcome = composer.reassemble().unwrap();
        assert_eq!(
            outcome,
            Outcome::Stalled {
                merges: 0,
                remaining: 3
            }
        );
        assert_eq!(composer.fragments(), &["abc", "xyz", "123"]);
        assert_eq!(composer.state(), ComposerState::Stalled);
    }

    #[test]
    fn test_reassemble_trivial_sizes() {
        let mut empty = Composer::standard(Vec::<String>::new());
        assert_eq!(empty.reassemble().unwrap(), Outcome::Done { merges: 0 });
        assert_eq!(empty.to_text(), "");

        let mut single = Composer::standard(["only"]);
        assert_eq!(single.reassemble().unwrap(), Outcome::Done { merges: 0 });
        assert_eq!(single.to_text(), "only");
    }

    #[test]
    fn test_backup_is_independent_copy() {
        let mut composer = Composer::standard(["abcd", "cdef"]);
        composer.write_backup();
        composer.reassemble().unwrap();
        assert_eq!(composer.fragments(), &["abcdef"]);
        assert_eq!(composer.backup(), &["abcd", "cdef"]);

        composer.restore_backup();
        assert_eq!(composer.to_text(), "abcdcdef");
        assert_eq!(composer.state(), ComposerState::Ready);
    }

    #[test]
    fn test_new_backup_overwrites_previous() {
        let mut composer = Composer::standard(["abcd", "cdef", "efgh"]);
        composer.write_backup();
        assert!(composer.merge_at(1, 0));
        composer.write_backup();
        assert!(composer.merge_at(1, 0));
        composer.restore_backup();
        assert_eq!(composer.fragments(), &["abcdef", "efgh"]);
    }

    #[test]
    fn test_degenerate_selector_fails() {
        let broken = |fragments: &[Fragment]| SelectedPair::new(fragments.len(), 0);
        let mut composer = Composer::from_texts(broken, OverlapSplicer, ["ab", "bc"]);
        let err = composer.reassemble().unwrap_err();
        assert_eq!(
            err,
            CoreError::DegenerateSearch {
                head: 2,
                recipient: 0,
                len: 2
            }
        );
        assert_eq!(composer.state(), ComposerState::Failed);
    }

    #[test]
    fn test_same_index_selector_fails() {
        let broken = |_: &[Fragment]| SelectedPair::new(1, 1);
        let mut composer = Composer::from_texts(broken, OverlapSplicer, ["ab", "bc"]);
        assert!(matches!(
            composer.reassemble(),
            Err(CoreError::DegenerateSearch { .. })
        ));
    }

    #[test]
    fn test_to_text_has_no_separator() {
        let composer = Composer::standard(["a", "b", "c"]);
        assert_eq!(composer.to_text(), "abc");
    }

    #[test]
    fn test_strategy_names() {
        let composer = Composer::standard(["a"]);
        assert_eq!(composer.selector().name(), "maximal-overlap");
        assert_eq!(composer.splicer().name(), "overlap-splice");
    }
}
