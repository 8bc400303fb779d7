//! Value objects shared by the reassembly components

use std::fmt;
use std::ops::{Deref, Range};
use std::sync::Arc;

/// An immutable span of text believed to be part of a larger document
///
/// Cloning is cheap: the text is shared, and since it can never be mutated a
/// clone behaves as an independent value.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fragment(Arc<str>);

impl Fragment {
    /// Create a fragment from any string-like value
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    /// Borrow the fragment text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes) in the fragment
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl Deref for Fragment {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Fragment {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Fragment {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Contiguous run of haystack positions matched by the leading run of a head
///
/// Positions are character indices. An empty match means no leading character
/// of the head occurs in the haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlapMatch {
    start: usize,
    len: usize,
}

impl OverlapMatch {
    /// The empty match
    pub const EMPTY: Self = Self { start: 0, len: 0 };

    /// Create a match covering `len` positions starting at `start`
    pub fn new(start: usize, len: usize) -> Self {
        if len == 0 {
            Self::EMPTY
        } else {
            Self { start, len }
        }
    }

    /// Number of matched positions
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing matched
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First matched position
    pub fn first(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.start)
    }

    /// Last matched position (inclusive)
    pub fn last(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.start + self.len - 1)
    }

    /// Matched positions as a half-open range
    pub fn positions(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Matched positions collected into a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.positions().collect()
    }
}

/// Indices of the fragment pair chosen for the next merge
///
/// `head` is spliced into `recipient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedPair {
    /// Fragment whose content is spliced in
    pub head: usize,
    /// Fragment that absorbs the head
    pub recipient: usize,
}

impl SelectedPair {
    /// Returned when no pair overlaps at all
    pub const SENTINEL: Self = Self {
        head: 0,
        recipient: 0,
    };

    /// Create a pair
    pub fn new(head: usize, recipient: usize) -> Self {
        Self { head, recipient }
    }

    /// True for the `(0, 0)` "nothing to merge" answer
    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }

    /// Both indices are in bounds and distinct for a collection of `len` fragments
    pub fn is_usable(&self, len: usize) -> bool {
        self.head < len && self.recipient < len && self.head != self.recipient
    }
}

impl From<(usize, usize)> for SelectedPair {
    fn from((head, recipient): (usize, usize)) -> Self {
        Self::new(head, recipient)
    }
}
