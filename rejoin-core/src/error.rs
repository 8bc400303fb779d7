//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoreError {
    /// A merge named a slot that does not exist in the current collection
    #[error("invalid merge index: head {head}, recipient {recipient} (collection size {len})")]
    InvalidMergeIndex {
        /// Index of the fragment that would have been spliced in
        head: usize,
        /// Index of the fragment that would have absorbed the head
        recipient: usize,
        /// Collection size at the time of the merge
        len: usize,
    },

    /// The pair selector broke its contract of naming two usable, distinct fragments
    #[error(
        "degenerate search: selector returned ({head}, {recipient}) for {len} fragments; \
         restore from the last good backup"
    )]
    DegenerateSearch {
        /// Head index returned by the selector
        head: usize,
        /// Recipient index returned by the selector
        recipient: usize,
        /// Collection size when the selector was consulted
        len: usize,
    },
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_search_display() {
        let err = CoreError::DegenerateSearch {
            head: 4,
            recipient: 9,
            len: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("(4, 9)"));
        assert!(msg.contains("3 fragments"));
        assert!(msg.contains("backup"));
    }

    #[test]
    fn test_invalid_merge_index_display() {
        let err = CoreError::InvalidMergeIndex {
            head: 2,
            recipient: 2,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "invalid merge index: head 2, recipient 2 (collection size 2)"
        );
    }
}
