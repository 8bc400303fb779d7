//! Overlap splice merge strategy

use super::traits::Splicer;
use crate::overlap::head_overlap;

/// Replaces the matched span of the recipient with the whole head
///
/// The recipient keeps its unmatched prefix and suffix. When the head has no
/// overlap with the recipient the merge collapses to the head alone and the
/// recipient text is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapSplicer;

impl OverlapSplicer {
    /// Create the splicer
    pub fn new() -> Self {
        Self
    }

    /// Splice two present fragments
    pub fn splice(&self, head: &str, recipient: &str) -> String {
        let head_chars: Vec<char> = head.chars().collect();
        let recipient_chars: Vec<char> = recipient.chars().collect();

        let overlap = head_overlap(&head_chars, &recipient_chars);
        let (Some(first), Some(last)) = (overlap.first(), overlap.last()) else {
            return head.to_string();
        };

        let prefix_end = byte_offset(recipient, first);
        let suffix_start = byte_offset(recipient, last + 1);

        let mut merged =
            String::with_capacity(prefix_end + head.len() + recipient.len() - suffix_start);
        merged.push_str(&recipient[..prefix_end]);
        merged.push_str(head);
        merged.push_str(&recipient[suffix_start..]);
        merged
    }
}

impl Splicer for OverlapSplicer {
    fn merge(&self, head: Option<&str>, recipient: Option<&str>) -> Option<String> {
        match (head, recipient) {
            (Some(head), None) => Some(head.to_string()),
            (None, _) => None,
            (Some(head), Some(recipient)) => Some(self.splice(head, recipient)),
        }
    }

    fn name(&self) -> &'static str {
        "overlap-splice"
    }
}

/// Byte offset of the character at `char_index`, or the length past the end
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(head: &str, recipient: &str) -> String {
        OverlapSplicer.splice(head, recipient)
    }

    #[test]
    fn test_head_prefix_found_at_recipient_tail() {
        assert_eq!(merge("ABC123", "431ABC"), "431ABC123");
    }

    #[test]
    fn test_recipient_suffix_kept() {
        assert_eq!(merge("ABC", "xxABCyy"), "xxABCyy");
        assert_eq!(merge("ABCD", "xxABCyy"), "xxABCDyy");
    }

    #[test]
    fn test_document_splices() {
        assert_eq!(merge("conian devil! Oh la", "O draconia"), "O draconian devil! Oh la");
        assert_eq!(merge("cdef", "abcd"), "abcdef");
        assert_eq!(merge("DEFG", "ABCDEF"), "ABCDEFG");
    }

    #[test]
    fn test_no_overlap_keeps_head_only() {
        assert_eq!(merge("XYZ", "ABC"), "XYZ");
    }

    #[test]
    fn test_empty_head_discards_recipient() {
        assert_eq!(merge("", "C"), "");
    }

    #[test]
    fn test_empty_recipient() {
        assert_eq!(merge("abc", ""), "abc");
    }

    #[test]
    fn test_absent_fragments() {
        assert_eq!(OverlapSplicer.merge(Some("abc"), None), Some("abc".to_string()));
        assert_eq!(OverlapSplicer.merge(None, Some("abc")), None);
        assert_eq!(OverlapSplicer.merge(None, None), None);
    }

    #[test]
    fn test_multibyte_positions() {
        assert_eq!(merge("語です。", "日本語で"), "日本語です。");
        assert_eq!(merge("🌍 world", "hello 🌍"), "hello 🌍 world");
    }

    #[test]
    fn test_interior_match_splices_mid_recipient() {
        // Matched span is interior, so the head lands mid-recipient
        assert_eq!(merge("BCX", "ABCDBC"), "ABCXDBC");
    }
}
