//! Head overlap detection
//!
//! Finds the longest leading run of a head sequence that occurs anywhere in a
//! haystack. The match is a plain containment test: it is not anchored to
//! either end of the haystack, so an interior occurrence counts.

use crate::types::OverlapMatch;

/// Find the longest prefix of `head` contained in `haystack`
///
/// The prefix is grown one character at a time and extension stops at the
/// first character that breaks containment. The returned positions are those
/// of the first occurrence of the final prefix.
///
/// ```
/// use rejoin_core::overlap::head_overlap;
///
/// let head: Vec<char> = "DEFG".chars().collect();
/// let haystack: Vec<char> = "ABCDEF".chars().collect();
/// assert_eq!(head_overlap(&head, &haystack).to_vec(), vec![3, 4, 5]);
/// ```
pub fn head_overlap<T: PartialEq>(head: &[T], haystack: &[T]) -> OverlapMatch {
    if head.is_empty() || haystack.is_empty() {
        return OverlapMatch::EMPTY;
    }

    let mut start = 0;
    let mut matched = 0;

    // Every occurrence of a longer prefix is also an occurrence of the
    // shorter one, so the first occurrence never moves left.
    while matched < head.len() {
        match find_from(haystack, &head[..=matched], start) {
            Some(position) => {
                start = position;
                matched += 1;
            }
            None => break,
        }
    }

    OverlapMatch::new(start, matched)
}

/// String convenience for [`head_overlap`], working on characters
pub fn head_overlap_str(head: &str, haystack: &str) -> OverlapMatch {
    let head: Vec<char> = head.chars().collect();
    let haystack: Vec<char> = haystack.chars().collect();
    head_overlap(&head, &haystack)
}

fn find_from<T: PartialEq>(haystack: &[T], needle: &[T], from: usize) -> Option<usize> {
    if needle.len() > haystack.len().saturating_sub(from) {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset)
}
