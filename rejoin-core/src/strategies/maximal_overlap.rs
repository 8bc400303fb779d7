//! Maximal overlap pair search

use super::traits::PairSelector;
use crate::overlap::head_overlap;
use crate::types::{Fragment, SelectedPair};

/// Selects the pair with the globally longest head overlap
///
/// Every ordered pair `(i, j)` is tested in both directions: the head of `j`
/// inside `i` (straight) and the head of `i` inside `j` (reverse). The reverse
/// direction wins only when strictly longer. A pair replaces the current best
/// only on a strictly longer overlap, so ties keep the first pair found with
/// `i` as the outer and `j` as the inner loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaximalOverlapSelector;

impl MaximalOverlapSelector {
    /// Create the selector
    pub fn new() -> Self {
        Self
    }

    /// Select a pair and report the overlap length it achieved
    ///
    /// Returns `(SelectedPair::SENTINEL, 0)` when no pair overlaps.
    pub fn select_with_overlap(&self, fragments: &[Fragment]) -> (SelectedPair, usize) {
        let decoded: Vec<Vec<char>> = fragments.iter().map(|f| f.chars().collect()).collect();

        let mut best_len = 0;
        let mut best = SelectedPair::SENTINEL;

        for (i, current) in decoded.iter().enumerate() {
            for (j, next) in decoded.iter().enumerate() {
                if i == j {
                    continue;
                }

                let straight = head_overlap(next, current).len();
                let reverse = head_overlap(current, next).len();

                if reverse > straight {
                    if reverse > best_len {
                        best = SelectedPair::new(i, j);
                        best_len = reverse;
                    }
                } else if straight > best_len {
                    best = SelectedPair::new(j, i);
                    best_len = straight;
                }
            }
        }

        (best, best_len)
    }
}

impl PairSelector for MaximalOverlapSelector {
    fn select_pair(&self, fragments: &[Fragment]) -> SelectedPair {
        self.select_with_overlap(fragments).0
    }

    fn name(&self) -> &'static str {
        "maximal-overlap"
    }
}
