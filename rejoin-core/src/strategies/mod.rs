//! Search and merge strategies for the composer

pub mod maximal_overlap;
pub mod overlap_splice;
pub mod traits;

pub use maximal_overlap::MaximalOverlapSelector;
pub use overlap_splice::OverlapSplicer;
pub use traits::{PairSelector, Splicer};
