//! Greedy reassembly of shredded text fragments
//!
//! Given an unordered collection of overlapping fragments, this crate
//! repeatedly finds the pair whose head and tail characters overlap the most
//! and splices them into one fragment, until a single fragment remains or no
//! pair overlaps at all.
//!
//! # Architecture
//!
//! - [`overlap`]: longest head prefix contained in a haystack
//! - [`strategies`]: pluggable pair search ([`PairSelector`]) and merge
//!   ([`Splicer`]) strategies with the default implementations
//! - [`composer`]: the fragment collection, reassembly loop and backup slot
//!
//! The crate performs no I/O and no logging.
//!
//! # Example
//!
//! ```rust
//! use rejoin_core::{Composer, Outcome};
//!
//! let mut composer = Composer::standard(["O draconia", "conian devil! Oh la", "h lame sa", "saint! "]);
//! composer.write_backup();
//!
//! let outcome = composer.reassemble().unwrap();
//! assert_eq!(outcome, Outcome::Done { merges: 3 });
//! assert_eq!(composer.to_text(), "O draconian devil! Oh lame saint! ");
//! ```

#![warn(missing_docs)]

pub mod composer;
pub mod error;
pub mod overlap;
pub mod strategies;
pub mod types;

pub use composer::{Composer, ComposerState, Outcome};
pub use error::{CoreError, Result};
pub use overlap::{head_overlap, head_overlap_str};
pub use strategies::{MaximalOverlapSelector, OverlapSplicer, PairSelector, Splicer};
pub use types::{Fragment, OverlapMatch, SelectedPair};
