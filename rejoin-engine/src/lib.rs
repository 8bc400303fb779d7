//! Batch orchestration for shredded-document reassembly
//!
//! This crate turns raw input into validated documents, runs one
//! [`rejoin_core::Composer`] per document on a sequential or parallel
//! executor, and collects per-document reports.
//!
//! # Example
//!
//! ```rust
//! use rejoin_engine::{DocumentStatus, Reassembler};
//!
//! let reassembler = Reassembler::new().unwrap();
//! let output = reassembler
//!     .process_text("O draconia;conian devil! Oh la;h lame sa;saint! ")
//!     .unwrap();
//!
//! assert_eq!(output.reports[0].status, DocumentStatus::Done);
//! assert_eq!(output.texts().next(), Some("O draconian devil! Oh lame saint! "));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod processor;
pub mod report;

// Re-export key types
pub use config::{EngineConfig, FailurePolicy, DEFAULT_DELIMITER};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use input::{parse_line, Document, DocumentSet, Input, LineValidator};
pub use processor::{BatchOutput, Reassembler, ReassemblerBuilder};
pub use report::{BatchSummary, DocumentReport, DocumentStatus};

// Re-export from core for convenience
pub use rejoin_core::{CoreError, Fragment, Outcome, PairSelector, SelectedPair, Splicer};
