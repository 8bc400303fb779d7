//! Per-document results and batch counts

use rejoin_core::{CoreError, Outcome};
use serde::{Deserialize, Serialize};

/// How reassembly of one document ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Converged to a single fragment
    Done,
    /// Stopped with several fragments and no overlapping pair
    Stalled,
    /// The pair selector broke its contract
    Failed,
}

impl From<Outcome> for DocumentStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done { .. } => DocumentStatus::Done,
            Outcome::Stalled { .. } => DocumentStatus::Stalled,
        }
    }
}

/// Result of reassembling one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// 1-based line number of the document
    pub number: usize,
    /// Final status
    pub status: DocumentStatus,
    /// Fragments on intake
    pub fragments_in: usize,
    /// Fragments left afterwards
    pub fragments_out: usize,
    /// Merges performed
    pub merges: usize,
    /// Reassembled text; absent for a failure reported without output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Core failure, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CoreError>,
}

/// Counts over a whole batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Documents processed
    pub documents: usize,
    /// Documents that converged
    pub done: usize,
    /// Documents left with several fragments
    pub stalled: usize,
    /// Documents whose reassembly failed
    pub failed: usize,
    /// Merges across all documents
    pub merges: usize,
}

impl BatchSummary {
    /// Tally a batch of reports
    pub fn from_reports(reports: &[DocumentReport]) -> Self {
        reports.iter().fold(Self::default(), |mut summary, report| {
            summary.documents += 1;
            summary.merges += report.merges;
            match report.status {
                DocumentStatus::Done => summary.done += 1,
                DocumentStatus::Stalled => summary.stalled += 1,
                DocumentStatus::Failed => summary.failed += 1,
            }
            summary
        })
    }

    /// True when at least one document failed
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
