//! Worker thread message types.
//!
//! The main loop posts [`SearchJob`]s to the worker and receives
//! [`WorkerResponse`]s back. Every response echoes the sequence number of the
//! job it answers so the controller can discard stale completions.

use crate::domain::{SearchFailure, SearchResult};
use crate::search::SearchRequest;

/// A sequence-tagged search for the worker to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchJob {
    /// Monotonic sequence number assigned by the controller.
    pub seq: u64,
    pub request: SearchRequest,
}

/// Responses sent from the worker thread to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// A search finished, successfully or not.
    SearchCompleted {
        seq: u64,
        outcome: Result<SearchResult, SearchFailure>,
    },
}

impl WorkerResponse {
    /// Sequence number of the job this response answers.
    #[must_use]
    pub const fn seq(&self) -> u64 {
        match self {
            Self::SearchCompleted { seq, .. } => *seq,
        }
    }
}
