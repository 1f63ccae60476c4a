//! Error types for domsift.
//!
//! This module defines the whole-cycle error taxonomy. Failures local to a
//! single selector are deliberately absent: the executor degrades them to an
//! empty result and logs them instead of aborting the cycle.

/// Error type for extraction-cycle operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Snapshot reduction produced nothing to classify, or the tree handed
    /// to the prompt formatter was malformed.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// The external classifier call exceeded its time bound.
    #[error("classification timed out")]
    ClassificationTimeout,

    /// The external classifier call failed in transport.
    #[error("classification transport failed: {0}")]
    ClassificationTransport(String),

    /// The classifier response was not parseable at all.
    #[error("classification response malformed: {0}")]
    ClassificationParse(String),

    /// An extraction cycle is already in flight for this page context.
    #[error("extraction cycle already in flight")]
    CycleInFlight,

    /// No addressable page context was available.
    #[error("no page context available")]
    NoPageContext,
}

/// Result type alias for extraction-cycle operations.
pub type Result<T> = std::result::Result<T, Error>;
