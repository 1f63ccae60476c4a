//! Extraction result assembly.
//!
//! Combines the per-selector output with the classifier's group mapping and
//! capture metadata into the record handed to persistence and rendering
//! collaborators. No filtering happens here: groups referencing selectors
//! with zero extracted items stay, and orphaned selector output stays in the
//! flat result.

use chrono::Utc;
use serde::Serialize;

use crate::classify::GroupMap;
use crate::executor::SelectorResults;

/// Key under which collaborators persist the most recent extraction record.
pub const STORAGE_KEY: &str = "lastExtraction";

/// Result of one extraction cycle.
///
/// Owned by the caller once returned; the core does not persist it.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Extracted string values per selector name, in selector order.
    pub result: SelectorResults,

    /// Presentation groups, passed through from the classifier verbatim.
    pub groups: GroupMap,

    /// URL of the extracted page.
    #[serde(rename = "sourceUrl")]
    pub source_url: String,

    /// Capture time, epoch seconds (UTC).
    pub timestamp: i64,
}

/// Assemble an extraction result, stamping the capture time.
#[must_use]
pub fn assemble(result: SelectorResults, groups: GroupMap, source_url: &str) -> ExtractionResult {
    ExtractionResult {
        result,
        groups,
        source_url: source_url.to_string(),
        timestamp: Utc::now().timestamp(),
    }
}
