//! # domsift
//!
//! LLM-assisted structured content extraction from webpages.
//!
//! domsift turns a page into a compact structural snapshot, asks an external
//! language-model classifier to label structural regions with a fixed
//! taxonomy and return CSS selectors for each, then applies those selectors
//! back against the page to materialize named groups of extracted text and
//! links. Selectors that are invalid, empty or overlapping degrade locally;
//! partial results are better than none.
//!
//! The classifier transport (HTTP, credentials, the 60 s bound) lives
//! outside the crate behind the [`Classifier`] trait; this crate owns the
//! payload content and the response contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use domsift::{build_page_prompt, Options};
//!
//! let html = r#"<html><body><article><p>Main content here.</p></article>
//! <nav><a href="/about">About</a></nav></body></html>"#;
//!
//! // 1. Build the classification prompt from a reduced DOM snapshot.
//! let prompt = build_page_prompt(html, &Options::default())?;
//! assert!(prompt.contains("Main content here."));
//!
//! // 2. Hand `prompt` to a classifier, then apply its response:
//! let response = r#"{"selectors":[{"name":"main-text","css":"article","maxItems":1}],
//!                    "groups":{"Page":["main-text"]}}"#;
//! let result = domsift::extract_with_classification(
//!     html,
//!     "https://example.com",
//!     response,
//!     &Options::default(),
//! )?;
//! assert_eq!(result.result["main-text"], vec!["Main content here."]);
//! # Ok::<(), domsift::Error>(())
//! ```
//!
//! For a driven end-to-end cycle (including the in-flight guard and the
//! optional debug overlay), see [`PageContext`] and [`run_cycle`].

mod error;
mod options;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Snapshot builder: bounded structural copy of the live tree.
pub mod snapshot;

/// Snapshot reducer: elision, chain collapsing, depth and text caps.
pub mod reduce;

/// The fixed category taxonomy for structural classification.
pub mod taxonomy;

/// Prompt formatting and classifier request payloads.
pub mod prompt;

/// Classification result types, lenient parsing and the classifier boundary.
pub mod classify;

/// Regex patterns and the content-text cleaning pipeline.
pub mod patterns;

/// Selector execution against the live document.
pub mod executor;

/// Extraction result assembly.
pub mod result;

/// Reversible category-coded debug highlighting.
pub mod overlay;

/// End-to-end cycle orchestration with an in-flight guard.
pub mod cycle;

// Public API - re-exports
pub use classify::{
    parse_classification, Classification, Classifier, GroupMap, SelectorSpec,
    CLASSIFICATION_TIMEOUT,
};
pub use cycle::{run_cycle, PageContext};
pub use error::{Error, Result};
pub use options::Options;
pub use result::{ExtractionResult, STORAGE_KEY};
pub use snapshot::SnapshotNode;

/// Build the classification prompt for a page in one call.
///
/// Parses the HTML, captures a snapshot, reduces it and formats the prompt.
/// Fails with `Error::InvalidSnapshot` when nothing content-bearing
/// survives reduction.
pub fn build_page_prompt(html: &str, opts: &Options) -> Result<String> {
    let doc = dom::parse(html);
    let captured = snapshot::capture(&doc, opts);
    let reduced = captured.as_ref().and_then(|tree| reduce::reduce(tree, opts));
    prompt::build_prompt(reduced.as_ref())
}

/// Apply a raw classifier response to a page and assemble the result.
///
/// For hosts that run the classifier round-trip themselves. The response is
/// parsed leniently; only a wholly unparsable payload fails.
pub fn extract_with_classification(
    html: &str,
    url: &str,
    response: &str,
    opts: &Options,
) -> Result<ExtractionResult> {
    let doc = dom::parse(html);
    let classification = parse_classification(response)?;
    let results = executor::execute_selectors(&doc, &classification.selectors, opts, Some(url));
    Ok(result::assemble(results, classification.groups, url))
}
