//! Extraction cycle orchestration.
//!
//! Wires the pipeline end to end: snapshot → reduce → prompt → classify →
//! execute → assemble. A cycle runs single-threaded against one page
//! context; the only suspension point is the external classifier call.
//!
//! Overlapping invocation is an explicit policy here rather than a host-side
//! gap: each context carries an in-flight flag, and starting a cycle while
//! one is suspended in the classifier fails fast with
//! [`Error::CycleInFlight`].

use std::cell::Cell;

use log::debug;

use crate::classify::{self, Classifier};
use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::executor;
use crate::overlay;
use crate::prompt;
use crate::reduce;
use crate::result::{self, ExtractionResult};
use crate::snapshot;
use crate::Options;

/// An addressable page to extract from: its parsed document and URL.
///
/// Created fresh per page; snapshot trees live and die inside a single
/// [`run_cycle`] call, so nothing is cached across cycles.
pub struct PageContext {
    doc: Document,
    url: String,
    in_flight: Cell<bool>,
}

impl PageContext {
    /// Create a context for a page.
    ///
    /// Fails with [`Error::NoPageContext`] when no addressable page is
    /// available (empty URL).
    pub fn new(html: &str, url: &str) -> Result<Self> {
        if url.trim().is_empty() {
            return Err(Error::NoPageContext);
        }
        Ok(Self {
            doc: dom::parse(html),
            url: url.to_string(),
            in_flight: Cell::new(false),
        })
    }

    /// The live document of this page.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// The page URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// True while a cycle is in flight on this context.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }
}

/// Run one full extraction cycle against a page.
///
/// Fails before any classifier call when the snapshot reduces to nothing
/// (`Error::InvalidSnapshot`); classifier failures abort the cycle with
/// their own variants; per-selector failures never do.
pub fn run_cycle<C: Classifier>(
    ctx: &PageContext,
    classifier: &C,
    opts: &Options,
) -> Result<ExtractionResult> {
    if ctx.in_flight.get() {
        return Err(Error::CycleInFlight);
    }
    ctx.in_flight.set(true);
    let out = run_cycle_inner(ctx, classifier, opts);
    ctx.in_flight.set(false);
    out
}

fn run_cycle_inner<C: Classifier>(
    ctx: &PageContext,
    classifier: &C,
    opts: &Options,
) -> Result<ExtractionResult> {
    // Markers from a previous debug cycle must not leak into the snapshot.
    overlay::clear(&ctx.doc);

    let captured = snapshot::capture(&ctx.doc, opts);
    let reduced = captured.as_ref().and_then(|tree| reduce::reduce(tree, opts));
    let request = prompt::build_prompt(reduced.as_ref())?;
    debug!("classification prompt built ({} chars)", request.len());

    let raw = classifier.classify(&request)?;
    let classification = classify::parse_classification(&raw)?;
    debug!(
        "classifier returned {} selector(s), {} group(s)",
        classification.selectors.len(),
        classification.groups.len()
    );

    let results =
        executor::execute_selectors(&ctx.doc, &classification.selectors, opts, Some(ctx.url()));

    if opts.debug_overlay {
        overlay::apply(&ctx.doc, &classification.selectors);
    }

    Ok(result::assemble(results, classification.groups, ctx.url()))
}
