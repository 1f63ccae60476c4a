//! Selector executor.
//!
//! Applies classifier-supplied selectors against the live document and
//! materializes a normalized string value per matched node. Every selector
//! runs independently: invalid CSS, zero matches or any other per-selector
//! failure records an empty result for that name and never aborts the rest.

use indexmap::IndexMap;
use log::{debug, warn};
use url::Url;

use crate::classify::SelectorSpec;
use crate::dom::{self, Document, Selection};
use crate::patterns::{self, AD_ELEMENT_SELECTOR};
use crate::Options;

/// Per-selector extraction output, in selector order.
pub type SelectorResults = IndexMap<String, Vec<String>>;

/// Execute all selectors against the document.
///
/// Matches are truncated to the selector's `max_items` (the default cap
/// applies when it is zero) and taken in document order. Extracted values are
/// filtered of empty strings. `base_url`, when given, resolves relative link
/// targets the way a browser's `node.href` would.
#[must_use]
pub fn execute_selectors(
    doc: &Document,
    selectors: &[SelectorSpec],
    opts: &Options,
    base_url: Option<&str>,
) -> SelectorResults {
    let mut results = SelectorResults::new();

    for selector in selectors {
        let values = match run_selector(doc, selector, opts, base_url) {
            Some(values) => values,
            None => {
                warn!("selector {:?} failed to evaluate: {:?}", selector.name, selector.css);
                Vec::new()
            }
        };
        debug!("selector {:?} matched {} value(s)", selector.name, values.len());
        results.insert(selector.name.clone(), values);
    }

    results
}

/// Run one selector; `None` signals a recoverable evaluation failure.
fn run_selector(
    doc: &Document,
    selector: &SelectorSpec,
    opts: &Options,
    base_url: Option<&str>,
) -> Option<Vec<String>> {
    if selector.css.trim().is_empty() {
        return None;
    }
    let matched = dom::try_query_all(doc, &selector.css)?;

    let cap = if selector.max_items == 0 {
        opts.default_max_items
    } else {
        selector.max_items
    };

    let clean = patterns::is_content_selector(&selector.name);
    let mut values = Vec::new();
    for node in matched.nodes().iter().take(cap) {
        let sel = Selection::from(*node);
        let value = extract_value(&sel, clean, opts, base_url);
        if !value.is_empty() {
            values.push(value);
        }
    }
    Some(values)
}

/// Extract a single normalized string from a matched node.
///
/// Priority order: link target, form value, cleaned or raw text content.
fn extract_value(sel: &Selection, clean: bool, opts: &Options, base_url: Option<&str>) -> String {
    if let Some(href) = dom::get_attribute(sel, "href") {
        if !href.is_empty() {
            return resolve_link(&href, base_url);
        }
    }
    if let Some(value) = dom::get_attribute(sel, "value") {
        if !value.is_empty() {
            return value;
        }
    }

    if clean {
        content_text(sel, opts)
    } else {
        dom::text_content(sel).trim().to_string()
    }
}

/// Read text from a content-scoped node with script and advertisement
/// descendants removed.
///
/// By default the removal happens on a detached clone so the page keeps its
/// original tree across retries; `Options::clean_in_place` reproduces the
/// destructive live-tree variant (idempotent, since re-removing absent nodes
/// is a no-op).
fn content_text(sel: &Selection, opts: &Options) -> String {
    if opts.clean_in_place {
        sel.select("script").remove();
        sel.select(AD_ELEMENT_SELECTOR).remove();
        return patterns::clean_text(dom::text_content(sel).trim());
    }

    let clone = dom::clone_subtree(sel);
    clone.select("script").remove();
    clone.select(AD_ELEMENT_SELECTOR).remove();
    let body = clone.select("body");
    patterns::clean_text(dom::text_content(&body).trim())
}

/// Resolve a relative link target against the page URL.
///
/// Absolute targets are returned verbatim; resolution failures fall back to
/// the raw attribute value.
fn resolve_link(raw: &str, base_url: Option<&str>) -> String {
    if Url::parse(raw).is_ok() {
        return raw.to_string();
    }
    if let Some(base) = base_url {
        if let Ok(base) = Url::parse(base) {
            if let Ok(resolved) = base.join(raw) {
                return resolved.to_string();
            }
        }
    }
    raw.to_string()
}
