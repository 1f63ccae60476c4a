//! DOM operations adapter.
//!
//! Thin wrappers over the `dom_query` crate covering the handful of
//! operations the pipeline needs: attribute reads, tag names, direct-text
//! reads, fallible CSS querying, class-list edits and detached clones.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get any attribute value.
///
/// Returns `None` for absent attributes or empty selections; never fails.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value.
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Remove an attribute.
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_lowercase())
}

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get the text of the element's direct text-node children only.
///
/// Descendant element text is not included; it belongs to the descendants
/// themselves in the snapshot model.
#[must_use]
pub fn own_text(sel: &Selection) -> String {
    let mut out = String::new();
    let Some(node) = sel.nodes().first() else {
        return out;
    };
    for child in node.children() {
        if child.is_text() {
            out.push_str(&child.text());
        }
    }
    out
}

/// Query all elements by CSS selector, tolerating invalid expressions.
///
/// Returns `None` when the selector expression fails to compile, so a bad
/// selector can degrade locally instead of panicking.
#[inline]
#[must_use]
pub fn try_query_all<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.try_select(selector)
}

/// Add a class token to an element's `class` attribute.
///
/// No-op when the token is already present.
pub fn add_class(sel: &Selection, class: &str) {
    let current = get_attribute(sel, "class").unwrap_or_default();
    if current.split_whitespace().any(|c| c == class) {
        return;
    }
    let updated = if current.trim().is_empty() {
        class.to_string()
    } else {
        format!("{} {class}", current.trim())
    };
    set_attribute(sel, "class", &updated);
}

/// Remove class tokens matching a prefix from an element's `class` attribute.
///
/// Drops the attribute entirely when nothing remains.
pub fn remove_class_prefix(sel: &Selection, prefix: &str) {
    let Some(current) = get_attribute(sel, "class") else {
        return;
    };
    let kept: Vec<&str> = current
        .split_whitespace()
        .filter(|c| !c.starts_with(prefix))
        .collect();
    if kept.is_empty() {
        remove_attribute(sel, "class");
    } else {
        set_attribute(sel, "class", &kept.join(" "));
    }
}

/// Clone a matched element into a detached document.
///
/// The clone preserves the whole subtree; mutating it leaves the source
/// document untouched.
#[must_use]
pub fn clone_subtree(sel: &Selection) -> Document {
    Document::from(sel.html().to_string())
}
