//! Snapshot builder.
//!
//! Walks the live element tree and produces an owned, size-bounded
//! `SnapshotNode` tree: tag name, a whitelisted attribute subset and a short
//! text prefix per element. The walk is a pure read of the document; all
//! later transformation happens on the owned copy, never on host state.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dom::{self, Document, Selection};
use crate::Options;

/// Attributes captured for every element.
const ATTR_WHITELIST: &[&str] = &["id", "class", "role", "href", "aria-label"];

/// Extra attributes captured for vector-graphic elements.
const GRAPHIC_ATTRS: &[&str] = &["width", "height", "viewBox"];

/// Tags treated as vector-graphic elements.
const GRAPHIC_TAGS: &[&str] = &[
    "svg", "path", "rect", "circle", "ellipse", "line", "polyline", "polygon", "g", "use",
    "symbol",
];

/// One element in a structural snapshot of the page.
///
/// `tag` is always lowercase; `text` holds only the element's direct text
/// (descendant text belongs to the descendants), trimmed and capped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNode {
    /// Lowercased tag name.
    pub tag: String,

    /// Whitelisted attributes, in capture order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: IndexMap<String, String>,

    /// Direct text content, trimmed and truncated.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    /// Child elements in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SnapshotNode>,
}

impl SnapshotNode {
    /// Create an empty node with the given tag (lowercased).
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            attrs: IndexMap::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Set the node text.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: SnapshotNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Truncate to a character prefix without splitting a code point.
fn prefix(text: &str, len: usize) -> String {
    if text.chars().count() <= len {
        text.to_string()
    } else {
        text.chars().take(len).collect()
    }
}

/// Capture a snapshot of the whole document.
///
/// Starts from `<body>`, falling back to the root element when the document
/// has no body. Returns `None` for a document without any element.
#[must_use]
pub fn capture(doc: &Document, opts: &Options) -> Option<SnapshotNode> {
    let body = doc.select("body");
    if body.exists() {
        return capture_element(&body, opts);
    }
    let html = doc.select("html");
    if html.exists() {
        return capture_element(&html, opts);
    }
    None
}

/// Capture a snapshot of a single element and its descendants.
///
/// Non-element nodes are skipped as standalone entries; their text is folded
/// into the nearest ancestor element's `text` field. Attribute reads that
/// fail or are absent are omitted, never fatal.
#[must_use]
pub fn capture_element(sel: &Selection, opts: &Options) -> Option<SnapshotNode> {
    let tag = dom::tag_name(sel)?;

    let mut attrs = IndexMap::new();
    for name in ATTR_WHITELIST {
        if let Some(value) = dom::get_attribute(sel, name) {
            if !value.is_empty() {
                attrs.insert((*name).to_string(), value);
            }
        }
    }
    if GRAPHIC_TAGS.contains(&tag.as_str()) {
        for name in GRAPHIC_ATTRS {
            if let Some(value) = dom::get_attribute(sel, name) {
                if !value.is_empty() {
                    attrs.insert((*name).to_string(), value);
                }
            }
        }
    }

    let text = prefix(dom::own_text(sel).trim(), opts.snapshot_text_len);

    let mut children = Vec::new();
    if let Some(node) = sel.nodes().first() {
        for child in node.children() {
            if child.is_element() {
                let child_sel = Selection::from(child);
                if let Some(snap) = capture_element(&child_sel, opts) {
                    children.push(snap);
                }
            }
        }
    }

    Some(SnapshotNode {
        tag,
        attrs,
        text,
        children,
    })
}
