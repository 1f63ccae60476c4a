//! Snapshot reducer.
//!
//! Collapses a raw snapshot tree into the minimal structural tree embedded in
//! the classifier prompt: structurally uninteresting wrappers are elided,
//! single-child chains collapse to their child, nesting depth is capped and
//! per-node text is bounded. Reduction is idempotent and never fails on
//! malformed input shapes; a node without a tag is simply elided.

use crate::snapshot::SnapshotNode;
use crate::Options;

/// Tag of the virtual root synthesized around disconnected top-level nodes.
/// Distinct from any element tag so the root itself is never tag-filtered.
pub const VIRTUAL_ROOT_TAG: &str = "#fragment";

/// Tag of the synthetic leaf that replaces a subtree cut by the depth cap.
pub const TEXT_LEAF_TAG: &str = "text";

/// Attributes retained on reduced nodes.
const REDUCED_ATTRS: &[&str] = &["id", "class", "role", "href"];

/// Semantically meaningful tags that survive reduction on their own.
const CONTENT_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "article", "section", "main", "li", "td", "th",
    "button", "input", "select", "textarea", "a", "em", "strong", "b", "i", "div", "span",
    TEXT_LEAF_TAG,
];

fn is_content_tag(tag: &str) -> bool {
    CONTENT_TAGS.contains(&tag)
}

/// Truncate to `max` characters, marking truncation with an ellipsis.
/// The marker counts against the cap.
fn bound_text(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Reduce a snapshot tree to its minimal content tree.
///
/// Returns `None` when nothing content-bearing survives. The result satisfies
/// the reduced-tree invariants: every leaf carries text, no collapsible
/// single-child wrapper remains, depth ≤ `Options::max_nesting_depth` and all
/// text ≤ `Options::max_text_length`.
#[must_use]
pub fn reduce(node: &SnapshotNode, opts: &Options) -> Option<SnapshotNode> {
    let reduced = reduce_node(node, opts)?;
    cap_depth(reduced, 0, opts.max_nesting_depth)
}

/// Reduce an array of disconnected top-level nodes.
///
/// The nodes are wrapped in a virtual root so the root itself is never
/// tag-filtered; a root left with a single surviving child collapses to that
/// child.
#[must_use]
pub fn reduce_forest(nodes: &[SnapshotNode], opts: &Options) -> Option<SnapshotNode> {
    if nodes.is_empty() {
        return None;
    }
    let root = SnapshotNode {
        tag: VIRTUAL_ROOT_TAG.to_string(),
        attrs: indexmap::IndexMap::new(),
        text: String::new(),
        children: nodes.to_vec(),
    };
    reduce(&root, opts)
}

fn narrow_attrs(node: &SnapshotNode) -> indexmap::IndexMap<String, String> {
    node.attrs
        .iter()
        .filter(|(k, _)| REDUCED_ATTRS.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn reduce_node(node: &SnapshotNode, opts: &Options) -> Option<SnapshotNode> {
    // Malformed node shape: elide, never fail.
    if node.tag.trim().is_empty() {
        return None;
    }
    let tag = node.tag.to_lowercase();

    let surviving: Vec<SnapshotNode> = node
        .children
        .iter()
        .filter_map(|child| reduce_node(child, opts))
        .collect();

    if tag == VIRTUAL_ROOT_TAG {
        return match surviving.len() {
            0 => None,
            1 => surviving.into_iter().next(),
            _ => Some(SnapshotNode {
                tag,
                attrs: indexmap::IndexMap::new(),
                text: String::new(),
                children: surviving,
            }),
        };
    }

    let content_bearing = is_content_tag(&tag);

    // Text on a non-leaf non-content node is dropped: it would duplicate
    // content that also appears in a kept child.
    let text = if content_bearing || surviving.is_empty() {
        bound_text(node.text.trim(), opts.max_text_length)
    } else {
        String::new()
    };

    if !content_bearing {
        // Wrapper elision: gone without survivors, transparent with one,
        // kept as a grouping node with two or more.
        return match surviving.len() {
            0 => None,
            1 => surviving.into_iter().next(),
            _ => Some(SnapshotNode {
                tag,
                attrs: narrow_attrs(node),
                text: String::new(),
                children: surviving,
            }),
        };
    }

    if surviving.is_empty() {
        if text.is_empty() {
            return None;
        }
        return Some(SnapshotNode {
            tag,
            attrs: narrow_attrs(node),
            text,
            children: Vec::new(),
        });
    }

    // Chain collapse: a content wrapper contributing no text of its own is
    // transparent around a single surviving child.
    if surviving.len() == 1 && text.is_empty() {
        return surviving.into_iter().next();
    }

    Some(SnapshotNode {
        tag,
        attrs: narrow_attrs(node),
        text,
        children: surviving,
    })
}

/// Second pass: enforce the nesting-depth bound.
///
/// A node at the cap that still has children loses its subtree and becomes a
/// synthetic text leaf carrying only its direct text (or is omitted without
/// text); leaves at the cap keep their tag. Wrappers emptied or left with a
/// single child by the cut are re-collapsed so capping preserves the
/// reduced-tree invariants.
fn cap_depth(node: SnapshotNode, depth: usize, max: usize) -> Option<SnapshotNode> {
    if node.children.is_empty() {
        return Some(node);
    }
    if depth >= max {
        if node.text.is_empty() {
            return None;
        }
        return Some(SnapshotNode {
            tag: TEXT_LEAF_TAG.to_string(),
            attrs: indexmap::IndexMap::new(),
            text: node.text,
            children: Vec::new(),
        });
    }

    let SnapshotNode {
        tag,
        attrs,
        text,
        children,
    } = node;
    let capped: Vec<SnapshotNode> = children
        .into_iter()
        .filter_map(|child| cap_depth(child, depth + 1, max))
        .collect();

    match (capped.len(), text.is_empty()) {
        (0, true) => None,
        (1, true) => capped.into_iter().next(),
        _ => Some(SnapshotNode {
            tag,
            attrs,
            text,
            children: capped,
        }),
    }
}
