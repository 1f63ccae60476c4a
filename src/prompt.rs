//! Prompt formatter.
//!
//! Serializes a reduced snapshot tree plus the fixed category taxonomy into
//! the classification request payload. Pure functions, no I/O: the HTTP
//! transport and credentials belong to an external collaborator, the payload
//! content and response contract belong here.

use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::snapshot::SnapshotNode;
use crate::taxonomy;
use crate::Options;

/// Build the classification prompt for a reduced snapshot tree.
///
/// Fails with `Error::InvalidSnapshot` when reduction produced nothing
/// (`None`) or the root is structurally malformed (empty tag). This is the
/// unrecoverable "nothing to classify" condition.
pub fn build_prompt(tree: Option<&SnapshotNode>) -> Result<String> {
    let Some(root) = tree else {
        return Err(Error::InvalidSnapshot("reduction produced no tree".to_string()));
    };
    if root.tag.trim().is_empty() {
        return Err(Error::InvalidSnapshot("root node has no tag".to_string()));
    }

    let serialized = serde_json::to_string_pretty(root)
        .map_err(|e| Error::InvalidSnapshot(format!("snapshot not serializable: {e}")))?;

    let mut taxonomy_lines = String::new();
    taxonomy_lines.push_str("Content categories:\n");
    for (name, definition) in taxonomy::CONTENT_CATEGORIES {
        taxonomy_lines.push_str(&format!("- {name}: {definition}\n"));
    }
    taxonomy_lines.push_str("Ignore categories:\n");
    for (name, definition) in taxonomy::IGNORE_CATEGORIES {
        taxonomy_lines.push_str(&format!("- {name}: {definition}\n"));
    }

    Ok(format!(
        r#"Given this simplified DOM tree from a webpage, classify its structural regions into the fixed taxonomy below and return CSS selectors for each.

{taxonomy_lines}
Rules:
- Category names must be taken verbatim from the taxonomy.
- Omit categories that are not present on the page.
- Selectors must not be overly broad; prefer stable attributes (id, role) over volatile class names.
- maxItems must bound runaway matches.

Respond with a JSON object containing:
{{
  "selectors": [
    {{"name": "string", "css": "string", "maxItems": number}},
    ...
  ],
  "groups": {{
    "Page": ["selector_name1", "selector_name2", ...]
  }}
}}
"groups"."Page" lists category names in reading order.

Simplified DOM tree:
{serialized}"#
    ))
}

/// Build the full chat-completion request body around a prompt.
///
/// The transport collaborator posts this verbatim, adding only its own
/// authentication header.
#[must_use]
pub fn request_body(prompt: &str, opts: &Options) -> Value {
    json!({
        "model": opts.model,
        "messages": [{ "role": "user", "content": prompt }],
        "temperature": opts.temperature,
        "response_format": { "type": "json_object" }
    })
}

/// Build the connectivity self-test request body.
#[must_use]
pub fn ping_request_body(opts: &Options) -> Value {
    json!({
        "model": opts.model,
        "messages": [{ "role": "user", "content": "Say exactly: ok" }],
        "temperature": opts.temperature
    })
}

/// Check a connectivity self-test reply.
#[must_use]
pub fn is_ping_ok(reply: &str) -> bool {
    let content = reply.trim().to_lowercase();
    content == "ok" || content == "ok."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_embeds_tree_and_taxonomy() {
        let tree = SnapshotNode::new("body")
            .with_child(SnapshotNode::new("article").with_text("Hello world"));
        let prompt = build_prompt(Some(&tree)).expect("prompt");

        assert!(prompt.contains("\"tag\": \"article\""));
        assert!(prompt.contains("Hello world"));
        assert!(prompt.contains("main-text:"));
        assert!(prompt.contains("ignore-cookie-banner:"));
        assert!(prompt.contains("\"maxItems\": number"));
        assert!(prompt.contains("reading order"));
    }

    #[test]
    fn test_build_prompt_rejects_missing_tree() {
        assert!(matches!(build_prompt(None), Err(Error::InvalidSnapshot(_))));
    }

    #[test]
    fn test_build_prompt_rejects_malformed_root() {
        let tree = SnapshotNode::new("").with_text("x");
        assert!(matches!(build_prompt(Some(&tree)), Err(Error::InvalidSnapshot(_))));
    }

    #[test]
    fn test_request_body_shape() {
        let opts = Options::default();
        let body = request_body("classify this", &opts);

        assert_eq!(body["model"], "gpt-4-turbo-preview");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "classify this");
        assert_eq!(body["response_format"]["type"], "json_object");
    }

    #[test]
    fn test_ping_round_trip() {
        let opts = Options::default();
        let body = ping_request_body(&opts);
        assert_eq!(body["messages"][0]["content"], "Say exactly: ok");
        assert!(body.get("response_format").is_none());

        assert!(is_ping_ok("ok"));
        assert!(is_ping_ok(" OK. "));
        assert!(!is_ping_ok("okay"));
    }
}
