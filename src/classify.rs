//! Classification result types and response parsing.
//!
//! The external classifier returns a JSON object of selectors and groups.
//! Parsing is deliberately lenient: a wholly unparsable payload fails with
//! `Error::ClassificationParse`, but individually absent or malformed fields
//! degrade to empty defaults so one bad entry never discards the rest.

use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Time bound for the external classification round-trip.
///
/// The core does not run the transport; implementors of [`Classifier`] must
/// cancel an in-flight request past this bound and return
/// `Error::ClassificationTimeout`.
pub const CLASSIFICATION_TIMEOUT: Duration = Duration::from_secs(60);

/// One classifier-supplied selector: a category label, a CSS expression and
/// an item cap. Must be validated before execution; a malformed or empty
/// `css` degrades that single selector to an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorSpec {
    /// Category label, unique within a response.
    pub name: String,

    /// CSS selector expression.
    pub css: String,

    /// Cap on matched nodes; zero means "use the default cap".
    #[serde(rename = "maxItems", default)]
    pub max_items: usize,
}

/// Ordered mapping of group name to selector names, defining presentation
/// order of the extracted content.
pub type GroupMap = IndexMap<String, Vec<String>>;

/// Parsed, validated classifier response.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Classification {
    /// Selectors to execute, in response order.
    pub selectors: Vec<SelectorSpec>,

    /// Presentation groups; selector names absent from every group are still
    /// executed, their output retained only in the flat result.
    pub groups: GroupMap,
}

/// The external classifier boundary.
///
/// Implementors own transport, authentication and the time bound, and map
/// their failures onto `Error::ClassificationTimeout` /
/// `Error::ClassificationTransport`. The returned string is the raw response
/// payload handed to [`parse_classification`].
pub trait Classifier {
    fn classify(&self, prompt: &str) -> Result<String>;
}

/// Parse a raw classifier response.
///
/// Fails only when the payload is not a JSON object at all; absent or
/// malformed `selectors`/`groups` fields default to empty, entries missing
/// `name` or `css` are skipped, and a non-numeric `maxItems` becomes zero
/// (the executor's default cap applies).
pub fn parse_classification(raw: &str) -> Result<Classification> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| Error::ClassificationParse(e.to_string()))?;
    let Some(object) = value.as_object() else {
        return Err(Error::ClassificationParse("response is not a JSON object".to_string()));
    };

    let mut selectors = Vec::new();
    if let Some(entries) = object.get("selectors").and_then(Value::as_array) {
        for entry in entries {
            let Some(name) = entry.get("name").and_then(Value::as_str) else {
                continue;
            };
            let Some(css) = entry.get("css").and_then(Value::as_str) else {
                continue;
            };
            let max_items = entry
                .get("maxItems")
                .and_then(Value::as_u64)
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(0);
            selectors.push(SelectorSpec {
                name: name.to_string(),
                css: css.to_string(),
                max_items,
            });
        }
    }

    let mut groups = GroupMap::new();
    if let Some(entries) = object.get("groups").and_then(Value::as_object) {
        for (group_name, members) in entries {
            let Some(members) = members.as_array() else {
                continue;
            };
            let names: Vec<String> = members
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
            groups.insert(group_name.clone(), names);
        }
    }

    Ok(Classification { selectors, groups })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_response() {
        let raw = r#"{
            "selectors": [
                {"name": "main-text", "css": "article", "maxItems": 1},
                {"name": "nav", "css": "nav a", "maxItems": 5}
            ],
            "groups": {"Page": ["main-text", "nav"]}
        }"#;
        let parsed = parse_classification(raw).expect("parsed");

        assert_eq!(parsed.selectors.len(), 2);
        assert_eq!(parsed.selectors[0].name, "main-text");
        assert_eq!(parsed.selectors[0].max_items, 1);
        assert_eq!(parsed.groups["Page"], vec!["main-text", "nav"]);
    }

    #[test]
    fn test_unparsable_payload_fails() {
        assert!(matches!(
            parse_classification("not json"),
            Err(Error::ClassificationParse(_))
        ));
        assert!(matches!(
            parse_classification("[1, 2]"),
            Err(Error::ClassificationParse(_))
        ));
    }

    #[test]
    fn test_absent_fields_default_to_empty() {
        let parsed = parse_classification("{}").expect("parsed");
        assert!(parsed.selectors.is_empty());
        assert!(parsed.groups.is_empty());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let raw = r#"{
            "selectors": [
                {"name": "ok", "css": "p"},
                {"name": "no-css"},
                {"css": "div"},
                {"name": "bad-cap", "css": "span", "maxItems": "lots"}
            ],
            "groups": {"Page": ["ok", 7], "Broken": "not-a-list"}
        }"#;
        let parsed = parse_classification(raw).expect("parsed");

        assert_eq!(parsed.selectors.len(), 2);
        assert_eq!(parsed.selectors[0].name, "ok");
        assert_eq!(parsed.selectors[0].max_items, 0);
        assert_eq!(parsed.selectors[1].name, "bad-cap");
        assert_eq!(parsed.selectors[1].max_items, 0);
        assert_eq!(parsed.groups.len(), 1);
        assert_eq!(parsed.groups["Page"], vec!["ok"]);
    }

    #[test]
    fn test_group_order_preserved() {
        let raw = r#"{"groups": {"Zeta": [], "Alpha": [], "Mid": []}}"#;
        let parsed = parse_classification(raw).expect("parsed");
        let order: Vec<&String> = parsed.groups.keys().collect();
        assert_eq!(order, ["Zeta", "Alpha", "Mid"]);
    }
}
