//! Debug overlay.
//!
//! When debug mode is enabled, the classifier's selector list is rendered
//! into the page as category-coded highlighting plus a fixed legend. The
//! overlay is purely observational (no effect on the extraction result) and
//! fully reversible: [`clear`] removes every class, attribute, style block
//! and legend element it added, and runs before each new application.

use log::debug;

use crate::classify::SelectorSpec;
use crate::dom::{self, Document, Selection};
use crate::taxonomy;

const CLASS_PREFIX: &str = "domsift-debug-";
const STYLE_ID: &str = "domsift-debug-styles";
const LEGEND_ID: &str = "domsift-debug-legend";

/// Highlight buckets and their overlay colors.
const DEBUG_COLORS: &[(&str, &str)] = &[
    ("main-text", "rgba(144, 238, 144, 0.3)"),
    ("main-widget", "rgba(144, 238, 144, 0.3)"),
    ("branding", "rgba(255, 255, 0, 0.3)"),
    ("nav", "rgba(173, 216, 230, 0.3)"),
    ("ignore", "rgba(255, 0, 0, 0.3)"),
];

/// Map a category name onto a highlight bucket.
fn bucket_for(name: &str) -> &'static str {
    if taxonomy::is_ignore(name) {
        return "ignore";
    }
    match name {
        "main-text" => "main-text",
        "main-widget" => "main-widget",
        "branding" => "branding",
        "nav" => "nav",
        _ => "ignore",
    }
}

fn style_block() -> String {
    let mut rules = String::new();
    for (bucket, color) in DEBUG_COLORS {
        let outline = color.replace("0.3", "0.8");
        rules.push_str(&format!(
            ".{CLASS_PREFIX}{bucket} {{ background-color: {color} !important; outline: 2px solid {outline} !important; }}\n"
        ));
    }
    rules.push_str(&format!(
        "#{LEGEND_ID} {{ position: fixed; bottom: 20px; right: 20px; background: white; padding: 10px; border-radius: 5px; box-shadow: 0 2px 5px rgba(0,0,0,0.2); font-family: Arial, sans-serif; font-size: 12px; z-index: 2147483647; }}\n"
    ));
    format!(r#"<style id="{STYLE_ID}">{rules}</style>"#)
}

fn legend_block() -> String {
    let mut items = String::new();
    for (bucket, color) in DEBUG_COLORS {
        items.push_str(&format!(
            r#"<div class="legend-item"><span class="color-swatch" style="background-color: {color}"></span>{bucket}</div>"#
        ));
    }
    format!(r#"<div id="{LEGEND_ID}">{items}</div>"#)
}

/// Annotate matched nodes with category-coded debug markers and a legend.
///
/// Selectors that fail to evaluate are skipped, like everywhere else.
pub fn apply(doc: &Document, selectors: &[SelectorSpec]) {
    clear(doc);

    let head = doc.select("head");
    if head.exists() {
        head.append_html(style_block().as_str());
    }

    for selector in selectors {
        let Some(matched) = dom::try_query_all(doc, &selector.css) else {
            debug!("overlay: skipping selector {:?}", selector.name);
            continue;
        };
        let bucket = bucket_for(&selector.name);
        for node in matched.nodes() {
            let sel = Selection::from(*node);
            dom::add_class(&sel, &format!("{CLASS_PREFIX}{bucket}"));
            dom::add_class(&sel, &format!("{CLASS_PREFIX}element"));
            dom::set_attribute(&sel, "data-domsift-category", &selector.name);
            dom::set_attribute(&sel, "data-domsift-selector", &selector.css);
        }
    }

    let body = doc.select("body");
    if body.exists() {
        body.append_html(legend_block().as_str());
    }
}

/// Remove every marker the overlay added, restoring the page.
pub fn clear(doc: &Document) {
    let marked = doc.select(&format!(r#"[class*="{CLASS_PREFIX}"]"#));
    for node in marked.nodes() {
        let sel = Selection::from(*node);
        dom::remove_class_prefix(&sel, CLASS_PREFIX);
        dom::remove_attribute(&sel, "data-domsift-category");
        dom::remove_attribute(&sel, "data-domsift-selector");
    }
    doc.select(&format!("#{LEGEND_ID}")).remove();
    doc.select(&format!("#{STYLE_ID}")).remove();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, css: &str) -> SelectorSpec {
        SelectorSpec {
            name: name.to_string(),
            css: css.to_string(),
            max_items: 0,
        }
    }

    #[test]
    fn test_apply_marks_matches_and_adds_legend() {
        let doc = dom::parse(
            "<html><head></head><body><article>a</article><nav>n</nav></body></html>",
        );
        apply(&doc, &[spec("main-text", "article"), spec("nav", "nav")]);

        let article = doc.select("article");
        assert!(dom::get_attribute(&article, "class")
            .is_some_and(|c| c.contains("domsift-debug-main-text")));
        assert_eq!(
            dom::get_attribute(&article, "data-domsift-category"),
            Some("main-text".to_string())
        );
        assert!(doc.select("#domsift-debug-legend").exists());
        assert!(doc.select("#domsift-debug-styles").exists());
    }

    #[test]
    fn test_ignore_categories_use_ignore_bucket() {
        let doc = dom::parse("<html><head></head><body><div class=\"banner\">x</div></body></html>");
        apply(&doc, &[spec("ignore-cookie-banner", ".banner")]);

        let div = doc.select(".banner");
        assert!(dom::get_attribute(&div, "class")
            .is_some_and(|c| c.contains("domsift-debug-ignore")));
    }

    #[test]
    fn test_clear_is_fully_reversible() {
        let html = r#"<html><head></head><body><article class="story">a</article></body></html>"#;
        let doc = dom::parse(html);

        apply(&doc, &[spec("main-text", "article")]);
        clear(&doc);

        let article = doc.select("article");
        assert_eq!(dom::get_attribute(&article, "class"), Some("story".to_string()));
        assert_eq!(dom::get_attribute(&article, "data-domsift-category"), None);
        assert!(doc.select("#domsift-debug-legend").is_empty());
        assert!(doc.select("#domsift-debug-styles").is_empty());
    }

    #[test]
    fn test_apply_twice_does_not_stack_markers() {
        let doc = dom::parse("<html><head></head><body><nav>n</nav></body></html>");
        apply(&doc, &[spec("nav", "nav")]);
        apply(&doc, &[spec("nav", "nav")]);

        assert_eq!(doc.select("#domsift-debug-legend").length(), 1);
        assert_eq!(doc.select("#domsift-debug-styles").length(), 1);
        let class = dom::get_attribute(&doc.select("nav"), "class").unwrap_or_default();
        assert_eq!(class.matches("domsift-debug-nav").count(), 1);
    }

    #[test]
    fn test_invalid_selector_is_skipped() {
        let doc = dom::parse("<html><head></head><body><p>x</p></body></html>");
        apply(&doc, &[spec("nav", "p[[[")]);
        assert!(doc.select("#domsift-debug-legend").exists());
    }
}
