//! Compiled regex patterns for content-text cleaning.
//!
//! All patterns are compiled once at startup using `LazyLock`. The cleaning
//! pipeline targets script fragments and advertisement markers that leak into
//! text reads of content regions, then normalizes whitespace.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Script-fragment patterns
// =============================================================================

/// Matches inline conditional blocks (`if (...) {...}`) embedded in text.
pub static CONDITIONAL_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"if\s*\([^)]*\)\s*\{[^}]*\}").expect("CONDITIONAL_BLOCK regex")
});

/// Matches global-object statements (`window.… ;`).
pub static WINDOW_STATEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"window\.[^;]*;").expect("WINDOW_STATEMENT regex"));

/// Matches console-logging statements (`console.… ;`).
pub static CONSOLE_STATEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"console\.[^;]*;").expect("CONSOLE_STATEMENT regex"));

// =============================================================================
// Advertisement-marker patterns
// =============================================================================

/// Matches ad-insertion helper calls left behind by ad scripts.
pub static AD_INSERT_STATEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Strike\.insertAd[^;]*;").expect("AD_INSERT_STATEMENT regex"));

/// Matches `ad-` prefixed marker tokens.
pub static AD_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"ad-[^"'\s]*"#).expect("AD_MARKER regex"));

// =============================================================================
// Whitespace normalization
// =============================================================================

/// Matches runs of three or more (possibly indented) newlines.
pub static MULTIPLE_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").expect("MULTIPLE_BLANK_LINES regex"));

/// Matches whitespace runs of two or more characters.
pub static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("WHITESPACE_RUNS regex"));

/// CSS selector matching advertisement-flagged descendants by id/class
/// substring heuristics.
pub const AD_ELEMENT_SELECTOR: &str =
    r#"[class*="ad-"], [id*="ad-"], [class*="advertisement"], [id*="advertisement"]"#;

/// Clean extracted content text.
///
/// Removes embedded script-like fragments and advertisement markers, then
/// collapses repeated blank lines and whitespace runs. Only applied to
/// selectors with body/content semantics; other selectors keep raw text.
#[must_use]
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = CONDITIONAL_BLOCK.replace_all(text, "");
    let text = WINDOW_STATEMENT.replace_all(&text, "");
    let text = CONSOLE_STATEMENT.replace_all(&text, "");
    let text = AD_INSERT_STATEMENT.replace_all(&text, "");
    let text = AD_MARKER.replace_all(&text, "");
    let text = MULTIPLE_BLANK_LINES.replace_all(&text, "\n\n");
    let text = WHITESPACE_RUNS.replace_all(&text, " ");

    text.trim().to_string()
}

/// True when a selector name indicates body/content semantics.
///
/// Cleaning is name-scoped: the designated article-body label and any name
/// containing a "content" substring get the cleaning pipeline; everything
/// else reads raw trimmed text.
#[must_use]
pub fn is_content_selector(name: &str) -> bool {
    name == "Article Body" || name.to_ascii_lowercase().contains("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_removes_console_statements() {
        let cleaned = clean_text("Before console.log('noise'); after");
        assert_eq!(cleaned, "Before after");
    }

    #[test]
    fn clean_text_removes_conditional_blocks() {
        let cleaned = clean_text("keep if (x > 1) { doThing(); } this");
        assert_eq!(cleaned, "keep this");
    }

    #[test]
    fn clean_text_removes_window_and_ad_statements() {
        let cleaned = clean_text("a window.dataLayer.push(1); b Strike.insertAd('slot'); c");
        assert_eq!(cleaned, "a b c");
    }

    #[test]
    fn clean_text_strips_ad_marker_tokens() {
        let cleaned = clean_text("text ad-banner-300x250 more");
        assert_eq!(cleaned, "text more");
    }

    #[test]
    fn clean_text_collapses_whitespace() {
        let cleaned = clean_text("one   two\n\n\n\nthree");
        assert_eq!(cleaned, "one two three");
    }

    #[test]
    fn clean_text_empty_input() {
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn content_selector_names() {
        assert!(is_content_selector("Article Body"));
        assert!(is_content_selector("Page Content"));
        assert!(is_content_selector("main content area"));
        assert!(!is_content_selector("Nav Links"));
        assert!(!is_content_selector("branding"));
    }
}
