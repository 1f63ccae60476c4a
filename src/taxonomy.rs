//! The fixed category taxonomy for structural classification.
//!
//! The classifier must label every selector with one of these category names,
//! taken verbatim. Content categories name regions worth extracting; ignore
//! categories name regions the classifier should mark so they can be skipped
//! or highlighted in debug mode.

/// Content categories with their prompt definitions.
pub const CONTENT_CATEGORIES: &[(&str, &str)] = &[
    ("main-text", "primary article or body text of the page"),
    ("main-table", "data tables that are part of the primary content"),
    ("main-widget", "interactive widgets central to the page's purpose"),
    ("contextual", "secondary content related to the main content (asides, infoboxes)"),
    ("nav", "navigation menus, breadcrumbs and pagination"),
    ("controls", "buttons, forms and input controls"),
    ("branding", "logos, mastheads and site identity"),
    ("comments", "user comment sections"),
    ("utility", "search boxes, language switchers, accessibility helpers"),
];

/// Ignore categories with their prompt definitions.
pub const IGNORE_CATEGORIES: &[(&str, &str)] = &[
    ("ignore-ad", "advertisements and sponsored slots"),
    ("ignore-tracker", "tracking pixels and analytics markup"),
    ("ignore-decorative", "purely decorative elements"),
    ("ignore-cookie-banner", "cookie or consent banners"),
    ("ignore-popover", "popovers, modals and overlays"),
    ("ignore-skeleton", "loading skeletons"),
    ("ignore-placeholder", "empty placeholder containers"),
    ("ignore-print-only", "print-only content"),
    ("ignore-offscreen", "visually hidden or offscreen elements"),
];

/// All category names, content first, in taxonomy order.
#[must_use]
pub fn all_names() -> Vec<&'static str> {
    CONTENT_CATEGORIES
        .iter()
        .chain(IGNORE_CATEGORIES.iter())
        .map(|(name, _)| *name)
        .collect()
}

/// True when the category marks a region to be skipped rather than extracted.
#[must_use]
pub fn is_ignore(name: &str) -> bool {
    name.starts_with("ignore-")
}

/// True when the name belongs to the fixed taxonomy.
#[must_use]
pub fn is_known(name: &str) -> bool {
    CONTENT_CATEGORIES
        .iter()
        .chain(IGNORE_CATEGORIES.iter())
        .any(|(n, _)| *n == name)
}
