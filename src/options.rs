//! Configuration options for the extraction pipeline.
//!
//! The `Options` struct carries the size bounds, classifier parameters and
//! behavior toggles for a single extraction cycle. Use `Default::default()`
//! for the reference settings.

/// Configuration options for an extraction cycle.
///
/// All fields are public for easy configuration.
///
/// # Example
///
/// ```rust
/// use domsift::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     max_nesting_depth: 8,
///     debug_overlay: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Text prefix length captured per element during the snapshot walk.
    ///
    /// The walk runs against a potentially huge live tree, so this cap is
    /// deliberately smaller than `max_text_length`.
    ///
    /// Default: `40`
    pub snapshot_text_len: usize,

    /// Maximum text length per node in the reduced tree (characters,
    /// including the `…` truncation marker).
    ///
    /// Default: `160`
    pub max_text_length: usize,

    /// Maximum nesting depth of the reduced tree, counted from the
    /// reduction root at depth 0.
    ///
    /// Default: `12`
    pub max_nesting_depth: usize,

    /// Cap on matched nodes per selector when the classifier supplies no
    /// positive `maxItems`.
    ///
    /// Default: `30`
    pub default_max_items: usize,

    /// Clean content text by mutating the live document instead of a
    /// detached clone of the matched subtree.
    ///
    /// The detached-clone default leaves the page untouched; the in-place
    /// variant reproduces the destructive reference behavior (idempotent on
    /// retry, since re-removing absent nodes is a no-op).
    ///
    /// Default: `false`
    pub clean_in_place: bool,

    /// Annotate matched nodes in the document with category-coded debug
    /// markers after classification.
    ///
    /// Default: `false`
    pub debug_overlay: bool,

    /// Model name embedded in the classifier request payload.
    ///
    /// Default: `"gpt-4-turbo-preview"`
    pub model: String,

    /// Sampling temperature embedded in the classifier request payload.
    ///
    /// Default: `0.1`
    pub temperature: f64,

    /// Time bound the classifier transport must apply, in seconds.
    ///
    /// The core does not run the transport; implementors map an exceeded
    /// bound to `Error::ClassificationTimeout`.
    ///
    /// Default: `60`
    pub classification_timeout_secs: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            snapshot_text_len: 40,
            max_text_length: 160,
            max_nesting_depth: 12,
            default_max_items: 30,
            clean_in_place: false,
            debug_overlay: false,
            model: "gpt-4-turbo-preview".to_string(),
            temperature: 0.1,
            classification_timeout_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.snapshot_text_len, 40);
        assert_eq!(opts.max_text_length, 160);
        assert_eq!(opts.max_nesting_depth, 12);
        assert_eq!(opts.default_max_items, 30);
        assert!(!opts.clean_in_place);
        assert!(!opts.debug_overlay);
        assert_eq!(opts.model, "gpt-4-turbo-preview");
        assert!((opts.temperature - 0.1).abs() < f64::EPSILON);
        assert_eq!(opts.classification_timeout_secs, 60);
    }

    #[test]
    fn test_snapshot_cap_is_smaller_than_reducer_cap() {
        let opts = Options::default();
        assert!(opts.snapshot_text_len < opts.max_text_length);
    }

    #[test]
    fn test_custom_bounds() {
        let opts = Options {
            max_nesting_depth: 6,
            max_text_length: 80,
            default_max_items: 10,
            ..Options::default()
        };

        assert_eq!(opts.max_nesting_depth, 6);
        assert_eq!(opts.max_text_length, 80);
        assert_eq!(opts.default_max_items, 10);
    }
}
