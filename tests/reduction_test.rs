use domsift::snapshot::SnapshotNode;
use domsift::{dom, reduce, snapshot, Options};

fn snapshot_of(html: &str, opts: &Options) -> SnapshotNode {
    let doc = dom::parse(html);
    snapshot::capture(&doc, opts).expect("snapshot")
}

/// Nesting level of the deepest node, counted in edges from the root.
fn depth(node: &SnapshotNode) -> usize {
    node.children.iter().map(depth).max().map_or(0, |d| d + 1)
}

fn max_text_len(node: &SnapshotNode) -> usize {
    let own = node.text.chars().count();
    node.children.iter().map(max_text_len).max().unwrap_or(0).max(own)
}

/// Reducing an already reduced tree changes nothing.
#[test]
fn reduction_is_idempotent() {
    let html = r#"
        <html><body>
            <div class="wrapper"><div><article>
                <h1>Title</h1>
                <div><div><p>Deeply wrapped paragraph text.</p></div></div>
                <ul><li>one</li><li>two</li></ul>
            </article></div></div>
            <nav><a href="/a">A</a><a href="/b">B</a></nav>
        </body></html>
    "#;
    let opts = Options::default();

    let once = reduce::reduce(&snapshot_of(html, &opts), &opts).expect("reduced");
    let twice = reduce::reduce(&once, &opts).expect("reduced again");

    assert_eq!(once, twice);
}

/// A reduced tree never exceeds the configured nesting depth.
#[test]
fn reduction_respects_depth_bound() {
    let mut html = String::from("<body>");
    for i in 0..30 {
        html.push_str(&format!("<div id=\"d{i}\">t{i}"));
    }
    html.push_str("<p>innermost</p>");
    for _ in 0..30 {
        html.push_str("</div>");
    }
    html.push_str("</body>");

    let opts = Options::default();
    let reduced = reduce::reduce(&snapshot_of(&html, &opts), &opts).expect("reduced");

    assert!(depth(&reduced) <= opts.max_nesting_depth);
    // Still idempotent after the cap kicked in.
    assert_eq!(reduce::reduce(&reduced, &opts), Some(reduced.clone()));
}

/// Text fields in the reduced tree stay within the length cap.
#[test]
fn reduction_respects_text_bound() {
    let long = "word ".repeat(100);
    let html = format!("<body><article><p>{long}</p><p>short</p></article></body>");

    let opts = Options::default();
    let reduced = reduce::reduce(&snapshot_of(&html, &opts), &opts).expect("reduced");

    assert!(max_text_len(&reduced) <= opts.max_text_length);
}

/// Wrapper chains with a single surviving child and no text of their own
/// collapse down to the child.
#[test]
fn single_child_wrapper_chains_collapse() {
    let html = r#"<body><div><div><p>x</p></div></div></body>"#;
    let opts = Options::default();
    let reduced = reduce::reduce(&snapshot_of(html, &opts), &opts).expect("reduced");

    assert_eq!(reduced.tag, "p");
    assert_eq!(reduced.text, "x");
    assert!(reduced.children.is_empty());
}

/// Pages made entirely of non-content markup reduce to nothing.
#[test]
fn non_content_page_reduces_to_none() {
    let html = r#"<body><script>f();</script><style>p{}</style></body>"#;
    let opts = Options::default();
    let doc = dom::parse(html);
    let reduced = snapshot::capture(&doc, &opts)
        .and_then(|tree| reduce::reduce(&tree, &opts));

    assert!(reduced.is_none());
}

/// Attribute narrowing: snapshot attrs outside the reduced whitelist drop.
#[test]
fn reduction_narrows_attributes() {
    let html = r#"<body><a href="/x" id="link" data-track="yes" aria-label="go">go</a></body>"#;
    let opts = Options::default();
    let reduced = reduce::reduce(&snapshot_of(html, &opts), &opts).expect("reduced");

    assert_eq!(reduced.tag, "a");
    assert_eq!(reduced.attrs.get("href").map(String::as_str), Some("/x"));
    assert_eq!(reduced.attrs.get("id").map(String::as_str), Some("link"));
    assert!(!reduced.attrs.contains_key("data-track"));
    assert!(!reduced.attrs.contains_key("aria-label"));
}
