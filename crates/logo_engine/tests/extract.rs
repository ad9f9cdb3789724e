use logo_engine::{extract_candidates, ImageCandidate};
use pretty_assertions::assert_eq;

#[test]
fn keeps_document_order_and_indexes() {
    let html = concat!(
        "<html><body>",
        "<img src=\"https://cdn.example/images/a.png\">",
        "<p>text</p>",
        "<img src=\"https://cdn.example/images/b.png\">",
        "<img src=\"https://cdn.example/images/c.png\">",
        "</body></html>",
    );

    let candidates = extract_candidates(html);
    assert_eq!(
        candidates,
        vec![
            ImageCandidate {
                source: Some("https://cdn.example/images/a.png".to_string()),
                index: 0,
            },
            ImageCandidate {
                source: Some("https://cdn.example/images/b.png".to_string()),
                index: 1,
            },
            ImageCandidate {
                source: Some("https://cdn.example/images/c.png".to_string()),
                index: 2,
            },
        ]
    );
}

#[test]
fn prefers_lazy_load_attribute_over_src() {
    let html = concat!(
        "<img src=\"data:image/gif;base64,PLACEHOLDER\" ",
        "data-src=\"https://cdn.example/images/real.png\">",
    );

    let candidates = extract_candidates(html);
    assert_eq!(
        candidates[0].source.as_deref(),
        Some("https://cdn.example/images/real.png")
    );
}

#[test]
fn records_missing_source_as_none() {
    let candidates = extract_candidates("<img alt=\"decorative\">");
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].source, None);
}

#[test]
fn empty_document_yields_no_candidates() {
    assert!(extract_candidates("<html><body><p>words</p></body></html>").is_empty());
}
