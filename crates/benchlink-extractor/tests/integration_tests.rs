//! Integration tests for URL and mention extraction

use benchlink_domain::RawDocument;
use benchlink_extractor::{
    is_accessible, reconcile, AnchorScanner, DatasetNameFinder, Extractor, LineScanner,
};

#[test]
fn test_hyphen_wrapped_url_is_rejoined() {
    let found = LineScanner::default().scan(&["See https://a.com/x-", "y for details"]);
    let urls: Vec<&str> = found.urls().collect();
    assert_eq!(urls, vec!["https://a.com/xy"]);
}

#[test]
fn test_unrepaired_hyphen_url_never_emitted() {
    let found = LineScanner::default().scan(&["See https://a.com/x-"]);
    assert!(found.is_empty());
}

#[test]
fn test_no_emitted_url_has_two_schemes() {
    let lines = [
        "https://a.org/datahttps://b.org/more",
        "links: https://c.org/x https://d.org/y",
    ];
    let found = LineScanner::default().scan(&lines);
    let urls: Vec<&str> = found.urls().collect();
    assert_eq!(urls, vec!["https://c.org/x", "https://d.org/y"]);
    assert!(urls.iter().all(|u| is_accessible(u)));
}

#[test]
fn test_dataset_name_extracted() {
    let mentions = DatasetNameFinder::default().find(&["Results on the CIFAR-10 dataset."]);
    assert_eq!(mentions.len(), 1);
    assert_eq!(mentions[0].name, "CIFAR-10");
}

#[test]
fn test_slash_variants_collapse() {
    let text = LineScanner::default().scan(&["https://zenodo.org/record/1/ and later"]);
    let anchors =
        AnchorScanner::default().scan(r#"<p><a href="https://zenodo.org/record/1">r</a></p>"#);
    let merged = reconcile(&text, &anchors);

    assert_eq!(merged.candidates.len(), 1);
    assert_eq!(merged.candidates.get("https://zenodo.org/record/1").unwrap().len(), 2);
}

#[test]
fn test_extractor_over_document() {
    let doc = RawDocument::from_text(
        "abc123",
        "We benchmark on our GLUE subset dataset.\nData: https://gluebenchmark.com/tasks",
    )
    .with_html(r#"<p>Data: <a href="https://gluebenchmark.com/tasks/">tasks</a></p>"#);

    let extractor = Extractor::default_config();
    let links = extractor.extract_links(&doc);
    assert_eq!(links.from_text, 1);
    assert_eq!(links.from_anchors, 1);
    assert_eq!(links.candidates.len(), 1);

    let mentions = extractor.find_mentions(&doc);
    assert_eq!(mentions[0].name, "GLUE subset");
}
