//! Cross-module tests for the extractor

#[cfg(test)]
mod tests {
    use crate::{Extractor, ExtractorConfig};
    use benchlink_domain::RawDocument;

    const PAPER_TEXT: &str = "\
3 Experiments
We evaluate on the CIFAR-10 dataset, available at https://www.cs.
toronto.edu/~kriz/cifar.html). Our implementation builds on
PyTorch (https://pytorch.org/) and the code is at
https://github.com/someone/project-
code under the MIT license.";

    const PAPER_HTML: &str = r##"<html><body>
<p>We evaluate on the CIFAR-10 dataset, available at
<a href="https://www.cs.toronto.edu/~kriz/cifar.html">https://www.cs.toronto.edu/~kriz/cifar.html</a>.</p>
<p>Our implementation builds on PyTorch
(<a href="https://pytorch.org/">https://pytorch.org/</a>).</p>
<p><a href="#sec3">Section 3</a></p>
</body></html>"##;

    fn paper() -> RawDocument {
        RawDocument::from_text("paper_1", PAPER_TEXT).with_html(PAPER_HTML)
    }

    #[test]
    fn test_full_link_extraction() {
        let extractor = Extractor::default_config();
        let links = extractor.extract_links(&paper());

        let urls: Vec<&str> = links.candidates.urls().collect();
        assert_eq!(
            urls,
            vec![
                "https://www.cs.toronto.edu/~kriz/cifar.html",
                "https://pytorch.org",
                "https://github.com/someone/projectcode",
            ]
        );
        assert_eq!(links.from_text, 3);
        assert_eq!(links.from_anchors, 2);
    }

    #[test]
    fn test_both_scanners_contribute_contexts() {
        let extractor = Extractor::default_config();
        let links = extractor.extract_links(&paper());

        let contexts = links
            .candidates
            .get("https://www.cs.toronto.edu/~kriz/cifar.html")
            .unwrap();
        assert_eq!(contexts.len(), 2);
        assert!(contexts[0].contains("3 Experiments"));
        assert!(contexts[1].contains("available at"));
    }

    #[test]
    fn test_text_only_document() {
        let doc = RawDocument::from_text("paper_2", "Get it from https://zenodo.org/record/7/");
        let links = Extractor::default_config().extract_links(&doc);
        assert_eq!(links.from_anchors, 0);
        assert!(links.candidates.contains("https://zenodo.org/record/7"));
    }

    #[test]
    fn test_mentions_from_paper() {
        let mentions = Extractor::default_config().find_mentions(&paper());
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].name, "CIFAR-10");
        assert!(mentions[0].contexts[0].contains("We evaluate on the CIFAR-10 dataset,"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig {
            mention_context_markers: 0,
            ..ExtractorConfig::default()
        };
        assert!(Extractor::new(config).is_err());
    }

    #[test]
    fn test_empty_document() {
        let doc = RawDocument::from_text("empty", "");
        let extractor = Extractor::default_config();
        assert!(extractor.extract_links(&doc).candidates.is_empty());
        assert!(extractor.find_mentions(&doc).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use crate::{is_accessible, LineScanner};
    use proptest::prelude::*;

    fn line_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                "[a-z]{1,8}",
                Just("https://".to_string()),
                Just("http://".to_string()),
                Just("www.".to_string()),
                Just(".org/".to_string()),
                Just("-".to_string()),
                Just(" ".to_string()),
                Just(".".to_string()),
            ],
            0..12,
        )
        .prop_map(|parts| parts.concat())
    }

    fn url_line_strategy() -> impl Strategy<Value = String> {
        ("[a-z]{1,8}", prop_oneof![Just("org"), Just("com"), Just("edu")], "[a-z]{1,8}")
            .prop_map(|(host, tld, path)| format!("https://{}.{}/{}", host, tld, path))
    }

    fn prose_line_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            "[A-Z][a-z]{0,8}( [a-z]{1,8}){0,4}",
            "[a-z]{1,8}/[a-z]{1,8}( [a-z]{1,8}){0,3}",
            Just(String::new()),
        ]
    }

    proptest! {
        #[test]
        fn standalone_url_lines_are_recalled(
            lines in prop::collection::vec(
                prop_oneof![url_line_strategy(), prose_line_strategy()],
                0..8,
            )
        ) {
            let found = LineScanner::default().scan(&lines);
            for line in lines.iter().filter(|l| l.starts_with("https://")) {
                prop_assert!(found.contains(line), "{} lost from {:?}", line, lines);
            }
        }

        #[test]
        fn emitted_urls_are_accessible(lines in prop::collection::vec(line_strategy(), 0..6)) {
            let found = LineScanner::default().scan(&lines);
            for url in found.urls() {
                prop_assert!(is_accessible(url), "inaccessible URL emitted: {}", url);
                prop_assert!(url.matches("://").count() == 1, "glued URL emitted: {}", url);
            }
        }

        #[test]
        fn every_url_has_a_context(lines in prop::collection::vec(line_strategy(), 0..6)) {
            let found = LineScanner::default().scan(&lines);
            for (_, contexts) in found.iter() {
                prop_assert!(!contexts.is_empty());
            }
        }
    }
}
