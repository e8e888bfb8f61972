//! Anchor-based URL scanner over the structured (HTML) rendering

use crate::patterns::{is_accessible, is_url, trim_url};
use benchlink_domain::ContextMap;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, warn};

/// Collects `<a href>` targets together with the text around them
#[derive(Debug, Clone)]
pub struct AnchorScanner {
    sibling_radius: usize,
}

impl AnchorScanner {
    /// Create a scanner taking `sibling_radius` siblings on each side
    pub fn new(sibling_radius: usize) -> Self {
        Self { sibling_radius }
    }

    /// Scan `html` and map each URL-valued href to its context
    ///
    /// The context is the concatenated text of the anchor and its siblings
    /// under the same parent, with `<br>` contributing a line break.
    pub fn scan(&self, html: &str) -> ContextMap {
        let mut found = ContextMap::new();
        let document = Html::parse_document(html);
        let selector = match Selector::parse("a[href]") {
            Ok(s) => s,
            Err(e) => {
                warn!("Anchor selector failed to parse: {:?}", e);
                return found;
            }
        };

        for anchor in document.select(&selector) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            let href = trim_url(href);
            if !is_url(href) {
                continue;
            }
            if !is_accessible(href) {
                debug!("Rejected inaccessible anchor: {}", href);
                continue;
            }

            debug!("Anchor: {}", href);
            found.insert(href, self.sibling_context(anchor));
        }

        found
    }

    fn sibling_context(&self, anchor: ElementRef<'_>) -> String {
        let anchor_node = *anchor;
        let Some(parent) = anchor_node.parent() else {
            return anchor.text().collect();
        };

        let texts: Vec<String> = parent
            .children()
            .map(|node| match node.value() {
                Node::Text(text) => {
                    let s: &str = text;
                    s.to_string()
                }
                Node::Element(el) if el.name() == "br" => "\n".to_string(),
                Node::Element(_) => ElementRef::wrap(node)
                    .map(|el| el.text().collect())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .collect();

        let idx = parent
            .children()
            .position(|node| node.id() == anchor_node.id())
            .unwrap_or(0);
        let start = idx.saturating_sub(self.sibling_radius);
        let end = (idx + self.sibling_radius + 1).min(texts.len());

        texts[start..end].concat()
    }
}

impl Default for AnchorScanner {
    fn default() -> Self {
        Self::new(4)
    }
}
