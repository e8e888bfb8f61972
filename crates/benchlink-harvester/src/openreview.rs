//! OpenReview conference listing
//!
//! A conference index URL such as
//! `https://openreview.net/group?id=ICLR.cc/2025/Conference#tab-accept-oral`
//! names a venue page and one of its tabs. The page embeds its tab
//! definitions as JSON in a `__NEXT_DATA__` script; the selected tab's query
//! gives the venue to page through on the notes API.

use crate::HarvestError;
use benchlink_domain::traits::DocumentSource;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Default notes API base
pub const DEFAULT_API_BASE: &str = "https://api2.openreview.net";

const PDF_BASE: &str = "https://openreview.net/pdf?id=";

const NOTE_DETAILS: &str = "replyCount,presentation,writable";

/// Venue filter resolved from the index page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueQuery {
    /// Content field to filter on (`venue` or `venueid`)
    pub key: String,
    /// Value of that field
    pub venue: String,
    /// Group domain, e.g. `ICLR.cc/2025/Conference`
    pub domain: String,
}

#[derive(Debug, Deserialize)]
struct NotesPage {
    count: usize,
    notes: Vec<Note>,
}

#[derive(Debug, Deserialize)]
struct Note {
    id: String,
}

/// Lists paper PDFs for an OpenReview conference tab
pub struct OpenReviewSource {
    client: reqwest::blocking::Client,
    api_base: String,
    page_size: usize,
}

impl OpenReviewSource {
    /// Create a source with the given request timeout and API page size
    pub fn new(timeout: Duration, page_size: usize) -> Result<Self, HarvestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HarvestError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: page_size.max(1),
        })
    }

    /// Use a different notes API base
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn get_text(&self, url: &str) -> Result<String, HarvestError> {
        debug!("GET {}", url);
        let body = self.client.get(url).send()?.error_for_status()?.text()?;
        Ok(body)
    }

    /// Append PDF URLs for `index_url` to `out`, stopping at the first failure
    fn collect(&self, index_url: &str, out: &mut Vec<String>) -> Result<(), HarvestError> {
        let tab = tab_fragment(index_url).ok_or_else(|| {
            HarvestError::IndexFormat(format!("no #tab- fragment in {}", index_url))
        })?;

        let page = self.get_text(index_url)?;
        let query = parse_index(&page, tab)?;
        info!(
            "Resolved tab '{}' to content.{} = {}",
            tab, query.key, query.venue
        );

        let mut offset = 0;
        loop {
            let url = notes_url(&self.api_base, &query, self.page_size, offset)?;
            let (count, ids) = parse_notes(&self.get_text(&url)?)?;
            let fetched = ids.len();
            out.extend(ids.iter().map(|id| pdf_url(id)));

            offset += self.page_size;
            if offset >= count || fetched == 0 {
                break;
            }
        }

        Ok(())
    }
}

impl DocumentSource for OpenReviewSource {
    fn pdf_urls(&self, index_url: &str) -> Vec<String> {
        let mut urls = Vec::new();
        if let Err(e) = self.collect(index_url, &mut urls) {
            error!("Paper listing for {} failed: {}", index_url, e);
            if !urls.is_empty() {
                warn!("Continuing with the {} papers listed before the failure", urls.len());
            }
        }
        info!("Listed {} papers from {}", urls.len(), index_url);
        urls
    }
}

/// PDF URL for a note id
pub fn pdf_url(note_id: &str) -> String {
    format!("{}{}", PDF_BASE, note_id)
}

/// The tab name after `#tab-`, if present
pub fn tab_fragment(index_url: &str) -> Option<&str> {
    index_url
        .rsplit_once("#tab-")
        .map(|(_, tab)| tab)
        .filter(|tab| !tab.is_empty())
}

/// Lowercase alphanumeric words joined by single spaces
///
/// `"Accept (Oral)"` and `"accept-oral"` both become `"accept oral"`.
fn name_words(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve the venue filter for `tab` from an index page
pub fn parse_index(html: &str, tab: &str) -> Result<VenueQuery, HarvestError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("script#__NEXT_DATA__")
        .map_err(|e| HarvestError::IndexFormat(format!("bad selector: {:?}", e)))?;
    let script = document
        .select(&selector)
        .next()
        .ok_or_else(|| HarvestError::IndexFormat("no __NEXT_DATA__ script".to_string()))?;

    let data: Value = serde_json::from_str(&script.text().collect::<String>())?;
    let properties = data
        .pointer("/props/pageProps/componentObj/properties")
        .ok_or_else(|| HarvestError::IndexFormat("no component properties".to_string()))?;

    let tabs = properties
        .get("tabs")
        .and_then(Value::as_array)
        .ok_or_else(|| HarvestError::IndexFormat("no tab list".to_string()))?;
    let domain = properties
        .pointer("/entity/domain")
        .and_then(Value::as_str)
        .ok_or_else(|| HarvestError::IndexFormat("no entity domain".to_string()))?;

    let wanted = name_words(tab);
    let entry = tabs
        .iter()
        .find(|t| t.get("name").and_then(Value::as_str).map(name_words) == Some(wanted.clone()))
        .ok_or_else(|| HarvestError::IndexFormat(format!("no tab matching '{}'", tab)))?;

    let query = entry.get("query");
    let field = |key: &str| {
        query
            .and_then(|q| q.get(format!("content.{}", key)))
            .and_then(Value::as_str)
            .map(|venue| (key.to_string(), venue.to_string()))
    };
    let (key, venue) = field("venue")
        .or_else(|| field("venueid"))
        .ok_or_else(|| HarvestError::IndexFormat(format!("tab '{}' has no venue", tab)))?;

    Ok(VenueQuery {
        key,
        venue,
        domain: domain.to_string(),
    })
}

/// Notes API URL for one page
pub fn notes_url(
    api_base: &str,
    query: &VenueQuery,
    limit: usize,
    offset: usize,
) -> Result<String, HarvestError> {
    let url = url::Url::parse_with_params(
        &format!("{}/notes", api_base),
        &[
            (format!("content.{}", query.key), query.venue.clone()),
            ("details".to_string(), NOTE_DETAILS.to_string()),
            ("domain".to_string(), query.domain.clone()),
            ("limit".to_string(), limit.to_string()),
            ("offset".to_string(), offset.to_string()),
        ],
    )
    .map_err(|e| HarvestError::Config(format!("invalid API base {}: {}", api_base, e)))?;
    Ok(url.into())
}

/// Total count and note ids from one notes API page
fn parse_notes(body: &str) -> Result<(usize, Vec<String>), HarvestError> {
    let page: NotesPage = serde_json::from_str(body)?;
    Ok((page.count, page.notes.into_iter().map(|n| n.id).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_page(tabs: &str) -> String {
        format!(
            r#"<html><head></head><body>
<script id="__NEXT_DATA__" type="application/json">
{{"props":{{"pageProps":{{"componentObj":{{"properties":{{
  "entity":{{"domain":"ICLR.cc/2025/Conference"}},
  "tabs":{}
}}}}}}}}}}
</script></body></html>"#,
            tabs
        )
    }

    #[test]
    fn test_tab_fragment() {
        assert_eq!(
            tab_fragment("https://openreview.net/group?id=ICLR.cc/2025/Conference#tab-accept-oral"),
            Some("accept-oral")
        );
        assert_eq!(tab_fragment("https://openreview.net/group?id=X"), None);
        assert_eq!(tab_fragment("https://openreview.net/group?id=X#tab-"), None);
    }

    #[test]
    fn test_name_words() {
        assert_eq!(name_words("Accept (Oral)"), "accept oral");
        assert_eq!(name_words("accept-day-1-poster"), "accept day 1 poster");
    }

    #[test]
    fn test_parse_index_venue() {
        let page = index_page(
            r#"[{"name":"Accept (Poster)","query":{"content.venue":"ICLR 2025 Poster"}},
                {"name":"Accept (Oral)","query":{"content.venue":"ICLR 2025 Oral"}}]"#,
        );
        let query = parse_index(&page, "accept-oral").unwrap();
        assert_eq!(
            query,
            VenueQuery {
                key: "venue".into(),
                venue: "ICLR 2025 Oral".into(),
                domain: "ICLR.cc/2025/Conference".into(),
            }
        );
    }

    #[test]
    fn test_parse_index_falls_back_to_venueid() {
        let page = index_page(
            r#"[{"name":"Withdrawn Submissions",
                 "query":{"content.venueid":"ICLR.cc/2025/Conference/Withdrawn_Submission"}}]"#,
        );
        let query = parse_index(&page, "withdrawn-submissions").unwrap();
        assert_eq!(query.key, "venueid");
        assert_eq!(query.venue, "ICLR.cc/2025/Conference/Withdrawn_Submission");
    }

    #[test]
    fn test_parse_index_unknown_tab() {
        let page = index_page(r#"[{"name":"Reject","query":{"content.venue":"x"}}]"#);
        assert!(matches!(
            parse_index(&page, "accept-oral"),
            Err(HarvestError::IndexFormat(_))
        ));
    }

    #[test]
    fn test_parse_index_without_script() {
        assert!(parse_index("<html><body>nothing</body></html>", "accept").is_err());
    }

    #[test]
    fn test_notes_url_encoding() {
        let query = VenueQuery {
            key: "venue".into(),
            venue: "ICLR 2025 Oral".into(),
            domain: "ICLR.cc/2025/Conference".into(),
        };
        let url = notes_url(DEFAULT_API_BASE, &query, 1000, 2000).unwrap();
        assert!(url.starts_with("https://api2.openreview.net/notes?content.venue=ICLR+2025+Oral"));
        assert!(url.contains("details=replyCount%2Cpresentation%2Cwritable"));
        assert!(url.contains("domain=ICLR.cc%2F2025%2FConference"));
        assert!(url.ends_with("limit=1000&offset=2000"));
    }

    #[test]
    fn test_parse_notes() {
        let (count, ids) =
            parse_notes(r#"{"count": 2, "notes": [{"id": "abc"}, {"id": "def"}]}"#).unwrap();
        assert_eq!(count, 2);
        assert_eq!(ids, vec!["abc", "def"]);
        assert_eq!(pdf_url(&ids[0]), "https://openreview.net/pdf?id=abc");
    }

    #[test]
    fn test_unreachable_source_lists_nothing() {
        let source = OpenReviewSource::new(Duration::from_millis(500), 1000).unwrap();
        let urls = source.pdf_urls("http://127.0.0.1:9/group?id=X#tab-accept");
        assert!(urls.is_empty());
    }
}
