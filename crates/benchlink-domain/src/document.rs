//! Raw document representation

/// One paper after PDF conversion
///
/// Holds the ordered text lines and, when the converter produced one, the
/// structured (HTML) rendering with anchors. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Document identifier (paper id or local path)
    pub id: String,

    /// Text rendering, one entry per line
    pub lines: Vec<String>,

    /// Structured rendering, if available
    pub html: Option<String>,
}

impl RawDocument {
    /// Build a document from a raw text rendering
    pub fn from_text(id: impl Into<String>, text: &str) -> Self {
        Self {
            id: id.into(),
            lines: text.lines().map(str::to_string).collect(),
            html: None,
        }
    }

    /// Attach a structured rendering
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Whether the document has no usable representation at all
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
            && self.html.as_deref().map_or(true, |h| h.trim().is_empty())
    }
}
