//! PDF conversion through the poppler command-line tools

use crate::HarvestError;
use benchlink_domain::traits::DocumentConverter;
use benchlink_domain::RawDocument;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// Runs `pdftotext` and `pdftohtml` as subprocesses
#[derive(Debug, Clone)]
pub struct PopplerConverter {
    pdftotext: String,
    pdftohtml: String,
}

impl PopplerConverter {
    /// Create a converter using the given executables
    pub fn new(pdftotext: impl Into<String>, pdftohtml: impl Into<String>) -> Self {
        Self {
            pdftotext: pdftotext.into(),
            pdftohtml: pdftohtml.into(),
        }
    }

    /// Run `program args...`, returning stdout on success
    ///
    /// A non-zero exit is logged and reported as `Ok(None)`; only failing to
    /// start the program at all is an error.
    fn run(&self, program: &str, args: &[&str], pdf: &Path) -> Result<Option<String>, HarvestError> {
        debug!("Running {} on {}", program, pdf.display());
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| HarvestError::Conversion(format!("failed to run {}: {}", program, e)))?;

        if !output.status.success() {
            warn!(
                "{} exited with {} on {}: {}",
                program,
                output.status,
                pdf.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        Ok(Some(stdout))
    }
}

impl Default for PopplerConverter {
    fn default() -> Self {
        Self::new("pdftotext", "pdftohtml")
    }
}

impl DocumentConverter for PopplerConverter {
    type Error = HarvestError;

    fn to_text(&self, pdf: &Path) -> Result<Option<String>, Self::Error> {
        let path = pdf.to_string_lossy();
        self.run(&self.pdftotext, &["-enc", "UTF-8", &*path, "-"], pdf)
    }

    fn to_html(&self, pdf: &Path) -> Result<Option<String>, Self::Error> {
        let path = pdf.to_string_lossy();
        self.run(&self.pdftohtml, &["-i", "-hidden", "-stdout", "-s", &*path], pdf)
    }
}

/// Convert `pdf` into a [`RawDocument`] with both renderings
///
/// A failing structured rendering only costs the anchors. A document with
/// neither rendering is a conversion error.
pub fn convert_document<C>(converter: &C, id: &str, pdf: &Path) -> Result<RawDocument, HarvestError>
where
    C: DocumentConverter,
    C::Error: std::fmt::Display,
{
    let text = converter
        .to_text(pdf)
        .map_err(|e| HarvestError::Conversion(e.to_string()))?;
    let html = match converter.to_html(pdf) {
        Ok(html) => html,
        Err(e) => {
            warn!("{}: structured conversion failed: {}", id, e);
            None
        }
    };

    if text.is_none() && html.is_none() {
        return Err(HarvestError::Conversion(format!(
            "no usable output for {}",
            pdf.display()
        )));
    }

    let mut doc = RawDocument::from_text(id, text.as_deref().unwrap_or(""));
    if let Some(html) = html {
        doc = doc.with_html(html);
    }
    Ok(doc)
}
