//! PDF download into temporary files

use crate::HarvestError;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::debug;

/// Fetches a PDF into a local temporary file
///
/// The file is removed when the returned handle is dropped.
pub trait PdfDownloader {
    /// Download `url`
    fn download(&self, url: &str) -> Result<NamedTempFile, HarvestError>;
}

/// Blocking HTTP downloader
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    /// Create a downloader with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, HarvestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HarvestError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl PdfDownloader for HttpDownloader {
    fn download(&self, url: &str) -> Result<NamedTempFile, HarvestError> {
        let bytes = self.client.get(url).send()?.error_for_status()?.bytes()?;
        debug!("Downloaded {} bytes from {}", bytes.len(), url);

        let mut file = tempfile::Builder::new()
            .prefix("benchlink-")
            .suffix(".pdf")
            .tempfile()?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_host_is_fetch_error() {
        let downloader = HttpDownloader::new(Duration::from_millis(500)).unwrap();
        let result = downloader.download("http://127.0.0.1:9/pdf?id=abc");
        assert!(matches!(result, Err(HarvestError::Fetch(_))));
    }
}
