use crate::error::EstimatorError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout`, which keeps the column gaps of schedule tables
/// intact. Useful when the in-memory backend collapses those gaps.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, EstimatorError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| EstimatorError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| EstimatorError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    EstimatorError::PdftotextNotFound
                } else {
                    EstimatorError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(EstimatorError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_form_feed_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// pdftotext separates pages with a form feed and ends the last page with one.
fn split_form_feed_pages(text: &str) -> Vec<PageContent> {
    let mut raw: Vec<&str> = text.split('\x0c').collect();
    if raw.len() > 1 && raw.last().is_some_and(|p| p.trim().is_empty()) {
        raw.pop();
    }

    raw.iter()
        .enumerate()
        .map(|(i, page_text)| PageContent::from_text(i + 1, page_text))
        .collect()
}
