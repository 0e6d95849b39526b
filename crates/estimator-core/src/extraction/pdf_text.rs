use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::EstimatorError;
use crate::extraction::{PageContent, PdfExtractor};

/// Pure in-memory extraction backend built on the `pdf-extract` crate.
///
/// Uses the library's default text layout; no column or OCR awareness.
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        PdfExtractBackend
    }
}

impl Default for PdfExtractBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdfExtractBackend {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, EstimatorError> {
        // pdf-extract panics on some malformed font tables instead of returning an error.
        let extracted = catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        }))
        .map_err(|_| EstimatorError::Extraction("PDF parser panicked on malformed input".into()))?
        .map_err(|e| EstimatorError::Extraction(format!("failed to extract text from PDF: {e}")))?;

        let pages: Vec<PageContent> = extracted
            .iter()
            .enumerate()
            .map(|(i, text)| PageContent::from_text(i + 1, text))
            .collect();

        log::debug!(
            "pdf-extract produced {} page(s), {} characters",
            pages.len(),
            extracted.iter().map(String::len).sum::<usize>()
        );

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}
