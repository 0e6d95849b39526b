pub mod docx;
pub mod pdf_text;
pub mod pdftotext;
pub mod plain;
pub mod spreadsheet;
pub mod table;

use crate::error::EstimatorError;
use crate::model::DocumentKind;

/// Text extracted from a single page of a document.
///
/// For spreadsheets a page is one worksheet; Word and plain-text documents
/// produce a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    /// Build a page from raw text, one entry per line.
    pub fn from_text(page_number: usize, text: &str) -> Self {
        PageContent {
            page_number,
            lines: text.lines().map(|l| l.to_string()).collect(),
        }
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, EstimatorError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Extract pages from any supported document kind.
///
/// PDFs go through `extractor`; the other kinds are read in-process.
pub fn extract_document(
    bytes: &[u8],
    kind: DocumentKind,
    extractor: &dyn PdfExtractor,
) -> Result<Vec<PageContent>, EstimatorError> {
    let pages = match kind {
        DocumentKind::Pdf => extractor.extract_pages(bytes)?,
        DocumentKind::Spreadsheet => spreadsheet::extract_sheets(bytes)?,
        DocumentKind::WordDocument => docx::extract_paragraphs(bytes)?,
        DocumentKind::PlainText => plain::decode_text(bytes),
    };

    log::debug!(
        "extracted {} page(s) from {} ({} bytes)",
        pages.len(),
        kind,
        bytes.len()
    );

    Ok(pages)
}

/// Concatenate page text in document order.
pub fn full_text(pages: &[PageContent]) -> String {
    pages
        .iter()
        .map(|p| p.lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_keeps_page_order() {
        let pages = vec![
            PageContent::from_text(1, "Cover\nIndex"),
            PageContent::from_text(2, "Door Schedule"),
        ];
        assert_eq!(full_text(&pages), "Cover\nIndex\nDoor Schedule");
    }

    #[test]
    fn test_full_text_empty() {
        assert_eq!(full_text(&[]), "");
    }
}
