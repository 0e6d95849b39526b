use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::EstimatorError;

/// A header line plus the contiguous multi-token lines that follow it on one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateTable {
    /// 1-based page number the header was found on.
    pub page: usize,
    pub header: String,
    /// Lines after the header. Never contains the header itself.
    pub rows: Vec<String>,
}

/// Counts and dimension tokens parsed from one schedule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Fixed scope label, e.g. "Doors".
    pub scope: String,
    pub count: u64,
    /// Raw size tokens in the order found. Duplicates are kept.
    pub sizes: Vec<String>,
    pub source_page: usize,
}

/// Whether one catalog scope was found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeMatch {
    pub id: String,
    pub title: String,
    pub matched: bool,
    /// The keyword list that was tested.
    pub keywords: Vec<String>,
}

/// A schedule result priced against a price book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeoffLine {
    pub scope: String,
    pub quantity: u64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_cost: Option<Decimal>,
    pub source_page: usize,
    pub sizes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Spreadsheet,
    WordDocument,
    PlainText,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "PDF"),
            DocumentKind::Spreadsheet => write!(f, "Spreadsheet"),
            DocumentKind::WordDocument => write!(f, "Word document"),
            DocumentKind::PlainText => write!(f, "Plain text"),
        }
    }
}

impl DocumentKind {
    /// Detect the document kind from magic bytes, falling back to the file extension.
    ///
    /// Anything that is neither a PDF nor a zip container is read as plain text.
    pub fn detect(name: &str, bytes: &[u8]) -> Result<DocumentKind, EstimatorError> {
        if bytes.starts_with(b"%PDF") {
            return Ok(DocumentKind::Pdf);
        }

        let ext = Path::new(name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => return Ok(DocumentKind::Pdf),
            "xlsx" | "xlsm" => return Ok(DocumentKind::Spreadsheet),
            "docx" => return Ok(DocumentKind::WordDocument),
            _ => {}
        }

        if bytes.starts_with(b"PK\x03\x04") {
            return Err(EstimatorError::UnsupportedDocument(format!(
                "'{}' is a zip container but not a .xlsx or .docx file",
                name
            )));
        }

        Ok(DocumentKind::PlainText)
    }
}

/// One uploaded document: its file name and raw bytes.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Everything extracted from a single upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResult {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,
    pub tables: Vec<CandidateTable>,
    pub schedules: Vec<ScheduleResult>,
    pub scopes: Vec<ScopeMatch>,
    /// Set when the document could not be read. The other fields then hold
    /// the empty-document result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
