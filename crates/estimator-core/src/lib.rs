pub mod analysis;
pub mod catalog;
pub mod classify;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod pricing;

use catalog::schema::ScopeCatalog;
use error::EstimatorError;
use extraction::table::find_candidate_tables;
use extraction::{extract_document, full_text, PdfExtractor};
use model::{CandidateTable, DocumentKind, ScheduleResult, ScopeMatch, Upload, UploadResult};

/// Segment a PDF's text into candidate tables.
pub fn extract_tables(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<Vec<CandidateTable>, EstimatorError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    Ok(find_candidate_tables(&pages))
}

/// Main API entry point: door-schedule takeoff from a PDF.
///
/// Extracts text, segments it into candidate tables and parses every table
/// whose header mentions a door. Returns an empty list when the document has
/// no such table.
pub fn extract_structured_takeoff(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<Vec<ScheduleResult>, EstimatorError> {
    let tables = extract_tables(pdf_bytes, extractor)?;
    Ok(parsing::parse_schedules(&tables))
}

/// Classify a document of any supported kind against a scope catalog.
pub fn classify_document(
    bytes: &[u8],
    kind: DocumentKind,
    extractor: &dyn PdfExtractor,
    catalog: &ScopeCatalog,
) -> Result<Vec<ScopeMatch>, EstimatorError> {
    let pages = extract_document(bytes, kind, extractor)?;
    Ok(classify::classify_scopes(&full_text(&pages), catalog))
}

/// Process a batch of uploads one after another, in input order.
///
/// A document that cannot be read does not fail the batch: its result
/// carries the error message and the empty-document outcome (no tables, no
/// schedules, every scope unmatched).
pub fn process_uploads(
    uploads: &[Upload],
    extractor: &dyn PdfExtractor,
    catalog: &ScopeCatalog,
) -> Vec<UploadResult> {
    uploads
        .iter()
        .map(|upload| process_upload(upload, extractor, catalog))
        .collect()
}

fn process_upload(
    upload: &Upload,
    extractor: &dyn PdfExtractor,
    catalog: &ScopeCatalog,
) -> UploadResult {
    let extracted = DocumentKind::detect(&upload.name, &upload.bytes).and_then(|kind| {
        extract_document(&upload.bytes, kind, extractor).map(|pages| (kind, pages))
    });

    match extracted {
        Ok((kind, pages)) => {
            let tables = find_candidate_tables(&pages);
            let schedules = parsing::parse_schedules(&tables);
            let scopes = classify::classify_scopes(&full_text(&pages), catalog);
            log::info!(
                "{}: {} table(s), {} schedule(s), {} scope(s) detected",
                upload.name,
                tables.len(),
                schedules.len(),
                classify::detected(&scopes).count()
            );
            UploadResult {
                name: upload.name.clone(),
                kind: Some(kind),
                tables,
                schedules,
                scopes,
                error: None,
            }
        }
        Err(e) => {
            log::warn!("{}: no usable text ({})", upload.name, e);
            UploadResult {
                name: upload.name.clone(),
                kind: None,
                tables: Vec::new(),
                schedules: Vec::new(),
                scopes: classify::classify_scopes("", catalog),
                error: Some(e.to_string()),
            }
        }
    }
}
