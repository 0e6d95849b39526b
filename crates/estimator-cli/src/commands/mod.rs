pub mod catalogs;
pub mod scopes;
pub mod summarize;
pub mod tables;
pub mod takeoff;

use estimator_core::catalog::builtin;
use estimator_core::catalog::schema::ScopeCatalog;
use estimator_core::error::EstimatorError;
use estimator_core::extraction::pdf_text::PdfExtractBackend;
use estimator_core::extraction::pdftotext::PdftotextExtractor;
use estimator_core::extraction::PdfExtractor;
use estimator_core::model::{Upload, UploadResult};
use std::path::PathBuf;

use crate::Backend;

pub fn extractor(backend: Backend) -> Result<Box<dyn PdfExtractor>, EstimatorError> {
    match backend {
        Backend::PdfExtract => Ok(Box::new(PdfExtractBackend::new())),
        Backend::Pdftotext => {
            if !PdftotextExtractor::is_available() {
                return Err(EstimatorError::PdftotextNotFound);
            }
            Ok(Box::new(PdftotextExtractor::new()))
        }
    }
}

/// Read all input files up front so a missing file fails before any work is done.
pub fn read_uploads(paths: &[PathBuf]) -> Result<Vec<Upload>, EstimatorError> {
    paths
        .iter()
        .map(|path| -> Result<Upload, EstimatorError> {
            Ok(Upload {
                name: path.display().to_string(),
                bytes: std::fs::read(path)?,
            })
        })
        .collect()
}

/// Load a preset catalog, or the default one when no name is given.
pub fn preset_or_default(preset: Option<&str>) -> Result<ScopeCatalog, EstimatorError> {
    builtin::load_preset(preset.unwrap_or(builtin::DEFAULT_PRESET))
}

/// Run the batch pipeline and report unreadable documents on stderr.
pub fn process(
    paths: &[PathBuf],
    backend: Backend,
    catalog: &ScopeCatalog,
) -> Result<Vec<UploadResult>, EstimatorError> {
    let uploads = read_uploads(paths)?;
    let extractor = extractor(backend)?;
    log::debug!(
        "processing {} document(s) with {}",
        uploads.len(),
        extractor.backend_name()
    );

    let results = estimator_core::process_uploads(&uploads, extractor.as_ref(), catalog);
    for result in &results {
        if let Some(ref err) = result.error {
            eprintln!("warning: {}: {}", result.name, err);
        }
    }

    Ok(results)
}
