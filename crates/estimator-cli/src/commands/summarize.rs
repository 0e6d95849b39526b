use estimator_core::analysis::{DocumentAnalyzer, DocumentSummary, KeywordAnalyzer};
use estimator_core::error::EstimatorError;
use estimator_core::extraction::{extract_document, full_text};
use estimator_core::model::DocumentKind;
use std::path::PathBuf;

use crate::commands;
use crate::output;
use crate::Backend;

pub fn run(
    input_files: &[PathBuf],
    backend: Backend,
    preset: Option<String>,
    output_format: &str,
) -> Result<(), EstimatorError> {
    let analyzer = KeywordAnalyzer::new(commands::preset_or_default(preset.as_deref())?);
    let extractor = commands::extractor(backend)?;
    let uploads = commands::read_uploads(input_files)?;
    log::debug!(
        "summarizing {} document(s) with the {} analyzer and {}",
        uploads.len(),
        analyzer.analyzer_name(),
        extractor.backend_name()
    );

    let mut summaries: Vec<(String, DocumentSummary)> = Vec::new();
    for upload in &uploads {
        let pages = DocumentKind::detect(&upload.name, &upload.bytes)
            .and_then(|kind| extract_document(&upload.bytes, kind, extractor.as_ref()));
        let text = match pages {
            Ok(pages) => full_text(&pages),
            Err(e) => {
                eprintln!("warning: {}: {}", upload.name, e);
                continue;
            }
        };
        summaries.push((upload.name.clone(), analyzer.summarize(&text)?));
    }

    match output_format {
        "json" => {
            let named: Vec<_> = summaries
                .iter()
                .map(|(name, summary)| output::json::Named::new(name, summary))
                .collect();
            output::json::print(&named)?
        }
        _ => {
            for (name, summary) in &summaries {
                println!("{name}");
                println!("  {}", summary.title);
                println!("  {}\n", summary.summary);
            }
        }
    }

    Ok(())
}
