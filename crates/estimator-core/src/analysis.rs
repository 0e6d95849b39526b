//! Document summarization and scope classification behind a swappable backend.
//!
//! A hosted language model can implement [`DocumentAnalyzer`]; the
//! [`KeywordAnalyzer`] here is the deterministic implementation built on the
//! keyword classifier.

use serde::{Deserialize, Serialize};

use crate::catalog::schema::ScopeCatalog;
use crate::classify::{classify_scopes, detected};
use crate::error::EstimatorError;
use crate::model::ScopeMatch;

const MAX_TITLE_CHARS: usize = 80;
const UNTITLED: &str = "Untitled document";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub title: String,
    pub summary: String,
}

pub trait DocumentAnalyzer {
    fn summarize(&self, text: &str) -> Result<DocumentSummary, EstimatorError>;

    fn classify(
        &self,
        text: &str,
        catalog: &ScopeCatalog,
    ) -> Result<Vec<ScopeMatch>, EstimatorError>;

    /// Name of this analyzer (for diagnostics).
    fn analyzer_name(&self) -> &str;
}

/// Keyword-based analyzer. Summaries list the scopes of its own catalog that
/// appear in the text.
pub struct KeywordAnalyzer {
    catalog: ScopeCatalog,
}

impl KeywordAnalyzer {
    pub fn new(catalog: ScopeCatalog) -> Self {
        KeywordAnalyzer { catalog }
    }
}

impl DocumentAnalyzer for KeywordAnalyzer {
    fn summarize(&self, text: &str) -> Result<DocumentSummary, EstimatorError> {
        let title = text
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(|l| l.chars().take(MAX_TITLE_CHARS).collect::<String>())
            .unwrap_or_else(|| UNTITLED.to_string());

        let matches = classify_scopes(text, &self.catalog);
        let found: Vec<&str> = detected(&matches).map(|m| m.title.as_str()).collect();

        let summary = if found.is_empty() {
            "No known keywords found.".to_string()
        } else {
            format!("Detected scopes: {}.", found.join(", "))
        };

        Ok(DocumentSummary { title, summary })
    }

    fn classify(
        &self,
        text: &str,
        catalog: &ScopeCatalog,
    ) -> Result<Vec<ScopeMatch>, EstimatorError> {
        Ok(classify_scopes(text, catalog))
    }

    fn analyzer_name(&self) -> &str {
        "keyword"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::load_preset;

    fn analyzer() -> KeywordAnalyzer {
        KeywordAnalyzer::new(load_preset("trades").unwrap())
    }

    #[test]
    fn test_summary_lists_detected_scopes() {
        let summary = analyzer()
            .summarize("\n  Riverside Clinic TI  \nNew drywall partitions and paint\n")
            .unwrap();
        assert_eq!(summary.title, "Riverside Clinic TI");
        assert_eq!(summary.summary, "Detected scopes: Painting, Drywall Package.");
    }

    #[test]
    fn test_summary_of_empty_text() {
        let summary = analyzer().summarize("").unwrap();
        assert_eq!(summary.title, UNTITLED);
        assert_eq!(summary.summary, "No known keywords found.");
    }

    #[test]
    fn test_long_title_truncated() {
        let long = "x".repeat(200);
        let summary = analyzer().summarize(&long).unwrap();
        assert_eq!(summary.title.chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn test_classify_uses_given_catalog() {
        let csi = load_preset("csi").unwrap();
        let matches = analyzer().classify("elevator pit", &csi).unwrap();
        assert_eq!(matches.len(), csi.scopes.len());
        assert!(matches.iter().any(|m| m.id == "14" && m.matched));
    }

    #[test]
    fn test_analyzer_name() {
        let analyzer = analyzer();
        let dyn_analyzer: &dyn DocumentAnalyzer = &analyzer;
        assert_eq!(dyn_analyzer.analyzer_name(), "keyword");
    }
}
