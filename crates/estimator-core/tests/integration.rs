//! Integration tests for the takeoff and classification pipelines.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! touching a real PDF, and a FailingExtractor for unreadable uploads.

use estimator_core::catalog::builtin::{load_preset, load_price_preset};
use estimator_core::error::EstimatorError;
use estimator_core::extraction::{PageContent, PdfExtractor};
use estimator_core::model::{DocumentKind, Upload};
use estimator_core::pricing::{price_takeoff, takeoff_total};
use estimator_core::{
    classify_document, extract_structured_takeoff, extract_tables, process_uploads,
};
use rust_decimal_macros::dec;

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, EstimatorError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingExtractor;

impl PdfExtractor for FailingExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, EstimatorError> {
        Err(EstimatorError::Extraction("invalid PDF header".into()))
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

fn page(number: usize, lines: &[&str]) -> PageContent {
    PageContent {
        page_number: number,
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

fn drawing_set() -> MockExtractor {
    MockExtractor {
        pages: vec![
            page(
                1,
                &[
                    "RIVERSIDE CLINIC TENANT IMPROVEMENT",
                    "General notes: verify all dimensions in field",
                    "",
                    "DOOR SCHEDULE",
                    "2  HM-1  3'0\"x7'0\"  Hollow Metal",
                    "1  WD-1  3’0”x7’0”  Solid Core Wood",
                    "",
                    "Provide 5/8\" GWB at all corridor walls",
                ],
            ),
            page(
                2,
                &[
                    "ROOM FINISH MATERIALS",
                    "Room  Material  Finish",
                    "101  PT-1  Eggshell paint",
                    "",
                    "Door Hardware Sets",
                    "HW-1  4  Hinges",
                    "Closer",
                ],
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Door schedule takeoff end to end
// ---------------------------------------------------------------------------
#[test]
fn door_schedules_across_pages() {
    let results = extract_structured_takeoff(&[], &drawing_set()).unwrap();

    assert_eq!(results.len(), 2);

    assert_eq!(results[0].scope, "Doors");
    assert_eq!(results[0].count, 3);
    assert_eq!(results[0].sizes, vec!["3'0\"x7'0\"", "3’0”x7’0”"]);
    assert_eq!(results[0].source_page, 1);

    // Hardware set rows: "HW-1  4  Hinges" counts 4, single-token "Closer" ends the table.
    assert_eq!(results[1].count, 4);
    assert!(results[1].sizes.is_empty());
    assert_eq!(results[1].source_page, 2);
}

// ---------------------------------------------------------------------------
// Segmenter sees every header, door or not, in page order
// ---------------------------------------------------------------------------
#[test]
fn candidate_tables_in_document_order() {
    let tables = extract_tables(&[], &drawing_set()).unwrap();
    let headers: Vec<(usize, &str)> = tables
        .iter()
        .map(|t| (t.page, t.header.as_str()))
        .collect();

    assert_eq!(
        headers,
        vec![
            (1, "DOOR SCHEDULE"),
            (2, "ROOM FINISH MATERIALS"),
            (2, "Room  Material  Finish"),
            (2, "Door Hardware Sets"),
        ]
    );
    // ROOM FINISH MATERIALS and its "Room  Material  Finish" row overlap.
    assert_eq!(tables[1].rows[0], "Room  Material  Finish");
    assert_eq!(tables[2].rows, vec!["101  PT-1  Eggshell paint"]);
}

#[test]
fn takeoff_is_repeatable() {
    let extractor = drawing_set();
    let first = extract_structured_takeoff(&[], &extractor).unwrap();
    let second = extract_structured_takeoff(&[], &extractor).unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Empty document boundary
// ---------------------------------------------------------------------------
#[test]
fn empty_document_yields_empty_results() {
    let extractor = MockExtractor { pages: vec![] };
    let trades = load_preset("trades").unwrap();

    assert!(extract_tables(&[], &extractor).unwrap().is_empty());
    assert!(extract_structured_takeoff(&[], &extractor).unwrap().is_empty());

    let scopes = classify_document(&[], DocumentKind::Pdf, &extractor, &trades).unwrap();
    assert_eq!(scopes.len(), trades.scopes.len());
    assert!(scopes.iter().all(|s| !s.matched));
}

#[test]
fn malformed_pdf_propagates_error() {
    let err = extract_structured_takeoff(b"garbage", &FailingExtractor).unwrap_err();
    assert!(matches!(err, EstimatorError::Extraction(_)));
}

// ---------------------------------------------------------------------------
// Keyword classification
// ---------------------------------------------------------------------------
#[test]
fn pdf_scopes_from_trades_catalog() {
    let trades = load_preset("trades").unwrap();
    let scopes = classify_document(&[], DocumentKind::Pdf, &drawing_set(), &trades).unwrap();

    let flags: Vec<(&str, bool)> = scopes
        .iter()
        .map(|s| (s.title.as_str(), s.matched))
        .collect();
    assert_eq!(
        flags,
        vec![
            ("Doors and Hardware", true),
            ("Slab Concrete", false),
            ("Painting", true),
            ("Drywall Package", true),
        ]
    );
}

#[test]
fn plain_text_upload_classified_without_extractor() {
    let trades = load_preset("trades").unwrap();
    let scopes = classify_document(
        b"4\" SLAB ON GRADE over vapor barrier",
        DocumentKind::PlainText,
        &FailingExtractor,
        &trades,
    )
    .unwrap();
    assert!(scopes[1].matched);
    assert_eq!(scopes.iter().filter(|s| s.matched).count(), 1);
}

// ---------------------------------------------------------------------------
// Batch processing
// ---------------------------------------------------------------------------
#[test]
fn batch_keeps_order_and_isolates_failures() {
    let trades = load_preset("trades").unwrap();
    let uploads = vec![
        Upload {
            name: "A-601 door schedule.pdf".into(),
            bytes: b"%PDF-1.7 broken".to_vec(),
        },
        Upload {
            name: "scope notes.txt".into(),
            bytes: b"Door Schedule\n3  HM-1  3'0\"x7'0\"\n\npaint all frames".to_vec(),
        },
    ];

    let results = process_uploads(&uploads, &FailingExtractor, &trades);
    assert_eq!(results.len(), 2);

    assert_eq!(results[0].name, "A-601 door schedule.pdf");
    assert!(results[0].error.is_some());
    assert!(results[0].tables.is_empty());
    assert!(results[0].schedules.is_empty());
    assert_eq!(results[0].scopes.len(), 4);
    assert!(results[0].scopes.iter().all(|s| !s.matched));

    assert_eq!(results[1].kind, Some(DocumentKind::PlainText));
    assert!(results[1].error.is_none());
    assert_eq!(results[1].schedules.len(), 1);
    assert_eq!(results[1].schedules[0].count, 3);
    assert!(results[1].scopes[0].matched);
    assert!(results[1].scopes[2].matched);
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------
#[test]
fn priced_takeoff_from_default_book() {
    let results = extract_structured_takeoff(&[], &drawing_set()).unwrap();
    let book = load_price_preset("default").unwrap();
    let lines = price_takeoff(&results, &book).unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].quantity, 3);
    assert_eq!(lines[0].extended_cost, Some(dec!(3750.00)));
    assert_eq!(takeoff_total(&lines).unwrap(), dec!(8750.00));
}

#[test]
fn results_serialize_as_plain_records() {
    let results = extract_structured_takeoff(&[], &drawing_set()).unwrap();
    let json = serde_json::to_value(&results[0]).unwrap();
    assert_eq!(json["scope"], "Doors");
    assert_eq!(json["count"], 3);
    assert_eq!(json["source_page"], 1);
    assert_eq!(json["sizes"][0], "3'0\"x7'0\"");
}
