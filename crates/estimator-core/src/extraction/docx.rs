use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::EstimatorError;
use crate::extraction::PageContent;

const DOCUMENT_PART: &str = "word/document.xml";

/// Cell separator for table rows, matching the spreadsheet reader so the
/// schedule parser sees one column gap per cell boundary.
const CELL_SEPARATOR: &str = "  ";

/// Read the main body of a `.docx` file as a single page, one line per paragraph.
///
/// `w:tab` becomes a tab character and `w:br` starts a new line, so tabbed
/// schedule rows keep their column boundaries. Each table row (`w:tr`) is one
/// line with its non-empty cells joined by two spaces.
pub fn extract_paragraphs(bytes: &[u8]) -> Result<Vec<PageContent>, EstimatorError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| EstimatorError::Extraction(format!("failed to open docx: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| EstimatorError::Extraction(format!("{DOCUMENT_PART} not found: {e}")))?
        .read_to_string(&mut xml)?;

    let lines = parse_document_xml(&xml)?;
    Ok(vec![PageContent {
        page_number: 1,
        lines,
    }])
}

fn parse_document_xml(xml: &str) -> Result<Vec<String>, EstimatorError> {
    let mut reader = Reader::from_str(xml);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut in_text = false;
    // Tab stops in `w:pPr/w:tabs` are also `w:tab`; only those inside a run are text.
    let mut in_run = false;
    // Open `w:tc` elements. Paragraphs inside a cell join the cell, not the page.
    let mut cell_depth = 0usize;
    let mut cell = String::new();
    let mut row: Vec<String> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"t" => in_text = true,
                b"r" => in_run = true,
                b"tc" => {
                    cell_depth += 1;
                    cell.clear();
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" if in_run => current.push('\t'),
                b"br" | b"cr" if cell_depth > 0 => current.push(' '),
                b"br" | b"cr" => lines.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Text(t)) => {
                if in_text {
                    let text = t.unescape().map_err(|e| {
                        EstimatorError::Extraction(format!("invalid text in {DOCUMENT_PART}: {e}"))
                    })?;
                    current.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"r" => in_run = false,
                b"p" if cell_depth > 0 => {
                    let text = std::mem::take(&mut current);
                    let text = text.trim();
                    if !text.is_empty() {
                        if !cell.is_empty() {
                            cell.push(' ');
                        }
                        cell.push_str(text);
                    }
                }
                b"p" => lines.push(std::mem::take(&mut current)),
                b"tc" => {
                    cell_depth = cell_depth.saturating_sub(1);
                    if !cell.is_empty() {
                        row.push(std::mem::take(&mut cell));
                    }
                }
                b"tr" => {
                    let line = row.join(CELL_SEPARATOR);
                    row.clear();
                    if !line.is_empty() {
                        lines.push(line);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(EstimatorError::Extraction(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}
