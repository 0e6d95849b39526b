use std::io::Cursor;

use calamine::{Reader, Xlsx};

use crate::error::EstimatorError;
use crate::extraction::PageContent;

/// Cell separator for flattened rows. Two spaces keep the column boundary
/// visible to the schedule parser's column split.
const CELL_SEPARATOR: &str = "  ";

/// Read every worksheet of an `.xlsx` workbook as one page of text.
///
/// Each non-empty row becomes one line of its non-empty cells, in sheet order.
pub fn extract_sheets(bytes: &[u8]) -> Result<Vec<PageContent>, EstimatorError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| EstimatorError::Extraction(format!("failed to open xlsx: {e}")))?;

    let mut pages = Vec::new();
    for (i, sheet_name) in workbook.sheet_names().into_iter().enumerate() {
        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            EstimatorError::Extraction(format!("failed to read sheet '{sheet_name}': {e}"))
        })?;

        let lines: Vec<String> = range
            .rows()
            .map(|row| {
                row.iter()
                    .filter_map(cell_as_string)
                    .collect::<Vec<_>>()
                    .join(CELL_SEPARATOR)
            })
            .filter(|line| !line.is_empty())
            .collect();

        log::debug!("sheet '{}': {} non-empty row(s)", sheet_name, lines.len());

        pages.push(PageContent {
            page_number: i + 1,
            lines,
        });
    }

    Ok(pages)
}

fn cell_as_string(cell: &calamine::Data) -> Option<String> {
    match cell {
        calamine::Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        calamine::Data::Float(f) => Some(format_float(*f)),
        calamine::Data::Int(i) => Some(i.to_string()),
        calamine::Data::Bool(b) => Some(b.to_string()),
        calamine::Data::Empty | calamine::Data::Error(_) => None,
        _ => Some(format!("{cell}")),
    }
}

/// Whole floats print without a fractional part so quantity cells read as
/// integers ("12", not "12.0").
fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
