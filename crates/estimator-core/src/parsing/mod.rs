pub mod sizes;
pub mod values;

use crate::model::{CandidateTable, ScheduleResult};
use sizes::is_size_token;
use values::first_count_token;

/// Scope label attached to every parsed door schedule.
pub const DOOR_SCOPE: &str = "Doors";

/// Parse every door schedule among the candidate tables, in table order.
pub fn parse_schedules(tables: &[CandidateTable]) -> Vec<ScheduleResult> {
    tables
        .iter()
        .filter(|t| is_door_schedule(t))
        .map(parse_door_schedule)
        .collect()
}

/// A table is a door schedule when its header mentions "door" in any case.
pub fn is_door_schedule(table: &CandidateTable) -> bool {
    table.header.to_lowercase().contains("door")
}

/// Parse a door schedule table into a count and its size tokens.
///
/// Each row adds at most one number to the count: the first digits-only
/// token. Rows without one add nothing. Every cell that starts with a door
/// size is kept verbatim in `sizes`.
pub fn parse_door_schedule(table: &CandidateTable) -> ScheduleResult {
    let mut count: u64 = 0;
    let mut sizes = Vec::new();

    for row in &table.rows {
        let cells = split_columns(row);

        for cell in &cells {
            if is_size_token(cell) {
                sizes.push(cell.to_string());
            }
        }

        if let Some(token) = first_count_token(&cells) {
            match token.parse::<u64>() {
                Ok(n) => count = count.saturating_add(n),
                Err(_) => log::warn!(
                    "page {}: quantity '{}' is out of range, row ignored",
                    table.page,
                    token
                ),
            }
        }
    }

    ScheduleResult {
        scope: DOOR_SCOPE.to_string(),
        count,
        sizes,
        source_page: table.page,
    }
}

/// Split a row into columns.
///
/// A whitespace run separates columns when it is at least two characters
/// long or contains a tab. Single spaces stay inside a cell.
pub fn split_columns(row: &str) -> Vec<&str> {
    let row = row.trim();
    let mut cells = Vec::new();
    let mut cell_start = 0;
    // (byte offset, length in chars, contains tab)
    let mut gap: Option<(usize, usize, bool)> = None;

    for (i, c) in row.char_indices() {
        if c.is_whitespace() {
            let (start, len, tab) = gap.unwrap_or((i, 0, false));
            gap = Some((start, len + 1, tab || c == '\t'));
        } else if let Some((start, len, tab)) = gap.take() {
            if len >= 2 || tab {
                cells.push(&row[cell_start..start]);
                cell_start = i;
            }
        }
    }

    if cell_start < row.len() {
        cells.push(&row[cell_start..]);
    }

    cells
}
