use crate::extraction::PageContent;
use crate::model::CandidateTable;

/// Words whose presence (case-insensitive, anywhere in the line) marks a
/// schedule table header.
pub const HEADER_KEYWORDS: &[&str] = &["door", "type", "qty", "size", "material"];

/// Detect if a line looks like a table header row.
pub fn is_table_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Whether a line can continue a table: non-blank with at least two tokens.
fn is_table_row(line: &str) -> bool {
    line.split_whitespace().nth(1).is_some()
}

/// Segment page text into candidate tables.
///
/// Every header line opens a table, including lines already collected as
/// rows of an earlier table, so tables may overlap. Rows are the lines
/// directly after the header, up to (not including) the first blank or
/// single-token line. Tables never continue onto the next page.
pub fn find_candidate_tables(pages: &[PageContent]) -> Vec<CandidateTable> {
    let mut tables = Vec::new();

    for page in pages {
        for (i, line) in page.lines.iter().enumerate() {
            if !is_table_header(line) {
                continue;
            }

            let rows: Vec<String> = page.lines[i + 1..]
                .iter()
                .take_while(|next| is_table_row(next))
                .cloned()
                .collect();

            tables.push(CandidateTable {
                page: page.page_number,
                header: line.clone(),
                rows,
            });
        }
    }

    log::debug!(
        "found {} candidate table(s) across {} page(s)",
        tables.len(),
        pages.len()
    );

    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize, lines: &[&str]) -> PageContent {
        PageContent {
            page_number: number,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_is_table_header() {
        assert!(is_table_header("DOOR SCHEDULE"));
        assert!(is_table_header("Mark   Qty   Width"));
        assert!(is_table_header("finish materials"));
        assert!(!is_table_header("  HM-1     3'0\"x7'0\"   Hollow Metal"));
    }

    #[test]
    fn test_header_matches_inside_words() {
        // Substring match, not word match: "Prototype" contains "type".
        assert!(is_table_header("Prototype building"));
        assert!(is_table_header("Outdoor seating"));
    }

    #[test]
    fn test_rows_stop_at_blank_line() {
        let pages = vec![page(1, &["Door Schedule", "A B", "", "C D"])];
        let tables = find_candidate_tables(&pages);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows, vec!["A B"]);
    }

    #[test]
    fn test_whitespace_only_line_terminates() {
        let pages = vec![page(1, &["Door Schedule", "A B", "   \t ", "C D"])];
        let tables = find_candidate_tables(&pages);
        assert_eq!(tables[0].rows, vec!["A B"]);
    }

    #[test]
    fn test_single_token_row_terminates() {
        let pages = vec![page(1, &["Hardware Schedule Qty", "1 hinge", "Door", "2 closer"])];
        let tables = find_candidate_tables(&pages);
        // "Door" is a single token, so it ends the first table and opens a second one.
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows, vec!["1 hinge"]);
        assert_eq!(tables[1].header, "Door");
        assert_eq!(tables[1].rows, vec!["2 closer"]);
    }

    #[test]
    fn test_header_not_included_in_rows() {
        let pages = vec![page(3, &["DOOR SCHEDULE", "1  HM-1"])];
        let tables = find_candidate_tables(&pages);
        assert_eq!(tables[0].page, 3);
        assert_eq!(tables[0].header, "DOOR SCHEDULE");
        assert_eq!(tables[0].rows, vec!["1  HM-1"]);
    }

    #[test]
    fn test_overlapping_tables_are_kept() {
        let pages = vec![page(
            1,
            &[
                "DOOR SCHEDULE",
                "Mark  Type  Size",
                "D1  A  3'0\"x7'0\"",
                "",
            ],
        )];
        let tables = find_candidate_tables(&pages);
        assert_eq!(tables.len(), 2);
        assert_eq!(
            tables[0].rows,
            vec!["Mark  Type  Size", "D1  A  3'0\"x7'0\""]
        );
        assert_eq!(tables[1].header, "Mark  Type  Size");
        assert_eq!(tables[1].rows, vec!["D1  A  3'0\"x7'0\""]);
    }

    #[test]
    fn test_table_ends_at_page_boundary() {
        let pages = vec![
            page(1, &["Door Schedule", "1  HM-1"]),
            page(2, &["2  HM-2"]),
        ];
        let tables = find_candidate_tables(&pages);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows, vec!["1  HM-1"]);
    }

    #[test]
    fn test_tables_in_page_order() {
        let pages = vec![
            page(1, &["Door Schedule", "1 HM"]),
            page(2, &["Material list", "2 WD"]),
        ];
        let tables = find_candidate_tables(&pages);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].page, 1);
        assert_eq!(tables[0].header, "Door Schedule");
        assert_eq!(tables[1].page, 2);
        assert_eq!(tables[1].header, "Material list");
    }

    #[test]
    fn test_no_headers_no_tables() {
        let pages = vec![page(1, &["General notes", "Verify all dimensions"])];
        assert!(find_candidate_tables(&pages).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(find_candidate_tables(&[]).is_empty());
        assert!(find_candidate_tables(&[page(1, &[])]).is_empty());
    }

    #[test]
    fn test_segmenting_is_idempotent() {
        let pages = vec![page(
            1,
            &["Door Schedule", "1  HM-1", "2  WD-1", "", "Finish Material", "PT-1 eggshell"],
        )];
        assert_eq!(find_candidate_tables(&pages), find_candidate_tables(&pages));
    }
}
