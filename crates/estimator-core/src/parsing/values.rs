/// Find the quantity token of a schedule row.
///
/// Cells are scanned left to right, and the whitespace-separated words inside
/// each cell in order; the first word made only of ASCII digits wins. Later
/// numbers in the same row are ignored.
///
/// - `["2", "HM-1", "3'0\"x7'0\""]` -> Some("2")
/// - `["HM-1 2 3'0\"x7'0\" 4"]` -> Some("2")
/// - `["HM-1", "Hollow Metal"]` -> None
pub fn first_count_token<'a>(cells: &[&'a str]) -> Option<&'a str> {
    cells
        .iter()
        .flat_map(|cell| cell.split_whitespace())
        .find(|word| is_count_token(word))
}

/// A token is a count if it is non-empty and consists solely of ASCII digits.
pub fn is_count_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
