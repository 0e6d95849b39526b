use regex::Regex;
use std::sync::LazyLock;

/// Feet/inches pair written with straight quotes: `3'0"x7'0"`.
static ASCII_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\d+'\d{1,2}"x\d+'\d{1,2}""#).expect("hardcoded size regex is valid")
});

/// Single-digit feet with straight or typographic marks, optional inch mark
/// and `x`, `X` or `×` as separator: `3’0”x7’0”`, `3'0X7'0`.
static TYPOGRAPHIC_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\d[’']\d{1,2}[”"]?[xX×]\d[’']\d{1,2}[”"]?"#).expect("hardcoded size regex is valid")
});

/// Whether a schedule cell starts with a door size.
///
/// Both notations are checked independently. Only the start of the cell has
/// to match; the cell is kept verbatim by the caller, trailing text included.
pub fn is_size_token(token: &str) -> bool {
    ASCII_SIZE.is_match(token) || TYPOGRAPHIC_SIZE.is_match(token)
}
