use crate::extraction::PageContent;

/// Decode arbitrary bytes as UTF-8, replacing invalid sequences, into a single page.
pub fn decode_text(bytes: &[u8]) -> Vec<PageContent> {
    let text = String::from_utf8_lossy(bytes);
    vec![PageContent::from_text(1, &text)]
}
