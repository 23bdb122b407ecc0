//! Paragraph segmentation.
//!
//! A "paragraph" is any line that is not blank after trimming. Wrapped lines
//! are not merged and sentence boundaries are not detected; the unit follows
//! the granularity of extracted document text.

/// Split raw document text into ordered, non-empty, trimmed paragraphs.
///
/// Lines are split on `\n` (a trailing `\r` is treated as part of the line
/// break). Empty or all-blank input yields an empty vector.
pub fn segment(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cut `text` to at most `max_chars` characters.
///
/// This is a hard cut with no ellipsis: anything past the limit is dropped
/// from the rendered line. Counting is by `char`, so multi-byte text is never
/// split inside a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
