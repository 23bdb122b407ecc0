//! Integration tests for paragraph segmentation.

use pdf_sentiment::text::{segment, truncate_chars};
use proptest::prelude::*;

#[test]
fn test_windows_line_endings() {
    assert_eq!(segment("alpha\r\nbeta\r\n\r\ngamma"), vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_wrapped_lines_are_not_merged() {
    let raw = "This sentence was wrapped\nby the PDF layout.\n";
    assert_eq!(segment(raw).len(), 2);
}

#[test]
fn test_form_feed_page_separator() {
    // Form feeds between extracted pages are blank after trimming.
    assert_eq!(segment("page one\n\u{0C}\npage two"), vec!["page one", "page two"]);
}

#[test]
fn test_truncate_multibyte() {
    let text = "é".repeat(120);
    let cut = truncate_chars(&text, 100);
    assert_eq!(cut.chars().count(), 100);
    assert_eq!(cut.len(), 200);
}

proptest! {
    #[test]
    fn prop_no_blank_paragraphs(raw in "[a-z \t\r\n]{0,200}") {
        for paragraph in segment(&raw) {
            prop_assert!(!paragraph.trim().is_empty());
            prop_assert_eq!(paragraph.trim(), paragraph.as_str());
        }
    }

    #[test]
    fn prop_idempotent(raw in "[a-zA-Z0-9 .,!?\t\r\n]{0,300}") {
        let once = segment(&raw);
        let twice = segment(&once.join("\n"));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_order_preserved(lines in prop::collection::vec("[a-z]{1,12}", 0..40)) {
        let raw = lines.join("\n\n  \n");
        prop_assert_eq!(segment(&raw), lines);
    }

    #[test]
    fn prop_truncation_is_prefix(text in "\\PC{0,150}", limit in 1usize..120) {
        let cut = truncate_chars(&text, limit);
        prop_assert!(text.starts_with(cut));
        prop_assert_eq!(cut.chars().count(), text.chars().count().min(limit));
    }
}
