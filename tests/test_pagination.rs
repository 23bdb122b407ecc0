//! Integration tests for report layout and pagination.

mod common;

use common::{lines, pages, Draw, RecordingWriter, ScriptedAnalyzer};
use pdf_sentiment::{score, ParagraphSequence, ReportLayout, ReportRenderer};
use proptest::prelude::*;

const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nnot decoded by the recorder";

fn short_paragraphs(n: usize) -> ParagraphSequence {
    let texts: Vec<String> = (1..=n).map(|i| format!("Short paragraph number {}.", i)).collect();
    score(&texts, &ScriptedAnalyzer::default()).unwrap()
}

fn render(layout: ReportLayout, seq: &ParagraphSequence, chart: bool) -> Vec<Draw> {
    let chart = if chart { Some(FAKE_PNG) } else { None };
    let (calls, _) = ReportRenderer::new(layout)
        .render_with(RecordingWriter::new(), seq, chart)
        .unwrap();
    calls
}

#[test]
fn test_single_long_paragraph_three_lines() {
    let long: String = "abcdefghij".repeat(25);
    let seq = score(&[long.clone()], &ScriptedAnalyzer::new(&[(long.as_str(), -0.25)])).unwrap();
    let calls = render(ReportLayout::default(), &seq, false);

    let all = lines(&calls);
    let body = &all[1..];
    assert_eq!(body.len(), 3);
    assert_eq!(body[0], "Paragraph 1 (Compound: -0.25):");
    assert_eq!(body[1], long[..100]);
    assert_eq!(body[2], "-".repeat(90));
    assert!(!calls.contains(&Draw::NewPage));
}

#[test]
fn test_two_hundred_paragraphs_span_pages_in_order() {
    let seq = short_paragraphs(200);
    let calls = render(ReportLayout::default(), &seq, true);

    let pages = pages(&calls);
    assert!(pages.len() > 2);

    let all = lines(&calls);
    assert_eq!(all.len(), 1 + 600);
    let headers: Vec<&String> = all.iter().filter(|l| l.starts_with("Paragraph ")).collect();
    assert_eq!(headers.len(), 200);
    for (i, header) in headers.iter().enumerate() {
        assert!(header.starts_with(&format!("Paragraph {} ", i + 1)));
    }

    let tail = &all[all.len() - 3..];
    assert_eq!(tail[0], "Paragraph 200 (Compound: 0.00):");
    assert_eq!(tail[1], "Short paragraph number 200.");
    assert_eq!(tail[2], "-".repeat(90));
}

#[test]
fn test_chart_only_on_first_page() {
    let calls = render(ReportLayout::default(), &short_paragraphs(100), true);
    let images: Vec<usize> = calls
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, Draw::Image { .. }))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(images.len(), 1);
    let first_break = calls.iter().position(|c| *c == Draw::NewPage).unwrap();
    assert!(images[0] < first_break);
    assert!(calls.contains(&Draw::Image {
        x: 50.0,
        y: 462.0,
        width: 500.0,
        height: 250.0,
        bytes: FAKE_PNG.len(),
    }));
}

#[test]
fn test_empty_document_title_only() {
    let calls = render(ReportLayout::default(), &ParagraphSequence::default(), true);
    assert_eq!(lines(&calls), vec!["Sentiment Analysis Report".to_string()]);
    assert!(!calls.iter().any(|c| matches!(c, Draw::Image { .. } | Draw::NewPage)));
}

#[test]
fn test_body_font_reapplied_after_break() {
    let calls = render(ReportLayout::default(), &short_paragraphs(60), false);
    let first_break = calls.iter().position(|c| *c == Draw::NewPage).unwrap();
    assert_eq!(
        calls[first_break + 1],
        Draw::Font {
            name: "Helvetica".to_string(),
            size: 9.0
        }
    );
}

#[test]
fn test_custom_title_truncated() {
    let layout = ReportLayout::default().with_title("T".repeat(150)).with_max_line_chars(40);
    let calls = render(layout, &ParagraphSequence::default(), false);
    assert_eq!(lines(&calls), vec!["T".repeat(40)]);
}

proptest! {
    #[test]
    fn prop_never_draws_below_margin(
        n in 0usize..150,
        chart in any::<bool>(),
        line_height in 6.0f32..24.0,
        bottom_margin in 10.0f32..200.0,
    ) {
        let layout = ReportLayout::default()
            .with_line_height(line_height)
            .with_bottom_margin(bottom_margin);
        let calls = render(layout, &short_paragraphs(n), chart);

        for page in pages(&calls) {
            for (y, _) in page {
                prop_assert!(y >= bottom_margin);
            }
        }
        for (i, call) in calls.iter().enumerate() {
            if *call == Draw::NewPage {
                // The break happened because the cursor had passed the margin.
                let previous_y = calls[..i].iter().rev().find_map(|c| match c {
                    Draw::Text { y, .. } => Some(*y),
                    _ => None,
                });
                prop_assert!(previous_y.map_or(false, |y| y - line_height < bottom_margin));
            }
        }
        prop_assert_eq!(lines(&calls).len(), 1 + 3 * n);
    }
}
