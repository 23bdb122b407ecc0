//! Console summary and JSON export of scored paragraphs.

use crate::error::Result;
use crate::sentiment::ParagraphSequence;
use crate::trend::TrendSummary;
use serde::Serialize;
use std::io::Write;

/// Print each paragraph with its compound score, then the trend summary.
///
/// ```text
/// Paragraph 1 (Compound: 0.6249):
/// Text: Great news today.
///
/// ```
pub fn write_console_summary<W: Write>(
    out: &mut W,
    sequence: &ParagraphSequence,
    summary: &TrendSummary,
) -> Result<()> {
    for paragraph in sequence {
        writeln!(out, "Paragraph {} (Compound: {}):", paragraph.index(), paragraph.compound())?;
        writeln!(out, "Text: {}", paragraph.text())?;
        writeln!(out)?;
    }
    writeln!(
        out,
        "Paragraphs: {} (positive {}, neutral {}, negative {})",
        summary.paragraphs, summary.positive, summary.neutral, summary.negative
    )?;
    writeln!(out, "Mean compound: {}", summary.mean_display())?;
    Ok(())
}

#[derive(Serialize)]
struct Export<'a> {
    summary: &'a TrendSummary,
    paragraphs: &'a ParagraphSequence,
}

/// Pretty-printed JSON `{ "summary": ..., "paragraphs": [...] }`.
pub fn to_json(sequence: &ParagraphSequence, summary: &TrendSummary) -> Result<String> {
    let json = serde_json::to_string_pretty(&Export {
        summary,
        paragraphs: sequence,
    })?;
    Ok(json)
}
