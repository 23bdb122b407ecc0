//! Report layout and pagination.
//!
//! The renderer walks the scored paragraphs once and emits drawing calls on a
//! [`DocumentWriter`]: the title, the optional trend chart, and three lines per
//! paragraph (header, truncated text, separator). Lines are placed greedily
//! with a single cursor; whenever the cursor has dropped below the bottom
//! margin a new page is started before the next line is drawn.

use crate::config::ReportLayout;
use crate::error::Result;
use crate::sentiment::{ParagraphSequence, ScoredParagraph};
use crate::text::truncate_chars;
use crate::writer::{DocumentWriter, PdfDocumentWriter, PdfWriterConfig};
use serde::Serialize;

/// What the renderer drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LayoutSummary {
    /// Pages in the document
    pub pages: usize,
    /// Body lines drawn (title excluded)
    pub lines: usize,
    /// Paragraph entries drawn
    pub entries: usize,
    /// Whether the chart was embedded
    pub chart: bool,
}

/// Output of one report rendering.
///
/// Owns the PDF bytes and the chart PNG it embeds, if any.
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pdf: Vec<u8>,
    chart: Option<Vec<u8>>,
    layout: LayoutSummary,
}

impl ReportArtifact {
    pub fn pdf(&self) -> &[u8] {
        &self.pdf
    }

    /// PNG bytes of the embedded chart.
    pub fn chart(&self) -> Option<&[u8]> {
        self.chart.as_deref()
    }

    pub fn layout(&self) -> &LayoutSummary {
        &self.layout
    }

    /// Take the PDF bytes.
    pub fn into_pdf(self) -> Vec<u8> {
        self.pdf
    }
}

/// Body-text cursor.
///
/// The only state is the y position of the next line; the self-transition
/// "cursor below the margin" starts a new page.
struct PageCursor<'a> {
    layout: &'a ReportLayout,
    y: f32,
    pages: usize,
    lines: usize,
}

impl<'a> PageCursor<'a> {
    fn new(layout: &'a ReportLayout, y: f32) -> Self {
        Self {
            layout,
            y,
            pages: 1,
            lines: 0,
        }
    }

    fn line<W: DocumentWriter>(&mut self, writer: &mut W, text: &str) -> Result<()> {
        let layout = self.layout;
        if self.y < layout.bottom_margin {
            writer.new_page()?;
            writer.set_font(&layout.body_font, layout.body_font_size)?;
            self.pages += 1;
            log::debug!("Page break before line {} (cursor at {})", self.lines + 1, self.y);
            self.y = layout.top_y;
        }
        writer.draw_text(layout.left_margin, self.y, truncate_chars(text, layout.max_line_chars))?;
        self.y -= layout.line_height;
        self.lines += 1;
        Ok(())
    }
}

/// Header line of a paragraph entry.
pub fn entry_header(paragraph: &ScoredParagraph) -> String {
    format!("Paragraph {} (Compound: {:.2}):", paragraph.index(), paragraph.compound())
}

/// Lays out sentiment reports.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    layout: ReportLayout,
}

impl ReportRenderer {
    pub fn new(layout: ReportLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ReportLayout {
        &self.layout
    }

    /// Draw the report on `writer` and finalize it.
    ///
    /// The chart is drawn only when PNG bytes are given and the sequence is
    /// non-empty.
    pub fn render_with<W: DocumentWriter>(
        &self,
        mut writer: W,
        sequence: &ParagraphSequence,
        chart: Option<&[u8]>,
    ) -> Result<(W::Output, LayoutSummary)> {
        let layout = &self.layout;
        let chart = chart.filter(|_| !sequence.is_empty());
        log::info!(
            "Rendering report: {} entries, chart {}",
            sequence.len(),
            if chart.is_some() { "included" } else { "omitted" }
        );

        writer.set_font(&layout.title_font, layout.title_font_size)?;
        writer.draw_text(
            layout.left_margin,
            layout.title_y,
            truncate_chars(&layout.title, layout.max_line_chars),
        )?;

        if let Some(png) = chart {
            writer.draw_image(
                layout.left_margin,
                layout.chart_bottom(),
                layout.chart_width,
                layout.chart_height,
                png,
            )?;
        }

        writer.set_font(&layout.body_font, layout.body_font_size)?;
        let mut cursor = PageCursor::new(layout, layout.body_start_y(chart.is_some()));
        let separator = layout.separator();
        for paragraph in sequence {
            cursor.line(&mut writer, &entry_header(paragraph))?;
            cursor.line(&mut writer, paragraph.text())?;
            cursor.line(&mut writer, &separator)?;
        }

        let summary = LayoutSummary {
            pages: cursor.pages,
            lines: cursor.lines,
            entries: sequence.len(),
            chart: chart.is_some(),
        };
        let output = writer.finalize()?;
        log::info!("Report laid out on {} pages ({} lines)", summary.pages, summary.lines);
        Ok((output, summary))
    }

    /// Render the report to PDF bytes.
    pub fn render(&self, sequence: &ParagraphSequence, chart: Option<Vec<u8>>) -> Result<ReportArtifact> {
        let config = PdfWriterConfig::default()
            .with_title(self.layout.title.clone())
            .with_subject("Paragraph sentiment trend");
        let writer = PdfDocumentWriter::new(config, self.layout.page_width, self.layout.page_height);
        let (pdf, layout) = self.render_with(writer, sequence, chart.as_deref())?;
        let chart = chart.filter(|_| layout.chart);
        Ok(ReportArtifact { pdf, chart, layout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{score, AnalyzerError, PolarityScores, SentimentAnalyzer};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Font(String),
        Text(f32, f32, String),
        Image(f32, f32),
        NewPage,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl DocumentWriter for Recorder {
        type Output = Vec<Call>;

        fn set_font(&mut self, font: &str, _size: f32) -> Result<()> {
            self.calls.push(Call::Font(font.to_string()));
            Ok(())
        }

        fn draw_text(&mut self, x: f32, y: f32, text: &str) -> Result<()> {
            self.calls.push(Call::Text(x, y, text.to_string()));
            Ok(())
        }

        fn draw_image(&mut self, x: f32, y: f32, _w: f32, _h: f32, _image: &[u8]) -> Result<()> {
            self.calls.push(Call::Image(x, y));
            Ok(())
        }

        fn new_page(&mut self) -> Result<()> {
            self.calls.push(Call::NewPage);
            Ok(())
        }

        fn finalize(self) -> Result<Vec<Call>> {
            Ok(self.calls)
        }
    }

    struct Fixed;

    impl SentimentAnalyzer for Fixed {
        fn polarity_scores(&self, _text: &str) -> std::result::Result<PolarityScores, AnalyzerError> {
            Ok(PolarityScores {
                compound: 0.456,
                ..PolarityScores::NEUTRAL
            })
        }
    }

    fn paragraphs(n: usize) -> ParagraphSequence {
        let texts: Vec<String> = (1..=n).map(|i| format!("Paragraph body {}", i)).collect();
        score(&texts, &Fixed).unwrap()
    }

    fn texts(calls: &[Call]) -> Vec<&Call> {
        calls.iter().filter(|c| matches!(c, Call::Text(..))).collect()
    }

    #[test]
    fn test_empty_sequence_title_only() {
        let (calls, summary) = ReportRenderer::default()
            .render_with(Recorder::default(), &ParagraphSequence::default(), Some(b"png"))
            .unwrap();
        assert_eq!(texts(&calls), vec![&Call::Text(50.0, 742.0, "Sentiment Analysis Report".into())]);
        assert!(!calls.iter().any(|c| matches!(c, Call::Image(..) | Call::NewPage)));
        assert_eq!(summary.pages, 1);
        assert_eq!(summary.entries, 0);
        assert!(!summary.chart);
    }

    #[test]
    fn test_entry_lines_without_chart() {
        let (calls, summary) = ReportRenderer::default()
            .render_with(Recorder::default(), &paragraphs(1), None)
            .unwrap();
        let texts = texts(&calls);
        assert_eq!(texts[1], &Call::Text(50.0, 712.0, "Paragraph 1 (Compound: 0.46):".into()));
        assert_eq!(texts[2], &Call::Text(50.0, 699.0, "Paragraph body 1".into()));
        assert_eq!(texts[3], &Call::Text(50.0, 686.0, "-".repeat(90)));
        assert_eq!(summary.lines, 3);
    }

    #[test]
    fn test_chart_placed_below_title() {
        let (calls, summary) = ReportRenderer::default()
            .render_with(Recorder::default(), &paragraphs(1), Some(b"png"))
            .unwrap();
        assert!(calls.contains(&Call::Image(50.0, 462.0)));
        assert_eq!(texts(&calls)[1], &Call::Text(50.0, 442.0, "Paragraph 1 (Compound: 0.46):".into()));
        assert!(summary.chart);
    }

    #[test]
    fn test_page_break_before_violating_line() {
        let (calls, summary) = ReportRenderer::default()
            .render_with(Recorder::default(), &paragraphs(200), None)
            .unwrap();
        assert_eq!(summary.lines, 600);
        assert_eq!(summary.pages, 12);
        let breaks = calls.iter().filter(|c| **c == Call::NewPage).count();
        assert_eq!(breaks, 11);

        for (i, call) in calls.iter().enumerate() {
            if let Call::Text(_, y, _) = call {
                assert!(*y >= 60.0, "line drawn at {}", y);
            }
            if *call == Call::NewPage {
                assert_eq!(calls[i + 1], Call::Font("Helvetica".into()));
                assert!(matches!(calls[i + 2], Call::Text(_, y, _) if y == 742.0));
            }
        }

        let last: Vec<&Call> = texts(&calls).into_iter().rev().take(3).collect();
        assert!(matches!(last[2], Call::Text(_, _, t) if t == "Paragraph 200 (Compound: 0.46):"));
        assert!(matches!(last[1], Call::Text(_, _, t) if t == "Paragraph body 200"));
    }

    #[test]
    fn test_long_text_truncated_not_wrapped() {
        let long = "x".repeat(250);
        let seq = score(&[long], &Fixed).unwrap();
        let (calls, summary) = ReportRenderer::default()
            .render_with(Recorder::default(), &seq, None)
            .unwrap();
        assert_eq!(summary.lines, 3);
        assert_eq!(texts(&calls)[2], &Call::Text(50.0, 699.0, "x".repeat(100)));
    }

    #[test]
    fn test_render_produces_pdf_artifact() {
        let artifact = ReportRenderer::default().render(&paragraphs(3), None).unwrap();
        assert!(artifact.pdf().starts_with(b"%PDF-1.7"));
        assert!(artifact.chart().is_none());
        assert_eq!(artifact.layout().entries, 3);
    }
}
