//! End-to-end report pipeline.
//!
//! ```text
//! document bytes
//!     ↓
//! [TextExtractor] (PDF or UTF-8 text)
//!     ↓
//! [segment] → paragraphs
//!     ↓
//! [score] with the shared SentimentAnalyzer → ParagraphSequence
//!     ↓                         ↘
//! [to_series] → TrendSeries      scored entries
//!     ↓                         ↙
//! [ChartRenderer] → PNG   →   [ReportRenderer] → PDF bytes
//! ```
//!
//! Stages run strictly in order and the first failure ends the run. A
//! `Pipeline` holds only immutable configuration and shared read-only
//! components, so one instance can serve runs on several threads.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::extractors::SourceKind;
use crate::rendering::{ChartRenderer, LineChartRenderer};
use crate::report::{ReportArtifact, ReportRenderer};
use crate::sentiment::{score, LexiconAnalyzer, ParagraphSequence, SentimentAnalyzer};
use crate::text::segment;
use crate::trend::{to_series, TrendSeries, TrendSummary};
use std::sync::Arc;

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub paragraphs: ParagraphSequence,
    pub series: TrendSeries,
    pub summary: TrendSummary,
    pub report: ReportArtifact,
}

/// Sentiment report pipeline.
pub struct Pipeline {
    config: PipelineConfig,
    analyzer: Arc<dyn SentimentAnalyzer>,
    chart_renderer: Arc<dyn ChartRenderer>,
    report_renderer: ReportRenderer,
}

impl Pipeline {
    /// Build a pipeline with the built-in lexicon analyzer and line chart.
    ///
    /// The configuration is validated here, before any input is read.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            analyzer: Arc::new(LexiconAnalyzer::new()),
            chart_renderer: Arc::new(LineChartRenderer::new(config.chart.clone())),
            report_renderer: ReportRenderer::new(config.layout.clone()),
            config,
        })
    }

    /// Replace the sentiment analyzer.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Replace the chart renderer.
    pub fn with_chart_renderer(mut self, renderer: Arc<dyn ChartRenderer>) -> Self {
        self.chart_renderer = renderer;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run on document bytes of a known kind.
    pub fn run(&self, bytes: &[u8], kind: SourceKind) -> Result<PipelineOutput> {
        log::info!("Extracting text from {} bytes ({})", bytes.len(), kind);
        let raw = kind.extractor().extract(bytes)?;
        self.run_text(&raw)
    }

    /// Run on document bytes, detecting PDF versus plain text.
    pub fn run_detect(&self, bytes: &[u8]) -> Result<PipelineOutput> {
        self.run(bytes, SourceKind::detect(bytes))
    }

    /// Run on already extracted text.
    pub fn run_text(&self, raw: &str) -> Result<PipelineOutput> {
        let paragraphs = segment(raw);
        log::info!("Segmented {} paragraphs", paragraphs.len());

        let scored = score(&paragraphs, self.analyzer.as_ref())?;
        let series = to_series(&scored);
        let summary = TrendSummary::from_sequence(&scored);
        log::info!(
            "Scored {} paragraphs (mean compound {})",
            scored.len(),
            summary.mean_display()
        );

        let chart = if self.config.include_chart && !series.is_empty() {
            Some(self.chart_renderer.render(&series)?)
        } else {
            log::debug!("Trend chart skipped");
            None
        };

        let report = self.report_renderer.render(&scored, chart)?;
        log::info!(
            "Report complete: {} pages, {} bytes",
            report.layout().pages,
            report.pdf().len()
        );

        Ok(PipelineOutput {
            paragraphs: scored,
            series,
            summary,
            report,
        })
    }
}
