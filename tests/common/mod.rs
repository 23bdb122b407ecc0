//! Shared helpers for integration tests.

#![allow(dead_code)]

use pdf_sentiment::writer::DocumentWriter;
use pdf_sentiment::{AnalyzerError, PolarityScores, Result, SentimentAnalyzer};
use std::collections::HashMap;

/// One drawing call seen by [`RecordingWriter`].
#[derive(Debug, Clone, PartialEq)]
pub enum Draw {
    Font { name: String, size: f32 },
    Text { x: f32, y: f32, text: String },
    Image { x: f32, y: f32, width: f32, height: f32, bytes: usize },
    NewPage,
}

/// Document writer that records calls instead of producing a file.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    calls: Vec<Draw>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentWriter for RecordingWriter {
    type Output = Vec<Draw>;

    fn set_font(&mut self, font: &str, size: f32) -> Result<()> {
        self.calls.push(Draw::Font {
            name: font.to_string(),
            size,
        });
        Ok(())
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) -> Result<()> {
        self.calls.push(Draw::Text {
            x,
            y,
            text: text.to_string(),
        });
        Ok(())
    }

    fn draw_image(&mut self, x: f32, y: f32, width: f32, height: f32, image: &[u8]) -> Result<()> {
        self.calls.push(Draw::Image {
            x,
            y,
            width,
            height,
            bytes: image.len(),
        });
        Ok(())
    }

    fn new_page(&mut self) -> Result<()> {
        self.calls.push(Draw::NewPage);
        Ok(())
    }

    fn finalize(self) -> Result<Vec<Draw>> {
        Ok(self.calls)
    }
}

/// Text lines grouped by page.
pub fn pages(calls: &[Draw]) -> Vec<Vec<(f32, String)>> {
    let mut pages = vec![Vec::new()];
    for call in calls {
        match call {
            Draw::NewPage => pages.push(Vec::new()),
            Draw::Text { y, text, .. } => {
                if let Some(page) = pages.last_mut() {
                    page.push((*y, text.clone()));
                }
            },
            _ => {},
        }
    }
    pages
}

/// All drawn text lines in order.
pub fn lines(calls: &[Draw]) -> Vec<String> {
    calls
        .iter()
        .filter_map(|c| match c {
            Draw::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

/// Analyzer returning preset compound scores keyed by paragraph text.
///
/// Unknown text scores as neutral.
#[derive(Debug, Default)]
pub struct ScriptedAnalyzer {
    scores: HashMap<String, f64>,
}

impl ScriptedAnalyzer {
    pub fn new(entries: &[(&str, f64)]) -> Self {
        Self {
            scores: entries.iter().map(|(t, c)| (t.to_string(), *c)).collect(),
        }
    }
}

impl SentimentAnalyzer for ScriptedAnalyzer {
    fn polarity_scores(&self, text: &str) -> std::result::Result<PolarityScores, AnalyzerError> {
        let compound = self.scores.get(text).copied().unwrap_or(0.0);
        Ok(PolarityScores {
            positive: compound.max(0.0),
            neutral: 1.0 - compound.abs(),
            negative: (-compound).max(0.0),
            compound,
        })
    }
}

/// Analyzer that fails on any text containing `trigger`.
#[derive(Debug)]
pub struct FailingAnalyzer {
    pub trigger: &'static str,
}

impl SentimentAnalyzer for FailingAnalyzer {
    fn polarity_scores(&self, text: &str) -> std::result::Result<PolarityScores, AnalyzerError> {
        if text.contains(self.trigger) {
            Err(AnalyzerError::Failed(format!("cannot score '{}'", text)))
        } else {
            Ok(PolarityScores::NEUTRAL)
        }
    }
}
