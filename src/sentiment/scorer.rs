//! Paragraph scoring.

use super::{PolarityScores, SentimentAnalyzer};
use crate::error::{Error, Result};
use serde::Serialize;

/// One scored paragraph. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredParagraph {
    index: usize,
    text: String,
    positive: f64,
    neutral: f64,
    negative: f64,
    compound: f64,
}

impl ScoredParagraph {
    /// 1-based position in the document.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Paragraph text (trimmed, non-empty).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Positive proportion.
    pub fn positive(&self) -> f64 {
        self.positive
    }

    /// Neutral proportion.
    pub fn neutral(&self) -> f64 {
        self.neutral
    }

    /// Negative proportion.
    pub fn negative(&self) -> f64 {
        self.negative
    }

    /// Compound polarity.
    pub fn compound(&self) -> f64 {
        self.compound
    }

    /// The four analyzer scores.
    pub fn scores(&self) -> PolarityScores {
        PolarityScores {
            positive: self.positive,
            neutral: self.neutral,
            negative: self.negative,
            compound: self.compound,
        }
    }
}

/// Scored paragraphs in document order, indexed `1..=len`.
///
/// Only [`score`] creates sequences, which keeps the indices gap-free.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParagraphSequence {
    paragraphs: Vec<ScoredParagraph>,
}

impl ParagraphSequence {
    /// Number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Whether there are no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Iterate in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredParagraph> {
        self.paragraphs.iter()
    }

    /// Paragraphs as a slice.
    pub fn as_slice(&self) -> &[ScoredParagraph] {
        &self.paragraphs
    }

    /// Paragraph by 1-based index.
    pub fn get(&self, index: usize) -> Option<&ScoredParagraph> {
        index.checked_sub(1).and_then(|i| self.paragraphs.get(i))
    }
}

impl<'a> IntoIterator for &'a ParagraphSequence {
    type Item = &'a ScoredParagraph;
    type IntoIter = std::slice::Iter<'a, ScoredParagraph>;

    fn into_iter(self) -> Self::IntoIter {
        self.paragraphs.iter()
    }
}

/// Score every paragraph in order.
///
/// The analyzer is called exactly once per paragraph and its scores are stored
/// unchanged. The first analyzer failure aborts the whole call.
pub fn score<S: AsRef<str>>(
    paragraphs: &[S],
    analyzer: &dyn SentimentAnalyzer,
) -> Result<ParagraphSequence> {
    let mut scored = Vec::with_capacity(paragraphs.len());
    for (i, paragraph) in paragraphs.iter().enumerate() {
        let index = i + 1;
        let text = paragraph.as_ref();
        let scores = analyzer
            .polarity_scores(text)
            .map_err(|source| Error::Analysis { index, source })?;
        scored.push(ScoredParagraph {
            index,
            text: text.to_string(),
            positive: scores.positive,
            neutral: scores.neutral,
            negative: scores.negative,
            compound: scores.compound,
        });
    }
    log::debug!("Scored {} paragraphs", scored.len());
    Ok(ParagraphSequence { paragraphs: scored })
}
