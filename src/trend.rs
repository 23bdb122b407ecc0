//! Trend aggregation.
//!
//! Projects a [`ParagraphSequence`] onto `(index, compound)` points for the
//! chart, plus a few summary statistics.

use crate::sentiment::ParagraphSequence;
use serde::Serialize;

/// Compound score at or above which a paragraph counts as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which a paragraph counts as negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// One chart point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Paragraph index (x)
    pub index: usize,
    /// Compound score (y)
    pub compound: f64,
}

/// Ordered trend points, one per paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TrendSeries {
    points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// Build a series directly from points.
    ///
    /// Points are kept in the given order.
    pub fn from_points(points: Vec<TrendPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrendPoint> {
        self.points.iter()
    }

    /// Smallest and largest compound score, `None` when empty.
    pub fn compound_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter().map(|p| p.compound);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c))))
    }
}

/// Project a sequence onto its trend series.
pub fn to_series(sequence: &ParagraphSequence) -> TrendSeries {
    TrendSeries {
        points: sequence
            .iter()
            .map(|p| TrendPoint {
                index: p.index(),
                compound: p.compound(),
            })
            .collect(),
    }
}

/// Mean compound score, `None` for an empty sequence.
pub fn mean_compound(sequence: &ParagraphSequence) -> Option<f64> {
    if sequence.is_empty() {
        return None;
    }
    let sum: f64 = sequence.iter().map(|p| p.compound()).sum();
    Some(sum / sequence.len() as f64)
}

/// Sentiment label of a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Aggregate statistics of a scored document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub paragraphs: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl TrendSummary {
    pub fn from_sequence(sequence: &ParagraphSequence) -> Self {
        let (min, max) = match to_series(sequence).compound_range() {
            Some((lo, hi)) => (Some(lo), Some(hi)),
            None => (None, None),
        };
        let mut summary = TrendSummary {
            paragraphs: sequence.len(),
            mean: mean_compound(sequence),
            min,
            max,
            positive: 0,
            negative: 0,
            neutral: 0,
        };
        for paragraph in sequence {
            match SentimentLabel::from_compound(paragraph.compound()) {
                SentimentLabel::Positive => summary.positive += 1,
                SentimentLabel::Negative => summary.negative += 1,
                SentimentLabel::Neutral => summary.neutral += 1,
            }
        }
        summary
    }

    /// Mean formatted to two decimals, or `n/a`.
    pub fn mean_display(&self) -> String {
        match self.mean {
            Some(mean) => format!("{:.2}", mean),
            None => "n/a".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{score, AnalyzerError, PolarityScores, SentimentAnalyzer};

    /// Reads the compound score from the text itself.
    struct Literal;

    impl SentimentAnalyzer for Literal {
        fn polarity_scores(&self, text: &str) -> Result<PolarityScores, AnalyzerError> {
            let compound = text
                .parse::<f64>()
                .map_err(|e| AnalyzerError::Failed(e.to_string()))?;
            Ok(PolarityScores {
                compound,
                ..PolarityScores::NEUTRAL
            })
        }
    }

    fn sequence(values: &[&str]) -> ParagraphSequence {
        score(values, &Literal).unwrap()
    }

    #[test]
    fn test_series_preserves_order() {
        let seq = sequence(&["0.5", "-0.25", "0.0"]);
        let series = to_series(&seq);
        assert_eq!(series.len(), 3);
        for (point, paragraph) in series.iter().zip(seq.iter()) {
            assert_eq!(point.index, paragraph.index());
            assert_eq!(point.compound, paragraph.compound());
        }
        assert_eq!(series.compound_range(), Some((-0.25, 0.5)));
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean_compound(&sequence(&["0.5", "-0.25", "0.5"])), Some(0.25));
        assert_eq!(mean_compound(&ParagraphSequence::default()), None);
    }

    #[test]
    fn test_summary_counts() {
        let summary = TrendSummary::from_sequence(&sequence(&["0.05", "-0.05", "0.04", "-0.9"]));
        assert_eq!(summary.paragraphs, 4);
        assert_eq!(summary.positive, 1);
        assert_eq!(summary.negative, 2);
        assert_eq!(summary.neutral, 1);
        assert_eq!(summary.min, Some(-0.9));
        assert_eq!(summary.max, Some(0.05));
    }

    #[test]
    fn test_empty_summary() {
        let summary = TrendSummary::from_sequence(&ParagraphSequence::default());
        assert_eq!(summary.mean, None);
        assert_eq!(summary.mean_display(), "n/a");
        assert!(to_series(&ParagraphSequence::default()).is_empty());
    }
}
