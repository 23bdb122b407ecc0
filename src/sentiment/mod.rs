//! Sentiment scoring.
//!
//! The scorer depends only on the [`SentimentAnalyzer`] contract: a
//! deterministic, read-only function from text to a four-part polarity score.
//! [`LexiconAnalyzer`] is the built-in rule-based implementation.

mod analyzer;
mod lexicon;
mod scorer;

pub use analyzer::LexiconAnalyzer;
pub use lexicon::Lexicon;
pub use scorer::{score, ParagraphSequence, ScoredParagraph};

use serde::{Deserialize, Serialize};

/// Polarity scores for one span of text.
///
/// `positive + neutral + negative` is approximately 1 and `compound` is the
/// normalized overall polarity in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Proportion of the text that is positive
    pub positive: f64,
    /// Proportion of the text that is neutral
    pub neutral: f64,
    /// Proportion of the text that is negative
    pub negative: f64,
    /// Normalized overall polarity
    pub compound: f64,
}

impl PolarityScores {
    /// Scores of text with no sentiment-bearing content.
    pub const NEUTRAL: PolarityScores = PolarityScores {
        positive: 0.0,
        neutral: 1.0,
        negative: 0.0,
        compound: 0.0,
    };
}

/// Analyzer failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyzerError {
    /// The analyzer was given blank text
    #[error("text is empty")]
    EmptyText,

    /// Any other analyzer failure
    #[error("{0}")]
    Failed(String),
}

/// A sentiment-analysis capability.
///
/// Implementations must be deterministic and must not mutate shared state, so
/// a single instance can serve every pipeline run concurrently.
pub trait SentimentAnalyzer: Send + Sync {
    /// Score one span of text.
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, AnalyzerError>;
}

impl<A: SentimentAnalyzer + ?Sized> SentimentAnalyzer for std::sync::Arc<A> {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, AnalyzerError> {
        (**self).polarity_scores(text)
    }
}
