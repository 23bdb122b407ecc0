//! Error types for the sentiment report pipeline.
//!
//! Every failure is fatal for the current run. Each variant belongs to exactly
//! one pipeline [`Stage`], so callers can report which stage failed and why.

use crate::sentiment::AnalyzerError;
use crate::writer::ImageError;
use std::fmt;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Reading text out of the source document
    Extraction,
    /// Scoring paragraphs with the sentiment analyzer
    Analysis,
    /// Chart rasterization and report layout/writing
    Render,
    /// Loading or validating configuration
    Configuration,
    /// Reading inputs or writing outputs
    Io,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Extraction => "Extraction",
            Stage::Analysis => "Analysis",
            Stage::Render => "Render",
            Stage::Configuration => "Configuration",
            Stage::Io => "I/O",
        };
        f.write_str(name)
    }
}

/// Error types that can occur while producing a report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source document could not be turned into text
    #[error("Text extraction failed: {0}")]
    Extraction(String),

    /// The analyzer failed on a paragraph; no partial results are kept
    #[error("Sentiment analysis failed for paragraph {index}: {source}")]
    Analysis {
        /// 1-based index of the paragraph being scored
        index: usize,
        /// Analyzer failure
        source: AnalyzerError,
    },

    /// Chart rasterization failed
    #[error("Chart rendering failed: {0}")]
    Chart(String),

    /// Document layout or writing failed
    #[error("Report rendering failed: {0}")]
    Render(String),

    /// Chart image could not be embedded
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The pipeline stage this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            Error::Extraction(_) => Stage::Extraction,
            Error::Analysis { .. } => Stage::Analysis,
            Error::Chart(_) | Error::Render(_) | Error::Image(_) => Stage::Render,
            Error::Config(_) => Stage::Configuration,
            Error::Io(_) => Stage::Io,
        }
    }

    /// One-line message naming the failed stage, e.g. `"Render failed: ..."`.
    pub fn report_message(&self) -> String {
        format!("{} failed: {}", self.stage(), self)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
