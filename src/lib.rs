// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]

//! # PDF Sentiment
//!
//! Paragraph-level sentiment trend reports for PDF and plain-text documents.
//!
//! ## Core Features
//!
//! - **Extraction**: PDF text via `pdf-extract`, strict UTF-8 for text files
//! - **Segmentation**: one paragraph per non-blank line, order preserved
//! - **Scoring**: VADER-style lexicon analyzer behind the [`SentimentAnalyzer`] trait
//! - **Trend**: `(index, compound)` series and summary statistics
//! - **Chart**: line chart with zero reference line rasterized by `tiny-skia`
//! - **Report**: paginated PDF with title, chart and one entry per paragraph
//!
//! ## Quick Start
//!
//! ```ignore
//! use pdf_sentiment::{Pipeline, PipelineConfig, SourceKind};
//!
//! # fn main() -> pdf_sentiment::Result<()> {
//! let pipeline = Pipeline::new(PipelineConfig::default())?;
//! let bytes = std::fs::read("letters.pdf")?;
//! let output = pipeline.run(&bytes, SourceKind::Pdf)?;
//!
//! for paragraph in &output.paragraphs {
//!     println!("{} {:.2}", paragraph.index(), paragraph.compound());
//! }
//! std::fs::write("report.pdf", output.report.pdf())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

// Error handling
pub mod error;

// Configuration
pub mod config;

// Input
pub mod extractors;
pub mod text;

// Scoring and aggregation
pub mod sentiment;
pub mod trend;

// Output
pub mod object;
pub mod rendering;
pub mod report;
pub mod summary;
pub mod writer;

// Orchestration
pub mod pipeline;

pub use config::{PipelineConfig, ReportLayout};
pub use error::{Error, Result, Stage};
pub use extractors::{SourceKind, TextExtractor};
pub use pipeline::{Pipeline, PipelineOutput};
pub use report::{LayoutSummary, ReportArtifact, ReportRenderer};
pub use sentiment::{
    score, AnalyzerError, LexiconAnalyzer, ParagraphSequence, PolarityScores, ScoredParagraph,
    SentimentAnalyzer,
};
pub use text::segment;
pub use trend::{mean_compound, to_series, TrendPoint, TrendSeries, TrendSummary};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
