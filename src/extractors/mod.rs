//! Raw text extraction from source documents.
//!
//! PDF input goes through the `pdf-extract` crate; anything else is treated
//! as UTF-8 text.

mod pdf;
mod plain;

pub use pdf::PdfTextExtractor;
pub use plain::PlainTextExtractor;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Extracts raw text from document bytes.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// Kind of source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Pdf,
    Text,
}

impl SourceKind {
    /// PDF when the bytes start with `%PDF-` after optional whitespace,
    /// otherwise plain text.
    pub fn detect(bytes: &[u8]) -> Self {
        let start = bytes
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(bytes.len());
        if bytes[start..].starts_with(b"%PDF-") {
            SourceKind::Pdf
        } else {
            SourceKind::Text
        }
    }

    /// Parse a `--format`-style name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pdf" => Some(SourceKind::Pdf),
            "text" | "txt" => Some(SourceKind::Text),
            _ => None,
        }
    }

    /// Extractor for this kind of source.
    pub fn extractor(self) -> Box<dyn TextExtractor> {
        match self {
            SourceKind::Pdf => Box::new(PdfTextExtractor),
            SourceKind::Text => Box::new(PlainTextExtractor),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Pdf => write!(f, "pdf"),
            SourceKind::Text => write!(f, "text"),
        }
    }
}
