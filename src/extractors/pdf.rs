//! PDF text extraction backed by `pdf-extract`.

use super::TextExtractor;
use crate::error::{Error, Result};
use std::panic::{self, AssertUnwindSafe};

/// Extracts the text of every page, in page order.
///
/// `pdf-extract` separates pages with form feeds; those count as line breaks
/// for segmentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // The library panics on some malformed files instead of returning an error.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)));
        let text = match outcome {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => return Err(Error::Extraction(e.to_string())),
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                return Err(Error::Extraction(format!("PDF parser panicked: {}", reason)));
            },
        };
        log::debug!("Extracted {} characters from {} PDF bytes", text.len(), bytes.len());
        Ok(text.replace('\u{0C}', "\n"))
    }
}
