//! Plain-text sources.

use super::TextExtractor;
use crate::error::{Error, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes strict UTF-8, dropping a leading byte-order mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let text = std::str::from_utf8(bytes).map_err(|e| {
            Error::Extraction(format!("input is not valid UTF-8 text: {}", e))
        })?;
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        assert_eq!(PlainTextExtractor.extract("Café\nnaïve".as_bytes()).unwrap(), "Café\nnaïve");
    }

    #[test]
    fn test_bom_stripped() {
        assert_eq!(PlainTextExtractor.extract(b"\xEF\xBB\xBFhello").unwrap(), "hello");
    }

    #[test]
    fn test_invalid_utf8() {
        let err = PlainTextExtractor.extract(b"bad \xFF byte").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[test]
    fn test_empty() {
        assert_eq!(PlainTextExtractor.extract(b"").unwrap(), "");
    }
}
