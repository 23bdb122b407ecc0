//! PDF writing for sentiment reports.
//!
//! ## Architecture
//!
//! ```text
//! ReportRenderer
//!     ↓ set_font / draw_text / draw_image / new_page / finalize
//! [DocumentWriter] (PdfDocumentWriter)
//!     ↓
//! [ContentStreamBuilder] (per-page operators)
//!     ↓
//! [PdfWriter] (pages, fonts, image XObjects, xref, trailer)
//!     ↓
//! [ObjectSerializer]
//!     ↓
//! PDF bytes
//! ```

mod content_stream;
mod document_writer;
mod encoding;
mod image_handler;
mod object_serializer;
mod pdf_writer;

pub use content_stream::{ContentStreamBuilder, ContentStreamOp};
pub use document_writer::{DocumentWriter, PdfDocumentWriter};
pub use encoding::encode_win_ansi;
pub use image_handler::{ColorSpace, ImageData, ImageError};
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::{is_standard_font, PdfWriter, PdfWriterConfig, STANDARD_FONTS};
