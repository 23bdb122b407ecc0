//! Drawing surface used by the report renderer.

use super::image_handler::ImageData;
use super::pdf_writer::{PdfWriter, PdfWriterConfig};
use crate::error::Result;

/// Primitive drawing capability for paginated output.
///
/// Coordinates are PDF points with the origin at the bottom-left of the page.
/// A writer starts with one open page.
pub trait DocumentWriter {
    /// Finished document type.
    type Output;

    /// Select the font used by subsequent [`draw_text`](Self::draw_text) calls.
    fn set_font(&mut self, font: &str, size: f32) -> Result<()>;

    /// Draw one line of text with its baseline origin at `(x, y)`.
    fn draw_text(&mut self, x: f32, y: f32, text: &str) -> Result<()>;

    /// Draw an encoded (PNG) image into the box with lower-left corner `(x, y)`.
    fn draw_image(&mut self, x: f32, y: f32, width: f32, height: f32, image: &[u8]) -> Result<()>;

    /// Finish the current page and open a new one.
    ///
    /// The font selection does not carry over to the new page.
    fn new_page(&mut self) -> Result<()>;

    /// Finish the document.
    fn finalize(self) -> Result<Self::Output>;
}

/// [`DocumentWriter`] producing PDF bytes.
pub struct PdfDocumentWriter {
    writer: PdfWriter,
    page_size: (f32, f32),
    current_page: usize,
    /// Resource name and size of the selected font
    font: Option<(String, f32)>,
}

impl PdfDocumentWriter {
    /// Start a document whose pages are `width` x `height` points.
    pub fn new(config: PdfWriterConfig, width: f32, height: f32) -> Self {
        let mut writer = PdfWriter::with_config(config);
        let current_page = writer.add_page(width, height);
        Self {
            writer,
            page_size: (width, height),
            current_page,
            font: None,
        }
    }

    /// Pages started so far.
    pub fn page_count(&self) -> usize {
        self.writer.page_count()
    }
}

impl DocumentWriter for PdfDocumentWriter {
    type Output = Vec<u8>;

    fn set_font(&mut self, font: &str, size: f32) -> Result<()> {
        let resource = self.writer.font_resource(font)?;
        self.font = Some((resource, size));
        Ok(())
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) -> Result<()> {
        let (resource, size) = self.font.clone().ok_or_else(|| {
            crate::Error::Render("text drawn before a font was selected".to_string())
        })?;
        self.writer
            .content(self.current_page)?
            .set_font(&resource, size)
            .text(text, x, y);
        Ok(())
    }

    fn draw_image(&mut self, x: f32, y: f32, width: f32, height: f32, image: &[u8]) -> Result<()> {
        let data = ImageData::from_png(image)?;
        log::debug!("Embedding {}x{} image at ({}, {})", data.width, data.height, x, y);
        let resource = self.writer.add_image(data);
        self.writer
            .content(self.current_page)?
            .draw_image(&resource, x, y, width, height);
        Ok(())
    }

    fn new_page(&mut self) -> Result<()> {
        let (width, height) = self.page_size;
        self.current_page = self.writer.add_page(width, height);
        self.font = None;
        Ok(())
    }

    fn finalize(self) -> Result<Vec<u8>> {
        let replaced = self.writer.replaced_chars();
        if replaced > 0 {
            log::warn!("{} characters outside WinAnsiEncoding were replaced with '?'", replaced);
        }
        self.writer.finish()
    }
}
