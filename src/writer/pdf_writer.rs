//! PDF document writer.
//!
//! Assembles complete PDF documents: header, body objects, xref table and
//! trailer. Output is deterministic for identical page content.

use super::content_stream::ContentStreamBuilder;
use super::image_handler::ImageData;
use super::object_serializer::ObjectSerializer;
use crate::error::{Error, Result};
use crate::object::{Dictionary, Object};
use std::io::Write;

/// The standard Type1 fonts every PDF viewer provides.
pub const STANDARD_FONTS: [&str; 14] = [
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Oblique",
    "Helvetica-BoldOblique",
    "Times-Roman",
    "Times-Bold",
    "Times-Italic",
    "Times-BoldItalic",
    "Courier",
    "Courier-Bold",
    "Courier-Oblique",
    "Courier-BoldOblique",
    "Symbol",
    "ZapfDingbats",
];

/// Whether `name` is one of the standard 14 fonts.
pub fn is_standard_font(name: &str) -> bool {
    STANDARD_FONTS.contains(&name)
}

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.7")
    pub version: String,
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// Whether to Flate-compress content streams
    pub compress: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
            title: None,
            subject: None,
            creator: Some(format!("{} {}", crate::NAME, crate::VERSION)),
            compress: true,
        }
    }
}

impl PdfWriterConfig {
    /// Set document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set document subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

struct PageData {
    width: f32,
    height: f32,
    content: ContentStreamBuilder,
}

/// PDF document writer.
///
/// Fonts and images are registered once and shared by every page's resource
/// dictionary.
pub struct PdfWriter {
    config: PdfWriterConfig,
    pages: Vec<PageData>,
    /// (base font, resource name) in registration order
    fonts: Vec<(String, String)>,
    /// (resource name, image) in registration order
    images: Vec<(String, ImageData)>,
}

impl PdfWriter {
    /// Create a new PDF writer with default config.
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    /// Create a PDF writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            fonts: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Add a page with the given dimensions, returning its index.
    pub fn add_page(&mut self, width: f32, height: f32) -> usize {
        self.pages.push(PageData {
            width,
            height,
            content: ContentStreamBuilder::new(),
        });
        self.pages.len() - 1
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Content stream of a page.
    pub fn content(&mut self, page: usize) -> Result<&mut ContentStreamBuilder> {
        self.pages
            .get_mut(page)
            .map(|p| &mut p.content)
            .ok_or_else(|| Error::Render(format!("page {} does not exist", page)))
    }

    /// Resource name for a standard font, registering it on first use.
    pub fn font_resource(&mut self, base_font: &str) -> Result<String> {
        if !is_standard_font(base_font) {
            return Err(Error::Render(format!("unsupported font '{}'", base_font)));
        }
        if let Some((_, resource)) = self.fonts.iter().find(|(name, _)| name == base_font) {
            return Ok(resource.clone());
        }
        let resource = format!("F{}", self.fonts.len() + 1);
        self.fonts.push((base_font.to_string(), resource.clone()));
        Ok(resource)
    }

    /// Register an image and return its XObject resource name.
    pub fn add_image(&mut self, image: ImageData) -> String {
        let resource = format!("Im{}", self.images.len() + 1);
        self.images.push((resource.clone(), image));
        resource
    }

    /// Total characters replaced by the text encoder across all pages.
    pub fn replaced_chars(&self) -> usize {
        self.pages.iter().map(|p| p.content.replaced_chars()).sum()
    }

    /// Build the complete PDF document.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        if self.pages.is_empty() {
            return Err(Error::Render("document has no pages".to_string()));
        }

        let serializer = ObjectSerializer::compact();
        let mut objects: Vec<(u32, Object)> = Vec::new();
        let mut next_id = 1u32;
        let mut alloc = || {
            let id = next_id;
            next_id += 1;
            id
        };

        let catalog_id = alloc();
        let pages_id = alloc();

        let mut font_resources = Dictionary::new();
        for (base_font, resource) in &self.fonts {
            let id = alloc();
            objects.push((
                id,
                Object::dict(vec![
                    ("Type", Object::name("Font")),
                    ("Subtype", Object::name("Type1")),
                    ("BaseFont", Object::name(base_font)),
                    ("Encoding", Object::name("WinAnsiEncoding")),
                ]),
            ));
            font_resources.insert(resource.clone(), Object::reference(id));
        }

        let mut xobject_resources = Dictionary::new();
        for (resource, image) in &self.images {
            let id = alloc();
            let mut dict = image.xobject_dict();
            if let (Some(mask_dict), Some(mask_data)) = (image.soft_mask_dict(), &image.soft_mask) {
                let mask_id = alloc();
                dict.insert("SMask".to_string(), Object::reference(mask_id));
                objects.push((
                    mask_id,
                    Object::Stream {
                        dict: mask_dict,
                        data: bytes::Bytes::from(mask_data.clone()),
                    },
                ));
            }
            objects.push((
                id,
                Object::Stream {
                    dict,
                    data: bytes::Bytes::from(image.data.clone()),
                },
            ));
            xobject_resources.insert(resource.clone(), Object::reference(id));
        }

        let mut resources = Dictionary::new();
        resources.insert("Font".to_string(), Object::Dictionary(font_resources));
        if !xobject_resources.is_empty() {
            resources.insert("XObject".to_string(), Object::Dictionary(xobject_resources));
        }

        let mut kids = Vec::with_capacity(self.pages.len());
        for page in &mut self.pages {
            let page_id = alloc();
            let content_id = alloc();

            let raw = page.content.build()?;
            let mut content_dict = Dictionary::new();
            let data = if self.config.compress {
                content_dict.insert("Filter".to_string(), Object::name("FlateDecode"));
                compress_data(&raw)?
            } else {
                raw
            };

            objects.push((
                page_id,
                Object::dict(vec![
                    ("Type", Object::name("Page")),
                    ("Parent", Object::reference(pages_id)),
                    (
                        "MediaBox",
                        Object::rect(0.0, 0.0, page.width as f64, page.height as f64),
                    ),
                    ("Contents", Object::reference(content_id)),
                    ("Resources", Object::Dictionary(resources.clone())),
                ]),
            ));
            objects.push((
                content_id,
                Object::Stream {
                    dict: content_dict,
                    data: bytes::Bytes::from(data),
                },
            ));
            kids.push(Object::reference(page_id));
        }

        let page_count = kids.len() as i64;
        objects.push((
            pages_id,
            Object::dict(vec![
                ("Type", Object::name("Pages")),
                ("Kids", Object::Array(kids)),
                ("Count", Object::Integer(page_count)),
            ]),
        ));
        objects.push((
            catalog_id,
            Object::dict(vec![
                ("Type", Object::name("Catalog")),
                ("Pages", Object::reference(pages_id)),
            ]),
        ));

        let info_id = alloc();
        let mut info = Vec::new();
        if let Some(title) = &self.config.title {
            info.push(("Title", Object::text(title)));
        }
        if let Some(subject) = &self.config.subject {
            info.push(("Subject", Object::text(subject)));
        }
        if let Some(creator) = &self.config.creator {
            info.push(("Creator", Object::text(creator)));
            info.push(("Producer", Object::text(creator)));
        }
        objects.push((info_id, Object::dict(info)));

        objects.sort_by_key(|(id, _)| *id);

        let mut output = Vec::new();
        writeln!(output, "%PDF-{}", self.config.version)?;
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        let mut offsets = Vec::with_capacity(objects.len());
        for (id, obj) in &objects {
            offsets.push(output.len());
            serializer.write_indirect(&mut output, *id, obj)?;
        }

        let xref_start = output.len();
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", objects.len() + 1)?;
        writeln!(output, "0000000000 65535 f ")?;
        for offset in &offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        let trailer = Object::dict(vec![
            ("Size", Object::Integer(objects.len() as i64 + 1)),
            ("Root", Object::reference(catalog_id)),
            ("Info", Object::reference(info_id)),
        ]);
        writeln!(output, "trailer")?;
        serializer.write_object(&mut output, &trailer)?;
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        write!(output, "%%EOF")?;

        log::debug!(
            "Wrote PDF: {} pages, {} objects, {} bytes",
            page_count,
            objects.len(),
            output.len()
        );
        Ok(output)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
