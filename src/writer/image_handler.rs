//! Image embedding for PDF generation.
//!
//! Images are embedded as Image XObjects (ISO 32000-1 §8.9). PNG input is
//! decoded with the `image` crate and re-compressed with Flate; an alpha
//! channel that is not fully opaque becomes a DeviceGray soft mask.

use crate::object::{Dictionary, Object};
use std::io::Write;

/// Color space for image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// Grayscale (1 component per pixel)
    DeviceGray,
    /// RGB color (3 components per pixel)
    DeviceRGB,
}

impl ColorSpace {
    /// Get the PDF name for this color space.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            ColorSpace::DeviceGray => "DeviceGray",
            ColorSpace::DeviceRGB => "DeviceRGB",
        }
    }
}

/// Decoded, Flate-compressed image ready for embedding.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Color space
    pub color_space: ColorSpace,
    /// Flate-compressed samples
    pub data: Vec<u8>,
    /// Flate-compressed alpha samples, when the image has transparency
    pub soft_mask: Option<Vec<u8>>,
}

impl ImageData {
    /// Decode a PNG image.
    pub fn from_png(data: &[u8]) -> Result<Self, ImageError> {
        use image::GenericImageView;

        if data.len() < 8 || &data[0..8] != b"\x89PNG\r\n\x1a\n" {
            return Err(ImageError::UnsupportedFormat);
        }

        let img = image::load_from_memory_with_format(data, image::ImageFormat::Png)
            .map_err(|e| ImageError::DecodeError(e.to_string()))?;

        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidData(format!("empty image {}x{}", width, height)));
        }

        let (color_space, pixels, alpha) = match img.color() {
            image::ColorType::L8 | image::ColorType::L16 => {
                (ColorSpace::DeviceGray, img.to_luma8().into_raw(), None)
            },
            image::ColorType::Rgb8 | image::ColorType::Rgb16 => {
                (ColorSpace::DeviceRGB, img.to_rgb8().into_raw(), None)
            },
            _ => {
                let rgba = img.to_rgba8();
                let mut rgb = Vec::with_capacity((width * height * 3) as usize);
                let mut alpha_channel = Vec::with_capacity((width * height) as usize);
                for pixel in rgba.pixels() {
                    rgb.extend_from_slice(&pixel.0[..3]);
                    alpha_channel.push(pixel.0[3]);
                }
                let alpha = if alpha_channel.iter().all(|&a| a == u8::MAX) {
                    None
                } else {
                    Some(alpha_channel)
                };
                (ColorSpace::DeviceRGB, rgb, alpha)
            },
        };

        Ok(Self {
            width,
            height,
            color_space,
            data: compress_image_data(&pixels)?,
            soft_mask: alpha.map(|a| compress_image_data(&a)).transpose()?,
        })
    }

    /// Image XObject dictionary (without `Length` and `SMask`).
    pub fn xobject_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert("Type".to_string(), Object::name("XObject"));
        dict.insert("Subtype".to_string(), Object::name("Image"));
        dict.insert("Width".to_string(), Object::Integer(self.width as i64));
        dict.insert("Height".to_string(), Object::Integer(self.height as i64));
        dict.insert("ColorSpace".to_string(), Object::name(self.color_space.pdf_name()));
        dict.insert("BitsPerComponent".to_string(), Object::Integer(8));
        dict.insert("Filter".to_string(), Object::name("FlateDecode"));
        dict
    }

    /// Soft mask XObject dictionary, if the image has transparency.
    pub fn soft_mask_dict(&self) -> Option<Dictionary> {
        self.soft_mask.as_ref().map(|_| {
            let mut dict = self.xobject_dict();
            dict.insert("ColorSpace".to_string(), Object::name("DeviceGray"));
            dict
        })
    }
}

/// Image embedding error.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// Unsupported image format
    #[error("Unsupported image format (expected PNG)")]
    UnsupportedFormat,

    /// Failed to decode image
    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    /// Failed to compress image data
    #[error("Compression error: {0}")]
    CompressionError(String),

    /// Invalid image data
    #[error("Invalid image data: {0}")]
    InvalidData(String),
}

fn compress_image_data(data: &[u8]) -> Result<Vec<u8>, ImageError> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| ImageError::CompressionError(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| ImageError::CompressionError(e.to_string()))
}
