//! PDF content stream builder.
//!
//! Builds page content streams with the handful of text and image operators
//! a report page needs (ISO 32000-1:2008 sections 8-9).

use super::encoding::encode_win_ansi;
use super::object_serializer::{escape_literal, format_real};
use std::io::Write;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Save graphics state (q)
    SaveState,
    /// Restore graphics state (Q)
    RestoreState,
    /// Set transformation matrix (cm)
    Transform(f32, f32, f32, f32, f32, f32),
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font resource and size (Tf)
    SetFont(String, f32),
    /// Set text matrix (Tm)
    SetTextMatrix(f32, f32, f32, f32, f32, f32),
    /// Show text (Tj), already WinAnsi encoded
    ShowText(Vec<u8>),
    /// Paint XObject (Do)
    PaintXObject(String),
}

/// Builder for one page's content stream.
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    operations: Vec<ContentStreamOp>,
    /// Font set inside the current text object
    current_font: Option<(String, f32)>,
    in_text_object: bool,
    /// Characters replaced during encoding
    replaced_chars: usize,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Recorded operations.
    pub fn operations(&self) -> &[ContentStreamOp] {
        &self.operations
    }

    /// Number of characters that were not representable and got replaced.
    pub fn replaced_chars(&self) -> usize {
        self.replaced_chars
    }

    /// Begin a text object.
    pub fn begin_text(&mut self) -> &mut Self {
        if !self.in_text_object {
            self.op(ContentStreamOp::BeginText);
            self.in_text_object = true;
            self.current_font = None;
        }
        self
    }

    /// End a text object.
    pub fn end_text(&mut self) -> &mut Self {
        if self.in_text_object {
            self.op(ContentStreamOp::EndText);
            self.in_text_object = false;
        }
        self
    }

    /// Set font for subsequent text (`resource` is the page font resource name).
    pub fn set_font(&mut self, resource: &str, size: f32) -> &mut Self {
        self.begin_text();
        let wanted = (resource.to_string(), size);
        if self.current_font.as_ref() != Some(&wanted) {
            self.op(ContentStreamOp::SetFont(resource.to_string(), size));
            self.current_font = Some(wanted);
        }
        self
    }

    /// Show text with its baseline origin at `(x, y)`.
    pub fn text(&mut self, text: &str, x: f32, y: f32) -> &mut Self {
        let (encoded, replaced) = encode_win_ansi(text);
        self.replaced_chars += replaced;
        self.begin_text();
        self.op(ContentStreamOp::SetTextMatrix(1.0, 0.0, 0.0, 1.0, x, y));
        self.op(ContentStreamOp::ShowText(encoded));
        self
    }

    /// Draw an image XObject with its lower-left corner at `(x, y)`.
    pub fn draw_image(
        &mut self,
        resource_id: &str,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> &mut Self {
        self.end_text();
        self.op(ContentStreamOp::SaveState);
        self.op(ContentStreamOp::Transform(width, 0.0, 0.0, height, x, y));
        self.op(ContentStreamOp::PaintXObject(resource_id.to_string()));
        self.op(ContentStreamOp::RestoreState);
        self
    }

    /// Build the content stream to bytes, closing any open text object.
    pub fn build(&mut self) -> std::io::Result<Vec<u8>> {
        self.end_text();
        let mut buf = Vec::new();
        for op in &self.operations {
            write_op(&mut buf, op)?;
            writeln!(buf)?;
        }
        Ok(buf)
    }
}

fn num(v: f32) -> String {
    format_real(v as f64)
}

fn write_op<W: Write>(w: &mut W, op: &ContentStreamOp) -> std::io::Result<()> {
    match op {
        ContentStreamOp::SaveState => write!(w, "q"),
        ContentStreamOp::RestoreState => write!(w, "Q"),
        ContentStreamOp::Transform(a, b, c, d, e, f) => write!(
            w,
            "{} {} {} {} {} {} cm",
            num(*a),
            num(*b),
            num(*c),
            num(*d),
            num(*e),
            num(*f)
        ),
        ContentStreamOp::BeginText => write!(w, "BT"),
        ContentStreamOp::EndText => write!(w, "ET"),
        ContentStreamOp::SetFont(name, size) => write!(w, "/{} {} Tf", name, num(*size)),
        ContentStreamOp::SetTextMatrix(a, b, c, d, e, f) => write!(
            w,
            "{} {} {} {} {} {} Tm",
            num(*a),
            num(*b),
            num(*c),
            num(*d),
            num(*e),
            num(*f)
        ),
        ContentStreamOp::ShowText(bytes) => {
            write!(w, "(")?;
            w.write_all(&escape_literal(bytes))?;
            write!(w, ") Tj")
        },
        ContentStreamOp::PaintXObject(name) => write!(w, "/{} Do", name),
    }
}
