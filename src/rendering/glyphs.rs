//! Bitmap glyphs for chart tick labels.
//!
//! A 3×5 cell per character, one `u8` per row with the three low bits used
//! (bit 2 is the leftmost column). Only the characters that numeric tick
//! labels need are defined.

use tiny_skia::{Paint, Pixmap, Rect, Transform};

/// Glyph cell width in font units.
pub const GLYPH_WIDTH: u32 = 3;
/// Glyph cell height in font units.
pub const GLYPH_HEIGHT: u32 = 5;
/// Blank columns between two glyphs.
const GLYPH_SPACING: u32 = 1;

fn glyph(c: char) -> Option<[u8; 5]> {
    let rows = match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        _ => return None,
    };
    Some(rows)
}

/// Width in pixels of `label` drawn at `scale`.
pub fn label_width(label: &str, scale: u32) -> u32 {
    let count = label.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    (count * (GLYPH_WIDTH + GLYPH_SPACING) - GLYPH_SPACING) * scale
}

/// Draw `label` with its top-left corner at `(x, y)`.
///
/// Characters without a glyph advance the pen but draw nothing.
pub fn draw_label(pixmap: &mut Pixmap, label: &str, x: f32, y: f32, scale: u32, paint: &Paint) {
    let cell = scale as f32;
    let mut pen_x = x;
    for c in label.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                        continue;
                    }
                    let px = pen_x + col as f32 * cell;
                    let py = y + row as f32 * cell;
                    if let Some(rect) = Rect::from_xywh(px, py, cell, cell) {
                        pixmap.fill_rect(rect, paint, Transform::identity(), None);
                    }
                }
            }
        }
        pen_x += ((GLYPH_WIDTH + GLYPH_SPACING) * scale) as f32;
    }
}
