//! Chart rendering.
//!
//! Turns a [`TrendSeries`] into PNG bytes using the pure-Rust `tiny-skia`
//! library. The report embeds those bytes as an image; nothing touches the
//! filesystem.
//!
//! ## Architecture
//!
//! 1. Map `(index, compound)` points onto the plot area
//! 2. Rasterize gridlines, axes and bitmap tick labels
//! 3. Rasterize the dashed zero line, the polyline and the markers
//! 4. Encode the pixmap as PNG

mod chart;
mod glyphs;

pub use chart::{ChartStyle, LineChartRenderer};

use crate::error::Result;
use crate::trend::TrendSeries;
use tiny_skia::{Color, Paint};

/// Renders a trend series to PNG bytes.
pub trait ChartRenderer: Send + Sync {
    fn render(&self, series: &TrendSeries) -> Result<Vec<u8>>;
}

/// Anti-aliased paint of an opaque RGB color.
pub(crate) fn solid_paint(rgb: [u8; 3]) -> Paint<'static> {
    let [r, g, b] = rgb;
    let mut paint = Paint::default();
    paint.set_color(Color::from_rgba8(r, g, b, 255));
    paint.anti_alias = true;
    paint
}
