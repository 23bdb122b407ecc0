//! Line chart of the compound-score trend.

use super::glyphs::{self, GLYPH_HEIGHT};
use super::{solid_paint, ChartRenderer};
use crate::error::{Error, Result};
use crate::trend::TrendSeries;
use serde::{Deserialize, Serialize};
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform};

/// Pixel margins around the plot area: left, right, top, bottom.
const MARGIN_LEFT: f32 = 90.0;
const MARGIN_RIGHT: f32 = 30.0;
const MARGIN_TOP: f32 = 30.0;
const MARGIN_BOTTOM: f32 = 60.0;
/// Tick mark length in pixels.
const TICK_LENGTH: f32 = 6.0;
/// Maximum number of labelled ticks on the x axis.
const MAX_X_TICKS: usize = 10;
/// Spacing of y-axis ticks in compound units.
const Y_TICK_STEP: f64 = 0.5;
/// Largest compound magnitude the y axis will stretch to.
const MAX_ABS_COMPOUND: f64 = 10.0;

/// Visual parameters of the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    pub background: [u8; 3],
    pub line_color: [u8; 3],
    pub line_width: f32,
    /// Marker radius in pixels (0 disables markers)
    pub marker_radius: f32,
    pub zero_line_color: [u8; 3],
    pub axis_color: [u8; 3],
    /// Draw horizontal gridlines at every y tick
    pub grid: bool,
    pub grid_color: [u8; 3],
    /// Pixel size of one tick-label font unit
    pub label_scale: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            background: [255, 255, 255],
            line_color: [0, 0, 255],
            line_width: 2.5,
            marker_radius: 5.0,
            zero_line_color: [128, 128, 128],
            axis_color: [0, 0, 0],
            grid: true,
            grid_color: [221, 221, 221],
            label_scale: 3,
        }
    }
}

impl ChartStyle {
    /// Set the image size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_line_color(mut self, rgb: [u8; 3]) -> Self {
        self.line_color = rgb;
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Reject styles that leave no room for the plot area.
    pub fn validate(&self) -> Result<()> {
        let min_width = (MARGIN_LEFT + MARGIN_RIGHT) as u32 + 1;
        let min_height = (MARGIN_TOP + MARGIN_BOTTOM) as u32 + 1;
        if self.width < min_width || self.height < min_height {
            return Err(Error::Config(format!(
                "chart must be at least {}x{} pixels, got {}x{}",
                min_width, min_height, self.width, self.height
            )));
        }
        if !(self.line_width > 0.0) {
            return Err(Error::Config(format!("chart line width must be positive, got {}", self.line_width)));
        }
        if !(self.marker_radius >= 0.0) {
            return Err(Error::Config(format!(
                "chart marker radius must not be negative, got {}",
                self.marker_radius
            )));
        }
        if self.label_scale == 0 {
            return Err(Error::Config("chart label scale must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Mapping from data coordinates to pixels.
#[derive(Debug, Clone, Copy)]
struct Plot {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Plot {
    fn new(style: &ChartStyle, series: &TrendSeries) -> Self {
        let n = series.len().max(1) as f64;
        // The y range always covers [-1, 1] and grows to fit scores up to MAX_ABS_COMPOUND.
        let (lo, hi) = series.compound_range().unwrap_or((0.0, 0.0));
        let y_min = (lo.min(-1.0) / Y_TICK_STEP).floor() * Y_TICK_STEP;
        let y_max = (hi.max(1.0) / Y_TICK_STEP).ceil() * Y_TICK_STEP;
        Self {
            left: MARGIN_LEFT,
            right: style.width as f32 - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: style.height as f32 - MARGIN_BOTTOM,
            x_min: 0.5,
            x_max: n + 0.5,
            y_min,
            y_max,
        }
    }

    fn x(&self, index: f64) -> f32 {
        let t = (index - self.x_min) / (self.x_max - self.x_min);
        self.left + t as f32 * (self.right - self.left)
    }

    fn y(&self, value: f64) -> f32 {
        let t = (value - self.y_min) / (self.y_max - self.y_min);
        self.bottom - t as f32 * (self.bottom - self.top)
    }

    fn y_ticks(&self) -> Vec<f64> {
        let steps = ((self.y_max - self.y_min) / Y_TICK_STEP).round() as i64;
        (0..=steps).map(|i| self.y_min + i as f64 * Y_TICK_STEP).collect()
    }

    /// Integer x ticks at a 1/2/5 × 10^k step.
    fn x_ticks(&self, count: usize) -> Vec<usize> {
        if count == 0 {
            return Vec::new();
        }
        let step = nice_step(count);
        (1..=count).filter(|i| i % step == 0).collect()
    }
}

fn nice_step(count: usize) -> usize {
    let mut magnitude = 1;
    loop {
        for factor in [1, 2, 5] {
            let step = factor * magnitude;
            if (count + step - 1) / step <= MAX_X_TICKS {
                return step;
            }
        }
        magnitude *= 10;
    }
}

/// Renders the trend as a line chart with circular markers.
#[derive(Debug, Clone, Default)]
pub struct LineChartRenderer {
    style: ChartStyle,
}

impl LineChartRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    fn draw_grid_and_axes(&self, pixmap: &mut Pixmap, plot: &Plot, count: usize) {
        let style = &self.style;
        let label_paint = solid_paint(style.axis_color);
        let label_height = (GLYPH_HEIGHT * style.label_scale) as f32;

        for value in plot.y_ticks() {
            let y = plot.y(value);
            if style.grid {
                stroke_line(pixmap, (plot.left, y), (plot.right, y), &solid_paint(style.grid_color), 1.0, None);
            }
            stroke_line(
                pixmap,
                (plot.left - TICK_LENGTH, y),
                (plot.left, y),
                &solid_paint(style.axis_color),
                1.5,
                None,
            );
            let label = format!("{:.1}", value);
            let width = glyphs::label_width(&label, style.label_scale) as f32;
            glyphs::draw_label(
                pixmap,
                &label,
                plot.left - TICK_LENGTH - 6.0 - width,
                y - label_height / 2.0,
                style.label_scale,
                &label_paint,
            );
        }

        for index in plot.x_ticks(count) {
            let x = plot.x(index as f64);
            stroke_line(
                pixmap,
                (x, plot.bottom),
                (x, plot.bottom + TICK_LENGTH),
                &solid_paint(style.axis_color),
                1.5,
                None,
            );
            let label = index.to_string();
            let width = glyphs::label_width(&label, style.label_scale) as f32;
            glyphs::draw_label(
                pixmap,
                &label,
                x - width / 2.0,
                plot.bottom + TICK_LENGTH + 6.0,
                style.label_scale,
                &label_paint,
            );
        }

        // Frame
        if let Some(rect) = Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom) {
            let path = PathBuilder::from_rect(rect);
            let stroke = Stroke {
                width: 1.5,
                ..Stroke::default()
            };
            pixmap.stroke_path(&path, &solid_paint(style.axis_color), &stroke, Transform::identity(), None);
        }
    }

    fn draw_series(&self, pixmap: &mut Pixmap, plot: &Plot, series: &TrendSeries) {
        let style = &self.style;
        let paint = solid_paint(style.line_color);

        if series.len() > 1 {
            let mut builder = PathBuilder::new();
            for (i, point) in series.iter().enumerate() {
                let (x, y) = (plot.x(point.index as f64), plot.y(point.compound));
                if i == 0 {
                    builder.move_to(x, y);
                } else {
                    builder.line_to(x, y);
                }
            }
            if let Some(path) = builder.finish() {
                let stroke = Stroke {
                    width: style.line_width,
                    line_cap: LineCap::Round,
                    line_join: LineJoin::Round,
                    ..Stroke::default()
                };
                pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }

        if style.marker_radius > 0.0 {
            for point in series.iter() {
                let (x, y) = (plot.x(point.index as f64), plot.y(point.compound));
                if let Some(circle) = PathBuilder::from_circle(x, y, style.marker_radius) {
                    pixmap.fill_path(&circle, &paint, tiny_skia::FillRule::Winding, Transform::identity(), None);
                }
            }
        }
    }
}

impl ChartRenderer for LineChartRenderer {
    fn render(&self, series: &TrendSeries) -> Result<Vec<u8>> {
        self.style.validate().map_err(|e| Error::Chart(e.to_string()))?;
        check_plottable(series)?;
        let style = &self.style;

        let mut pixmap = Pixmap::new(style.width, style.height).ok_or_else(|| {
            Error::Chart(format!("Failed to create pixmap {}x{}", style.width, style.height))
        })?;
        let [r, g, b] = style.background;
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));

        let plot = Plot::new(style, series);
        self.draw_grid_and_axes(&mut pixmap, &plot, series.len());

        let zero = plot.y(0.0);
        stroke_line(
            &mut pixmap,
            (plot.left, zero),
            (plot.right, zero),
            &solid_paint(style.zero_line_color),
            1.5,
            StrokeDash::new(vec![8.0, 6.0], 0.0),
        );

        self.draw_series(&mut pixmap, &plot, series);

        let png = pixmap
            .encode_png()
            .map_err(|e| Error::Chart(format!("PNG encoding failed: {}", e)))?;
        log::debug!(
            "Rendered trend chart {}x{} with {} points ({} bytes)",
            style.width,
            style.height,
            series.len(),
            png.len()
        );
        Ok(png)
    }
}

/// Compound scores must be finite and within [-MAX_ABS_COMPOUND, MAX_ABS_COMPOUND].
fn check_plottable(series: &TrendSeries) -> Result<()> {
    match series
        .iter()
        .find(|p| !p.compound.is_finite() || p.compound.abs() > MAX_ABS_COMPOUND)
    {
        Some(point) => Err(Error::Chart(format!(
            "paragraph {} has compound score {} outside the plottable range [-{}, {}]",
            point.index, point.compound, MAX_ABS_COMPOUND, MAX_ABS_COMPOUND
        ))),
        None => Ok(()),
    }
}

fn stroke_line(
    pixmap: &mut Pixmap,
    from: (f32, f32),
    to: (f32, f32),
    paint: &Paint,
    width: f32,
    dash: Option<StrokeDash>,
) {
    let mut builder = PathBuilder::new();
    builder.move_to(from.0, from.1);
    builder.line_to(to.0, to.1);
    if let Some(path) = builder.finish() {
        let stroke = Stroke {
            width,
            dash,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, paint, &stroke, Transform::identity(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trend::TrendPoint;
    use image::GenericImageView;

    fn series(values: &[f64]) -> TrendSeries {
        TrendSeries::from_points(
            values
                .iter()
                .enumerate()
                .map(|(i, &compound)| TrendPoint {
                    index: i + 1,
                    compound,
                })
                .collect(),
        )
    }

    #[test]
    fn test_renders_png_of_configured_size() {
        let renderer = LineChartRenderer::new(ChartStyle::default().with_size(400, 200));
        let png = renderer.render(&series(&[0.5, -0.5, 0.1])).unwrap();
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.dimensions(), (400, 200));
    }

    #[test]
    fn test_marker_drawn_at_point() {
        let style = ChartStyle::default().with_size(400, 200);
        let data = series(&[0.75, -0.5]);
        let plot = Plot::new(&style, &data);
        let png = LineChartRenderer::new(style).render(&data).unwrap();
        let img = image::load_from_memory(&png).unwrap().to_rgba8();
        let (x, y) = (plot.x(1.0).round() as u32, plot.y(0.75).round() as u32);
        let pixel = img.get_pixel(x, y);
        assert_eq!(pixel.0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_empty_series_renders_frame() {
        let png = LineChartRenderer::default().render(&TrendSeries::default()).unwrap();
        assert!(image::load_from_memory(&png).is_ok());
    }

    #[test]
    fn test_deterministic_output() {
        let renderer = LineChartRenderer::default();
        let data = series(&[0.2, 0.4, -0.9]);
        assert_eq!(renderer.render(&data).unwrap(), renderer.render(&data).unwrap());
    }

    #[test]
    fn test_invalid_style_is_chart_error() {
        let renderer = LineChartRenderer::new(ChartStyle::default().with_size(10, 10));
        let err = renderer.render(&series(&[0.1])).unwrap_err();
        assert!(matches!(err, Error::Chart(_)));
    }

    #[test]
    fn test_y_range_grows_for_out_of_range_scores() {
        let style = ChartStyle::default();
        let plot = Plot::new(&style, &series(&[1.7, -0.2]));
        assert_eq!(plot.y_min, -1.0);
        assert_eq!(plot.y_max, 2.0);
        assert_eq!(plot.y_ticks().len(), 7);
    }

    #[test]
    fn test_unplottable_scores_rejected() {
        let renderer = LineChartRenderer::default();
        for bad in [1.0e9, -11.0, f64::NAN, f64::INFINITY] {
            let err = renderer.render(&series(&[0.2, bad])).unwrap_err();
            assert!(matches!(err, Error::Chart(ref msg) if msg.contains("paragraph 2")));
        }
        assert!(renderer.render(&series(&[10.0, -10.0])).is_ok());
    }

    #[test]
    fn test_x_ticks() {
        let style = ChartStyle::default();
        let plot = Plot::new(&style, &series(&[0.0; 3]));
        assert_eq!(plot.x_ticks(3), vec![1, 2, 3]);
        assert_eq!(nice_step(10), 1);
        assert_eq!(nice_step(11), 2);
        assert_eq!(nice_step(200), 20);
        let ticks = plot.x_ticks(200);
        assert_eq!(ticks.first(), Some(&20));
        assert_eq!(ticks.len(), 10);
    }
}
