//! Configuration for report generation.
//!
//! Every field has a default matching the standard US Letter report, and a
//! JSON file may override any subset of them:
//!
//! ```json
//! { "include_chart": false, "layout": { "title": "Quarterly Letters", "line_height": 12 } }
//! ```

use crate::error::{Error, Result};
use crate::rendering::ChartStyle;
use crate::writer::is_standard_font;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Page geometry, fonts and text limits of the report.
///
/// Coordinates are PDF points with the origin at the bottom-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLayout {
    /// Title drawn on the first page
    pub title: String,
    pub page_width: f32,
    pub page_height: f32,
    /// X position of every drawn element
    pub left_margin: f32,
    /// Baseline of the title on page 1
    pub title_y: f32,
    pub title_font: String,
    pub title_font_size: f32,
    /// Vertical advance after the title
    pub title_gap: f32,
    pub chart_width: f32,
    pub chart_height: f32,
    /// Extra advance below the chart
    pub chart_gap: f32,
    pub body_font: String,
    pub body_font_size: f32,
    pub line_height: f32,
    /// Cursor position at the top of continuation pages
    pub top_y: f32,
    /// A line is never drawn below this y
    pub bottom_margin: f32,
    /// Hard limit on characters per drawn line
    pub max_line_chars: usize,
    pub separator_char: char,
    pub separator_width: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            title: "Sentiment Analysis Report".to_string(),
            page_width: 612.0,
            page_height: 792.0,
            left_margin: 50.0,
            title_y: 742.0,
            title_font: "Helvetica-Bold".to_string(),
            title_font_size: 14.0,
            title_gap: 30.0,
            chart_width: 500.0,
            chart_height: 250.0,
            chart_gap: 20.0,
            body_font: "Helvetica".to_string(),
            body_font_size: 9.0,
            line_height: 13.0,
            top_y: 742.0,
            bottom_margin: 60.0,
            max_line_chars: 100,
            separator_char: '-',
            separator_width: 90,
        }
    }
}

impl ReportLayout {
    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the page size in points.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the body line height.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the bottom margin.
    pub fn with_bottom_margin(mut self, bottom_margin: f32) -> Self {
        self.bottom_margin = bottom_margin;
        self
    }

    /// Set the per-line character limit.
    pub fn with_max_line_chars(mut self, max_line_chars: usize) -> Self {
        self.max_line_chars = max_line_chars;
        self
    }

    /// Lower edge of the chart image on page 1.
    pub fn chart_bottom(&self) -> f32 {
        self.title_y - self.title_gap - self.chart_height
    }

    /// First body-text cursor position on page 1.
    pub fn body_start_y(&self, with_chart: bool) -> f32 {
        let below_title = self.title_y - self.title_gap;
        if with_chart {
            below_title - self.chart_height - self.chart_gap
        } else {
            below_title
        }
    }

    /// The separator rule drawn after each entry.
    pub fn separator(&self) -> String {
        std::iter::repeat(self.separator_char)
            .take(self.separator_width)
            .collect()
    }

    /// Check that the layout can be rendered.
    pub fn validate(&self) -> Result<()> {
        if !(self.page_width > 0.0 && self.page_height > 0.0) {
            return Err(Error::Config(format!(
                "page size must be positive, got {}x{}",
                self.page_width, self.page_height
            )));
        }
        for font in [&self.title_font, &self.body_font] {
            if !is_standard_font(font) {
                return Err(Error::Config(format!("'{}' is not a standard PDF font", font)));
            }
        }
        if !(self.title_font_size > 0.0 && self.body_font_size > 0.0) {
            return Err(Error::Config("font sizes must be positive".to_string()));
        }
        if !(self.line_height > 0.0) {
            return Err(Error::Config(format!("line height must be positive, got {}", self.line_height)));
        }
        if !(self.bottom_margin >= 0.0) {
            return Err(Error::Config(format!(
                "bottom margin must not be negative, got {}",
                self.bottom_margin
            )));
        }
        if !(self.top_y > self.bottom_margin) || self.top_y > self.page_height {
            return Err(Error::Config(format!(
                "top position {} must lie above the bottom margin {} and within the page",
                self.top_y, self.bottom_margin
            )));
        }
        if self.title_y > self.page_height || self.title_y < 0.0 {
            return Err(Error::Config(format!("title position {} is off the page", self.title_y)));
        }
        if self.max_line_chars == 0 {
            return Err(Error::Config("line character limit must be at least 1".to_string()));
        }
        if !(self.chart_width > 0.0 && self.chart_height > 0.0) {
            return Err(Error::Config("chart size must be positive".to_string()));
        }
        if self.chart_bottom() < 0.0 || self.left_margin + self.chart_width > self.page_width {
            return Err(Error::Config(format!(
                "a {}x{} chart does not fit on the first page",
                self.chart_width, self.chart_height
            )));
        }
        Ok(())
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Render and embed the trend chart
    pub include_chart: bool,
    pub layout: ReportLayout,
    pub chart: ChartStyle,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            include_chart: true,
            layout: ReportLayout::default(),
            chart: ChartStyle::default(),
        }
    }
}

impl PipelineConfig {
    /// Create configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the trend chart.
    pub fn with_chart(mut self, include_chart: bool) -> Self {
        self.include_chart = include_chart;
        self
    }

    /// Replace the report layout.
    pub fn with_layout(mut self, layout: ReportLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the chart style.
    pub fn with_chart_style(mut self, chart: ChartStyle) -> Self {
        self.chart = chart;
        self
    }

    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.layout.title = title.into();
        self
    }

    /// Parse configuration from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PipelineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Check the layout and chart style.
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.chart.validate()
    }
}
