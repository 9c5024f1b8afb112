use serde::{Deserialize, Serialize};

use crate::core::{Category, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const DEFAULT_AXIS_MIN: f64 = 5.0;
pub const DEFAULT_AXIS_MAX: f64 = 400.0;
pub const DEFAULT_MINOR_TICK_POSITIONS: [f64; 13] = [
    5.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 200.0, 300.0,
];

/// Fixed bar color per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryPalette {
    pub vehicle: Color,
    pub cheese: Color,
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self {
            vehicle: Color::rgb(0.0, 0.0, 1.0),
            cheese: Color::rgb(1.0, 165.0 / 255.0, 0.0),
        }
    }
}

impl CategoryPalette {
    #[must_use]
    pub fn color_for(self, category: Category) -> Color {
        match category {
            Category::Vehicle => self.vehicle,
            Category::Cheese => self.cheese,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartFontSizes {
    pub title: f64,
    pub x_axis_label: f64,
    pub y_axis_label: f64,
    pub major_tick: f64,
    pub minor_tick: f64,
    pub item_label: f64,
    pub legend: f64,
}

impl Default for ChartFontSizes {
    fn default() -> Self {
        Self {
            title: 16.0,
            x_axis_label: 18.0,
            y_axis_label: 12.0,
            major_tick: 10.0,
            minor_tick: 8.0,
            item_label: 10.0,
            legend: 20.0,
        }
    }
}

impl ChartFontSizes {
    fn validate(self) -> ChartResult<()> {
        for (name, size) in [
            ("title", self.title),
            ("x_axis_label", self.x_axis_label),
            ("y_axis_label", self.y_axis_label),
            ("major_tick", self.major_tick),
            ("minor_tick", self.minor_tick),
            ("item_label", self.item_label),
            ("legend", self.legend),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "font size `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

/// Layout and styling for the comparison chart.
///
/// Serializable so a host can keep a chart setup next to exported images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_axis_min")]
    pub axis_min: f64,
    #[serde(default = "default_axis_max")]
    pub axis_max: f64,
    #[serde(default = "default_minor_tick_positions")]
    pub minor_tick_positions: Vec<f64>,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_x_axis_label")]
    pub x_axis_label: String,
    #[serde(default = "default_y_axis_label")]
    pub y_axis_label: String,
    #[serde(default = "default_legend_title")]
    pub legend_title: String,
    #[serde(default)]
    pub palette: CategoryPalette,
    #[serde(default)]
    pub fonts: ChartFontSizes,
    #[serde(default = "default_grid_line_width")]
    pub grid_line_width: f64,
}

impl Default for ComparisonChartConfig {
    fn default() -> Self {
        Self::new(Viewport::new(1600, 2000))
    }
}

impl ComparisonChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            axis_min: default_axis_min(),
            axis_max: default_axis_max(),
            minor_tick_positions: default_minor_tick_positions(),
            title: default_title(),
            x_axis_label: default_x_axis_label(),
            y_axis_label: default_y_axis_label(),
            legend_title: default_legend_title(),
            palette: CategoryPalette::default(),
            fonts: ChartFontSizes::default(),
            grid_line_width: default_grid_line_width(),
        }
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets the visible price range of the log axis.
    #[must_use]
    pub fn with_axis_range(mut self, axis_min: f64, axis_max: f64) -> Self {
        self.axis_min = axis_min;
        self.axis_max = axis_max;
        self
    }

    #[must_use]
    pub fn with_minor_tick_positions(mut self, positions: Vec<f64>) -> Self {
        self.minor_tick_positions = positions;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: CategoryPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_fonts(mut self, fonts: ChartFontSizes) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.axis_min.is_finite()
            || !self.axis_max.is_finite()
            || self.axis_min <= 0.0
            || self.axis_max <= self.axis_min
        {
            return Err(ChartError::InvalidData(
                "axis range must be finite, > 0 and increasing".to_owned(),
            ));
        }
        if !self.grid_line_width.is_finite() || self.grid_line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "grid line width must be finite and > 0".to_owned(),
            ));
        }
        self.palette.vehicle.validate()?;
        self.palette.cheese.validate()?;
        self.fonts.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_axis_min() -> f64 {
    DEFAULT_AXIS_MIN
}

fn default_axis_max() -> f64 {
    DEFAULT_AXIS_MAX
}

fn default_minor_tick_positions() -> Vec<f64> {
    DEFAULT_MINOR_TICK_POSITIONS.to_vec()
}

fn default_title() -> String {
    "Price per Kilogram: Vehicles vs Cheeses (Interleaved, Descending, Max $400)".to_owned()
}

fn default_x_axis_label() -> String {
    "Price per Kilogram (USD)".to_owned()
}

fn default_y_axis_label() -> String {
    "Items".to_owned()
}

fn default_legend_title() -> String {
    "Category".to_owned()
}

fn default_grid_line_width() -> f64 {
    0.5
}
