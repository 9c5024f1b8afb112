use crate::chart::ComparisonChartConfig;
use crate::core::{ComparisonTable, LogScale};
use crate::error::{ChartError, ChartResult};

const OUTER_PADDING_PX: f64 = 20.0;
const LEGEND_GAP_PX: f64 = 24.0;
const LEGEND_PADDING_PX: f64 = 10.0;
const X_LABEL_PAD_PX: f64 = 25.0;
const MAJOR_TICK_LENGTH_PX: f64 = 6.0;
const TICK_LABEL_GAP_PX: f64 = 4.0;
const ROW_LABEL_GAP_PX: f64 = 8.0;
/// Rough glyph advance for a sans font, as a fraction of the font size.
const CHAR_WIDTH_RATIO: f64 = 0.6;
const LINE_HEIGHT_RATIO: f64 = 1.4;
pub(crate) const BAR_FILL_RATIO: f64 = 0.8;

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// Resolved chart geometry for one table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub plot: PixelRect,
    pub legend: PixelRect,
    pub scale: LogScale,
    /// Height of one table row; zero when the table is empty.
    pub row_height_px: f64,
    pub title_y: f64,
    pub tick_label_y: f64,
    pub x_axis_label_y: f64,
    pub y_axis_label_x: f64,
}

impl ChartLayout {
    pub fn resolve(config: &ComparisonChartConfig, table: &ComparisonTable) -> ChartResult<Self> {
        config.validate()?;
        let scale = LogScale::new(config.axis_min, config.axis_max)?;
        let fonts = config.fonts;
        let width = f64::from(config.viewport.width);
        let height = f64::from(config.viewport.height);

        let longest_item = table
            .items()
            .iter()
            .map(|item| item.name().chars().count())
            .max()
            .unwrap_or(0);
        let row_label_width = estimate_text_width(longest_item, fonts.item_label);
        let y_axis_label_x = OUTER_PADDING_PX + fonts.y_axis_label * 0.5;

        let legend_chars = config
            .legend_title
            .chars()
            .count()
            .max("Vehicle".len())
            .max("Cheese".len());
        let swatch = fonts.legend;
        let legend_width = LEGEND_PADDING_PX * 3.0
            + swatch
            + estimate_text_width(legend_chars, fonts.legend);
        let legend_height =
            LEGEND_PADDING_PX * 2.0 + fonts.legend * LINE_HEIGHT_RATIO * 3.0;

        let plot_left = y_axis_label_x
            + fonts.y_axis_label * LINE_HEIGHT_RATIO
            + row_label_width
            + ROW_LABEL_GAP_PX;
        let plot_right = width - OUTER_PADDING_PX - legend_width - LEGEND_GAP_PX;
        let title_y = OUTER_PADDING_PX;
        let plot_top = title_y + fonts.title * LINE_HEIGHT_RATIO * 2.0;

        let tick_label_height = fonts.major_tick.max(fonts.minor_tick) * LINE_HEIGHT_RATIO;
        let bottom_band = MAJOR_TICK_LENGTH_PX
            + TICK_LABEL_GAP_PX
            + tick_label_height
            + X_LABEL_PAD_PX
            + fonts.x_axis_label * LINE_HEIGHT_RATIO;
        let plot_bottom = height - OUTER_PADDING_PX - bottom_band;

        let plot = PixelRect {
            x: plot_left,
            y: plot_top,
            width: plot_right - plot_left,
            height: plot_bottom - plot_top,
        };
        if plot.width <= 1.0 || plot.height <= 1.0 {
            return Err(ChartError::InvalidData(format!(
                "viewport {}x{} is too small for the chart layout",
                config.viewport.width, config.viewport.height
            )));
        }

        let row_height_px = if table.is_empty() {
            0.0
        } else {
            plot.height / table.len() as f64
        };
        let tick_label_y = plot.bottom() + MAJOR_TICK_LENGTH_PX + TICK_LABEL_GAP_PX;

        Ok(Self {
            plot,
            legend: PixelRect {
                x: plot.right() + LEGEND_GAP_PX,
                y: plot.y,
                width: legend_width,
                height: legend_height,
            },
            scale,
            row_height_px,
            title_y,
            tick_label_y,
            x_axis_label_y: tick_label_y + tick_label_height + X_LABEL_PAD_PX,
            y_axis_label_x,
        })
    }

    /// Absolute x pixel of a price on the axis.
    pub fn price_to_x(&self, price: f64) -> ChartResult<f64> {
        Ok(self.plot.x + self.scale.value_to_pixel(price, self.plot.width)?)
    }

    /// Center y pixel of table row `index`; row 0 is the top row.
    #[must_use]
    pub fn row_center_y(&self, index: usize) -> f64 {
        self.plot.y + (index as f64 + 0.5) * self.row_height_px
    }

    #[must_use]
    pub const fn major_tick_length_px(&self) -> f64 {
        MAJOR_TICK_LENGTH_PX
    }

    #[must_use]
    pub const fn legend_padding_px(&self) -> f64 {
        LEGEND_PADDING_PX
    }
}

fn estimate_text_width(char_count: usize, font_size: f64) -> f64 {
    char_count as f64 * font_size * CHAR_WIDTH_RATIO
}
