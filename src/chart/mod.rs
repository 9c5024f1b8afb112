//! Horizontal bar chart of a `ComparisonTable` on a logarithmic price axis.
//!
//! `ComparisonChart` turns a table into a backend-agnostic `RenderFrame`;
//! `output` hands that frame to a PNG file or a desktop window.

mod config;
mod layout;
mod output;
mod ticks;

use std::fmt;
use std::sync::Arc;

use tracing::debug;

pub use config::{
    CategoryPalette, ChartFontSizes, ComparisonChartConfig, DEFAULT_AXIS_MAX, DEFAULT_AXIS_MIN,
    DEFAULT_MINOR_TICK_POSITIONS,
};
pub use layout::{ChartLayout, PixelRect};
pub use output::{OutputTarget, render_to_target};
pub use ticks::{
    AxisTick, TickKind, TickLabelFormatterFn, dollar_formatter, minor_tick_label,
    resolve_axis_ticks,
};

use crate::core::{Category, ComparisonTable};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, TextVAlign,
};

const AXIS_COLOR: Color = Color::BLACK;
const GRID_COLOR: Color = Color::rgb(0.69, 0.69, 0.69);
const LEGEND_BORDER_COLOR: Color = Color::rgb(0.8, 0.8, 0.8);
const MINOR_TICK_LENGTH_PX: f64 = 3.0;

/// Chart builder holding layout config and the major-tick label formatter.
#[derive(Clone)]
pub struct ComparisonChart {
    config: ComparisonChartConfig,
    major_tick_formatter: TickLabelFormatterFn,
}

impl fmt::Debug for ComparisonChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparisonChart")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ComparisonChart {
    pub fn new(config: ComparisonChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            major_tick_formatter: Arc::new(dollar_formatter),
        })
    }

    /// Replaces the formatter applied to every auto-placed major tick.
    #[must_use]
    pub fn with_major_tick_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.major_tick_formatter = Arc::new(formatter);
        self
    }

    #[must_use]
    pub fn config(&self) -> &ComparisonChartConfig {
        &self.config
    }

    pub fn layout(&self, table: &ComparisonTable) -> ChartResult<ChartLayout> {
        ChartLayout::resolve(&self.config, table)
    }

    #[must_use]
    pub fn axis_ticks(&self, layout: &ChartLayout) -> Vec<AxisTick> {
        resolve_axis_ticks(
            layout.scale,
            &self.config.minor_tick_positions,
            &*self.major_tick_formatter,
        )
    }

    /// Lays out the full chart scene for `table`.
    ///
    /// An empty table still yields axes, ticks, title and legend.
    pub fn build_frame(&self, table: &ComparisonTable) -> ChartResult<RenderFrame> {
        let layout = self.layout(table)?;
        let mut frame = RenderFrame::new(self.config.viewport);

        self.push_bars(&mut frame, &layout, table)?;
        self.push_ticks_and_grid(&mut frame, &layout)?;
        push_spines(&mut frame, &layout);
        self.push_titles(&mut frame, &layout);
        self.push_legend(&mut frame, &layout);

        debug!(
            rows = table.len(),
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "built comparison chart frame"
        );
        Ok(frame)
    }

    /// Builds the frame for `table` and hands it to `renderer`.
    pub fn render<R: Renderer>(&self, renderer: &mut R, table: &ComparisonTable) -> ChartResult<()> {
        let frame = self.build_frame(table)?;
        renderer.render(&frame)
    }

    fn push_bars(
        &self,
        frame: &mut RenderFrame,
        layout: &ChartLayout,
        table: &ComparisonTable,
    ) -> ChartResult<()> {
        let fonts = self.config.fonts;
        let bar_height = layout.row_height_px * layout::BAR_FILL_RATIO;

        for (index, item) in table.items().iter().enumerate() {
            let center_y = layout.row_center_y(index);
            let bar_end = layout.price_to_x(item.price_per_unit_mass())?;
            frame.push_rect(RectPrimitive::new(
                layout.plot.x,
                center_y - bar_height / 2.0,
                bar_end - layout.plot.x,
                bar_height,
                self.config.palette.color_for(item.category()),
            ));

            frame.push_line(LinePrimitive::new(
                layout.plot.x - MINOR_TICK_LENGTH_PX,
                center_y,
                layout.plot.x,
                center_y,
                1.0,
                AXIS_COLOR,
            ));
            if !item.name().is_empty() {
                frame.push_text(
                    TextPrimitive::new(
                        item.name(),
                        layout.plot.x - MINOR_TICK_LENGTH_PX - 3.0,
                        center_y,
                        fonts.item_label,
                        AXIS_COLOR,
                        TextHAlign::Right,
                    )
                    .with_v_align(TextVAlign::Middle),
                );
            }
        }
        Ok(())
    }

    fn push_ticks_and_grid(&self, frame: &mut RenderFrame, layout: &ChartLayout) -> ChartResult<()> {
        let fonts = self.config.fonts;
        let plot = layout.plot;

        for tick in self.axis_ticks(layout) {
            let x = layout.price_to_x(tick.value)?;
            frame.push_line(
                LinePrimitive::new(
                    x,
                    plot.y,
                    x,
                    plot.bottom(),
                    self.config.grid_line_width,
                    GRID_COLOR,
                )
                .with_stroke_style(LineStrokeStyle::Dashed),
            );

            let (tick_length, font_size) = match tick.kind {
                TickKind::Major => (layout.major_tick_length_px(), fonts.major_tick),
                TickKind::Minor => (MINOR_TICK_LENGTH_PX, fonts.minor_tick),
            };
            frame.push_line(LinePrimitive::new(
                x,
                plot.bottom(),
                x,
                plot.bottom() + tick_length,
                1.0,
                AXIS_COLOR,
            ));
            if !tick.label.is_empty() {
                frame.push_text(TextPrimitive::new(
                    tick.label,
                    x,
                    layout.tick_label_y,
                    font_size,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ));
            }
        }
        Ok(())
    }

    fn push_titles(&self, frame: &mut RenderFrame, layout: &ChartLayout) {
        let fonts = self.config.fonts;
        let plot = layout.plot;
        let center_x = plot.x + plot.width / 2.0;

        if !self.config.title.is_empty() {
            frame.push_text(TextPrimitive::new(
                self.config.title.as_str(),
                center_x,
                layout.title_y,
                fonts.title,
                AXIS_COLOR,
                TextHAlign::Center,
            ));
        }
        if !self.config.x_axis_label.is_empty() {
            frame.push_text(TextPrimitive::new(
                self.config.x_axis_label.as_str(),
                center_x,
                layout.x_axis_label_y,
                fonts.x_axis_label,
                AXIS_COLOR,
                TextHAlign::Center,
            ));
        }
        if !self.config.y_axis_label.is_empty() {
            frame.push_text(
                TextPrimitive::new(
                    self.config.y_axis_label.as_str(),
                    layout.y_axis_label_x,
                    plot.y + plot.height / 2.0,
                    fonts.y_axis_label,
                    AXIS_COLOR,
                    TextHAlign::Center,
                )
                .with_v_align(TextVAlign::Middle)
                .with_rotation_deg(90.0),
            );
        }
    }

    fn push_legend(&self, frame: &mut RenderFrame, layout: &ChartLayout) {
        let font_size = self.config.fonts.legend;
        let legend = layout.legend;
        let padding = layout.legend_padding_px();
        let line_height = (legend.height - padding * 2.0) / 3.0;

        frame.push_rect(
            RectPrimitive::new(legend.x, legend.y, legend.width, legend.height, Color::WHITE)
                .with_border(1.0, LEGEND_BORDER_COLOR),
        );

        let mut y = legend.y + padding;
        if !self.config.legend_title.is_empty() {
            frame.push_text(TextPrimitive::new(
                self.config.legend_title.as_str(),
                legend.x + legend.width / 2.0,
                y,
                font_size,
                AXIS_COLOR,
                TextHAlign::Center,
            ));
        }

        for category in Category::ALL {
            y += line_height;
            let swatch = font_size * 0.8;
            let center_y = y + line_height / 2.0;
            frame.push_rect(RectPrimitive::new(
                legend.x + padding,
                center_y - swatch / 2.0,
                swatch,
                swatch,
                self.config.palette.color_for(category),
            ));
            frame.push_text(
                TextPrimitive::new(
                    category.label(),
                    legend.x + padding * 2.0 + font_size,
                    center_y,
                    font_size,
                    AXIS_COLOR,
                    TextHAlign::Left,
                )
                .with_v_align(TextVAlign::Middle),
            );
        }
    }
}

fn push_spines(frame: &mut RenderFrame, layout: &ChartLayout) {
    let plot = layout.plot;
    let corners = [
        (plot.x, plot.y, plot.right(), plot.y),
        (plot.right(), plot.y, plot.right(), plot.bottom()),
        (plot.right(), plot.bottom(), plot.x, plot.bottom()),
        (plot.x, plot.bottom(), plot.x, plot.y),
    ];
    for (x1, y1, x2, y2) in corners {
        frame.push_line(LinePrimitive::new(x1, y1, x2, y2, 1.0, AXIS_COLOR));
    }
}
