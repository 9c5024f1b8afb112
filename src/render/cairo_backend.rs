use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    TextVAlign,
};

const DASH_PATTERN_PX: [f64; 2] = [4.0, 3.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that draw into an external Cairo context.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Offscreen Cairo + Pango renderer backed by an ARGB image surface.
///
/// Frames are painted through `Renderer::render` and exported with
/// `write_png`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface to `path` as PNG.
    pub fn write_png(&self, path: &Path) -> ChartResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.surface.write_to_png(&mut writer).map_err(|err| {
            ChartError::Rendering(format!("failed to write png `{}`: {err}", path.display()))
        })?;
        debug!(path = %path.display(), "wrote chart png");
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.last_stats = paint_frame(&context, frame)?;
        Ok(())
    }
}

/// Surface-less painter for contexts owned by someone else, such as a GTK
/// `DrawingArea` draw callback.
#[derive(Debug, Default)]
pub struct CairoContextPainter {
    last_stats: CairoRenderStats,
}

impl CairoContextPainter {
    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }
}

impl CairoContextRenderer for CairoContextPainter {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.last_stats = paint_frame(context, frame)?;
        Ok(())
    }
}

fn paint_frame(context: &Context, frame: &RenderFrame) -> ChartResult<CairoRenderStats> {
    frame.validate()?;

    apply_color(context, frame.background);
    context
        .paint()
        .map_err(|err| map_backend_error("failed to clear surface", err))?;

    let mut stats = CairoRenderStats::default();

    for rect in &frame.rects {
        draw_rect(context, *rect)?;
        stats.rects_drawn += 1;
    }

    for line in &frame.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        match line.stroke_style {
            LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
            LineStrokeStyle::Dashed => context.set_dash(&DASH_PATTERN_PX, 0.0),
        }
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }
    context.set_dash(&[], 0.0);

    for text in &frame.texts {
        draw_text(context, text)?;
        stats.texts_drawn += 1;
    }

    Ok(stats)
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(text_width) / 2.0,
        TextHAlign::Right => -f64::from(text_width),
    };
    let dy = match text.v_align {
        TextVAlign::Top => 0.0,
        TextVAlign::Middle => -f64::from(text_height) / 2.0,
        TextVAlign::Bottom => -f64::from(text_height),
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.translate(text.x, text.y);
    if text.rotation_deg != 0.0 {
        context.rotate(-text.rotation_deg.to_radians());
    }
    apply_color(context, text.color);
    context.move_to(dx, dy);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Rendering(format!("{prefix}: {err}"))
}
