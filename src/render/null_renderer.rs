use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless runs.
///
/// It still validates frame content so invalid geometry is caught without a
/// real backend, and keeps the last frame for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub render_count: usize,
    last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
