use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends paint `background`, then rects, then lines, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background: Color::WHITE,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    /// Finds the first label with exactly `text`.
    #[must_use]
    pub fn find_text(&self, text: &str) -> Option<&TextPrimitive> {
        self.texts.iter().find(|candidate| candidate.text == text)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.background.validate()?;
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }
}
