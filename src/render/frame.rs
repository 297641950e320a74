use crate::core::Viewport;
use crate::error::{GridError, GridResult};
use crate::render::{Color, LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one figure render pass.
///
/// Coordinates are pixels with the origin at the top-left corner, the way
/// raster backends expect them.
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
            background: Color::rgb(1.0, 1.0, 1.0),
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> GridResult<()> {
        if !self.viewport.is_valid() {
            return Err(GridError::InvalidData(format!(
                "render viewport must be non-empty: {}x{}",
                self.viewport.width, self.viewport.height
            )));
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

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}
