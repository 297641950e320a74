use crate::core::Viewport;
use crate::error::GridResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless figures.
///
/// It still validates frame content so invalid legend or axes geometry is
/// caught without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_viewport: Option<Viewport>,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GridResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_viewport = Some(frame.viewport);
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
