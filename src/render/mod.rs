mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::GridResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` after the figure has
/// laid out its axes and legends, so drawing code never sees grid or legend
/// policy.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GridResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
