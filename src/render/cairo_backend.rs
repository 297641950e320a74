use std::io::Write;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::Viewport;
use crate::error::{GridError, GridResult};
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo offscreen renderer.
///
/// The image surface follows the frame viewport, so a figure that grows to
/// make room for its legend gets a larger surface on the next render pass.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: Option<ImageSurface>,
    last_stats: CairoRenderStats,
}

impl Default for CairoRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CairoRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            surface: None,
            last_stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the last rendered figure as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> GridResult<()> {
        let surface = self.surface.as_ref().ok_or(GridError::MissingRenderer)?;
        surface
            .write_to_png(writer)
            .map_err(|err| GridError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn surface_for(&mut self, viewport: Viewport) -> GridResult<ImageSurface> {
        let width = i32::try_from(viewport.width)
            .map_err(|_| GridError::InvalidData("surface width overflows i32".to_owned()))?;
        let height = i32::try_from(viewport.height)
            .map_err(|_| GridError::InvalidData("surface height overflows i32".to_owned()))?;

        if let Some(surface) = &self.surface {
            if surface.width() == width && surface.height() == height {
                return Ok(surface.clone());
            }
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        self.surface = Some(surface.clone());
        Ok(surface)
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GridResult<()> {
        frame.validate()?;
        let surface = self.surface_for(frame.viewport)?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        apply_color(&context, frame.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            draw_rect(&context, *rect)?;
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(&context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(&context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(&context, text.color);
            context.move_to(x, text.y);
            pangocairo::functions::show_layout(&context, &layout);
            stats.texts_drawn += 1;
        }

        surface.flush();
        self.last_stats = stats;
        Ok(())
    }
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> GridResult<()> {
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

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> GridError {
    GridError::InvalidData(format!("{prefix}: {err}"))
}
