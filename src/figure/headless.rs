use tracing::trace;

use crate::core::{Bbox, FigureSize, FontSize, SubplotAdjust, SubplotParams};
use crate::error::{GridError, GridResult};
use crate::figure::{Figure, LegendId, LegendParent};
use crate::legend::layout::{LegendLayout, points_to_px};
use crate::legend::{LegendHandle, LegendLocation, LegendSpec, layout_legend};
use crate::render::{
    Color, LinePrimitive, NullRenderer, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

/// Gap between an axes legend and its axes edges, in legend font units.
const AXES_LEGEND_INSET_EM: f64 = 0.5;

const AXES_FACE: Color = Color::rgb(1.0, 1.0, 1.0);
const AXES_EDGE: Color = Color::rgb(0.15, 0.15, 0.15);
const LEGEND_FACE: Color = Color::rgba(1.0, 1.0, 1.0, 0.8);
const LEGEND_EDGE: Color = Color::rgb(0.8, 0.8, 0.8);
const TEXT_COLOR: Color = Color::rgb(0.15, 0.15, 0.15);

#[derive(Debug, Clone)]
struct LegendArtist {
    parent: LegendParent,
    spec: LegendSpec,
    title: Option<(String, FontSize)>,
    extent: Bbox,
}

/// Deterministic in-process figure with deferred layout.
///
/// Legend extents start as an empty box at the origin and are only
/// recomputed by [`Figure::draw`]; resizing leaves them stale. Without a
/// renderer, `draw` is unavailable, modelling a canvas that has not been
/// displayed yet.
#[derive(Debug)]
pub struct HeadlessFigure<R = NullRenderer> {
    size: FigureSize,
    dpi: f64,
    base_font_size: f64,
    nrows: usize,
    ncols: usize,
    subplot_params: SubplotParams,
    renderer: Option<R>,
    legends: Vec<LegendArtist>,
    axes_extents: Vec<Bbox>,
    draw_count: usize,
}

impl HeadlessFigure<NullRenderer> {
    /// Figure backed by a [`NullRenderer`].
    pub fn headless(size: FigureSize, dpi: f64, nrows: usize, ncols: usize) -> GridResult<Self> {
        Ok(Self::new(size, dpi, nrows, ncols)?.with_renderer(NullRenderer::default()))
    }
}

impl<R: Renderer> HeadlessFigure<R> {
    /// Figure without a renderer, holding an `nrows x ncols` axes grid.
    pub fn new(size: FigureSize, dpi: f64, nrows: usize, ncols: usize) -> GridResult<Self> {
        validate_size(size, dpi)?;
        if nrows == 0 || ncols == 0 {
            return Err(GridError::InvalidData(format!(
                "figure needs at least one axes, got {nrows}x{ncols}"
            )));
        }
        Ok(Self {
            size,
            dpi,
            base_font_size: 12.0,
            nrows,
            ncols,
            subplot_params: SubplotParams::default(),
            renderer: None,
            legends: Vec::new(),
            axes_extents: Vec::new(),
            draw_count: 0,
        })
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: R) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Base size in points that keyword font sizes resolve against.
    #[must_use]
    pub fn with_base_font_size(mut self, base_font_size: f64) -> Self {
        self.base_font_size = base_font_size;
        self
    }

    pub fn set_renderer(&mut self, renderer: Option<R>) -> Option<R> {
        std::mem::replace(&mut self.renderer, renderer)
    }

    #[must_use]
    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    #[must_use]
    pub fn base_font_size(&self) -> f64 {
        self.base_font_size
    }

    #[must_use]
    pub fn grid_shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of completed render passes.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    /// Axes boxes as of the last render pass.
    #[must_use]
    pub fn axes_extents(&self) -> &[Bbox] {
        &self.axes_extents
    }

    /// Display-space box of the whole subplot region at the current size.
    #[must_use]
    pub fn subplot_region(&self) -> Bbox {
        self.subplot_params
            .region(self.size.width * self.dpi, self.size.height * self.dpi)
    }

    #[must_use]
    pub fn legend_count(&self) -> usize {
        self.legends.len()
    }

    pub fn legend_spec(&self, legend: LegendId) -> GridResult<&LegendSpec> {
        Ok(&self.artist(legend)?.spec)
    }

    pub fn legend_parent(&self, legend: LegendId) -> GridResult<LegendParent> {
        Ok(self.artist(legend)?.parent)
    }

    pub fn legend_title(&self, legend: LegendId) -> GridResult<Option<(&str, FontSize)>> {
        Ok(self
            .artist(legend)?
            .title
            .as_ref()
            .map(|(text, size)| (text.as_str(), *size)))
    }

    fn artist(&self, legend: LegendId) -> GridResult<&LegendArtist> {
        self.legends
            .get(legend.raw())
            .ok_or(GridError::UnknownLegend(legend.raw()))
    }

    fn push_legend(&mut self, parent: LegendParent, spec: LegendSpec) -> GridResult<LegendId> {
        spec.validate()?;
        let id = LegendId::new(self.legends.len());
        trace!(legend = id.raw(), ?parent, entries = spec.entries.len(), "add legend");
        self.legends.push(LegendArtist {
            parent,
            spec,
            title: None,
            extent: Bbox::default(),
        });
        Ok(id)
    }

    fn layout_for(&self, artist: &LegendArtist) -> LegendLayout {
        let font_px = points_to_px(
            artist.spec.font_size.to_points(self.base_font_size),
            self.dpi,
        );
        let title_px = artist.title.as_ref().map(|(text, size)| {
            (
                text.as_str(),
                points_to_px(size.to_points(self.base_font_size), self.dpi),
            )
        });
        layout_legend(&artist.spec.entries, artist.spec.ncol, font_px, title_px)
    }

    fn build_frame(&mut self) -> RenderFrame {
        let width_px = self.size.width * self.dpi;
        let height_px = self.size.height * self.dpi;
        self.axes_extents = self
            .subplot_params
            .axes_boxes(self.nrows, self.ncols, width_px, height_px);

        let mut frame = RenderFrame::new(self.size.to_viewport(self.dpi));
        for axes in &self.axes_extents {
            frame.rects.push(
                RectPrimitive::new(
                    axes.x0,
                    height_px - axes.y1,
                    axes.width(),
                    axes.height(),
                    AXES_FACE,
                )
                .with_border(1.0, AXES_EDGE),
            );
        }

        let figure_box = Bbox::new(0.0, 0.0, width_px, height_px);
        let mut extents = Vec::with_capacity(self.legends.len());
        for artist in &self.legends {
            let layout = self.layout_for(artist);
            let (parent_box, inset) = match artist.parent {
                LegendParent::Figure => (figure_box, 0.0),
                LegendParent::Axes(index) => (
                    self.axes_extents.get(index).copied().unwrap_or(figure_box),
                    AXES_LEGEND_INSET_EM * layout.font_px,
                ),
            };
            let extent = anchor_legend(
                artist.spec.location,
                parent_box,
                layout.width,
                layout.height,
                inset,
            );
            push_legend_primitives(&mut frame, &artist.spec, &layout, extent, height_px, self.dpi);
            extents.push(extent);
        }
        for (artist, extent) in self.legends.iter_mut().zip(extents) {
            artist.extent = extent;
        }
        frame
    }
}

impl<R: Renderer> Figure for HeadlessFigure<R> {
    fn dpi(&self) -> f64 {
        self.dpi
    }

    fn size_inches(&self) -> FigureSize {
        self.size
    }

    fn set_size_inches(&mut self, size: FigureSize) -> GridResult<()> {
        validate_size(size, self.dpi)?;
        self.size = size;
        Ok(())
    }

    fn axes_count(&self) -> usize {
        self.nrows * self.ncols
    }

    fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    fn draw(&mut self) -> GridResult<()> {
        if self.renderer.is_none() {
            return Err(GridError::MissingRenderer);
        }
        let frame = self.build_frame();
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&frame)?;
        }
        self.draw_count += 1;
        trace!(
            draw_count = self.draw_count,
            width = frame.viewport.width,
            height = frame.viewport.height,
            "figure render pass"
        );
        Ok(())
    }

    fn legend(&mut self, spec: LegendSpec) -> GridResult<LegendId> {
        self.push_legend(LegendParent::Figure, spec)
    }

    fn axes_legend(&mut self, axes: usize, spec: LegendSpec) -> GridResult<LegendId> {
        let count = self.axes_count();
        if axes >= count {
            return Err(GridError::UnknownAxes { index: axes, count });
        }
        self.push_legend(LegendParent::Axes(axes), spec)
    }

    fn set_legend_title(
        &mut self,
        legend: LegendId,
        title: &str,
        size: FontSize,
    ) -> GridResult<()> {
        let artist = self
            .legends
            .get_mut(legend.raw())
            .ok_or(GridError::UnknownLegend(legend.raw()))?;
        artist.title = Some((title.to_owned(), size));
        Ok(())
    }

    fn legend_window_extent(&self, legend: LegendId) -> GridResult<Bbox> {
        Ok(self.artist(legend)?.extent)
    }

    fn subplot_params(&self) -> SubplotParams {
        self.subplot_params
    }

    fn subplots_adjust(&mut self, adjust: SubplotAdjust) -> GridResult<()> {
        self.subplot_params.apply(adjust)
    }
}

fn validate_size(size: FigureSize, dpi: f64) -> GridResult<()> {
    if !dpi.is_finite() || dpi <= 0.0 {
        return Err(GridError::InvalidFigureSize {
            width: size.width,
            height: size.height,
            dpi,
        });
    }
    size.validate().map_err(|_| GridError::InvalidFigureSize {
        width: size.width,
        height: size.height,
        dpi,
    })
}

/// Places a `width x height` legend box inside `parent`.
///
/// `Best` has no data to avoid here and resolves to the upper-right corner.
fn anchor_legend(
    location: LegendLocation,
    parent: Bbox,
    width: f64,
    height: f64,
    inset: f64,
) -> Bbox {
    match location {
        LegendLocation::CenterRight => {
            let x1 = parent.x1 - inset;
            let center_y = (parent.y0 + parent.y1) / 2.0;
            Bbox::new(x1 - width, center_y - height / 2.0, x1, center_y + height / 2.0)
        }
        LegendLocation::UpperCenter => {
            let y1 = parent.y1 - inset;
            let center_x = (parent.x0 + parent.x1) / 2.0;
            Bbox::new(center_x - width / 2.0, y1 - height, center_x + width / 2.0, y1)
        }
        LegendLocation::Best => {
            let x1 = parent.x1 - inset;
            let y1 = parent.y1 - inset;
            Bbox::new(x1 - width, y1 - height, x1, y1)
        }
    }
}

fn push_legend_primitives(
    frame: &mut RenderFrame,
    spec: &LegendSpec,
    layout: &LegendLayout,
    extent: Bbox,
    figure_height_px: f64,
    dpi: f64,
) {
    let left = extent.x0;
    let top = figure_height_px - extent.y1;

    if spec.frame_on {
        frame.rects.push(
            RectPrimitive::new(left, top, layout.width, layout.height, LEGEND_FACE)
                .with_border(1.0, LEGEND_EDGE),
        );
    }

    if let Some(title) = &layout.title {
        frame.texts.push(TextPrimitive::new(
            title.text.clone(),
            left + title.center_x,
            top + title.top,
            title.font_px,
            TEXT_COLOR,
            TextHAlign::Center,
        ));
    }

    for entry in &layout.entries {
        let row_top = top + entry.row_top;
        let handle_left = left + entry.handle_x;
        if entry.handle.is_visible() {
            match entry.handle {
                LegendHandle::Line { color, width } => {
                    let mid = row_top + entry.row_height / 2.0;
                    frame.lines.push(LinePrimitive::new(
                        handle_left,
                        mid,
                        handle_left + entry.handle_width,
                        mid,
                        points_to_px(width, dpi),
                        color,
                    ));
                }
                LegendHandle::Patch { color, line_width } => {
                    let rect = RectPrimitive::new(
                        handle_left,
                        row_top + entry.row_height * 0.15,
                        entry.handle_width,
                        entry.row_height * 0.7,
                        color,
                    );
                    frame.rects.push(if line_width > 0.0 {
                        rect.with_border(points_to_px(line_width, dpi), color.with_alpha(1.0))
                    } else {
                        rect
                    });
                }
                LegendHandle::Marker { color, size } => {
                    let side = points_to_px(size, dpi).min(entry.row_height);
                    let mid = row_top + entry.row_height / 2.0;
                    let count = f64::from(spec.scatter_points);
                    for index in 0..spec.scatter_points {
                        let center_x = handle_left
                            + entry.handle_width * (f64::from(index) + 1.0) / (count + 1.0);
                        frame.rects.push(RectPrimitive::new(
                            center_x - side / 2.0,
                            mid - side / 2.0,
                            side,
                            side,
                            color,
                        ));
                    }
                }
            }
        }
        if !entry.label.is_empty() {
            frame.texts.push(TextPrimitive::new(
                entry.label.clone(),
                left + entry.text_x,
                row_top,
                layout.font_px,
                TEXT_COLOR,
                TextHAlign::Left,
            ));
        }
    }
}
