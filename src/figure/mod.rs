//! Figure seam between grids and a plotting toolkit.
//!
//! A [`Figure`] follows the deferred-layout model: legend geometry reported
//! by [`Figure::legend_window_extent`] reflects the last render pass, not the
//! latest size or content changes. Callers that need real geometry must run
//! [`Figure::draw`] first, which is only possible when the figure's canvas
//! has a renderer.

mod headless;

pub use headless::HeadlessFigure;

use serde::{Deserialize, Serialize};

use crate::core::{Bbox, FigureSize, FontSize, SubplotAdjust, SubplotParams};
use crate::error::GridResult;
use crate::legend::LegendSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegendId(usize);

impl LegendId {
    #[must_use]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

/// What a legend is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegendParent {
    Figure,
    Axes(usize),
}

pub trait Figure {
    /// Pixels per inch.
    fn dpi(&self) -> f64;

    fn size_inches(&self) -> FigureSize;

    fn set_size_inches(&mut self, size: FigureSize) -> GridResult<()>;

    fn axes_count(&self) -> usize;

    /// Whether the canvas can run a render pass right now.
    fn has_renderer(&self) -> bool;

    /// Runs one render pass, refreshing every artist's geometry.
    fn draw(&mut self) -> GridResult<()>;

    /// Adds a legend attached to the whole figure.
    fn legend(&mut self, spec: LegendSpec) -> GridResult<LegendId>;

    /// Adds a legend inside the axes at `axes` (row-major index).
    fn axes_legend(&mut self, axes: usize, spec: LegendSpec) -> GridResult<LegendId>;

    fn set_legend_title(&mut self, legend: LegendId, title: &str, size: FontSize)
    -> GridResult<()>;

    /// Display-space box of the legend as of the last render pass.
    fn legend_window_extent(&self, legend: LegendId) -> GridResult<Bbox>;

    fn subplot_params(&self) -> SubplotParams;

    fn subplots_adjust(&mut self, adjust: SubplotAdjust) -> GridResult<()>;
}
