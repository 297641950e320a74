use tracing::{debug, trace, warn};

use crate::core::{Bbox, FigureSize, FontSize, SubplotAdjust};
use crate::error::{GridError, GridResult};
use crate::figure::Figure;
use crate::legend::{
    LegendData, LegendEntry, LegendHandle, LegendLocation, LegendOptions, LegendPlacement,
    LegendSpec,
};

use super::FacetGrid;

/// Reserved margin for a right legend, as a figure fraction.
const RIGHT_MARGIN: f64 = 0.01;
/// Reserved margin for a right legend when panel titles sit in the margin.
const RIGHT_MARGIN_WITH_TITLES: f64 = 0.04;
/// Reserved margin for a top legend per unit of font scale.
const TOP_MARGIN_PER_FONT_SCALE: f64 = 0.04;

/// Arguments of [`FacetGrid::add_legend`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegendRequest {
    /// Label to handle mapping; defaults to the grid's registered handles.
    pub legend_data: Option<LegendData>,
    /// Legend title; defaults to the hue variable name.
    pub title: Option<String>,
    /// Entry order; defaults to the hue levels, or the legend data order
    /// when the grid has no hue.
    pub label_order: Option<Vec<String>>,
    pub placement: LegendPlacement,
    pub no_title: bool,
    pub options: LegendOptions,
}

impl LegendRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_placement(mut self, placement: LegendPlacement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn with_legend_data(mut self, legend_data: LegendData) -> Self {
        self.legend_data = Some(legend_data);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_label_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn without_title(mut self) -> Self {
        self.no_title = true;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: LegendOptions) -> Self {
        self.options = options;
        self
    }
}

/// Figure edge an outside legend is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutsideEdge {
    Right,
    Top,
}

impl OutsideEdge {
    fn location(self) -> LegendLocation {
        match self {
            Self::Right => LegendLocation::CenterRight,
            Self::Top => LegendLocation::UpperCenter,
        }
    }

    /// Legend extent along the axis the figure grows in.
    fn legend_extent(self, extent: Bbox) -> f64 {
        match self {
            Self::Right => extent.width(),
            Self::Top => extent.height(),
        }
    }

    fn figure_extent(self, size: FigureSize) -> f64 {
        match self {
            Self::Right => size.width,
            Self::Top => size.height,
        }
    }

    fn grow(self, size: FigureSize, by: f64) -> FigureSize {
        match self {
            Self::Right => FigureSize::new(size.width + by, size.height),
            Self::Top => FigureSize::new(size.width, size.height + by),
        }
    }

    fn adjust(self, fraction: f64) -> SubplotAdjust {
        match self {
            Self::Right => SubplotAdjust::right(fraction),
            Self::Top => SubplotAdjust::top(fraction),
        }
    }
}

impl<F: Figure> FacetGrid<F> {
    /// Draws a legend, growing the figure for outside placements so the
    /// legend does not cover any panel.
    ///
    /// Outside placements (`Right`, `Top`) only apply when the grid was
    /// configured with `legend_out`; otherwise, and for `Inside`, the legend
    /// goes into the first panel and the figure keeps its size.
    pub fn add_legend(&mut self, request: LegendRequest) -> GridResult<&mut Self> {
        let LegendRequest {
            legend_data,
            title,
            label_order,
            placement,
            no_title,
            mut options,
        } = request;

        let legend_data = legend_data.unwrap_or_else(|| self.legend_data.clone());
        let label_order = label_order.unwrap_or_else(|| self.default_label_order(&legend_data));

        let entries: Vec<LegendEntry> = label_order
            .into_iter()
            .map(|label| {
                let handle = legend_data
                    .get(&label)
                    .copied()
                    .unwrap_or_else(LegendHandle::blank);
                LegendEntry::new(label, handle)
            })
            .collect();
        let placeholders = entries
            .iter()
            .filter(|entry| !legend_data.contains_key(&entry.label))
            .count();
        if placeholders > 0 {
            debug!(placeholders, "legend labels without handles drawn blank");
        }

        let title = if no_title {
            None
        } else {
            title.or_else(|| self.hue_var.clone())
        };
        let title_size = FontSize::legend_title_size(self.rc.axes_label_size);
        options.scatter_points.get_or_insert(1);

        match (self.config.legend_out, placement) {
            (true, LegendPlacement::Right) => {
                self.add_outside_legend(OutsideEdge::Right, entries, title, title_size, options)?;
            }
            (true, LegendPlacement::Top) => {
                self.add_outside_legend(OutsideEdge::Top, entries, title, title_size, options)?;
            }
            _ => self.add_inside_legend(entries, title, title_size, options)?,
        }
        Ok(self)
    }

    fn default_label_order(&self, legend_data: &LegendData) -> Vec<String> {
        match &self.hue_names {
            Some(names) => names.iter().map(|name| name.to_utf8()).collect(),
            None => legend_data.keys().cloned().collect(),
        }
    }

    fn add_outside_legend(
        &mut self,
        edge: OutsideEdge,
        entries: Vec<LegendEntry>,
        title: Option<String>,
        title_size: FontSize,
        options: LegendOptions,
    ) -> GridResult<()> {
        let ncol = match edge {
            OutsideEdge::Right => options.ncol.unwrap_or(1),
            OutsideEdge::Top => {
                if options.ncol.is_some() {
                    return Err(GridError::ConflictingLegendOption("ncol"));
                }
                entries.len()
            }
        };
        let spec = LegendSpec {
            entries,
            location: edge.location(),
            ncol,
            font_size: options.font_size.unwrap_or(self.rc.legend_font_size),
            frame_on: options.frame_on.unwrap_or(false),
            scatter_points: options.scatter_points.unwrap_or(1),
        };

        let legend = self.figure.legend(spec)?;
        self.legend = Some(legend);
        if let Some(title) = &title {
            self.figure.set_legend_title(legend, title, title_size)?;
        }

        // Geometry is only real after a render pass.
        self.draw_if_renderer()?;
        let dpi = self.figure.dpi();
        let measured = edge.legend_extent(self.figure.legend_window_extent(legend)?) / dpi;
        let original = self.figure.size_inches();
        self.figure.set_size_inches(edge.grow(original, measured))?;

        self.draw_if_renderer()?;
        let legend_extent = edge.legend_extent(self.figure.legend_window_extent(legend)?) / dpi;
        let occupied = legend_extent / (edge.figure_extent(original) + legend_extent);

        let margin = match edge {
            OutsideEdge::Right if self.config.margin_titles => RIGHT_MARGIN_WITH_TITLES,
            OutsideEdge::Right => RIGHT_MARGIN,
            OutsideEdge::Top => {
                if !self.font_scale.is_set() {
                    warn!(
                        font_scale = self.font_scale.font_scale(),
                        "top legend margin uses an unset font scale"
                    );
                }
                TOP_MARGIN_PER_FONT_SCALE * self.font_scale.font_scale()
            }
        };
        let space_needed = margin + occupied;
        self.space_needed = Some(space_needed);

        debug!(
            ?edge,
            measured_in = measured,
            legend_in = legend_extent,
            original_in = edge.figure_extent(original),
            margin,
            space_needed,
            "placed outside legend"
        );
        self.figure.subplots_adjust(edge.adjust(1.0 - space_needed))
    }

    fn add_inside_legend(
        &mut self,
        entries: Vec<LegendEntry>,
        title: Option<String>,
        title_size: FontSize,
        options: LegendOptions,
    ) -> GridResult<()> {
        let spec = LegendSpec {
            entries,
            location: LegendLocation::Best,
            ncol: options.ncol.unwrap_or(1),
            font_size: options.font_size.unwrap_or(self.rc.legend_font_size),
            frame_on: options.frame_on.unwrap_or(self.rc.legend_frame_on),
            scatter_points: options.scatter_points.unwrap_or(1),
        };
        let legend = self.figure.axes_legend(0, spec)?;
        if let Some(title) = &title {
            self.figure.set_legend_title(legend, title, title_size)?;
        }
        debug!(legend = legend.raw(), "placed legend in first panel");
        Ok(())
    }

    fn draw_if_renderer(&mut self) -> GridResult<()> {
        if !self.figure.has_renderer() {
            trace!("canvas has no renderer; legend geometry may be stale");
            return Ok(());
        }
        self.figure.draw()
    }
}
