//! Multi-panel facet grid.

mod config;
mod data;
mod legend;

pub use config::GridConfig;
pub use data::DataTable;
pub use legend::LegendRequest;

use tracing::debug;

use crate::core::{DataValue, FigureSize};
use crate::error::{GridError, GridResult};
use crate::figure::{Figure, HeadlessFigure, LegendId};
use crate::legend::{LegendData, LegendHandle};
use crate::style::{FontScaleTracker, RcParams};

/// Panels laid out from the `row`/`col` facet levels.
#[derive(Debug, Clone, PartialEq)]
struct GridShape {
    nrows: usize,
    ncols: usize,
    row_names: Vec<DataValue>,
    col_names: Vec<DataValue>,
}

impl GridShape {
    fn resolve(data: &DataTable, config: &GridConfig) -> GridResult<Self> {
        let row_names = match &config.row {
            Some(row) => data.levels(row)?,
            None => Vec::new(),
        };
        let col_names = match &config.col {
            Some(col) => data.levels(col)?,
            None => Vec::new(),
        };

        let facet_cols = col_names.len().max(1);
        let (nrows, ncols) = match (config.col.is_some(), config.col_wrap) {
            // Wrapped grids keep `col_wrap` columns even when fewer facets exist.
            (true, Some(wrap)) => (facet_cols.div_ceil(wrap), wrap),
            _ => (row_names.len().max(1), facet_cols),
        };

        Ok(Self {
            nrows,
            ncols,
            row_names,
            col_names,
        })
    }

    fn figure_size(&self, config: &GridConfig) -> FigureSize {
        FigureSize::new(
            self.ncols as f64 * config.height * config.aspect,
            self.nrows as f64 * config.height,
        )
    }
}

/// Facet grid with legend placement outside (right or top) or inside the
/// first panel.
///
/// Plotting into panels is the embedding toolkit's job; the grid only keeps
/// what legends need: the hue variable, its levels, and the handles the
/// plotted series registered through [`FacetGrid::add_legend_data`].
#[derive(Debug)]
pub struct FacetGrid<F = HeadlessFigure> {
    data: DataTable,
    config: GridConfig,
    figure: F,
    shape: GridShape,
    hue_var: Option<String>,
    hue_names: Option<Vec<DataValue>>,
    legend_data: LegendData,
    legend: Option<LegendId>,
    space_needed: Option<f64>,
    rc: RcParams,
    font_scale: FontScaleTracker,
}

impl FacetGrid<HeadlessFigure> {
    /// Grid on a headless figure sized from the facet layout.
    pub fn new(data: DataTable, config: GridConfig) -> GridResult<Self> {
        Self::with_rc(data, config, RcParams::default())
    }

    /// Like [`FacetGrid::new`], styled with explicit rc params.
    pub fn with_rc(data: DataTable, config: GridConfig, rc: RcParams) -> GridResult<Self> {
        config.validate()?;
        let shape = GridShape::resolve(&data, &config)?;
        let figure = HeadlessFigure::headless(
            shape.figure_size(&config),
            config.dpi,
            shape.nrows,
            shape.ncols,
        )?
        .with_base_font_size(rc.font_size);
        Ok(Self::with_figure(data, config, figure)?.with_rc_params(rc))
    }
}

impl<F: Figure> FacetGrid<F> {
    /// Grid drawing into a caller-provided figure.
    ///
    /// The figure must hold at least as many axes as the facet layout needs.
    pub fn with_figure(data: DataTable, config: GridConfig, figure: F) -> GridResult<Self> {
        config.validate()?;
        let shape = GridShape::resolve(&data, &config)?;
        let needed = shape.nrows * shape.ncols;
        if figure.axes_count() < needed {
            return Err(GridError::InvalidData(format!(
                "figure has {} axes, facet layout needs {needed}",
                figure.axes_count()
            )));
        }

        let (hue_var, hue_names) = match &config.hue {
            Some(hue) => {
                let levels = data.levels(hue)?;
                let names = match &config.hue_order {
                    Some(order) => order.iter().map(|name| DataValue::text(name.clone())).collect(),
                    None => levels,
                };
                (Some(hue.clone()), Some(names))
            }
            None => (None, None),
        };

        debug!(
            rows = data.len(),
            nrows = shape.nrows,
            ncols = shape.ncols,
            hue = hue_var.as_deref().unwrap_or("-"),
            hue_levels = hue_names.as_ref().map_or(0, Vec::len),
            "facet grid created"
        );

        Ok(Self {
            data,
            config,
            figure,
            shape,
            hue_var,
            hue_names,
            legend_data: LegendData::new(),
            legend: None,
            space_needed: None,
            rc: RcParams::default(),
            font_scale: FontScaleTracker::global(),
        })
    }

    #[must_use]
    pub fn with_rc_params(mut self, rc: RcParams) -> Self {
        self.rc = rc;
        self
    }

    /// Tracker consulted for the top legend margin; the global one by default.
    #[must_use]
    pub fn with_font_scale_tracker(mut self, tracker: FontScaleTracker) -> Self {
        self.font_scale = tracker;
        self
    }

    /// Registers the handle drawn for `label`; a later handle for the same
    /// label replaces the earlier one but keeps its position.
    pub fn add_legend_data(&mut self, label: impl Into<String>, handle: LegendHandle) -> &mut Self {
        self.legend_data.insert(label.into(), handle);
        self
    }

    pub fn update_legend_data<I, S>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (S, LegendHandle)>,
        S: Into<String>,
    {
        for (label, handle) in entries {
            self.legend_data.insert(label.into(), handle);
        }
        self
    }

    #[must_use]
    pub fn data(&self) -> &DataTable {
        &self.data
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[must_use]
    pub fn figure(&self) -> &F {
        &self.figure
    }

    pub fn figure_mut(&mut self) -> &mut F {
        &mut self.figure
    }

    #[must_use]
    pub fn into_figure(self) -> F {
        self.figure
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.shape.nrows, self.shape.ncols)
    }

    #[must_use]
    pub fn row_names(&self) -> &[DataValue] {
        &self.shape.row_names
    }

    #[must_use]
    pub fn col_names(&self) -> &[DataValue] {
        &self.shape.col_names
    }

    #[must_use]
    pub fn hue_var(&self) -> Option<&str> {
        self.hue_var.as_deref()
    }

    #[must_use]
    pub fn hue_names(&self) -> Option<&[DataValue]> {
        self.hue_names.as_deref()
    }

    #[must_use]
    pub fn legend_data(&self) -> &LegendData {
        &self.legend_data
    }

    /// Legend created by the last outside placement.
    #[must_use]
    pub fn legend(&self) -> Option<LegendId> {
        self.legend
    }

    /// Figure fraction reserved for the legend by the last outside placement.
    #[must_use]
    pub fn space_needed(&self) -> Option<f64> {
        self.space_needed
    }

    #[must_use]
    pub fn rc_params(&self) -> &RcParams {
        &self.rc
    }

    #[must_use]
    pub fn font_scale_tracker(&self) -> &FontScaleTracker {
        &self.font_scale
    }
}
