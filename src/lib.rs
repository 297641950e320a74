//! facet-legend: legend placement for multi-panel facet grids.
//!
//! A [`FacetGrid`] draws its legend to the right of the panels, above them,
//! or inside the first panel. Outside placements grow the figure and shrink
//! the subplot region so the legend never covers plotted axes. The top
//! placement reserves extra room proportional to the last font scale the
//! application styled with, observed by a [`FontScaleTracker`].

pub mod core;
pub mod error;
pub mod figure;
pub mod grid;
pub mod legend;
pub mod render;
pub mod style;
pub mod telemetry;

pub use error::{GridError, GridResult};
pub use figure::{Figure, HeadlessFigure};
pub use grid::{DataTable, FacetGrid, GridConfig, LegendRequest};
pub use legend::{LegendHandle, LegendOptions, LegendPlacement};
pub use style::{FontScaleTracker, TrackedPlottingContext, last_font_scale};
