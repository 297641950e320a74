//! Legend model shared by grids and figures.

mod handle;
pub mod layout;
mod options;
mod placement;

pub use handle::LegendHandle;
pub use layout::{LegendLayout, layout_legend};
pub use options::{LegendEntry, LegendOptions, LegendSpec, MAX_SCATTER_POINTS};
pub use placement::{LegendLocation, LegendPlacement};

use indexmap::IndexMap;

/// Label to handle mapping, in discovery order.
pub type LegendData = IndexMap<String, LegendHandle>;
