pub mod context;
pub mod font_scale;
pub mod rc_params;

pub use context::{
    ContextArgs, ContextName, FONT_SCALE_ARG, FONT_SCALE_POSITION, PlottingContext,
    ScaledPlottingContext,
};
pub use font_scale::{FontScaleTracker, TrackedPlottingContext, UNSET_FONT_SCALE, last_font_scale};
pub use rc_params::RcParams;
