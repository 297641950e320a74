use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("plotting context called without `font_scale` (named or positional slot {position})")]
    MissingFontScaleArgument { position: usize },

    #[error("font scale must be a finite number, got {0}")]
    InvalidFontScale(String),

    #[error("unknown plotting context `{0}`; expected paper, notebook, talk or poster")]
    UnknownContext(String),

    #[error("invalid rc override: {0}")]
    InvalidRcOverride(String),

    #[error("unknown data column `{0}`")]
    UnknownColumn(String),

    #[error("invalid figure size: width={width}in, height={height}in, dpi={dpi}")]
    InvalidFigureSize { width: f64, height: f64, dpi: f64 },

    #[error("invalid subplot params: {0}")]
    InvalidSubplotParams(String),

    #[error("unknown legend id {0}")]
    UnknownLegend(usize),

    #[error("axes index {index} out of range for {count} axes")]
    UnknownAxes { index: usize, count: usize },

    #[error("figure canvas has no renderer")]
    MissingRenderer,

    #[error("legend option `{0}` conflicts with the chosen placement")]
    ConflictingLegendOption(&'static str),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
