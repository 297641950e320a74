pub mod font;
pub mod subplot;
pub mod types;
pub mod value;

pub use font::{FontSize, FontSizeKeyword, LEGEND_TITLE_SCALE};
pub use subplot::{SubplotAdjust, SubplotParams};
pub use types::{Bbox, FigureSize, Viewport};
pub use value::DataValue;
