use serde::{Deserialize, Serialize};

use crate::error::GridResult;
use crate::render::Color;

/// Visual key drawn next to a legend label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LegendHandle {
    /// Line sample, width in points.
    Line { color: Color, width: f64 },
    /// Filled swatch, edge width in points.
    Patch { color: Color, line_width: f64 },
    /// Scatter symbol, diameter in points.
    Marker { color: Color, size: f64 },
}

impl LegendHandle {
    #[must_use]
    pub const fn line(color: Color, width: f64) -> Self {
        Self::Line { color, width }
    }

    #[must_use]
    pub const fn patch(color: Color) -> Self {
        Self::Patch {
            color,
            line_width: 0.0,
        }
    }

    #[must_use]
    pub const fn marker(color: Color, size: f64) -> Self {
        Self::Marker { color, size }
    }

    /// Invisible placeholder keeping a legend row for a label without data.
    #[must_use]
    pub const fn blank() -> Self {
        Self::Patch {
            color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            line_width: 0.0,
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Line { color, .. } | Self::Patch { color, .. } | Self::Marker { color, .. } => {
                color
            }
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        match self {
            Self::Patch { color, line_width } => !color.is_transparent() || line_width > 0.0,
            Self::Line { color, width } => !color.is_transparent() && width > 0.0,
            Self::Marker { color, size } => !color.is_transparent() && size > 0.0,
        }
    }

    pub fn validate(self) -> GridResult<()> {
        self.color().validate()
    }
}
