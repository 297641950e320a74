use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Pixel dimensions of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(self) -> GridResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(GridError::InvalidFigureSize {
                width: self.width,
                height: self.height,
                dpi: f64::NAN,
            });
        }
        Ok(())
    }

    /// Pixel viewport for the given resolution, rounded to whole pixels.
    #[must_use]
    pub fn to_viewport(self, dpi: f64) -> Viewport {
        Viewport::new(
            (self.width * dpi).round().max(0.0) as u32,
            (self.height * dpi).round().max(0.0) as u32,
        )
    }
}

/// Axis-aligned box in display space: pixels, origin at the bottom-left of
/// the figure, `y` growing upwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bbox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bbox {
    #[must_use]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[must_use]
    pub fn from_bounds(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        (self.x1 - self.x0).max(0.0)
    }

    #[must_use]
    pub fn height(self) -> f64 {
        (self.y1 - self.y0).max(0.0)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Strict overlap; boxes sharing only an edge do not overlap.
    #[must_use]
    pub fn overlaps(self, other: Bbox) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }
}
