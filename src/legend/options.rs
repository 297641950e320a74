use serde::{Deserialize, Serialize};

use crate::core::FontSize;
use crate::error::{GridError, GridResult};
use crate::legend::{LegendHandle, LegendLocation};

/// Pass-through styling for the toolkit legend call.
///
/// `None` means "toolkit default"; placements fill some of them in before
/// drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    pub frame_on: Option<bool>,
    pub scatter_points: Option<u32>,
    pub ncol: Option<usize>,
    pub font_size: Option<FontSize>,
}

impl LegendOptions {
    #[must_use]
    pub fn with_frame_on(mut self, frame_on: bool) -> Self {
        self.frame_on = Some(frame_on);
        self
    }

    #[must_use]
    pub fn with_scatter_points(mut self, scatter_points: u32) -> Self {
        self.scatter_points = Some(scatter_points);
        self
    }

    #[must_use]
    pub fn with_ncol(mut self, ncol: usize) -> Self {
        self.ncol = Some(ncol);
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size: impl Into<FontSize>) -> Self {
        self.font_size = Some(font_size.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub handle: LegendHandle,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, handle: LegendHandle) -> Self {
        Self {
            label: label.into(),
            handle,
        }
    }
}

/// Upper bound on marker samples drawn per scatter entry.
pub const MAX_SCATTER_POINTS: u32 = 16;

/// Fully resolved legend request handed to a [`Figure`](crate::figure::Figure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendSpec {
    pub entries: Vec<LegendEntry>,
    pub location: LegendLocation,
    pub ncol: usize,
    pub font_size: FontSize,
    pub frame_on: bool,
    pub scatter_points: u32,
}

impl LegendSpec {
    pub fn validate(&self) -> GridResult<()> {
        if let FontSize::Points(points) = self.font_size {
            if !points.is_finite() || points <= 0.0 {
                return Err(GridError::InvalidData(
                    "legend font size must be finite and > 0".to_owned(),
                ));
            }
        }
        if self.scatter_points == 0 || self.scatter_points > MAX_SCATTER_POINTS {
            return Err(GridError::InvalidData(format!(
                "scatter points must be in 1..={MAX_SCATTER_POINTS}, got {}",
                self.scatter_points
            )));
        }
        for entry in &self.entries {
            entry.handle.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.label.as_str()).collect()
    }
}
