use serde::{Deserialize, Serialize};

use crate::core::Bbox;
use crate::error::{GridError, GridResult};

/// Figure-relative placement of the subplot grid.
///
/// `left`/`right`/`bottom`/`top` are fractions of the figure extent;
/// `wspace`/`hspace` are fractions of the average axes width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubplotParams {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub wspace: f64,
    pub hspace: f64,
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self {
            left: 0.125,
            right: 0.9,
            bottom: 0.11,
            top: 0.88,
            wspace: 0.2,
            hspace: 0.2,
        }
    }
}

/// Partial update for [`SubplotParams`]; `None` keeps the current value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SubplotAdjust {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub top: Option<f64>,
    pub wspace: Option<f64>,
    pub hspace: Option<f64>,
}

impl SubplotAdjust {
    #[must_use]
    pub fn right(right: f64) -> Self {
        Self {
            right: Some(right),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn top(top: f64) -> Self {
        Self {
            top: Some(top),
            ..Self::default()
        }
    }
}

impl SubplotParams {
    /// Applies `adjust` and validates the merged result.
    ///
    /// The current params are left untouched when validation fails.
    pub fn apply(&mut self, adjust: SubplotAdjust) -> GridResult<()> {
        let merged = Self {
            left: adjust.left.unwrap_or(self.left),
            right: adjust.right.unwrap_or(self.right),
            bottom: adjust.bottom.unwrap_or(self.bottom),
            top: adjust.top.unwrap_or(self.top),
            wspace: adjust.wspace.unwrap_or(self.wspace),
            hspace: adjust.hspace.unwrap_or(self.hspace),
        };
        merged.validate()?;
        *self = merged;
        Ok(())
    }

    pub fn validate(self) -> GridResult<()> {
        for (name, value) in [
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
            ("top", self.top),
            ("wspace", self.wspace),
            ("hspace", self.hspace),
        ] {
            if !value.is_finite() {
                return Err(GridError::InvalidSubplotParams(format!(
                    "`{name}` must be finite"
                )));
            }
        }
        if self.left >= self.right {
            return Err(GridError::InvalidSubplotParams(format!(
                "left ({}) must be < right ({})",
                self.left, self.right
            )));
        }
        if self.bottom >= self.top {
            return Err(GridError::InvalidSubplotParams(format!(
                "bottom ({}) must be < top ({})",
                self.bottom, self.top
            )));
        }
        if self.wspace < 0.0 || self.hspace < 0.0 {
            return Err(GridError::InvalidSubplotParams(
                "wspace and hspace must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Display-space box of the whole subplot region.
    #[must_use]
    pub fn region(self, width_px: f64, height_px: f64) -> Bbox {
        Bbox::new(
            self.left * width_px,
            self.bottom * height_px,
            self.right * width_px,
            self.top * height_px,
        )
    }

    /// Display-space boxes of a `nrows x ncols` axes grid, row-major starting
    /// at the top-left cell.
    #[must_use]
    pub fn axes_boxes(self, nrows: usize, ncols: usize, width_px: f64, height_px: f64) -> Vec<Bbox> {
        if nrows == 0 || ncols == 0 {
            return Vec::new();
        }
        let rows = nrows as f64;
        let cols = ncols as f64;
        let cell_height = (self.top - self.bottom) / (rows + self.hspace * (rows - 1.0));
        let cell_width = (self.right - self.left) / (cols + self.wspace * (cols - 1.0));
        let row_step = cell_height * (1.0 + self.hspace);
        let col_step = cell_width * (1.0 + self.wspace);

        let mut boxes = Vec::with_capacity(nrows * ncols);
        for row in 0..nrows {
            let top = self.top - row as f64 * row_step;
            for col in 0..ncols {
                let left = self.left + col as f64 * col_step;
                boxes.push(Bbox::new(
                    left * width_px,
                    (top - cell_height) * height_px,
                    (left + cell_width) * width_px,
                    top * height_px,
                ));
            }
        }
        boxes
    }
}

#[cfg(test)]
mod tests {
    use super::{SubplotAdjust, SubplotParams};

    #[test]
    fn rejected_adjustment_keeps_previous_params() {
        let mut params = SubplotParams::default();
        let err = params.apply(SubplotAdjust::top(0.05));
        assert!(err.is_err());
        assert_eq!(params, SubplotParams::default());
    }

    #[test]
    fn axes_grid_spans_subplot_region() {
        let params = SubplotParams {
            left: 0.1,
            right: 0.9,
            bottom: 0.1,
            top: 0.9,
            wspace: 0.25,
            hspace: 0.0,
        };
        let boxes = params.axes_boxes(1, 2, 1000.0, 500.0);
        assert_eq!(boxes.len(), 2);
        assert!((boxes[0].x0 - 100.0).abs() <= 1e-9);
        assert!((boxes[1].x1 - 900.0).abs() <= 1e-9);
        // Gap between the two cells is wspace times the cell width.
        let gap = boxes[1].x0 - boxes[0].x1;
        assert!((gap - 0.25 * boxes[0].width()).abs() <= 1e-9);
        assert!((boxes[0].y1 - 450.0).abs() <= 1e-9);
    }
}
