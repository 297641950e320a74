use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Facet grid bootstrap configuration.
///
/// Serializable so host applications can keep grid setup next to their
/// other plot settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Column whose levels become panel rows.
    pub row: Option<String>,
    /// Column whose levels become panel columns.
    pub col: Option<String>,
    /// Column whose levels become legend entries.
    pub hue: Option<String>,
    /// Wrap the column facets after this many panels.
    pub col_wrap: Option<usize>,
    /// Explicit hue level order; defaults to the data's levels.
    pub hue_order: Option<Vec<String>>,
    /// Panel height in inches.
    pub height: f64,
    /// Panel width as a multiple of `height`.
    pub aspect: f64,
    pub dpi: f64,
    /// Draw legends outside the panels (`right`/`top` placements).
    pub legend_out: bool,
    /// Panel titles are drawn in the right margin.
    pub margin_titles: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row: None,
            col: None,
            hue: None,
            col_wrap: None,
            hue_order: None,
            height: 3.0,
            aspect: 1.0,
            dpi: 100.0,
            legend_out: true,
            margin_titles: false,
        }
    }
}

impl GridConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_row(mut self, row: impl Into<String>) -> Self {
        self.row = Some(row.into());
        self
    }

    #[must_use]
    pub fn with_col(mut self, col: impl Into<String>) -> Self {
        self.col = Some(col.into());
        self
    }

    #[must_use]
    pub fn with_hue(mut self, hue: impl Into<String>) -> Self {
        self.hue = Some(hue.into());
        self
    }

    #[must_use]
    pub fn with_col_wrap(mut self, col_wrap: usize) -> Self {
        self.col_wrap = Some(col_wrap);
        self
    }

    #[must_use]
    pub fn with_hue_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hue_order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_panel_size(mut self, height: f64, aspect: f64) -> Self {
        self.height = height;
        self.aspect = aspect;
        self
    }

    #[must_use]
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    #[must_use]
    pub fn with_legend_out(mut self, legend_out: bool) -> Self {
        self.legend_out = legend_out;
        self
    }

    #[must_use]
    pub fn with_margin_titles(mut self, margin_titles: bool) -> Self {
        self.margin_titles = margin_titles;
        self
    }

    pub fn from_json_str(raw: &str) -> GridResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| GridError::InvalidData(format!("grid config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GridResult<()> {
        for (name, value) in [("height", self.height), ("aspect", self.aspect), ("dpi", self.dpi)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GridError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        if self.row.is_some() && self.col_wrap.is_some() {
            return Err(GridError::InvalidData(
                "cannot use `row` and `col_wrap` together".to_owned(),
            ));
        }
        if self.col_wrap == Some(0) {
            return Err(GridError::InvalidData("`col_wrap` must be >= 1".to_owned()));
        }
        Ok(())
    }
}
