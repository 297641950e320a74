use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::FontSize;
use crate::error::{GridError, GridResult};

/// Toolkit styling parameters read by figures and legends.
///
/// Field names serialize to the toolkit's rc keys so override maps can be
/// written the way users already know them (`{"axes.labelsize": "large"}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RcParams {
    #[serde(rename = "font.size")]
    pub font_size: f64,
    #[serde(rename = "axes.labelsize")]
    pub axes_label_size: FontSize,
    #[serde(rename = "axes.titlesize")]
    pub axes_title_size: FontSize,
    #[serde(rename = "xtick.labelsize")]
    pub xtick_label_size: FontSize,
    #[serde(rename = "ytick.labelsize")]
    pub ytick_label_size: FontSize,
    #[serde(rename = "legend.fontsize")]
    pub legend_font_size: FontSize,
    #[serde(rename = "legend.title_fontsize")]
    pub legend_title_font_size: FontSize,
    #[serde(rename = "legend.frameon")]
    pub legend_frame_on: bool,
    #[serde(rename = "axes.linewidth")]
    pub axes_line_width: f64,
    #[serde(rename = "grid.linewidth")]
    pub grid_line_width: f64,
    #[serde(rename = "lines.linewidth")]
    pub lines_line_width: f64,
    #[serde(rename = "lines.markersize")]
    pub lines_marker_size: f64,
    #[serde(rename = "patch.linewidth")]
    pub patch_line_width: f64,
    #[serde(rename = "xtick.major.width")]
    pub tick_major_width: f64,
    #[serde(rename = "xtick.minor.width")]
    pub tick_minor_width: f64,
    #[serde(rename = "xtick.major.size")]
    pub tick_major_size: f64,
    #[serde(rename = "xtick.minor.size")]
    pub tick_minor_size: f64,
}

impl Default for RcParams {
    /// The unscaled `notebook` context.
    fn default() -> Self {
        Self {
            font_size: 12.0,
            axes_label_size: FontSize::Points(12.0),
            axes_title_size: FontSize::Points(12.0),
            xtick_label_size: FontSize::Points(11.0),
            ytick_label_size: FontSize::Points(11.0),
            legend_font_size: FontSize::Points(11.0),
            legend_title_font_size: FontSize::Points(12.0),
            legend_frame_on: true,
            axes_line_width: 1.25,
            grid_line_width: 1.0,
            lines_line_width: 1.5,
            lines_marker_size: 6.0,
            patch_line_width: 1.0,
            tick_major_width: 1.25,
            tick_minor_width: 1.0,
            tick_major_size: 6.0,
            tick_minor_size: 4.0,
        }
    }
}

impl RcParams {
    /// Multiplies every size by `scaling` and font sizes additionally by
    /// `font_scale`. Keyword font sizes are left as they are.
    #[must_use]
    pub fn scaled(self, scaling: f64, font_scale: f64) -> Self {
        let font = scaling * font_scale;
        Self {
            font_size: self.font_size * font,
            axes_label_size: self.axes_label_size.scaled(font),
            axes_title_size: self.axes_title_size.scaled(font),
            xtick_label_size: self.xtick_label_size.scaled(font),
            ytick_label_size: self.ytick_label_size.scaled(font),
            legend_font_size: self.legend_font_size.scaled(font),
            legend_title_font_size: self.legend_title_font_size.scaled(font),
            legend_frame_on: self.legend_frame_on,
            axes_line_width: self.axes_line_width * scaling,
            grid_line_width: self.grid_line_width * scaling,
            lines_line_width: self.lines_line_width * scaling,
            lines_marker_size: self.lines_marker_size * scaling,
            patch_line_width: self.patch_line_width * scaling,
            tick_major_width: self.tick_major_width * scaling,
            tick_minor_width: self.tick_minor_width * scaling,
            tick_major_size: self.tick_major_size * scaling,
            tick_minor_size: self.tick_minor_size * scaling,
        }
    }

    /// Returns a copy with the given rc keys replaced.
    pub fn with_overrides(self, overrides: &Map<String, Value>) -> GridResult<Self> {
        let mut merged = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(GridError::InvalidRcOverride(format!(
                    "rc params serialized to non-object {other}"
                )));
            }
            Err(err) => return Err(GridError::InvalidRcOverride(err.to_string())),
        };
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
        serde_json::from_value(Value::Object(merged))
            .map_err(|err| GridError::InvalidRcOverride(err.to_string()))
    }

    /// Loads params from a JSON object, filling absent keys from defaults.
    pub fn from_json_str(raw: &str) -> GridResult<Self> {
        let overrides: Map<String, Value> = serde_json::from_str(raw)
            .map_err(|err| GridError::InvalidRcOverride(err.to_string()))?;
        Self::default().with_overrides(&overrides)
    }
}
