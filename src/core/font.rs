use std::fmt;

use serde::{Deserialize, Serialize};

/// Scale applied to the configured axis-label size for legend titles.
pub const LEGEND_TITLE_SCALE: f64 = 0.85;

/// Qualitative font size keywords understood by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSizeKeyword {
    XxSmall,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
    Larger,
    Smaller,
}

impl FontSizeKeyword {
    /// Multiplier relative to the base font size.
    #[must_use]
    pub const fn scaling(self) -> f64 {
        match self {
            Self::XxSmall => 0.579,
            Self::XSmall => 0.694,
            Self::Small | Self::Smaller => 0.833,
            Self::Medium => 1.0,
            Self::Large | Self::Larger => 1.2,
            Self::XLarge => 1.44,
            Self::XxLarge => 1.728,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::XxSmall => "xx-small",
            Self::XSmall => "x-small",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "x-large",
            Self::XxLarge => "xx-large",
            Self::Larger => "larger",
            Self::Smaller => "smaller",
        }
    }
}

/// A font size as configured: either points or a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSize {
    Points(f64),
    Keyword(FontSizeKeyword),
}

impl FontSize {
    /// Size in points, resolving keywords against `base_points`.
    #[must_use]
    pub fn to_points(self, base_points: f64) -> f64 {
        match self {
            Self::Points(points) => points,
            Self::Keyword(keyword) => base_points * keyword.scaling(),
        }
    }

    /// Multiplies numeric sizes; keywords are returned unchanged.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        match self {
            Self::Points(points) => Self::Points(points * factor),
            keyword @ Self::Keyword(_) => keyword,
        }
    }

    /// Legend title size derived from the axis-label size.
    ///
    /// Keyword sizes cannot be multiplied and are used unscaled.
    #[must_use]
    pub fn legend_title_size(axes_label_size: FontSize) -> Self {
        axes_label_size.scaled(LEGEND_TITLE_SCALE)
    }
}

impl From<f64> for FontSize {
    fn from(points: f64) -> Self {
        Self::Points(points)
    }
}

impl From<FontSizeKeyword> for FontSize {
    fn from(keyword: FontSizeKeyword) -> Self {
        Self::Keyword(keyword)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points(points) => write!(f, "{points}"),
            Self::Keyword(keyword) => f.write_str(keyword.as_str()),
        }
    }
}
