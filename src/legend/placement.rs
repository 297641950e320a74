use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where `add_legend` puts the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPlacement {
    /// Outside the grid, right of the panels; the figure grows wider.
    #[default]
    Right,
    /// Outside the grid, above the panels; the figure grows taller.
    Top,
    /// Inside the first panel; the figure keeps its size.
    Inside,
}

impl FromStr for LegendPlacement {
    type Err = std::convert::Infallible;

    /// `right` and `top` select the outside placements; any other text
    /// falls back to inside.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(match raw {
            "right" => Self::Right,
            "top" => Self::Top,
            _ => Self::Inside,
        })
    }
}

impl fmt::Display for LegendPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Right => "right",
            Self::Top => "top",
            Self::Inside => "inside",
        })
    }
}

/// Anchor of a legend box within its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendLocation {
    CenterRight,
    UpperCenter,
    Best,
}
