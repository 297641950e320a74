use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::style::RcParams;

/// Name of the `font_scale` argument of the plotting-context entry point.
pub const FONT_SCALE_ARG: &str = "font_scale";
/// Positional slot of `font_scale` when passed without a name.
pub const FONT_SCALE_POSITION: usize = 1;

const CONTEXT_ARG: &str = "context";
const CONTEXT_POSITION: usize = 0;
const RC_ARG: &str = "rc";
const RC_POSITION: usize = 2;

/// Arguments of one plotting-context call, positional and named.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextArgs {
    positional: Vec<Value>,
    named: IndexMap<String, Value>,
}

impl ContextArgs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    #[must_use]
    pub fn with_named(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    #[must_use]
    pub fn named(&self) -> &IndexMap<String, Value> {
        &self.named
    }

    /// Looks an argument up by name first, then by positional slot.
    #[must_use]
    pub fn get(&self, name: &str, position: usize) -> Option<&Value> {
        self.named
            .get(name)
            .or_else(|| self.positional.get(position))
    }
}

/// The toolkit's plotting-context styling entry point.
pub trait PlottingContext {
    fn plotting_context(&mut self, args: &ContextArgs) -> GridResult<RcParams>;
}

impl<F> PlottingContext for F
where
    F: FnMut(&ContextArgs) -> GridResult<RcParams>,
{
    fn plotting_context(&mut self, args: &ContextArgs) -> GridResult<RcParams> {
        self(args)
    }
}

/// Named presets, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextName {
    Paper,
    Notebook,
    Talk,
    Poster,
}

impl ContextName {
    #[must_use]
    pub const fn scaling(self) -> f64 {
        match self {
            Self::Paper => 0.8,
            Self::Notebook => 1.0,
            Self::Talk => 1.5,
            Self::Poster => 2.0,
        }
    }
}

impl FromStr for ContextName {
    type Err = GridError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "paper" => Ok(Self::Paper),
            "notebook" => Ok(Self::Notebook),
            "talk" => Ok(Self::Talk),
            "poster" => Ok(Self::Poster),
            other => Err(GridError::UnknownContext(other.to_owned())),
        }
    }
}

/// Plotting context that scales the notebook preset.
///
/// Accepts `context` (slot 0: a preset name, an rc object, or null for the
/// current params), `font_scale` (slot 1, default 1.0) and `rc` (slot 2, an
/// object of overrides applied last). `font_scale` only applies to presets.
#[derive(Debug, Clone, Default)]
pub struct ScaledPlottingContext {
    current: RcParams,
}

impl ScaledPlottingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Params returned for a null `context` argument.
    #[must_use]
    pub fn with_current(mut self, current: RcParams) -> Self {
        self.current = current;
        self
    }

    #[must_use]
    pub fn current(&self) -> RcParams {
        self.current
    }
}

impl PlottingContext for ScaledPlottingContext {
    fn plotting_context(&mut self, args: &ContextArgs) -> GridResult<RcParams> {
        let font_scale = match args.get(FONT_SCALE_ARG, FONT_SCALE_POSITION) {
            None | Some(Value::Null) => 1.0,
            Some(value) => font_scale_from_value(value)?,
        };

        let params = match args.get(CONTEXT_ARG, CONTEXT_POSITION) {
            None | Some(Value::Null) => self.current,
            Some(Value::Object(overrides)) => self.current.with_overrides(overrides)?,
            Some(Value::String(name)) => {
                let name = ContextName::from_str(name)?;
                RcParams::default().scaled(name.scaling(), font_scale)
            }
            Some(other) => return Err(GridError::UnknownContext(other.to_string())),
        };

        let params = match args.get(RC_ARG, RC_POSITION) {
            None | Some(Value::Null) => params,
            Some(Value::Object(overrides)) => params.with_overrides(overrides)?,
            Some(other) => {
                return Err(GridError::InvalidRcOverride(format!(
                    "rc must be an object, got {other}"
                )));
            }
        };

        debug!(font_scale, font_size = params.font_size, "resolved plotting context");
        Ok(params)
    }
}

pub(crate) fn font_scale_from_value(value: &Value) -> GridResult<f64> {
    match value.as_f64() {
        Some(scale) if scale.is_finite() => Ok(scale),
        _ => Err(GridError::InvalidFontScale(value.to_string())),
    }
}
