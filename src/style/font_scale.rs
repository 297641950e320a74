//! Last-used font scale observation.
//!
//! The legend top placement biases its reserved margin by the font scale the
//! application last styled with. Rather than patching the styling entry
//! point, callers route it through [`FontScaleTracker::track`], which records
//! the value and delegates unchanged.

use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::error::{GridError, GridResult};
use crate::style::context::{FONT_SCALE_ARG, FONT_SCALE_POSITION, font_scale_from_value};
use crate::style::{ContextArgs, PlottingContext, RcParams};

/// Value reported before any font scale was recorded.
pub const UNSET_FONT_SCALE: f64 = -1.0;

static GLOBAL_TRACKER: OnceLock<FontScaleTracker> = OnceLock::new();

/// Shared cell holding the most recently recorded font scale.
///
/// Clones observe and update the same value.
#[derive(Debug, Clone)]
pub struct FontScaleTracker {
    last: Arc<AtomicU64>,
}

impl Default for FontScaleTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FontScaleTracker {
    /// Creates an independent tracker, unset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Arc::new(AtomicU64::new(UNSET_FONT_SCALE.to_bits())),
        }
    }

    /// The process-wide tracker. Every call returns a handle on the same state.
    #[must_use]
    pub fn global() -> Self {
        GLOBAL_TRACKER.get_or_init(Self::new).clone()
    }

    /// Last recorded font scale, or [`UNSET_FONT_SCALE`].
    #[must_use]
    pub fn font_scale(&self) -> f64 {
        f64::from_bits(self.last.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.font_scale().to_bits() != UNSET_FONT_SCALE.to_bits()
    }

    #[must_use]
    pub fn shares_state_with(&self, other: &FontScaleTracker) -> bool {
        Arc::ptr_eq(&self.last, &other.last)
    }

    pub fn record(&self, font_scale: f64) {
        self.last.store(font_scale.to_bits(), Ordering::Relaxed);
    }

    /// Extracts `font_scale` from a plotting-context call and records it.
    ///
    /// The named argument wins over positional slot 1. A call carrying
    /// neither breaks the entry point's signature and is an error. An explicit
    /// null is left for the wrapped entry point to interpret and records
    /// nothing.
    pub fn record_args(&self, args: &ContextArgs) -> GridResult<Option<f64>> {
        let value = args
            .get(FONT_SCALE_ARG, FONT_SCALE_POSITION)
            .ok_or(GridError::MissingFontScaleArgument {
                position: FONT_SCALE_POSITION,
            })?;
        if value.is_null() {
            trace!("null font scale passed through unrecorded");
            return Ok(None);
        }
        let font_scale = font_scale_from_value(value)?;
        self.record(font_scale);
        trace!(font_scale, "recorded font scale");
        Ok(Some(font_scale))
    }

    /// Wraps a plotting-context entry point so every call is observed.
    #[must_use]
    pub fn track<C: PlottingContext>(&self, inner: C) -> TrackedPlottingContext<C> {
        TrackedPlottingContext {
            inner,
            tracker: self.clone(),
        }
    }
}

/// Reads the process-wide tracker.
#[must_use]
pub fn last_font_scale() -> f64 {
    FontScaleTracker::global().font_scale()
}

/// A plotting-context entry point that records `font_scale` before
/// delegating.
#[derive(Debug, Clone)]
pub struct TrackedPlottingContext<C> {
    inner: C,
    tracker: FontScaleTracker,
}

impl<C> TrackedPlottingContext<C> {
    #[must_use]
    pub fn tracker(&self) -> &FontScaleTracker {
        &self.tracker
    }

    #[must_use]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: PlottingContext> PlottingContext for TrackedPlottingContext<C> {
    fn plotting_context(&mut self, args: &ContextArgs) -> GridResult<RcParams> {
        self.tracker.record_args(args)?;
        self.inner.plotting_context(args)
    }
}
