//! Touches the process-wide tracker, so it lives alone in its own test binary.

use facet_legend::last_font_scale;
use facet_legend::style::{
    ContextArgs, FontScaleTracker, PlottingContext, ScaledPlottingContext, UNSET_FONT_SCALE,
};

#[test]
fn global_tracker_starts_unset_and_is_shared_by_every_handle() {
    assert_eq!(last_font_scale(), UNSET_FONT_SCALE);

    let first = FontScaleTracker::global();
    let second = FontScaleTracker::global();
    assert!(first.shares_state_with(&second));
    assert!(!first.is_set());

    let mut context = second.track(ScaledPlottingContext::new());
    context
        .plotting_context(&ContextArgs::new().with_arg("talk").with_arg(1.4))
        .expect("styled");

    assert_eq!(first.font_scale(), 1.4);
    assert_eq!(last_font_scale(), 1.4);
}
