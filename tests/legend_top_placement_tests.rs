use approx::assert_relative_eq;
use facet_legend::core::FigureSize;
use facet_legend::figure::{Figure, HeadlessFigure};
use facet_legend::legend::LegendLocation;
use facet_legend::render::{Color, NullRenderer};
use facet_legend::style::{ContextArgs, PlottingContext, ScaledPlottingContext};
use facet_legend::{
    DataTable, FacetGrid, FontScaleTracker, GridConfig, GridError, LegendHandle, LegendOptions,
    LegendPlacement, LegendRequest,
};

fn tips() -> DataTable {
    DataTable::new()
        .with_column("day", ["Thur", "Fri", "Sat", "Sun", "Sat", "Sun"])
        .expect("day column")
        .with_column("time", ["Lunch", "Lunch", "Dinner", "Dinner", "Dinner", "Lunch"])
        .expect("time column")
}

fn config() -> GridConfig {
    GridConfig::new().with_col("time").with_hue("day")
}

/// Grid styled through a tracked plotting context at `font_scale`.
fn build_grid(font_scale: f64) -> FacetGrid {
    let tracker = FontScaleTracker::new();
    let mut context = tracker.track(ScaledPlottingContext::new());
    let rc = context
        .plotting_context(&ContextArgs::new().with_arg("notebook").with_arg(font_scale))
        .expect("plotting context");

    let mut grid = FacetGrid::with_rc(tips(), config(), rc)
        .expect("grid init")
        .with_font_scale_tracker(tracker);
    for (index, day) in ["Thur", "Fri", "Sat", "Sun"].into_iter().enumerate() {
        let shade = 0.2 + 0.2 * index as f64;
        grid.add_legend_data(day, LegendHandle::patch(Color::rgb(shade, 0.3, 0.6)));
    }
    grid
}

fn top_request() -> LegendRequest {
    LegendRequest::new().with_placement(LegendPlacement::Top)
}

#[test]
fn top_legend_grows_height_only() {
    let mut grid = build_grid(1.0);
    let original = grid.figure().size_inches();

    grid.add_legend(top_request()).expect("legend");

    let resized = grid.figure().size_inches();
    assert!(resized.height > original.height);
    assert_eq!(resized.width, original.width);
    assert_eq!(grid.figure().draw_count(), 2);
}

#[test]
fn top_margin_scales_with_tracked_font_scale() {
    let mut grid = build_grid(1.5);
    grid.add_legend(top_request()).expect("legend");

    let space_needed = grid.space_needed().expect("space");
    let tracked = grid.font_scale_tracker().font_scale();
    assert_eq!(tracked, 1.5);
    assert!(space_needed >= 0.04 * tracked);
    assert_relative_eq!(grid.figure().subplot_params().top, 1.0 - space_needed);
    // Right edge stays at its default.
    assert_relative_eq!(grid.figure().subplot_params().right, 0.9);
}

#[test]
fn top_reserved_fraction_is_margin_plus_occupied_height() {
    let mut grid = build_grid(1.0);
    let original = grid.figure().size_inches();
    grid.add_legend(top_request()).expect("legend");

    let legend = grid.legend().expect("legend id");
    let legend_height =
        grid.figure().legend_window_extent(legend).expect("extent").height() / grid.figure().dpi();
    assert_relative_eq!(
        grid.space_needed().expect("space"),
        0.04 + legend_height / (original.height + legend_height),
        epsilon = 1e-12
    );
}

#[test]
fn same_legend_with_larger_font_scale_reserves_more_room() {
    let tracker = FontScaleTracker::new();
    tracker.record(1.0);
    let mut small = build_grid(1.0).with_font_scale_tracker(tracker);
    small.add_legend(top_request()).expect("legend");

    let tracker = FontScaleTracker::new();
    tracker.record(2.0);
    let mut large = build_grid(1.0).with_font_scale_tracker(tracker);
    large.add_legend(top_request()).expect("legend");

    let delta = large.space_needed().expect("space") - small.space_needed().expect("space");
    assert_relative_eq!(delta, 0.04, epsilon = 1e-12);
}

#[test]
fn top_legend_spans_one_row_with_a_column_per_handle() {
    let mut grid = build_grid(1.0);
    grid.add_legend(top_request()).expect("legend");

    let figure = grid.figure();
    let legend = grid.legend().expect("legend id");
    let spec = figure.legend_spec(legend).expect("spec");
    assert_eq!(spec.location, LegendLocation::UpperCenter);
    assert_eq!(spec.ncol, 4);
    assert!(!spec.frame_on);

    let extent = figure.legend_window_extent(legend).expect("extent");
    let height_px = figure.size_inches().height * figure.dpi();
    assert_relative_eq!(extent.y1, height_px, epsilon = 1e-9);
    assert!(!figure.subplot_region().overlaps(extent));
}

#[test]
fn explicit_column_count_conflicts_with_top_placement() {
    let mut grid = build_grid(1.0);
    let err = grid
        .add_legend(top_request().with_options(LegendOptions::default().with_ncol(2)))
        .expect_err("ncol is fixed by the top placement");
    assert!(matches!(err, GridError::ConflictingLegendOption("ncol")));
}

#[test]
fn unset_font_scale_is_used_as_is() {
    let mut grid = build_grid(1.0).with_font_scale_tracker(FontScaleTracker::new());
    let original = grid.figure().size_inches();
    grid.add_legend(top_request()).expect("legend");

    let legend = grid.legend().expect("legend id");
    let legend_height =
        grid.figure().legend_window_extent(legend).expect("extent").height() / grid.figure().dpi();
    assert_relative_eq!(
        grid.space_needed().expect("space"),
        -0.04 + legend_height / (original.height + legend_height),
        epsilon = 1e-12
    );
}

#[test]
fn without_renderer_top_legend_keeps_size_and_reserves_only_the_margin() {
    let figure = HeadlessFigure::<NullRenderer>::new(FigureSize::new(6.0, 3.0), 100.0, 1, 2)
        .expect("figure");
    let tracker = FontScaleTracker::new();
    tracker.record(1.5);
    let mut grid = FacetGrid::with_figure(tips(), config(), figure)
        .expect("grid init")
        .with_font_scale_tracker(tracker);
    grid.add_legend_data("Thur", LegendHandle::patch(Color::rgb(0.2, 0.3, 0.6)));

    grid.add_legend(top_request()).expect("legend");

    assert_eq!(grid.figure().size_inches(), FigureSize::new(6.0, 3.0));
    assert_eq!(grid.figure().draw_count(), 0);
    assert_relative_eq!(grid.space_needed().expect("space"), 0.04 * 1.5);
    assert_relative_eq!(grid.figure().subplot_params().top, 1.0 - 0.04 * 1.5);
}
