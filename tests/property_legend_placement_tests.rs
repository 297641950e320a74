use facet_legend::render::Color;
use facet_legend::style::{ContextArgs, PlottingContext, ScaledPlottingContext};
use facet_legend::{
    DataTable, FacetGrid, Figure, FontScaleTracker, GridConfig, LegendHandle, LegendPlacement,
    LegendRequest,
};
use proptest::prelude::*;

fn build_grid(levels: usize, font_scale: f64, height: f64, margin_titles: bool) -> FacetGrid {
    let groups: Vec<String> = (0..levels).map(|index| format!("group {index}")).collect();
    let panels: Vec<&str> = (0..levels)
        .map(|index| if index % 2 == 0 { "a" } else { "b" })
        .collect();
    let data = DataTable::new()
        .with_column("group", groups.clone())
        .expect("group column")
        .with_column("panel", panels)
        .expect("panel column");
    let config = GridConfig::new()
        .with_col("panel")
        .with_hue("group")
        .with_panel_size(height, 1.0)
        .with_margin_titles(margin_titles);

    let tracker = FontScaleTracker::new();
    let rc = tracker
        .track(ScaledPlottingContext::new())
        .plotting_context(&ContextArgs::new().with_arg("notebook").with_arg(font_scale))
        .expect("plotting context");
    let mut grid = FacetGrid::with_rc(data, config, rc)
        .expect("grid init")
        .with_font_scale_tracker(tracker);
    for (index, group) in groups.into_iter().enumerate() {
        let shade = index as f64 / levels as f64;
        grid.add_legend_data(group, LegendHandle::line(Color::rgb(shade, 0.4, 0.6), 1.5));
    }
    grid
}

proptest! {
    #[test]
    fn outside_legends_grow_the_figure_and_clear_every_panel(
        levels in 1usize..7,
        font_scale in 0.5f64..2.5,
        height in 2.0f64..5.0,
        margin_titles in any::<bool>(),
        top in any::<bool>(),
    ) {
        let placement = if top { LegendPlacement::Top } else { LegendPlacement::Right };
        let mut grid = build_grid(levels, font_scale, height, margin_titles);
        let original = grid.figure().size_inches();

        grid.add_legend(LegendRequest::new().with_placement(placement)).expect("legend");

        let space = grid.space_needed().expect("outside placement reserves space");
        let params = grid.figure().subplot_params();
        let resized = grid.figure().size_inches();
        if top {
            prop_assert!(resized.height > original.height);
            prop_assert_eq!(resized.width, original.width);
            prop_assert!(space >= 0.04 * font_scale);
            prop_assert!((params.top - (1.0 - space)).abs() < 1e-12);
        } else {
            prop_assert!(resized.width > original.width);
            prop_assert_eq!(resized.height, original.height);
            let margin = if margin_titles { 0.04 } else { 0.01 };
            prop_assert!(space >= margin);
            prop_assert!((params.right - (1.0 - space)).abs() < 1e-12);
        }

        let legend = grid.legend().expect("legend id");
        let figure = grid.figure_mut();
        figure.draw().expect("final render pass");
        let extent = figure.legend_window_extent(legend).expect("extent");
        for axes in figure.axes_extents() {
            prop_assert!(!extent.overlaps(*axes));
        }
    }

    #[test]
    fn recorded_font_scale_sets_top_margin_exactly(font_scale in 0.25f64..3.0) {
        let mut grid = build_grid(3, 1.0, 3.0, false);
        grid.font_scale_tracker().record(font_scale);

        grid.add_legend(LegendRequest::new().with_placement(LegendPlacement::Top))
            .expect("legend");

        let legend = grid.legend().expect("legend id");
        let legend_height = grid.figure().legend_window_extent(legend).expect("extent").height()
            / grid.figure().dpi();
        let occupied = legend_height / (3.0 + legend_height);
        let space = grid.space_needed().expect("space");
        prop_assert!((space - (0.04 * font_scale + occupied)).abs() < 1e-12);
    }
}
