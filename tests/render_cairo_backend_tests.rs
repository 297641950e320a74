#![cfg(feature = "cairo-backend")]

use facet_legend::core::FigureSize;
use facet_legend::render::{Color, CairoRenderer};
use facet_legend::{
    DataTable, FacetGrid, Figure, FontScaleTracker, GridConfig, HeadlessFigure, LegendHandle,
    LegendRequest,
};

fn build_grid() -> FacetGrid<HeadlessFigure<CairoRenderer>> {
    let data = DataTable::new()
        .with_column("sex", ["Male", "Female", "Male", "Female"])
        .expect("sex column")
        .with_column("smoker", ["Yes", "No", "No", "Yes"])
        .expect("smoker column");
    let figure = HeadlessFigure::new(FigureSize::new(6.0, 3.0), 100.0, 1, 2)
        .expect("figure")
        .with_renderer(CairoRenderer::new());
    let config = GridConfig::new().with_col("sex").with_hue("smoker");
    let mut grid = FacetGrid::with_figure(data, config, figure)
        .expect("grid init")
        .with_font_scale_tracker(FontScaleTracker::new());
    grid.add_legend_data("Yes", LegendHandle::line(Color::rgb(0.8, 0.2, 0.2), 1.5));
    grid.add_legend_data("No", LegendHandle::patch(Color::rgb(0.2, 0.2, 0.8)));
    grid
}

#[test]
fn cairo_surface_follows_grown_figure() {
    let mut grid = build_grid();
    grid.add_legend(LegendRequest::new()).expect("legend");

    let expected = grid.figure().size_inches().to_viewport(grid.figure().dpi());
    let renderer = grid.figure().renderer().expect("renderer");
    let surface = renderer.surface().expect("surface after render");
    assert_eq!(surface.width(), i32::try_from(expected.width).expect("width"));
    assert_eq!(surface.height(), 300);
    assert!(surface.width() > 600);

    let stats = renderer.last_stats();
    // Two axes backgrounds plus the patch swatch.
    assert_eq!(stats.rects_drawn, 3);
    assert_eq!(stats.lines_drawn, 1);
    // Title plus two labels.
    assert_eq!(stats.texts_drawn, 3);
}

#[test]
fn cairo_renderer_writes_png() {
    let mut grid = build_grid();
    grid.add_legend(LegendRequest::new()).expect("legend");

    let mut png = Vec::new();
    grid.figure()
        .renderer()
        .expect("renderer")
        .write_png(&mut png)
        .expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn png_before_first_render_is_an_error() {
    let renderer = CairoRenderer::new();
    assert_eq!(renderer.backend_name(), "cairo+pango+pangocairo");
    assert!(renderer.write_png(&mut Vec::new()).is_err());
}
