use facet_legend::core::{DataValue, FigureSize};
use facet_legend::render::NullRenderer;
use facet_legend::{DataTable, FacetGrid, Figure, GridConfig, GridError, HeadlessFigure};

fn penguins() -> DataTable {
    DataTable::new()
        .with_column(
            "island",
            ["Torgersen", "Biscoe", "Dream", "Biscoe", "Dream", "Torgersen"],
        )
        .expect("island column")
        .with_column("sex", ["Male", "Female", "Male", "Female", "Male", "Female"])
        .expect("sex column")
        .with_column("species", ["Adelie", "Adelie", "Chinstrap", "Gentoo", "Chinstrap", "Adelie"])
        .expect("species column")
        .with_column("year", [2007_i64, 2008, 2009, 2007, 2008, 2009])
        .expect("year column")
}

#[test]
fn col_wrap_sets_shape_and_figure_size() {
    let config = GridConfig::new()
        .with_col("island")
        .with_col_wrap(2)
        .with_panel_size(2.5, 1.2);
    let grid = FacetGrid::new(penguins(), config).expect("grid init");

    assert_eq!(grid.shape(), (2, 2));
    assert_eq!(grid.col_names().len(), 3);
    let size = grid.figure().size_inches();
    assert!((size.width - 2.0 * 2.5 * 1.2).abs() < 1e-12);
    assert!((size.height - 2.0 * 2.5).abs() < 1e-12);
    assert_eq!(grid.figure().axes_count(), 4);
}

#[test]
fn col_wrap_wider_than_levels_keeps_wrap_columns() {
    let config = GridConfig::new().with_col("island").with_col_wrap(5);
    let grid = FacetGrid::new(penguins(), config).expect("grid init");
    assert_eq!(grid.shape(), (1, 5));
    assert_eq!(grid.figure().axes_count(), 5);
    assert_eq!(grid.figure().size_inches(), FigureSize::new(15.0, 3.0));
}

#[test]
fn row_and_col_facets_multiply() {
    let config = GridConfig::new().with_row("sex").with_col("island");
    let grid = FacetGrid::new(penguins(), config).expect("grid init");

    assert_eq!(grid.shape(), (2, 3));
    assert_eq!(
        grid.row_names(),
        &[DataValue::from("Male"), DataValue::from("Female")]
    );
    assert_eq!(grid.figure().size_inches(), FigureSize::new(9.0, 6.0));
}

#[test]
fn grid_without_facets_has_one_panel() {
    let grid = FacetGrid::new(penguins(), GridConfig::new()).expect("grid init");
    assert_eq!(grid.shape(), (1, 1));
    assert_eq!(grid.hue_var(), None);
    assert_eq!(grid.hue_names(), None);
}

#[test]
fn hue_levels_follow_data_or_explicit_order() {
    let grid =
        FacetGrid::new(penguins(), GridConfig::new().with_hue("species")).expect("grid init");
    assert_eq!(grid.hue_var(), Some("species"));
    assert_eq!(
        grid.hue_names().expect("hue names"),
        &[
            DataValue::from("Adelie"),
            DataValue::from("Chinstrap"),
            DataValue::from("Gentoo")
        ]
    );

    let config = GridConfig::new()
        .with_hue("species")
        .with_hue_order(["Gentoo", "Adelie"]);
    let grid = FacetGrid::new(penguins(), config).expect("grid init");
    assert_eq!(
        grid.hue_names().expect("hue names"),
        &[DataValue::from("Gentoo"), DataValue::from("Adelie")]
    );
}

#[test]
fn numeric_hue_levels_are_sorted() {
    let grid = FacetGrid::new(penguins(), GridConfig::new().with_hue("year")).expect("grid init");
    assert_eq!(
        grid.hue_names().expect("hue names"),
        &[DataValue::Int(2007), DataValue::Int(2008), DataValue::Int(2009)]
    );
}

#[test]
fn unknown_columns_are_reported() {
    let err = FacetGrid::new(penguins(), GridConfig::new().with_col("bill_length"))
        .expect_err("unknown column");
    assert!(matches!(err, GridError::UnknownColumn(name) if name == "bill_length"));

    let err = FacetGrid::new(penguins(), GridConfig::new().with_hue("body_mass"))
        .expect_err("unknown hue");
    assert!(matches!(err, GridError::UnknownColumn(_)));
}

#[test]
fn invalid_configs_are_rejected() {
    let config = GridConfig::new().with_row("sex").with_col("island").with_col_wrap(2);
    assert!(matches!(
        FacetGrid::new(penguins(), config),
        Err(GridError::InvalidData(_))
    ));

    let config = GridConfig::new().with_panel_size(-1.0, 1.0);
    assert!(FacetGrid::new(penguins(), config).is_err());
}

#[test]
fn caller_figure_must_hold_every_panel() {
    let figure: HeadlessFigure<NullRenderer> =
        HeadlessFigure::new(FigureSize::new(6.0, 3.0), 100.0, 1, 2).expect("figure");
    let config = GridConfig::new().with_col("island");
    assert!(matches!(
        FacetGrid::with_figure(penguins(), config.clone(), figure),
        Err(GridError::InvalidData(_))
    ));

    let figure: HeadlessFigure<NullRenderer> =
        HeadlessFigure::new(FigureSize::new(9.0, 3.0), 100.0, 1, 3).expect("figure");
    let grid = FacetGrid::with_figure(penguins(), config, figure).expect("grid init");
    assert!(!grid.figure().has_renderer());
}

#[test]
fn grid_config_loads_from_json() {
    let config = GridConfig::from_json_str(
        r#"{ "col": "island", "hue": "sex", "height": 2.0, "margin_titles": true }"#,
    )
    .expect("config");
    let grid = FacetGrid::new(penguins(), config).expect("grid init");
    assert_eq!(grid.shape(), (1, 3));
    assert!(grid.config().margin_titles);
    assert_eq!(grid.figure().size_inches(), FigureSize::new(6.0, 2.0));
}
