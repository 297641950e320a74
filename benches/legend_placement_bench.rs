use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use facet_legend::legend::{LegendEntry, layout_legend};
use facet_legend::render::Color;
use facet_legend::{
    DataTable, FacetGrid, FontScaleTracker, GridConfig, LegendHandle, LegendPlacement,
    LegendRequest,
};
use std::hint::black_box;

fn build_grid(levels: usize) -> FacetGrid {
    let groups: Vec<String> = (0..levels).map(|index| format!("level {index}")).collect();
    let panels: Vec<String> = (0..levels).map(|index| format!("panel {}", index % 4)).collect();
    let data = DataTable::new()
        .with_column("group", groups.clone())
        .expect("group column")
        .with_column("panel", panels)
        .expect("panel column");
    let config = GridConfig::new().with_col("panel").with_hue("group");

    let tracker = FontScaleTracker::new();
    tracker.record(1.0);
    let mut grid = FacetGrid::new(data, config)
        .expect("grid init")
        .with_font_scale_tracker(tracker);
    for (index, group) in groups.into_iter().enumerate() {
        let shade = index as f64 / levels as f64;
        grid.add_legend_data(group, LegendHandle::line(Color::rgb(shade, 0.5, 0.5), 1.5));
    }
    grid
}

fn bench_add_legend(c: &mut Criterion, name: &str, placement: LegendPlacement) {
    c.bench_function(name, |b| {
        b.iter_batched(
            || build_grid(12),
            |mut grid| {
                grid.add_legend(black_box(LegendRequest::new().with_placement(placement)))
                    .expect("legend placement should succeed");
                grid
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_add_legend_right(c: &mut Criterion) {
    bench_add_legend(c, "add_legend_right_12_levels", LegendPlacement::Right);
}

fn bench_add_legend_top(c: &mut Criterion) {
    bench_add_legend(c, "add_legend_top_12_levels", LegendPlacement::Top);
}

fn bench_layout_legend_64(c: &mut Criterion) {
    let entries: Vec<LegendEntry> = (0..64)
        .map(|index| {
            LegendEntry::new(
                format!("series {index}"),
                LegendHandle::marker(Color::rgb(0.2, 0.4, 0.6), 6.0),
            )
        })
        .collect();

    c.bench_function("layout_legend_64_entries_4_cols", |b| {
        b.iter(|| {
            let _ = layout_legend(
                black_box(&entries),
                black_box(4),
                black_box(15.0),
                black_box(Some(("series", 14.0))),
            );
        })
    });
}

criterion_group!(
    benches,
    bench_add_legend_right,
    bench_add_legend_top,
    bench_layout_legend_64
);
criterion_main!(benches);
