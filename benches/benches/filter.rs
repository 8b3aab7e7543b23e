use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use marketplace_catalog::{stock_plugins, Catalog, FilterChoice, Platform, PluginFunction};
use marketplace_filter::{filter_plugins, FilterCache, FilterCriteria};

fn scaled_catalog(copies: usize) -> Arc<Catalog> {
    let plugins = (0..copies)
        .flat_map(|copy| {
            stock_plugins().into_iter().map(move |mut plugin| {
                plugin.id = format!("{}-{copy}", plugin.id);
                plugin
            })
        })
        .collect();
    Arc::new(Catalog::from_plugins(plugins).expect("unique ids"))
}

fn filter_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    group.measurement_time(Duration::from_secs(5));

    let stock = Catalog::stock();
    let scaled = scaled_catalog(500);
    let criteria = FilterCriteria::new(
        FilterChoice::Only(Platform::Cms),
        FilterChoice::All,
        "viewer",
    );
    let search_only = FilterCriteria::default().with_search("Data");
    let narrow = FilterCriteria::default()
        .with_platform(Platform::Visualizer)
        .with_function(PluginFunction::Geoprocessing);

    group.bench_function("stock_cms_viewer", |b| {
        b.iter(|| filter_plugins(black_box(stock.plugins()), black_box(&criteria)).len());
    });
    group.bench_function("scaled_search_only", |b| {
        b.iter(|| filter_plugins(black_box(scaled.plugins()), black_box(&search_only)).len());
    });
    group.bench_function("scaled_narrow", |b| {
        b.iter(|| filter_plugins(black_box(scaled.plugins()), black_box(&narrow)).len());
    });
    group.bench_function("scaled_cached", |b| {
        let mut cache = FilterCache::new(Arc::clone(&scaled));
        b.iter(|| cache.positions(black_box(&search_only)).len());
    });

    group.finish();
}

criterion_group!(benches, filter_catalog);
criterion_main!(benches);
