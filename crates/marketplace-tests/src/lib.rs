//! Shared fixtures for the cross-crate marketplace tests.

use std::sync::Arc;

use chrono::NaiveDate;
use marketplace_catalog::{Catalog, CatalogError, Platform, Plugin, PluginFunction};
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honouring `RUST_LOG`; later calls are no-ops.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

pub fn plugin(id: &str, name: &str, platform: Platform, function: PluginFunction) -> Plugin {
    Plugin {
        id: id.into(),
        name: name.into(),
        author: "Fixture Labs".into(),
        description: format!("{name} fixture"),
        platform,
        function,
        version: "1.0.0".into(),
        rating: 4.0,
        downloads: 100,
        size: "1.0 MB".into(),
        last_updated: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        featured: false,
        installed: false,
        plugin_type: None,
        plugin_types: Vec::new(),
    }
}

/// Small catalog with plugin `P1` (Visualizer, not seeded) and a seeded `P4`.
pub fn fixture_catalog() -> Result<Arc<Catalog>, CatalogError> {
    let mut seeded = plugin("P4", "Seeded Basemap", Platform::Visualizer, PluginFunction::DataVisualization);
    seeded.installed = true;
    let mut viewer = plugin("P2", "Record Viewer", Platform::Cms, PluginFunction::UiEnhancements);
    viewer.author = "Acme".into();
    let mut by_author = plugin("P3", "Field Mapper", Platform::Cms, PluginFunction::DataManagement);
    by_author.author = "ViewerWorks".into();
    let catalog = Catalog::from_plugins(vec![
        plugin("P1", "Terrain Shader", Platform::Visualizer, PluginFunction::DataVisualization),
        viewer,
        by_author,
        seeded,
        plugin("P5", "Pipeline Viewer", Platform::Flow, PluginFunction::Integration),
    ])?;
    Ok(Arc::new(catalog))
}
