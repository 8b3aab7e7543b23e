use chrono::NaiveDate;

use crate::{Platform, Plugin, PluginFunction, PluginType};

struct StockPlugin {
    id: &'static str,
    name: &'static str,
    author: &'static str,
    description: &'static str,
    platform: Platform,
    function: PluginFunction,
    version: &'static str,
    rating: f32,
    downloads: u64,
    size: &'static str,
    last_updated: (i32, u32, u32),
    featured: bool,
    installed: bool,
    plugin_types: &'static [PluginType],
}

const STOCK_PLUGINS: &[StockPlugin] = &[
    StockPlugin {
        id: "terrain-explorer",
        name: "3D Terrain Explorer",
        author: "Eukarya Labs",
        description: "Render high resolution elevation models with shaded relief and contour overlays",
        platform: Platform::Visualizer,
        function: PluginFunction::DataVisualization,
        version: "2.4.1",
        rating: 4.8,
        downloads: 15420,
        size: "4.2 MB",
        last_updated: (2024, 1, 15),
        featured: true,
        installed: true,
        plugin_types: &[PluginType::Widget],
    },
    StockPlugin {
        id: "buffer-analysis",
        name: "Buffer Analysis Toolkit",
        author: "GeoTools Inc.",
        description: "Create distance buffers and proximity zones around points, lines and polygons",
        platform: Platform::Visualizer,
        function: PluginFunction::Geoprocessing,
        version: "1.8.0",
        rating: 4.5,
        downloads: 8930,
        size: "1.8 MB",
        last_updated: (2024, 1, 10),
        featured: true,
        installed: false,
        plugin_types: &[PluginType::Widget, PluginType::InfoboxBlock],
    },
    StockPlugin {
        id: "story-timeline",
        name: "Story Timeline",
        author: "Narrative Maps",
        description: "Build scroll driven map stories with chapters, camera flights and captions",
        platform: Platform::Visualizer,
        function: PluginFunction::UiEnhancements,
        version: "3.0.2",
        rating: 4.6,
        downloads: 12050,
        size: "2.6 MB",
        last_updated: (2024, 1, 18),
        featured: true,
        installed: false,
        plugin_types: &[PluginType::StoryBlock],
    },
    StockPlugin {
        id: "heatmap-layer",
        name: "Heatmap Layer",
        author: "Eukarya Labs",
        description: "Density heatmaps for large point datasets with adjustable radius and gradient",
        platform: Platform::Visualizer,
        function: PluginFunction::DataVisualization,
        version: "1.3.4",
        rating: 4.4,
        downloads: 7610,
        size: "1.1 MB",
        last_updated: (2023, 12, 28),
        featured: false,
        installed: false,
        plugin_types: &[PluginType::Widget],
    },
    StockPlugin {
        id: "attribute-inspector",
        name: "Attribute Inspector",
        author: "Spatial Insights",
        description: "Infobox block that lists feature attributes with search and copy to clipboard",
        platform: Platform::Visualizer,
        function: PluginFunction::UiEnhancements,
        version: "1.0.6",
        rating: 4.1,
        downloads: 3320,
        size: "640 KB",
        last_updated: (2024, 1, 5),
        featured: false,
        installed: false,
        plugin_types: &[PluginType::InfoboxBlock],
    },
    StockPlugin {
        id: "land-cover-classifier",
        name: "Land Cover Classifier",
        author: "DeepTerra AI",
        description: "Classify satellite imagery into land cover classes with a pretrained model",
        platform: Platform::Visualizer,
        function: PluginFunction::Ai,
        version: "0.9.3",
        rating: 4.0,
        downloads: 2140,
        size: "18.5 MB",
        last_updated: (2024, 1, 12),
        featured: false,
        installed: false,
        plugin_types: &[PluginType::Widget],
    },
    StockPlugin {
        id: "measure-tools",
        name: "Measure Tools",
        author: "GeoTools Inc.",
        description: "Measure distances, areas and heights directly on the globe",
        platform: Platform::Visualizer,
        function: PluginFunction::Geoprocessing,
        version: "2.1.0",
        rating: 4.7,
        downloads: 19880,
        size: "950 KB",
        last_updated: (2024, 1, 2),
        featured: false,
        installed: true,
        plugin_types: &[PluginType::Widget],
    },
    StockPlugin {
        id: "screenshot-export",
        name: "Scene Snapshot",
        author: "Pixel Cartography",
        description: "Export the current scene as a high resolution PNG or PDF map sheet",
        platform: Platform::Visualizer,
        function: PluginFunction::Export,
        version: "1.2.2",
        rating: 3.9,
        downloads: 4410,
        size: "1.4 MB",
        last_updated: (2023, 11, 30),
        featured: false,
        installed: false,
        plugin_types: &[PluginType::Widget],
    },
    StockPlugin {
        id: "cms-schema-designer",
        name: "Schema Designer",
        author: "Content Forge",
        description: "Drag and drop editor for CMS models, fields and validation rules",
        platform: Platform::Cms,
        function: PluginFunction::DataManagement,
        version: "2.0.0",
        rating: 4.6,
        downloads: 6720,
        size: "2.9 MB",
        last_updated: (2024, 1, 16),
        featured: true,
        installed: false,
        plugin_types: &[],
    },
    StockPlugin {
        id: "cms-geojson-viewer",
        name: "GeoJSON Viewer",
        author: "Content Forge",
        description: "Preview GeoJSON assets on an embedded map before publishing",
        platform: Platform::Cms,
        function: PluginFunction::DataVisualization,
        version: "1.5.1",
        rating: 4.3,
        downloads: 5230,
        size: "1.7 MB",
        last_updated: (2024, 1, 8),
        featured: false,
        installed: false,
        plugin_types: &[],
    },
    StockPlugin {
        id: "cms-csv-importer",
        name: "Bulk CSV Importer",
        author: "DataBridge",
        description: "Import thousands of items from CSV with column mapping and dry runs",
        platform: Platform::Cms,
        function: PluginFunction::DataManagement,
        version: "3.2.0",
        rating: 4.2,
        downloads: 9140,
        size: "2.2 MB",
        last_updated: (2024, 1, 11),
        featured: false,
        installed: true,
        plugin_types: &[],
    },
    StockPlugin {
        id: "cms-asset-previewer",
        name: "Asset Previewer",
        author: "Media Viewer Co.",
        description: "Inline previews for imagery, 3D tiles and point cloud assets",
        platform: Platform::Cms,
        function: PluginFunction::UiEnhancements,
        version: "1.1.0",
        rating: 4.0,
        downloads: 2980,
        size: "3.4 MB",
        last_updated: (2023, 12, 20),
        featured: false,
        installed: false,
        plugin_types: &[],
    },
    StockPlugin {
        id: "cms-auto-tagger",
        name: "Auto Tagger",
        author: "DeepTerra AI",
        description: "Suggest tags and categories for new content using language models",
        platform: Platform::Cms,
        function: PluginFunction::Ai,
        version: "0.7.2",
        rating: 3.8,
        downloads: 1730,
        size: "6.8 MB",
        last_updated: (2024, 1, 17),
        featured: false,
        installed: false,
        plugin_types: &[],
    },
    StockPlugin {
        id: "cms-webhook-bridge",
        name: "Webhook Bridge",
        author: "DataBridge",
        description: "Forward publish events to external services with retries and signing",
        platform: Platform::Cms,
        function: PluginFunction::Integration,
        version: "2.3.5",
        rating: 4.4,
        downloads: 4870,
        size: "780 KB",
        last_updated: (2024, 1, 3),
        featured: false,
        installed: false,
        plugin_types: &[],
    },
    StockPlugin {
        id: "cms-usage-dashboard",
        name: "Usage Dashboard",
        author: "Spatial Insights",
        description: "Charts of content growth, editor activity and API traffic",
        platform: Platform::Cms,
        function: PluginFunction::Analytics,
        version: "1.4.0",
        rating: 4.1,
        downloads: 3650,
        size: "2.0 MB",
        last_updated: (2023, 12, 15),
        featured: false,
        installed: false,
        plugin_types: &[],
    },
    StockPlugin {
        id: "flow-reprojector",
        name: "Reprojector",
        author: "GeoTools Inc.",
        description: "Transform datasets between coordinate reference systems in a workflow step",
        platform: Platform::Flow,
        function: PluginFunction::Geoprocessing,
        version: "2.2.0",
        rating: 4.7,
        downloads: 11230,
        size: "5.1 MB",
        last_updated: (2024, 1, 14),
        featured: true,
        installed: false,
        plugin_types: &[],
    },
    StockPlugin {
        id: "flow-citygml-converter",
        name: "CityGML Converter",
        author: "Urban Twin",
        description: "Convert CityGML building models into 3D Tiles for streaming",
        platform: Platform::Flow,
        function: PluginFunction::Export,
        version: "1.6.3",
        rating: 4.5,
        downloads: 6890,
        size: "9.7 MB",
        last_updated: (2024, 1, 9),
        featured: false,
        installed: false,
        plugin_types: &[],
    },
    StockPlugin {
        id: "flow-feature-joiner",
        name: "Feature Joiner",
        author: "DataBridge",
        description: "Join attributes from tabular sources onto spatial features by key",
        platform: Platform::Flow,
        function: PluginFunction::DataManagement,
        version: "1.0.4",
        rating: 4.0,
        downloads: 2510,
        size: "1.2 MB",
        last_updated: (2023, 12, 22),
        featured: false,
        installed: false,
        plugin_types: &[],
    },
    StockPlugin {
        id: "flow-object-detector",
        name: "Object Detector",
        author: "DeepTerra AI",
        description: "Detect buildings and vehicles in aerial imagery as a workflow action",
        platform: Platform::Flow,
        function: PluginFunction::Ai,
        version: "0.5.0",
        rating: 3.7,
        downloads: 1190,
        size: "24.3 MB",
        last_updated: (2024, 1, 19),
        featured: false,
        installed: false,
        plugin_types: &[],
    },
    StockPlugin {
        id: "flow-quality-report",
        name: "Quality Report",
        author: "Spatial Insights",
        description: "Validate geometry and attribute completeness and emit a summary report",
        platform: Platform::Flow,
        function: PluginFunction::Analytics,
        version: "1.3.1",
        rating: 4.2,
        downloads: 3080,
        size: "1.5 MB",
        last_updated: (2024, 1, 6),
        featured: false,
        installed: false,
        plugin_types: &[],
    },
    StockPlugin {
        id: "flow-s3-connector",
        name: "Cloud Storage Connector",
        author: "Urban Twin",
        description: "Read and write workflow artifacts from S3 compatible object storage",
        platform: Platform::Flow,
        function: PluginFunction::Integration,
        version: "2.0.1",
        rating: 4.3,
        downloads: 5460,
        size: "2.7 MB",
        last_updated: (2023, 12, 30),
        featured: false,
        installed: false,
        plugin_types: &[],
    },
];

/// The built-in demo catalog, in display order.
pub fn stock_plugins() -> Vec<Plugin> {
    STOCK_PLUGINS
        .iter()
        .map(|plugin| {
            let (year, month, day) = plugin.last_updated;
            Plugin {
                id: plugin.id.into(),
                name: plugin.name.into(),
                author: plugin.author.into(),
                description: plugin.description.into(),
                platform: plugin.platform,
                function: plugin.function,
                version: plugin.version.into(),
                rating: plugin.rating,
                downloads: plugin.downloads,
                size: plugin.size.into(),
                last_updated: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
                featured: plugin.featured,
                installed: plugin.installed,
                plugin_type: plugin.plugin_types.first().copied(),
                plugin_types: plugin.plugin_types.to_vec(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn stock_ids_are_unique_and_dates_valid() {
        let plugins = stock_plugins();
        let ids: HashSet<_> = plugins.iter().map(|plugin| plugin.id.as_str()).collect();
        assert_eq!(ids.len(), plugins.len());
        for (plugin, raw) in plugins.iter().zip(STOCK_PLUGINS) {
            let (year, month, day) = raw.last_updated;
            assert_eq!(
                Some(plugin.last_updated),
                NaiveDate::from_ymd_opt(year, month, day),
                "{}",
                plugin.id
            );
        }
    }

    #[test]
    fn stock_covers_every_platform() {
        let plugins = stock_plugins();
        for platform in Platform::ALL {
            assert!(plugins.iter().any(|plugin| plugin.platform == platform));
        }
        assert!(plugins.iter().any(|plugin| plugin.installed));
        assert!(plugins.iter().filter(|plugin| plugin.featured).count() >= 3);
    }
}
