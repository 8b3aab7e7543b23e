use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::entry::{Platform, Plugin};
use crate::store_json::Catalog;

/// Homepage summary figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total_plugins: usize,
    pub total_downloads: u64,
    pub developers: usize,
    pub average_rating: f32,
    pub per_platform: BTreeMap<Platform, usize>,
}

impl Catalog {
    pub fn stats(&self) -> CatalogStats {
        let plugins = self.plugins();
        let developers = plugins
            .iter()
            .map(|plugin| plugin.author.as_str())
            .collect::<HashSet<_>>()
            .len();
        let average_rating = if plugins.is_empty() {
            0.0
        } else {
            plugins.iter().map(|plugin| plugin.rating).sum::<f32>() / plugins.len() as f32
        };
        let mut per_platform: BTreeMap<Platform, usize> =
            Platform::ALL.into_iter().map(|platform| (platform, 0)).collect();
        for plugin in plugins {
            *per_platform.entry(plugin.platform).or_default() += 1;
        }
        CatalogStats {
            total_plugins: plugins.len(),
            total_downloads: plugins.iter().map(|plugin| plugin.downloads).sum(),
            developers,
            average_rating,
            per_platform,
        }
    }

    pub fn featured(&self, limit: usize) -> Vec<&Plugin> {
        self.plugins()
            .iter()
            .filter(|plugin| plugin.featured)
            .take(limit)
            .collect()
    }

    pub fn count_for(&self, platform: Platform) -> usize {
        self.plugins()
            .iter()
            .filter(|plugin| plugin.platform == platform)
            .count()
    }
}
