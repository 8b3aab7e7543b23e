use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::Plugin;
use crate::stock::stock_plugins;
use crate::vocab::Vocabularies;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("plugin not found: {0}")]
    NotFound(String),
    #[error("duplicate plugin id in catalog: {0}")]
    DuplicateId(String),
    #[error("plugin {id} has rating {rating} outside 0.0-5.0")]
    InvalidRating { id: String, rating: f32 },
    #[error("failed to read plugin catalog: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse plugin catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonCatalogData {
    plugins: Vec<Plugin>,
}

static STOCK_CATALOG: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(Catalog::indexed(stock_plugins())));

/// Immutable, ordered plugin catalog with an id index.
#[derive(Debug, Clone)]
pub struct Catalog {
    plugins: Vec<Plugin>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Shared handle to the built-in demo catalog.
    pub fn stock() -> Arc<Catalog> {
        Arc::clone(&STOCK_CATALOG)
    }

    pub fn from_plugins(plugins: Vec<Plugin>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(plugins.len());
        for (position, plugin) in plugins.iter().enumerate() {
            if !(0.0..=5.0).contains(&plugin.rating) {
                return Err(CatalogError::InvalidRating {
                    id: plugin.id.clone(),
                    rating: plugin.rating,
                });
            }
            if index.insert(plugin.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(plugin.id.clone()));
            }
        }
        Ok(Self { plugins, index })
    }

    /// Loads a `{"plugins": [...]}` document.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let data: JsonCatalogData = serde_json::from_str(&raw)?;
        let catalog = Self::from_plugins(data.plugins).map_err(|err| {
            log::warn!("rejecting plugin catalog {}: {}", path.display(), err);
            err
        })?;
        log::debug!(
            "loaded {} plugins from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn indexed(plugins: Vec<Plugin>) -> Self {
        let index = plugins
            .iter()
            .enumerate()
            .map(|(position, plugin)| (plugin.id.clone(), position))
            .collect();
        Self { plugins, index }
    }

    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Plugin> {
        self.index.get(id).map(|position| &self.plugins[*position])
    }

    pub fn get(&self, id: &str) -> Result<&Plugin, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn vocabularies(&self) -> Vocabularies {
        Vocabularies::standard()
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = JsonCatalogData {
            plugins: self.plugins.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }
}
