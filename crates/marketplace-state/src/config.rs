use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use marketplace_catalog::{Catalog, CatalogError, MemberRole};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "ReEarthMarketplace";
const CONFIG_FILE: &str = "marketplace.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config directory unavailable")]
    NoConfigDir,
    #[error("failed to access marketplace config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse marketplace config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to load plugin catalog: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    /// JSON catalog replacing the built-in one.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
    #[serde(default = "default_quick_login_username")]
    pub quick_login_username: String,
    #[serde(default)]
    pub default_role: MemberRole,
}

fn default_featured_limit() -> usize {
    3
}

fn default_quick_login_username() -> String {
    "demo-user".to_string()
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            featured_limit: default_featured_limit(),
            quick_login_username: default_quick_login_username(),
            default_role: MemberRole::default(),
        }
    }
}

pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join(APP_DIR_NAME))
}

impl MarketplaceConfig {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join(CONFIG_FILE))
    }

    /// Loads from the user config directory, falling back to defaults when
    /// no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::default_path()?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no marketplace config, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn catalog(&self) -> Result<Arc<Catalog>, ConfigError> {
        match &self.catalog_path {
            Some(path) => Ok(Arc::new(Catalog::open(path)?)),
            None => Ok(Catalog::stock()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = MarketplaceConfig::load_from(dir.path().join("marketplace.json")).unwrap();
        assert_eq!(config, MarketplaceConfig::default());
        assert_eq!(config.featured_limit, 3);
        assert_eq!(config.quick_login_username, "demo-user");
        assert_eq!(config.default_role, MemberRole::User);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("marketplace.json");
        fs::write(&path, r#"{ "featured_limit": 5, "default_role": "developer" }"#).unwrap();
        let config = MarketplaceConfig::load_from(&path).unwrap();
        assert_eq!(config.featured_limit, 5);
        assert_eq!(config.default_role, MemberRole::Developer);
        assert_eq!(config.quick_login_username, "demo-user");
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("marketplace.json");
        fs::write(&path, "featured_limit = 5").unwrap();
        assert!(matches!(
            MarketplaceConfig::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/marketplace.json");
        let config = MarketplaceConfig {
            quick_login_username: "alice".into(),
            ..MarketplaceConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(MarketplaceConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn catalog_path_overrides_stock() {
        let dir = tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        fs::write(&catalog_path, r#"{ "plugins": [] }"#).unwrap();
        let config = MarketplaceConfig {
            catalog_path: Some(catalog_path),
            ..MarketplaceConfig::default()
        };
        assert!(config.catalog().unwrap().is_empty());
        assert!(!MarketplaceConfig::default().catalog().unwrap().is_empty());

        let broken = MarketplaceConfig {
            catalog_path: Some(dir.path().join("absent.json")),
            ..MarketplaceConfig::default()
        };
        assert!(matches!(broken.catalog(), Err(ConfigError::Catalog(_))));
    }
}
