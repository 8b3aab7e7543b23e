use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
pub enum Platform {
    Visualizer,
    #[serde(rename = "CMS", alias = "Cms")]
    Cms,
    Flow,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Visualizer, Platform::Cms, Platform::Flow];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Visualizer => "Visualizer",
            Platform::Cms => "CMS",
            Platform::Flow => "Flow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
pub enum PluginFunction {
    Geoprocessing,
    #[serde(rename = "Data Visualization")]
    DataVisualization,
    #[serde(rename = "UI Enhancements")]
    UiEnhancements,
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "Data Management")]
    DataManagement,
    Integration,
    Analytics,
    Export,
}

impl PluginFunction {
    pub const ALL: [PluginFunction; 8] = [
        PluginFunction::Geoprocessing,
        PluginFunction::DataVisualization,
        PluginFunction::UiEnhancements,
        PluginFunction::Ai,
        PluginFunction::DataManagement,
        PluginFunction::Integration,
        PluginFunction::Analytics,
        PluginFunction::Export,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PluginFunction::Geoprocessing => "Geoprocessing",
            PluginFunction::DataVisualization => "Data Visualization",
            PluginFunction::UiEnhancements => "UI Enhancements",
            PluginFunction::Ai => "AI",
            PluginFunction::DataManagement => "Data Management",
            PluginFunction::Integration => "Integration",
            PluginFunction::Analytics => "Analytics",
            PluginFunction::Export => "Export",
        }
    }
}

/// Sub-classification of Visualizer extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum PluginType {
    #[serde(alias = "widget", alias = "WIDGET")]
    Widget,
    #[serde(alias = "storyblock", alias = "STORYBLOCK")]
    StoryBlock,
    #[serde(alias = "infoboxblock", alias = "INFOBOXBLOCK")]
    InfoboxBlock,
}

impl PluginType {
    pub fn label(self) -> &'static str {
        match self {
            PluginType::Widget => "Widget",
            PluginType::StoryBlock => "Storyblock",
            PluginType::InfoboxBlock => "Infoboxblock",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    pub id: String,
    pub name: String,
    pub author: String,
    pub description: String,
    pub platform: Platform,
    pub function: PluginFunction,
    pub version: String,
    pub rating: f32,
    pub downloads: u64,
    pub size: String,
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub featured: bool,
    /// Seed flag: the plugin ships pre-installed in the demo, independent of
    /// anything the current session does.
    #[serde(default)]
    pub installed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_type: Option<PluginType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugin_types: Vec<PluginType>,
}

impl Plugin {
    /// Every sub-classification tag, the single `plugin_type` first.
    pub fn tags(&self) -> Vec<PluginType> {
        let mut tags: Vec<PluginType> = self.plugin_type.into_iter().collect();
        for tag in &self.plugin_types {
            if !tags.contains(tag) {
                tags.push(*tag);
            }
        }
        tags
    }

    pub fn update_status(&self, today: NaiveDate) -> UpdateStatus {
        let days = (today - self.last_updated).num_days().max(0);
        if days < 7 {
            UpdateStatus::UpToDate
        } else if days < 14 {
            UpdateStatus::MinorUpdate
        } else {
            UpdateStatus::MajorUpdate
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateStatus {
    UpToDate,
    MinorUpdate,
    MajorUpdate,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Plugin {
        Plugin {
            id: "p1".into(),
            name: "Terrain Viewer".into(),
            author: "Eukarya".into(),
            description: "Shaded relief".into(),
            platform: Platform::Visualizer,
            function: PluginFunction::DataVisualization,
            version: "1.0.0".into(),
            rating: 4.5,
            downloads: 10,
            size: "1.0 MB".into(),
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            featured: false,
            installed: false,
            plugin_type: Some(PluginType::Widget),
            plugin_types: vec![PluginType::Widget, PluginType::StoryBlock],
        }
    }

    #[test]
    fn deserialise_camel_case_record() {
        let json = r#"{
            "id": "cms-1",
            "name": "Schema Builder",
            "author": "Acme",
            "description": "Visual schema editor",
            "platform": "CMS",
            "function": "UI Enhancements",
            "version": "2.1.0",
            "rating": 4.2,
            "downloads": 1200,
            "size": "3.1 MB",
            "lastUpdated": "2024-01-15",
            "pluginType": "widget"
        }"#;
        let plugin: Plugin = serde_json::from_str(json).unwrap();
        assert_eq!(plugin.platform, Platform::Cms);
        assert_eq!(plugin.function, PluginFunction::UiEnhancements);
        assert_eq!(plugin.plugin_type, Some(PluginType::Widget));
        assert!(!plugin.installed);
        assert!(!plugin.featured);
        assert!(plugin.plugin_types.is_empty());
    }

    #[test]
    fn tags_deduplicate_single_and_list() {
        assert_eq!(
            sample().tags(),
            vec![PluginType::Widget, PluginType::StoryBlock]
        );
    }

    #[test]
    fn update_status_buckets_by_age() {
        let plugin = sample();
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        assert_eq!(plugin.update_status(day(9)), UpdateStatus::UpToDate);
        assert_eq!(plugin.update_status(day(16)), UpdateStatus::UpToDate);
        assert_eq!(plugin.update_status(day(17)), UpdateStatus::MinorUpdate);
        assert_eq!(plugin.update_status(day(24)), UpdateStatus::MajorUpdate);
    }
}
