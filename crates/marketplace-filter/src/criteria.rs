use marketplace_catalog::{FilterChoice, ParseVocabularyError, Platform, Plugin, PluginFunction};
use serde::{Deserialize, Serialize};

/// Lower-cased search text, matched as a substring of name, description or author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, plugin: &Plugin) -> bool {
        self.matches_fields([
            plugin.name.as_str(),
            plugin.description.as_str(),
            plugin.author.as_str(),
        ])
    }

    /// True when any field contains the needle, ignoring case.
    pub fn matches_fields<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// The three marketplace filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub platform: FilterChoice<Platform>,
    pub function: FilterChoice<PluginFunction>,
    pub search: String,
}

impl FilterCriteria {
    pub fn new(
        platform: FilterChoice<Platform>,
        function: FilterChoice<PluginFunction>,
        search: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            function,
            search: search.into(),
        }
    }

    /// Builds criteria from the labels a selection widget hands back.
    pub fn parse(platform: &str, function: &str, search: &str) -> Result<Self, ParseVocabularyError> {
        Ok(Self::new(platform.parse()?, function.parse()?, search))
    }

    pub fn with_platform(mut self, platform: impl Into<FilterChoice<Platform>>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_function(mut self, function: impl Into<FilterChoice<PluginFunction>>) -> Self {
        self.function = function.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn is_wildcard(&self) -> bool {
        self.platform.is_wildcard() && self.function.is_wildcard() && self.search.is_empty()
    }

    pub fn matches(&self, plugin: &Plugin) -> bool {
        self.matcher().matches(plugin)
    }

    pub(crate) fn matcher(&self) -> Matcher {
        Matcher {
            platform: self.platform,
            function: self.function,
            query: SearchQuery::new(&self.search),
        }
    }
}

/// Filter inputs for a view pinned to one platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformScope {
    pub platform: Platform,
    pub function: FilterChoice<PluginFunction>,
    pub search: String,
}

impl PlatformScope {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            function: FilterChoice::All,
            search: String::new(),
        }
    }

    pub fn with_function(mut self, function: impl Into<FilterChoice<PluginFunction>>) -> Self {
        self.function = function.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn matches(&self, plugin: &Plugin) -> bool {
        self.matcher().matches(plugin)
    }

    pub(crate) fn matcher(&self) -> Matcher {
        Matcher {
            platform: FilterChoice::Only(self.platform),
            function: self.function,
            query: SearchQuery::new(&self.search),
        }
    }
}

impl From<PlatformScope> for FilterCriteria {
    fn from(scope: PlatformScope) -> Self {
        FilterCriteria::new(FilterChoice::Only(scope.platform), scope.function, scope.search)
    }
}

pub(crate) struct Matcher {
    platform: FilterChoice<Platform>,
    function: FilterChoice<PluginFunction>,
    query: SearchQuery,
}

impl Matcher {
    pub(crate) fn matches(&self, plugin: &Plugin) -> bool {
        self.platform.admits(&plugin.platform)
            && self.function.admits(&plugin.function)
            && self.query.matches(plugin)
    }
}

#[cfg(test)]
mod tests {
    use marketplace_catalog::Catalog;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let catalog = Catalog::stock();
        let plugin = catalog.get("cms-geojson-viewer").unwrap();
        assert!(SearchQuery::new("GEOJSON").matches(plugin));
        assert!(SearchQuery::new("embedded map").matches(plugin));
        assert!(SearchQuery::new("content forge").matches(plugin));
        assert!(!SearchQuery::new("tiles").matches(plugin));
        assert!(SearchQuery::new("").matches(plugin));
    }

    #[test]
    fn search_over_arbitrary_fields() {
        let query = SearchQuery::new("DEV");
        assert!(query.matches_fields(["Test", "Development environment"]));
        assert!(!query.matches_fields(["Test02", "Main project workspace"]));
        assert!(SearchQuery::new("").matches_fields(std::iter::empty()));
    }

    #[test]
    fn parse_accepts_widget_labels() {
        let criteria = FilterCriteria::parse("CMS", "All", "viewer").unwrap();
        assert_eq!(criteria.platform, FilterChoice::Only(Platform::Cms));
        assert_eq!(criteria.function, FilterChoice::All);
        assert_eq!(criteria.search, "viewer");
        assert!(FilterCriteria::parse("Desktop", "All", "").is_err());
    }

    #[test]
    fn default_criteria_are_wildcard() {
        assert!(FilterCriteria::default().is_wildcard());
        assert!(!FilterCriteria::default().with_search("x").is_wildcard());
    }

    #[test]
    fn predicates_are_conjunctive() {
        let catalog = Catalog::stock();
        let plugin = catalog.get("flow-reprojector").unwrap();
        let criteria = FilterCriteria::default()
            .with_platform(Platform::Flow)
            .with_function(PluginFunction::Geoprocessing);
        assert!(criteria.matches(plugin));
        assert!(!criteria.clone().with_search("heatmap").matches(plugin));
        assert!(!criteria.with_platform(Platform::Cms).matches(plugin));
    }

    #[test]
    fn scope_pins_platform() {
        let catalog = Catalog::stock();
        let scope = PlatformScope::new(Platform::Visualizer);
        assert!(scope.matches(catalog.get("heatmap-layer").unwrap()));
        assert!(!scope.matches(catalog.get("flow-reprojector").unwrap()));
        let criteria: FilterCriteria = scope.with_search("heat").into();
        assert_eq!(criteria.platform, FilterChoice::Only(Platform::Visualizer));
        assert_eq!(criteria.search, "heat");
    }
}
