use marketplace_catalog::{FilterChoice, Platform, Plugin, PluginFunction};

use crate::criteria::{FilterCriteria, PlatformScope};

/// Plugins matching `criteria`, in catalog order.
pub fn filter_plugins<'a>(plugins: &'a [Plugin], criteria: &FilterCriteria) -> Vec<&'a Plugin> {
    let matcher = criteria.matcher();
    plugins.iter().filter(|plugin| matcher.matches(plugin)).collect()
}

/// Positions of matching plugins; the cache stores these.
pub fn filter_positions(plugins: &[Plugin], criteria: &FilterCriteria) -> Vec<usize> {
    let matcher = criteria.matcher();
    plugins
        .iter()
        .enumerate()
        .filter(|(_, plugin)| matcher.matches(plugin))
        .map(|(position, _)| position)
        .collect()
}

pub fn filter<'a>(
    plugins: &'a [Plugin],
    platform: FilterChoice<Platform>,
    function: FilterChoice<PluginFunction>,
    search: &str,
) -> Vec<&'a Plugin> {
    filter_plugins(plugins, &FilterCriteria::new(platform, function, search))
}

pub fn filter_scoped<'a>(plugins: &'a [Plugin], scope: &PlatformScope) -> Vec<&'a Plugin> {
    let matcher = scope.matcher();
    plugins.iter().filter(|plugin| matcher.matches(plugin)).collect()
}
