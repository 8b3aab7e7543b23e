use marketplace_catalog::CatalogError;
use marketplace_filter::SearchQuery;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transition::{IgnoredReason, Transition};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("project not found: {0}")]
    NotFound(String),
}

/// A Visualizer project a plugin can be installed into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
}

const SCENE_URL: &str = "https://visualizer.dev.reearth.io/scene/01jzq2av70sa60zm4ftcyahx9g/map";

/// Projects offered by the install picker.
pub fn sample_projects() -> Vec<Project> {
    [
        ("1", "Test02", "Main project workspace"),
        ("2", "Test", "Development environment"),
    ]
    .into_iter()
    .map(|(id, name, description)| Project {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        url: SCENE_URL.into(),
    })
    .collect()
}

/// Case-insensitive substring search over project name and description.
pub fn search_projects<'a>(projects: &'a [Project], term: &str) -> Vec<&'a Project> {
    let query = SearchQuery::new(term);
    projects
        .iter()
        .filter(|project| query.matches_fields([project.name.as_str(), project.description.as_str()]))
        .collect()
}

/// Result of installing a plugin into a chosen project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInstall {
    pub plugin_name: String,
    pub project: Project,
    pub transition: Transition,
}

impl ProjectInstall {
    /// Banner text, or `None` when the install was refused for a logged-out session.
    pub fn notification(&self) -> Option<String> {
        if self.transition.ignored_reason() == Some(IgnoredReason::LoggedOut) {
            return None;
        }
        Some(format!(
            "{} has been installed to project '{}'.",
            self.plugin_name, self.project.name
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
        projects.iter().map(|project| project.name.as_str()).collect()
    }

    #[test]
    fn search_matches_name_or_description() {
        let projects = sample_projects();
        assert_eq!(names(&search_projects(&projects, "")), vec!["Test02", "Test"]);
        assert_eq!(names(&search_projects(&projects, "test0")), vec!["Test02"]);
        assert_eq!(names(&search_projects(&projects, "DEVELOPMENT")), vec!["Test"]);
        assert_eq!(names(&search_projects(&projects, "workspace")), vec!["Test02"]);
        assert!(search_projects(&projects, "staging").is_empty());
    }

    #[test]
    fn notification_names_the_project() {
        let project = sample_projects().remove(0);
        let install = ProjectInstall {
            plugin_name: "Measure Tools".into(),
            project,
            transition: Transition::Applied,
        };
        assert_eq!(
            install.notification().as_deref(),
            Some("Measure Tools has been installed to project 'Test02'.")
        );

        let refused = ProjectInstall {
            transition: Transition::Ignored(IgnoredReason::LoggedOut),
            ..install
        };
        assert_eq!(refused.notification(), None);
    }
}
