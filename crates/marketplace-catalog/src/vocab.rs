use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::{Platform, PluginFunction};

/// Label of the wildcard entry at the head of each filter vocabulary.
pub const ALL_SENTINEL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVocabularyError {
    #[error("unknown platform: {0}")]
    Platform(String),
    #[error("unknown plugin function: {0}")]
    Function(String),
    #[error("unknown role: {0}")]
    Role(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Role {
    Anonymous,
    User,
    Developer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Anonymous, Role::User, Role::Developer];

    pub fn label(self) -> &'static str {
        match self {
            Role::Anonymous => "Anonymous",
            Role::User => "User",
            Role::Developer => "Developer",
        }
    }
}

/// Roles a logged-in session may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    #[default]
    User,
    Developer,
}

impl From<MemberRole> for Role {
    fn from(role: MemberRole) -> Self {
        match role {
            MemberRole::User => Role::User,
            MemberRole::Developer => Role::Developer,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PluginFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = ParseVocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "visualizer" => Ok(Platform::Visualizer),
            "cms" => Ok(Platform::Cms),
            "flow" => Ok(Platform::Flow),
            _ => Err(ParseVocabularyError::Platform(value.to_string())),
        }
    }
}

impl FromStr for PluginFunction {
    type Err = ParseVocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        PluginFunction::ALL
            .into_iter()
            .find(|function| function.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseVocabularyError::Function(value.to_string()))
    }
}

impl FromStr for Role {
    type Err = ParseVocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "anonymous" => Ok(Role::Anonymous),
            "user" => Ok(Role::User),
            "developer" | "dev" => Ok(Role::Developer),
            _ => Err(ParseVocabularyError::Role(value.to_string())),
        }
    }
}

/// A filter vocabulary entry: either the wildcard or one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterChoice<T> {
    All,
    Only(T),
}

impl<T> Default for FilterChoice<T> {
    fn default() -> Self {
        FilterChoice::All
    }
}

impl<T: PartialEq> FilterChoice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            FilterChoice::All => true,
            FilterChoice::Only(wanted) => wanted == value,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, FilterChoice::All)
    }
}

impl<T> From<T> for FilterChoice<T> {
    fn from(value: T) -> Self {
        FilterChoice::Only(value)
    }
}

impl<T: fmt::Display> fmt::Display for FilterChoice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterChoice::All => f.write_str(ALL_SENTINEL),
            FilterChoice::Only(value) => value.fmt(f),
        }
    }
}

impl<T> FromStr for FilterChoice<T>
where
    T: FromStr<Err = ParseVocabularyError>,
{
    type Err = ParseVocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case(ALL_SENTINEL) {
            Ok(FilterChoice::All)
        } else {
            value.parse().map(FilterChoice::Only)
        }
    }
}

/// The fixed vocabularies offered to selection widgets.
///
/// Every list starts with the wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabularies {
    pub platforms: Vec<FilterChoice<Platform>>,
    pub functions: Vec<FilterChoice<PluginFunction>>,
    pub roles: Vec<FilterChoice<Role>>,
}

impl Vocabularies {
    pub fn standard() -> Self {
        let platforms = std::iter::once(FilterChoice::All)
            .chain(Platform::ALL.into_iter().map(FilterChoice::Only))
            .collect();
        let functions = std::iter::once(FilterChoice::All)
            .chain(PluginFunction::ALL.into_iter().map(FilterChoice::Only))
            .collect();
        let roles = std::iter::once(FilterChoice::All)
            .chain(Role::ALL.into_iter().map(FilterChoice::Only))
            .collect();
        Self {
            platforms,
            functions,
            roles,
        }
    }

    pub fn platform_labels(&self) -> Vec<String> {
        self.platforms.iter().map(ToString::to_string).collect()
    }

    pub fn function_labels(&self) -> Vec<String> {
        self.functions.iter().map(ToString::to_string).collect()
    }

    pub fn role_labels(&self) -> Vec<String> {
        self.roles.iter().map(ToString::to_string).collect()
    }
}

impl Default for Vocabularies {
    fn default() -> Self {
        Self::standard()
    }
}
