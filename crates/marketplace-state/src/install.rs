use std::collections::BTreeSet;

use marketplace_catalog::Plugin;
use serde::Serialize;

use crate::session::Session;
use crate::transition::{IgnoredReason, Transition};

/// Plugin ids installed during this session. Seed flags on catalog records
/// are never copied in here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallationSet {
    ids: BTreeSet<String>,
}

impl InstallationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only a logged-in session may install.
    pub fn install(&mut self, session: &Session, id: &str) -> Transition {
        if !session.is_logged_in() {
            return Transition::Ignored(IgnoredReason::LoggedOut);
        }
        if self.ids.insert(id.to_string()) {
            Transition::Applied
        } else {
            Transition::Ignored(IgnoredReason::AlreadyInstalled)
        }
    }

    /// Removal is not login gated.
    pub fn uninstall(&mut self, id: &str) -> Transition {
        if self.ids.remove(id) {
            Transition::Applied
        } else {
            Transition::Ignored(IgnoredReason::NotInstalled)
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Seed flag OR explicit install.
pub fn effectively_installed(plugin: &Plugin, installs: &InstallationSet) -> bool {
    plugin.installed || installs.contains(&plugin.id)
}

/// What a plugin card or detail page should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstallAffordance {
    Installed,
    Install,
    LoginRequired,
}

impl InstallAffordance {
    pub fn resolve(plugin: &Plugin, installs: &InstallationSet, session: &Session) -> Self {
        if effectively_installed(plugin, installs) {
            InstallAffordance::Installed
        } else if session.is_logged_in() {
            InstallAffordance::Install
        } else {
            InstallAffordance::LoginRequired
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InstallAffordance::Installed => "Installed",
            InstallAffordance::Install => "Install",
            InstallAffordance::LoginRequired => "Login to Install",
        }
    }
}
