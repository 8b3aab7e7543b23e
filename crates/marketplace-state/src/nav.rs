use serde::{Deserialize, Serialize};

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Marketplace,
    VisualizerPlugins,
    MyPlugins,
    DeveloperCenter,
    Account,
}

impl Page {
    /// Menu order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Marketplace,
        Page::VisualizerPlugins,
        Page::MyPlugins,
        Page::DeveloperCenter,
        Page::Account,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Marketplace => "marketplace",
            Page::VisualizerPlugins => "visualizer-plugins",
            Page::MyPlugins => "my-plugins",
            Page::DeveloperCenter => "developer-center",
            Page::Account => "account",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Marketplace => "Plugin Marketplace",
            Page::VisualizerPlugins => "Visualizer Plugins",
            Page::MyPlugins => "My Plugins",
            Page::DeveloperCenter => "Developer Center",
            Page::Account => "Account",
        }
    }

    pub fn requires_auth(self) -> bool {
        matches!(self, Page::MyPlugins | Page::DeveloperCenter | Page::Account)
    }

    /// Unknown ids fall back to the home page.
    pub fn from_id(id: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|page| page.id() == id)
            .unwrap_or(Page::Home)
    }

    pub fn is_visible_to(self, session: &Session) -> bool {
        !self.requires_auth() || session.is_logged_in()
    }
}

pub fn visible_pages(session: &Session) -> Vec<Page> {
    Page::ALL
        .into_iter()
        .filter(|page| page.is_visible_to(session))
        .collect()
}
