use marketplace_catalog::{CatalogError, MemberRole};

use crate::state::MarketplaceState;
use crate::transition::Transition;

/// Mutations a view can dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarketplaceCmd {
    Login {
        username: String,
        role: Option<MemberRole>,
    },
    Logout,
    SwitchRole(MemberRole),
    Install(String),
    Uninstall(String),
}

impl MarketplaceState {
    pub fn apply(&mut self, cmd: MarketplaceCmd) -> Result<Transition, CatalogError> {
        match cmd {
            MarketplaceCmd::Login { username, role } => Ok(self.login(&username, role)),
            MarketplaceCmd::Logout => Ok(self.logout()),
            MarketplaceCmd::SwitchRole(role) => Ok(self.switch_role(role)),
            MarketplaceCmd::Install(id) => self.install(&id),
            MarketplaceCmd::Uninstall(id) => Ok(self.uninstall(&id)),
        }
    }
}
