use marketplace_catalog::{MemberRole, Role};
use serde::Serialize;

use crate::transition::{IgnoredReason, Transition};

/// Mock login state. The role is `Anonymous` exactly when logged out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    logged_in: bool,
    role: Role,
    username: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            logged_in: false,
            role: Role::Anonymous,
            username: None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn member_role(&self) -> Option<MemberRole> {
        match self.role {
            Role::Anonymous => None,
            Role::User => Some(MemberRole::User),
            Role::Developer => Some(MemberRole::Developer),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_developer(&self) -> bool {
        self.role == Role::Developer
    }

    /// Accepts any non-empty username as given; a second login replaces the first.
    pub fn login(&mut self, username: &str, role: Option<MemberRole>) -> Transition {
        if username.is_empty() {
            return Transition::Ignored(IgnoredReason::EmptyUsername);
        }
        *self = Self {
            logged_in: true,
            role: role.unwrap_or_default().into(),
            username: Some(username.to_string()),
        };
        Transition::Applied
    }

    pub fn logout(&mut self) -> Transition {
        *self = Self::anonymous();
        Transition::Applied
    }

    pub fn switch_role(&mut self, role: MemberRole) -> Transition {
        if !self.logged_in {
            return Transition::Ignored(IgnoredReason::LoggedOut);
        }
        self.role = role.into();
        Transition::Applied
    }
}
