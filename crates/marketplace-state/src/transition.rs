use serde::Serialize;

/// Outcome of a state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Transition {
    Applied,
    Ignored(IgnoredReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IgnoredReason {
    LoggedOut,
    EmptyUsername,
    AlreadyInstalled,
    NotInstalled,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        matches!(self, Transition::Applied)
    }

    pub fn ignored_reason(self) -> Option<IgnoredReason> {
        match self {
            Transition::Applied => None,
            Transition::Ignored(reason) => Some(reason),
        }
    }
}
