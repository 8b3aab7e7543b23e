use std::sync::Arc;

use marketplace_catalog::CatalogError;
use parking_lot::Mutex;

use crate::commands::MarketplaceCmd;
use crate::state::MarketplaceState;
use crate::transition::Transition;

/// Cloneable handle to one [`MarketplaceState`].
#[derive(Debug, Clone, Default)]
pub struct MarketplaceHandle {
    inner: Arc<Mutex<MarketplaceState>>,
}

impl MarketplaceHandle {
    pub fn new(state: MarketplaceState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&MarketplaceState) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut MarketplaceState) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn dispatch(&self, cmd: MarketplaceCmd) -> Result<Transition, CatalogError> {
        self.inner.lock().apply(cmd)
    }

    pub fn snapshot(&self) -> MarketplaceState {
        self.inner.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clones_share_state() {
        let handle = MarketplaceHandle::default();
        let other = handle.clone();
        handle
            .dispatch(MarketplaceCmd::Login {
                username: "alice".into(),
                role: None,
            })
            .unwrap();
        assert_eq!(
            other.dispatch(MarketplaceCmd::Install("heatmap-layer".into())).unwrap(),
            Transition::Applied
        );
        assert!(handle.read(|state| state.is_installed("heatmap-layer").unwrap()));
        let count = handle.update(|state| {
            state.uninstall("heatmap-layer");
            state.installations().len()
        });
        assert_eq!(count, 0);
        assert_eq!(other.snapshot().session().username(), Some("alice"));
    }
}
