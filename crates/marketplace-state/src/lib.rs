//! Session, installation and developer state for the Re:Earth Marketplace.
//!
//! [`MarketplaceState`] is owned by the composition root and handed to views
//! by reference; [`MarketplaceHandle`] wraps it for callers that need a
//! cloneable handle.

mod commands;
mod config;
mod handle;
mod install;
mod likes;
mod nav;
mod project;
mod session;
mod state;
mod submission;
mod transition;

pub use commands::*;
pub use config::*;
pub use handle::*;
pub use install::*;
pub use likes::*;
pub use nav::*;
pub use project::*;
pub use session::*;
pub use state::*;
pub use submission::*;
pub use transition::*;
