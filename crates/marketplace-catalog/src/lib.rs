//! Read-only plugin catalog for the Re:Earth Marketplace.

mod entry;
mod stats;
mod stock;
mod store_json;
mod vocab;

pub use entry::*;
pub use stats::*;
pub use stock::*;
pub use store_json::*;
pub use vocab::*;
