//! Client-side catalog filtering: platform, function and free-text predicates.

mod cache;
mod criteria;
mod engine;

pub use cache::*;
pub use criteria::*;
pub use engine::*;
