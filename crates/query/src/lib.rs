//! Matches free-text input against the host catalog.

mod item;
mod query;
mod resolver;

pub use item::{ItemAction, ResultItem};
pub use resolver::resolve;
