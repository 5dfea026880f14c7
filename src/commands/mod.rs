//! CLI command implementations.

pub mod search;
pub mod session;

pub use search::SearchCommand;
