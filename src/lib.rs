//! naver-compare - Naver Shopping price comparison CLI
//!
//! Searches the Naver Shopping open API, filters results by price and
//! brand, and compares hand-picked products (stats, ranking, CSV export).

pub mod commands;
pub mod config;
pub mod export;
pub mod filters;
pub mod format;
pub mod naver;
pub mod selection;
pub mod session;
pub mod stats;
pub mod text;

pub use config::Config;
pub use naver::{NaverClient, NaverSearch, SearchItem, SearchResponse, Sort};
pub use selection::{SelectedProduct, SelectionStore};
