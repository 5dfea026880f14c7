//! Naver Shopping API modules: HTTP client and data models.

pub mod client;
pub mod models;

pub use client::{NaverClient, NaverSearch, MAX_DISPLAY, MIN_DISPLAY};
pub use models::{SearchItem, SearchResponse, Sort};
