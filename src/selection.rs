//! The user's working set of products chosen for comparison.

use crate::naver::SearchItem;
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Timestamp format used for `selected_at` (matches the export column).
pub const SELECTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A product copied out of the search results at selection time.
///
/// Decoupled from later re-searches: it holds owned copies of the fields,
/// not a reference into the result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedProduct {
    /// Cleaned (tag-free) product title; the de-duplication key
    pub name: String,
    /// Lowest price in won
    pub price: u64,
    /// Brand name as reported by the API
    pub brand: String,
    /// Seller (mall) name
    pub mall: String,
    /// "category1 > category2" path
    pub category: String,
    /// Product image URL
    pub image_url: String,
    /// Product detail URL
    pub link: String,
    /// Local selection time, `YYYY-MM-DD HH:MM`
    pub selected_at: String,
}

impl SelectedProduct {
    /// Builds a selection entry from a search item, stamped `selected_at`.
    pub fn from_item(item: &SearchItem, selected_at: impl Into<String>) -> Self {
        Self {
            name: item.clean_title(),
            price: item.price(),
            brand: item.brand.clone(),
            mall: item.mall_name.clone(),
            category: item.category_path(),
            image_url: item.image.clone(),
            link: item.link.clone(),
            selected_at: selected_at.into(),
        }
    }
}

/// Ordered, name-deduplicated accumulator of selected products.
///
/// Iteration order is insertion order and is the only ordering guarantee.
#[derive(Debug, Default)]
pub struct SelectionStore {
    items: Vec<SelectedProduct>,
}

impl SelectionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item, stamped with the current local time.
    ///
    /// Returns `false` without mutating when an entry with the identical
    /// cleaned title already exists (exact, case-sensitive match).
    pub fn add(&mut self, item: &SearchItem) -> bool {
        let stamp = Local::now().format(SELECTED_AT_FORMAT).to_string();
        self.add_stamped(item, stamp)
    }

    /// `add` with an explicit timestamp (tests, replays).
    pub fn add_stamped(&mut self, item: &SearchItem, selected_at: impl Into<String>) -> bool {
        let name = item.clean_title();
        if self.items.iter().any(|p| p.name == name) {
            warn!("Already selected: {}", name);
            return false;
        }

        debug!("Selected: {}", name);
        self.items.push(SelectedProduct::from_item(item, selected_at));
        true
    }

    /// Removes the entry at `index`. Out-of-range is a no-op returning
    /// `false`; that is the documented policy.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        let removed = self.items.remove(index);
        debug!("Removed selection: {}", removed.name);
        true
    }

    /// Empties the store unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Selected products in insertion order.
    pub fn items(&self) -> &[SelectedProduct] {
        &self.items
    }

    /// Number of selected products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
