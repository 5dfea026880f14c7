//! Brand allow-list filter.

use super::Filter;
use crate::naver::SearchItem;

/// Passes items whose cleaned title contains at least one allow-listed
/// brand as a substring.
///
/// Matching is case-sensitive on purpose: brand names in listings are
/// either Hangul or a fixed Latin spelling ("LG", not "lg").
pub struct BrandFilter {
    brands: Vec<String>,
}

impl BrandFilter {
    /// Creates a new brand filter. An empty list matches everything,
    /// but the chain builder skips the filter in that case.
    pub fn new(brands: Vec<String>) -> Self {
        Self { brands }
    }
}

impl Filter for BrandFilter {
    fn matches(&self, item: &SearchItem) -> bool {
        if self.brands.is_empty() {
            return true;
        }

        let title = item.clean_title();
        self.brands.iter().any(|brand| title.contains(brand.as_str()))
    }

    fn description(&self) -> String {
        if self.brands.is_empty() {
            "Brands: any".to_string()
        } else {
            format!("Brands: {}", self.brands.join(", "))
        }
    }
}
