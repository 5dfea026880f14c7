//! Data models for Naver Shopping search responses.

use crate::text::strip_tags;
use serde::{Deserialize, Serialize};

/// Sort order for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    /// Relevance ("sim" on the wire)
    #[default]
    Sim,
    /// Price ascending
    Asc,
    /// Price descending
    Dsc,
}

impl Sort {
    /// Returns the query-parameter value.
    pub fn as_param(&self) -> &'static str {
        match self {
            Sort::Sim => "sim",
            Sort::Asc => "asc",
            Sort::Dsc => "dsc",
        }
    }
}

impl std::str::FromStr for Sort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sim" | "relevance" => Ok(Sort::Sim),
            "asc" | "price-asc" => Ok(Sort::Asc),
            "dsc" | "price-dsc" => Ok(Sort::Dsc),
            _ => Err(format!("Unknown sort: {}. Use: sim, asc, dsc", s)),
        }
    }
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_param())
    }
}

/// One product entry from the API `items` array.
///
/// `title` carries `<b>` highlight markup as delivered; `lprice` is a
/// numeric string in won. Items are immutable after parsing and the whole
/// list is replaced on the next search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    /// Product title, may contain highlight tags
    #[serde(default)]
    pub title: String,
    /// Product detail URL
    #[serde(default)]
    pub link: String,
    /// Product image URL
    #[serde(default)]
    pub image: String,
    /// Lowest listed price across sellers, won as a string
    #[serde(default)]
    pub lprice: String,
    /// Highest listed price, often empty
    #[serde(default)]
    pub hprice: String,
    /// Seller (shopping mall) name
    #[serde(default)]
    pub mall_name: String,
    /// Naver product identifier
    #[serde(default)]
    pub product_id: String,
    /// Brand name, may be empty
    #[serde(default)]
    pub brand: String,
    /// Manufacturer, may be empty
    #[serde(default)]
    pub maker: String,
    /// Top-level category
    #[serde(default)]
    pub category1: String,
    /// Second-level category
    #[serde(default)]
    pub category2: String,
    /// Third-level category
    #[serde(default)]
    pub category3: String,
    /// Fourth-level category
    #[serde(default)]
    pub category4: String,
}

impl SearchItem {
    /// Lowest price in won. Non-numeric input parses as 0.
    pub fn price(&self) -> u64 {
        self.lprice.trim().parse().unwrap_or(0)
    }

    /// Title with highlight markup removed.
    pub fn clean_title(&self) -> String {
        strip_tags(&self.title)
    }

    /// "category1 > category2" display form.
    pub fn category_path(&self) -> String {
        format!("{} > {}", self.category1, self.category2)
    }
}

/// Parsed search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub last_build_date: String,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub display: u32,
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

impl SearchResponse {
    /// Returns the number of items in this page.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the response carried no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
