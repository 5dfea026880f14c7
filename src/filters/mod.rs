//! Search-result filtering with composable filters.

pub mod brand;
pub mod price;

use crate::naver::SearchItem;

pub use brand::BrandFilter;
pub use price::PriceFilter;

/// Trait for filtering search items.
pub trait Filter: Send + Sync {
    /// Returns true if the item passes the filter.
    fn matches(&self, item: &SearchItem) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if an item passes all filters.
    pub fn matches(&self, item: &SearchItem) -> bool {
        self.filters.iter().all(|f| f.matches(item))
    }

    /// Filters a collection, preserving relative order.
    pub fn apply(&self, items: Vec<SearchItem>) -> Vec<SearchItem> {
        items.into_iter().filter(|i| self.matches(i)).collect()
    }

    /// Borrowing variant of [`apply`](Self::apply), used by the session
    /// which keeps the raw result list intact across renders.
    pub fn apply_ref<'a>(&self, items: &'a [SearchItem]) -> Vec<&'a SearchItem> {
        items.iter().filter(|i| self.matches(i)).collect()
    }

    /// Returns true if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a FilterChain from configuration values.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds a price filter. `max_price == 0` keeps the upper bound open.
    pub fn price_range(mut self, min_price: u64, max_price: u64) -> Self {
        let max = if max_price == 0 { None } else { Some(max_price) };
        if min_price > 0 || max.is_some() {
            self.chain.add(PriceFilter::new(min_price, max));
        }
        self
    }

    /// Adds a brand allow-list filter.
    pub fn brands(mut self, brands: Vec<String>) -> Self {
        if !brands.is_empty() {
            self.chain.add(BrandFilter::new(brands));
        }
        self
    }

    /// Builds the filter chain.
    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(title: &str, lprice: &str) -> SearchItem {
        SearchItem {
            title: title.to_string(),
            link: String::new(),
            image: String::new(),
            lprice: lprice.to_string(),
            hprice: String::new(),
            mall_name: String::new(),
            product_id: String::new(),
            brand: String::new(),
            maker: String::new(),
            category1: String::new(),
            category2: String::new(),
            category3: String::new(),
            category4: String::new(),
        }
    }

    #[test]
    fn test_empty_chain_matches_all() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert!(chain.matches(&make_item("아무 제품", "1000")));
    }

    #[test]
    fn test_chain_requires_all_filters() {
        let mut chain = FilterChain::new();
        chain.add(PriceFilter::min(500000));
        chain.add(BrandFilter::new(vec!["LG".to_string()]));

        assert_eq!(chain.len(), 2);
        assert!(chain.matches(&make_item("LG 세탁기", "599000")));
        assert!(!chain.matches(&make_item("LG 세탁기", "499000"))); // price too low
        assert!(!chain.matches(&make_item("삼성 세탁기", "599000"))); // wrong brand
    }

    #[test]
    fn test_apply_preserves_order() {
        let mut chain = FilterChain::new();
        chain.add(PriceFilter::min(200));

        let items = vec![
            make_item("c", "300"),
            make_item("a", "100"),
            make_item("b", "500"),
            make_item("d", "200"),
        ];

        let filtered = chain.apply(items);
        let titles: Vec<&str> = filtered.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b", "d"]);
    }

    #[test]
    fn test_apply_ref_preserves_order() {
        let mut chain = FilterChain::new();
        chain.add(PriceFilter::min(200));

        let items =
            vec![make_item("c", "300"), make_item("a", "100"), make_item("b", "500")];

        let filtered = chain.apply_ref(&items);
        let titles: Vec<&str> = filtered.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b"]);
    }

    #[test]
    fn test_apply_empty_input() {
        let mut chain = FilterChain::new();
        chain.add(PriceFilter::min(1));
        assert!(chain.apply(Vec::new()).is_empty());
    }

    #[test]
    fn test_builder_zero_max_is_unbounded() {
        let chain = FilterChainBuilder::new().price_range(500000, 0).build();
        assert_eq!(chain.len(), 1);

        assert!(chain.matches(&make_item("t", "500000")));
        assert!(chain.matches(&make_item("t", "99999999")));
        assert!(!chain.matches(&make_item("t", "499999")));
    }

    #[test]
    fn test_builder_no_criteria_builds_empty_chain() {
        let chain = FilterChainBuilder::new().price_range(0, 0).brands(Vec::new()).build();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_builder_full_criteria() {
        let chain = FilterChainBuilder::new()
            .price_range(500000, 1500000)
            .brands(vec!["LG".to_string()])
            .build();

        assert_eq!(chain.len(), 2);
        assert!(chain.matches(&make_item("LG <b>세탁기</b>", "599000")));
        assert!(!chain.matches(&make_item("LG <b>세탁기</b>", "1600000")));
        assert!(!chain.matches(&make_item("삼성 세탁기", "599000")));
    }

    #[test]
    fn test_descriptions() {
        let chain = FilterChainBuilder::new()
            .price_range(100000, 500000)
            .brands(vec!["LG".to_string()])
            .build();

        let descriptions = chain.descriptions();
        assert_eq!(descriptions.len(), 2);
        assert!(descriptions[0].contains("Price"));
        assert!(descriptions[1].contains("Brands"));
    }
}
