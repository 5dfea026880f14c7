//! Price range filter.

use super::Filter;
use crate::naver::SearchItem;

/// Filters items by price in won.
///
/// `max: None` means unbounded; the config layer maps its legacy
/// `max_price == 0` convention to `None` before building this filter.
pub struct PriceFilter {
    min: u64,
    max: Option<u64>,
}

impl PriceFilter {
    /// Creates a new price filter.
    pub fn new(min: u64, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// Creates a filter with only a minimum price.
    pub fn min(price: u64) -> Self {
        Self { min: price, max: None }
    }

    /// Creates a filter with both bounds.
    pub fn range(min: u64, max: u64) -> Self {
        Self { min, max: Some(max) }
    }
}

impl Filter for PriceFilter {
    fn matches(&self, item: &SearchItem) -> bool {
        let price = item.price();

        if price < self.min {
            return false;
        }

        if let Some(max) = self.max {
            if price > max {
                return false;
            }
        }

        true
    }

    fn description(&self) -> String {
        match self.max {
            Some(max) => format!("Price: {} - {}원", self.min, max),
            None => format!("Price: >= {}원", self.min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(lprice: &str) -> SearchItem {
        SearchItem {
            title: "테스트 세탁기".to_string(),
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
    fn test_range() {
        let filter = PriceFilter::range(100000, 500000);

        assert!(!filter.matches(&make_item("99999")));
        assert!(filter.matches(&make_item("100000")));
        assert!(filter.matches(&make_item("300000")));
        assert!(filter.matches(&make_item("500000")));
        assert!(!filter.matches(&make_item("500001")));
    }

    #[test]
    fn test_min_only_is_unbounded_above() {
        let filter = PriceFilter::min(500000);
        assert!(!filter.matches(&make_item("499999")));
        assert!(filter.matches(&make_item("500000")));
        assert!(filter.matches(&make_item("99999999")));
    }

    #[test]
    fn test_no_bounds() {
        let filter = PriceFilter::new(0, None);
        assert!(filter.matches(&make_item("0")));
        assert!(filter.matches(&make_item("123456789")));
    }

    #[test]
    fn test_unparseable_price_counts_as_zero() {
        let filter = PriceFilter::min(1);
        assert!(!filter.matches(&make_item("abc")));
        assert!(!filter.matches(&make_item("")));

        let open = PriceFilter::new(0, None);
        assert!(open.matches(&make_item("abc")));
    }

    #[test]
    fn test_description() {
        assert_eq!(PriceFilter::range(100, 200).description(), "Price: 100 - 200원");
        assert_eq!(PriceFilter::min(500000).description(), "Price: >= 500000원");
    }
}
