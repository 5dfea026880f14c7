//! One-shot search command.

use crate::config::Config;
use crate::filters::FilterChainBuilder;
use crate::format::Formatter;
use crate::naver::{NaverClient, NaverSearch};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Executes a product search: one fetch, filter, format.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &str) -> Result<String> {
        let client = NaverClient::new(&self.config.client_id, &self.config.client_secret)
            .context("Failed to create HTTP client")?;

        self.execute_with_client(&client, query).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl NaverSearch,
        query: &str,
    ) -> Result<String> {
        info!("Searching for: {}", query);

        let response = client.search(query, self.config.display, self.config.sort).await?;
        debug!("Search returned {} of {} items", response.count(), response.total);

        let filters = FilterChainBuilder::new()
            .price_range(self.config.min_price, self.config.max_price)
            .brands(self.config.brands.clone())
            .build();

        if !filters.is_empty() {
            debug!("Active filters: {}", filters.descriptions().join(", "));
        }

        let items = filters.apply(response.items);
        info!("{} products match the criteria", items.len());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_items(&items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::naver::{SearchItem, SearchResponse, Sort};
    use async_trait::async_trait;

    struct MockClient {
        items: Vec<SearchItem>,
    }

    #[async_trait]
    impl NaverSearch for MockClient {
        async fn search(&self, _query: &str, display: u32, _sort: Sort) -> Result<SearchResponse> {
            let items: Vec<SearchItem> =
                self.items.iter().take(display as usize).cloned().collect();
            Ok(SearchResponse {
                last_build_date: String::new(),
                total: self.items.len() as u64,
                start: 1,
                display: items.len() as u32,
                items,
            })
        }
    }

    fn make_item(title: &str, lprice: &str, mall: &str) -> SearchItem {
        SearchItem {
            title: title.to_string(),
            link: String::new(),
            image: String::new(),
            lprice: lprice.to_string(),
            hprice: String::new(),
            mall_name: mall.to_string(),
            product_id: "1".to_string(),
            brand: String::new(),
            maker: String::new(),
            category1: "디지털/가전".to_string(),
            category2: "생활가전".to_string(),
            category3: String::new(),
            category4: String::new(),
        }
    }

    fn test_config() -> Config {
        Config { format: OutputFormat::Table, ..Config::default() }
    }

    #[tokio::test]
    async fn test_search_command_basic() {
        let client = MockClient {
            items: vec![
                make_item("LG <b>세탁기</b>", "599000", "네이버"),
                make_item("삼성 <b>세탁기</b>", "729000", "쿠팡"),
            ],
        };

        let cmd = SearchCommand::new(test_config());
        let output = cmd.execute_with_client(&client, "세탁기").await.unwrap();

        assert!(output.contains("LG 세탁기"));
        assert!(output.contains("삼성 세탁기"));
        assert!(output.contains("599,000원"));
        assert!(output.contains("Total: 2 products"));
    }

    #[tokio::test]
    async fn test_search_command_empty_results() {
        let client = MockClient { items: Vec::new() };
        let cmd = SearchCommand::new(test_config());

        let output = cmd.execute_with_client(&client, "없는제품").await.unwrap();
        assert!(output.contains("No products found"));
    }

    #[tokio::test]
    async fn test_search_command_applies_filters() {
        let client = MockClient {
            items: vec![
                make_item("LG <b>세탁기</b>", "599000", "네이버"),
                make_item("LG 미니 <b>세탁기</b>", "299000", "쿠팡"),
                make_item("삼성 <b>세탁기</b>", "729000", "쿠팡"),
            ],
        };

        let mut config = test_config();
        config.min_price = 500000;
        config.brands = vec!["LG".to_string()];

        let cmd = SearchCommand::new(config);
        let output = cmd.execute_with_client(&client, "세탁기").await.unwrap();

        assert!(output.contains("LG 세탁기"));
        assert!(!output.contains("미니")); // below min price
        assert!(!output.contains("삼성")); // not in allow-list
    }

    #[tokio::test]
    async fn test_search_command_json_format() {
        let client = MockClient { items: vec![make_item("LG 세탁기", "599000", "네이버")] };

        let mut config = test_config();
        config.format = OutputFormat::Json;

        let cmd = SearchCommand::new(config);
        let output = cmd.execute_with_client(&client, "세탁기").await.unwrap();

        assert!(output.starts_with('['));
        assert!(output.contains("599000"));
    }
}
