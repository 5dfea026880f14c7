//! Per-session state: search results, selection, filter criteria.
//!
//! One `SessionContext` is created when the interactive shell starts and
//! passed into every handler; there is no teardown, the session ends when
//! the host drops the context. Each interaction runs on a single logical
//! thread, so no locking is involved.

use crate::config::Config;
use crate::filters::FilterChainBuilder;
use crate::naver::{NaverSearch, SearchItem};
use crate::selection::SelectionStore;
use anyhow::Result;
use tracing::{debug, info};

/// Result of a selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Added to the selection.
    Added,
    /// A product with the same name is already selected; no mutation.
    Duplicate,
    /// The index does not point into the filtered view.
    OutOfRange,
}

/// Process-wide session state, owned by exactly one interactive shell.
pub struct SessionContext {
    pub config: Config,
    results: Vec<SearchItem>,
    store: SelectionStore,
}

impl SessionContext {
    /// Creates a fresh session from configuration.
    pub fn new(config: Config) -> Self {
        Self { config, results: Vec::new(), store: SelectionStore::new() }
    }

    /// Runs a search and replaces the raw result list wholesale.
    ///
    /// On error the previous results are left untouched; the shell reports
    /// the failure and treats the search as having returned nothing.
    pub async fn run_search(&mut self, client: &impl NaverSearch, query: &str) -> Result<usize> {
        let response = client.search(query, self.config.display, self.config.sort).await?;

        info!("Search returned {} items (total {})", response.count(), response.total);
        self.results = response.items;
        Ok(self.results.len())
    }

    /// The raw result list from the last successful search.
    pub fn results(&self) -> &[SearchItem] {
        &self.results
    }

    /// The filtered view, recomputed from current criteria on every call.
    pub fn filtered(&self) -> Vec<&SearchItem> {
        let chain = FilterChainBuilder::new()
            .price_range(self.config.min_price, self.config.max_price)
            .brands(self.config.brands.clone())
            .build();

        if !chain.is_empty() {
            debug!("Active filters: {}", chain.descriptions().join(", "));
        }

        chain.apply_ref(&self.results)
    }

    /// Selects the `index`-th item of the *filtered* view (0-based).
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        let filtered = self.filtered();
        let Some(item) = filtered.get(index) else {
            return SelectOutcome::OutOfRange;
        };

        // Clone out of the borrow before mutating the store.
        let item = (*item).clone();
        if self.store.add(&item) {
            SelectOutcome::Added
        } else {
            SelectOutcome::Duplicate
        }
    }

    /// Removes the `index`-th selected product. No-op on a bad index.
    pub fn remove(&mut self, index: usize) -> bool {
        self.store.remove_at(index)
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.store.clear();
    }

    /// The selection store.
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Updates the price bounds used by [`filtered`](Self::filtered).
    /// `max == 0` leaves the upper bound open.
    pub fn set_price_bounds(&mut self, min: u64, max: u64) {
        self.config.min_price = min;
        self.config.max_price = max;
    }

    /// Replaces the brand allow-list.
    pub fn set_brands(&mut self, brands: Vec<String>) {
        self.config.brands = brands;
    }
}
