//! Aggregate statistics over the selection store.

use crate::selection::SelectedProduct;
use serde::Serialize;

/// Min/max/mean/range over selected prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceStats {
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub range: u64,
}

/// Computes price statistics. Returns `None` for an empty selection;
/// the caller presents a placeholder instead.
pub fn price_stats(items: &[SelectedProduct]) -> Option<PriceStats> {
    if items.is_empty() {
        return None;
    }

    let mut min = items[0].price;
    let mut max = items[0].price;
    let mut sum = 0u64;
    for p in items {
        min = min.min(p.price);
        max = max.max(p.price);
        sum += p.price;
    }
    let mean = sum as f64 / items.len() as f64;

    Some(PriceStats { min, max, mean, range: max - min })
}

/// Products ordered by ascending price. Stable: insertion order breaks ties.
pub fn rank_by_price(items: &[SelectedProduct]) -> Vec<&SelectedProduct> {
    let mut ranked: Vec<&SelectedProduct> = items.iter().collect();
    ranked.sort_by_key(|p| p.price);
    ranked
}

/// Count of selections per seller, most frequent first. Ties keep
/// first-seen order.
pub fn count_by_seller(items: &[SelectedProduct]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for item in items {
        match counts.iter_mut().find(|(mall, _)| *mall == item.mall) {
            Some((_, n)) => *n += 1,
            None => counts.push((item.mall.clone(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Mean price per brand, highest mean first. Ties keep first-seen order.
pub fn mean_price_by_brand(items: &[SelectedProduct]) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, u64, usize)> = Vec::new();

    for item in items {
        match groups.iter_mut().find(|(brand, _, _)| *brand == item.brand) {
            Some((_, sum, n)) => {
                *sum += item.price;
                *n += 1;
            }
            None => groups.push((item.brand.clone(), item.price, 1)),
        }
    }

    let mut means: Vec<(String, f64)> =
        groups.into_iter().map(|(brand, sum, n)| (brand, sum as f64 / n as f64)).collect();

    means.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    means
}
