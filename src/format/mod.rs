//! Price formatting and output rendering (table, JSON, CSV).

use crate::config::OutputFormat;
use crate::export;
use crate::naver::SearchItem;
use crate::selection::SelectedProduct;
use crate::stats;

/// Formats a won amount string with thousands grouping and the currency
/// suffix: `"1234567"` → `"1,234,567원"`. Non-numeric input is returned
/// unchanged (silent fallback).
pub fn format_won(value: &str) -> String {
    match value.trim().parse::<i64>() {
        Ok(n) => format_won_i64(n),
        Err(_) => value.to_string(),
    }
}

/// Formats a numeric won amount.
pub fn format_won_u64(value: u64) -> String {
    format!("{}원", group_thousands(value))
}

fn format_won_i64(value: i64) -> String {
    if value < 0 {
        format!("-{}원", group_thousands(value.unsigned_abs()))
    } else {
        format_won_u64(value as u64)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

// Titles are mostly Hangul; truncation must count chars, not bytes.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut)
}

/// Formats search results and selection views for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a search result list.
    pub fn format_items(&self, items: &[SearchItem]) -> String {
        if items.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => ITEM_CSV_HEADER.to_string(),
                OutputFormat::Table => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => Self::json_items(items),
            OutputFormat::Table => Self::table_items(items),
            OutputFormat::Csv => Self::csv_items(items),
        }
    }

    /// Formats the current selection list.
    pub fn format_selection(&self, items: &[SelectedProduct]) -> String {
        if items.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => export::CSV_HEADER.to_string(),
                OutputFormat::Table => "Nothing selected yet.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Table => Self::table_selection(items),
            OutputFormat::Csv => export::to_csv_string(items).trim_end().to_string(),
        }
    }

    /// Formats the comparison view: price stats, ranking, seller counts
    /// and brand mean prices. Callers gate on a minimum selection size.
    pub fn format_comparison(&self, items: &[SelectedProduct]) -> String {
        if items.is_empty() {
            return "Nothing selected yet.".to_string();
        }

        if self.format == OutputFormat::Json {
            return Self::json_comparison(items);
        }

        let mut lines = Vec::new();

        if let Some(s) = stats::price_stats(items) {
            lines.push("Price analysis".to_string());
            lines.push("-".repeat(60));
            lines.push(format!(
                "Lowest {}   Highest {}   Mean {}   Spread {}",
                format_won_u64(s.min),
                format_won_u64(s.max),
                format_won(&format!("{:.0}", s.mean)),
                format_won_u64(s.range)
            ));
            lines.push(String::new());
        }

        lines.push("Price ranking".to_string());
        lines.push("-".repeat(60));
        for (i, p) in stats::rank_by_price(items).iter().enumerate() {
            lines.push(format!(
                "{:<3} {:>14}  {:<12} {}",
                i + 1,
                format_won_u64(p.price),
                truncate(&p.mall, 12),
                truncate(&p.name, 38)
            ));
        }
        lines.push(String::new());

        lines.push("Sellers".to_string());
        lines.push("-".repeat(60));
        for (mall, count) in stats::count_by_seller(items) {
            lines.push(format!("{:<20} {}", truncate(&mall, 20), count));
        }
        lines.push(String::new());

        lines.push("Mean price by brand".to_string());
        lines.push("-".repeat(60));
        for (brand, mean) in stats::mean_price_by_brand(items) {
            let label = if brand.is_empty() { "(no brand)" } else { brand.as_str() };
            lines.push(format!(
                "{:<20} {}",
                truncate(label, 20),
                format_won(&format!("{:.0}", mean))
            ));
        }

        lines.join("\n")
    }

    // JSON formatting

    fn json_items(items: &[SearchItem]) -> String {
        serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
    }

    fn json_comparison(items: &[SelectedProduct]) -> String {
        let value = serde_json::json!({
            "price_stats": stats::price_stats(items),
            "ranking": stats::rank_by_price(items),
            "sellers": stats::count_by_seller(items),
            "brand_means": stats::mean_price_by_brand(items),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    // Table formatting

    fn table_items(items: &[SearchItem]) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{:<4} {:>14}  {:<12} {:<10} {}",
            "#", "Price", "Mall", "Brand", "Title"
        ));
        lines.push(format!("{:-<4} {:->14}  {:-<12} {:-<10} {:-<40}", "", "", "", "", ""));

        for (i, item) in items.iter().enumerate() {
            lines.push(format!(
                "{:<4} {:>14}  {:<12} {:<10} {}",
                i + 1,
                format_won(&item.lprice),
                truncate(&item.mall_name, 12),
                truncate(&item.brand, 10),
                truncate(&item.clean_title(), 40)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", items.len()));

        lines.join("\n")
    }

    fn table_selection(items: &[SelectedProduct]) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{:<4} {:>14}  {:<12} {:<17} {}",
            "#", "Price", "Mall", "Selected", "Name"
        ));
        lines.push(format!("{:-<4} {:->14}  {:-<12} {:-<17} {:-<38}", "", "", "", "", ""));

        for (i, p) in items.iter().enumerate() {
            lines.push(format!(
                "{:<4} {:>14}  {:<12} {:<17} {}",
                i + 1,
                format_won_u64(p.price),
                truncate(&p.mall, 12),
                p.selected_at,
                truncate(&p.name, 38)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Selected: {} products", items.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_items(items: &[SearchItem]) -> String {
        let mut lines = Vec::new();
        lines.push(ITEM_CSV_HEADER.to_string());

        for item in items {
            lines.push(format!(
                "{},{},{},{},{},{}",
                csv_escape(&item.clean_title()),
                item.price(),
                csv_escape(&item.brand),
                csv_escape(&item.mall_name),
                csv_escape(&item.category_path()),
                csv_escape(&item.link),
            ));
        }

        lines.join("\n")
    }
}

const ITEM_CSV_HEADER: &str = "title,price,brand,mall,category,link";

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
