//! CSV export of the selection store.
//!
//! Output is UTF-8 with a BOM so spreadsheet tools open Hangul titles
//! without mangling them.

use crate::selection::SelectedProduct;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::Path;
use tracing::info;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header row; column names match the `SelectedProduct` fields.
pub const CSV_HEADER: &str = "name,price,brand,mall,category,image_url,link,selected_at";

const FILENAME_PREFIX: &str = "naver_compare";

/// Serializes the selection to CSV bytes, one row per product in store
/// order, BOM first.
pub fn to_csv(items: &[SelectedProduct]) -> Vec<u8> {
    let body = to_csv_string(items);
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + body.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(body.as_bytes());
    bytes
}

/// CSV text without the BOM, for terminal output.
pub fn to_csv_string(items: &[SelectedProduct]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for p in items {
        lines.push(format!(
            "{},{},{},{},{},{},{},{}",
            csv_escape(&p.name),
            p.price,
            csv_escape(&p.brand),
            csv_escape(&p.mall),
            csv_escape(&p.category),
            csv_escape(&p.image_url),
            csv_escape(&p.link),
            csv_escape(&p.selected_at),
        ));
    }

    let mut body = lines.join("\n");
    body.push('\n');
    body
}

/// Download filename for the given date: `naver_compare_<YYYYMMDD>.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("{}_{}.csv", FILENAME_PREFIX, date.format("%Y%m%d"))
}

/// Download filename for today's local date.
pub fn default_filename() -> String {
    export_filename(Local::now().date_naive())
}

/// Writes the selection as CSV to `path`.
pub fn write_csv(items: &[SelectedProduct], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, to_csv(items))
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;

    info!("Exported {} products to {}", items.len(), path.display());
    Ok(())
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
