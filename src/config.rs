//! Dashboard Configuration
//! Immutable settings describing the sheet export and its column layout.

use std::time::Duration;

/// Maps the dashboard's logical fields to the header names of the sheet.
///
/// The quantity and price columns are coerced to numbers during extraction;
/// price and status are optional in the source document.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub name: String,
    pub category: String,
    pub quantity: String,
    /// Unit price header, or `None` when the sheet carries no prices.
    pub price: Option<String>,
    pub status: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            name: "รายการ".to_string(),
            category: "หมวดหมู่".to_string(),
            quantity: "คงเหลือ".to_string(),
            price: Some("ราคาต่อหน่วย".to_string()),
            status: "สถานะ".to_string(),
        }
    }
}

/// Immutable configuration handed to the loader at construction.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Published CSV export of the inventory sheet.
    pub sheet_url: String,
    pub columns: ColumnMap,
    /// Quantities strictly below this count as low stock.
    pub low_stock_threshold: f64,
    /// How long a fetched table is reused before a fresh fetch.
    pub cache_ttl: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sheet_url: "https://docs.google.com/spreadsheets/d/e/2PACX-1vQ75RDJdohY6N12_oX9IVC48zBLT3nU4Ym_VJXaaalYcGY9wlSyyXvBOJCfRkzxvVh8BCgCwbnFZc7G/pub?output=csv"
                .to_string(),
            columns: ColumnMap::default(),
            low_stock_threshold: 5.0,
            cache_ttl: Duration::from_secs(60),
        }
    }
}
