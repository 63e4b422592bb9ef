//! Sheet Loader Module
//! Fetches the published CSV export, parses it with Polars, and memoizes
//! the extracted table for the configured TTL.

use crate::config::DashboardConfig;
use crate::data::InventoryTable;
use polars::prelude::*;
use std::io::Cursor;
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to fetch sheet: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Failed to parse CSV: {0}")]
    Parse(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
}

struct CachedTable {
    table: InventoryTable,
    fetched_at: Instant,
}

/// Fetches and caches the inventory snapshot. A successful load is reused
/// until the TTL expires; a failed refresh drops the stale table rather
/// than serving it.
pub struct SheetLoader {
    config: DashboardConfig,
    client: reqwest::blocking::Client,
    cached: Option<CachedTable>,
}

impl SheetLoader {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            client: reqwest::blocking::Client::new(),
            cached: None,
        }
    }

    /// Return the cached table, fetching a fresh snapshot first when the
    /// cache is missing or expired. Any fetch or parse failure is total:
    /// no partial table is ever returned.
    ///
    /// The windowed app fetches off the render thread via [`Self::fetch_table`]
    /// and [`Self::install`] instead, which share this code path.
    #[allow(dead_code)]
    pub fn load(&mut self) -> Result<&InventoryTable, LoaderError> {
        if !self.is_fresh() {
            self.cached = None;
            let table = Self::fetch_with(&self.client, &self.config)?;
            self.install(table);
        }

        self.cached
            .as_ref()
            .map(|c| &c.table)
            .ok_or(LoaderError::NoData)
    }

    /// Whether the cached table is still within the TTL window.
    pub fn is_fresh(&self) -> bool {
        self.cached
            .as_ref()
            .is_some_and(|c| c.fetched_at.elapsed() < self.config.cache_ttl)
    }

    /// Get the cached table without triggering a fetch.
    pub fn table(&self) -> Option<&InventoryTable> {
        self.cached.as_ref().map(|c| &c.table)
    }

    /// Store a freshly fetched table (used for async loading).
    pub fn install(&mut self, table: InventoryTable) {
        self.cached = Some(CachedTable {
            table,
            fetched_at: Instant::now(),
        });
    }

    /// Drop the cached table.
    pub fn clear(&mut self) {
        self.cached = None;
    }

    /// One-shot fetch and parse with its own client, for callers off the
    /// render thread.
    pub fn fetch_table(config: &DashboardConfig) -> Result<InventoryTable, LoaderError> {
        Self::fetch_with(&reqwest::blocking::Client::new(), config)
    }

    fn fetch_with(
        client: &reqwest::blocking::Client,
        config: &DashboardConfig,
    ) -> Result<InventoryTable, LoaderError> {
        let response = client.get(&config.sheet_url).send()?.error_for_status()?;
        let body = response.bytes()?;

        let table = parse_table(&body, config)?;
        if table.is_empty() {
            log::warn!("sheet export contained no rows");
        } else {
            log::info!("loaded {} rows from sheet export", table.len());
        }
        Ok(table)
    }
}

/// Parse CSV bytes into an InventoryTable.
fn parse_table(bytes: &[u8], config: &DashboardConfig) -> Result<InventoryTable, LoaderError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    Ok(InventoryTable::from_dataframe(&df, &config.columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const CSV: &str = "\
รายการ,หมวดหมู่,คงเหลือ,ราคาต่อหน่วย,สถานะ
A,X,10,100,พร้อมใช้
B,Y,abc,50,ต้องซื้อ
C,X,3,,ของหมด
";

    fn unroutable_config(ttl: Duration) -> DashboardConfig {
        DashboardConfig {
            sheet_url: "http://127.0.0.1:1/export.csv".to_string(),
            cache_ttl: ttl,
            ..DashboardConfig::default()
        }
    }

    #[test]
    fn test_parse_table_coerces_cells() {
        let config = DashboardConfig::default();
        let table = parse_table(CSV.as_bytes(), &config).unwrap();

        assert_eq!(table.len(), 3);
        assert!(table.has_category && table.has_price && table.has_status);
        assert_eq!(table.rows[1].quantity, 0.0);
        assert_eq!(table.rows[2].unit_price, 0.0);
        assert_eq!(table.rows[1].status, "ต้องซื้อ");
    }

    #[test]
    fn test_parse_table_header_only() {
        let config = DashboardConfig::default();
        let table = parse_table("รายการ,หมวดหมู่,คงเหลือ\n".as_bytes(), &config).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_fetch_failure_is_total() {
        let mut loader = SheetLoader::new(unroutable_config(Duration::from_secs(60)));
        assert!(matches!(loader.load(), Err(LoaderError::Fetch(_))));
        assert!(loader.table().is_none());
    }

    #[test]
    fn test_fresh_cache_skips_fetch() {
        // The URL is unroutable, so returning Ok proves no fetch happened.
        let mut loader = SheetLoader::new(unroutable_config(Duration::from_secs(3600)));
        let table = parse_table(CSV.as_bytes(), &loader.config).unwrap();
        loader.install(table);

        assert!(loader.is_fresh());
        assert_eq!(loader.load().unwrap().len(), 3);
    }

    #[test]
    fn test_expired_cache_refetches_and_drops_stale() {
        let mut loader = SheetLoader::new(unroutable_config(Duration::ZERO));
        let table = parse_table(CSV.as_bytes(), &loader.config).unwrap();
        loader.install(table);

        assert!(!loader.is_fresh());
        assert!(loader.load().is_err());
        // The expired table is not resurrected after a failed refresh.
        assert!(loader.table().is_none());
    }
}
