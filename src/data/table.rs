//! Inventory Table Module
//! Typed rows extracted from the raw sheet DataFrame.

use crate::config::ColumnMap;
use polars::prelude::*;

/// One inventory record, in source order. Duplicate names are allowed and
/// treated as independent rows.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub status: String,
}

/// The full snapshot as received, plus which optional columns the source
/// document actually carried.
#[derive(Debug, Clone, Default)]
pub struct InventoryTable {
    pub rows: Vec<InventoryRow>,
    pub has_category: bool,
    pub has_price: bool,
    pub has_status: bool,
}

impl InventoryTable {
    /// Extract typed rows from a parsed DataFrame using the column map.
    ///
    /// Quantity and price cells that fail numeric coercion become 0.0;
    /// coercion never rejects a row.
    pub fn from_dataframe(df: &DataFrame, columns: &ColumnMap) -> Result<Self, PolarsError> {
        let height = df.height();

        let names = string_values(df, &columns.name);
        let categories = string_values(df, &columns.category);
        let statuses = string_values(df, &columns.status);
        let quantities = numeric_values(df, &columns.quantity)?;
        let prices = match &columns.price {
            Some(price_col) => numeric_values(df, price_col)?,
            None => None,
        };

        let mut rows = Vec::with_capacity(height);
        for i in 0..height {
            rows.push(InventoryRow {
                name: cell(&names, i),
                category: cell(&categories, i),
                quantity: numeric_cell(&quantities, i),
                unit_price: numeric_cell(&prices, i),
                status: cell(&statuses, i),
            });
        }

        Ok(Self {
            rows,
            has_category: categories.is_some(),
            has_price: prices.is_some(),
            has_status: statuses.is_some(),
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.category) {
                seen.push(row.category.clone());
            }
        }
        seen
    }

    /// Largest quantity in the table, used to scale the stock indicator.
    pub fn max_quantity(&self) -> f64 {
        self.rows.iter().map(|r| r.quantity).fold(0.0, f64::max)
    }
}

fn cell(values: &Option<Vec<String>>, i: usize) -> String {
    values
        .as_ref()
        .and_then(|v| v.get(i).cloned())
        .unwrap_or_default()
}

fn numeric_cell(values: &Option<Vec<f64>>, i: usize) -> f64 {
    values
        .as_ref()
        .and_then(|v| v.get(i).copied())
        .unwrap_or(0.0)
}

/// Read a column as strings; `None` when the column is absent.
fn string_values(df: &DataFrame, name: &str) -> Option<Vec<String>> {
    let column = df.column(name).ok()?;
    let values = (0..column.len())
        .map(|i| {
            column
                .get(i)
                .ok()
                .filter(|v| !v.is_null())
                .map(|v| v.to_string().trim_matches('"').to_string())
                .unwrap_or_default()
        })
        .collect();
    Some(values)
}

/// Coerce a column to f64; unparseable cells become 0.0. `None` when the
/// column is absent.
fn numeric_values(df: &DataFrame, name: &str) -> Result<Option<Vec<f64>>, PolarsError> {
    let Ok(column) = df.column(name) else {
        return Ok(None);
    };

    let cast = column.cast(&DataType::Float64)?;
    let ca = cast.f64()?;

    let mut failed = 0usize;
    let values: Vec<f64> = ca
        .into_iter()
        .map(|v| match v {
            Some(x) => x,
            None => {
                failed += 1;
                0.0
            }
        })
        .collect();

    if failed > 0 {
        log::debug!("column '{}': {} cells defaulted to 0", name, failed);
    }

    Ok(Some(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> ColumnMap {
        ColumnMap::default()
    }

    #[test]
    fn test_coercion_defaults_to_zero() {
        let df = df!(
            "รายการ" => ["A", "B", "C"],
            "หมวดหมู่" => ["X", "Y", "X"],
            "คงเหลือ" => ["10", "abc", "3"],
        )
        .unwrap();

        let table = InventoryTable::from_dataframe(&df, &map()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0].quantity, 10.0);
        assert_eq!(table.rows[1].quantity, 0.0);
        assert_eq!(table.rows[2].quantity, 3.0);
    }

    #[test]
    fn test_missing_optional_columns_flagged() {
        let df = df!(
            "รายการ" => ["A"],
            "คงเหลือ" => [7i64],
        )
        .unwrap();

        let table = InventoryTable::from_dataframe(&df, &map()).unwrap();
        assert!(!table.has_category);
        assert!(!table.has_price);
        assert!(!table.has_status);
        assert_eq!(table.rows[0].category, "");
        assert_eq!(table.rows[0].unit_price, 0.0);
    }

    #[test]
    fn test_price_column_unconfigured() {
        let df = df!(
            "รายการ" => ["A"],
            "คงเหลือ" => [7i64],
            "ราคาต่อหน่วย" => [25i64],
        )
        .unwrap();

        let mut columns = map();
        columns.price = None;
        let table = InventoryTable::from_dataframe(&df, &columns).unwrap();
        assert!(!table.has_price);
        assert_eq!(table.rows[0].unit_price, 0.0);
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let df = df!(
            "รายการ" => ["A", "B", "C", "D"],
            "หมวดหมู่" => ["Y", "X", "Y", "Z"],
            "คงเหลือ" => [1i64, 2, 3, 4],
        )
        .unwrap();

        let table = InventoryTable::from_dataframe(&df, &map()).unwrap();
        assert_eq!(table.categories(), vec!["Y", "X", "Z"]);
        assert_eq!(table.max_quantity(), 4.0);
    }
}
