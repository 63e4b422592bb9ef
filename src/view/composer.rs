//! View Composer Module
//! Pure transform from (table, filter selection) to everything the
//! dashboard surfaces render. No state is retained between calls.

use crate::data::{InventoryRow, InventoryTable};
use std::collections::{HashMap, HashSet};

/// How many items the stock-level bar chart shows.
pub const TOP_N: usize = 10;

/// Status substrings that flag a row for restocking, matched
/// case-insensitively against the status text.
pub const RESTOCK_TRIGGERS: [&str; 4] = ["buy", "low", "ซื้อ", "หมด"];

/// The four summary numbers shown above the tab views.
#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub total_quantity: f64,
    pub low_stock_count: usize,
    /// Absent (not zero) when the source has no price column.
    pub total_value: Option<f64>,
    pub distinct_categories: usize,
}

/// Everything one render needs, derived from a table and a filter.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub filtered: Vec<InventoryRow>,
    pub kpis: Kpis,
    /// Filtered rows sorted by quantity descending, at most TOP_N entries.
    pub top_by_quantity: Vec<InventoryRow>,
    /// (category, row count) over the filtered rows, largest count first.
    pub category_distribution: Vec<(String, usize)>,
    /// Rows needing replenishment, always over the unfiltered table.
    pub restock: Vec<InventoryRow>,
    /// Row count of the unfiltered table.
    pub source_rows: usize,
    /// Largest quantity in the unfiltered table, for the stock indicator.
    pub max_quantity: f64,
    pub has_price: bool,
    pub has_status: bool,
}

/// Derive the dashboard view for one render.
pub fn compose(
    table: &InventoryTable,
    selection: &HashSet<String>,
    low_stock_threshold: f64,
) -> DashboardView {
    let filtered: Vec<InventoryRow> = if table.has_category {
        table
            .rows
            .iter()
            .filter(|r| selection.contains(&r.category))
            .cloned()
            .collect()
    } else {
        table.rows.clone()
    };

    let total_quantity = filtered.iter().map(|r| r.quantity).sum();
    let low_stock_count = filtered
        .iter()
        .filter(|r| r.quantity < low_stock_threshold)
        .count();
    let total_value = table
        .has_price
        .then(|| filtered.iter().map(|r| r.quantity * r.unit_price).sum());
    let distinct_categories = if table.has_category {
        filtered
            .iter()
            .map(|r| r.category.as_str())
            .collect::<HashSet<_>>()
            .len()
    } else {
        0
    };

    // Vec::sort_by is stable, so ties keep their source order.
    let mut top_by_quantity = filtered.clone();
    top_by_quantity.sort_by(|a, b| b.quantity.total_cmp(&a.quantity));
    top_by_quantity.truncate(TOP_N);

    let category_distribution = if table.has_category {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for row in &filtered {
            *counts.entry(row.category.as_str()).or_default() += 1;
        }
        let mut distribution: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(cat, n)| (cat.to_string(), n))
            .collect();
        distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        distribution
    } else {
        Vec::new()
    };

    // Restocking ignores the category filter on purpose: a flagged row
    // stays visible whatever the user is looking at.
    let restock: Vec<InventoryRow> = if table.has_status {
        table
            .rows
            .iter()
            .filter(|r| needs_restock(&r.status))
            .cloned()
            .collect()
    } else {
        table
            .rows
            .iter()
            .filter(|r| r.quantity < low_stock_threshold)
            .cloned()
            .collect()
    };

    DashboardView {
        filtered,
        kpis: Kpis {
            total_quantity,
            low_stock_count,
            total_value,
            distinct_categories,
        },
        top_by_quantity,
        category_distribution,
        restock,
        source_rows: table.len(),
        max_quantity: table.max_quantity(),
        has_price: table.has_price,
        has_status: table.has_status,
    }
}

fn needs_restock(status: &str) -> bool {
    let status = status.to_lowercase();
    RESTOCK_TRIGGERS.iter().any(|t| status.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, category: &str, quantity: f64) -> InventoryRow {
        InventoryRow {
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            unit_price: 0.0,
            status: String::new(),
        }
    }

    fn table(rows: Vec<InventoryRow>) -> InventoryTable {
        InventoryTable {
            rows,
            has_category: true,
            has_price: false,
            has_status: false,
        }
    }

    fn select(cats: &[&str]) -> HashSet<String> {
        cats.iter().map(|c| c.to_string()).collect()
    }

    // B's quantity failed coercion upstream and arrives as 0.
    fn scenario() -> InventoryTable {
        table(vec![row("A", "X", 10.0), row("B", "Y", 0.0), row("C", "X", 3.0)])
    }

    #[test]
    fn test_kpis_over_filtered_rows() {
        let view = compose(&scenario(), &select(&["X"]), 5.0);

        assert_eq!(view.filtered.len(), 2);
        assert_eq!(view.kpis.total_quantity, 13.0);
        assert_eq!(view.kpis.low_stock_count, 1);
        assert_eq!(view.kpis.distinct_categories, 1);
        assert_eq!(view.kpis.total_value, None);
    }

    #[test]
    fn test_full_selection_is_identity() {
        let t = scenario();
        let view = compose(&t, &select(&["X", "Y"]), 5.0);
        assert_eq!(view.filtered, t.rows);
    }

    #[test]
    fn test_no_category_column_ignores_filter() {
        let mut t = scenario();
        t.has_category = false;
        let view = compose(&t, &select(&[]), 5.0);

        assert_eq!(view.filtered.len(), 3);
        assert_eq!(view.kpis.distinct_categories, 0);
        assert!(view.category_distribution.is_empty());
    }

    #[test]
    fn test_low_stock_is_strictly_below_threshold() {
        let t = table(vec![row("A", "X", 5.0), row("B", "X", 4.9)]);
        let view = compose(&t, &select(&["X"]), 5.0);
        assert_eq!(view.kpis.low_stock_count, 1);
    }

    #[test]
    fn test_total_value_present_with_price_column() {
        let mut t = table(vec![row("A", "X", 2.0), row("B", "X", 3.0)]);
        t.has_price = true;
        t.rows[0].unit_price = 10.0;
        t.rows[1].unit_price = 4.0;

        let view = compose(&t, &select(&["X"]), 5.0);
        assert_eq!(view.kpis.total_value, Some(32.0));
    }

    #[test]
    fn test_top_n_sorted_and_truncated() {
        let rows: Vec<InventoryRow> = (0..12).map(|i| row(&format!("item{i}"), "X", i as f64)).collect();
        let view = compose(&table(rows), &select(&["X"]), 5.0);

        assert_eq!(view.top_by_quantity.len(), TOP_N);
        assert_eq!(view.top_by_quantity[0].quantity, 11.0);
        assert!(view
            .top_by_quantity
            .windows(2)
            .all(|w| w[0].quantity >= w[1].quantity));
    }

    #[test]
    fn test_top_n_ties_keep_source_order() {
        let t = table(vec![row("first", "X", 7.0), row("second", "X", 7.0)]);
        let view = compose(&t, &select(&["X"]), 5.0);
        assert_eq!(view.top_by_quantity[0].name, "first");
        assert_eq!(view.top_by_quantity[1].name, "second");
    }

    #[test]
    fn test_distribution_counts() {
        let t = table(vec![
            row("A", "X", 1.0),
            row("B", "Y", 1.0),
            row("C", "X", 1.0),
        ]);
        let view = compose(&t, &select(&["X", "Y"]), 5.0);
        assert_eq!(
            view.category_distribution,
            vec![("X".to_string(), 2), ("Y".to_string(), 1)]
        );
    }

    #[test]
    fn test_restock_ignores_category_filter() {
        let mut t = scenario();
        t.has_status = true;
        t.rows[1].status = "ต้องซื้อ".to_string();

        let narrow = compose(&t, &select(&["X"]), 5.0);
        let wide = compose(&t, &select(&["X", "Y"]), 5.0);
        assert_eq!(narrow.restock, wide.restock);
        assert_eq!(narrow.restock.len(), 1);
        assert_eq!(narrow.restock[0].name, "B");
    }

    #[test]
    fn test_restock_status_match_is_case_insensitive() {
        let mut t = table(vec![row("A", "X", 100.0), row("B", "X", 100.0)]);
        t.has_status = true;
        t.rows[0].status = "Need to BUY more".to_string();
        t.rows[1].status = "ok".to_string();

        let view = compose(&t, &select(&["X"]), 5.0);
        assert_eq!(view.restock.len(), 1);
        assert_eq!(view.restock[0].name, "A");
    }

    #[test]
    fn test_restock_falls_back_to_quantity_without_status() {
        let view = compose(&scenario(), &select(&["X", "Y"]), 5.0);
        // B (0) and C (3) are below the threshold; A (10) is not.
        let names: Vec<&str> = view.restock.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }
}
