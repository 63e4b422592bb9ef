//! Chart Plotter Module
//! Bar charts for the overview tab using egui_plot.

use crate::view::DashboardView;
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, GridMark, Plot};

/// Shade used for the stock-level bars.
pub const BAR_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue

/// Color palette for categories
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Draws the overview charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Horizontal bar chart of the top items by quantity, largest on top.
    pub fn draw_top_quantity_chart(ui: &mut egui::Ui, view: &DashboardView) {
        let items = &view.top_by_quantity;
        if items.is_empty() {
            ui.label(RichText::new("No data").color(Color32::GRAY));
            return;
        }

        let n = items.len();
        // Reversed so the largest quantity lands at the top of the plot.
        let labels: Vec<String> = items.iter().rev().map(|r| r.name.clone()).collect();
        let max_qty = items[0].quantity.max(1.0);

        let bars: Vec<Bar> = items
            .iter()
            .rev()
            .enumerate()
            .map(|(i, row)| {
                let shade = 0.35 + 0.65 * (row.quantity / max_qty) as f32;
                Bar::new(i as f64, row.quantity)
                    .name(&row.name)
                    .width(0.6)
                    .fill(BAR_COLOR.gamma_multiply(shade))
            })
            .collect();

        Plot::new("top_quantity")
            .height(320.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Quantity")
            .y_grid_spacer(move |_input| {
                (0..n)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .y_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).horizontal());
            });
    }

    /// Vertical bar chart of row counts per category.
    pub fn draw_distribution_chart(ui: &mut egui::Ui, view: &DashboardView) {
        let distribution = &view.category_distribution;
        if distribution.is_empty() {
            ui.label(RichText::new("No category data").color(Color32::GRAY));
            return;
        }

        let n = distribution.len();
        let labels: Vec<String> = distribution.iter().map(|(cat, _)| cat.clone()).collect();

        let bars: Vec<Bar> = distribution
            .iter()
            .enumerate()
            .map(|(i, (cat, count))| {
                Bar::new(i as f64, *count as f64)
                    .name(cat)
                    .width(0.6)
                    .fill(PALETTE[i % PALETTE.len()])
            })
            .collect();

        Plot::new("category_distribution")
            .height(320.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .y_axis_label("Items")
            .x_grid_spacer(move |_input| {
                (0..n)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }
}
