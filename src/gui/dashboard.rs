//! Dashboard Panel
//! Central surface: KPI cards, tab strip, and the three tab views.

use crate::gui::charts::ChartPlotter;
use crate::view::DashboardView;
use egui::{Color32, ProgressBar, RichText, ScrollArea};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Items,
    Restock,
}

/// Central dashboard with the KPI row and the three tab views.
pub struct DashboardPanel {
    active_tab: Tab,
}

impl Default for DashboardPanel {
    fn default() -> Self {
        Self {
            active_tab: Tab::Overview,
        }
    }
}

impl DashboardPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the dashboard for one composed view
    pub fn show(&mut self, ui: &mut egui::Ui, view: &DashboardView) {
        ui.label(RichText::new("📦 Inventory Dashboard").size(24.0).strong());
        ui.label(format!("Tracking {} items in total", view.source_rows));
        ui.separator();
        ui.add_space(8.0);

        Self::draw_kpi_row(ui, view);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.active_tab, Tab::Overview, "📈 Overview");
            ui.selectable_value(&mut self.active_tab, Tab::Items, "📋 All Items");
            ui.selectable_value(
                &mut self.active_tab,
                Tab::Restock,
                format!("🛒 Restock ({})", view.restock.len()),
            );
        });
        ui.separator();
        ui.add_space(8.0);

        match self.active_tab {
            Tab::Overview => Self::draw_overview(ui, view),
            Tab::Items => Self::draw_items_table(ui, view),
            Tab::Restock => Self::draw_restock(ui, view),
        }
    }

    fn draw_kpi_row(ui: &mut egui::Ui, view: &DashboardView) {
        let kpis = &view.kpis;
        let low_stock_color = if kpis.low_stock_count > 0 {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::from_rgb(40, 167, 69)
        };

        ui.columns(4, |columns| {
            Self::metric_card(
                &mut columns[0],
                "📦 Total Units",
                &format_thousands(kpis.total_quantity as i64),
                Color32::from_rgb(52, 152, 219),
            );
            Self::metric_card(
                &mut columns[1],
                "⚠ Low Stock",
                &format!("{} items", kpis.low_stock_count),
                low_stock_color,
            );
            if let Some(value) = kpis.total_value {
                Self::metric_card(
                    &mut columns[2],
                    "💰 Inventory Value",
                    &format!("฿{}", format_thousands(value.round() as i64)),
                    Color32::from_rgb(243, 156, 18),
                );
            }
            Self::metric_card(
                &mut columns[3],
                "📊 Categories",
                &kpis.distinct_categories.to_string(),
                Color32::from_rgb(155, 89, 182),
            );
        });
    }

    fn metric_card(ui: &mut egui::Ui, title: &str, value: &str, accent: Color32) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(title).size(12.0).color(Color32::GRAY));
                    ui.label(RichText::new(value).size(20.0).strong().color(accent));
                });
            });
    }

    fn draw_overview(ui: &mut egui::Ui, view: &DashboardView) {
        ui.columns(2, |columns| {
            columns[0].label(RichText::new("Stock Levels (Top 10)").size(14.0).strong());
            ChartPlotter::draw_top_quantity_chart(&mut columns[0], view);

            columns[1].label(RichText::new("Category Share").size(14.0).strong());
            ChartPlotter::draw_distribution_chart(&mut columns[1], view);
        });
    }

    fn draw_items_table(ui: &mut egui::Ui, view: &DashboardView) {
        ui.label(RichText::new("📦 All Stock").size(16.0).strong());
        ui.add_space(5.0);

        let max_quantity = view.max_quantity.max(1.0);

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            egui::Grid::new("items_table")
                .striped(true)
                .min_col_width(90.0)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Item").strong());
                    ui.label(RichText::new("Category").strong());
                    ui.label(RichText::new("Stock").strong());
                    if view.has_price {
                        ui.label(RichText::new("Price/Unit").strong());
                    }
                    if view.has_status {
                        ui.label(RichText::new("Status").strong());
                    }
                    ui.end_row();

                    for row in &view.filtered {
                        ui.label(&row.name);
                        ui.label(&row.category);
                        ui.add(
                            ProgressBar::new((row.quantity / max_quantity) as f32)
                                .desired_width(160.0)
                                .text(format!("{}", row.quantity as i64)),
                        );
                        if view.has_price {
                            ui.label(format!("฿{}", format_thousands(row.unit_price as i64)));
                        }
                        if view.has_status {
                            ui.label(&row.status);
                        }
                        ui.end_row();
                    }
                });
        });
    }

    fn draw_restock(ui: &mut egui::Ui, view: &DashboardView) {
        ui.label(RichText::new("🛒 Needs Attention").size(16.0).strong());
        ui.add_space(5.0);

        if view.restock.is_empty() {
            ui.label(
                RichText::new("✅ Nothing needs restocking right now")
                    .color(Color32::from_rgb(40, 167, 69)),
            );
            return;
        }

        ui.label(
            RichText::new(format!("⚠ {} items need restocking", view.restock.len()))
                .color(Color32::from_rgb(243, 156, 18)),
        );
        ui.add_space(5.0);

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for (i, row) in view.restock.iter().enumerate() {
                let title = format!("🔴 {} ({} left)", row.name, row.quantity as i64);
                egui::CollapsingHeader::new(title)
                    .id_salt(i)
                    .show(ui, |ui| {
                        let category = if row.category.is_empty() {
                            "-"
                        } else {
                            row.category.as_str()
                        };
                        ui.label(format!("Category: {}", category));

                        let status = if view.has_status && !row.status.is_empty() {
                            row.status.as_str()
                        } else {
                            "Low stock"
                        };
                        ui.label(format!("Status: {}", status));

                        if view.has_price {
                            ui.label(format!(
                                "Estimated price: ฿{}",
                                format_thousands(row.unit_price as i64)
                            ));
                        }
                    });
            }
        });
    }
}

/// Group digits with commas, e.g. 12345 -> "12,345".
fn format_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
