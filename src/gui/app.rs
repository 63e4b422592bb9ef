//! StockLens Main Application
//! Main window wiring the sidebar filter to the dashboard surface.

use crate::config::DashboardConfig;
use crate::data::{InventoryTable, SheetLoader};
use crate::gui::{DashboardPanel, Sidebar};
use crate::view;
use egui::{Color32, RichText, SidePanel};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Fetch result from the background thread
enum LoadResult {
    Complete(InventoryTable),
    Error(String),
}

/// Main application window.
pub struct StockLensApp {
    config: DashboardConfig,
    loader: SheetLoader,
    sidebar: Sidebar,
    dashboard: DashboardPanel,

    // Async sheet loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
    load_error: Option<String>,
}

impl StockLensApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = DashboardConfig::default();
        Self {
            loader: SheetLoader::new(config.clone()),
            config,
            sidebar: Sidebar::new(),
            dashboard: DashboardPanel::new(),
            load_rx: None,
            is_loading: false,
            load_error: None,
        }
    }

    /// Kick off a fetch on a background thread.
    fn start_fetch(&mut self) {
        if self.is_loading {
            return; // Already loading
        }
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        let config = self.config.clone();
        thread::spawn(move || {
            let result = match SheetLoader::fetch_table(&config) {
                Ok(table) => LoadResult::Complete(table),
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for fetch results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Complete(table) => {
                        self.sidebar.update_categories(table.categories());
                        self.loader.install(table);
                        self.load_error = None;
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        log::error!("sheet load failed: {}", error);
                        self.loader.clear();
                        self.load_error = Some(error);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Full-window replacement shown when the sheet could not be loaded.
    fn draw_error_surface(ctx: &egui::Context, detail: &str) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.label(
                    RichText::new("⚠ Could not load data")
                        .size(24.0)
                        .strong()
                        .color(Color32::from_rgb(220, 53, 69)),
                );
                ui.add_space(10.0);
                ui.label("Check the sheet link in the dashboard configuration.");
                ui.label("The sheet must be published to the web as CSV (File > Share > Publish to web).");
                ui.add_space(15.0);
                ui.label(RichText::new(detail).size(11.0).color(Color32::GRAY));
            });
        });
    }

    fn draw_loading_surface(ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.add(egui::Spinner::new().size(32.0));
                ui.add_space(10.0);
                ui.label("Fetching inventory data...");
            });
        });
    }
}

impl eframe::App for StockLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // First load, and TTL-driven refreshes afterwards. A failed load is
        // terminal: the error surface stays up, nothing re-arms the fetch.
        if !self.is_loading && self.load_error.is_none() && !self.loader.is_fresh() {
            self.start_fetch();
        }

        if self.is_loading {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(self.config.cache_ttl);
        }

        if let Some(error) = self.load_error.clone() {
            Self::draw_error_surface(ctx, &error);
            return;
        }

        if self.loader.table().is_none() {
            Self::draw_loading_surface(ctx);
            return;
        }

        // Sidebar first so this frame's filter edits apply to the view.
        SidePanel::left("filter_panel")
            .min_width(240.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.sidebar.show(ui);
                });
            });

        let view = self.loader.table().map(|table| {
            view::compose(
                table,
                &self.sidebar.selection(),
                self.config.low_stock_threshold,
            )
        });

        if let Some(view) = view {
            egui::CentralPanel::default().show(ctx, |ui| {
                self.dashboard.show(ui, &view);
            });
        }
    }
}
