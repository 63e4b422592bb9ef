//! StockLens - Inventory Monitoring Dashboard
//!
//! Pulls a published spreadsheet export, derives summary metrics, and
//! displays filterable charts and tables.

mod config;
mod data;
mod gui;
mod view;

use eframe::egui;
use gui::StockLensApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1000.0, 640.0])
            .with_title("StockLens"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "StockLens",
        options,
        Box::new(|cc| Ok(Box::new(StockLensApp::new(cc)))),
    )
}
