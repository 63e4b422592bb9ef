//! GUI module - User interface components

mod app;
mod charts;
mod dashboard;
mod sidebar;

pub use app::StockLensApp;
pub use dashboard::DashboardPanel;
pub use sidebar::Sidebar;
