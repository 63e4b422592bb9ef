//! View module - derived metrics and display structures

mod composer;

pub use composer::{compose, DashboardView, Kpis, RESTOCK_TRIGGERS, TOP_N};
