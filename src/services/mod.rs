pub mod dashboard_service;
pub mod export_service;

pub use dashboard_service::{DashboardError, DashboardService};
pub use export_service::{ExportError, ExportService};
