//! Pages

pub mod dashboard;

pub use dashboard::DashboardSummary;
