//! State Management
//!
//! Dashboard payload types and the reactive view state.

pub mod dashboard;

pub use dashboard::{ControlData, DashboardState, DashboardSummary, LoadStatus, MountGuard};
