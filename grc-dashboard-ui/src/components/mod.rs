//! UI Components
//!
//! Presentational pieces of the dashboard.

pub mod control_list;
pub mod loading;
pub mod risk_card;

pub use control_list::ControlList;
pub use loading::{ErrorMessage, Loading};
pub use risk_card::RiskCard;
