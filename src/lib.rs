//! # GRC Dashboard
//!
//! Risk and compliance overview for the GRC-MMAP API: fetches the dashboard
//! summary once and renders risk counts by rating plus per-control finding
//! counts.
//!
//! ## Modules
//!
//! - [`summary`]: Payload types and the HTTP client for the summary endpoint
//! - [`view`]: View state machine, single-fetch lifecycle and rendering
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use grc_dashboard::{render_text, DashboardView, HttpSummaryClient, TextStyle};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpSummaryClient::new(
//!         "http://127.0.0.1:8000/dashboard/summary",
//!         Duration::from_secs(30),
//!     )?;
//!
//!     let mut view = DashboardView::mount(Arc::new(client));
//!     let state = view.wait().await;
//!
//!     println!("{}", render_text(&state, TextStyle { color: true }));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod summary;
pub mod view;

pub use config::{Config, ConfigError, DashboardConfig, LogFormat, LoggingConfig};

pub use summary::{
    ControlMaturityEntry, DashboardSummary, FetchError, FindingTrendPoint, HttpSummaryClient,
    RiskSummaryEntry, SummarySource,
};

pub use view::{
    render, render_text, DashboardView, Emphasis, RenderedView, TextStyle, ViewState,
    FETCH_ERROR_MESSAGE, LOADING_MESSAGE,
};
