//! API Client

mod client;

pub use client::{fetch_dashboard_summary, get_api_url};
