//! HTTP API Client
//!
//! Fetches the dashboard summary from the GRC-MMAP API.

use gloo_net::http::Request;

use crate::state::DashboardSummary;

/// Summary endpoint of the locally running API
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/dashboard/summary";

/// Local storage key that overrides the endpoint
const API_URL_KEY: &str = "grc_dashboard_api_url";

/// Get the summary URL from local storage or use default
pub fn get_api_url() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Fetch the dashboard summary
///
/// The error string describes the cause for the console only.
pub async fn fetch_dashboard_summary(url: &str) -> Result<DashboardSummary, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("HTTP {}: {}", response.status(), body));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}
