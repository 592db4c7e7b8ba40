//! App Root Component

use leptos::*;

use crate::pages::DashboardSummary;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! { <DashboardSummary /> }
}
