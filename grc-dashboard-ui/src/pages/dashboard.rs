//! Dashboard Page
//!
//! Risk status cards and the control maturity list, fetched once on mount.

use leptos::*;

use crate::api;
use crate::components::{ControlList, ErrorMessage, Loading, RiskCard};
use crate::state::{DashboardState, LoadStatus, MountGuard};

/// Dashboard summary page
#[component]
pub fn DashboardSummary() -> impl IntoView {
    let state = DashboardState::new();

    // Cleared on unmount so a late response is dropped instead of
    // writing to disposed signals.
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.unmount()
    });

    // Fetch once on mount
    create_effect(move |_| {
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::fetch_dashboard_summary(&api::get_api_url()).await;

            if let Err(e) = &result {
                if guard.is_mounted() {
                    web_sys::console::error_1(&format!("API Fetch Error: {}", e).into());
                }
            }
            state.resolve_if_mounted(&guard, result);
        });
    });

    move || match state.status.get() {
        LoadStatus::Loading => view! { <Loading /> }.into_view(),
        LoadStatus::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
        LoadStatus::Loaded => view! { <Overview state=state /> }.into_view(),
    }
}

/// Populated dashboard
#[component]
fn Overview(state: DashboardState) -> impl IntoView {
    view! {
        <main class="min-h-screen p-8 bg-gray-50">
            <h1 class="text-3xl font-bold mb-8 text-indigo-800 border-b pb-2">
                "Project GRC-MMAP Dashboard Overview"
            </h1>

            // Risk status cards
            <h2 class="text-2xl font-semibold mb-4 text-gray-700">"Risk Status by Rating"</h2>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-10">
                // Keyed by position as well, in case a rating repeats
                <For
                    each=move || state.risks.get().into_iter().enumerate()
                    key=|(index, risk)| (*index, risk.rating.clone())
                    children=|(_, risk)| view! { <RiskCard rating=risk.rating count=risk.count /> }
                />
            </div>

            // Control maturity / compliance list
            <h2 class="text-2xl font-semibold mb-4 text-gray-700">
                "Control Maturity Status (Compliance Footprint)"
            </h2>
            <ControlList controls=state.controls />

            <div class="mt-8 text-center text-sm text-gray-500">
                "*Finding Trend data loaded successfully (ready for chart visualization)*"
            </div>
        </main>
    }
}
