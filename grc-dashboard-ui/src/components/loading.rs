//! Loading Component
//!
//! Full-page loading and error states.

use leptos::*;

/// Shown while the summary fetch is pending
pub const LOADING_MESSAGE: &str = "Loading GRC Data...";

/// Full-page loading message
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="text-xl p-10 text-gray-700">{LOADING_MESSAGE}</div>
    }
}

/// Full-page error message
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="text-xl p-10 text-red-600">"Error: " {message}</div>
    }
}
