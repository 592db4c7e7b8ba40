//! Risk Card Component
//!
//! One card per risk rating with its count.

use leptos::*;

/// Border and background classes for a rating
///
/// Exact, case-sensitive match on the rating label.
pub fn emphasis_classes(rating: &str) -> &'static str {
    match rating {
        "Critical" => "border-red-600 bg-red-50",
        "High" => "border-orange-600 bg-orange-50",
        _ => "border-green-600 bg-white",
    }
}

/// Card caption, e.g. "Critical Risks"
pub fn risk_label(rating: &str) -> String {
    format!("{} Risks", rating)
}

/// Risk card component
#[component]
pub fn RiskCard(
    #[prop(into)]
    rating: String,
    count: u64,
) -> impl IntoView {
    let class = format!(
        "p-6 shadow-xl rounded-lg border-l-4 {}",
        emphasis_classes(&rating)
    );

    view! {
        <div class=class>
            <p class="text-sm text-gray-500">{risk_label(&rating)}</p>
            <p class="text-4xl font-extrabold text-gray-900 mt-1">{count}</p>
        </div>
    }
}
