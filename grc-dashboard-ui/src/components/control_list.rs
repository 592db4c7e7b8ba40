//! Control List Component
//!
//! Control maturity rows in response order.

use leptos::*;

use crate::state::ControlData;

/// Finding count caption, e.g. "2 Findings Attached"
pub fn findings_label(finding_count: u64) -> String {
    format!("{} Findings Attached", finding_count)
}

/// Control maturity list
///
/// Rows are keyed by position; control names may repeat.
#[component]
pub fn ControlList(
    #[prop(into)]
    controls: Signal<Vec<ControlData>>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow-xl rounded-lg p-6">
            <ul class="space-y-3">
                <For
                    each=move || controls.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=|(_, control)| view! {
                        <li class="flex justify-between items-center border-b pb-2">
                            <span class="font-medium text-gray-800">{control.control_name}</span>
                            <span class="text-sm text-indigo-600">
                                {findings_label(control.finding_count)}
                            </span>
                        </li>
                    }
                />
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_findings_label_is_verbatim() {
        assert_eq!(findings_label(0), "0 Findings Attached");
        assert_eq!(findings_label(2), "2 Findings Attached");
        assert_eq!(findings_label(1_000_001), "1000001 Findings Attached");
    }
}
