//! Dashboard State
//!
//! Reactive state for the dashboard view using Leptos signals.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

/// Shown for every fetch failure
pub const FETCH_ERROR_MESSAGE: &str =
    "Failed to fetch dashboard data. Check Docker containers (API/DB) and API URL.";

/// Risk count for one rating
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct RiskData {
    pub rating: String,
    pub count: u64,
}

/// Finding count for one control
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct ControlData {
    pub control_name: String,
    pub finding_count: u64,
}

/// New findings on one ingestion date
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct TrendData {
    pub date: String,
    pub count: u64,
}

/// Response body of `/dashboard/summary`
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct DashboardSummary {
    pub risks_by_rating: Vec<RiskData>,
    pub control_maturity: Vec<ControlData>,
    #[serde(default)]
    pub finding_trend: Vec<TrendData>,
}

/// Where the single fetch stands
#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed(String),
}

/// Tracks whether the owning component is still mounted
///
/// Clones share the flag. Once unmounted it stays unmounted.
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn unmount(&self) {
        self.0.set(false);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// View state of the dashboard
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub risks: RwSignal<Vec<RiskData>>,
    pub controls: RwSignal<Vec<ControlData>>,
    pub status: RwSignal<LoadStatus>,
}

impl DashboardState {
    /// Fresh state: empty lists, loading
    pub fn new() -> Self {
        Self {
            risks: create_rw_signal(Vec::new()),
            controls: create_rw_signal(Vec::new()),
            status: create_rw_signal(LoadStatus::Loading),
        }
    }

    /// Apply the fetch outcome; only the first one counts
    pub fn resolve<E>(&self, result: Result<DashboardSummary, E>) {
        if self.status.get_untracked() != LoadStatus::Loading {
            return;
        }

        match result {
            Ok(summary) => {
                self.risks.set(summary.risks_by_rating);
                self.controls.set(summary.control_maturity);
                self.status.set(LoadStatus::Loaded);
            }
            Err(_) => {
                self.status.set(LoadStatus::Failed(FETCH_ERROR_MESSAGE.to_string()));
            }
        }
    }

    /// Apply the fetch outcome unless the component is already gone
    ///
    /// The signals belong to the unmounted component, so a late result must
    /// not touch them. Returns whether the result was applied.
    pub fn resolve_if_mounted<E>(
        &self,
        guard: &MountGuard,
        result: Result<DashboardSummary, E>,
    ) -> bool {
        if !guard.is_mounted() {
            return false;
        }
        self.resolve(result);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> DashboardSummary {
        serde_json::from_str(
            r#"{
                "risks_by_rating": [{"rating": "Critical", "count": 5}],
                "control_maturity": [{"control_name": "Access Review", "finding_count": 2}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_summary_without_trend() {
        let summary = summary();
        assert_eq!(summary.risks_by_rating[0].count, 5);
        assert!(summary.finding_trend.is_empty());
    }

    #[test]
    fn test_resolve_success() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        state.resolve::<String>(Ok(summary()));

        assert_eq!(state.status.get_untracked(), LoadStatus::Loaded);
        assert_eq!(state.risks.get_untracked().len(), 1);
        assert_eq!(state.controls.get_untracked()[0].control_name, "Access Review");
        runtime.dispose();
    }

    #[test]
    fn test_resolve_failure_then_ignored() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        state.resolve(Err("Network error: connection refused"));
        state.resolve::<&str>(Ok(summary()));

        assert_eq!(
            state.status.get_untracked(),
            LoadStatus::Failed(FETCH_ERROR_MESSAGE.to_string())
        );
        assert!(state.risks.get_untracked().is_empty());
        runtime.dispose();
    }

    #[test]
    fn test_resolve_while_mounted() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        let guard = MountGuard::new();

        assert!(state.resolve_if_mounted::<String>(&guard, Ok(summary())));
        assert_eq!(state.status.get_untracked(), LoadStatus::Loaded);
        runtime.dispose();
    }

    #[test]
    fn test_late_result_dropped_after_unmount() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        let guard = MountGuard::new();

        guard.clone().unmount();

        assert!(!guard.is_mounted());
        assert!(!state.resolve_if_mounted::<String>(&guard, Ok(summary())));
        assert!(!state.resolve_if_mounted(&guard, Err("Network error")));
        assert_eq!(state.status.get_untracked(), LoadStatus::Loading);
        assert!(state.risks.get_untracked().is_empty());
        runtime.dispose();
    }

    #[test]
    fn test_cleanup_unmounts_guard() {
        let runtime = create_runtime();
        let guard = MountGuard::new();
        let remount = create_rw_signal(0);

        // Cleanups registered by an effect run when it re-runs, the same
        // way a component's run when it is torn down.
        create_effect({
            let guard = guard.clone();
            move |_| {
                remount.get();
                let guard = guard.clone();
                on_cleanup(move || guard.unmount());
            }
        });
        assert!(guard.is_mounted());

        remount.set(1);
        assert!(!guard.is_mounted());

        let state = DashboardState::new();
        assert!(!state.resolve_if_mounted::<String>(&guard, Ok(summary())));
        assert_eq!(state.status.get_untracked(), LoadStatus::Loading);
        runtime.dispose();
    }
}
