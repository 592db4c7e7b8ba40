//! Dashboard View
//!
//! The view owns a single fetch of the dashboard summary and the state that
//! fetch resolves into.
//!
//! ## Lifecycle
//!
//! ```text
//! mount ──> Loading ──┬──> Loaded(summary)
//!                     └──> Error(message)
//! ```
//!
//! Both outcomes are terminal. Unmounting before the fetch resolves aborts
//! the fetch and freezes the state at `Loading`.

mod render;

pub use render::{
    control_rows, render, render_text, ControlRow, DashboardLayout, RenderedView, RiskCard,
    TextStyle, CONTROL_SECTION_TITLE, DASHBOARD_TITLE, RISK_SECTION_TITLE, TREND_FOOTER,
};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::summary::{ControlMaturityEntry, DashboardSummary, FetchError, RiskSummaryEntry, SummarySource};

/// Shown while the fetch is pending
pub const LOADING_MESSAGE: &str = "Loading GRC Data...";

/// Shown for every fetch failure
pub const FETCH_ERROR_MESSAGE: &str =
    "Failed to fetch dashboard data. Check Docker containers (API/DB) and API URL.";

/// State of the dashboard view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Fetch in flight
    #[default]
    Loading,
    /// Fetch succeeded
    Loaded(DashboardSummary),
    /// Fetch failed; holds the user-facing message
    Error(String),
}

impl ViewState {
    /// Initial state of a freshly mounted view
    pub fn new() -> Self {
        Self::Loading
    }

    /// Whether the state can no longer change
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Apply the outcome of the fetch
    ///
    /// Only the first outcome is applied. Returns whether the state changed.
    pub fn resolve(&mut self, result: Result<DashboardSummary, FetchError>) -> bool {
        if self.is_terminal() {
            return false;
        }

        *self = match result {
            Ok(summary) => {
                tracing::info!(
                    risk_ratings = summary.risks_by_rating.len(),
                    controls = summary.control_maturity.len(),
                    trend_points = summary.finding_trend.len(),
                    "Dashboard data loaded"
                );
                Self::Loaded(summary)
            }
            Err(e) => {
                tracing::error!(error = %e, "API fetch error");
                Self::Error(FETCH_ERROR_MESSAGE.to_string())
            }
        };

        true
    }

    /// Risk entries, empty unless loaded
    pub fn risks(&self) -> &[RiskSummaryEntry] {
        match self {
            Self::Loaded(summary) => &summary.risks_by_rating,
            _ => &[],
        }
    }

    /// Control entries, empty unless loaded
    pub fn controls(&self) -> &[ControlMaturityEntry] {
        match self {
            Self::Loaded(summary) => &summary.control_maturity,
            _ => &[],
        }
    }

    /// Error message, if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Visual emphasis of a risk card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    Red,
    Orange,
    Green,
}

impl Emphasis {
    /// Fixed rating lookup. Exact, case-sensitive match.
    pub fn for_rating(rating: &str) -> Self {
        match rating {
            "Critical" => Self::Red,
            "High" => Self::Orange,
            _ => Self::Green,
        }
    }
}

/// A mounted dashboard view with its single in-flight fetch
pub struct DashboardView {
    sender: Arc<watch::Sender<ViewState>>,
    receiver: watch::Receiver<ViewState>,
    mounted: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl DashboardView {
    /// Mount the view and start the fetch
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(source: Arc<dyn SummarySource>) -> Self {
        let (sender, receiver) = watch::channel(ViewState::new());
        let sender = Arc::new(sender);
        let mounted = Arc::new(AtomicBool::new(true));

        let task = {
            let sender = Arc::clone(&sender);
            let mounted = Arc::clone(&mounted);
            tokio::spawn(async move {
                tracing::debug!(endpoint = source.endpoint(), "Fetching dashboard summary");
                let result = source.fetch_summary().await;

                // The flag is only flipped under the channel's write lock, so
                // an unmount either happens before this write or after it.
                sender.send_if_modified(|state| {
                    if mounted.load(Ordering::SeqCst) {
                        state.resolve(result)
                    } else {
                        tracing::debug!("View unmounted, dropping fetch result");
                        false
                    }
                });
            })
        };

        Self {
            sender,
            receiver,
            mounted,
            task: Some(task),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ViewState {
        self.receiver.borrow().clone()
    }

    /// Render the current state
    pub fn render(&self) -> RenderedView {
        render(&self.receiver.borrow())
    }

    /// Whether the view is still mounted
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Wait for the fetch to resolve
    ///
    /// Returns immediately with the current state once unmounted.
    pub async fn wait(&mut self) -> ViewState {
        if self.is_mounted() {
            // Only fails if the sender is gone, which cannot happen while
            // `self` holds it.
            let _ = self.receiver.wait_for(ViewState::is_terminal).await;
        }
        self.state()
    }

    /// Tear the view down, cancelling an unresolved fetch
    pub fn unmount(&mut self) {
        let mounted = Arc::clone(&self.mounted);
        self.sender.send_if_modified(|_| {
            mounted.store(false, Ordering::SeqCst);
            false
        });

        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for DashboardView {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use tokio::sync::Notify;

    fn sample_summary() -> DashboardSummary {
        DashboardSummary {
            risks_by_rating: vec![RiskSummaryEntry {
                rating: "Critical".to_string(),
                count: 5,
            }],
            control_maturity: vec![ControlMaturityEntry {
                control_name: "Access Review".to_string(),
                finding_count: 2,
            }],
            finding_trend: Vec::new(),
        }
    }

    /// Source that answers once `release` is notified, counting calls
    struct GatedSource {
        release: Notify,
        calls: AtomicUsize,
        fail: bool,
    }

    impl GatedSource {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                release: Notify::new(),
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl SummarySource for GatedSource {
        fn endpoint(&self) -> &str {
            "test://gated"
        }

        async fn fetch_summary(&self) -> Result<DashboardSummary, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            if self.fail {
                Err(FetchError::Unavailable)
            } else {
                Ok(sample_summary())
            }
        }
    }

    #[test]
    fn test_new_state_is_loading() {
        let state = ViewState::new();
        assert_eq!(state, ViewState::Loading);
        assert!(!state.is_terminal());
        assert!(state.risks().is_empty());
        assert!(state.controls().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_resolve_success() {
        let mut state = ViewState::new();
        assert!(state.resolve(Ok(sample_summary())));
        assert!(state.is_terminal());
        assert_eq!(state.risks().len(), 1);
        assert_eq!(state.controls()[0].finding_count, 2);
    }

    #[test]
    fn test_resolve_failure_uses_fixed_message() {
        for err in [
            FetchError::Unavailable,
            FetchError::Timeout,
            FetchError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            },
        ] {
            let mut state = ViewState::new();
            assert!(state.resolve(Err(err)));
            assert_eq!(state.error(), Some(FETCH_ERROR_MESSAGE));
            assert!(state.risks().is_empty());
        }
    }

    #[test]
    fn test_resolve_only_once() {
        let mut state = ViewState::new();
        state.resolve(Err(FetchError::Timeout));

        assert!(!state.resolve(Ok(sample_summary())));
        assert_eq!(state.error(), Some(FETCH_ERROR_MESSAGE));

        let mut state = ViewState::new();
        state.resolve(Ok(sample_summary()));
        assert!(!state.resolve(Err(FetchError::Timeout)));
        assert!(matches!(state, ViewState::Loaded(_)));
    }

    #[test]
    fn test_emphasis_lookup() {
        assert_eq!(Emphasis::for_rating("Critical"), Emphasis::Red);
        assert_eq!(Emphasis::for_rating("High"), Emphasis::Orange);
        assert_eq!(Emphasis::for_rating("Medium"), Emphasis::Green);
        assert_eq!(Emphasis::for_rating("Low"), Emphasis::Green);
        assert_eq!(Emphasis::for_rating(""), Emphasis::Green);
        assert_eq!(Emphasis::for_rating("critical"), Emphasis::Green);
        assert_eq!(Emphasis::for_rating("HIGH"), Emphasis::Green);
    }

    #[tokio::test]
    async fn test_mount_loads_once() {
        let source = GatedSource::new(false);
        let mut view = DashboardView::mount(source.clone());

        assert_eq!(view.state(), ViewState::Loading);
        assert_eq!(
            view.render(),
            RenderedView::Loading(LOADING_MESSAGE.to_string())
        );

        source.release.notify_one();
        let state = view.wait().await;

        assert!(matches!(state, ViewState::Loaded(_)));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_mount_failure() {
        let source = GatedSource::new(true);
        let mut view = DashboardView::mount(source.clone());

        source.release.notify_one();
        let state = view.wait().await;

        assert_eq!(state, ViewState::Error(FETCH_ERROR_MESSAGE.to_string()));
        assert_eq!(
            view.render(),
            RenderedView::Error(format!("Error: {}", FETCH_ERROR_MESSAGE))
        );
    }

    #[tokio::test]
    async fn test_unmount_before_resolve() {
        let source = GatedSource::new(false);
        let mut view = DashboardView::mount(source.clone());

        // Let the task start its fetch
        tokio::time::sleep(Duration::from_millis(20)).await;
        view.unmount();
        source.release.notify_one();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(!view.is_mounted());
        assert_eq!(view.wait().await, ViewState::Loading);
    }

    #[tokio::test]
    async fn test_unmount_after_resolve_keeps_state() {
        let source = GatedSource::new(false);
        let mut view = DashboardView::mount(source.clone());

        source.release.notify_one();
        view.wait().await;
        view.unmount();

        assert!(matches!(view.state(), ViewState::Loaded(_)));
    }
}
