//! Dashboard Summary
//!
//! Wire types for the `/dashboard/summary` payload and the client that
//! fetches it.
//!
//! ## Payload
//!
//! ```json
//! {
//!   "risks_by_rating": [{ "rating": "Critical", "count": 5 }],
//!   "control_maturity": [{ "control_name": "Access Review", "finding_count": 2 }],
//!   "finding_trend": [{ "date": "2024-03-01", "count": 4 }]
//! }
//! ```
//!
//! `finding_trend` is optional. Everything else is required, and counts are
//! unsigned, so a negative count is a malformed payload.

mod client;

pub use client::{FetchError, HttpSummaryClient, SummarySource, COMPLIANCE_STATUS_PATH};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of risks carrying one rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummaryEntry {
    /// Category label, e.g. "Critical" or "High"
    pub rating: String,
    pub count: u64,
}

/// Number of findings attached to one compliance control
///
/// Control names are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlMaturityEntry {
    pub control_name: String,
    pub finding_count: u64,
}

/// New findings per ingestion date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingTrendPoint {
    pub date: NaiveDate,
    pub count: u64,
}

/// Response body of the summary endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub risks_by_rating: Vec<RiskSummaryEntry>,
    pub control_maturity: Vec<ControlMaturityEntry>,
    #[serde(default)]
    pub finding_trend: Vec<FindingTrendPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let json = r#"{
            "risks_by_rating": [
                {"rating": "Critical", "count": 5},
                {"rating": "Low", "count": 12}
            ],
            "control_maturity": [
                {"control_name": "Access Review", "finding_count": 2}
            ],
            "finding_trend": [
                {"date": "2024-03-01", "count": 4}
            ]
        }"#;

        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.risks_by_rating.len(), 2);
        assert_eq!(summary.risks_by_rating[1].rating, "Low");
        assert_eq!(summary.control_maturity[0].finding_count, 2);
        assert_eq!(
            summary.finding_trend[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_finding_trend_is_optional() {
        let json = r#"{"risks_by_rating": [], "control_maturity": []}"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert!(summary.finding_trend.is_empty());
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let json = r#"{"risks_by_rating": []}"#;
        assert!(serde_json::from_str::<DashboardSummary>(json).is_err());
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let json = r#"{
            "risks_by_rating": [{"rating": "High", "count": -1}],
            "control_maturity": []
        }"#;
        assert!(serde_json::from_str::<DashboardSummary>(json).is_err());
    }

    #[test]
    fn test_order_is_preserved() {
        let json = r#"{
            "risks_by_rating": [],
            "control_maturity": [
                {"control_name": "Zeta", "finding_count": 1},
                {"control_name": "Alpha", "finding_count": 3},
                {"control_name": "Zeta", "finding_count": 0}
            ]
        }"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        let names: Vec<_> = summary
            .control_maturity
            .iter()
            .map(|c| c.control_name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Zeta"]);
    }
}
