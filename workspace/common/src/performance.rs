use serde::{Deserialize, Serialize};

use crate::district::DistrictRef;
use crate::metric::Metric;
use crate::status::Status;

/// A year/month pair as embedded in summary and comparison payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub display: Option<String>,
}

/// Raw metric values for one district and month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValues {
    pub person_days: i64,
    pub households_worked: i64,
    pub total_wages: f64,
    pub material_expenditure: f64,
}

impl MetricValues {
    pub fn value_of(&self, metric: Metric) -> f64 {
        match metric {
            Metric::PersonDays => self.person_days as f64,
            Metric::HouseholdsWorked => self.households_worked as f64,
            Metric::TotalWages => self.total_wages,
            Metric::MaterialExpenditure => self.material_expenditure,
        }
    }
}

/// Per-metric status block. The backend spells these keys inconsistently
/// (`personDaysStatus`, `householdsStatus`, `wagesStatus`), so each field
/// accepts the legacy alias alongside the metric key; anything absent reads
/// as neutral.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSet {
    #[serde(default, alias = "personDaysStatus")]
    pub person_days: Option<Status>,
    #[serde(default, alias = "householdsStatus")]
    pub households_worked: Option<Status>,
    #[serde(default, alias = "wagesStatus")]
    pub total_wages: Option<Status>,
    #[serde(default, alias = "materialStatus")]
    pub material_expenditure: Option<Status>,
}

impl StatusSet {
    pub fn status_of(&self, metric: Metric) -> Status {
        let status = match metric {
            Metric::PersonDays => self.person_days,
            Metric::HouseholdsWorked => self.households_worked,
            Metric::TotalWages => self.total_wages,
            Metric::MaterialExpenditure => self.material_expenditure,
        };
        status.unwrap_or_default()
    }
}

/// Month-over-month percentage changes, same alias treatment as [`StatusSet`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSet {
    #[serde(default, alias = "personDaysChange")]
    pub person_days: Option<f64>,
    #[serde(default, alias = "householdsChange")]
    pub households_worked: Option<f64>,
    #[serde(default, alias = "wagesChange")]
    pub total_wages: Option<f64>,
    #[serde(default, alias = "materialChange")]
    pub material_expenditure: Option<f64>,
}

impl ChangeSet {
    pub fn change_of(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::PersonDays => self.person_days,
            Metric::HouseholdsWorked => self.households_worked,
            Metric::TotalWages => self.total_wages,
            Metric::MaterialExpenditure => self.material_expenditure,
        }
    }
}

/// Monthly performance summary for one district, with server-computed status
/// classifications and the optional comparison to the previous month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub district: DistrictRef,
    pub period: Period,
    pub metrics: MetricValues,
    #[serde(default)]
    pub status: StatusSet,
    #[serde(default)]
    pub comparison_to_previous_month: Option<ChangeSet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> &'static str {
        r#"{
            "district": {"id": 1, "name": "Ballari", "state": "Karnataka", "code": "KA-BL"},
            "period": {"year": 2024, "month": 10, "display": "October 2024"},
            "metrics": {
                "personDays": 1234567,
                "householdsWorked": 45678,
                "totalWages": 23456789.5,
                "materialExpenditure": 3456789.25
            },
            "status": {
                "personDaysStatus": "good",
                "householdsStatus": "average",
                "wagesStatus": "poor"
            },
            "comparisonToPreviousMonth": {
                "personDaysChange": 12.5,
                "householdsChange": -3.25,
                "wagesChange": 0.0
            }
        }"#
    }

    #[test]
    fn test_summary_deserializes_with_legacy_keys() {
        let summary: PerformanceSummary =
            serde_json::from_str(sample_summary()).expect("valid summary payload");

        assert_eq!(summary.district.name, "Ballari");
        assert_eq!(summary.metrics.person_days, 1234567);
        assert_eq!(summary.status.status_of(Metric::PersonDays), Status::Good);
        assert_eq!(
            summary.status.status_of(Metric::HouseholdsWorked),
            Status::Average
        );
        assert_eq!(summary.status.status_of(Metric::TotalWages), Status::Poor);
    }

    #[test]
    fn test_missing_status_reads_as_neutral() {
        let summary: PerformanceSummary =
            serde_json::from_str(sample_summary()).expect("valid summary payload");

        assert_eq!(
            summary.status.status_of(Metric::MaterialExpenditure),
            Status::Neutral
        );
    }

    #[test]
    fn test_missing_change_reads_as_none() {
        let summary: PerformanceSummary =
            serde_json::from_str(sample_summary()).expect("valid summary payload");
        let changes = summary
            .comparison_to_previous_month
            .expect("comparison present");

        assert_eq!(changes.change_of(Metric::PersonDays), Some(12.5));
        assert_eq!(changes.change_of(Metric::MaterialExpenditure), None);
    }

    #[test]
    fn test_summary_without_comparison() {
        let payload = r#"{
            "district": {"id": 1, "name": "Ballari", "state": "Karnataka"},
            "period": {"year": 2024, "month": 1},
            "metrics": {"personDays": 10, "householdsWorked": 2, "totalWages": 100.0, "materialExpenditure": 5.0}
        }"#;
        let summary: PerformanceSummary =
            serde_json::from_str(payload).expect("summary without optional blocks");

        assert!(summary.comparison_to_previous_month.is_none());
        assert_eq!(summary.status.status_of(Metric::PersonDays), Status::Neutral);
    }

    #[test]
    fn test_metric_values_accessor() {
        let values = MetricValues {
            person_days: 100,
            households_worked: 20,
            total_wages: 5000.5,
            material_expenditure: 250.25,
        };

        assert_eq!(values.value_of(Metric::PersonDays), 100.0);
        assert_eq!(values.value_of(Metric::TotalWages), 5000.5);
        assert_eq!(values.value_of(Metric::MaterialExpenditure), 250.25);
    }
}
