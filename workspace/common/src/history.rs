use serde::{Deserialize, Serialize};

use crate::district::DistrictRef;
use crate::metric::Metric;

/// Inclusive `YYYY-MM` range echoed back by the history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangePeriod {
    pub from: String,
    pub to: String,
}

/// One month of metric values inside a historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub period: Option<String>,
    pub person_days: i64,
    pub households_worked: i64,
    pub total_wages: f64,
    pub material_expenditure: f64,
}

impl PerformancePoint {
    pub fn value_of(&self, metric: Metric) -> f64 {
        match metric {
            Metric::PersonDays => self.person_days as f64,
            Metric::HouseholdsWorked => self.households_worked as f64,
            Metric::TotalWages => self.total_wages,
            Metric::MaterialExpenditure => self.material_expenditure,
        }
    }
}

/// Ordered per-month snapshots for one district over a bounded range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub district: DistrictRef,
    pub period: RangePeriod,
    pub data: Vec<PerformancePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_deserializes() {
        let payload = r#"{
            "district": {"id": 2, "name": "Tumakuru", "state": "Karnataka"},
            "period": {"from": "2024-01", "to": "2024-02"},
            "data": [
                {"year": 2024, "month": 1, "period": "2024-01", "personDays": 900,
                 "householdsWorked": 80, "totalWages": 41000.0, "materialExpenditure": 1200.0},
                {"year": 2024, "month": 2, "period": "2024-02", "personDays": 1100,
                 "householdsWorked": 95, "totalWages": 52000.0, "materialExpenditure": 1500.0}
            ]
        }"#;
        let series: HistoricalSeries = serde_json::from_str(payload).expect("valid series");

        assert_eq!(series.data.len(), 2);
        assert_eq!(series.period.from, "2024-01");
        assert_eq!(series.data[1].value_of(Metric::PersonDays), 1100.0);
        assert_eq!(series.data[0].value_of(Metric::TotalWages), 41000.0);
    }
}
