use serde::{Deserialize, Serialize};

use crate::performance::Period;

/// One district's entry in a comparison, ordered by rank (1 = best).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDistrict {
    pub id: i64,
    pub name: String,
    pub state: String,
    pub value: f64,
    pub rank: u32,
}

/// Result of comparing districts on a single metric for one period.
/// `metric` echoes the snake_case identifier the comparison was run with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub metric: String,
    pub period: Period,
    pub districts: Vec<RankedDistrict>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_deserializes_ranked() {
        let payload = r#"{
            "metric": "person_days",
            "period": {"year": 2024, "month": 10, "display": "2024-10"},
            "districts": [
                {"id": 3, "name": "Mysuru", "state": "Karnataka", "value": 210000.0, "rank": 1},
                {"id": 1, "name": "Ballari", "state": "Karnataka", "value": 180000.0, "rank": 2}
            ]
        }"#;
        let result: ComparisonResult = serde_json::from_str(payload).expect("valid comparison");

        assert_eq!(result.metric, "person_days");
        assert_eq!(result.districts[0].rank, 1);
        assert_eq!(result.districts[0].name, "Mysuru");
        assert_eq!(result.districts[1].value, 180000.0);
    }
}
