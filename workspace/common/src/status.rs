use serde::{Deserialize, Serialize};

/// Performance classification computed server-side against the state average
/// (good >= 80%, average 50-79%, poor < 50%). Anything unrecognized on the
/// wire collapses to neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Average,
    Poor,
    #[default]
    #[serde(other)]
    Neutral,
}

impl Status {
    pub fn color(&self) -> &'static str {
        match self {
            Status::Good => "#10b981",
            Status::Average => "#f59e0b",
            Status::Poor => "#ef4444",
            Status::Neutral => "#6b7280",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Good => "Good",
            Status::Average => "Average",
            Status::Poor => "Poor",
            Status::Neutral => "N/A",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses_deserialize() {
        assert_eq!(
            serde_json::from_str::<Status>(r#""good""#).unwrap(),
            Status::Good
        );
        assert_eq!(
            serde_json::from_str::<Status>(r#""average""#).unwrap(),
            Status::Average
        );
        assert_eq!(
            serde_json::from_str::<Status>(r#""poor""#).unwrap(),
            Status::Poor
        );
    }

    #[test]
    fn test_unknown_status_is_neutral() {
        assert_eq!(
            serde_json::from_str::<Status>(r#""excellent""#).unwrap(),
            Status::Neutral
        );
    }

    #[test]
    fn test_neutral_label_and_color() {
        assert_eq!(Status::Neutral.label(), "N/A");
        assert_eq!(Status::Neutral.color(), "#6b7280");
    }
}
