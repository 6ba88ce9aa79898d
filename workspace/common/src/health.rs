use serde::{Deserialize, Serialize};

/// Liveness payload from `/health/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub database: bool,
    pub redis: bool,
    #[serde(default)]
    pub last_fetch: Option<String>,
    #[serde(default)]
    pub last_fetch_status: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_deserializes() {
        let payload = r#"{
            "status": "ok",
            "timestamp": "2024-10-25T10:00:00Z",
            "database": true,
            "redis": true,
            "lastFetch": null,
            "lastFetchStatus": "never"
        }"#;
        let health: HealthStatus = serde_json::from_str(payload).expect("valid health payload");

        assert!(health.is_ok());
        assert_eq!(health.last_fetch, None);
        assert_eq!(health.last_fetch_status.as_deref(), Some("never"));
    }

    #[test]
    fn test_degraded_is_not_ok() {
        let payload = r#"{"status": "degraded", "timestamp": "t", "database": true, "redis": false}"#;
        let health: HealthStatus = serde_json::from_str(payload).expect("valid health payload");

        assert!(!health.is_ok());
    }
}
