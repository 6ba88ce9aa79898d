use common::HealthStatus;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// GET /health/ - backend liveness check.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        log::trace!("Checking backend health");
        let result = self.get::<HealthStatus>("/health/").await;

        match &result {
            Ok(health) => log::info!("Backend health: {}", health.status),
            Err(e) => log::warn!("Health check failed: {}", e),
        }

        result
    }
}
