use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Liveness payload for the health check endpoint.
///
/// ## Fields
/// - `status`: always `"healthy"` while the process can answer at all
/// - `environment`: deployment environment label from startup configuration
///
/// This is a liveness signal only: it proves the process is up and serving
/// HTTP, not that the service can do useful work. It performs no dependency
/// checks and must not be treated as a readiness probe.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "environment": "staging"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub environment: String,
}

impl HealthStatus {
    pub fn healthy(environment: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            environment: environment.to_string(),
        }
    }
}
