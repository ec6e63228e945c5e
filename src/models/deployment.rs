use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting reported by the root endpoint. Constant across deployments;
/// only `version`, `environment`, and `timestamp` vary between the blue
/// and green sides.
pub const DEPLOYMENT_MESSAGE: &str = "Heyy from Blue-Green Deployment! This is RS";

/// # Deployment Identity Response
///
/// Payload of the root endpoint: everything a load balancer or operator
/// needs to tell which side of a blue-green pair answered the request.
///
/// ## Fields
/// - `message`: fixed greeting identifying the service
/// - `version`: deployed version label, constant for the process lifetime
/// - `environment`: deployment environment label, constant for the process lifetime
/// - `timestamp`: instant the response was built, ISO 8601 UTC with
///   millisecond precision
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Heyy from Blue-Green Deployment! This is RS",
///   "version": "2.3.1",
///   "environment": "staging",
///   "timestamp": "2024-03-10T15:30:45.123Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct DeploymentInfo {
    pub message: String,
    pub version: String,
    pub environment: String,
    pub timestamp: String,
}

impl DeploymentInfo {
    /// Builds a response for the configured identity, stamped with the
    /// current UTC instant.
    pub fn current(version: &str, environment: &str) -> Self {
        Self {
            message: DEPLOYMENT_MESSAGE.to_string(),
            version: version.to_string(),
            environment: environment.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
