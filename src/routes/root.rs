use crate::config::AppConfig;
use crate::models::deployment::DeploymentInfo;
use actix_web::{HttpResponse, Responder, get, web};

/// # Deployment Identity Endpoint
///
/// Reports which deployment answered: the service greeting, the deployed
/// version, the environment label, and the instant the response was built.
/// A load balancer or operator running a blue-green rollout uses this to
/// confirm which side is currently serving traffic.
///
/// ## Response
///
/// - **200 OK**: Always, while the server is up
///   - Body: JSON object with `message`, `version`, `environment`, and
///     `timestamp` (ISO 8601 UTC, millisecond precision)
///
/// ## Example Response
///
/// ```json
/// {
///   "message": "Heyy from Blue-Green Deployment! This is RS",
///   "version": "2.3.1",
///   "environment": "staging",
///   "timestamp": "2023-10-05T12:34:56.789Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Deployment identity", body = DeploymentInfo)
    ),
    tag = "Deployment Identity"
)]
#[get("/")]
pub async fn deployment_info(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(DeploymentInfo::current(&config.version, &config.environment))
}

/// # Route Configuration
///
/// Registers the deployment identity endpoint with the Actix-web service
/// configuration.
///
/// ## Currently Configured Routes
///
/// - `GET /`: Deployment identity endpoint
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(deployment_info);
}
