use crate::config::AppConfig;
use crate::models::health::HealthStatus;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Liveness probe for load balancers and container orchestration. Returns
/// the fixed status `"healthy"` together with the deployment environment.
///
/// This endpoint performs no dependency checks, so it cannot distinguish
/// "process alive" from "service actually functional" — it is a liveness
/// probe, not a readiness probe.
///
/// ## Response
///
/// - **200 OK**: Service process is up
///   - Body: JSON object with `status` ("healthy") and `environment`
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "environment": "staging"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus::healthy(&config.environment))
}

/// # Route Configuration
///
/// Registers the health check endpoint with the Actix-web service
/// configuration.
///
/// ## Currently Configured Routes
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}
