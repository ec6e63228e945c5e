use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural macros.
/// This documentation serves as the source of truth for both API consumers and
/// automated documentation generators.
///
/// # Endpoints
/// - Deployment Identity: `GET /`
/// - Health Check: `GET /health`
///
/// # Schemas
/// - `DeploymentInfo`: Deployment identity payload
/// - `HealthStatus`: Liveness status payload
///
/// # Tags
/// 1. **Deployment Identity**: Blue-green deployment reporting endpoints
/// 2. **Health Check**: Service monitoring endpoints
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any changes
/// to the API surface should be reflected here first to maintain documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::deployment_info,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::deployment::DeploymentInfo,
            crate::models::health::HealthStatus
        )
    ),
    tags(
        (name = "Deployment Identity", description = "Blue-green deployment identity endpoints"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "Deployment identity probe for blue-green rollouts",
        title = "Deployment Probe API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
