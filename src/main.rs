use actix_web::{App, HttpServer, web::Data};
use deployment_probe::config::AppConfig;
use deployment_probe::openapi::ApiDoc;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Deployment Probe Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Deployment identity endpoint for blue-green rollout verification
/// - Liveness probe endpoint
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Immutable configuration shared with all request handlers
///
/// # Endpoints
/// - Deployment identity: `GET /`
/// - Liveness probe: `GET /health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - `PORT` (default 3000), `VERSION` (default "1.0.0"), `ENV` (default "unknown")
/// - Environment variables loaded from `.env` file (if present)
/// - An unparsable `PORT` or a failed bind terminates the process with a
///   non-zero exit status and a diagnostic; there is no retry.
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let shared_config = Data::new(config.clone());

    let server = HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(shared_config.clone())
            .configure(deployment_probe::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(("0.0.0.0", config.port))?;

    tracing::info!(
        port = config.port,
        environment = %config.environment,
        version = %config.version,
        "Server running"
    );

    server.run().await?;

    Ok(())
}
