use actix_web::web;

/// # Deployment Identity Endpoint
///
/// Reports which deployment answered the request: greeting, version,
/// environment, and the instant the response was built.
///
/// ## Response
///
/// - **200 OK**: Always, while the server is up
///   - Body: JSON object with `message`, `version`, `environment`, and
///     `timestamp` in ISO 8601 format
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
pub mod root;

/// # Health Check Endpoint
///
/// Returns the liveness status of the service along with the deployment
/// environment.
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
pub mod health;

/// # Route Configuration
///
/// Registers the probe endpoints at the root scope.
///
/// ## Mounted Services
///
/// ```text
/// GET /       - deployment identity
/// GET /health - liveness probe
/// ```
///
/// Requests to any other path fall through to actix-web's default handler,
/// a `404 Not Found` with an empty body.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root::configure_routes)
        .configure(health::configure_routes);
}
