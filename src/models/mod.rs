/// # Deployment Identity Response
///
/// Represents the deployment metadata reported by the root endpoint: the
/// service greeting, version, environment, and a per-request timestamp.
///
/// ## Serialization
/// Automatically implements `Serialize` and `Deserialize` for JSON format.
pub mod deployment;

/// # Health Status Response
///
/// Represents the liveness status of the service together with the
/// deployment environment. Used as the response format for the health
/// check endpoint.
///
/// ## Serialization
/// Automatically implements `Serialize` and `Deserialize` for JSON format.
pub mod health;
