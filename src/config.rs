use std::env;

use thiserror::Error;

/// Default TCP port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Default version label when `VERSION` is unset.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Default environment label when `ENV` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "unknown";

/// Startup configuration error.
///
/// The only rejected input is a `PORT` variable that is set but does not
/// parse as a TCP port number. Fatal at startup; request handlers never
/// see configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a TCP port number, got {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// # Application Configuration
///
/// Deployment identity resolved once at process start and shared read-only
/// with every request handler via `actix_web::web::Data`.
///
/// ## Sources
///
/// | Variable | Default | Effect |
/// |---|---|---|
/// | `PORT` | 3000 | TCP port the server listens on |
/// | `VERSION` | "1.0.0" | reported by the root endpoint |
/// | `ENV` | "unknown" | reported by both endpoints |
///
/// Handlers never read the process environment themselves; this struct is
/// the single point where ambient configuration enters the program, and its
/// fields stay constant for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub version: String,
    pub environment: String,
}

impl AppConfig {
    /// Resolves configuration from the process environment, applying
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            env::var("PORT").ok(),
            env::var("VERSION").ok(),
            env::var("ENV").ok(),
        )
    }

    fn resolve(
        port: Option<String>,
        version: Option<String>,
        environment: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: raw, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            version: version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            environment: environment.unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::resolve(None, None, None).expect("Defaults should resolve");

        assert_eq!(config.port, 3000);
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.environment, "unknown");
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config = AppConfig::resolve(
            Some("4000".to_string()),
            Some("2.3.1".to_string()),
            Some("staging".to_string()),
        )
        .expect("Valid values should resolve");

        assert_eq!(config.port, 4000);
        assert_eq!(config.version, "2.3.1");
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn test_unparsable_port_rejected() {
        let err = AppConfig::resolve(Some("eighty".to_string()), None, None)
            .expect_err("Non-numeric PORT should be rejected");

        assert!(matches!(err, ConfigError::InvalidPort { .. }));
        assert!(
            err.to_string().contains("eighty"),
            "Diagnostic should echo the offending value"
        );
    }

    #[test]
    fn test_out_of_range_port_rejected() {
        let result = AppConfig::resolve(Some("70000".to_string()), None, None);

        assert!(result.is_err(), "Ports above 65535 should be rejected");
    }
}
