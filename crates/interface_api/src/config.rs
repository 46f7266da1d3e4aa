//! API configuration
//!
//! Everything is read from environment variables sharing the `META_` prefix:
//!
//! | Variable | Default |
//! |---|---|
//! | `META_SERVER_LISTEN_ADDRESS` | `localhost` |
//! | `META_SERVER_LISTEN_PORT` | `9999` |
//! | `META_DATABASE_HOST` | `localhost` |
//! | `META_DATABASE_PORT` | `5432` |
//! | `META_DATABASE_NAME` | required |
//! | `META_DATABASE_USER` | required |
//! | `META_DATABASE_PASSWORD` | required |
//! | `META_DATABASE_SSL_MODE` | `disable` |
//! | `META_DATABASE_MAX_CONNECTIONS` | `10` |
//! | `META_LOG_LEVEL` | `info` |

use std::fmt;
use std::str::FromStr;

use config::Environment;
use infra_db::DatabaseConfig;
use serde::Deserialize;
use sqlx::postgres::PgSslMode;
use thiserror::Error;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "META";

/// Configuration errors, all fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is missing or could not be parsed
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value parsed but is unusable
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// API configuration
#[derive(Clone, Deserialize)]
pub struct ApiConfig {
    /// Address the HTTP server binds to
    pub server_listen_address: String,
    /// Port the HTTP server binds to
    pub server_listen_port: u16,
    /// Database host
    pub database_host: String,
    /// Database port
    pub database_port: u16,
    /// Database name
    pub database_name: String,
    /// Database login role
    pub database_user: String,
    /// Database password
    pub database_password: String,
    /// libpq-style sslmode
    pub database_ssl_mode: String,
    /// Upper bound on pooled connections
    pub database_max_connections: u32,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
}

impl ApiConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from the given environment source, applies
    /// defaults, and validates the result
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let config: ApiConfig = config::Config::builder()
            .set_default("server_listen_address", "localhost")?
            .set_default("server_listen_port", 9999)?
            .set_default("database_host", "localhost")?
            .set_default("database_port", 5432)?
            .set_default("database_ssl_mode", "disable")?
            .set_default("database_max_connections", 10)?
            .set_default("log_level", "info")?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects values that parse but cannot work
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("database_name", &self.database_name),
            ("database_user", &self.database_user),
            ("database_password", &self.database_password),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }
        if self.server_listen_port == 0 {
            return Err(ConfigError::Invalid(
                "server_listen_port must be between 1 and 65535".to_string(),
            ));
        }
        if self.database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database_max_connections must be at least 1".to_string(),
            ));
        }
        self.ssl_mode()?;
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_listen_address, self.server_listen_port)
    }

    /// Parses the configured sslmode
    pub fn ssl_mode(&self) -> Result<PgSslMode, ConfigError> {
        PgSslMode::from_str(&self.database_ssl_mode).map_err(|_| {
            ConfigError::Invalid(format!(
                "unknown database_ssl_mode '{}' (expected disable, allow, prefer, require, verify-ca or verify-full)",
                self.database_ssl_mode
            ))
        })
    }

    /// Builds the connection pool configuration
    pub fn database_config(&self) -> Result<DatabaseConfig, ConfigError> {
        let min_connections = self.database_max_connections.min(2);
        Ok(DatabaseConfig::new(
            &self.database_host,
            &self.database_name,
            &self.database_user,
            &self.database_password,
        )
        .port(self.database_port)
        .ssl_mode(self.ssl_mode()?)
        .max_connections(self.database_max_connections)
        .min_connections(min_connections))
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("server_listen_address", &self.server_listen_address)
            .field("server_listen_port", &self.server_listen_port)
            .field("database_host", &self.database_host)
            .field("database_port", &self.database_port)
            .field("database_name", &self.database_name)
            .field("database_user", &self.database_user)
            .field("database_password", &"***")
            .field("database_ssl_mode", &self.database_ssl_mode)
            .field("database_max_connections", &self.database_max_connections)
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            ("META_DATABASE_NAME", "meta"),
            ("META_DATABASE_USER", "meta"),
            ("META_DATABASE_PASSWORD", "secret"),
        ]
    }

    #[test]
    fn test_defaults_apply() {
        let config = ApiConfig::from_environment(environment(&required())).unwrap();

        assert_eq!(config.server_listen_address, "localhost");
        assert_eq!(config.server_listen_port, 9999);
        assert_eq!(config.database_host, "localhost");
        assert_eq!(config.database_port, 5432);
        assert_eq!(config.database_ssl_mode, "disable");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.server_addr(), "localhost:9999");
    }

    #[test]
    fn test_overrides_are_read() {
        let mut vars = required();
        vars.extend([
            ("META_SERVER_LISTEN_ADDRESS", "0.0.0.0"),
            ("META_SERVER_LISTEN_PORT", "8080"),
            ("META_DATABASE_HOST", "db.internal"),
            ("META_DATABASE_PORT", "6543"),
            ("META_DATABASE_SSL_MODE", "require"),
        ]);
        let config = ApiConfig::from_environment(environment(&vars)).unwrap();

        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        let db = config.database_config().unwrap();
        assert_eq!(db.host, "db.internal");
        assert_eq!(db.port, 6543);
        assert!(matches!(db.ssl_mode, PgSslMode::Require));
    }

    #[test]
    fn test_numeric_looking_strings_are_kept_verbatim() {
        let vars = [
            ("META_DATABASE_NAME", "007"),
            ("META_DATABASE_USER", "1.50"),
            ("META_DATABASE_PASSWORD", "0123"),
        ];
        let config = ApiConfig::from_environment(environment(&vars)).unwrap();
        assert_eq!(config.database_name, "007");
        assert_eq!(config.database_user, "1.50");
        assert_eq!(config.database_password, "0123");
    }

    #[test]
    fn test_non_numeric_port_fails() {
        let mut vars = required();
        vars.push(("META_SERVER_LISTEN_PORT", "http"));
        let err = ApiConfig::from_environment(environment(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn test_missing_required_field_fails() {
        let vars = [
            ("META_DATABASE_NAME", "meta"),
            ("META_DATABASE_USER", "meta"),
        ];
        let err = ApiConfig::from_environment(environment(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
        assert!(err.to_string().contains("database_password"));
    }

    #[test]
    fn test_unknown_ssl_mode_fails() {
        let mut vars = required();
        vars.push(("META_DATABASE_SSL_MODE", "sometimes"));
        let err = ApiConfig::from_environment(environment(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_empty_required_field_fails() {
        let vars = [
            ("META_DATABASE_NAME", "meta"),
            ("META_DATABASE_USER", " "),
            ("META_DATABASE_PASSWORD", "secret"),
        ];
        assert!(ApiConfig::from_environment(environment(&vars)).is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let config = ApiConfig::from_environment(environment(&required())).unwrap();
        assert!(!format!("{config:?}").contains("secret"));
    }
}
