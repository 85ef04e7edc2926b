//! # Configuration Management for rowhaus
//!
//! This crate provides the configuration structures for the rowhaus
//! connection provider: database host, credentials, and pool settings.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{DatabaseConfig, PoolConfig};
//!
//! let mut db_config = DatabaseConfig::new(
//!     "localhost".to_string(), 5432, "school".to_string(),
//!     "postgres".to_string(), "password".to_string(),
//! );
//!
//! // Pool settings default to a small pool; override as needed
//! db_config.pool = PoolConfig {
//!     max_connections: 10,
//!     ..PoolConfig::default()
//! };
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [database]
//! host = "localhost"
//! port = 5432
//! database = "school"
//! user = "postgres"
//! password = "password"
//!
//! # Optional; defaults apply when omitted
//! [database.pool]
//! min_connections = 1
//! max_connections = 5
//! acquire_timeout_seconds = 30
//! idle_timeout_seconds = 600
//! max_lifetime_seconds = 3600
//! ```
//!
//! Load configuration from `rowhaus.toml`, or from the path named by the
//! `ROWHAUS_CONFIG` variable in the environment or a `.env` file:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! let config = AppConfig::load().unwrap();
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./rowhaus.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

/// Database configuration: where to connect and as whom
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    #[serde(default)]
    pub pool: PoolConfig,
}

/// Connection pool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub idle_timeout_seconds: u64,
    /// 0 disables the lifetime cap
    pub max_lifetime_seconds: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_connections: 1,
            max_connections: 5,
            acquire_timeout_seconds: 30,
            idle_timeout_seconds: 600,
            max_lifetime_seconds: 3600,
        }
    }
}

impl AppConfig {
    /// Load configuration from the TOML file named in the environment, a
    /// `.env` file, or the default path
    pub fn load() -> Result<Self, ConfigError> {
        let config = {
            dotenvy::dotenv()?;

            if let Ok(config_path) = env::var("ROWHAUS_CONFIG") {
                Self::from_file(&config_path)
            } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
                Self::from_file(DEFAULT_CONFIG_PATH)
            } else {
                Err(ConfigError::Invalid(format!(
                    "no config file: set ROWHAUS_CONFIG or create {}",
                    DEFAULT_CONFIG_PATH
                )))
            }
        }?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()
    }
}

impl DatabaseConfig {
    /// Create a new database configuration with default pool settings
    pub fn new(
        host: String,
        port: u16,
        database: String,
        user: String,
        password: String,
    ) -> Self {
        Self {
            host,
            port,
            database,
            user,
            password,
            pool: PoolConfig::default(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::Invalid("database host is not set".to_string()));
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid(
                "database port must be nonzero".to_string(),
            ));
        }
        if self.database.is_empty() {
            return Err(ConfigError::Invalid("database name is not set".to_string()));
        }
        if self.user.is_empty() {
            return Err(ConfigError::Invalid("database user is not set".to_string()));
        }
        if self.pool.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "pool max_connections must be at least 1".to_string(),
            ));
        }
        if self.pool.min_connections > self.pool.max_connections {
            return Err(ConfigError::Invalid(format!(
                "pool min_connections ({}) cannot exceed max_connections ({})",
                self.pool.min_connections, self.pool.max_connections
            )));
        }
        if self.pool.acquire_timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "pool acquire_timeout_seconds must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Build connection string; the password separator is omitted when no
    /// password is set
    pub fn connection_string(&self) -> String {
        if self.password.is_empty() {
            format!(
                "postgresql://{}@{}:{}/{}",
                self.user, self.host, self.port, self.database
            )
        } else {
            format!(
                "postgresql://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.database
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school() -> DatabaseConfig {
        DatabaseConfig::new(
            "localhost".to_string(),
            5432,
            "school".to_string(),
            "postgres".to_string(),
            "1".to_string(),
        )
    }

    #[test]
    fn connection_string_shape() {
        assert_eq!(
            school().connection_string(),
            "postgresql://postgres:1@localhost:5432/school"
        );
    }

    #[test]
    fn connection_string_without_password() {
        let mut config = school();
        config.password = String::new();
        assert_eq!(
            config.connection_string(),
            "postgresql://postgres@localhost:5432/school"
        );
    }

    #[test]
    fn new_applies_default_pool_settings() {
        let config = school();
        assert_eq!(config.pool.min_connections, 1);
        assert_eq!(config.pool.max_connections, 5);
        assert_eq!(config.pool.acquire_timeout_seconds, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_pool_section_is_optional() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [database]
            host = "localhost"
            port = 5432
            database = "school"
            user = "postgres"
            password = "1"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.database.pool.max_connections, 5);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn validation_rejects_inverted_pool_bounds() {
        let mut config = school();
        config.pool.min_connections = 10;
        config.pool.max_connections = 2;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn validation_rejects_empty_host() {
        let mut config = school();
        config.host = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
