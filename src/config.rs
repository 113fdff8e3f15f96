//! Client configuration management
//!
//! The base origin every request is resolved against is an explicit value
//! carried by [`ClientConfig`]. It can be built directly or loaded from
//! environment variables (a `.env` file is honored).

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_DEV_API_BASE, DEFAULT_PROD_API_BASE, ENV_API_BASE, ENV_ENVIRONMENT};

/// Deployment environment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Default base origin for this environment
    pub fn default_api_base(&self) -> &'static str {
        match self {
            Self::Development => DEFAULT_DEV_API_BASE,
            Self::Production => DEFAULT_PROD_API_BASE,
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidValue(ENV_ENVIRONMENT.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub environment: Environment,
    /// Origin prefixed to every request path, without a trailing slash
    pub api_base: String,
}

impl ClientConfig {
    /// Configuration with an explicit base origin
    pub fn new(environment: Environment, api_base: impl Into<String>) -> Self {
        Self {
            environment,
            api_base: api_base.into(),
        }
    }

    /// Configuration using the environment's default base origin
    pub fn for_environment(environment: Environment) -> Self {
        Self::new(environment, environment.default_api_base())
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = match env::var(ENV_ENVIRONMENT) {
            Ok(value) => value.parse()?,
            Err(env::VarError::NotPresent) => Environment::default(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidValue(ENV_ENVIRONMENT.to_string()));
            }
        };

        let api_base = match env::var(ENV_API_BASE) {
            Ok(value) => value.trim_end_matches('/').to_string(),
            Err(env::VarError::NotPresent) => environment.default_api_base().to_string(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidValue(ENV_API_BASE.to_string()));
            }
        };

        Ok(Self::new(environment, api_base))
    }

    /// Check if targeting production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
