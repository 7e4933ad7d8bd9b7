//! Application configuration loaded from environment variables.
//!
//! Configuration is resolved once during bootstrap and carried inside the
//! application context; nothing here is re-read after startup.

use crate::errors::{CoreError, CoreResult};
use std::env;
use std::str::FromStr;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(CoreError::InvalidValue {
                field: "environment".to_string(),
                value: s.to_string(),
                expected: "development, testing, or production".to_string(),
            }),
        }
    }
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    pub environment: Environment,
    /// Verbose request/dispatch logging when enabled
    pub debug: bool,
    pub server: ServerConfig,
}

/// Server bind configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "gantry-app".to_string(),
            environment: Environment::Development,
            debug: true,
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> CoreResult<Self> {
        let defaults = AppConfig::default();

        let name = env_or("APP_NAME", &defaults.name);
        let environment = match env::var("APP_ENV") {
            Ok(value) => Environment::from_str(&value)?,
            Err(_) => defaults.environment,
        };
        let debug = match env::var("APP_DEBUG") {
            Ok(value) => parse_bool("APP_DEBUG", &value)?,
            Err(_) => !environment.is_production(),
        };

        let host = env_or("SERVER_HOST", &defaults.server.host);
        let port = match env::var("SERVER_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| CoreError::InvalidValue {
                field: "SERVER_PORT".to_string(),
                value,
                expected: "a port number between 1 and 65535".to_string(),
            })?,
            Err(_) => defaults.server.port,
        };

        let config = AppConfig {
            name,
            environment,
            debug,
            server: ServerConfig { host, port },
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::configuration("App name cannot be empty"));
        }
        if self.server.host.is_empty() {
            return Err(CoreError::configuration("Server host cannot be empty"));
        }
        if self.server.port == 0 {
            return Err(CoreError::configuration("Server port cannot be 0"));
        }
        Ok(())
    }

    /// Socket address string for the server listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(field: &str, value: &str) -> CoreResult<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CoreError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            expected: "a boolean (true/false)".to_string(),
        }),
    }
}
