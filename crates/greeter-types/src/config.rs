//! Configuration loading for the greeter daemon.
//!
//! Layered precedence: defaults -> config file -> env vars -> CLI flags.
//! Config file lives at ~/.config/greeterd/config.toml; env vars use the
//! GREETER_ prefix (GREETER_GRPC_PORT, GREETER_LOG_LEVEL, ...).

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::GreeterError;

/// Main daemon settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// gRPC server host
    #[serde(default = "default_grpc_host")]
    pub grpc_host: String,

    /// gRPC server port
    #[serde(default = "default_grpc_port")]
    pub grpc_port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_grpc_host() -> String {
    "0.0.0.0".to_string()
}

fn default_grpc_port() -> u16 {
    50051
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grpc_host: default_grpc_host(),
            grpc_port: default_grpc_port(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/greeterd/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (GREETER_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, GreeterError> {
        let config_dir = ProjectDirs::from("", "simplewins", "greeterd")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            // 1. Built-in defaults
            .set_default("grpc_host", default_grpc_host())
            .map_err(|e| GreeterError::Config(e.to_string()))?
            .set_default("grpc_port", default_grpc_port() as i64)
            .map_err(|e| GreeterError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| GreeterError::Config(e.to_string()))?
            // 2. Default config file (~/.config/greeterd/config.toml)
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        // 3. CLI-specified config file (higher precedence than default)
        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // 4. Environment variables (highest precedence before CLI flags)
        // Format: GREETER_GRPC_HOST, GREETER_GRPC_PORT, GREETER_LOG_LEVEL.
        // No separator: after prefix-stripping the keys stay flat
        // (grpc_port), matching the Settings fields. A "_" separator would
        // split them into nested paths (grpc.port) that match nothing.
        builder = builder.add_source(Environment::with_prefix("GREETER").try_parsing(true));

        let config = builder
            .build()
            .map_err(|e| GreeterError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| GreeterError::Config(e.to_string()))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), GreeterError> {
        if self.grpc_port == 0 {
            return Err(GreeterError::Config("grpc_port must be > 0".to_string()));
        }
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(GreeterError::Config(format!(
                "unknown log_level: {}",
                other
            ))),
        }
    }

    /// Get the socket address for the gRPC server.
    pub fn grpc_addr(&self) -> String {
        format!("{}:{}", self.grpc_host, self.grpc_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.grpc_host, "0.0.0.0");
        assert_eq!(settings.grpc_port, 50051);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_grpc_addr() {
        let settings = Settings::default();
        assert_eq!(settings.grpc_addr(), "0.0.0.0:50051");
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let settings = Settings {
            grpc_port: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let settings = Settings {
            log_level: "loud".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Settings::default().validate().is_ok());
    }

    // The two env tests touch disjoint variables and assert only their
    // own keys, so they stay safe under the parallel test runner.
    #[test]
    fn test_env_override_applies() {
        std::env::set_var("GREETER_GRPC_PORT", "6123");
        let settings = Settings::load(None).unwrap();
        std::env::remove_var("GREETER_GRPC_PORT");
        assert_eq!(settings.grpc_port, 6123);
    }

    #[test]
    fn test_env_override_two_word_keys() {
        std::env::set_var("GREETER_LOG_LEVEL", "debug");
        std::env::set_var("GREETER_GRPC_HOST", "127.0.0.1");
        let settings = Settings::load(None).unwrap();
        std::env::remove_var("GREETER_LOG_LEVEL");
        std::env::remove_var("GREETER_GRPC_HOST");
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.grpc_host, "127.0.0.1");
    }
}
