//! Configuration management for the assistant binary.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file picked up via `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const KNOWN_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for the assistant binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,

    /// Prompt shown before each command (default: "Enter a command: ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level, one of error/warn/info/debug/trace
    ///   (default: "error")
    /// - `ASSISTANT_PROMPT`: Prompt string for the command loop
    ///   (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, but don't fail if it isn't.
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if !KNOWN_LOG_LEVELS.contains(&log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {:?}, got: {}", KNOWN_LOG_LEVELS, log_level),
            });
        }

        let prompt =
            env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| "Enter a command: ".to_string());
        if prompt.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config { log_level, prompt })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_vars() {
        env::remove_var("LOG_LEVEL");
        env::remove_var("ASSISTANT_PROMPT");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_vars();
        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "error");
        assert_eq!(config.prompt, "Enter a command: ");
    }

    #[test]
    #[serial]
    fn test_log_level_from_env() {
        clear_vars();
        env::set_var("LOG_LEVEL", "debug");
        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        clear_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_log_level_rejected() {
        clear_vars();
        env::set_var("LOG_LEVEL", "loud");
        let result = Config::from_env();
        assert!(result.is_err());
        clear_vars();
    }

    #[test]
    #[serial]
    fn test_empty_prompt_rejected() {
        clear_vars();
        env::set_var("ASSISTANT_PROMPT", "   ");
        let result = Config::from_env();
        assert!(result.is_err());
        clear_vars();
    }
}
