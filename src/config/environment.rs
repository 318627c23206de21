// ABOUTME: Environment configuration for database location, logging and meal planning defaults
// ABOUTME: Parses environment variables into typed values with documented fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{defaults, env_config, limits};
use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level - only critical errors
    Error,
    /// Warning level - potential issues
    Warn,
    /// Info level - normal operational messages (default)
    #[default]
    Info,
    /// Debug level - detailed debugging information
    Debug,
    /// Trace level - very verbose tracing
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment (default)
    #[default]
    Development,
    /// Production environment
    Production,
    /// Testing environment for automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string
    ///
    /// `sqlite::memory:` selects an in-memory database; any other value is a
    /// file path with or without the `sqlite:` prefix.
    ///
    /// # Errors
    ///
    /// Returns an error for empty input or a non-`SQLite` scheme
    pub fn parse_url(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            bail!("Database URL must not be empty");
        }
        if trimmed.starts_with("postgres://") || trimmed.starts_with("postgresql://") {
            bail!("Only SQLite databases are supported, got '{trimmed}'");
        }
        let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
        if path_str == ":memory:" {
            Ok(Self::Memory)
        } else {
            Ok(Self::SQLite {
                path: PathBuf::from(path_str),
            })
        }
    }

    /// Convert to an `sqlx` connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(
                defaults::DATABASE_URL
                    .strip_prefix("sqlite:")
                    .unwrap_or(defaults::DATABASE_URL),
            ),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database location
    pub database: DatabaseUrl,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Servings used when no planning preferences are stored
    pub default_servings: u32,
    /// Fixed seed for reproducible meal plans
    pub plan_seed: Option<u64>,
    /// Days of assistant history to keep; `0` disables pruning
    pub history_retention_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseUrl::default(),
            environment: Environment::default(),
            log_level: LogLevel::default(),
            default_servings: defaults::DEFAULT_SERVINGS,
            plan_seed: None,
            history_retention_days: defaults::HISTORY_RETENTION_DAYS,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails [`AppConfig::validate`]
    pub fn from_env() -> Result<Self> {
        let database =
            DatabaseUrl::parse_url(&env_var_or(env_config::DATABASE_URL, defaults::DATABASE_URL))?;
        let environment =
            Environment::from_str_or_default(&env_var_or(env_config::ENVIRONMENT, "development"));
        let log_level =
            LogLevel::from_str_or_default(&env_var_or(env_config::RUST_LOG, defaults::LOG_LEVEL));

        let default_servings = match env::var(env_config::DEFAULT_SERVINGS) {
            Ok(raw) => raw.trim().parse::<u32>().map_err(|e| {
                anyhow!("Invalid {}='{raw}': {e}", env_config::DEFAULT_SERVINGS)
            })?,
            Err(_) => defaults::DEFAULT_SERVINGS,
        };

        let plan_seed = match env::var(env_config::PLAN_SEED) {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| anyhow!("Invalid {}='{raw}': {e}", env_config::PLAN_SEED))?,
            ),
            _ => None,
        };

        let history_retention_days = match env::var(env_config::HISTORY_RETENTION_DAYS) {
            Ok(raw) => raw.trim().parse::<u32>().map_err(|e| {
                anyhow!("Invalid {}='{raw}': {e}", env_config::HISTORY_RETENTION_DAYS)
            })?,
            Err(_) => defaults::HISTORY_RETENTION_DAYS,
        };

        let config = Self {
            database,
            environment,
            log_level,
            default_servings,
            plan_seed,
            history_retention_days,
        };
        config.validate()?;

        info!(
            database = %config.database,
            environment = %config.environment,
            default_servings = config.default_servings,
            seeded = config.plan_seed.is_some(),
            history_retention_days = config.history_retention_days,
            "Configuration loaded from environment"
        );
        Ok(config)
    }

    /// Validate value ranges
    ///
    /// # Errors
    ///
    /// Returns an error if `default_servings` is zero or above the servings limit
    pub fn validate(&self) -> Result<()> {
        if self.default_servings == 0 || self.default_servings > limits::MAX_SERVINGS {
            bail!(
                "Default servings must be between 1 and {}, got {}",
                limits::MAX_SERVINGS,
                self.default_servings
            );
        }
        if self.environment.is_production() && self.database.is_memory() {
            warn!("In-memory database configured in production; data will not persist");
        }
        Ok(())
    }

    /// Human-readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Kitchen Assistant Configuration:\n\
             - Environment: {}\n\
             - Database: {}\n\
             - Log Level: {}\n\
             - Default Servings: {}\n\
             - Plan Seed: {}\n\
             - History Retention: {}",
            self.environment,
            self.database,
            self.log_level,
            self.default_servings,
            self.plan_seed
                .map_or_else(|| "random".to_owned(), |seed| seed.to_string()),
            if self.history_retention_days == 0 {
                "forever".to_owned()
            } else {
                format!("{} days", self.history_retention_days)
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_url_round_trips() {
        let url = DatabaseUrl::parse_url("sqlite::memory:").unwrap();
        assert!(url.is_memory());
        assert_eq!(url.to_connection_string(), "sqlite::memory:");
    }

    #[test]
    fn test_validate_rejects_zero_servings() {
        let config = AppConfig {
            default_servings: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
