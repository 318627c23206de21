// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates parsing fallbacks, database URLs and loading AppConfig from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use kitchen_assistant::config::environment::{AppConfig, DatabaseUrl, Environment, LogLevel};
use kitchen_assistant::constants::env_config;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const CONFIG_VARS: [&str; 6] = [
    env_config::DATABASE_URL,
    env_config::ENVIRONMENT,
    env_config::RUST_LOG,
    env_config::DEFAULT_SERVINGS,
    env_config::PLAN_SEED,
    env_config::HISTORY_RETENTION_DAYS,
];

fn clear_config_env() {
    for key in CONFIG_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert!(Environment::Testing.is_testing());
}

#[test]
fn test_database_url_parsing() {
    assert_eq!(
        DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
        DatabaseUrl::Memory
    );
    assert_eq!(
        DatabaseUrl::parse_url("sqlite:./data/recetas.db").unwrap(),
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/recetas.db")
        }
    );
    assert_eq!(
        DatabaseUrl::parse_url("/tmp/kitchen.db")
            .unwrap()
            .to_connection_string(),
        "sqlite:/tmp/kitchen.db"
    );
    assert!(DatabaseUrl::parse_url("   ").is_err());
    assert!(DatabaseUrl::parse_url("postgres://localhost/kitchen").is_err());
    assert_eq!(
        DatabaseUrl::default().to_string(),
        "sqlite:./data/kitchen.db"
    );
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_config_env();

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.database, DatabaseUrl::default());
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.default_servings, 4);
    assert!(config.plan_seed.is_none());
    assert!(config.summary().contains("Plan Seed: random"));
    assert_eq!(config.history_retention_days, 30);
    assert!(config.summary().contains("History Retention: 30 days"));
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_config_env();
    env::set_var(env_config::DATABASE_URL, "sqlite::memory:");
    env::set_var(env_config::ENVIRONMENT, "testing");
    env::set_var(env_config::RUST_LOG, "debug");
    env::set_var(env_config::DEFAULT_SERVINGS, " 2 ");
    env::set_var(env_config::PLAN_SEED, "42");
    env::set_var(env_config::HISTORY_RETENTION_DAYS, "0");

    let config = AppConfig::from_env().unwrap();
    clear_config_env();

    assert!(config.database.is_memory());
    assert!(config.environment.is_testing());
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.default_servings, 2);
    assert_eq!(config.plan_seed, Some(42));
    assert!(config.summary().contains("Plan Seed: 42"));
    assert_eq!(config.history_retention_days, 0);
    assert!(config.summary().contains("History Retention: forever"));
}

#[test]
#[serial]
fn test_from_env_rejects_bad_values() {
    clear_config_env();

    env::set_var(env_config::DEFAULT_SERVINGS, "muchas");
    assert!(AppConfig::from_env().is_err());

    env::set_var(env_config::DEFAULT_SERVINGS, "0");
    assert!(AppConfig::from_env().is_err());

    env::set_var(env_config::DEFAULT_SERVINGS, "101");
    assert!(AppConfig::from_env().is_err());
    env::remove_var(env_config::DEFAULT_SERVINGS);

    env::set_var(env_config::PLAN_SEED, "-1");
    assert!(AppConfig::from_env().is_err());

    env::set_var(env_config::PLAN_SEED, "");
    assert!(AppConfig::from_env().unwrap().plan_seed.is_none());
    env::remove_var(env_config::PLAN_SEED);

    env::set_var(env_config::HISTORY_RETENTION_DAYS, "a month");
    assert!(AppConfig::from_env().is_err());

    clear_config_env();
}
