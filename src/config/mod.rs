// ABOUTME: Configuration management module for the kitchen assistant
// ABOUTME: Environment-only configuration with strongly typed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables; there is no configuration
//! file. See [`environment::AppConfig::from_env`].

/// Environment-driven application configuration
pub mod environment;

pub use environment::{AppConfig, DatabaseUrl, Environment, LogLevel};
