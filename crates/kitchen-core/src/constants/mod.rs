// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment variable names, defaults and planner limits for the kitchen assistant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single flat list.

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const KITCHEN_ASSISTANT: &str = "kitchen-assistant";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter / level
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Servings used when no preferences have been saved yet
    pub const DEFAULT_SERVINGS: &str = "KITCHEN_DEFAULT_SERVINGS";
    /// Optional fixed seed for reproducible meal-plan generation
    pub const PLAN_SEED: &str = "KITCHEN_PLAN_SEED";
    /// Days of assistant history to keep; `0` keeps everything
    pub const HISTORY_RETENTION_DAYS: &str = "KITCHEN_HISTORY_RETENTION_DAYS";
}

/// Default configuration values
pub mod defaults {
    /// Default `SQLite` database location
    pub const DATABASE_URL: &str = "sqlite:./data/kitchen.db";
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
    /// Default servings for generated meals
    pub const DEFAULT_SERVINGS: u32 = 4;
    /// Conversations idle for longer than this are pruned after each `ask`
    pub const HISTORY_RETENTION_DAYS: u32 = 30;
    /// Conversations shown by `history list`
    pub const HISTORY_LIST_LIMIT: u32 = 20;
}

/// Validation limits
pub mod limits {
    /// Highest accepted recipe rating
    pub const MAX_RATING: f32 = 5.0;
    /// Upper bound for servings on a single recipe or planned meal
    pub const MAX_SERVINGS: u32 = 100;
    /// Longest accepted recipe name
    pub const MAX_RECIPE_NAME_LEN: usize = 200;
    /// Conversation titles are cut to this many characters
    pub const MAX_CONVERSATION_TITLE_LEN: usize = 80;
}
