// ABOUTME: SQLite storage for the kitchen assistant: connection setup, schema and manager accessors
// ABOUTME: Recipes, meal plans, preferences and assistant history each get a dedicated manager
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! [`Database`] owns the connection pool and creates the schema on startup.
//! Managers are cheap to construct: each holds a clone of the pool handle.

/// Saved cooking-assistant conversations
pub mod conversations;
/// Weekly meal plan storage keyed by week start
pub mod meal_plans;
/// Meal planning preferences (single row)
pub mod preferences;
/// Recipe catalog storage
pub mod recipes;

pub use conversations::{
    ConversationManager, ConversationRecord, ConversationSummary, MessageRecord, MessageRole,
};
pub use meal_plans::MealPlanManager;
pub use preferences::PreferencesManager;
pub use recipes::RecipeManager;

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Database handle for recipe and meal plan storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to `database_url` and create missing tables
    ///
    /// File databases are created if they do not exist. An in-memory
    /// database uses a single connection so every query sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails or the
    /// schema cannot be created
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config(format!("Invalid database URL '{database_url}': {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        let is_memory = database_url.contains(":memory:");
        let pool = SqlitePoolOptions::new()
            .max_connections(if is_memory { 1 } else { 5 })
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        info!(in_memory = is_memory, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Recipe storage
    #[must_use]
    pub fn recipes(&self) -> RecipeManager {
        RecipeManager::new(self.pool.clone())
    }

    /// Meal plan storage
    #[must_use]
    pub fn meal_plans(&self) -> MealPlanManager {
        MealPlanManager::new(self.pool.clone())
    }

    /// Planning preferences storage
    #[must_use]
    pub fn preferences(&self) -> PreferencesManager {
        PreferencesManager::new(self.pool.clone())
    }

    /// Assistant conversation history
    #[must_use]
    pub fn conversations(&self) -> ConversationManager {
        ConversationManager::new(self.pool.clone())
    }

    /// Create all tables and indexes if missing
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_recipes().await?;
        self.migrate_meal_plans().await?;
        self.migrate_preferences().await?;
        self.migrate_conversations().await?;
        debug!("Database schema up to date");
        Ok(())
    }

    async fn migrate_recipes(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                ingredients TEXT NOT NULL DEFAULT '[]',
                instructions TEXT NOT NULL DEFAULT '[]',
                prep_time_mins INTEGER NOT NULL DEFAULT 0,
                cook_time_mins INTEGER NOT NULL DEFAULT 0,
                servings INTEGER NOT NULL,
                difficulty TEXT NOT NULL DEFAULT 'easy',
                cuisine TEXT,
                meal_type TEXT,
                categories TEXT NOT NULL DEFAULT '[]',
                is_vegetarian INTEGER NOT NULL DEFAULT 0,
                is_vegan INTEGER NOT NULL DEFAULT 0,
                is_gluten_free INTEGER NOT NULL DEFAULT 0,
                is_dairy_free INTEGER NOT NULL DEFAULT 0,
                is_nut_free INTEGER NOT NULL DEFAULT 0,
                rating REAL,
                is_favorite INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                last_shown_at TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipes table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_created_at ON recipes(created_at)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create recipes index: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_favorite ON recipes(is_favorite)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create recipes index: {e}")))?;

        Ok(())
    }

    async fn migrate_meal_plans(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meal_plans (
                id TEXT PRIMARY KEY,
                week_start TEXT NOT NULL UNIQUE,
                meals TEXT NOT NULL DEFAULT '{}',
                notes TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create meal_plans table: {e}")))?;

        Ok(())
    }

    async fn migrate_preferences(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meal_plan_preferences (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                preferences TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to create meal_plan_preferences table: {e}"))
        })?;

        Ok(())
    }

    async fn migrate_conversations(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS conversations (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                recipe_id TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create conversations table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS conversation_messages (
                id TEXT PRIMARY KEY,
                conversation_id TEXT NOT NULL REFERENCES conversations(id) ON DELETE CASCADE,
                seq INTEGER NOT NULL,
                role TEXT NOT NULL CHECK (role IN ('user', 'assistant')),
                content TEXT NOT NULL,
                created_at TEXT NOT NULL,
                UNIQUE (conversation_id, seq)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to create conversation_messages table: {e}"))
        })?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_conversations_updated_at ON conversations(updated_at)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create conversations index: {e}")))?;

        Ok(())
    }
}

/// Fixed-width RFC 3339 text so stored timestamps sort chronologically
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a stored RFC 3339 timestamp
pub(crate) fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid datetime '{value}': {e}")))
}

/// Create an isolated in-memory database for tests
///
/// # Errors
///
/// Returns an error if database initialization fails
pub async fn create_test_db() -> AppResult<Database> {
    Database::new("sqlite::memory:").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamps_round_trip_and_sort() {
        let earlier = Utc::now();
        let later = earlier + chrono::Duration::milliseconds(1);
        let (a, b) = (format_timestamp(earlier), format_timestamp(later));
        assert!(a < b);
        assert_eq!(parse_timestamp(&a).unwrap(), earlier);
    }
}
