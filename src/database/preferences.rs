// ABOUTME: Storage for meal planning preferences as a single JSON row
// ABOUTME: Missing row means defaults; updates validate servings before writing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::format_timestamp;
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::recipes::MealPlanPreferences;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::info;

/// Planning preferences manager
pub struct PreferencesManager {
    pool: SqlitePool,
}

impl PreferencesManager {
    /// Create a new preferences manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Stored preferences, if any have been saved
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored JSON is invalid
    pub async fn load(&self) -> AppResult<Option<MealPlanPreferences>> {
        let row = sqlx::query("SELECT preferences FROM meal_plan_preferences WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to load preferences: {e}")))?;

        row.map(|r| {
            let json: String = r.get("preferences");
            serde_json::from_str(&json).map_err(AppError::from)
        })
        .transpose()
    }

    /// Stored preferences, or [`MealPlanPreferences::default`] when none are saved
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored JSON is invalid
    pub async fn get(&self) -> AppResult<MealPlanPreferences> {
        Ok(self.load().await?.unwrap_or_default())
    }

    /// Replace the stored preferences
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `default_servings` is out of range, or a
    /// database error
    pub async fn update(&self, preferences: &MealPlanPreferences) -> AppResult<()> {
        if preferences.default_servings == 0 || preferences.default_servings > limits::MAX_SERVINGS
        {
            return Err(AppError::invalid_input(format!(
                "Default servings must be between 1 and {}",
                limits::MAX_SERVINGS
            )));
        }

        sqlx::query(
            r"
            INSERT INTO meal_plan_preferences (id, preferences, updated_at)
            VALUES (1, $1, $2)
            ON CONFLICT(id) DO UPDATE SET
                preferences = excluded.preferences,
                updated_at = excluded.updated_at
            ",
        )
        .bind(serde_json::to_string(preferences)?)
        .bind(format_timestamp(Utc::now()))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update preferences: {e}")))?;

        info!(
            default_servings = preferences.default_servings,
            slots = preferences.slot_count(),
            excluded = preferences.excluded_recipes.len(),
            "Meal planning preferences updated"
        );
        Ok(())
    }

    /// Remove stored preferences so defaults apply again
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn reset(&self) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM meal_plan_preferences WHERE id = 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to reset preferences: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}
