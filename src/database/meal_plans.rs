// ABOUTME: Database operations for weekly meal plans keyed by their Monday
// ABOUTME: Get, upsert, delete and inclusive date-range listing; meals are stored as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp};
use crate::errors::{AppError, AppResult};
use crate::recipes::{week_start_for, DayOfWeek, MealPlan, PlannedMeal};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::BTreeMap;
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Meal plan database operations manager
pub struct MealPlanManager {
    pool: SqlitePool,
}

impl MealPlanManager {
    /// Create a new meal plan manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the plan for the week containing `date`
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get(&self, date: NaiveDate) -> AppResult<Option<MealPlan>> {
        let week_start = week_start_for(date);
        let row = sqlx::query(
            r"
            SELECT id, week_start, meals, notes
            FROM meal_plans
            WHERE week_start = $1
            ",
        )
        .bind(week_start.format(DATE_FORMAT).to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get meal plan: {e}")))?;

        row.map(|r| row_to_meal_plan(&r)).transpose()
    }

    /// Insert or replace the plan for its week
    ///
    /// A plan already stored for the same week is overwritten, including its id.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database operation fails
    pub async fn save(&self, plan: &MealPlan) -> AppResult<()> {
        let now = format_timestamp(Utc::now());
        let week_start = week_start_for(plan.week_start);

        sqlx::query(
            r"
            INSERT INTO meal_plans (id, week_start, meals, notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ON CONFLICT(week_start) DO UPDATE SET
                id = excluded.id,
                meals = excluded.meals,
                notes = excluded.notes,
                updated_at = excluded.updated_at
            ",
        )
        .bind(plan.id.to_string())
        .bind(week_start.format(DATE_FORMAT).to_string())
        .bind(serde_json::to_string(&plan.meals)?)
        .bind(&plan.notes)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save meal plan: {e}")))?;

        Ok(())
    }

    /// Delete the plan for the week containing `date`
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn delete(&self, date: NaiveDate) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM meal_plans WHERE week_start = $1")
            .bind(week_start_for(date).format(DATE_FORMAT).to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete meal plan: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Plans whose week start falls within `from..=to`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_range(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<MealPlan>> {
        let rows = sqlx::query(
            r"
            SELECT id, week_start, meals, notes
            FROM meal_plans
            WHERE week_start >= $1 AND week_start <= $2
            ORDER BY week_start ASC
            ",
        )
        .bind(from.format(DATE_FORMAT).to_string())
        .bind(to.format(DATE_FORMAT).to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list meal plans: {e}")))?;

        rows.iter().map(row_to_meal_plan).collect()
    }

    /// Timestamp of the last save for the week containing `date`
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn last_updated(&self, date: NaiveDate) -> AppResult<Option<DateTime<Utc>>> {
        let row = sqlx::query("SELECT updated_at FROM meal_plans WHERE week_start = $1")
            .bind(week_start_for(date).format(DATE_FORMAT).to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get meal plan: {e}")))?;

        row.map(|r| parse_timestamp(&r.get::<String, _>("updated_at")))
            .transpose()
    }
}

/// Convert a database row to a `MealPlan`
fn row_to_meal_plan(row: &SqliteRow) -> AppResult<MealPlan> {
    let id_str: String = row.get("id");
    let week_start_str: String = row.get("week_start");
    let meals_json: String = row.get("meals");

    let meals: BTreeMap<DayOfWeek, Vec<PlannedMeal>> = serde_json::from_str(&meals_json)?;

    Ok(MealPlan {
        id: Uuid::parse_str(&id_str)
            .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?,
        week_start: NaiveDate::parse_from_str(&week_start_str, DATE_FORMAT)
            .map_err(|e| AppError::internal(format!("Invalid week start: {e}")))?,
        meals,
        notes: row.get("notes"),
    })
}
