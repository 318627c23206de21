// ABOUTME: Database operations for the recipe catalog
// ABOUTME: CRUD, favorites and last-shown tracking; also the catalog provider for search and planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp};
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::recipes::{Difficulty, MealType, Recipe, RecipeIngredient};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::debug;

const RECIPE_COLUMNS: &str = r"
    id, name, description, ingredients, instructions, prep_time_mins, cook_time_mins,
    servings, difficulty, cuisine, meal_type, categories, is_vegetarian, is_vegan,
    is_gluten_free, is_dairy_free, is_nut_free, rating, is_favorite, created_at,
    updated_at, last_shown_at
";

/// Validate user-supplied recipe fields before they reach storage
///
/// # Errors
///
/// Returns `InvalidInput` for an empty or overlong name, servings outside
/// `1..=MAX_SERVINGS`, or a rating outside `0..=MAX_RATING`
pub fn validate_recipe(recipe: &Recipe) -> AppResult<()> {
    let name = recipe.name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("Recipe name must not be empty"));
    }
    if name.chars().count() > limits::MAX_RECIPE_NAME_LEN {
        return Err(AppError::invalid_input(format!(
            "Recipe name exceeds {} characters",
            limits::MAX_RECIPE_NAME_LEN
        )));
    }
    if recipe.servings == 0 || recipe.servings > limits::MAX_SERVINGS {
        return Err(AppError::invalid_input(format!(
            "Servings must be between 1 and {}",
            limits::MAX_SERVINGS
        ))
        .with_resource_id(&recipe.id));
    }
    if let Some(rating) = recipe.rating {
        if !(0.0..=limits::MAX_RATING).contains(&rating) {
            return Err(AppError::invalid_input(format!(
                "Rating must be between 0 and {}",
                limits::MAX_RATING
            ))
            .with_resource_id(&recipe.id));
        }
    }
    Ok(())
}

/// Recipe database operations manager
pub struct RecipeManager {
    pool: SqlitePool,
}

impl RecipeManager {
    /// Create a new recipe manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new recipe
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if validation fails, `ResourceAlreadyExists` if
    /// the id is taken, or a database error
    pub async fn create(&self, recipe: &Recipe) -> AppResult<Recipe> {
        validate_recipe(recipe)?;
        let started = Instant::now();

        let mut stored = recipe.clone();
        stored.name = recipe.name.trim().to_owned();

        let result = sqlx::query(&format!(
            "INSERT INTO recipes ({RECIPE_COLUMNS}) VALUES \
             ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, \
             $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22)"
        ))
        .bind(&stored.id)
        .bind(&stored.name)
        .bind(&stored.description)
        .bind(serde_json::to_string(&stored.ingredients)?)
        .bind(serde_json::to_string(&stored.instructions)?)
        .bind(i64::from(stored.prep_time_mins))
        .bind(i64::from(stored.cook_time_mins))
        .bind(i64::from(stored.servings))
        .bind(stored.difficulty.as_str())
        .bind(&stored.cuisine)
        .bind(stored.meal_type.map(|m| m.as_str()))
        .bind(serde_json::to_string(&stored.categories)?)
        .bind(stored.is_vegetarian)
        .bind(stored.is_vegan)
        .bind(stored.is_gluten_free)
        .bind(stored.is_dairy_free)
        .bind(stored.is_nut_free)
        .bind(stored.rating.map(f64::from))
        .bind(stored.is_favorite)
        .bind(format_timestamp(stored.created_at))
        .bind(format_timestamp(stored.updated_at))
        .bind(stored.last_shown_at.map(format_timestamp))
        .execute(&self.pool)
        .await;

        if let Err(e) = result {
            AppLogger::log_database_operation("insert", "recipes", false, elapsed_ms(started));
            if e.as_database_error().is_some_and(|db_err| db_err.is_unique_violation()) {
                return Err(AppError::already_exists(format!("Recipe {}", stored.id))
                    .with_resource_id(&stored.id));
            }
            return Err(AppError::database(format!("Failed to create recipe: {e}")));
        }

        AppLogger::log_database_operation("insert", "recipes", true, elapsed_ms(started));
        Ok(stored)
    }

    /// Get a recipe by id
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get(&self, recipe_id: &str) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(&format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1"))
            .bind(recipe_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get recipe: {e}")))?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }

    /// All recipes ordered by creation time, then id
    ///
    /// This is the catalog snapshot handed to search and meal planning.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_all(&self) -> AppResult<Vec<Recipe>> {
        let started = Instant::now();
        let rows = sqlx::query(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        let recipes = rows.iter().map(row_to_recipe).collect::<AppResult<Vec<_>>>()?;
        debug!(count = recipes.len(), duration_ms = elapsed_ms(started), "Loaded recipe catalog");
        Ok(recipes)
    }

    /// Replace every editable field of an existing recipe
    ///
    /// `created_at` is preserved and `updated_at` is set to now. Returns
    /// `None` when no recipe has this id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if validation fails, or a database error
    pub async fn update(&self, recipe: &Recipe) -> AppResult<Option<Recipe>> {
        validate_recipe(recipe)?;
        let now = Utc::now();

        let result = sqlx::query(
            r"
            UPDATE recipes SET
                name = $1, description = $2, ingredients = $3, instructions = $4,
                prep_time_mins = $5, cook_time_mins = $6, servings = $7, difficulty = $8,
                cuisine = $9, meal_type = $10, categories = $11, is_vegetarian = $12,
                is_vegan = $13, is_gluten_free = $14, is_dairy_free = $15, is_nut_free = $16,
                rating = $17, is_favorite = $18, updated_at = $19
            WHERE id = $20
            ",
        )
        .bind(recipe.name.trim())
        .bind(&recipe.description)
        .bind(serde_json::to_string(&recipe.ingredients)?)
        .bind(serde_json::to_string(&recipe.instructions)?)
        .bind(i64::from(recipe.prep_time_mins))
        .bind(i64::from(recipe.cook_time_mins))
        .bind(i64::from(recipe.servings))
        .bind(recipe.difficulty.as_str())
        .bind(&recipe.cuisine)
        .bind(recipe.meal_type.map(|m| m.as_str()))
        .bind(serde_json::to_string(&recipe.categories)?)
        .bind(recipe.is_vegetarian)
        .bind(recipe.is_vegan)
        .bind(recipe.is_gluten_free)
        .bind(recipe.is_dairy_free)
        .bind(recipe.is_nut_free)
        .bind(recipe.rating.map(f64::from))
        .bind(recipe.is_favorite)
        .bind(format_timestamp(now))
        .bind(&recipe.id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update recipe: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get(&recipe.id).await
    }

    /// Delete a recipe
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn delete(&self, recipe_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete recipe: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Toggle favorite status, returning the new value (`None` if unknown id)
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn toggle_favorite(&self, recipe_id: &str) -> AppResult<Option<bool>> {
        let row = sqlx::query(
            r"
            UPDATE recipes SET is_favorite = 1 - is_favorite, updated_at = $1
            WHERE id = $2
            RETURNING is_favorite
            ",
        )
        .bind(format_timestamp(Utc::now()))
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to toggle favorite: {e}")))?;

        Ok(row.map(|r| r.get::<i64, _>("is_favorite") == 1))
    }

    /// Favorite recipes ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_favorites(&self) -> AppResult<Vec<Recipe>> {
        let rows = sqlx::query(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE is_favorite = 1 \
             ORDER BY name COLLATE NOCASE ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list favorite recipes: {e}")))?;

        rows.iter().map(row_to_recipe).collect()
    }

    /// Record that a recipe was shown to the user
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn mark_shown(&self, recipe_id: &str) -> AppResult<bool> {
        let result = sqlx::query("UPDATE recipes SET last_shown_at = $1 WHERE id = $2")
            .bind(format_timestamp(Utc::now()))
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to mark recipe shown: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count stored recipes
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn count(&self) -> AppResult<u32> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM recipes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count recipes: {e}")))?;

        let count: i64 = row.get("count");
        u32::try_from(count).map_err(|e| AppError::internal(format!("Recipe count overflow: {e}")))
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn column_u32(row: &SqliteRow, column: &str) -> AppResult<u32> {
    let value: i64 = row.get(column);
    u32::try_from(value)
        .map_err(|e| AppError::internal(format!("Invalid value in recipes.{column}: {e}")))
}

/// Convert a database row to a `Recipe`
fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let ingredients_json: String = row.get("ingredients");
    let instructions_json: String = row.get("instructions");
    let categories_json: String = row.get("categories");
    let difficulty_str: String = row.get("difficulty");
    let meal_type_str: Option<String> = row.get("meal_type");
    let rating: Option<f64> = row.get("rating");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");
    let last_shown_at_str: Option<String> = row.get("last_shown_at");

    let ingredients: Vec<RecipeIngredient> = serde_json::from_str(&ingredients_json)?;
    let instructions: Vec<String> = serde_json::from_str(&instructions_json)?;
    let categories: BTreeSet<String> = serde_json::from_str(&categories_json)?;

    Ok(Recipe {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        ingredients,
        instructions,
        prep_time_mins: column_u32(row, "prep_time_mins")?,
        cook_time_mins: column_u32(row, "cook_time_mins")?,
        servings: column_u32(row, "servings")?,
        difficulty: difficulty_str.parse::<Difficulty>()?,
        cuisine: row.get("cuisine"),
        meal_type: meal_type_str
            .as_deref()
            .map(str::parse::<MealType>)
            .transpose()?,
        categories,
        is_vegetarian: row.get("is_vegetarian"),
        is_vegan: row.get("is_vegan"),
        is_gluten_free: row.get("is_gluten_free"),
        is_dairy_free: row.get("is_dairy_free"),
        is_nut_free: row.get("is_nut_free"),
        #[allow(clippy::cast_possible_truncation)]
        rating: rating.map(|r| r as f32),
        is_favorite: row.get("is_favorite"),
        created_at: parse_timestamp(&created_at_str)?,
        updated_at: parse_timestamp(&updated_at_str)?,
        last_shown_at: last_shown_at_str
            .as_deref()
            .map(parse_timestamp)
            .transpose()?,
    })
}
