// ABOUTME: Recipe search service running the query engine over the stored catalog
// ABOUTME: Also resolves single recipes for display and records when they were shown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database::RecipeManager;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::recipes::{Recipe, RecipeQueryEngine, SearchFilters};
use std::time::Instant;

/// Recipe search and lookup
pub struct RecipeService {
    recipes: RecipeManager,
}

impl RecipeService {
    /// Create a service over `recipes`
    #[must_use]
    pub const fn new(recipes: RecipeManager) -> Self {
        Self { recipes }
    }

    /// Search the full catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded
    pub async fn search(&self, query: &str, filters: &SearchFilters) -> AppResult<Vec<Recipe>> {
        let started = Instant::now();
        let catalog = self.recipes.list_all().await?;
        let results = RecipeQueryEngine::search(&catalog, query, filters);

        AppLogger::log_recipe_search(
            query,
            catalog.len(),
            results.len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(results)
    }

    /// Fetch a recipe for display and record that it was shown
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or a database error
    pub async fn show(&self, recipe_id: &str) -> AppResult<Recipe> {
        let not_found =
            || AppError::not_found(format!("Recipe {recipe_id}")).with_resource_id(recipe_id);
        if !self.recipes.mark_shown(recipe_id).await? {
            return Err(not_found());
        }
        self.recipes.get(recipe_id).await?.ok_or_else(not_found)
    }
}
