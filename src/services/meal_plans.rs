// ABOUTME: Meal plan service: weekly generation plus manual add/remove of planned meals
// ABOUTME: Reads the current plan and preferences, runs the generator and saves the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits;
use crate::database::{Database, MealPlanManager, PreferencesManager, RecipeManager};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::recipes::{
    DayOfWeek, MealPlan, MealPlanGenerator, MealPlanPreferences, MealType, PlannedMeal,
    RecipePicker,
};
use chrono::NaiveDate;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// Weekly meal plan operations
pub struct MealPlanService {
    plans: MealPlanManager,
    recipes: RecipeManager,
    preferences: PreferencesManager,
    fallback_preferences: MealPlanPreferences,
}

impl MealPlanService {
    /// Create a service over `database`
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            plans: database.meal_plans(),
            recipes: database.recipes(),
            preferences: database.preferences(),
            fallback_preferences: MealPlanPreferences::default(),
        }
    }

    /// Preferences used when none have been stored
    #[must_use]
    pub fn with_fallback_preferences(mut self, preferences: MealPlanPreferences) -> Self {
        self.fallback_preferences = preferences;
        self
    }

    /// Effective planning preferences
    ///
    /// # Errors
    ///
    /// Returns an error if stored preferences cannot be read
    pub async fn preferences(&self) -> AppResult<MealPlanPreferences> {
        Ok(self
            .preferences
            .load()
            .await?
            .unwrap_or_else(|| self.fallback_preferences.clone()))
    }

    /// Stored plan for the week containing `date`
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_week(&self, date: NaiveDate) -> AppResult<Option<MealPlan>> {
        self.plans.get(date).await
    }

    /// Generate and save the plan for the week containing `week_start`
    ///
    /// An existing plan for that week keeps its id and notes; its meals are
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if loading inputs or saving the plan fails
    pub async fn generate_week<P: RecipePicker>(
        &self,
        week_start: NaiveDate,
        picker: P,
    ) -> AppResult<MealPlan> {
        let started = Instant::now();
        let current = self.plans.get(week_start).await?;
        let preferences = self.preferences().await?;
        let catalog = self.recipes.list_all().await?;

        let plan = MealPlanGenerator::new(picker).generate(
            &catalog,
            &preferences,
            current.as_ref(),
            week_start,
        );
        self.plans.save(&plan).await?;

        AppLogger::log_plan_generation(
            &plan.week_start.to_string(),
            preferences.slot_count(),
            plan.meal_count(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(plan)
    }

    /// Add a recipe to a day of the week containing `date`
    ///
    /// Creates the week's plan if none exists. `servings` defaults to the
    /// effective preferences' default servings.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown recipe, `InvalidInput` for
    /// servings out of range, or a database error
    pub async fn add_meal(
        &self,
        date: NaiveDate,
        day: DayOfWeek,
        recipe_id: &str,
        meal_type: MealType,
        servings: Option<u32>,
    ) -> AppResult<PlannedMeal> {
        let recipe = self.recipes.get(recipe_id).await?.ok_or_else(|| {
            AppError::not_found(format!("Recipe {recipe_id}")).with_resource_id(recipe_id)
        })?;

        let servings = match servings {
            Some(servings) => servings,
            None => self.preferences().await?.default_servings,
        };
        if servings == 0 || servings > limits::MAX_SERVINGS {
            return Err(AppError::invalid_input(format!(
                "Servings must be between 1 and {}",
                limits::MAX_SERVINGS
            )));
        }

        let mut plan = self
            .plans
            .get(date)
            .await?
            .unwrap_or_else(|| MealPlan::new(date));
        let meal = PlannedMeal::new(&recipe, meal_type, servings);
        plan.add_meal(day, meal.clone());
        self.plans.save(&plan).await?;

        info!(
            week_start = %plan.week_start,
            day = %day,
            recipe_id = %recipe.id,
            meal_type = %meal_type,
            "Meal added to plan"
        );
        Ok(meal)
    }

    /// Remove a planned meal; returns `false` if the week or meal is unknown
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn remove_meal(
        &self,
        date: NaiveDate,
        day: DayOfWeek,
        meal_id: Uuid,
    ) -> AppResult<bool> {
        let Some(mut plan) = self.plans.get(date).await? else {
            return Ok(false);
        };
        if !plan.remove_meal(day, meal_id) {
            return Ok(false);
        }
        self.plans.save(&plan).await?;
        Ok(true)
    }
}
