// ABOUTME: Recipe module for catalog search and weekly meal planning
// ABOUTME: Provides recipe models, the query engine and the meal-plan generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes Module
//!
//! ## Key Features
//!
//! - Recipe catalog models with dietary flags, categories and ratings
//! - Declarative search filters with text, range, set and tri-state dietary matching
//! - Deterministic sorting with an id tie-break
//! - Weekly meal-plan generation with an injectable random source
//!
//! ## Example Usage
//!
//! ```text
//! use kitchen_intelligence::recipes::{RecipeQueryEngine, SearchFilters, SortOption};
//!
//! let filters = SearchFilters::default().sorted_by(SortOption::CookingTime);
//! let quick = RecipeQueryEngine::search(&catalog, "pasta", &filters);
//! ```

/// Weekly meal-plan generation
pub mod meal_plan;
/// Core data models for recipes and meal plans
pub mod models;
/// Recipe query engine (text search, filters, sort)
pub mod search;

// Re-export main types for convenience
pub use meal_plan::{is_eligible, MealPlanGenerator, RecipePicker, SeededPicker};
pub use models::{
    week_start_for, DayOfWeek, DietaryRestriction, Difficulty, MealPlan, MealPlanPreferences,
    MealType, PlannedMeal, Recipe, RecipeIngredient,
};
pub use search::{InclusiveRange, RecipeQueryEngine, SearchFilters, SortOption};
