// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, in-memory databases and a small Spanish recipe catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `kitchen_assistant`

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use kitchen_assistant::database::Database;
use kitchen_assistant::recipes::{
    DietaryRestriction, Difficulty, MealType, Recipe, RecipeIngredient,
};
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok(_) | Err(_) => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory database with the schema applied
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new("sqlite::memory:").await.unwrap()
}

/// Fixed instant `days` days after 2025-01-01
pub fn day(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap() + chrono::Duration::days(days)
}

/// Monday 2025-03-03
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}

/// Recipe with a fixed id, cooking time and creation date
pub fn timed_recipe(id: &str, name: &str, cook_time_mins: u32) -> Recipe {
    Recipe::new(name, 4)
        .with_id(id)
        .with_cook_time(cook_time_mins)
        .with_created_at(day(0))
}

/// Pasta (30 min), Arroz (45 min), Pizza (20 min)
pub fn basic_catalog() -> Vec<Recipe> {
    vec![
        timed_recipe("1", "Pasta", 30),
        timed_recipe("2", "Arroz", 45),
        timed_recipe("3", "Pizza", 20),
    ]
}

/// Larger catalog with ingredients, categories, dietary flags and ratings
pub fn rich_catalog() -> Vec<Recipe> {
    vec![
        Recipe::new("Tortilla de patatas", 4)
            .with_id("tortilla")
            .with_description("Clásica tortilla española con cebolla")
            .with_prep_time(15)
            .with_cook_time(25)
            .with_difficulty(Difficulty::Medium)
            .with_cuisine("española")
            .with_meal_type(MealType::Dinner)
            .with_category("huevos")
            .with_ingredient(RecipeIngredient::new("Huevos", 6.0, "unidades"))
            .with_ingredient(RecipeIngredient::new("Patatas", 500.0, "g"))
            .with_ingredient(RecipeIngredient::new("Cebolla", 1.0, "unidad"))
            .with_instruction("Pelar y cortar las patatas")
            .with_instruction("Freír las patatas con la cebolla")
            .with_instruction("Batir los huevos y cuajar")
            .with_restriction(DietaryRestriction::Vegetarian)
            .with_restriction(DietaryRestriction::GlutenFree)
            .with_rating(4.5)
            .with_created_at(day(3)),
        Recipe::new("Gazpacho", 6)
            .with_id("gazpacho")
            .with_description("Sopa fría de tomate")
            .with_prep_time(20)
            .with_category("sopas")
            .with_ingredient(RecipeIngredient::new("Tomate", 1.0, "kg"))
            .with_ingredient(RecipeIngredient::new("Pepino", 1.0, "unidad"))
            .with_ingredient(RecipeIngredient::new("Pan duro", 100.0, "g"))
            .with_instruction("Triturar todo")
            .with_restriction(DietaryRestriction::Vegan)
            .with_rating(4.0)
            .with_created_at(day(1)),
        Recipe::new("Paella de marisco", 4)
            .with_id("paella")
            .with_description("Arroz con gambas y mejillones")
            .with_prep_time(20)
            .with_cook_time(40)
            .with_difficulty(Difficulty::Hard)
            .with_category("arroces")
            .with_category("marisco")
            .with_ingredient(RecipeIngredient::new("Arroz bomba", 400.0, "g"))
            .with_ingredient(RecipeIngredient::new("Gambas", 300.0, "g"))
            .with_restriction(DietaryRestriction::GlutenFree)
            .with_rating(4.8)
            .with_created_at(day(5)),
        Recipe::new("Macarrones con tomate", 2)
            .with_id("macarrones")
            .with_description("Pasta rápida para niños")
            .with_cook_time(15)
            .with_category("pasta")
            .with_ingredient(RecipeIngredient::new("Macarrones", 250.0, "g"))
            .with_ingredient(RecipeIngredient::new("Tomate frito", 200.0, "ml"))
            .with_restriction(DietaryRestriction::Vegetarian)
            .with_created_at(day(2)),
    ]
}
