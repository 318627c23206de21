// ABOUTME: Integration tests for the recipe and meal plan services
// ABOUTME: Exercises search over stored recipes, weekly generation persistence and manual plan edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{basic_catalog, create_test_database, monday, rich_catalog};
use kitchen_assistant::database::Database;
use kitchen_assistant::errors::ErrorCode;
use kitchen_assistant::recipes::{
    DayOfWeek, InclusiveRange, MealPlanPreferences, MealType, Recipe, SearchFilters,
    SeededPicker, SortOption,
};
use kitchen_assistant::services::{MealPlanService, RecipeService};
use uuid::Uuid;

async fn seeded_database(catalog: Vec<Recipe>) -> Database {
    let database = create_test_database().await;
    for recipe in catalog {
        database.recipes().create(&recipe).await.unwrap();
    }
    database
}

#[tokio::test]
async fn test_search_runs_over_stored_catalog() {
    let database = seeded_database(basic_catalog()).await;
    let service = RecipeService::new(database.recipes());

    let pasta = service.search("pasta", &SearchFilters::default()).await.unwrap();
    assert_eq!(pasta.len(), 1);
    assert_eq!(pasta[0].name, "Pasta");

    let filters = SearchFilters::default()
        .with_cooking_time(InclusiveRange::new(25, 50))
        .sorted_by(SortOption::CookingTime);
    let names: Vec<String> = service
        .search("", &filters)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Pasta", "Arroz"]);
}

#[tokio::test]
async fn test_show_marks_recipe_and_reports_unknown_ids() {
    let database = seeded_database(basic_catalog()).await;
    let service = RecipeService::new(database.recipes());

    let shown = service.show("2").await.unwrap();
    assert_eq!(shown.name, "Arroz");
    assert!(shown.last_shown_at.is_some());

    let err = service.show("missing").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_generate_week_saves_plan_and_keeps_identity_on_regeneration() {
    let database = seeded_database(rich_catalog()).await;
    let service = MealPlanService::new(&database);

    let first = service
        .generate_week(monday() + Duration::days(2), SeededPicker::new(11))
        .await
        .unwrap();
    assert_eq!(first.week_start, monday());
    assert_eq!(first.meal_count(), 21);
    assert_eq!(service.get_week(monday()).await.unwrap().unwrap(), first);

    let second = service
        .generate_week(monday(), SeededPicker::new(12))
        .await
        .unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(service.get_week(monday()).await.unwrap().unwrap(), second);
}

#[tokio::test]
async fn test_generate_week_uses_stored_preferences() {
    let database = seeded_database(rich_catalog()).await;
    let prefs = MealPlanPreferences::default()
        .with_meal_types(DayOfWeek::Monday, &[])
        .preferring("sopas");
    database.preferences().update(&prefs).await.unwrap();

    let plan = MealPlanService::new(&database)
        .generate_week(monday(), SeededPicker::new(1))
        .await
        .unwrap();
    assert!(plan.meals_for(DayOfWeek::Monday).is_empty());
    assert_eq!(plan.meal_count(), 18);
    assert!(plan.meals.values().flatten().all(|m| m.recipe_id == "gazpacho"));
}

#[tokio::test]
async fn test_fallback_preferences_apply_when_none_stored() {
    let database = seeded_database(basic_catalog()).await;
    let fallback = MealPlanPreferences {
        default_servings: 2,
        ..MealPlanPreferences::default()
    };
    let service = MealPlanService::new(&database).with_fallback_preferences(fallback.clone());
    assert_eq!(service.preferences().await.unwrap(), fallback);

    let plan = service
        .generate_week(monday(), SeededPicker::new(4))
        .await
        .unwrap();
    assert!(plan.meals.values().flatten().all(|m| m.servings == 2));

    database
        .preferences()
        .update(&MealPlanPreferences::default())
        .await
        .unwrap();
    assert_eq!(service.preferences().await.unwrap().default_servings, 4);
}

#[tokio::test]
async fn test_add_and_remove_meal() {
    let database = seeded_database(basic_catalog()).await;
    let service = MealPlanService::new(&database);

    let meal = service
        .add_meal(monday(), DayOfWeek::Wednesday, "3", MealType::Dinner, None)
        .await
        .unwrap();
    assert_eq!(meal.recipe_name, "Pizza");
    assert_eq!(meal.servings, 4);

    let plan = service.get_week(monday()).await.unwrap().unwrap();
    assert_eq!(plan.meals_for(DayOfWeek::Wednesday), [meal.clone()]);

    assert!(!service
        .remove_meal(monday(), DayOfWeek::Thursday, meal.id)
        .await
        .unwrap());
    assert!(!service
        .remove_meal(monday(), DayOfWeek::Wednesday, Uuid::new_v4())
        .await
        .unwrap());
    assert!(service
        .remove_meal(monday(), DayOfWeek::Wednesday, meal.id)
        .await
        .unwrap());
    assert_eq!(service.get_week(monday()).await.unwrap().unwrap().meal_count(), 0);

    let other_week = monday() + Duration::weeks(4);
    assert!(!service
        .remove_meal(other_week, DayOfWeek::Monday, meal.id)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_add_meal_validates_recipe_and_servings() {
    let database = seeded_database(basic_catalog()).await;
    let service = MealPlanService::new(&database);

    let unknown = service
        .add_meal(monday(), DayOfWeek::Monday, "missing", MealType::Lunch, None)
        .await
        .unwrap_err();
    assert_eq!(unknown.code, ErrorCode::ResourceNotFound);

    let zero = service
        .add_meal(monday(), DayOfWeek::Monday, "1", MealType::Lunch, Some(0))
        .await
        .unwrap_err();
    assert_eq!(zero.code, ErrorCode::InvalidInput);
    assert!(service.get_week(monday()).await.unwrap().is_none());
}
