// ABOUTME: Integration tests for weekly meal-plan generation
// ABOUTME: Checks exclusions, empty days, reproducible seeds, scripted pickers and plan identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{basic_catalog, monday, rich_catalog};
use kitchen_assistant::recipes::{
    DayOfWeek, DietaryRestriction, MealPlan, MealPlanGenerator, MealPlanPreferences, MealType,
    RecipePicker, SeededPicker,
};
use std::collections::VecDeque;

/// Picker replaying a fixed script of indices, wrapped into range
struct ScriptedPicker {
    script: VecDeque<usize>,
    calls: Vec<usize>,
}

impl ScriptedPicker {
    fn new(script: &[usize]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            calls: Vec::new(),
        }
    }
}

impl RecipePicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> Option<usize> {
        self.calls.push(len);
        if len == 0 {
            return None;
        }
        let next = self.script.pop_front().unwrap_or(0);
        self.script.push_back(next);
        Some(next % len)
    }
}

fn recipe_ids(plan: &MealPlan) -> Vec<String> {
    plan.meals
        .values()
        .flatten()
        .map(|meal| meal.recipe_id.clone())
        .collect()
}

#[test]
fn test_excluded_recipe_is_never_planned() {
    let prefs = MealPlanPreferences::default().excluding("1");
    for seed in 0..50 {
        let mut generator = MealPlanGenerator::new(SeededPicker::new(seed));
        let plan = generator.generate(&basic_catalog(), &prefs, None, monday());
        assert_eq!(plan.meal_count(), 21);
        assert!(!plan.contains_recipe("1"), "seed {seed}");
    }
}

#[test]
fn test_day_without_meal_types_has_no_entries() {
    let prefs = MealPlanPreferences::default().with_meal_types(DayOfWeek::Monday, &[]);
    let mut generator = MealPlanGenerator::new(SeededPicker::new(3));
    let plan = generator.generate(&basic_catalog(), &prefs, None, monday());

    assert!(plan.meals_for(DayOfWeek::Monday).is_empty());
    assert!(!plan.meals.contains_key(&DayOfWeek::Monday));
    assert_eq!(plan.meal_count(), 18);
}

#[test]
fn test_missing_day_in_preferences_has_no_entries() {
    let mut prefs = MealPlanPreferences::default();
    prefs.meal_types_per_day.remove(&DayOfWeek::Sunday);
    let mut generator = MealPlanGenerator::new(SeededPicker::new(3));
    let plan = generator.generate(&basic_catalog(), &prefs, None, monday());

    assert!(plan.meals_for(DayOfWeek::Sunday).is_empty());
    assert_eq!(plan.meal_count(), 18);
}

#[test]
fn test_same_seed_same_plan() {
    let prefs = MealPlanPreferences::default();
    let current = MealPlan::new(monday());

    let first = MealPlanGenerator::new(SeededPicker::new(42)).generate(
        &rich_catalog(),
        &prefs,
        Some(&current),
        monday(),
    );
    let second = MealPlanGenerator::new(SeededPicker::new(42)).generate(
        &rich_catalog(),
        &prefs,
        Some(&current),
        monday(),
    );

    assert_eq!(recipe_ids(&first), recipe_ids(&second));
}

#[test]
fn test_scripted_picker_drives_selection_in_slot_order() {
    let mut prefs = MealPlanPreferences::default()
        .with_meal_types(DayOfWeek::Monday, &[MealType::Dinner, MealType::Breakfast])
        .with_meal_types(DayOfWeek::Tuesday, &[MealType::Lunch]);
    for day in [
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ] {
        prefs.meal_types_per_day.remove(&day);
    }

    let mut picker = ScriptedPicker::new(&[2, 0, 1]);
    let plan = MealPlanGenerator::new(&mut picker).generate(
        &basic_catalog(),
        &prefs,
        None,
        monday(),
    );

    let monday_meals = plan.meals_for(DayOfWeek::Monday);
    assert_eq!(monday_meals.len(), 2);
    assert_eq!(monday_meals[0].meal_type, MealType::Breakfast);
    assert_eq!(monday_meals[0].recipe_name, "Pizza");
    assert_eq!(monday_meals[1].meal_type, MealType::Dinner);
    assert_eq!(monday_meals[1].recipe_name, "Pasta");

    let tuesday_meals = plan.meals_for(DayOfWeek::Tuesday);
    assert_eq!(tuesday_meals.len(), 1);
    assert_eq!(tuesday_meals[0].recipe_name, "Arroz");

    assert_eq!(picker.calls, vec![3, 3, 3]);
}

#[test]
fn test_restrictions_and_preferred_categories_limit_choices() {
    let prefs = MealPlanPreferences::default()
        .with_restriction(DietaryRestriction::GlutenFree)
        .preferring("arroces");
    let plan = MealPlanGenerator::new(SeededPicker::new(9)).generate(
        &rich_catalog(),
        &prefs,
        None,
        monday(),
    );

    assert_eq!(plan.meal_count(), 21);
    assert!(recipe_ids(&plan).iter().all(|id| id == "paella"));
}

#[test]
fn test_empty_catalog_produces_empty_plan() {
    let plan = MealPlanGenerator::new(SeededPicker::new(1)).generate(
        &[],
        &MealPlanPreferences::default(),
        None,
        monday(),
    );
    assert_eq!(plan.meal_count(), 0);
    assert_eq!(plan.week_start, monday());
}

#[test]
fn test_generated_meals_use_default_servings() {
    let prefs = MealPlanPreferences {
        default_servings: 2,
        ..MealPlanPreferences::default()
    };
    let plan = MealPlanGenerator::new(SeededPicker::new(5)).generate(
        &basic_catalog(),
        &prefs,
        None,
        monday(),
    );
    assert!(plan.meals.values().flatten().all(|meal| meal.servings == 2));
}

#[test]
fn test_regeneration_replaces_meals_but_keeps_identity() {
    let prefs = MealPlanPreferences::default();
    let mut current = MealPlanGenerator::new(SeededPicker::new(1)).generate(
        &basic_catalog(),
        &prefs,
        None,
        monday(),
    );
    current.notes = "Visita de los abuelos".to_owned();

    let regenerated = MealPlanGenerator::new(SeededPicker::new(2)).generate(
        &basic_catalog(),
        &prefs,
        Some(&current),
        monday(),
    );

    assert_eq!(regenerated.id, current.id);
    assert_eq!(regenerated.notes, current.notes);
    assert_eq!(regenerated.meal_count(), 21);
    let old_meal_ids: Vec<_> = current.meals.values().flatten().map(|m| m.id).collect();
    assert!(regenerated
        .meals
        .values()
        .flatten()
        .all(|meal| !old_meal_ids.contains(&meal.id)));
}
