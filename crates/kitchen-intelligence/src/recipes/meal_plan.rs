// ABOUTME: Weekly meal-plan generator filling active meal slots with eligible recipes
// ABOUTME: Random selection goes through an injectable RecipePicker so runs can be seeded or stubbed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal-Plan Generator
//!
//! Single-pass transform from a catalog snapshot and [`MealPlanPreferences`]
//! into a [`MealPlan`]. For every day Monday..Sunday and every active meal
//! type of that day, one recipe is drawn uniformly from the eligible set.
//! A slot with no eligible recipe is left unfilled; generation never fails.

use super::models::{DayOfWeek, MealPlan, MealPlanPreferences, PlannedMeal, Recipe};
use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Source of "pick one of N" decisions
pub trait RecipePicker {
    /// Return an index in `0..len`, or `None` when `len == 0`
    fn pick(&mut self, len: usize) -> Option<usize>;
}

impl<P: RecipePicker + ?Sized> RecipePicker for &mut P {
    fn pick(&mut self, len: usize) -> Option<usize> {
        (**self).pick(len)
    }
}

/// Uniform picker backed by `ChaCha8Rng`; equal seeds give equal sequences
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: ChaCha8Rng,
}

impl SeededPicker {
    /// Deterministic picker for reproducible plans
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Picker seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RecipePicker for SeededPicker {
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}

/// Whether `recipe` may be placed in a plan under `prefs`
///
/// All dietary restrictions must hold, the recipe must share a category with
/// `preferred_categories` when that set is non-empty, and its id must not be
/// in `excluded_recipes`.
#[must_use]
pub fn is_eligible(recipe: &Recipe, prefs: &MealPlanPreferences) -> bool {
    if prefs.excluded_recipes.contains(&recipe.id) {
        return false;
    }
    if !prefs
        .dietary_restrictions
        .iter()
        .all(|restriction| recipe.satisfies(*restriction))
    {
        return false;
    }
    prefs.preferred_categories.is_empty()
        || recipe
            .categories
            .iter()
            .any(|c| prefs.preferred_categories.contains(c))
}

/// Meal-plan generator parameterised over its random source
pub struct MealPlanGenerator<P> {
    picker: P,
}

impl<P: RecipePicker> MealPlanGenerator<P> {
    /// Create a generator drawing from `picker`
    pub const fn new(picker: P) -> Self {
        Self { picker }
    }

    /// Recipes from `catalog` eligible under `prefs`, in catalog order
    #[must_use]
    pub fn eligible_recipes<'a>(
        catalog: &'a [Recipe],
        prefs: &MealPlanPreferences,
    ) -> Vec<&'a Recipe> {
        catalog.iter().filter(|r| is_eligible(r, prefs)).collect()
    }

    /// Generate a plan for the week containing `week_start`
    ///
    /// When `current_plan` is given its id, week start and notes are kept;
    /// every day is rebuilt from the preferences. A day with no active slots,
    /// or no eligible recipe, has no entry in the result.
    pub fn generate(
        &mut self,
        catalog: &[Recipe],
        prefs: &MealPlanPreferences,
        current_plan: Option<&MealPlan>,
        week_start: NaiveDate,
    ) -> MealPlan {
        let mut plan = MealPlan::new(week_start);
        if let Some(current) = current_plan {
            plan.id = current.id;
            plan.week_start = current.week_start;
            plan.notes.clone_from(&current.notes);
        }

        let eligible = Self::eligible_recipes(catalog, prefs);
        let mut unfilled = 0_usize;

        for day in DayOfWeek::ALL {
            let Some(meal_types) = prefs.meal_types_per_day.get(&day) else {
                continue;
            };
            for meal_type in meal_types {
                match self.picker.pick(eligible.len()).and_then(|i| eligible.get(i)) {
                    Some(recipe) => plan.add_meal(
                        day,
                        PlannedMeal::new(recipe, *meal_type, prefs.default_servings),
                    ),
                    None => unfilled += 1,
                }
            }
        }

        debug!(
            week_start = %plan.week_start,
            catalog_size = catalog.len(),
            eligible = eligible.len(),
            planned = plan.meal_count(),
            unfilled,
            "Meal plan generated"
        );

        plan
    }
}
