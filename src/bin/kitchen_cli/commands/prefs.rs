// ABOUTME: Meal planning preference commands for kitchen-cli
// ABOUTME: Shows effective preferences, applies incremental changes and resets to defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kitchen_assistant::{
    config::AppConfig,
    database::Database,
    errors::{AppError, AppResult},
    recipes::{DayOfWeek, DietaryRestriction, MealPlanPreferences, MealType},
    services::MealPlanService,
};
use std::collections::BTreeSet;

use crate::helpers::display::{display_preferences, print_json};

type Result<T> = AppResult<T>;

/// Incremental preference changes for `prefs set`
#[derive(clap::Args, Debug, Default)]
pub struct PrefsChanges {
    /// Servings for generated meals
    #[arg(long)]
    servings: Option<u32>,

    /// Meal slots for a day as day=type,type (repeatable; "day=" clears the day)
    #[arg(long = "day-meals")]
    day_meals: Vec<String>,

    /// Recipe id never to plan (repeatable)
    #[arg(long)]
    exclude: Vec<String>,

    /// Recipe id to allow again (repeatable)
    #[arg(long)]
    include: Vec<String>,

    /// Preferred category (repeatable)
    #[arg(long)]
    prefer: Vec<String>,

    /// Category to stop preferring (repeatable)
    #[arg(long)]
    unprefer: Vec<String>,

    /// Dietary restriction to require (repeatable)
    #[arg(long)]
    restrict: Vec<DietaryRestriction>,

    /// Dietary restriction to drop (repeatable)
    #[arg(long)]
    unrestrict: Vec<DietaryRestriction>,
}

impl PrefsChanges {
    /// Apply the changes on top of `preferences`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a malformed `--day-meals` value
    pub fn apply(self, mut preferences: MealPlanPreferences) -> Result<MealPlanPreferences> {
        if let Some(servings) = self.servings {
            preferences.default_servings = servings;
        }
        for day_meals in &self.day_meals {
            let (day, meal_types) = parse_day_meals(day_meals)?;
            preferences.meal_types_per_day.insert(day, meal_types);
        }
        for id in &self.include {
            preferences.excluded_recipes.remove(id);
        }
        preferences.excluded_recipes.extend(self.exclude);
        for category in &self.unprefer {
            preferences.preferred_categories.remove(category);
        }
        preferences.preferred_categories.extend(self.prefer);
        for restriction in &self.unrestrict {
            preferences.dietary_restrictions.remove(restriction);
        }
        preferences.dietary_restrictions.extend(self.restrict);
        Ok(preferences)
    }
}

/// Parse `monday=breakfast,lunch`
fn parse_day_meals(value: &str) -> Result<(DayOfWeek, BTreeSet<MealType>)> {
    let (day, meals) = value.split_once('=').ok_or_else(|| {
        AppError::invalid_input(format!("Expected day=meal,meal but got '{value}'"))
    })?;
    let day: DayOfWeek = day.parse()?;
    let meal_types = meals
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::parse::<MealType>)
        .collect::<Result<BTreeSet<_>>>()?;
    Ok((day, meal_types))
}

fn service(database: &Database, config: &AppConfig) -> MealPlanService {
    MealPlanService::new(database).with_fallback_preferences(MealPlanPreferences {
        default_servings: config.default_servings,
        ..MealPlanPreferences::default()
    })
}

/// Show effective preferences
pub async fn show(database: &Database, config: &AppConfig, json: bool) -> Result<()> {
    let preferences = service(database, config).preferences().await?;
    if json {
        print_json(&preferences)
    } else {
        display_preferences(&preferences);
        Ok(())
    }
}

/// Apply changes to the effective preferences and store the result
pub async fn set(database: &Database, config: &AppConfig, changes: PrefsChanges) -> Result<()> {
    let current = service(database, config).preferences().await?;
    let updated = changes.apply(current)?;
    database.preferences().update(&updated).await?;
    display_preferences(&updated);
    Ok(())
}

/// Forget stored preferences
pub async fn reset(database: &Database) -> Result<()> {
    if database.preferences().reset().await? {
        println!("Preferences reset to defaults");
    } else {
        println!("No stored preferences; defaults already apply");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_meals() {
        let (day, meals) = parse_day_meals("sunday=lunch, dinner").unwrap();
        assert_eq!(day, DayOfWeek::Sunday);
        assert_eq!(
            meals.into_iter().collect::<Vec<_>>(),
            vec![MealType::Lunch, MealType::Dinner]
        );

        let (_, cleared) = parse_day_meals("monday=").unwrap();
        assert!(cleared.is_empty());

        assert!(parse_day_meals("monday").is_err());
        assert!(parse_day_meals("someday=lunch").is_err());
    }

    #[test]
    fn test_apply_changes() {
        let changes = PrefsChanges {
            servings: Some(2),
            exclude: vec!["r1".into()],
            prefer: vec!["pasta".into()],
            restrict: vec![DietaryRestriction::Vegan],
            ..PrefsChanges::default()
        };
        let prefs = changes.apply(MealPlanPreferences::default()).unwrap();
        assert_eq!(prefs.default_servings, 2);
        assert!(prefs.excluded_recipes.contains("r1"));
        assert!(prefs.preferred_categories.contains("pasta"));
        assert!(prefs.dietary_restrictions.contains(&DietaryRestriction::Vegan));

        let undo = PrefsChanges {
            include: vec!["r1".into()],
            unprefer: vec!["pasta".into()],
            unrestrict: vec![DietaryRestriction::Vegan],
            ..PrefsChanges::default()
        };
        let prefs = undo.apply(prefs).unwrap();
        assert!(prefs.excluded_recipes.is_empty());
        assert!(prefs.preferred_categories.is_empty());
        assert!(prefs.dietary_restrictions.is_empty());
    }
}
