// ABOUTME: Weekly meal plan commands for kitchen-cli
// ABOUTME: Handles generate, show, delete, list, add and remove operations on week plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, NaiveDate};
use kitchen_assistant::{
    config::AppConfig,
    database::Database,
    errors::{AppError, AppResult},
    recipes::{week_start_for, MealPlanPreferences, SeededPicker},
    services::MealPlanService,
};
use tracing::info;

use crate::helpers::display::{display_meal_plan, print_json};
use crate::PlanCommand;

type Result<T> = AppResult<T>;

/// Dispatch a `plan` subcommand
pub async fn run(
    database: &Database,
    config: &AppConfig,
    command: PlanCommand,
    json: bool,
) -> Result<()> {
    let service = MealPlanService::new(database).with_fallback_preferences(
        MealPlanPreferences {
            default_servings: config.default_servings,
            ..MealPlanPreferences::default()
        },
    );

    match command {
        PlanCommand::Generate { week, seed } => {
            let picker = match seed.or(config.plan_seed) {
                Some(seed) => {
                    info!(seed, "Generating meal plan with fixed seed");
                    SeededPicker::new(seed)
                }
                None => SeededPicker::from_entropy(),
            };
            let plan = service.generate_week(resolve_week(week), picker).await?;
            if json {
                print_json(&plan)?;
            } else {
                display_meal_plan(&plan);
            }
        }
        PlanCommand::Show { week } => {
            let week = resolve_week(week);
            let plan = service.get_week(week).await?.ok_or_else(|| {
                AppError::not_found(format!("Meal plan for week of {}", week_start_for(week)))
            })?;
            if json {
                print_json(&plan)?;
            } else {
                display_meal_plan(&plan);
            }
        }
        PlanCommand::Delete { week } => {
            let week = week_start_for(resolve_week(week));
            if !database.meal_plans().delete(week).await? {
                return Err(AppError::not_found(format!("Meal plan for week of {week}")));
            }
            println!("Deleted meal plan for week of {week}");
        }
        PlanCommand::List { from, to } => list(database, from, to, json).await?,
        PlanCommand::Add {
            week,
            day,
            recipe,
            meal_type,
            servings,
        } => {
            let meal = service
                .add_meal(resolve_week(week), day, &recipe, meal_type, servings)
                .await?;
            if json {
                print_json(&meal)?;
            } else {
                println!(
                    "Planned '{}' for {day} {meal_type} ({} servings) as {}",
                    meal.recipe_name, meal.servings, meal.id
                );
            }
        }
        PlanCommand::Remove { week, day, meal_id } => {
            if !service.remove_meal(resolve_week(week), day, meal_id).await? {
                return Err(AppError::not_found(format!("Planned meal {meal_id}"))
                    .with_resource_id(meal_id.to_string()));
            }
            println!("Removed planned meal {meal_id}");
        }
    }

    Ok(())
}

async fn list(database: &Database, from: NaiveDate, to: NaiveDate, json: bool) -> Result<()> {
    let plans = database.meal_plans().list_range(from, to).await?;
    if json {
        return print_json(&plans);
    }

    if plans.is_empty() {
        println!("No meal plans between {from} and {to}.");
    }
    for plan in &plans {
        println!(
            "{}  {} meal(s)  {}",
            plan.week_start,
            plan.meal_count(),
            plan.id
        );
    }
    Ok(())
}

fn resolve_week(week: Option<NaiveDate>) -> NaiveDate {
    week.unwrap_or_else(|| Local::now().date_naive())
}
