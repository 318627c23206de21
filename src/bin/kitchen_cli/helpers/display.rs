// ABOUTME: Output formatting helpers for kitchen-cli
// ABOUTME: Prints recipes, meal plans, preferences and conversations as text or pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kitchen_assistant::database::{
    ConversationRecord, ConversationSummary, MessageRecord, MessageRole,
};
use kitchen_assistant::errors::AppResult;
use kitchen_assistant::recipes::{
    DayOfWeek, DietaryRestriction, MealPlan, MealPlanPreferences, MealType, PlannedMeal, Recipe,
};
use serde::Serialize;

/// Print any serializable value as pretty JSON
///
/// # Errors
///
/// Returns a serialization error if `value` cannot be encoded
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn diet_labels(recipe: &Recipe) -> String {
    let labels: Vec<&str> = [
        (recipe.is_vegan, "vegan"),
        (recipe.is_vegetarian, "vegetarian"),
        (recipe.is_gluten_free, "gluten-free"),
        (recipe.is_dairy_free, "dairy-free"),
        (recipe.is_nut_free, "nut-free"),
    ]
    .into_iter()
    .filter_map(|(set, label)| set.then_some(label))
    .collect();

    if labels.is_empty() {
        "-".to_owned()
    } else {
        labels.join(", ")
    }
}

/// Display a full recipe with ingredients and steps
pub fn display_recipe(recipe: &Recipe) {
    let star = if recipe.is_favorite { " *" } else { "" };
    println!("\n{}{star}", recipe.name);
    println!("{}", "=".repeat(60));
    println!("   Id: {}", recipe.id);
    if !recipe.description.is_empty() {
        println!("   {}", recipe.description);
    }
    println!(
        "   Time: {} min (prep {} + cook {})",
        recipe.total_time_mins(),
        recipe.prep_time_mins,
        recipe.cook_time_mins
    );
    println!("   Servings: {}", recipe.servings);
    println!("   Difficulty: {}", recipe.difficulty);
    if let Some(cuisine) = &recipe.cuisine {
        println!("   Cuisine: {cuisine}");
    }
    if let Some(meal_type) = recipe.meal_type {
        println!("   Meal: {meal_type}");
    }
    if !recipe.categories.is_empty() {
        let categories: Vec<&str> = recipe.categories.iter().map(String::as_str).collect();
        println!("   Categories: {}", categories.join(", "));
    }
    println!("   Diet: {}", diet_labels(recipe));
    if let Some(rating) = recipe.rating {
        println!("   Rating: {rating:.1}/5");
    }

    if !recipe.ingredients.is_empty() {
        println!("\nIngredients:");
        for ingredient in &recipe.ingredients {
            let notes = ingredient
                .notes
                .as_deref()
                .map(|n| format!(" ({n})"))
                .unwrap_or_default();
            println!(
                "   - {} {} {}{notes}",
                ingredient.amount, ingredient.unit, ingredient.name
            );
        }
    }

    if !recipe.instructions.is_empty() {
        println!("\nSteps:");
        for (number, step) in recipe.instructions.iter().enumerate() {
            println!("   {}. {step}", number + 1);
        }
    }
}

/// Display recipes as a one-line-per-recipe table
pub fn display_recipe_list(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    println!(
        "{:<36}  {:<30}  {:>5}  {:<6}  {:>6}  {:<3}",
        "ID", "NAME", "MIN", "LEVEL", "RATING", "FAV"
    );
    for recipe in recipes {
        let rating = recipe
            .rating
            .map_or_else(|| "-".to_owned(), |r| format!("{r:.1}"));
        println!(
            "{:<36}  {:<30}  {:>5}  {:<6}  {:>6}  {:<3}",
            recipe.id,
            truncate(&recipe.name, 30),
            recipe.total_time_mins(),
            recipe.difficulty.as_str(),
            rating,
            yes_no(recipe.is_favorite)
        );
    }
    println!("\n{} recipe(s)", recipes.len());
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

fn display_meal(meal: &PlannedMeal) {
    let notes = if meal.notes.is_empty() {
        String::new()
    } else {
        format!("  [{}]", meal.notes)
    };
    println!(
        "   {:<10} {} ({} servings)  {}{notes}",
        meal.meal_type.as_str(),
        meal.recipe_name,
        meal.servings,
        meal.id
    );
}

/// Display a week plan day by day
pub fn display_meal_plan(plan: &MealPlan) {
    println!("\nWeek of {}", plan.week_start);
    println!("{}", "=".repeat(60));
    println!("   Plan: {}", plan.id);
    if !plan.notes.is_empty() {
        println!("   Notes: {}", plan.notes);
    }

    for day in DayOfWeek::ALL {
        let meals = plan.meals_for(day);
        println!("\n{} {}", day, day.date_in_week(plan.week_start));
        if meals.is_empty() {
            println!("   (nothing planned)");
        }
        for meal in meals {
            display_meal(meal);
        }
    }
    println!("\n{} meal(s) planned", plan.meal_count());
}

/// Display planning preferences
pub fn display_preferences(preferences: &MealPlanPreferences) {
    println!("\nMeal planning preferences");
    println!("{}", "=".repeat(60));
    println!("   Default servings: {}", preferences.default_servings);

    println!("   Meals per day:");
    for day in DayOfWeek::ALL {
        let meals = preferences
            .meal_types_per_day
            .get(&day)
            .map(|types| {
                types
                    .iter()
                    .map(MealType::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .filter(|joined| !joined.is_empty())
            .unwrap_or_else(|| "-".to_owned());
        println!("      {:<10} {meals}", day.as_str());
    }

    let list = |items: Vec<&str>| {
        if items.is_empty() {
            "-".to_owned()
        } else {
            items.join(", ")
        }
    };
    println!(
        "   Dietary restrictions: {}",
        list(
            preferences
                .dietary_restrictions
                .iter()
                .map(DietaryRestriction::as_str)
                .collect()
        )
    );
    println!(
        "   Preferred categories: {}",
        list(preferences.preferred_categories.iter().map(String::as_str).collect())
    );
    println!(
        "   Excluded recipes: {}",
        list(preferences.excluded_recipes.iter().map(String::as_str).collect())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("Paella", 30), "Paella");
        assert_eq!(truncate("Espárragos trigueros", 8), "Espárra…");
    }
}

/// Display saved conversations, most recent first
pub fn display_conversation_list(conversations: &[ConversationSummary]) {
    if conversations.is_empty() {
        println!("No saved conversations.");
        return;
    }

    println!(
        "{:<36}  {:<16}  {:>4}  {:<30}  LAST MESSAGE",
        "ID", "UPDATED", "MSGS", "TITLE"
    );
    for conversation in conversations {
        println!(
            "{:<36}  {:<16}  {:>4}  {:<30}  {}",
            conversation.id,
            conversation.updated_at.format("%Y-%m-%d %H:%M"),
            conversation.message_count,
            truncate(&conversation.title, 30),
            truncate(conversation.last_message.as_deref().unwrap_or("-"), 40)
        );
    }
}

/// Display one conversation as a transcript
pub fn display_conversation(conversation: &ConversationRecord, messages: &[MessageRecord]) {
    println!("\n{}", conversation.title);
    println!("{}", "=".repeat(60));
    println!("   Id: {}", conversation.id);
    if let Some(recipe_id) = &conversation.recipe_id {
        println!("   Recipe: {recipe_id}");
    }
    println!("   Started: {}", conversation.created_at.format("%Y-%m-%d %H:%M"));

    for message in messages {
        let prefix = match message.role {
            MessageRole::User => ">",
            MessageRole::Assistant => " ",
        };
        println!("{prefix} {}", message.content);
    }
    println!("\n{} message(s)", messages.len());
}
