// ABOUTME: Converts parsed command-line arguments into domain values
// ABOUTME: Builds recipes from `recipe add` flags and search filters from `recipe search` flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kitchen_assistant::errors::{AppError, AppResult};
use kitchen_assistant::recipes::{
    DietaryRestriction, InclusiveRange, Recipe, RecipeIngredient, SearchFilters,
};

use crate::{RecipeArgs, SearchArgs};

/// Parse `name:amount:unit[:notes]`
///
/// # Errors
///
/// Returns `InvalidInput` when the name is empty or the amount is not a
/// non-negative number
pub fn parse_ingredient(input: &str) -> AppResult<RecipeIngredient> {
    let mut parts = input.splitn(4, ':').map(str::trim);
    let name = parts.next().unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::invalid_input(format!("Ingredient '{input}' has no name")));
    }
    let amount = match parts.next() {
        None | Some("") => 0.0,
        Some(raw) => raw
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a >= 0.0)
            .ok_or_else(|| {
                AppError::invalid_input(format!("Invalid amount '{raw}' in ingredient '{input}'"))
            })?,
    };
    let unit = parts.next().unwrap_or_default();
    let ingredient = RecipeIngredient::new(name, amount, unit);
    Ok(match parts.next().filter(|n| !n.is_empty()) {
        Some(notes) => ingredient.with_notes(notes),
        None => ingredient,
    })
}

/// Build a recipe from `recipe add` flags
///
/// # Errors
///
/// Returns `InvalidInput` if an ingredient cannot be parsed
pub fn recipe_from_args(args: RecipeArgs) -> AppResult<Recipe> {
    let mut recipe = Recipe::new(args.name, args.servings)
        .with_description(args.description)
        .with_prep_time(args.prep_time_mins)
        .with_cook_time(args.cook_time_mins)
        .with_difficulty(args.difficulty);

    if let Some(id) = args.id {
        recipe = recipe.with_id(id);
    }
    if let Some(cuisine) = args.cuisine {
        recipe = recipe.with_cuisine(cuisine);
    }
    if let Some(meal_type) = args.meal_type {
        recipe = recipe.with_meal_type(meal_type);
    }
    if let Some(rating) = args.rating {
        recipe = recipe.with_rating(rating);
    }
    for category in args.categories {
        recipe = recipe.with_category(category);
    }
    for ingredient in &args.ingredients {
        recipe = recipe.with_ingredient(parse_ingredient(ingredient)?);
    }
    for step in args.steps {
        recipe = recipe.with_instruction(step);
    }

    let shorthands = [
        (args.vegetarian, DietaryRestriction::Vegetarian),
        (args.vegan, DietaryRestriction::Vegan),
        (args.gluten_free, DietaryRestriction::GlutenFree),
    ];
    let restrictions = args.diets.into_iter().chain(
        shorthands
            .into_iter()
            .filter_map(|(set, restriction)| set.then_some(restriction)),
    );
    for restriction in restrictions {
        recipe = recipe.with_restriction(restriction);
    }

    Ok(recipe)
}

/// Build the query text and filters from `recipe search` flags
pub fn filters_from_args(args: SearchArgs) -> (String, SearchFilters) {
    let mut filters = SearchFilters::default()
        .with_cooking_time(InclusiveRange::new(
            args.min_time.unwrap_or(0),
            args.max_time.unwrap_or(u32::MAX),
        ))
        .with_servings(InclusiveRange::new(
            args.min_servings.unwrap_or(0),
            args.max_servings.unwrap_or(u32::MAX),
        ))
        .sorted_by(args.sort);

    filters.categories.extend(args.categories);
    filters.difficulty.extend(args.difficulties);
    filters.ingredients.extend(args.with_ingredients);
    filters.exclude_ingredients.extend(args.without_ingredients);
    filters.is_vegetarian = args.vegetarian;
    filters.is_vegan = args.vegan;
    filters.is_gluten_free = args.gluten_free;

    (args.query, filters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingredient_forms() {
        let full = parse_ingredient("sal:0,5:cucharadita:al gusto").unwrap();
        assert_eq!(full.name, "sal");
        assert!((full.amount - 0.5).abs() < f64::EPSILON);
        assert_eq!(full.unit, "cucharadita");
        assert_eq!(full.notes.as_deref(), Some("al gusto"));

        let bare = parse_ingredient("pimienta").unwrap();
        assert!(bare.amount.abs() < f64::EPSILON);
        assert!(bare.unit.is_empty());

        assert!(parse_ingredient(":2:g").is_err());
        assert!(parse_ingredient("harina:mucha:g").is_err());
    }
}
