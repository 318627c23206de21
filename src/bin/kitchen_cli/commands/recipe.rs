// ABOUTME: Recipe catalog commands for kitchen-cli
// ABOUTME: Handles add, import, show, list, search, delete and favorite operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kitchen_assistant::{
    database::Database,
    errors::{AppError, AppResult},
    recipes::{Recipe, SearchFilters},
    services::RecipeService,
};
use std::path::Path;
use tracing::{info, warn};

use crate::helpers::display::{display_recipe, display_recipe_list, print_json};

type Result<T> = AppResult<T>;

/// Add a recipe to the catalog
pub async fn add(database: &Database, recipe: Recipe, json: bool) -> Result<()> {
    let created = database.recipes().create(&recipe).await?;
    if json {
        print_json(&created)?;
    } else {
        println!("Added recipe '{}' ({})", created.name, created.id);
    }
    Ok(())
}

/// Import recipes from a JSON array
///
/// Recipes that fail validation or already exist are skipped with a warning.
pub async fn import(database: &Database, path: &Path) -> Result<()> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display()))
    })?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;
    info!("Importing {} recipes from {}", recipes.len(), path.display());

    let manager = database.recipes();
    let mut imported = 0_usize;
    for recipe in &recipes {
        match manager.create(recipe).await {
            Ok(_) => imported += 1,
            Err(e) => warn!(recipe_id = %recipe.id, "Skipping recipe '{}': {e}", recipe.name),
        }
    }

    println!("Imported {imported} of {} recipe(s)", recipes.len());
    Ok(())
}

/// Show a recipe and record that it was shown
pub async fn show(database: &Database, id: &str, json: bool) -> Result<()> {
    let recipe = RecipeService::new(database.recipes()).show(id).await?;
    if json {
        print_json(&recipe)
    } else {
        display_recipe(&recipe);
        Ok(())
    }
}

/// List the catalog or only favorites
pub async fn list(database: &Database, favorites: bool, json: bool) -> Result<()> {
    let manager = database.recipes();
    let recipes = if favorites {
        manager.list_favorites().await?
    } else {
        manager.list_all().await?
    };
    print_recipes(&recipes, json)
}

/// Search the catalog
pub async fn search(
    database: &Database,
    query: &str,
    filters: &SearchFilters,
    json: bool,
) -> Result<()> {
    let results = RecipeService::new(database.recipes())
        .search(query, filters)
        .await?;
    print_recipes(&results, json)
}

/// Delete a recipe
pub async fn delete(database: &Database, id: &str) -> Result<()> {
    if !database.recipes().delete(id).await? {
        return Err(AppError::not_found(format!("Recipe {id}")).with_resource_id(id));
    }
    println!("Deleted recipe {id}");
    Ok(())
}

/// Toggle a recipe's favorite flag
pub async fn favorite(database: &Database, id: &str) -> Result<()> {
    let is_favorite = database
        .recipes()
        .toggle_favorite(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Recipe {id}")).with_resource_id(id))?;

    if is_favorite {
        println!("Recipe {id} added to favorites");
    } else {
        println!("Recipe {id} removed from favorites");
    }
    Ok(())
}

fn print_recipes(recipes: &[Recipe], json: bool) -> Result<()> {
    if json {
        print_json(recipes)
    } else {
        display_recipe_list(recipes);
        Ok(())
    }
}
