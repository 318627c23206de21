// ABOUTME: Kitchen CLI - command-line front end for recipes, meal plans and the cooking assistant
// ABOUTME: Parses commands with clap, loads configuration from the environment and dispatches to services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Add a recipe
//! kitchen-cli recipe add --name "Tortilla" --servings 4 --cook 25 \
//!     --ingredient "huevos:6:unidades" --ingredient "patatas:500:g" \
//!     --step "Pelar las patatas" --step "Freír y cuajar" --vegetarian
//!
//! # Search quick vegetarian recipes sorted by time
//! kitchen-cli recipe search patata --max-time 30 --vegetarian true --sort cooking_time
//!
//! # Generate this week's plan reproducibly
//! kitchen-cli plan generate --seed 42
//!
//! # Walk through a recipe, then review the saved conversation
//! kitchen-cli ask --recipe <id> "paso siguiente" "repetir"
//! kitchen-cli history list
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use kitchen_assistant::{
    config::{AppConfig, DatabaseUrl},
    constants::defaults,
    database::Database,
    errors::{AppError, ErrorResponse},
    logging::{LogFormat, LoggingConfig},
    recipes::{DayOfWeek, DietaryRestriction, Difficulty, MealType, SortOption},
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error};
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "kitchen-cli",
    about = "Kitchen assistant CLI",
    long_about = "Manage a recipe catalog, search it, plan weekly meals and talk to the cooking assistant."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recipe catalog commands
    Recipe {
        #[command(subcommand)]
        action: RecipeCommand,
    },

    /// Weekly meal plan commands
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Meal planning preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsCommand,
    },

    /// Send one or more utterances to the cooking assistant
    Ask {
        /// Utterances, answered in order
        #[arg(required = true)]
        text: Vec<String>,

        /// Recipe to cook along with
        #[arg(long)]
        recipe: Option<String>,

        /// Do not save this exchange to the conversation history
        #[arg(long)]
        no_save: bool,
    },

    /// Saved assistant conversations
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },
}

/// Recipe fields shared by `recipe add`
#[derive(clap::Args)]
struct RecipeArgs {
    /// Recipe name
    #[arg(long)]
    name: String,

    /// Number of servings
    #[arg(long)]
    servings: u32,

    /// Explicit id (defaults to a random UUID)
    #[arg(long)]
    id: Option<String>,

    /// Short description
    #[arg(long, default_value = "")]
    description: String,

    /// Preparation time in minutes
    #[arg(long = "prep", default_value_t = 0)]
    prep_time_mins: u32,

    /// Cooking time in minutes
    #[arg(long = "cook", default_value_t = 0)]
    cook_time_mins: u32,

    /// Difficulty (easy, medium, hard)
    #[arg(long, default_value = "easy")]
    difficulty: Difficulty,

    /// Cuisine, e.g. "española"
    #[arg(long)]
    cuisine: Option<String>,

    /// Typical meal slot
    #[arg(long)]
    meal_type: Option<MealType>,

    /// Category (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Ingredient as name:amount:unit[:notes] (repeatable)
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,

    /// Instruction step (repeatable, in order)
    #[arg(long = "step")]
    steps: Vec<String>,

    /// Dietary restriction the recipe satisfies (repeatable)
    #[arg(long = "diet")]
    diets: Vec<DietaryRestriction>,

    /// Shorthand for --diet vegetarian
    #[arg(long)]
    vegetarian: bool,

    /// Shorthand for --diet vegan
    #[arg(long)]
    vegan: bool,

    /// Shorthand for --diet gluten_free
    #[arg(long)]
    gluten_free: bool,

    /// Rating from 0 to 5
    #[arg(long)]
    rating: Option<f32>,
}

/// Search criteria for `recipe search`
#[derive(clap::Args)]
struct SearchArgs {
    /// Text matched against name, description and ingredient names
    #[arg(default_value = "")]
    query: String,

    /// Category (repeatable, any of)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Difficulty (repeatable, any of)
    #[arg(long = "difficulty")]
    difficulties: Vec<Difficulty>,

    /// Minimum total time in minutes
    #[arg(long)]
    min_time: Option<u32>,

    /// Maximum total time in minutes
    #[arg(long)]
    max_time: Option<u32>,

    /// Minimum servings
    #[arg(long)]
    min_servings: Option<u32>,

    /// Maximum servings
    #[arg(long)]
    max_servings: Option<u32>,

    /// Required ingredient (repeatable, all of)
    #[arg(long = "with")]
    with_ingredients: Vec<String>,

    /// Excluded ingredient (repeatable, none of)
    #[arg(long = "without")]
    without_ingredients: Vec<String>,

    /// Require the vegetarian flag to equal this value
    #[arg(long)]
    vegetarian: Option<bool>,

    /// Require the vegan flag to equal this value
    #[arg(long)]
    vegan: Option<bool>,

    /// Require the gluten-free flag to equal this value
    #[arg(long)]
    gluten_free: Option<bool>,

    /// Sort order (name, cooking_time, difficulty, rating, date_added)
    #[arg(long, default_value = "name")]
    sort: SortOption,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecipeCommand {
    /// Add a recipe to the catalog
    Add(Box<RecipeArgs>),

    /// Import recipes from a JSON array, as printed by `recipe list --json`
    Import {
        /// Path to the JSON file
        path: PathBuf,
    },

    /// Show a recipe
    Show {
        /// Recipe id
        id: String,
    },

    /// List all recipes
    List {
        /// Only favorites
        #[arg(long)]
        favorites: bool,
    },

    /// Search the catalog
    Search(Box<SearchArgs>),

    /// Delete a recipe
    Delete {
        /// Recipe id
        id: String,
    },

    /// Toggle the favorite flag
    Favorite {
        /// Recipe id
        id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Generate the plan for a week, replacing its meals
    Generate {
        /// Any date in the target week (defaults to today)
        #[arg(long)]
        week: Option<NaiveDate>,

        /// Seed for reproducible generation (overrides KITCHEN_PLAN_SEED)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the plan for a week
    Show {
        /// Any date in the target week (defaults to today)
        #[arg(long)]
        week: Option<NaiveDate>,
    },

    /// Delete the plan for a week
    Delete {
        /// Any date in the target week (defaults to today)
        #[arg(long)]
        week: Option<NaiveDate>,
    },

    /// List plans whose week starts within a date range
    List {
        /// First date (inclusive)
        #[arg(long)]
        from: NaiveDate,

        /// Last date (inclusive)
        #[arg(long)]
        to: NaiveDate,
    },

    /// Add a recipe to a day
    Add {
        /// Any date in the target week (defaults to today)
        #[arg(long)]
        week: Option<NaiveDate>,

        /// Day of the week
        #[arg(long)]
        day: DayOfWeek,

        /// Recipe id
        #[arg(long)]
        recipe: String,

        /// Meal slot
        #[arg(long)]
        meal_type: MealType,

        /// Servings (defaults to preferences)
        #[arg(long)]
        servings: Option<u32>,
    },

    /// Remove a planned meal
    Remove {
        /// Any date in the target week (defaults to today)
        #[arg(long)]
        week: Option<NaiveDate>,

        /// Day of the week
        #[arg(long)]
        day: DayOfWeek,

        /// Planned meal id
        #[arg(long)]
        meal_id: Uuid,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PrefsCommand {
    /// Show effective preferences
    Show,

    /// Change preferences
    Set(Box<commands::prefs::PrefsChanges>),

    /// Forget stored preferences
    Reset,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum HistoryCommand {
    /// List conversations, most recently active first
    List {
        /// Maximum number of conversations
        #[arg(long, default_value_t = defaults::HISTORY_LIST_LIMIT)]
        limit: u32,
    },

    /// Show a conversation transcript
    Show {
        /// Conversation id
        id: Uuid,
    },

    /// Delete a conversation
    Delete {
        /// Conversation id
        id: Uuid,
    },

    /// Delete all conversations, or only those idle for more than N days
    Clear {
        /// Only remove conversations idle for more than this many days
        #[arg(long)]
        older_than_days: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if cli.json {
        logging = logging.with_format(LogFormat::Json);
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let json = cli.json;
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            let app_error = into_app_error(e);
            let code = app_error.code.exit_code();
            if json {
                let report = ErrorResponse::from(app_error);
                if let Err(print_error) = helpers::display::print_json(&report) {
                    eprintln!("Error: {print_error}");
                }
            } else {
                eprintln!("Error: {app_error}");
            }
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

/// Recover the typed error, treating anything else as internal
fn into_app_error(error: anyhow::Error) -> AppError {
    error
        .downcast::<AppError>()
        .unwrap_or_else(|other| AppError::internal(format!("{other:#}")))
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::from_env().map_err(|e| AppError::config(format!("{e:#}")))?;
    if let Some(url) = &cli.database_url {
        config.database =
            DatabaseUrl::parse_url(url).map_err(|e| AppError::config(format!("{e:#}")))?;
    }
    debug!("{}", config.summary());

    if let DatabaseUrl::SQLite { path } = &config.database {
        ensure_parent_dir(path).await?;
    }
    let database = Database::new(&config.database.to_connection_string()).await?;

    match cli.command {
        Command::Recipe { action } => match action {
            RecipeCommand::Add(args) => {
                commands::recipe::add(&database, helpers::recipe_from_args(*args)?, cli.json)
                    .await?;
            }
            RecipeCommand::Import { path } => {
                commands::recipe::import(&database, &path).await?;
            }
            RecipeCommand::Show { id } => commands::recipe::show(&database, &id, cli.json).await?,
            RecipeCommand::List { favorites } => {
                commands::recipe::list(&database, favorites, cli.json).await?;
            }
            RecipeCommand::Search(args) => {
                let (query, filters) = helpers::filters_from_args(*args);
                commands::recipe::search(&database, &query, &filters, cli.json).await?;
            }
            RecipeCommand::Delete { id } => commands::recipe::delete(&database, &id).await?,
            RecipeCommand::Favorite { id } => commands::recipe::favorite(&database, &id).await?,
        },
        Command::Plan { action } => {
            commands::plan::run(&database, &config, action, cli.json).await?;
        }
        Command::Prefs { action } => match action {
            PrefsCommand::Show => commands::prefs::show(&database, &config, cli.json).await?,
            PrefsCommand::Set(changes) => commands::prefs::set(&database, &config, *changes).await?,
            PrefsCommand::Reset => commands::prefs::reset(&database).await?,
        },
        Command::Ask {
            text,
            recipe,
            no_save,
        } => {
            commands::ask::run(&database, &config, recipe.as_deref(), &text, !no_save, cli.json)
                .await?;
        }
        Command::History { action } => {
            commands::history::run(&database, action, cli.json).await?;
        }
    }

    Ok(())
}

async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitchen_assistant::errors::ErrorCode;

    #[test]
    fn test_typed_errors_keep_their_code() {
        let error = into_app_error(AppError::not_found("Recipe x").with_resource_id("x").into());
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.code.exit_code(), 3);

        let json = serde_json::to_value(ErrorResponse::from(error)).unwrap();
        assert_eq!(json["error"]["code"], "RESOURCE_NOT_FOUND");
        assert_eq!(json["error"]["resource_id"], "x");
    }

    #[test]
    fn test_untyped_errors_become_internal() {
        let error = into_app_error(anyhow::anyhow!("disk full"));
        assert_eq!(error.code, ErrorCode::InternalError);
        assert_eq!(error.code.exit_code(), 1);
        assert!(error.message.contains("disk full"));
    }
}
