// ABOUTME: Main library entry point for the kitchen assistant
// ABOUTME: Wires SQLite storage, configuration and logging around the pure recipe and planning logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Kitchen Assistant
//!
//! Recipe catalog management, recipe search and weekly meal planning backed
//! by `SQLite`, plus a small interpreter for spoken cooking commands.
//!
//! ## Architecture
//!
//! - **kitchen-core**: error types and shared constants
//! - **kitchen-intelligence**: query engine, meal-plan generator and
//!   assistant commands; synchronous and storage-free
//! - **database**: async `sqlx` managers for recipes, meal plans,
//!   planning preferences and assistant conversation history
//! - **services**: load a catalog snapshot from storage and hand it to the
//!   pure logic, persisting the result where needed
//! - **config** / **logging**: environment-driven configuration and
//!   `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kitchen_assistant::database::Database;
//! use kitchen_assistant::errors::AppResult;
//! use kitchen_assistant::recipes::SearchFilters;
//! use kitchen_assistant::services::RecipeService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let database = Database::new("sqlite:./data/kitchen.db").await?;
//!     let service = RecipeService::new(database.recipes());
//!     let results = service.search("pasta", &SearchFilters::default()).await?;
//!     println!("{} recipes found", results.len());
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Re-exported core constants
pub mod constants;

/// `SQLite` storage for recipes, meal plans, preferences and conversations
pub mod database;

/// Unified error handling
pub mod errors;

/// Logging configuration and structured logging helpers
pub mod logging;

/// Services combining storage with the recipe and planning logic
pub mod services;

/// Recipe models, search and meal-plan generation
pub use kitchen_intelligence::recipes;

/// Cooking-assistant command interpreter
pub use kitchen_intelligence::assistant;
