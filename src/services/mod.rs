// ABOUTME: Service layer combining storage with recipe search, meal planning and the assistant
// ABOUTME: Loads catalog snapshots from SQLite, runs the pure algorithms and persists results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services are the only place where storage and the synchronous logic in
//! `kitchen-intelligence` meet. The CLI and tests talk to these types.

/// Cooking assistant with conversation history
pub mod assistant;

/// Weekly plan generation and manual plan edits
pub mod meal_plans;

/// Recipe search over the stored catalog
pub mod recipes;

pub use assistant::{AssistantService, AssistantTranscript, Exchange};
pub use meal_plans::MealPlanService;
pub use recipes::RecipeService;
