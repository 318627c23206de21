// ABOUTME: Kitchen intelligence crate root: recipe search, meal planning and assistant commands
// ABOUTME: Everything here is synchronous and storage-free so it can be tested without a database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Kitchen Intelligence
//!
//! Pure logic consumed by the service layer of the kitchen assistant:
//!
//! - **recipes**: recipe and meal-plan models, the recipe query engine and the
//!   weekly meal-plan generator
//! - **assistant**: interpreter for transcribed cooking-assistant commands
//!
//! Callers materialize a catalog snapshot (usually from `SQLite`) and hand it to
//! these functions. Nothing in this crate performs I/O.

/// Recipe models, search engine and meal-plan generation
pub mod recipes;

/// Cooking-assistant command interpreter
pub mod assistant;
