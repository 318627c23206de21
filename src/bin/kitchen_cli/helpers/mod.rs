// ABOUTME: Re-exports helper modules for kitchen-cli
// ABOUTME: Provides argument conversion and display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod args;
pub mod display;

pub use args::{filters_from_args, recipe_from_args};
