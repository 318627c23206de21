// ABOUTME: Re-exports command modules for kitchen-cli
// ABOUTME: Provides recipe, plan, preference and assistant commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod ask;
pub mod history;
pub mod plan;
pub mod prefs;
pub mod recipe;
