// ABOUTME: Unified error handling for the kitchen assistant
// ABOUTME: Re-exports AppError, ErrorCode and AppResult from kitchen-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error types live in `kitchen-core` so the pure logic crates and this crate
//! share one taxonomy. `sqlx::Error` converts into [`AppError`] through the
//! `database-errors` feature enabled in this crate's manifest.

pub use kitchen_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
