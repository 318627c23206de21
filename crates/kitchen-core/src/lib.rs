// ABOUTME: Core types and constants for the kitchen assistant
// ABOUTME: Foundation crate with error handling and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Kitchen Core
//!
//! Foundation crate providing shared types and constants for the kitchen
//! assistant. It changes rarely so the rest of the workspace can compile
//! incrementally against it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;
