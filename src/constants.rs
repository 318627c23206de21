// ABOUTME: Re-export of the shared constants defined in kitchen-core
// ABOUTME: Keeps `crate::constants` paths stable for the binary and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use kitchen_core::constants::*;
