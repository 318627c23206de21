// ABOUTME: Cooking-assistant command interpreter for transcribed voice or typed input
// ABOUTME: Maps free text to an AssistantCommand and answers it against an optional active recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Assistant
//!
//! Keyword matching is case-insensitive and accepts Spanish or English.
//! When several keywords appear, the first in this order wins: help, recipe,
//! ingredients, next step, repeat.

/// Step-by-step cooking session state
pub mod session;

pub use session::CookingSession;

use serde::{Deserialize, Serialize};

/// Keywords per command, checked in precedence order
const KEYWORDS: [(&[&str], AssistantCommand); 5] = [
    (&["ayuda", "help"], AssistantCommand::Help),
    (&["receta", "recipe"], AssistantCommand::Recipe),
    (&["ingredientes", "ingredients"], AssistantCommand::Ingredients),
    (&["paso siguiente", "siguiente paso", "next step"], AssistantCommand::NextStep),
    (&["repetir", "repeat"], AssistantCommand::Repeat),
];

/// Interpreted assistant command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "text", rename_all = "snake_case")]
pub enum AssistantCommand {
    /// Explain what the assistant can do
    Help,
    /// Ask about or announce the active recipe
    Recipe,
    /// List ingredients of the active recipe
    Ingredients,
    /// Advance to the next instruction
    NextStep,
    /// Repeat the current instruction
    Repeat,
    /// Anything else; keeps the original text
    Unrecognized(String),
}

impl AssistantCommand {
    /// Interpret `text`
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let lowered = text.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(words, _)| words.iter().any(|w| lowered.contains(w)))
            .map_or_else(
                || Self::Unrecognized(text.trim().to_owned()),
                |(_, command)| command.clone(),
            )
    }

    /// Whether the text matched a known keyword
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}
