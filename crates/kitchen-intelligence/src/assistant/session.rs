// ABOUTME: Cooking session that walks a recipe's instructions one step at a time
// ABOUTME: Produces Spanish replies for each AssistantCommand, with fixed prompts when no recipe is active
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::AssistantCommand;
use crate::recipes::Recipe;
use std::fmt::Write as _;
use tracing::debug;

const HELP_REPLY: &str =
    "Puedo ayudarte con recetas, técnicas de cocina y consejos culinarios. ¿Qué te gustaría saber?";
const NO_RECIPE_REPLY: &str = "¿Qué tipo de receta te gustaría preparar?";
const NO_RECIPE_INGREDIENTS_REPLY: &str = "¿De qué receta quieres conocer los ingredientes?";
const NO_RECIPE_NEXT_REPLY: &str = "Avanzando al siguiente paso de la receta...";
const NO_RECIPE_REPEAT_REPLY: &str = "Repitiendo el paso actual...";

/// Conversation state for guided cooking
///
/// `step` is `None` until the first "next step"; afterwards it indexes the
/// instruction last read out.
#[derive(Debug, Clone, Default)]
pub struct CookingSession {
    recipe: Option<Recipe>,
    step: Option<usize>,
}

impl CookingSession {
    /// Session without an active recipe
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recipe: None,
            step: None,
        }
    }

    /// Session guiding through `recipe`
    #[must_use]
    pub const fn with_recipe(recipe: Recipe) -> Self {
        Self {
            recipe: Some(recipe),
            step: None,
        }
    }

    /// Active recipe, if any
    #[must_use]
    pub const fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    /// One-based number of the instruction last read out
    #[must_use]
    pub fn current_step(&self) -> Option<usize> {
        self.step.map(|i| i + 1)
    }

    /// Interpret `text` and answer it
    pub fn handle(&mut self, text: &str) -> String {
        let command = AssistantCommand::parse(text);
        debug!(?command, "Assistant command parsed");
        self.respond(&command)
    }

    /// Answer `command`, advancing the step cursor when asked to
    pub fn respond(&mut self, command: &AssistantCommand) -> String {
        match command {
            AssistantCommand::Help => HELP_REPLY.to_owned(),
            AssistantCommand::Recipe => self.recipe.as_ref().map_or_else(
                || NO_RECIPE_REPLY.to_owned(),
                |recipe| {
                    format!(
                        "Estamos preparando {}: {} pasos, {} minutos en total.",
                        recipe.name,
                        recipe.instructions.len(),
                        recipe.total_time_mins()
                    )
                },
            ),
            AssistantCommand::Ingredients => self.recipe.as_ref().map_or_else(
                || NO_RECIPE_INGREDIENTS_REPLY.to_owned(),
                Self::ingredient_list,
            ),
            AssistantCommand::NextStep => self.next_step(),
            AssistantCommand::Repeat => self.repeat_step(),
            AssistantCommand::Unrecognized(text) => format!("Entendí: {text}"),
        }
    }

    fn ingredient_list(recipe: &Recipe) -> String {
        if recipe.ingredients.is_empty() {
            return format!("{} no tiene ingredientes registrados.", recipe.name);
        }
        let mut reply = format!("Ingredientes para {}:", recipe.name);
        for ingredient in &recipe.ingredients {
            let _ = write!(reply, "\n- {ingredient}");
        }
        reply
    }

    fn next_step(&mut self) -> String {
        let Some(recipe) = &self.recipe else {
            return NO_RECIPE_NEXT_REPLY.to_owned();
        };
        let next = self.step.map_or(0, |i| i + 1);
        match recipe.instructions.get(next) {
            Some(instruction) => {
                self.step = Some(next);
                format!("Paso {}: {instruction}", next + 1)
            }
            None => format!("Has terminado todos los pasos de {}. ¡Buen provecho!", recipe.name),
        }
    }

    fn repeat_step(&self) -> String {
        let Some(recipe) = &self.recipe else {
            return NO_RECIPE_REPEAT_REPLY.to_owned();
        };
        match self.step.and_then(|i| recipe.instructions.get(i).map(|s| (i, s))) {
            Some((i, instruction)) => format!("Paso {}: {instruction}", i + 1),
            None => "Todavía no hemos empezado. Di \"paso siguiente\" para comenzar.".to_owned(),
        }
    }
}
