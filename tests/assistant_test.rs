// ABOUTME: Integration tests for the cooking assistant interpreter and session
// ABOUTME: Covers keyword precedence, bilingual keywords and a full guided cooking conversation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::rich_catalog;
use kitchen_assistant::assistant::{AssistantCommand, CookingSession};

#[test]
fn test_keywords_in_both_languages() {
    let cases = [
        ("Ayuda, por favor", AssistantCommand::Help),
        ("HELP", AssistantCommand::Help),
        ("¿Qué receta hacemos?", AssistantCommand::Recipe),
        ("show me the recipe", AssistantCommand::Recipe),
        ("dime los ingredientes", AssistantCommand::Ingredients),
        ("Ingredients?", AssistantCommand::Ingredients),
        ("Paso siguiente", AssistantCommand::NextStep),
        ("vale, siguiente paso", AssistantCommand::NextStep),
        ("next step please", AssistantCommand::NextStep),
        ("¿puedes repetir?", AssistantCommand::Repeat),
        ("repeat that", AssistantCommand::Repeat),
    ];
    for (text, expected) in cases {
        assert_eq!(AssistantCommand::parse(text), expected, "{text}");
    }
}

#[test]
fn test_precedence_when_several_keywords_match() {
    assert_eq!(
        AssistantCommand::parse("ayuda con la receta"),
        AssistantCommand::Help
    );
    assert_eq!(
        AssistantCommand::parse("ingredientes de la receta"),
        AssistantCommand::Recipe
    );
    assert_eq!(
        AssistantCommand::parse("repetir el paso siguiente"),
        AssistantCommand::NextStep
    );
}

#[test]
fn test_unrecognized_keeps_trimmed_text() {
    let command = AssistantCommand::parse("  ¿Cuánto falta?  ");
    assert_eq!(command, AssistantCommand::Unrecognized("¿Cuánto falta?".to_owned()));
    assert!(!command.is_recognized());
    assert!(AssistantCommand::Help.is_recognized());
}

#[test]
fn test_command_serializes_with_tag() {
    let json = serde_json::to_value(AssistantCommand::Unrecognized("hola".to_owned())).unwrap();
    assert_eq!(json["command"], "unrecognized");
    assert_eq!(json["text"], "hola");

    let next: AssistantCommand = serde_json::from_str(r#"{"command":"next_step"}"#).unwrap();
    assert_eq!(next, AssistantCommand::NextStep);
}

#[test]
fn test_guided_cooking_conversation() {
    let tortilla = rich_catalog().remove(0);
    let mut session = CookingSession::with_recipe(tortilla);

    let summary = session.handle("¿qué receta es?");
    assert!(summary.contains("Tortilla de patatas"));
    assert!(summary.contains("3 pasos"));
    assert!(summary.contains("40 minutos"));

    let ingredients = session.handle("ingredientes");
    assert!(ingredients.starts_with("Ingredientes para Tortilla de patatas:"));
    assert_eq!(ingredients.lines().count(), 4);
    assert!(ingredients.contains("Patatas"));

    assert_eq!(session.current_step(), None);
    assert_eq!(session.handle("paso siguiente"), "Paso 1: Pelar y cortar las patatas");
    assert_eq!(session.handle("siguiente paso"), "Paso 2: Freír las patatas con la cebolla");
    assert_eq!(session.handle("repetir"), "Paso 2: Freír las patatas con la cebolla");
    assert_eq!(session.handle("next step"), "Paso 3: Batir los huevos y cuajar");
    assert_eq!(session.current_step(), Some(3));

    let done = session.handle("paso siguiente");
    assert_eq!(
        done,
        "Has terminado todos los pasos de Tortilla de patatas. ¡Buen provecho!"
    );
    assert_eq!(session.current_step(), Some(3));
    assert_eq!(session.handle("repetir"), "Paso 3: Batir los huevos y cuajar");
}

#[test]
fn test_session_without_recipe_uses_fixed_prompts() {
    let mut session = CookingSession::new();
    assert!(session.recipe().is_none());
    assert!(session.handle("ayuda").starts_with("Puedo ayudarte"));
    assert_eq!(
        session.handle("ingredientes"),
        "¿De qué receta quieres conocer los ingredientes?"
    );
    assert_eq!(session.handle("repetir"), "Repitiendo el paso actual...");
    assert_eq!(session.handle("¿hay pan?"), "Entendí: ¿hay pan?");
    assert_eq!(session.current_step(), None);
}
