// ABOUTME: Cooking assistant command for kitchen-cli
// ABOUTME: Prints the assistant's replies in order and records the exchange in conversation history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_json;
use kitchen_assistant::{
    config::AppConfig, database::Database, errors::AppResult, services::AssistantService,
};

type Result<T> = AppResult<T>;

/// Answer `utterances` in order, optionally cooking along with `recipe_id`
pub async fn run(
    database: &Database,
    config: &AppConfig,
    recipe_id: Option<&str>,
    utterances: &[String],
    record: bool,
    json: bool,
) -> Result<()> {
    let transcript = AssistantService::new(database)
        .with_retention_days(config.history_retention_days)
        .converse(recipe_id, utterances, record)
        .await?;

    if json {
        return print_json(&transcript);
    }
    for exchange in &transcript.exchanges {
        println!("> {}", exchange.utterance);
        println!("{}\n", exchange.reply);
    }
    if let Some(id) = transcript.conversation_id {
        println!("Saved as conversation {id}");
    }
    Ok(())
}
