// ABOUTME: Conversation history commands for kitchen-cli
// ABOUTME: Lists, shows, deletes and clears saved cooking-assistant conversations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Duration, Utc};
use kitchen_assistant::{
    database::Database,
    errors::{AppError, AppResult},
};
use serde_json::json;

use crate::helpers::display::{display_conversation, display_conversation_list, print_json};
use crate::HistoryCommand;

type Result<T> = AppResult<T>;

/// Dispatch a `history` subcommand
pub async fn run(database: &Database, command: HistoryCommand, json: bool) -> Result<()> {
    let history = database.conversations();

    match command {
        HistoryCommand::List { limit } => {
            let conversations = history.list(limit).await?;
            if json {
                print_json(&conversations)?;
            } else {
                display_conversation_list(&conversations);
            }
        }
        HistoryCommand::Show { id } => {
            let conversation = history.get(id).await?.ok_or_else(|| {
                AppError::not_found(format!("Conversation {id}")).with_resource_id(id.to_string())
            })?;
            let messages = history.messages(id).await?;
            if json {
                print_json(&json!({ "conversation": conversation, "messages": messages }))?;
            } else {
                display_conversation(&conversation, &messages);
            }
        }
        HistoryCommand::Delete { id } => {
            if !history.delete(id).await? {
                return Err(AppError::not_found(format!("Conversation {id}"))
                    .with_resource_id(id.to_string()));
            }
            println!("Deleted conversation {id}");
        }
        HistoryCommand::Clear { older_than_days } => {
            let removed = match older_than_days {
                Some(days) => {
                    let cutoff = Utc::now() - Duration::days(i64::from(days));
                    history.prune_older_than(cutoff).await?
                }
                None => history.clear().await?,
            };
            println!("Removed {removed} conversation(s)");
        }
    }
    Ok(())
}
