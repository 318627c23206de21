// ABOUTME: Cooking-assistant service answering utterances and recording them in conversation history
// ABOUTME: Resolves the active recipe, runs a CookingSession and prunes history past its retention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecipeService;
use crate::assistant::CookingSession;
use crate::constants::defaults;
use crate::database::{ConversationManager, Database};
use crate::errors::AppResult;
use chrono::{Duration, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

const UNTITLED_CONVERSATION: &str = "Asistente de cocina";

/// One utterance and the reply it got
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exchange {
    /// What the cook said
    pub utterance: String,
    /// What the assistant answered
    pub reply: String,
}

/// Replies to a batch of utterances
#[derive(Debug, Clone, Serialize)]
pub struct AssistantTranscript {
    /// Saved conversation, when history recording was on
    pub conversation_id: Option<Uuid>,
    /// Exchanges in the order they happened
    pub exchanges: Vec<Exchange>,
}

/// Cooking assistant backed by the recipe catalog and conversation history
pub struct AssistantService {
    recipes: RecipeService,
    conversations: ConversationManager,
    retention_days: u32,
}

impl AssistantService {
    /// Create a service over `database`
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            recipes: RecipeService::new(database.recipes()),
            conversations: database.conversations(),
            retention_days: defaults::HISTORY_RETENTION_DAYS,
        }
    }

    /// Keep history for `days`; `0` keeps everything
    #[must_use]
    pub const fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    /// Answer `utterances` in order, cooking along with `recipe_id` if given
    ///
    /// With `record` set, the exchanges are saved as one conversation and
    /// conversations idle past the retention window are pruned.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown recipe, or a database error
    pub async fn converse(
        &self,
        recipe_id: Option<&str>,
        utterances: &[String],
        record: bool,
    ) -> AppResult<AssistantTranscript> {
        let mut session = match recipe_id {
            Some(id) => CookingSession::with_recipe(self.recipes.show(id).await?),
            None => CookingSession::new(),
        };

        let conversation_id = if record && !utterances.is_empty() {
            let title = conversation_title(&session, utterances);
            Some(self.conversations.create(&title, recipe_id).await?.id)
        } else {
            None
        };

        let mut exchanges = Vec::with_capacity(utterances.len());
        for text in utterances {
            let reply = session.handle(text);
            debug!(utterance = %text, step = ?session.current_step(), "Assistant replied");
            if let Some(id) = conversation_id {
                self.conversations.save_exchange(id, text, &reply).await?;
            }
            exchanges.push(Exchange {
                utterance: text.clone(),
                reply,
            });
        }

        if let Some(id) = conversation_id {
            info!(conversation_id = %id, exchanges = exchanges.len(), "Conversation saved");
            self.prune_history().await?;
        }

        Ok(AssistantTranscript {
            conversation_id,
            exchanges,
        })
    }

    /// Delete conversations idle for longer than the retention window
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn prune_history(&self) -> AppResult<u64> {
        if self.retention_days == 0 {
            return Ok(0);
        }
        let cutoff = Utc::now() - Duration::days(i64::from(self.retention_days));
        self.conversations.prune_older_than(cutoff).await
    }
}

/// Recipe name when cooking along, otherwise the first non-blank utterance
fn conversation_title(session: &CookingSession, utterances: &[String]) -> String {
    session
        .recipe()
        .map(|recipe| recipe.name.clone())
        .or_else(|| {
            utterances
                .iter()
                .map(|text| text.as_str().trim())
                .find(|text| !text.is_empty())
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| UNTITLED_CONVERSATION.to_owned())
}
