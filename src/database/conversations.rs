// ABOUTME: Database operations for saved cooking-assistant conversations and their messages
// ABOUTME: Create, append exchanges, list, delete, clear and age-based pruning of history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp};
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use tracing::{debug, info};
use uuid::Uuid;

/// Author of a stored message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// What the cook said or typed
    User,
    /// The assistant's reply
    Assistant,
}

impl MessageRole {
    /// Stored representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl Display for MessageRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            other => Err(AppError::internal(format!("Unknown message role '{other}'"))),
        }
    }
}

/// A saved conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// Conversation id
    pub id: Uuid,
    /// Short title, usually the recipe name or first utterance
    pub title: String,
    /// Recipe the session was cooking along with
    pub recipe_id: Option<String>,
    /// When the conversation started
    pub created_at: DateTime<Utc>,
    /// When the last message was added
    pub updated_at: DateTime<Utc>,
}

/// One utterance or reply within a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Message id
    pub id: Uuid,
    /// Owning conversation
    pub conversation_id: Uuid,
    /// Author
    pub role: MessageRole,
    /// Message text
    pub content: String,
    /// When the message was stored
    pub created_at: DateTime<Utc>,
}

/// Conversation listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Conversation id
    pub id: Uuid,
    /// Title
    pub title: String,
    /// Recipe the session was cooking along with
    pub recipe_id: Option<String>,
    /// Number of stored messages
    pub message_count: u32,
    /// Text of the most recent message
    pub last_message: Option<String>,
    /// When the last message was added
    pub updated_at: DateTime<Utc>,
}

/// Conversation history manager
pub struct ConversationManager {
    pool: SqlitePool,
}

impl ConversationManager {
    /// Create a new conversation manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Start a conversation
    ///
    /// The title is trimmed and cut to `MAX_CONVERSATION_TITLE_LEN` characters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank title, or a database error
    pub async fn create(
        &self,
        title: &str,
        recipe_id: Option<&str>,
    ) -> AppResult<ConversationRecord> {
        let title: String = title
            .trim()
            .chars()
            .take(limits::MAX_CONVERSATION_TITLE_LEN)
            .collect();
        if title.is_empty() {
            return Err(AppError::invalid_input("Conversation title must not be empty"));
        }

        let now = Utc::now();
        let record = ConversationRecord {
            id: Uuid::new_v4(),
            title,
            recipe_id: recipe_id.map(ToOwned::to_owned),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r"
            INSERT INTO conversations (id, title, recipe_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ",
        )
        .bind(record.id.to_string())
        .bind(&record.title)
        .bind(&record.recipe_id)
        .bind(format_timestamp(now))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create conversation: {e}")))?;

        debug!(conversation_id = %record.id, "Conversation created");
        Ok(record)
    }

    /// Append a message and bump the conversation's `updated_at`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown conversation, or a database error
    pub async fn add_message(
        &self,
        conversation_id: Uuid,
        role: MessageRole,
        content: &str,
    ) -> AppResult<MessageRecord> {
        let now = Utc::now();
        let now_str = format_timestamp(now);
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let touched = sqlx::query("UPDATE conversations SET updated_at = $1 WHERE id = $2")
            .bind(&now_str)
            .bind(conversation_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to update conversation timestamp: {e}"))
            })?;
        if touched.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Conversation {conversation_id}"))
                .with_resource_id(conversation_id.to_string()));
        }

        let message = MessageRecord {
            id: Uuid::new_v4(),
            conversation_id,
            role,
            content: content.to_owned(),
            created_at: now,
        };
        sqlx::query(
            r"
            INSERT INTO conversation_messages
                (id, conversation_id, seq, role, content, created_at)
            VALUES (
                $1,
                $2,
                (SELECT COALESCE(MAX(seq), 0) + 1
                 FROM conversation_messages
                 WHERE conversation_id = $2),
                $3,
                $4,
                $5
            )
            ",
        )
        .bind(message.id.to_string())
        .bind(conversation_id.to_string())
        .bind(role.as_str())
        .bind(&message.content)
        .bind(&now_str)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to add message: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit message: {e}")))?;
        Ok(message)
    }

    /// Save one utterance and the assistant's reply, in that order
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown conversation, or a database error
    pub async fn save_exchange(
        &self,
        conversation_id: Uuid,
        utterance: &str,
        reply: &str,
    ) -> AppResult<()> {
        self.add_message(conversation_id, MessageRole::User, utterance).await?;
        self.add_message(conversation_id, MessageRole::Assistant, reply).await?;
        Ok(())
    }

    /// Get a conversation by id
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get(&self, conversation_id: Uuid) -> AppResult<Option<ConversationRecord>> {
        let row = sqlx::query(
            r"
            SELECT id, title, recipe_id, created_at, updated_at
            FROM conversations
            WHERE id = $1
            ",
        )
        .bind(conversation_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get conversation: {e}")))?;

        row.map(|r| row_to_conversation(&r)).transpose()
    }

    /// Messages of a conversation in the order they were added
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn messages(&self, conversation_id: Uuid) -> AppResult<Vec<MessageRecord>> {
        let rows = sqlx::query(
            r"
            SELECT id, conversation_id, role, content, created_at
            FROM conversation_messages
            WHERE conversation_id = $1
            ORDER BY seq ASC
            ",
        )
        .bind(conversation_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get messages: {e}")))?;

        rows.iter().map(row_to_message).collect()
    }

    /// Most recently active conversations first, at most `limit`
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list(&self, limit: u32) -> AppResult<Vec<ConversationSummary>> {
        let rows = sqlx::query(
            r"
            SELECT c.id, c.title, c.recipe_id, c.updated_at,
                   COUNT(m.id) AS message_count,
                   (SELECT lm.content FROM conversation_messages lm
                    WHERE lm.conversation_id = c.id
                    ORDER BY lm.seq DESC LIMIT 1) AS last_message
            FROM conversations c
            LEFT JOIN conversation_messages m ON m.conversation_id = c.id
            GROUP BY c.id
            ORDER BY c.updated_at DESC, c.id ASC
            LIMIT $1
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list conversations: {e}")))?;

        rows.iter().map(row_to_summary).collect()
    }

    /// Delete a conversation and its messages
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn delete(&self, conversation_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM conversations WHERE id = $1")
            .bind(conversation_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete conversation: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every conversation; returns how many were removed
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn clear(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM conversations")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear conversations: {e}")))?;

        info!(removed = result.rows_affected(), "Conversation history cleared");
        Ok(result.rows_affected())
    }

    /// Delete conversations last active before `cutoff`; returns how many were removed
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn prune_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM conversations WHERE updated_at < $1")
            .bind(format_timestamp(cutoff))
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to prune conversations: {e}")))?;

        let removed = result.rows_affected();
        if removed > 0 {
            info!(removed, cutoff = %cutoff, "Old conversations pruned");
        }
        Ok(removed)
    }
}

fn parse_uuid(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))
}

fn row_to_conversation(row: &SqliteRow) -> AppResult<ConversationRecord> {
    Ok(ConversationRecord {
        id: parse_uuid(&row.get::<String, _>("id"))?,
        title: row.get("title"),
        recipe_id: row.get("recipe_id"),
        created_at: parse_timestamp(&row.get::<String, _>("created_at"))?,
        updated_at: parse_timestamp(&row.get::<String, _>("updated_at"))?,
    })
}

fn row_to_summary(row: &SqliteRow) -> AppResult<ConversationSummary> {
    let count: i64 = row.get("message_count");
    Ok(ConversationSummary {
        id: parse_uuid(&row.get::<String, _>("id"))?,
        title: row.get("title"),
        recipe_id: row.get("recipe_id"),
        message_count: u32::try_from(count)
            .map_err(|e| AppError::internal(format!("Message count overflow: {e}")))?,
        last_message: row.get("last_message"),
        updated_at: parse_timestamp(&row.get::<String, _>("updated_at"))?,
    })
}

fn row_to_message(row: &SqliteRow) -> AppResult<MessageRecord> {
    Ok(MessageRecord {
        id: parse_uuid(&row.get::<String, _>("id"))?,
        conversation_id: parse_uuid(&row.get::<String, _>("conversation_id"))?,
        role: row.get::<String, _>("role").parse()?,
        content: row.get("content"),
        created_at: parse_timestamp(&row.get::<String, _>("created_at"))?,
    })
}
