//! Data-loading boundary for topic and message records
//!
//! Raw records arrive as loosely typed JSON (the mock fixtures today, a topic
//! store later). Every field is optional at this layer so that a missing value
//! is reported as an `InvalidRecord` naming the field instead of a generic
//! parse failure. Nothing is coerced: a missing timestamp is never read as the
//! epoch and a negative like-count is never clamped.

use crate::error::{BoardError, Result};
use crate::models::{Message, Topic};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicRecord {
    pub id: Option<i64>,
    pub title: Option<String>,
    #[serde(alias = "upvotes")]
    pub likes: Option<i64>,
    #[serde(alias = "creation_date")]
    pub created_at: Option<String>,
    pub creator_id: Option<i64>,
    pub messages: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageRecord {
    pub id: Option<i64>,
    pub topic_id: Option<i64>,
    pub user_id: Option<i64>,
    pub parent_id: Option<i64>,
    #[serde(alias = "message")]
    pub body: Option<String>,
    pub likes: Option<i64>,
    #[serde(alias = "timestamp")]
    pub created_at: Option<String>,
}

fn invalid(index: usize, field: &'static str, reason: impl Into<String>) -> BoardError {
    BoardError::InvalidRecord {
        index,
        field,
        reason: reason.into(),
    }
}

fn require<T>(index: usize, field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| invalid(index, field, "is missing"))
}

fn count(index: usize, field: &'static str, raw: i64) -> Result<u32> {
    u32::try_from(raw).map_err(|_| {
        invalid(
            index,
            field,
            format!("must be a non-negative count, got {}", raw),
        )
    })
}

fn timestamp(index: usize, raw: Option<String>) -> Result<DateTime<Utc>> {
    let raw = require(index, "created_at", raw)?;
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            invalid(
                index,
                "created_at",
                format!("is not an RFC 3339 timestamp ({}): {}", raw, e),
            )
        })
}

/// Validate one raw topic. `index` is the record's position in its batch and
/// is echoed back in errors.
pub fn load_topic(index: usize, record: TopicRecord) -> Result<Topic> {
    let id = require(index, "id", record.id)?;

    let title = require(index, "title", record.title)?;
    if title.trim().is_empty() {
        return Err(invalid(index, "title", "is blank"));
    }

    let likes = count(index, "likes", require(index, "likes", record.likes)?)?;
    let created_at = timestamp(index, record.created_at)?;
    let messages = match record.messages {
        Some(raw) => count(index, "messages", raw)?,
        None => 0,
    };

    Ok(Topic {
        id,
        title,
        likes,
        created_at,
        creator_id: record.creator_id,
        messages,
    })
}

pub fn load_message(index: usize, record: MessageRecord) -> Result<Message> {
    let id = require(index, "id", record.id)?;
    let topic_id = require(index, "topic_id", record.topic_id)?;
    let user_id = require(index, "user_id", record.user_id)?;

    let body = require(index, "body", record.body)?;
    if body.trim().is_empty() {
        return Err(invalid(index, "body", "is blank"));
    }

    let likes = match record.likes {
        Some(raw) => count(index, "likes", raw)?,
        None => 0,
    };
    let created_at = timestamp(index, record.created_at)?;

    Ok(Message {
        id,
        topic_id,
        user_id: Some(user_id),
        parent_id: record.parent_id,
        body,
        likes,
        created_at,
    })
}

/// Parse a JSON array of topic records. The first invalid record fails the
/// whole batch.
pub fn load_topics_json(payload: &str) -> Result<Vec<Topic>> {
    let records: Vec<TopicRecord> = serde_json::from_str(payload)?;
    let topics = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| load_topic(index, record))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = topics.len(), "Loaded topic records");
    Ok(topics)
}

pub fn load_messages_json(payload: &str) -> Result<Vec<Message>> {
    let records: Vec<MessageRecord> = serde_json::from_str(payload)?;
    let messages = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| load_message(index, record))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = messages.len(), "Loaded message records");
    Ok(messages)
}
