use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// A discussion topic as shown on the home feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<i64>,
    #[serde(default)]
    pub messages: u32,
}

/// A message posted in a topic thread. `parent_id` is set for replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub topic_id: i64,
    /// `None` once the author's account has been removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub body: String,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub topics_opened: u32,
    pub messages_sent: u32,
    pub created_at: DateTime<Utc>,
}

/// Display order selected by the recent/likes/oldest toggles.
///
/// `Unsorted` keeps the caller's order and is what any unrecognized mode
/// string maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Recent,
    Likes,
    Oldest,
    Unsorted,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Recent => "recent",
            SortMode::Likes => "likes",
            SortMode::Oldest => "oldest",
            SortMode::Unsorted => "unsorted",
        }
    }

    /// Lenient parse: never fails, unknown values fall back to `Unsorted`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "recent" => SortMode::Recent,
            "likes" => SortMode::Likes,
            "oldest" => SortMode::Oldest,
            other => {
                warn!(mode = %other, "Unrecognized sort mode, keeping input order");
                SortMode::Unsorted
            }
        }
    }
}

impl FromStr for SortMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortMode::parse(s))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
