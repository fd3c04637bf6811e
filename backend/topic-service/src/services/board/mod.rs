//! Board - in-memory users, topics and messages
//!
//! Owns the records behind the home feed and topic pages. The selected sort
//! mode is never stored here; feed queries take it as an argument.

use crate::error::{BoardError, Result};
use crate::models::{Message, SortMode, Topic, User};
use crate::services::ranking::RankingLayer;
use crate::validators::validate_username;
use chrono::{DateTime, Utc};
use tracing::info;

pub type Clock = fn() -> DateTime<Utc>;

pub struct Board {
    users: Vec<User>,
    topics: Vec<Topic>,
    messages: Vec<Message>,
    ranking: RankingLayer,
    clock: Clock,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn required(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BoardError::MissingField(field));
    }
    Ok(())
}

/// One past the largest id in use. Loaded records may carry any `i64`, so
/// the increment is checked.
fn next_id(kind: &'static str, ids: impl Iterator<Item = i64>) -> Result<i64> {
    ids.max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(BoardError::IdsExhausted(kind))
}

impl Board {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Board whose new records are stamped by `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            users: Vec::new(),
            topics: Vec::new(),
            messages: Vec::new(),
            ranking: RankingLayer::new(),
            clock,
        }
    }

    // ---- users ----

    /// Usernames and emails are unique by exact, case-sensitive match.
    pub fn add_user(&mut self, username: &str, email: &str) -> Result<User> {
        required("username", username)?;
        required("email", email)?;

        if self.user_by_name(username).is_some() {
            return Err(BoardError::UsernameTaken(username.to_string()));
        }
        if self.email_in_use(email) {
            return Err(BoardError::EmailTaken(email.to_string()));
        }

        let user = User {
            id: next_id("user", self.users.iter().map(|u| u.id))?,
            username: username.to_string(),
            email: email.to_string(),
            topics_opened: 0,
            messages_sent: 0,
            created_at: (self.clock)(),
        };
        self.users.push(user.clone());

        info!(user_id = user.id, username = %user.username, "User added");
        Ok(user)
    }

    pub fn user_by_name(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn all_users(&self) -> &[User] {
        &self.users
    }

    pub fn change_email(&mut self, username: &str, new_email: &str) -> Result<User> {
        required("email", new_email)?;

        let index = self.user_index(username)?;
        if self.email_in_use(new_email) {
            return Err(BoardError::EmailTaken(new_email.to_string()));
        }

        let user = &mut self.users[index];
        user.email = new_email.to_string();

        info!(username = %username, "Email updated");
        Ok(user.clone())
    }

    /// New name must be free and match `[a-zA-Z0-9_]{3,20}`.
    pub fn change_username(&mut self, username: &str, new_username: &str) -> Result<User> {
        let index = self.user_index(username)?;
        if self.user_by_name(new_username).is_some() {
            return Err(BoardError::UsernameTaken(new_username.to_string()));
        }
        if !validate_username(new_username) {
            return Err(BoardError::InvalidUsername(new_username.to_string()));
        }

        let user = &mut self.users[index];
        user.username = new_username.to_string();

        info!(from = %username, to = %new_username, "Username updated");
        Ok(user.clone())
    }

    /// Delete an account. Its topics and messages stay on the board without
    /// an author.
    pub fn remove_user(&mut self, username: &str) -> Result<User> {
        let index = self.user_index(username)?;
        let user = self.users.remove(index);

        for topic in self.topics.iter_mut().filter(|t| t.creator_id == Some(user.id)) {
            topic.creator_id = None;
        }
        for message in self.messages.iter_mut().filter(|m| m.user_id == Some(user.id)) {
            message.user_id = None;
        }

        info!(user_id = user.id, username = %user.username, "User removed");
        Ok(user)
    }

    fn user_index(&self, username: &str) -> Result<usize> {
        self.users
            .iter()
            .position(|u| u.username == username)
            .ok_or_else(|| BoardError::UserNotFound(username.to_string()))
    }

    fn user_index_by_id(&self, id: i64) -> Result<usize> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| BoardError::UserNotFound(format!("id {}", id)))
    }

    fn email_in_use(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }

    // ---- topics ----

    pub fn add_topic(&mut self, title: &str, username: &str) -> Result<Topic> {
        required("title", title)?;
        required("username", username)?;

        let creator = self.user_index(username)?;
        if self.topic_by_title(title).is_some() {
            return Err(BoardError::TopicTitleExists(title.to_string()));
        }

        let topic = Topic {
            id: next_id("topic", self.topics.iter().map(|t| t.id))?,
            title: title.to_string(),
            likes: 0,
            created_at: (self.clock)(),
            creator_id: Some(self.users[creator].id),
            messages: 0,
        };
        self.topics.push(topic.clone());
        self.users[creator].topics_opened += 1;

        info!(topic_id = topic.id, title = %topic.title, "Topic added");
        Ok(topic)
    }

    /// Admit a topic that was already validated by the loader. The creator,
    /// when set, must be on the board and is credited with the topic.
    pub fn insert_topic(&mut self, topic: Topic) -> Result<()> {
        if self.topic_by_id(topic.id).is_some() {
            return Err(BoardError::TopicIdExists(topic.id));
        }
        if self.topic_by_title(&topic.title).is_some() {
            return Err(BoardError::TopicTitleExists(topic.title));
        }
        let creator = topic
            .creator_id
            .map(|id| self.user_index_by_id(id))
            .transpose()?;

        if let Some(index) = creator {
            self.users[index].topics_opened += 1;
        }
        self.topics.push(topic);
        Ok(())
    }

    /// Remove a topic and every message posted in it.
    pub fn remove_topic(&mut self, title: &str) -> Result<Topic> {
        let index = self.topic_index(title)?;
        let topic = self.topics.remove(index);
        self.messages.retain(|m| m.topic_id != topic.id);

        info!(topic_id = topic.id, title = %topic.title, "Topic removed");
        Ok(topic)
    }

    pub fn upvote_topic(&mut self, title: &str) -> Result<u32> {
        let index = self.topic_index(title)?;
        let topic = &mut self.topics[index];
        topic.likes = topic.likes.saturating_add(1);

        info!(title = %title, likes = topic.likes, "Upvote added");
        Ok(topic.likes)
    }

    /// Like-count never drops below zero.
    pub fn downvote_topic(&mut self, title: &str) -> Result<u32> {
        let index = self.topic_index(title)?;
        let topic = &mut self.topics[index];
        topic.likes = topic.likes.saturating_sub(1);

        info!(title = %title, likes = topic.likes, "Downvote added");
        Ok(topic.likes)
    }

    pub fn topic_by_title(&self, title: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.title == title)
    }

    pub fn topic_by_id(&self, id: i64) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// All topics in insertion order.
    pub fn all_topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    fn topic_index(&self, title: &str) -> Result<usize> {
        self.topics
            .iter()
            .position(|t| t.title == title)
            .ok_or_else(|| BoardError::TopicNotFound(title.to_string()))
    }

    // ---- messages ----

    pub fn add_message(
        &mut self,
        topic_title: &str,
        body: &str,
        username: &str,
        parent_id: Option<i64>,
    ) -> Result<Message> {
        required("message", body)?;

        let author = self.user_index(username)?;
        let topic = self.topic_index(topic_title)?;
        let topic_id = self.topics[topic].id;
        self.check_parent(topic_id, parent_id)?;

        let message = Message {
            id: next_id("message", self.messages.iter().map(|m| m.id))?,
            topic_id,
            user_id: Some(self.users[author].id),
            parent_id,
            body: body.to_string(),
            likes: 0,
            created_at: (self.clock)(),
        };
        self.messages.push(message.clone());
        self.users[author].messages_sent += 1;
        self.topics[topic].messages += 1;

        info!(message_id = message.id, topic_id, "Message added");
        Ok(message)
    }

    /// Admit a message that was already validated by the loader. Topic,
    /// author and parent are checked the same way `add_message` checks them.
    pub fn insert_message(&mut self, message: Message) -> Result<()> {
        if self.messages.iter().any(|m| m.id == message.id) {
            return Err(BoardError::MessageIdExists(message.id));
        }
        let topic = self
            .topics
            .iter()
            .position(|t| t.id == message.topic_id)
            .ok_or_else(|| BoardError::TopicNotFound(format!("id {}", message.topic_id)))?;
        let author = message
            .user_id
            .map(|id| self.user_index_by_id(id))
            .transpose()?;
        self.check_parent(message.topic_id, message.parent_id)?;

        if let Some(index) = author {
            self.users[index].messages_sent += 1;
        }
        self.topics[topic].messages += 1;
        self.messages.push(message);
        Ok(())
    }

    /// A reply's parent must already be posted in the same topic.
    fn check_parent(&self, topic_id: i64, parent_id: Option<i64>) -> Result<()> {
        if let Some(parent) = parent_id {
            let in_topic = self
                .messages
                .iter()
                .any(|m| m.id == parent && m.topic_id == topic_id);
            if !in_topic {
                return Err(BoardError::MessageNotFound(parent));
            }
        }
        Ok(())
    }

    pub fn like_message(&mut self, id: i64) -> Result<u32> {
        let message = self.message_mut(id)?;
        message.likes = message.likes.saturating_add(1);
        Ok(message.likes)
    }

    /// Like-count never drops below zero.
    pub fn dislike_message(&mut self, id: i64) -> Result<u32> {
        let message = self.message_mut(id)?;
        message.likes = message.likes.saturating_sub(1);
        Ok(message.likes)
    }

    fn message_mut(&mut self, id: i64) -> Result<&mut Message> {
        self.messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(BoardError::MessageNotFound(id))
    }

    // ---- feed queries ----

    /// Home feed: every topic ordered by `mode`, cut to `limit`.
    pub fn feed(&self, mode: SortMode, limit: Option<usize>) -> Vec<Topic> {
        self.ranking.rank_feed(&self.topics, mode, limit)
    }

    /// Messages of one topic in posting order.
    pub fn messages_by_topic(&self, topic_id: i64) -> Result<Vec<Message>> {
        self.thread(topic_id, SortMode::Unsorted)
    }

    /// Messages of one topic, ordered by `mode`.
    pub fn thread(&self, topic_id: i64, mode: SortMode) -> Result<Vec<Message>> {
        if self.topic_by_id(topic_id).is_none() {
            return Err(BoardError::TopicNotFound(format!("id {}", topic_id)));
        }

        let messages: Vec<Message> = self
            .messages
            .iter()
            .filter(|m| m.topic_id == topic_id)
            .cloned()
            .collect();
        Ok(self.ranking.rank_feed(&messages, mode, None))
    }

    /// Case-insensitive title search, insertion order.
    pub fn search(&self, query: &str) -> Vec<Topic> {
        let needle = query.trim().to_lowercase();
        self.topics
            .iter()
            .filter(|t| t.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
