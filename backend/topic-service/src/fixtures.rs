//! Mock board content for the home feed and topic pages.

use crate::error::Result;
use crate::services::{load_messages_json, load_topics_json, Board};
use tracing::info;

pub const DEMO_USERS: &[(&str, &str)] = &[
    ("brainiac", "brainiac@brainwave.dev"),
    ("synapse", "synapse@brainwave.dev"),
    ("neuron42", "neuron42@brainwave.dev"),
];

pub const MOCK_TOPICS: &str = r#"[
    {"id": 1, "title": "How do you stay focused while studying?", "likes": 34, "created_at": "2024-11-18T09:15:00Z", "creator_id": 1},
    {"id": 2, "title": "Best resources for learning Rust", "likes": 57, "created_at": "2024-11-20T16:40:00Z", "creator_id": 2},
    {"id": 3, "title": "Favourite productivity apps", "likes": 12, "created_at": "2024-11-10T11:05:00Z", "creator_id": 3},
    {"id": 4, "title": "Is the Pomodoro technique overrated?", "likes": 34, "created_at": "2024-11-21T07:30:00Z", "creator_id": 1},
    {"id": 5, "title": "Share your weekend project", "likes": 8, "created_at": "2024-11-22T19:55:00Z", "creator_id": 2}
]"#;

pub const MOCK_MESSAGES: &str = r#"[
    {"id": 1, "topic_id": 1, "user_id": 2, "body": "Phone in another room, works every time.", "likes": 5, "created_at": "2024-11-18T10:00:00Z"},
    {"id": 2, "topic_id": 1, "user_id": 3, "parent_id": 1, "body": "Same here, plus noise-cancelling headphones.", "likes": 2, "created_at": "2024-11-18T10:30:00Z"},
    {"id": 3, "topic_id": 2, "user_id": 1, "body": "The book and rustlings, in that order.", "likes": 9, "created_at": "2024-11-20T17:10:00Z"},
    {"id": 4, "topic_id": 4, "user_id": 3, "body": "25 minutes is too short for deep work.", "likes": 3, "created_at": "2024-11-21T08:00:00Z"}
]"#;

/// A board populated with the demo users, topics and messages.
pub fn seed_board() -> Result<Board> {
    let mut board = Board::new();

    for (username, email) in DEMO_USERS {
        board.add_user(username, email)?;
    }
    for topic in load_topics_json(MOCK_TOPICS)? {
        board.insert_topic(topic)?;
    }
    for message in load_messages_json(MOCK_MESSAGES)? {
        board.insert_message(message)?;
    }

    info!(
        topics = board.all_topics().len(),
        users = DEMO_USERS.len(),
        "Board seeded with mock content"
    );
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortMode;

    #[test]
    fn test_seed_board_loads_everything() {
        let board = seed_board().unwrap();
        assert_eq!(board.all_topics().len(), 5);
        assert!(board.user_by_name("synapse").is_some());
        assert_eq!(board.topic_by_id(1).unwrap().messages, 2);
    }

    #[test]
    fn test_seed_board_credits_authors() {
        let board = seed_board().unwrap();
        let counters = |name: &str| {
            let user = board.user_by_name(name).unwrap();
            (user.topics_opened, user.messages_sent)
        };

        assert_eq!(counters("brainiac"), (2, 1));
        assert_eq!(counters("synapse"), (2, 1));
        assert_eq!(counters("neuron42"), (1, 2));
    }

    #[test]
    fn test_seeded_feed_orders() {
        let board = seed_board().unwrap();
        let ids = |mode| -> Vec<i64> { board.feed(mode, None).iter().map(|t| t.id).collect() };

        assert_eq!(ids(SortMode::Likes), vec![2, 1, 4, 3, 5]);
        assert_eq!(ids(SortMode::Recent), vec![5, 4, 2, 1, 3]);
        assert_eq!(ids(SortMode::Oldest), vec![3, 1, 2, 4, 5]);
        assert_eq!(ids(SortMode::Unsorted), vec![1, 2, 3, 4, 5]);
    }
}
