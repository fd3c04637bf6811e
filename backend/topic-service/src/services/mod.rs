pub mod board;
pub mod loader;
pub mod ranking;

pub use board::Board;
pub use loader::{load_messages_json, load_topics_json, MessageRecord, TopicRecord};
pub use ranking::{rank, rank_by_name, Rankable, RankingLayer};
