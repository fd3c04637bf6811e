pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod services;
pub mod validators;

pub use config::Config;
pub use error::{BoardError, Result};
pub use models::{Message, SortMode, Topic, User};
pub use services::{rank, rank_by_name, Board, Rankable, RankingLayer};
