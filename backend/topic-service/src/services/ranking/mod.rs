/// Ranking Module
///
/// Orders feed records (topics on the home page, messages inside a thread)
/// by the sort toggle the reader picked.
///
/// # Modes
/// - **likes**: most liked first
/// - **recent**: newest first
/// - **oldest**: oldest first
/// - anything else: caller's order, untouched
///
/// Ordering is stable: records with equal keys keep their input order.
pub mod layer;

pub use layer::RankingLayer;

use crate::models::{Message, SortMode, Topic};
use chrono::{DateTime, Utc};

/// Keys a record must expose to be ranked.
pub trait Rankable {
    fn likes(&self) -> u32;
    fn created_at(&self) -> DateTime<Utc>;
}

impl Rankable for Topic {
    fn likes(&self) -> u32 {
        self.likes
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Rankable for Message {
    fn likes(&self) -> u32 {
        self.likes
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Returns a freshly ordered copy of `items`. The input is left untouched.
pub fn rank<T: Rankable + Clone>(items: &[T], mode: SortMode) -> Vec<T> {
    let mut ranked = items.to_vec();

    // slice::sort_by is stable, ties keep input order
    match mode {
        SortMode::Likes => ranked.sort_by(|a, b| b.likes().cmp(&a.likes())),
        SortMode::Recent => ranked.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
        SortMode::Oldest => ranked.sort_by_key(|item| item.created_at()),
        SortMode::Unsorted => {}
    }

    ranked
}

/// Same as [`rank`], with the mode still in its raw toggle form.
pub fn rank_by_name<T: Rankable + Clone>(items: &[T], mode: &str) -> Vec<T> {
    rank(items, SortMode::parse(mode))
}
