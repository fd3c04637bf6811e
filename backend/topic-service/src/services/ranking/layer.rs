use super::{rank, Rankable};
use crate::models::SortMode;
use tracing::debug;

/// Ranking Layer - orders a feed page for display.
///
/// Stateless: the selected mode is supplied on every call.
pub struct RankingLayer;

impl Default for RankingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingLayer {
    pub fn new() -> Self {
        Self
    }

    /// Rank `items` by `mode` and keep at most `top_k` of them.
    pub fn rank_feed<T: Rankable + Clone>(
        &self,
        items: &[T],
        mode: SortMode,
        top_k: Option<usize>,
    ) -> Vec<T> {
        let mut ranked = rank(items, mode);
        if let Some(limit) = top_k {
            ranked.truncate(limit);
        }

        debug!(
            mode = %mode,
            candidates = items.len(),
            returned = ranked.len(),
            "Feed ranked"
        );

        ranked
    }
}
