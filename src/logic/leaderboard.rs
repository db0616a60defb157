//! Leaderboard views: (filter, metric, direction, limit) tuples over the ranking engine.

use crate::logic::metrics::derive_metrics;
use crate::logic::ranking::rank;
use crate::models::{DerivedMetrics, MetricKey, Player, SortDirection};
use serde::{Deserialize, Serialize};

/// Minimum matches for general leaderboards.
pub const DEFAULT_MIN_MATCHES: u64 = 1;

/// Minimum matches before a player can show up on a "worst" board.
pub const WORST_MIN_MATCHES: u64 = 3;

/// One leaderboard view. Deserializable so hosts can define views in config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    pub metric: MetricKey,
    #[serde(default)]
    pub direction: SortDirection,
    /// Players with fewer matches are left out before ranking.
    #[serde(default = "default_min_matches")]
    pub min_matches: u64,
    /// Maximum number of entries; `None` keeps everyone.
    #[serde(default)]
    pub limit: Option<usize>,
}

fn default_min_matches() -> u64 {
    DEFAULT_MIN_MATCHES
}

impl LeaderboardView {
    /// Top `limit` players by `metric`, nobody filtered out.
    pub fn best(metric: MetricKey, limit: usize) -> Self {
        Self {
            metric,
            direction: SortDirection::Descending,
            min_matches: 0,
            limit: Some(limit),
        }
    }

    /// Full ranking table of everyone who has played.
    pub fn table(metric: MetricKey) -> Self {
        Self {
            metric,
            direction: metric.default_direction(),
            min_matches: DEFAULT_MIN_MATCHES,
            limit: None,
        }
    }

    /// Bottom `limit` players by `metric` among those with enough matches.
    pub fn worst(metric: MetricKey, limit: usize) -> Self {
        Self {
            metric,
            direction: SortDirection::Ascending,
            min_matches: WORST_MIN_MATCHES,
            limit: Some(limit),
        }
    }

    /// Override the minimum match count.
    pub fn with_min_matches(mut self, min_matches: u64) -> Self {
        self.min_matches = min_matches;
        self
    }

    /// Whether `p` has played enough matches to appear in this view.
    pub fn admits(&self, p: &Player) -> bool {
        p.total_matches >= self.min_matches
    }
}

/// A ranked row: 1-based position, player and its derived metrics.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry<'a> {
    pub position: usize,
    pub player: &'a Player,
    pub metrics: DerivedMetrics,
}

/// Filter, rank and truncate `players` according to `view`.
pub fn leaderboard<'a>(players: &'a [Player], view: &LeaderboardView) -> Vec<LeaderboardEntry<'a>> {
    let eligible = players.iter().filter(|p| view.admits(p));
    let ranked = rank(eligible, view.metric, view.direction);
    let limit = view.limit.unwrap_or(ranked.len());
    ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, player)| LeaderboardEntry {
            position: i + 1,
            player,
            metrics: derive_metrics(player),
        })
        .collect()
}
