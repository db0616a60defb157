//! Core logic: metric derivation, ranking, leaderboards and team balancing.

mod balance;
mod leaderboard;
pub mod metrics;
mod ranking;

pub use balance::{
    auto_balance, rebalance, BalancePolicy, BalanceReport, TeamSummary, DEFAULT_MAX_RATING_GAP,
};
pub use leaderboard::{
    leaderboard, LeaderboardEntry, LeaderboardView, DEFAULT_MIN_MATCHES, WORST_MIN_MATCHES,
};
pub use metrics::derive_metrics;
pub use ranking::{rank, SortState};
