//! Player metrics, leaderboards and team balancing for a community shooter dashboard.

pub mod logic;
pub mod models;

pub use logic::{
    auto_balance, derive_metrics, leaderboard, rank, rebalance, BalancePolicy, BalanceReport,
    LeaderboardEntry, LeaderboardView, SortState, TeamSummary,
};
pub use models::{
    DerivedMetrics, MetricKey, Player, PlayerId, RosterError, RosterPartition, RosterPhase,
    RosterSnapshot, Side, SortDirection, Team,
};
