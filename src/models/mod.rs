//! Data structures: player records, derived metrics, roster partition.

mod metrics;
mod player;
mod roster;

pub use metrics::{DerivedMetrics, MetricKey, SortDirection};
pub use player::{Player, PlayerId, UNKNOWN_PLAYER_NAME};
pub use roster::{RosterError, RosterPartition, RosterPhase, RosterSnapshot, Side, Team};
