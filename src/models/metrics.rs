//! Derived metrics and the keys players can be ranked by.

use serde::{Deserialize, Serialize};

/// Rates computed from a player's cumulative counters. Never stored, always recomputed.
///
/// Values are unrounded; sort and compare on these, round only for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    /// Kills per death; the raw kill count when the player has no deaths.
    pub kd: f64,
    /// Headshot kills as a percentage of all kills (0..=100).
    pub headshot_pct: f64,
    /// Average damage per round.
    pub adr: f64,
    /// Matches won as a percentage of matches played (0..=100).
    pub win_rate_pct: f64,
    pub assists_per_match: f64,
    pub kills_per_match: f64,
    pub damage_per_match: f64,
    pub mvps_per_match: f64,
    pub losses: u64,
}

/// Order of a ranked sequence.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A field players can be ranked by: a raw counter, a derived metric, or the display name.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    Name,
    SkillRating,
    TotalKills,
    TotalDeaths,
    TotalHeadshots,
    TotalDamage,
    TotalRoundsPlayed,
    TotalAssists,
    TotalMatches,
    MatchesWon,
    TotalMvps,
    Total5ks,
    Kd,
    HeadshotPct,
    Adr,
    WinRatePct,
    AssistsPerMatch,
    KillsPerMatch,
    DamagePerMatch,
    MvpsPerMatch,
}

impl MetricKey {
    /// Every key, in column order.
    pub const ALL: [MetricKey; 20] = [
        MetricKey::Name,
        MetricKey::SkillRating,
        MetricKey::TotalKills,
        MetricKey::TotalDeaths,
        MetricKey::TotalHeadshots,
        MetricKey::TotalDamage,
        MetricKey::TotalRoundsPlayed,
        MetricKey::TotalAssists,
        MetricKey::TotalMatches,
        MetricKey::MatchesWon,
        MetricKey::TotalMvps,
        MetricKey::Total5ks,
        MetricKey::Kd,
        MetricKey::HeadshotPct,
        MetricKey::Adr,
        MetricKey::WinRatePct,
        MetricKey::AssistsPerMatch,
        MetricKey::KillsPerMatch,
        MetricKey::DamagePerMatch,
        MetricKey::MvpsPerMatch,
    ];

    /// Column label for tables and leaderboard headings.
    pub fn label(self) -> &'static str {
        match self {
            MetricKey::Name => "Player",
            MetricKey::SkillRating => "Rating",
            MetricKey::TotalKills => "Kills",
            MetricKey::TotalDeaths => "Deaths",
            MetricKey::TotalHeadshots => "Headshots",
            MetricKey::TotalDamage => "Damage",
            MetricKey::TotalRoundsPlayed => "Rounds",
            MetricKey::TotalAssists => "Assists",
            MetricKey::TotalMatches => "Matches",
            MetricKey::MatchesWon => "Wins",
            MetricKey::TotalMvps => "MVPs",
            MetricKey::Total5ks => "5Ks",
            MetricKey::Kd => "K/D",
            MetricKey::HeadshotPct => "HS%",
            MetricKey::Adr => "ADR",
            MetricKey::WinRatePct => "Win %",
            MetricKey::AssistsPerMatch => "Assists/Match",
            MetricKey::KillsPerMatch => "Kills/Match",
            MetricKey::DamagePerMatch => "Damage/Match",
            MetricKey::MvpsPerMatch => "MVPs/Match",
        }
    }

    /// Direction a table starts in when this column is first selected.
    pub fn default_direction(self) -> SortDirection {
        match self {
            MetricKey::Name => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}

impl std::fmt::Display for MetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
