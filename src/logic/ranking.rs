//! Ranking engine: order players by any metric key, in either direction.

use crate::logic::metrics;
use crate::models::{MetricKey, Player, SortDirection};
use feruca::{Collator, Tailoring};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

impl MetricKey {
    /// Exact value of a raw integer key (counters, rating), or `None` for
    /// derived metrics and the name.
    pub fn integer_value(self, p: &Player) -> Option<i128> {
        let value = match self {
            MetricKey::SkillRating => i128::from(p.skill_rating),
            MetricKey::TotalKills => i128::from(p.total_kills),
            MetricKey::TotalDeaths => i128::from(p.total_deaths),
            MetricKey::TotalHeadshots => i128::from(p.total_headshots),
            MetricKey::TotalDamage => i128::from(p.total_damage),
            MetricKey::TotalRoundsPlayed => i128::from(p.total_rounds_played),
            MetricKey::TotalAssists => i128::from(p.total_assists),
            MetricKey::TotalMatches => i128::from(p.total_matches),
            MetricKey::MatchesWon => i128::from(p.matches_won),
            MetricKey::TotalMvps => i128::from(p.total_mvps),
            MetricKey::Total5ks => i128::from(p.total_5ks),
            _ => return None,
        };
        Some(value)
    }

    /// Numeric value of this key for `p`, or `None` for [`MetricKey::Name`].
    ///
    /// Integer keys are converted to `f64` here for display; ranking compares
    /// them through [`MetricKey::integer_value`] instead.
    pub fn numeric_value(self, p: &Player) -> Option<f64> {
        if let Some(v) = self.integer_value(p) {
            return Some(v as f64);
        }
        let value = match self {
            MetricKey::Kd => metrics::kd(p),
            MetricKey::HeadshotPct => metrics::headshot_pct(p),
            MetricKey::Adr => metrics::adr(p),
            MetricKey::WinRatePct => metrics::win_rate_pct(p),
            MetricKey::AssistsPerMatch => metrics::assists_per_match(p),
            MetricKey::KillsPerMatch => metrics::kills_per_match(p),
            MetricKey::DamagePerMatch => metrics::damage_per_match(p),
            MetricKey::MvpsPerMatch => metrics::mvps_per_match(p),
            _ => return None,
        };
        Some(value)
    }

    /// Ascending comparison of two players on this key. No secondary key.
    pub fn compare(self, a: &Player, b: &Player) -> Ordering {
        if let (Some(x), Some(y)) = (self.integer_value(a), self.integer_value(b)) {
            return x.cmp(&y);
        }
        match (self.numeric_value(a), self.numeric_value(b)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => compare_names(a.display_name(), b.display_name()),
        }
    }
}

/// Case-insensitive name order by the Unicode Collation Algorithm (CLDR root),
/// so accented letters sort next to their base letter.
fn compare_names(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    Collator::new(Tailoring::default(), true, false).collate(a.as_str(), b.as_str())
}

/// Order `players` by `key`. The sort is stable: players with equal values keep
/// their input order in both directions.
pub fn rank<'a, I>(players: I, key: MetricKey, direction: SortDirection) -> Vec<&'a Player>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut ranked: Vec<&Player> = players.into_iter().collect();
    match direction {
        SortDirection::Ascending => ranked.sort_by(|a, b| key.compare(a, b)),
        SortDirection::Descending => ranked.sort_by(|a, b| key.compare(b, a)),
    }
    ranked
}

/// Sort column state of a player table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub key: MetricKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(MetricKey::SkillRating)
    }
}

impl SortState {
    /// Sort by `key` in its default direction.
    pub fn new(key: MetricKey) -> Self {
        Self {
            key,
            direction: key.default_direction(),
        }
    }

    /// Select a column: the same column flips direction, a new one starts at its default.
    pub fn toggle(&mut self, key: MetricKey) {
        if self.key == key {
            self.direction = self.direction.reversed();
        } else {
            *self = Self::new(key);
        }
    }

    /// Rank `players` by the current column.
    pub fn apply<'a, I>(&self, players: I) -> Vec<&'a Player>
    where
        I: IntoIterator<Item = &'a Player>,
    {
        rank(players, self.key, self.direction)
    }
}
