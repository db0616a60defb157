//! Metric deriver: normalized rates from raw counters.
//!
//! Every function is total. Division by zero falls back to a defined value
//! instead of producing NaN or infinity.

use crate::models::{DerivedMetrics, Player};

/// `numerator / denominator`, or 0 when the denominator is 0.
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Kills per death. With no deaths this is the raw kill count.
pub fn kd(p: &Player) -> f64 {
    if p.total_deaths == 0 {
        p.total_kills as f64
    } else {
        ratio(p.total_kills, p.total_deaths)
    }
}

/// Headshot kills as a percentage of kills, or 0 with no kills.
pub fn headshot_pct(p: &Player) -> f64 {
    ratio(p.total_headshots, p.total_kills) * 100.0
}

/// Average damage per round.
pub fn adr(p: &Player) -> f64 {
    ratio(p.total_damage, p.total_rounds_played)
}

/// Matches won as a percentage of matches played, or 0 with no matches.
pub fn win_rate_pct(p: &Player) -> f64 {
    ratio(p.matches_won, p.total_matches) * 100.0
}

/// Assists per match, or 0 with no matches.
pub fn assists_per_match(p: &Player) -> f64 {
    ratio(p.total_assists, p.total_matches)
}

/// Kills per match, or 0 with no matches.
pub fn kills_per_match(p: &Player) -> f64 {
    ratio(p.total_kills, p.total_matches)
}

/// Damage per match, or 0 with no matches.
pub fn damage_per_match(p: &Player) -> f64 {
    ratio(p.total_damage, p.total_matches)
}

/// MVP awards per match, or 0 with no matches.
pub fn mvps_per_match(p: &Player) -> f64 {
    ratio(p.total_mvps, p.total_matches)
}

/// Matches not won. Saturates at 0 if the counters disagree.
pub fn losses(p: &Player) -> u64 {
    p.total_matches.saturating_sub(p.matches_won)
}

/// All derived metrics for one player.
pub fn derive_metrics(p: &Player) -> DerivedMetrics {
    DerivedMetrics {
        kd: kd(p),
        headshot_pct: headshot_pct(p),
        adr: adr(p),
        win_rate_pct: win_rate_pct(p),
        assists_per_match: assists_per_match(p),
        kills_per_match: kills_per_match(p),
        damage_per_match: damage_per_match(p),
        mvps_per_match: mvps_per_match(p),
        losses: losses(p),
    }
}

impl DerivedMetrics {
    /// Same as [`derive_metrics`].
    pub fn from_player(p: &Player) -> Self {
        derive_metrics(p)
    }
}
