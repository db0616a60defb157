//! Team balancing: greedy auto-balance and balance quality reports.

use crate::models::{Player, RosterError, RosterPartition, Side, Team};
use serde::{Deserialize, Serialize};

/// Rating gap above which a team assignment is flagged as unbalanced.
pub const DEFAULT_MAX_RATING_GAP: u64 = 200;

/// Policy for judging a team assignment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancePolicy {
    #[serde(default = "default_max_rating_gap")]
    pub max_rating_gap: u64,
}

fn default_max_rating_gap() -> u64 {
    DEFAULT_MAX_RATING_GAP
}

impl Default for BalancePolicy {
    fn default() -> Self {
        Self {
            max_rating_gap: default_max_rating_gap(),
        }
    }
}

/// Size and rating totals for one team.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub team: Team,
    pub size: usize,
    pub total_rating: i128,
    /// 0 for an empty team.
    pub average_rating: f64,
}

/// Both teams side by side with their rating gap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    pub team_a: TeamSummary,
    pub team_b: TeamSummary,
    pub rating_gap: u128,
    pub is_balanced: bool,
}

/// Split `pool` into two teams by skill rating and load the result into `roster`.
///
/// 1. Sort by skill rating, highest first (ties keep pool order).
/// 2. Walk once, giving each player to team A when `sum_a <= sum_b`, else team B.
/// 3. Nobody is left available.
///
/// The walk is linear. Not guaranteed optimal for arbitrary rating sets.
pub fn auto_balance(roster: &mut RosterPartition, pool: Vec<Player>) -> Result<(), RosterError> {
    roster.reset(pool)?;

    let ratings: Vec<i64> = roster.pool().map(|p| p.skill_rating).collect();
    let mut order: Vec<usize> = (0..ratings.len()).collect();
    order.sort_by(|&i, &j| ratings[j].cmp(&ratings[i]));

    // Widened so extreme ratings cannot overflow.
    let mut sum_a: i128 = 0;
    let mut sum_b: i128 = 0;
    let mut sides = vec![Side::Available; ratings.len()];
    for i in order {
        let rating = i128::from(ratings[i]);
        sides[i] = if sum_a <= sum_b {
            sum_a += rating;
            Side::TeamA
        } else {
            sum_b += rating;
            Side::TeamB
        };
    }

    roster.set_sides(&sides);
    log::debug!(
        "Auto-balanced {} players: team A {} vs team B {}",
        roster.pool_size(),
        sum_a,
        sum_b
    );
    Ok(())
}

/// Auto-balance the pool already loaded in `roster`, in load order.
pub fn rebalance(roster: &mut RosterPartition) -> Result<(), RosterError> {
    let pool: Vec<Player> = roster.pool().cloned().collect();
    auto_balance(roster, pool)
}

impl RosterPartition {
    /// Size, total and average rating of one team.
    pub fn summary(&self, team: Team) -> TeamSummary {
        let size = self.team(team).count();
        let total_rating = self.team_rating(team);
        let average_rating = if size == 0 {
            0.0
        } else {
            total_rating as f64 / size as f64
        };
        TeamSummary {
            team,
            size,
            total_rating,
            average_rating,
        }
    }

    /// Both team summaries and whether their gap is within `policy`.
    pub fn balance_report(&self, policy: &BalancePolicy) -> BalanceReport {
        let rating_gap = self.team_rating_gap();
        BalanceReport {
            team_a: self.summary(Team::A),
            team_b: self.summary(Team::B),
            rating_gap,
            is_balanced: rating_gap <= u128::from(policy.max_rating_gap),
        }
    }
}
