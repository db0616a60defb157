//! Roster partition: every pool member sits in exactly one of available, team A or team B.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Errors from roster operations. The partition is left untouched whenever one is returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// Player is not part of the loaded pool.
    PlayerNotInPool(PlayerId),
    /// The same player appears more than once in a pool being loaded.
    DuplicatePlayer(PlayerId),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::PlayerNotInPool(id) => write!(f, "Player {} is not in the roster pool", id),
            RosterError::DuplicatePlayer(id) => write!(f, "Player {} appears more than once in the pool", id),
        }
    }
}

impl std::error::Error for RosterError {}

/// One of the two playing teams.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    A,
    B,
}

/// Where a pool member currently sits.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Available,
    TeamA,
    TeamB,
}

impl From<Team> for Side {
    fn from(team: Team) -> Self {
        match team {
            Team::A => Side::TeamA,
            Team::B => Side::TeamB,
        }
    }
}

/// How the partition got to its current contents.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterPhase {
    /// No pool loaded yet.
    Idle,
    /// Pool loaded, nobody on a team.
    Staged,
    /// At least one player on a team (balanced or hand-picked).
    Assigned,
}

#[derive(Clone, Debug)]
struct Member {
    player: Player,
    side: Side,
}

/// Three-way split of a player pool for one balancing session.
///
/// Members are stored once each with their current side, so disjointness and
/// totality hold by construction. Each set lists players in pool load order.
#[derive(Clone, Debug, Default)]
pub struct RosterPartition {
    members: Vec<Member>,
    loaded: bool,
}

/// Serializable view of a partition for the host layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSnapshot {
    pub available: Vec<Player>,
    pub team_a: Vec<Player>,
    pub team_b: Vec<Player>,
}

impl RosterPartition {
    /// An idle partition with no pool loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// A partition staged with `pool`.
    pub fn with_pool(pool: Vec<Player>) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        roster.reset(pool)?;
        Ok(roster)
    }

    /// Discard all membership and stage `pool` as available.
    pub fn reset(&mut self, pool: Vec<Player>) -> Result<(), RosterError> {
        let mut seen = HashSet::with_capacity(pool.len());
        if let Some(dup) = pool.iter().find(|p| !seen.insert(p.id)) {
            log::warn!("Rejected roster pool: duplicate player {}", dup.id);
            return Err(RosterError::DuplicatePlayer(dup.id));
        }
        self.members = pool
            .into_iter()
            .map(|player| Member {
                player,
                side: Side::Available,
            })
            .collect();
        self.loaded = true;
        log::debug!("Roster reset with {} players", self.members.len());
        Ok(())
    }

    /// Move a player onto `target`, from whichever set holds them. No-op if already there.
    pub fn move_to_team(&mut self, player_id: PlayerId, target: Team) -> Result<(), RosterError> {
        self.assign(player_id, target.into())
    }

    /// Send a player back to the available set.
    pub fn return_to_available(&mut self, player_id: PlayerId) -> Result<(), RosterError> {
        self.assign(player_id, Side::Available)
    }

    /// Return every player to available, keeping the loaded pool.
    pub fn clear_teams(&mut self) {
        for m in &mut self.members {
            m.side = Side::Available;
        }
        log::debug!("Roster teams cleared");
    }

    /// Overwrite every member's side in one pass; `sides` is indexed in pool load order.
    pub(crate) fn set_sides(&mut self, sides: &[Side]) {
        debug_assert_eq!(sides.len(), self.members.len());
        for (member, &side) in self.members.iter_mut().zip(sides) {
            member.side = side;
        }
    }

    fn assign(&mut self, player_id: PlayerId, side: Side) -> Result<(), RosterError> {
        let member = match self.members.iter_mut().find(|m| m.player.id == player_id) {
            Some(m) => m,
            None => {
                log::warn!("Cannot move player {}: not in roster pool", player_id);
                return Err(RosterError::PlayerNotInPool(player_id));
            }
        };
        if member.side != side {
            log::debug!("Player {} moved {:?} -> {:?}", player_id, member.side, side);
            member.side = side;
        }
        Ok(())
    }

    /// Idle until a pool is loaded, then Staged or Assigned depending on team membership.
    pub fn phase(&self) -> RosterPhase {
        if !self.loaded {
            RosterPhase::Idle
        } else if self.members.iter().all(|m| m.side == Side::Available) {
            RosterPhase::Staged
        } else {
            RosterPhase::Assigned
        }
    }

    /// Current side of a player, or `None` if they are not in the pool.
    pub fn side_of(&self, player_id: PlayerId) -> Option<Side> {
        self.members
            .iter()
            .find(|m| m.player.id == player_id)
            .map(|m| m.side)
    }

    /// Whether the player is part of the loaded pool.
    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.side_of(player_id).is_some()
    }

    /// Number of players in the loaded pool.
    pub fn pool_size(&self) -> usize {
        self.members.len()
    }

    /// All pool members in load order, regardless of side.
    pub fn pool(&self) -> impl Iterator<Item = &Player> + '_ {
        self.members.iter().map(|m| &m.player)
    }

    /// Players currently on `side`, in load order.
    pub fn players_on(&self, side: Side) -> impl Iterator<Item = &Player> + '_ {
        self.members
            .iter()
            .filter(move |m| m.side == side)
            .map(|m| &m.player)
    }

    /// Players not on either team.
    pub fn available(&self) -> impl Iterator<Item = &Player> + '_ {
        self.players_on(Side::Available)
    }

    /// Members of `team`.
    pub fn team(&self, team: Team) -> impl Iterator<Item = &Player> + '_ {
        self.players_on(team.into())
    }

    /// Sum of skill rating over the team's members, widened so it cannot overflow.
    pub fn team_rating(&self, team: Team) -> i128 {
        self.team(team).map(|p| i128::from(p.skill_rating)).sum()
    }

    /// Absolute difference between the two team ratings.
    pub fn team_rating_gap(&self) -> u128 {
        self.team_rating(Team::A).abs_diff(self.team_rating(Team::B))
    }

    /// Owned copy of the three sets for the host layer.
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            available: self.available().cloned().collect(),
            team_a: self.team(Team::A).cloned().collect(),
            team_b: self.team(Team::B).cloned().collect(),
        }
    }
}
