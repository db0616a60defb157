//! Player record as supplied by the data-access layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (stable across sessions).
pub type PlayerId = Uuid;

/// Shown when a player has neither a nickname nor a first name.
pub const UNKNOWN_PLAYER_NAME: &str = "Unknown";

/// A player with cumulative counters. The core never mutates the counters.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub total_kills: u64,
    #[serde(default)]
    pub total_deaths: u64,
    #[serde(default)]
    pub total_headshots: u64,
    #[serde(default)]
    pub total_damage: u64,
    #[serde(default)]
    pub total_rounds_played: u64,
    #[serde(default)]
    pub total_assists: u64,
    #[serde(default)]
    pub total_matches: u64,
    #[serde(default)]
    pub matches_won: u64,
    #[serde(default)]
    pub total_mvps: u64,
    #[serde(default, rename = "total5ks")]
    pub total_5ks: u64,
    /// Balancing weight; may be negative.
    #[serde(default)]
    pub skill_rating: i64,
    #[serde(default)]
    pub is_admin: bool,
}

impl Player {
    /// Create a player with the given nickname. Counters and rating start at zero.
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            nickname: Some(nickname.into()),
            first_name: None,
            total_kills: 0,
            total_deaths: 0,
            total_headshots: 0,
            total_damage: 0,
            total_rounds_played: 0,
            total_assists: 0,
            total_matches: 0,
            matches_won: 0,
            total_mvps: 0,
            total_5ks: 0,
            skill_rating: 0,
            is_admin: false,
        }
    }

    /// Nickname, falling back to first name, falling back to [`UNKNOWN_PLAYER_NAME`].
    ///
    /// Values are trimmed and a blank one counts as missing, so a nickname of only
    /// spaces shows the first name instead of an empty label.
    pub fn display_name(&self) -> &str {
        [self.nickname.as_deref(), self.first_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_PLAYER_NAME)
    }

    /// Set the first name used when the nickname is blank.
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the skill rating used for balancing.
    pub fn with_rating(mut self, skill_rating: i64) -> Self {
        self.skill_rating = skill_rating;
        self
    }

    /// Set kill/death/headshot counters.
    pub fn with_frags(mut self, kills: u64, deaths: u64, headshots: u64) -> Self {
        self.total_kills = kills;
        self.total_deaths = deaths;
        self.total_headshots = headshots;
        self
    }

    /// Set total damage and rounds played.
    pub fn with_damage(mut self, damage: u64, rounds_played: u64) -> Self {
        self.total_damage = damage;
        self.total_rounds_played = rounds_played;
        self
    }

    /// Set matches played and matches won.
    pub fn with_matches(mut self, played: u64, won: u64) -> Self {
        self.total_matches = played;
        self.matches_won = won;
        self
    }

    /// Set total assists.
    pub fn with_assists(mut self, assists: u64) -> Self {
        self.total_assists = assists;
        self
    }

    /// Set MVP awards and five-kill rounds.
    pub fn with_highlights(mut self, mvps: u64, five_ks: u64) -> Self {
        self.total_mvps = mvps;
        self.total_5ks = five_ks;
        self
    }
}
