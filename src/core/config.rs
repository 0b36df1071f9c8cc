//! Sheet configuration.
//!
//! `SheetConfig` describes the table a sheet is opened for: how many seats,
//! and how the seats are named and colored. The default reproduces the
//! standard setup (three players, the owner first).

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::error::SheetError;

/// Fewest players the board game supports.
pub const MIN_PLAYERS: usize = 3;

/// Most players the board game supports.
pub const MAX_PLAYERS: usize = 6;

/// Seat colors, assigned in order and cycled.
pub const PLAYER_COLORS: [&str; 6] = [
    "#ef4444", // red
    "#3b82f6", // blue
    "#10b981", // green
    "#f59e0b", // amber
    "#8b5cf6", // violet
    "#ec4899", // pink
];

/// Complete sheet configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Number of players (`MIN_PLAYERS..=MAX_PLAYERS`).
    pub player_count: usize,

    /// Name of the sheet owner (player 0).
    pub user_name: String,

    /// Prefix for the other seats; seat `i` is named `"{prefix} {i + 1}"`.
    pub opponent_prefix: String,

    /// Seat colors, cycled when there are more seats than colors.
    pub colors: Vec<String>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            user_name: "Você".to_string(),
            opponent_prefix: "Jog.".to_string(),
            colors: PLAYER_COLORS.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl SheetConfig {
    /// Create a configuration for `player_count` players with default naming.
    pub fn new(player_count: usize) -> Result<Self, SheetError> {
        Self::default().with_player_count(player_count)
    }

    /// Set the player count, rejecting counts the game does not support.
    pub fn with_player_count(mut self, player_count: usize) -> Result<Self, SheetError> {
        validate_player_count(player_count)?;
        self.player_count = player_count;
        Ok(self)
    }

    /// Set the owner's display name.
    #[must_use]
    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = name.into();
        self
    }

    /// Set the prefix used to name the other seats.
    #[must_use]
    pub fn with_opponent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.opponent_prefix = prefix.into();
        self
    }

    /// Replace the seat color palette.
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Build the roster for this configuration.
    ///
    /// Fails if `player_count` was set out of range by direct field access.
    pub fn players(&self) -> Result<Vec<Player>, SheetError> {
        validate_player_count(self.player_count)?;

        let players = PlayerId::all(self.player_count)
            .map(|id| {
                let name = if id.index() == 0 {
                    self.user_name.clone()
                } else {
                    format!("{} {}", self.opponent_prefix, id.index() + 1)
                };
                let color = if self.colors.is_empty() {
                    String::new()
                } else {
                    self.colors[id.index() % self.colors.len()].clone()
                };
                Player::new(id, name, color)
            })
            .collect();

        Ok(players)
    }
}

/// Check that `count` is a supported number of players.
pub fn validate_player_count(count: usize) -> Result<(), SheetError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(SheetError::InvalidPlayerCount {
            count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })
    }
}
