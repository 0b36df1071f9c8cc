//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Renders as `p0`, `p1`, ... and parses back
//! from the same form.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by an inline `SmallVec` (no heap
//! allocation up to `MAX_PLAYERS` entries) with O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! The seat metadata shown in the sheet header: name, color, and whether
//! the seat belongs to the person using the sheet.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::config::MAX_PLAYERS;
use crate::error::SheetError;

/// Player identifier.
///
/// Player indices are 0-based: the first player (the sheet owner) is
/// `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use detective_sheet::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('p')
            .and_then(|digits| digits.parse::<u8>().ok())
            .map(PlayerId)
            .ok_or_else(|| SheetError::UnknownPlayer(s.to_string()))
    }
}

/// Per-player data storage with O(1) access.
///
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use detective_sheet::core::{PlayerId, PlayerMap};
/// use detective_sheet::Mark;
///
/// let mut row: PlayerMap<Mark> = PlayerMap::with_default(4);
/// assert_eq!(row[PlayerId::new(0)], Mark::Empty);
///
/// row[PlayerId::new(1)] = Mark::Yes;
/// assert_eq!(row.get(PlayerId::new(1)), Some(&Mark::Yes));
/// assert_eq!(row.get(PlayerId::new(9)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: SmallVec<[T; MAX_PLAYERS]>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether `player` has a slot in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a player's data, if the player has a slot.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, if the player has a slot.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the stored values in player order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier for the lifetime of one game.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Display color as a `#rrggbb` string.
    pub color: String,

    /// True only for the sheet owner (always the first player).
    pub is_user: bool,
}

impl Player {
    /// Create a new player.
    pub fn new(id: PlayerId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            is_user: id.index() == 0,
        }
    }

    /// Column header label: `EU` for the sheet owner, otherwise the second
    /// word of the name (`"Jog. 3"` -> `"3"`), falling back to the full name.
    #[must_use]
    pub fn short_label(&self) -> &str {
        if self.is_user {
            return "EU";
        }
        self.name.split(' ').nth(1).unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "p0");
    }

    #[test]
    fn test_player_id_parse() {
        assert_eq!("p3".parse::<PlayerId>(), Ok(PlayerId::new(3)));
        assert_eq!(
            "x3".parse::<PlayerId>(),
            Err(SheetError::UnknownPlayer("x3".to_string()))
        );
        assert!("p".parse::<PlayerId>().is_err());
        assert!("p999".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_out_of_range() {
        let map: PlayerMap<i32> = PlayerMap::with_value(3, 7);

        assert!(map.contains(PlayerId::new(2)));
        assert!(!map.contains(PlayerId::new(3)));
        assert_eq!(map.get(PlayerId::new(3)), None);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_short_label() {
        let me = Player::new(PlayerId::new(0), "Você", "#ef4444");
        let other = Player::new(PlayerId::new(2), "Jog. 3", "#10b981");
        let single = Player::new(PlayerId::new(1), "Ana", "#3b82f6");

        assert!(me.is_user);
        assert!(!other.is_user);
        assert_eq!(me.short_label(), "EU");
        assert_eq!(other.short_label(), "3");
        assert_eq!(single.short_label(), "Ana");
    }
}
