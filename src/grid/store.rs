//! The grid: one mark per (clue item, player) pair.
//!
//! ## Cascade
//!
//! A clue card sits in exactly one place: a player's hand or the envelope.
//! When a cell becomes positive (`Yes`/`Revealed`), every other player's
//! cell for that item is forced to `No`. The row is rebuilt in full and then
//! swapped in, so no caller ever observes a half-applied cascade.
//!
//! Clearing a positive mark does *not* undo the cascade: the `No` marks it
//! wrote may have been known independently.
//!
//! ## Persistence
//!
//! Rows live in an `im::HashMap`, so cloning a grid is O(1) and
//! [`Grid::with_mark`] can hand back an updated grid while leaving the
//! original intact.

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::catalog::{Catalog, ItemId};
use crate::core::{PlayerId, PlayerMap, MAX_PLAYERS};
use crate::error::SheetError;

use super::mark::Mark;

/// Per-player marks for one clue item.
pub type Row = PlayerMap<Mark>;

/// Outcome of a single `set_mark` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkChange {
    /// Item whose row was touched.
    pub item: ItemId,

    /// Player whose cell was clicked.
    pub player: PlayerId,

    /// Mark before the call (`Empty` if the cell did not exist).
    pub previous: Mark,

    /// Mark after the call.
    pub next: Mark,

    /// Other players whose cells the cascade overwrote with `No`.
    pub cascaded: SmallVec<[PlayerId; MAX_PLAYERS]>,
}

impl MarkChange {
    /// True if the call left the grid untouched.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.previous == self.next && self.cascaded.is_empty()
    }
}

/// Mark table for one game.
///
/// ## Example
///
/// ```
/// use detective_sheet::catalog::{Catalog, ItemId};
/// use detective_sheet::core::PlayerId;
/// use detective_sheet::{Grid, Mark};
///
/// let mut grid = Grid::for_catalog(&Catalog::standard(), 3);
/// let green = ItemId::suspect(1);
///
/// grid.set_mark(green, PlayerId::new(0), Mark::Yes);
/// assert_eq!(grid.mark(green, PlayerId::new(1)), Mark::No);
/// assert_eq!(grid.mark(green, PlayerId::new(2)), Mark::No);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    player_count: usize,
    rows: ImHashMap<ItemId, Row>,
}

/// Wire form of a grid, checked before it becomes a `Grid`.
#[derive(Deserialize)]
struct RawGrid {
    player_count: usize,
    rows: ImHashMap<ItemId, Row>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = SheetError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.player_count == 0 || raw.player_count > MAX_PLAYERS {
            return Err(SheetError::InvalidPlayerCount {
                count: raw.player_count,
                min: 1,
                max: MAX_PLAYERS,
            });
        }

        // Every row must have exactly one cell per player.
        if let Some((item, row)) = raw
            .rows
            .iter()
            .find(|(_, row)| row.player_count() != raw.player_count)
        {
            return Err(SheetError::RowWidth {
                item: *item,
                width: row.player_count(),
                player_count: raw.player_count,
            });
        }

        Ok(Self {
            player_count: raw.player_count,
            rows: raw.rows,
        })
    }
}

impl Grid {
    /// Create a grid with no rows. Every lookup reads `Mark::Empty` until a
    /// cell is written.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");

        Self {
            player_count,
            rows: ImHashMap::new(),
        }
    }

    /// Create a grid with an `Empty` cell for every catalog item and player.
    #[must_use]
    pub fn for_catalog(catalog: &Catalog, player_count: usize) -> Self {
        let mut grid = Self::new(player_count);
        let blank: Row = PlayerMap::with_default(player_count);

        for item in catalog.iter() {
            grid.rows.insert(item.id, blank.clone());
        }

        grid
    }

    /// Number of player columns.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Number of item rows present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no rows are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mark for `(item, player)`; `Empty` if the cell does not exist.
    #[must_use]
    pub fn mark(&self, item: ItemId, player: PlayerId) -> Mark {
        self.rows
            .get(&item)
            .and_then(|row| row.get(player))
            .copied()
            .unwrap_or_default()
    }

    /// The row for `item`, if present.
    #[must_use]
    pub fn row(&self, item: ItemId) -> Option<&Row> {
        self.rows.get(&item)
    }

    /// Number of players positively marked for `item`.
    #[must_use]
    pub fn positive_count(&self, item: ItemId) -> usize {
        self.rows
            .get(&item)
            .map_or(0, |row| row.values().filter(|m| m.is_positive()).count())
    }

    /// True if some player is positively marked for `item`.
    #[must_use]
    pub fn is_claimed(&self, item: ItemId) -> bool {
        self.rows
            .get(&item)
            .is_some_and(|row| row.values().any(|m| m.is_positive()))
    }

    /// First player positively marked for `item`.
    #[must_use]
    pub fn holder(&self, item: ItemId) -> Option<PlayerId> {
        self.rows
            .get(&item)?
            .iter()
            .find(|(_, m)| m.is_positive())
            .map(|(player, _)| player)
    }

    /// Apply `tool` to the cell `(item, player)`.
    ///
    /// The next mark follows [`Mark::toggled_by`]. A positive result forces
    /// every other player's cell for the item to `No`. A player outside the
    /// grid's columns cannot hold a mark: the call changes nothing.
    pub fn set_mark(&mut self, item: ItemId, player: PlayerId, tool: Mark) -> MarkChange {
        let mut row = self
            .rows
            .get(&item)
            .cloned()
            .unwrap_or_else(|| PlayerMap::with_default(self.player_count));

        let Some(cell) = row.get_mut(player) else {
            warn!(%item, %player, player_count = self.player_count, "player outside grid, mark ignored");
            return MarkChange {
                item,
                player,
                previous: Mark::Empty,
                next: Mark::Empty,
                cascaded: SmallVec::new(),
            };
        };

        let previous = *cell;
        let next = previous.toggled_by(tool);
        *cell = next;

        let mut cascaded: SmallVec<[PlayerId; MAX_PLAYERS]> = SmallVec::new();
        if next.is_positive() {
            for (other, mark) in row.iter_mut() {
                if other != player && *mark != Mark::No {
                    *mark = Mark::No;
                    cascaded.push(other);
                }
            }
        }

        self.rows.insert(item, row);

        debug!(%item, %player, %previous, %next, %tool, "mark changed");
        if !cascaded.is_empty() {
            debug!(%item, ruled_out = ?cascaded, "cascade ruled out other players");
        }

        MarkChange {
            item,
            player,
            previous,
            next,
            cascaded,
        }
    }

    /// Return a copy of this grid with `tool` applied to `(item, player)`.
    ///
    /// `self` is left unchanged; the copy shares all untouched rows.
    #[must_use]
    pub fn with_mark(&self, item: ItemId, player: PlayerId, tool: Mark) -> Grid {
        let mut next = self.clone();
        next.set_mark(item, player, tool);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid3() -> Grid {
        Grid::for_catalog(&Catalog::standard(), 3)
    }

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    #[test]
    fn test_fresh_grid_is_empty_everywhere() {
        let grid = grid3();

        assert_eq!(grid.len(), 21);
        for item in Catalog::standard().iter() {
            for player in PlayerId::all(3) {
                assert_eq!(grid.mark(item.id, player), Mark::Empty);
            }
        }
    }

    #[test]
    fn test_missing_cell_reads_empty() {
        let grid = Grid::new(3);
        assert!(grid.is_empty());
        assert_eq!(grid.mark(ItemId::weapon(1), P1), Mark::Empty);
        assert_eq!(grid.mark(ItemId::weapon(1), PlayerId::new(9)), Mark::Empty);
    }

    #[test]
    fn test_toggle_on_and_off() {
        let mut grid = grid3();
        let item = ItemId::weapon(2);

        let change = grid.set_mark(item, P1, Mark::Maybe);
        assert_eq!(change.previous, Mark::Empty);
        assert_eq!(change.next, Mark::Maybe);

        let change = grid.set_mark(item, P1, Mark::Maybe);
        assert_eq!(change.previous, Mark::Maybe);
        assert_eq!(change.next, Mark::Empty);
        assert_eq!(grid.mark(item, P1), Mark::Empty);
    }

    #[test]
    fn test_positive_cascades_to_other_players() {
        let mut grid = grid3();
        let item = ItemId::location(5);

        grid.set_mark(item, P0, Mark::Maybe);
        let change = grid.set_mark(item, P2, Mark::Revealed);

        assert_eq!(grid.mark(item, P2), Mark::Revealed);
        assert_eq!(grid.mark(item, P0), Mark::No);
        assert_eq!(grid.mark(item, P1), Mark::No);
        assert_eq!(change.cascaded.as_slice(), &[P0, P1]);
    }

    #[test]
    fn test_cascade_skips_cells_already_no() {
        let mut grid = grid3();
        let item = ItemId::suspect(4);

        grid.set_mark(item, P1, Mark::No);
        let change = grid.set_mark(item, P0, Mark::Yes);

        assert_eq!(change.cascaded.as_slice(), &[P2]);
        assert_eq!(grid.mark(item, P1), Mark::No);
    }

    #[test]
    fn test_clearing_positive_keeps_cascade() {
        let mut grid = grid3();
        let item = ItemId::suspect(1);

        grid.set_mark(item, P0, Mark::Yes);
        grid.set_mark(item, P0, Mark::Yes);

        assert_eq!(grid.mark(item, P0), Mark::Empty);
        assert_eq!(grid.mark(item, P1), Mark::No);
        assert_eq!(grid.mark(item, P2), Mark::No);
    }

    #[test]
    fn test_moving_positive_between_players() {
        let mut grid = grid3();
        let item = ItemId::weapon(3);

        grid.set_mark(item, P0, Mark::Yes);
        grid.set_mark(item, P1, Mark::Yes);

        assert_eq!(grid.mark(item, P1), Mark::Yes);
        assert_eq!(grid.mark(item, P0), Mark::No);
        assert_eq!(grid.positive_count(item), 1);
        assert_eq!(grid.holder(item), Some(P1));
    }

    #[test]
    fn test_out_of_roster_player_is_noop() {
        let mut grid = grid3();
        let before = grid.clone();

        let change = grid.set_mark(ItemId::suspect(2), PlayerId::new(5), Mark::Yes);

        assert!(change.is_noop());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_missing_row_is_created_on_write() {
        let mut grid = Grid::new(4);
        let item = ItemId::location(2);

        let change = grid.set_mark(item, P1, Mark::Yes);

        assert_eq!(change.previous, Mark::Empty);
        assert_eq!(grid.row(item).map(|r| r.player_count()), Some(4));
        assert_eq!(grid.mark(item, PlayerId::new(3)), Mark::No);
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let grid = grid3();
        let item = ItemId::suspect(6);

        let updated = grid.with_mark(item, P0, Mark::Yes);

        assert_eq!(grid.mark(item, P0), Mark::Empty);
        assert_eq!(updated.mark(item, P0), Mark::Yes);
        assert_eq!(updated.mark(item, P1), Mark::No);
    }

    #[test]
    fn test_claimed_and_holder() {
        let mut grid = grid3();
        let item = ItemId::weapon(5);

        assert!(!grid.is_claimed(item));
        assert_eq!(grid.holder(item), None);

        grid.set_mark(item, P2, Mark::Strong);
        assert!(!grid.is_claimed(item));

        grid.set_mark(item, P2, Mark::Yes);
        assert!(grid.is_claimed(item));
        assert_eq!(grid.holder(item), Some(P2));
    }

    #[test]
    fn test_grid_serde() {
        let mut grid = grid3();
        grid.set_mark(ItemId::suspect(1), P0, Mark::Yes);

        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();

        assert_eq!(grid, back);
    }

    #[test]
    fn test_load_rejects_row_wider_than_roster() {
        let mut wide = Grid::new(5);
        wide.set_mark(ItemId::suspect(1), PlayerId::new(4), Mark::Yes);

        let json = serde_json::to_string(&wide)
            .unwrap()
            .replace("\"player_count\":5", "\"player_count\":3");
        let err = serde_json::from_str::<Grid>(&json).unwrap_err();

        assert!(err.to_string().contains("row s1 has 5 cells"));
    }

    #[test]
    fn test_load_rejects_zero_players() {
        let json = r#"{"player_count":0,"rows":{}}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
