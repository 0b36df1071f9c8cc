//! An active game: the roster, the catalog, and the grid.

use tracing::info;

use crate::catalog::{Catalog, Category, ItemId};
use crate::core::{Player, PlayerId, SheetConfig};
use crate::deduction::{self, DeductionSummary, Envelope};
use crate::error::SheetError;
use crate::grid::{Grid, Mark, MarkChange};

/// Start a game for `player_count` players with the default setup.
///
/// ```
/// use detective_sheet::start_game;
///
/// let game = start_game(3).unwrap();
/// assert_eq!(game.players().len(), 3);
/// assert_eq!(game.grid().len(), 21);
/// assert!(start_game(7).is_err());
/// ```
pub fn start_game(player_count: usize) -> Result<Game, SheetError> {
    Game::start(SheetConfig::new(player_count)?)
}

/// One game's worth of sheet state.
///
/// The roster and grid are created together and replaced together: a new
/// game always starts from a fresh, all-`Empty` grid.
#[derive(Clone, Debug)]
pub struct Game {
    config: SheetConfig,
    catalog: Catalog,
    players: Vec<Player>,
    grid: Grid,
}

impl Game {
    /// Start a game over the standard catalog.
    pub fn start(config: SheetConfig) -> Result<Self, SheetError> {
        Self::with_catalog(config, Catalog::standard())
    }

    /// Start a game over a custom catalog.
    pub fn with_catalog(config: SheetConfig, catalog: Catalog) -> Result<Self, SheetError> {
        let players = config.players()?;
        let grid = Grid::for_catalog(&catalog, players.len());

        info!(
            players = players.len(),
            items = catalog.len(),
            "game started"
        );

        Ok(Self {
            config,
            catalog,
            players,
            grid,
        })
    }

    /// The configuration this game was started with.
    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// The clue catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The roster, sheet owner first.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// The current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current mark for `(item, player)`.
    #[must_use]
    pub fn mark(&self, item: ItemId, player: PlayerId) -> Mark {
        self.grid.mark(item, player)
    }

    /// Apply `tool` to `(item, player)`. See [`Grid::set_mark`].
    pub fn set_mark(&mut self, item: ItemId, player: PlayerId, tool: Mark) -> MarkChange {
        self.grid.set_mark(item, player, tool)
    }

    /// Parse an item id string and check it against the catalog.
    pub fn resolve_item(&self, raw: &str) -> Result<ItemId, SheetError> {
        let id: ItemId = raw.parse()?;
        if self.catalog.contains(id) {
            Ok(id)
        } else {
            Err(SheetError::UnknownItem(raw.to_string()))
        }
    }

    /// Parse a player id string and check it against the roster.
    pub fn resolve_player(&self, raw: &str) -> Result<PlayerId, SheetError> {
        let id: PlayerId = raw.parse()?;
        if self.player(id).is_some() {
            Ok(id)
        } else {
            Err(SheetError::UnknownPlayer(raw.to_string()))
        }
    }

    /// [`Game::set_mark`] addressed by id strings (`"s1"`, `"p0"`).
    pub fn set_mark_by_ids(
        &mut self,
        item: &str,
        player: &str,
        tool: Mark,
    ) -> Result<MarkChange, SheetError> {
        let item = self.resolve_item(item)?;
        let player = self.resolve_player(player)?;
        Ok(self.set_mark(item, player, tool))
    }

    /// Names of the remaining candidates of `category`, in catalog order.
    #[must_use]
    pub fn candidates(&self, category: Category) -> Vec<&str> {
        deduction::candidates(&self.grid, self.catalog.items_in(category))
    }

    /// True iff `item` is the only candidate left in its category.
    #[must_use]
    pub fn is_solution_item(&self, item: ItemId) -> bool {
        deduction::is_solution_item(&self.grid, item, self.catalog.items_in(item.category))
    }

    /// The deduction panel for the current grid.
    #[must_use]
    pub fn deduction(&self) -> DeductionSummary {
        DeductionSummary::compute(&self.grid, &self.catalog)
    }

    /// The envelope, once every category is resolved.
    #[must_use]
    pub fn solution(&self) -> Option<Envelope> {
        self.deduction().solution()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_game_builds_roster_and_grid() {
        for count in 3..=6 {
            let game = start_game(count).unwrap();

            assert_eq!(game.players().len(), count);
            assert_eq!(game.grid().player_count(), count);
            assert_eq!(game.grid().len(), 21);
            assert!(game.players()[0].is_user);
        }
    }

    #[test]
    fn test_start_game_rejects_bad_counts() {
        assert!(matches!(
            start_game(2),
            Err(SheetError::InvalidPlayerCount { count: 2, .. })
        ));
        assert!(start_game(0).is_err());
        assert!(start_game(7).is_err());
    }

    #[test]
    fn test_set_mark_by_ids() {
        let mut game = start_game(3).unwrap();

        let change = game.set_mark_by_ids("s1", "p0", Mark::Yes).unwrap();
        assert_eq!(change.next, Mark::Yes);
        assert_eq!(game.mark(ItemId::suspect(1), PlayerId::new(2)), Mark::No);

        assert_eq!(
            game.set_mark_by_ids("s7", "p0", Mark::Yes),
            Err(SheetError::UnknownItem("s7".to_string()))
        );
        assert_eq!(
            game.set_mark_by_ids("s1", "p3", Mark::Yes),
            Err(SheetError::UnknownPlayer("p3".to_string()))
        );
    }

    #[test]
    fn test_candidates_and_solution_by_category() {
        let mut game = start_game(3).unwrap();
        let p1 = PlayerId::new(1);

        for n in [1, 2, 4, 5, 6] {
            game.set_mark(ItemId::suspect(n), p1, Mark::Yes);
        }

        assert_eq!(game.candidates(Category::Suspect), vec!["Sra. Peacock"]);
        assert!(game.is_solution_item(ItemId::suspect(3)));
        assert!(!game.is_solution_item(ItemId::weapon(3)));
        assert_eq!(game.solution(), None);
    }

    #[test]
    fn test_player_lookup() {
        let game = start_game(4).unwrap();

        assert_eq!(game.player(PlayerId::new(3)).map(|p| p.name.as_str()), Some("Jog. 4"));
        assert!(game.player(PlayerId::new(4)).is_none());
    }
}
