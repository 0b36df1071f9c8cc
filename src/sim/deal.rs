//! Seeded deals: a hidden envelope plus every other card dealt to players.

use tracing::debug;

use crate::catalog::{Catalog, Category, ItemId};
use crate::core::{validate_player_count, GameRng, PlayerId, PlayerMap};
use crate::deduction::Envelope;
use crate::error::SheetError;
use crate::grid::{Grid, Mark, MarkChange};

/// One concrete distribution of the clue cards.
///
/// ## Example
///
/// ```
/// use detective_sheet::catalog::Catalog;
/// use detective_sheet::core::PlayerId;
/// use detective_sheet::sim::Deal;
///
/// let catalog = Catalog::standard();
/// let deal = Deal::random(&catalog, 3, 42).unwrap();
///
/// let dealt: usize = PlayerId::all(3).map(|p| deal.hand(p).len()).sum();
/// assert_eq!(dealt, 18);
/// assert_eq!(deal.holder(deal.envelope().suspect), None);
/// ```
#[derive(Clone, Debug)]
pub struct Deal {
    seed: u64,
    envelope: Envelope,
    hands: PlayerMap<Vec<ItemId>>,
}

impl Deal {
    /// Pick one envelope item per category, shuffle the rest and deal them
    /// round-robin starting with player 0. Deterministic per `seed`.
    pub fn random(catalog: &Catalog, player_count: usize, seed: u64) -> Result<Self, SheetError> {
        validate_player_count(player_count)?;

        let rng = GameRng::new(seed);
        let mut envelope_rng = rng.for_context("envelope");
        let mut shuffle_rng = rng.for_context("shuffle");

        let mut pick = |category: Category| {
            envelope_rng
                .choose(catalog.items_in(category))
                .map(|item| item.id)
                .ok_or(SheetError::EmptyCategory(category))
        };
        let envelope = Envelope {
            suspect: pick(Category::Suspect)?,
            weapon: pick(Category::Weapon)?,
            location: pick(Category::Location)?,
        };

        let mut deck: Vec<ItemId> = catalog
            .iter()
            .map(|item| item.id)
            .filter(|id| !envelope.contains(*id))
            .collect();
        shuffle_rng.shuffle(&mut deck);

        let mut hands: PlayerMap<Vec<ItemId>> = PlayerMap::with_default(player_count);
        for (i, id) in deck.into_iter().enumerate() {
            hands[PlayerId::new((i % player_count) as u8)].push(id);
        }

        debug!(
            seed,
            suspect = %envelope.suspect,
            weapon = %envelope.weapon,
            location = %envelope.location,
            "deal generated"
        );

        Ok(Self {
            seed,
            envelope,
            hands,
        })
    }

    /// Seed the deal was generated from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The hidden solution.
    #[must_use]
    pub fn envelope(&self) -> Envelope {
        self.envelope
    }

    /// Number of players dealt in.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// Cards held by `player` (empty for an unknown player).
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[ItemId] {
        self.hands.get(player).map(Vec::as_slice).unwrap_or_default()
    }

    /// Who holds `item`; `None` for envelope items.
    #[must_use]
    pub fn holder(&self, item: ItemId) -> Option<PlayerId> {
        self.hands
            .iter()
            .find(|(_, hand)| hand.contains(&item))
            .map(|(player, _)| player)
    }

    /// Record on `grid` that `item`'s holder showed it.
    ///
    /// Returns `None` for envelope items and for cells already marked
    /// `Revealed` (applying the tool again would clear them).
    pub fn reveal(&self, grid: &mut Grid, item: ItemId) -> Option<MarkChange> {
        let holder = self.holder(item)?;
        if grid.mark(item, holder) == Mark::Revealed {
            return None;
        }
        Some(grid.set_mark(item, holder, Mark::Revealed))
    }

    /// Reveal every card in `player`'s hand.
    pub fn reveal_hand(&self, grid: &mut Grid, player: PlayerId) -> Vec<MarkChange> {
        self.hand(player)
            .iter()
            .filter_map(|item| self.reveal(grid, *item))
            .collect()
    }
}
