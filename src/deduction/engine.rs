//! Candidate elimination.
//!
//! An item is a *candidate* for the envelope while no player is positively
//! marked for it. Everything here is a pure function of the grid and is
//! recomputed on every call, so results are never stale after a mutation.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::catalog::{Catalog, Category, ClueItem, ItemId};
use crate::grid::Grid;

/// True while no player is positively marked for `item`.
#[must_use]
pub fn is_candidate(grid: &Grid, item: ItemId) -> bool {
    !grid.is_claimed(item)
}

/// Candidate items among `items`, in the order given.
pub fn candidate_items<'a>(
    grid: &'a Grid,
    items: &'a [ClueItem],
) -> impl Iterator<Item = &'a ClueItem> + 'a {
    items.iter().filter(move |item| is_candidate(grid, item.id))
}

/// Names of the candidate items among `items`, in the order given.
///
/// ```
/// use detective_sheet::catalog::{Catalog, ItemId};
/// use detective_sheet::core::PlayerId;
/// use detective_sheet::deduction::candidates;
/// use detective_sheet::{Grid, Mark};
///
/// let catalog = Catalog::standard();
/// let mut grid = Grid::for_catalog(&catalog, 3);
/// assert_eq!(candidates(&grid, catalog.suspects()).len(), 6);
///
/// grid.set_mark(ItemId::suspect(1), PlayerId::new(0), Mark::Yes);
/// let left = candidates(&grid, catalog.suspects());
/// assert_eq!(left.len(), 5);
/// assert!(!left.contains(&"Sr. Green"));
/// ```
#[must_use]
pub fn candidates<'a>(grid: &Grid, items: &'a [ClueItem]) -> Vec<&'a str> {
    items
        .iter()
        .filter(|item| is_candidate(grid, item.id))
        .map(|item| item.name.as_str())
        .collect()
}

/// True iff `item` is the one and only candidate among `items`.
///
/// Agrees with [`candidates`]: true exactly when `candidates(grid, items)`
/// is a single name and that name belongs to `item`.
#[must_use]
pub fn is_solution_item(grid: &Grid, item: ItemId, items: &[ClueItem]) -> bool {
    if !is_candidate(grid, item) {
        return false;
    }

    let mut remaining = candidate_items(grid, items);
    match (remaining.next(), remaining.next()) {
        (Some(only), None) => only.id == item,
        _ => false,
    }
}

/// Candidates left in one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCandidates {
    pub category: Category,
    pub ids: Vec<ItemId>,
    pub names: Vec<String>,
}

impl CategoryCandidates {
    /// Compute the candidates of `category`.
    #[must_use]
    pub fn compute(grid: &Grid, catalog: &Catalog, category: Category) -> Self {
        let (ids, names) = candidate_items(grid, catalog.items_in(category))
            .map(|item| (item.id, item.name.clone()))
            .unzip();

        Self {
            category,
            ids,
            names,
        }
    }

    /// Number of candidates left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if every item of the category is claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The single remaining candidate's id, if exactly one is left.
    #[must_use]
    pub fn resolved_id(&self) -> Option<ItemId> {
        match self.ids.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// The single remaining candidate's name, if exactly one is left.
    #[must_use]
    pub fn resolved(&self) -> Option<&str> {
        match self.names.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }

    /// Deduction panel text: the name once resolved, the count otherwise.
    #[must_use]
    pub fn panel_text(&self) -> String {
        match self.resolved() {
            Some(name) => name.to_string(),
            None => format!("{} Opções", self.len()),
        }
    }
}

/// The envelope contents: one item per category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Envelope {
    pub suspect: ItemId,
    pub weapon: ItemId,
    pub location: ItemId,
}

impl Envelope {
    /// The envelope item of `category`.
    #[must_use]
    pub const fn get(&self, category: Category) -> ItemId {
        match category {
            Category::Suspect => self.suspect,
            Category::Weapon => self.weapon,
            Category::Location => self.location,
        }
    }

    /// True if `item` is in the envelope.
    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.get(item.category) == item
    }
}

/// Candidates for every category: the deduction panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSummary {
    pub suspects: CategoryCandidates,
    pub weapons: CategoryCandidates,
    pub locations: CategoryCandidates,
}

impl DeductionSummary {
    /// Compute the candidates of every category from the current grid.
    #[must_use]
    pub fn compute(grid: &Grid, catalog: &Catalog) -> Self {
        let summary = Self {
            suspects: CategoryCandidates::compute(grid, catalog, Category::Suspect),
            weapons: CategoryCandidates::compute(grid, catalog, Category::Weapon),
            locations: CategoryCandidates::compute(grid, catalog, Category::Location),
        };

        trace!(
            suspects = summary.suspects.len(),
            weapons = summary.weapons.len(),
            locations = summary.locations.len(),
            "candidates recomputed"
        );

        summary
    }

    /// Candidates of one category.
    #[must_use]
    pub fn get(&self, category: Category) -> &CategoryCandidates {
        match category {
            Category::Suspect => &self.suspects,
            Category::Weapon => &self.weapons,
            Category::Location => &self.locations,
        }
    }

    /// The envelope, once every category is down to one candidate.
    #[must_use]
    pub fn solution(&self) -> Option<Envelope> {
        Some(Envelope {
            suspect: self.suspects.resolved_id()?,
            weapon: self.weapons.resolved_id()?,
            location: self.locations.resolved_id()?,
        })
    }
}
