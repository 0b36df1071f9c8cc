//! Catalog of clue items.
//!
//! The `Catalog` keeps items grouped by category in sheet order and
//! provides lookup by `ItemId`.

use rustc_hash::FxHashMap;

use super::item::{Category, ClueItem, ItemId};

const SUSPECTS: [&str; 6] = [
    "Sr. Green",
    "Coronel Mostarda",
    "Sra. Peacock",
    "Prof. Plum",
    "Srta. Scarlett",
    "Sra. White",
];

const WEAPONS: [&str; 6] = [
    "Castiçal",
    "Faca",
    "Cano de Ferro",
    "Revólver",
    "Corda",
    "Chave Inglesa",
];

const LOCATIONS: [&str; 9] = [
    "Salão de Festas",
    "Salão de Jogos",
    "Sala de Música",
    "Sala de Jantar",
    "Hall",
    "Cozinha",
    "Biblioteca",
    "Sala de Estar",
    "Escritório",
];

/// Registry of clue items.
///
/// ## Example
///
/// ```
/// use detective_sheet::catalog::{Catalog, Category, ItemId};
///
/// let catalog = Catalog::standard();
/// assert_eq!(catalog.len(), 21);
///
/// let peacock = catalog.get(ItemId::suspect(3)).unwrap();
/// assert_eq!(peacock.name, "Sra. Peacock");
/// assert_eq!(catalog.items_in(Category::Location).len(), 9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    suspects: Vec<ClueItem>,
    weapons: Vec<ClueItem>,
    locations: Vec<ClueItem>,
    index: FxHashMap<ItemId, usize>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard 21-item catalog: 6 suspects, 6 weapons, 9 locations.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        let groups: [(Category, &[&str]); 3] = [
            (Category::Suspect, &SUSPECTS),
            (Category::Weapon, &WEAPONS),
            (Category::Location, &LOCATIONS),
        ];

        for (category, names) in groups {
            for (i, name) in names.iter().enumerate() {
                catalog.register(ClueItem::new(ItemId::new(category, i as u8 + 1), *name));
            }
        }

        catalog
    }

    /// Register a clue item at the end of its category.
    ///
    /// Panics if an item with the same ID already exists.
    pub fn register(&mut self, item: ClueItem) {
        if self.index.contains_key(&item.id) {
            panic!("Clue item {} already registered", item.id);
        }

        let pos = self.items_in(item.category()).len();
        self.index.insert(item.id, pos);
        self.group_mut(item.category()).push(item);
    }

    /// Get a clue item by ID.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&ClueItem> {
        let pos = *self.index.get(&id)?;
        self.items_in(id.category).get(pos)
    }

    /// Check if an item ID is registered.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Display name of an item, if registered.
    #[must_use]
    pub fn name_of(&self, id: ItemId) -> Option<&str> {
        self.get(id).map(|item| item.name.as_str())
    }

    /// Items of one category, in catalog order.
    #[must_use]
    pub fn items_in(&self, category: Category) -> &[ClueItem] {
        match category {
            Category::Suspect => &self.suspects,
            Category::Weapon => &self.weapons,
            Category::Location => &self.locations,
        }
    }

    /// All suspects, in catalog order.
    #[must_use]
    pub fn suspects(&self) -> &[ClueItem] {
        &self.suspects
    }

    /// All weapons, in catalog order.
    #[must_use]
    pub fn weapons(&self) -> &[ClueItem] {
        &self.weapons
    }

    /// All locations, in catalog order.
    #[must_use]
    pub fn locations(&self) -> &[ClueItem] {
        &self.locations
    }

    /// Get the number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate over all items: suspects, then weapons, then locations.
    pub fn iter(&self) -> impl Iterator<Item = &ClueItem> {
        self.suspects
            .iter()
            .chain(self.weapons.iter())
            .chain(self.locations.iter())
    }

    fn group_mut(&mut self, category: Category) -> &mut Vec<ClueItem> {
        match category {
            Category::Suspect => &mut self.suspects,
            Category::Weapon => &mut self.weapons,
            Category::Location => &mut self.locations,
        }
    }
}
