//! Clue items - the static rows of the sheet.
//!
//! Every suspect, weapon and location is a `ClueItem`. Items never change
//! during a game; per-player knowledge about them lives in the grid.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::SheetError;

/// The three kinds of clue. The envelope holds exactly one of each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Suspect,
    Weapon,
    Location,
}

impl Category {
    /// All categories in sheet order.
    pub const ALL: [Category; 3] = [Category::Suspect, Category::Weapon, Category::Location];

    /// Single-letter prefix used in item ids.
    #[must_use]
    pub const fn prefix(self) -> char {
        match self {
            Category::Suspect => 's',
            Category::Weapon => 'w',
            Category::Location => 'l',
        }
    }

    /// Section heading on the sheet.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Category::Suspect => "Quem?",
            Category::Weapon => "O Quê?",
            Category::Location => "Onde?",
        }
    }

    /// Label on the deduction panel.
    #[must_use]
    pub const fn panel_label(self) -> &'static str {
        match self {
            Category::Suspect => "Culpado",
            Category::Weapon => "Arma",
            Category::Location => "Local",
        }
    }

    fn from_prefix(c: char) -> Option<Self> {
        Category::ALL.into_iter().find(|cat| cat.prefix() == c)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Suspect => "Suspect",
            Category::Weapon => "Weapon",
            Category::Location => "Location",
        };
        f.write_str(name)
    }
}

/// Identifier of a clue item: its category plus a 1-based number.
///
/// Renders as `s1`, `w4`, `l9` and parses from the same form. Serializes as
/// that string so it can key JSON maps.
///
/// ```
/// use detective_sheet::catalog::{Category, ItemId};
///
/// let id: ItemId = "s3".parse().unwrap();
/// assert_eq!(id, ItemId::new(Category::Suspect, 3));
/// assert_eq!(id.to_string(), "s3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId {
    pub category: Category,
    pub number: u8,
}

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(category: Category, number: u8) -> Self {
        Self { category, number }
    }

    /// Suspect `number`.
    #[must_use]
    pub const fn suspect(number: u8) -> Self {
        Self::new(Category::Suspect, number)
    }

    /// Weapon `number`.
    #[must_use]
    pub const fn weapon(number: u8) -> Self {
        Self::new(Category::Weapon, number)
    }

    /// Location `number`.
    #[must_use]
    pub const fn location(number: u8) -> Self {
        Self::new(Category::Location, number)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.category.prefix(), self.number)
    }
}

impl FromStr for ItemId {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let category = chars.next().and_then(Category::from_prefix);
        let number = chars.as_str().parse::<u8>().ok();

        match (category, number) {
            (Some(category), Some(number)) => Ok(Self::new(category, number)),
            _ => Err(SheetError::UnknownItem(s.to_string())),
        }
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Static clue item definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueItem {
    /// Unique identifier within the catalog.
    pub id: ItemId,

    /// Display name.
    pub name: String,
}

impl ClueItem {
    /// Create a new clue item.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The item's category (carried by its id).
    #[must_use]
    pub const fn category(&self) -> Category {
        self.id.category
    }
}
