//! Clue catalog: the fixed suspects, weapons and locations.

pub mod item;
pub mod registry;

pub use item::{Category, ClueItem, ItemId};
pub use registry::Catalog;
