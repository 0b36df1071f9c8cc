//! # detective-sheet
//!
//! Note-taking engine for a deduction board game: a grid of marks per clue
//! item and player, and a candidate panel showing which suspects, weapons
//! and locations can still be in the envelope.
//!
//! ## Design Principles
//!
//! 1. **One mutation**: the grid changes only through `set_mark`, which
//!    toggles a cell and cascades a positive mark to `No` for every other
//!    player in one atomic row swap.
//!
//! 2. **Derived, never cached**: candidates are a pure function of the grid,
//!    recomputed on every query.
//!
//! 3. **Missing means Empty**: lookups of absent cells read `Mark::Empty`
//!    instead of failing.
//!
//! ## Modules
//!
//! - `core`: Player IDs, per-player storage, configuration, RNG
//! - `catalog`: The fixed suspects, weapons and locations
//! - `grid`: Marks and the grid store
//! - `deduction`: Candidate elimination and the deduction panel
//! - `game`: Roster + grid for one game
//! - `session`: Screen flow and selected tool
//! - `sim`: Seeded deals for checking deductions against a known answer

pub mod catalog;
pub mod core;
pub mod deduction;
pub mod error;
pub mod game;
pub mod grid;
pub mod session;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{Player, PlayerId, PlayerMap, SheetConfig, MAX_PLAYERS, MIN_PLAYERS};

pub use crate::catalog::{Catalog, Category, ClueItem, ItemId};

pub use crate::grid::{Grid, Mark, MarkChange};

pub use crate::deduction::{
    candidates, is_solution_item, CategoryCandidates, DeductionSummary, Envelope,
};

pub use crate::error::SheetError;
pub use crate::game::{start_game, Game};
pub use crate::session::{Screen, Session};
pub use crate::sim::Deal;
