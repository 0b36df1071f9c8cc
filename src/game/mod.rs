//! Active game state.
//!
//! A `Game` bundles the roster and the grid created together at setup,
//! plus the catalog they refer to. Starting a new game replaces all three.

mod game;

pub use game::{start_game, Game};
