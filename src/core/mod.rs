//! Core types: players, configuration, RNG.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{validate_player_count, SheetConfig, MAX_PLAYERS, MIN_PLAYERS, PLAYER_COLORS};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
