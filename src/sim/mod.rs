//! Simulated deals for exercising the sheet against a known answer.
//!
//! A `Deal` hides one suspect, weapon and location in the envelope and
//! spreads the other 18 cards across the players. Feeding what players
//! reveal into a grid must never eliminate an envelope item.

mod deal;

pub use deal::Deal;
