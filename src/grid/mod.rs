//! Grid store: marks per (item, player) and the cascade rule.

pub mod mark;
pub mod store;

pub use mark::Mark;
pub use store::{Grid, MarkChange, Row};
