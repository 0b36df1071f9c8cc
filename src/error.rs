//! Error type shared by the sheet's fallible operations.
//!
//! Grid lookups never fail (a missing cell reads as `Mark::Empty`); errors
//! only come from caller input: out-of-range setup values, unparseable ids,
//! malformed saved grids and screen transitions the session does not allow.

use thiserror::Error;

use crate::catalog::{Category, ItemId};
use crate::session::Screen;

/// Errors returned by sheet operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    #[error("player count {count} is out of range ({min}-{max})")]
    InvalidPlayerCount {
        count: usize,
        min: usize,
        max: usize,
    },
    #[error("cannot {action} from the {screen} screen")]
    InvalidTransition { screen: Screen, action: &'static str },
    #[error("unknown clue item id '{0}'")]
    UnknownItem(String),
    #[error("unknown player id '{0}'")]
    UnknownPlayer(String),
    #[error("unknown mark '{0}'")]
    UnknownMark(String),
    #[error("catalog has no {0} items")]
    EmptyCategory(Category),
    #[error("row {item} has {width} cells but the grid has {player_count} players")]
    RowWidth {
        item: ItemId,
        width: usize,
        player_count: usize,
    },
}
