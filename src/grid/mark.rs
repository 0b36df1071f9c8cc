//! Marks: the belief state written in one cell of the sheet.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SheetError;

/// What the sheet owner believes about one (item, player) pair.
///
/// `Yes` and `Revealed` both mean the player certainly holds the item; they
/// differ only in how that was learned (deduced vs. shown a card).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// No information.
    #[default]
    Empty,
    /// Player does not hold the item.
    No,
    /// Player holds the item.
    Yes,
    /// Weak suspicion.
    Maybe,
    /// Strong suspicion.
    Strong,
    /// Player showed the item.
    Revealed,
}

impl Mark {
    /// Tool palette, in toolbar order. `Empty` is the eraser.
    pub const TOOLS: [Mark; 6] = [
        Mark::Empty,
        Mark::No,
        Mark::Yes,
        Mark::Maybe,
        Mark::Strong,
        Mark::Revealed,
    ];

    /// True for marks that pin the item to a player.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Mark::Yes | Mark::Revealed)
    }

    /// Mark that results from applying `tool` to a cell holding `self`.
    ///
    /// The eraser always clears; any other tool clears a cell that already
    /// holds the same mark and otherwise writes itself.
    ///
    /// ```
    /// use detective_sheet::Mark;
    ///
    /// assert_eq!(Mark::Empty.toggled_by(Mark::No), Mark::No);
    /// assert_eq!(Mark::No.toggled_by(Mark::No), Mark::Empty);
    /// assert_eq!(Mark::Maybe.toggled_by(Mark::Yes), Mark::Yes);
    /// assert_eq!(Mark::Revealed.toggled_by(Mark::Empty), Mark::Empty);
    /// ```
    #[must_use]
    pub fn toggled_by(self, tool: Mark) -> Mark {
        if tool == Mark::Empty || self == tool {
            Mark::Empty
        } else {
            tool
        }
    }

    /// Toolbar label.
    #[must_use]
    pub const fn tool_label(self) -> &'static str {
        match self {
            Mark::Empty => "Apagar",
            Mark::No => "Não é",
            Mark::Yes => "Confirm.",
            Mark::Maybe => "Talvez",
            Mark::Strong => "Forte",
            Mark::Revealed => "Visto",
        }
    }

    /// Lowercase name, as rendered and parsed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mark::Empty => "empty",
            Mark::No => "no",
            Mark::Yes => "yes",
            Mark::Maybe => "maybe",
            Mark::Strong => "strong",
            Mark::Revealed => "revealed",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mark {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Mark::TOOLS
            .into_iter()
            .find(|mark| mark.as_str() == lower)
            .ok_or_else(|| SheetError::UnknownMark(s.to_string()))
    }
}
