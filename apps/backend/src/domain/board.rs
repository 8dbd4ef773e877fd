//! The 3x3 board and the values its cells can hold.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Player token. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }

    /// Parse the external token ("X" or "O"). Anything else, including
    /// "EMPTY", is not a playable mark.
    pub fn from_token(s: &str) -> Option<Mark> {
        match s {
            "X" => Some(Mark::X),
            "O" => Some(Mark::O),
            _ => None,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Contents of a single board cell.
///
/// Serialized externally as `"EMPTY"` / `"X"` / `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellValue {
    Empty,
    X,
    O,
}

impl CellValue {
    /// The mark occupying this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            CellValue::Empty => None,
            CellValue::X => Some(Mark::X),
            CellValue::O => Some(Mark::O),
        }
    }
}

impl From<Mark> for CellValue {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => CellValue::X,
            Mark::O => CellValue::O,
        }
    }
}

/// Board side length; rows and columns are numbered 1..=SIDE.
pub const SIDE: u8 = 3;

/// Fixed 3x3 grid, row-major. A cell, once set, never reverts to `Empty`
/// (enforced by `GameState`, which owns the only mutating path).
///
/// The fixed-size array makes the "exactly 9 cells" invariant structural:
/// there is no way to end up with a missing or duplicate cell, and
/// re-initialization of an already-populated board cannot happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board([CellValue; 9]);

impl Board {
    /// A fresh board with all 9 cells empty.
    pub fn new() -> Self {
        Self([CellValue::Empty; 9])
    }

    /// Row-major index for 1-based coordinates.
    ///
    /// Callers must pass coordinates in 1..=3; anything else is a
    /// programming error upstream (the HTTP layer bounds-checks first).
    fn index(row: u8, col: u8) -> usize {
        debug_assert!((1..=SIDE).contains(&row), "row out of range: {row}");
        debug_assert!((1..=SIDE).contains(&col), "col out of range: {col}");
        (row as usize - 1) * SIDE as usize + (col as usize - 1)
    }

    pub fn get(&self, row: u8, col: u8) -> CellValue {
        self.0[Self::index(row, col)]
    }

    pub(crate) fn set(&mut self, row: u8, col: u8, mark: Mark) {
        self.0[Self::index(row, col)] = mark.into();
    }

    /// True when no cell is `Empty`.
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|&c| c != CellValue::Empty)
    }

    /// All 9 cells in (row, col) order.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8, CellValue)> + '_ {
        self.0.iter().enumerate().map(|(i, &value)| {
            let row = (i as u8) / SIDE + 1;
            let col = (i as u8) % SIDE + 1;
            (row, col, value)
        })
    }

    /// Persistence codec: one char per cell, row-major ('X', 'O', '.').
    pub fn to_packed_string(&self) -> String {
        self.0
            .iter()
            .map(|c| match c {
                CellValue::Empty => '.',
                CellValue::X => 'X',
                CellValue::O => 'O',
            })
            .collect()
    }

    /// Inverse of [`to_packed_string`](Self::to_packed_string).
    ///
    /// A stored board of the wrong length or with an unknown character is
    /// data corruption, surfaced as an infra error rather than a
    /// user-facing one.
    pub fn from_packed_str(s: &str) -> Result<Board, DomainError> {
        let mut cells = [CellValue::Empty; 9];
        let mut count = 0usize;
        for (i, ch) in s.chars().enumerate() {
            if i >= 9 {
                break;
            }
            cells[i] = match ch {
                '.' => CellValue::Empty,
                'X' => CellValue::X,
                'O' => CellValue::O,
                other => {
                    return Err(DomainError::infra(
                        InfraErrorKind::DataCorruption,
                        format!("unexpected board cell character: {other:?}"),
                    ))
                }
            };
            count += 1;
        }
        if count != 9 || s.chars().count() != 9 {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("stored board must be exactly 9 cells, got {}", s.len()),
            ));
        }
        Ok(Board(cells))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
