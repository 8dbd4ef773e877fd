//! The game aggregate: turn ownership, move legality, terminal detection.

use serde::{Deserialize, Serialize};

use crate::domain::board::{Board, CellValue, Mark};
use crate::errors::domain::{DomainError, InvalidMoveKind};

/// Overall game progression.
///
/// Serialized externally as `IN_PROGRESS` / `X_WON` / `O_WON` / `DRAW`.
/// The three terminal variants are absorbing: no operation ever leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// The 8 winning lines in fixed scan order: rows 1..3, columns 1..3,
/// then the two diagonals. At most one line can newly complete per move,
/// so the order does not affect the outcome, but keeping it fixed makes
/// the scan deterministic for tests.
const LINES: [[(u8, u8); 3]; 8] = [
    [(1, 1), (1, 2), (1, 3)],
    [(2, 1), (2, 2), (2, 3)],
    [(3, 1), (3, 2), (3, 3)],
    [(1, 1), (2, 1), (3, 1)],
    [(1, 2), (2, 2), (3, 2)],
    [(1, 3), (2, 3), (3, 3)],
    [(1, 1), (2, 2), (3, 3)],
    [(1, 3), (2, 2), (3, 1)],
];

/// Pure aggregate state: board, whose turn it is, and the status.
///
/// Identifier and timestamps live on the persistence model
/// ([`crate::repos::games::Game`]); the aggregate never generates them.
/// All mutation goes through [`apply_move`](Self::apply_move), which keeps
/// the invariants: strict turn alternation while in progress, cells never
/// overwritten, exactly one transition into a terminal status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    status: GameStatus,
    current_turn: Mark,
    board: Board,
}

impl GameState {
    /// A fresh game: empty board, in progress, `X` to move.
    pub fn new() -> Self {
        Self {
            status: GameStatus::InProgress,
            current_turn: Mark::X,
            board: Board::new(),
        }
    }

    /// Reassemble an aggregate from persisted parts. The load path is the
    /// only caller; it never re-initializes an already-populated board.
    pub fn from_parts(status: GameStatus, current_turn: Mark, board: Board) -> Self {
        Self {
            status,
            current_turn,
            board,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whose turn it is. Only meaningful while the game is in progress;
    /// a terminal move leaves the value untouched.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Apply a move for `mark` at 1-based (row, col).
    ///
    /// Preconditions are checked in order, first violation wins, and no
    /// cell is written unless all pass:
    /// 1. the game is still in progress,
    /// 2. `mark` matches the current turn,
    /// 3. the target cell is empty.
    ///
    /// On success the cell is set and terminal detection runs: a winner
    /// freezes the status at `XWon`/`OWon` (turn left unchanged), a full
    /// board with no winner becomes `Draw`, otherwise the turn flips.
    pub fn apply_move(&mut self, mark: Mark, row: u8, col: u8) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::invalid_move(
                InvalidMoveKind::GameFinished,
                "Game is already finished",
            ));
        }
        if mark != self.current_turn {
            return Err(DomainError::invalid_move(
                InvalidMoveKind::OutOfTurn,
                format!(
                    "It's not player {mark}'s turn. Current turn: {}",
                    self.current_turn
                ),
            ));
        }
        if self.board.get(row, col) != CellValue::Empty {
            return Err(DomainError::invalid_move(
                InvalidMoveKind::CellOccupied,
                format!("Cell at position ({row},{col}) is already occupied"),
            ));
        }

        self.board.set(row, col, mark);

        if let Some(winner) = self.winner() {
            self.status = match winner {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
            };
            return Ok(());
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            return Ok(());
        }

        self.current_turn = mark.opponent();
        Ok(())
    }

    /// Scan the 8 lines in fixed order; a line wins for a mark iff all
    /// three of its cells hold that mark. Empty lines never count.
    fn winner(&self) -> Option<Mark> {
        for line in LINES {
            let [a, b, c] = line;
            let first = self.board.get(a.0, a.1);
            let Some(mark) = first.mark() else {
                continue;
            };
            if self.board.get(b.0, b.1) == first && self.board.get(c.0, c.1) == first {
                return Some(mark);
            }
        }
        None
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
