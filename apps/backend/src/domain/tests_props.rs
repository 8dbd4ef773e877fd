#![cfg(test)]

//! Property tests: no sequence of attempted moves can break the aggregate
//! invariants (strict alternation, monotone cells, single terminal
//! transition).

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use crate::domain::board::{CellValue, Mark};
use crate::domain::game::{GameState, GameStatus};
use crate::errors::domain::{DomainError, InvalidMoveKind};

fn coord() -> impl Strategy<Value = (u8, u8)> {
    (1u8..=3, 1u8..=3)
}

proptest! {
    /// Feed the aggregate a stream of in-range coordinates, always moving
    /// as the player whose turn it is. The only legal rejection is an
    /// occupied cell, rejections never mutate, and set cells never change.
    #[test]
    fn legal_mark_streams_preserve_invariants(moves in prop::collection::vec(coord(), 0..40)) {
        let mut game = GameState::new();

        for (row, col) in moves {
            if game.status().is_terminal() {
                break;
            }
            let mark = game.current_turn();
            let before = *game.board();

            match game.apply_move(mark, row, col) {
                Ok(()) => {
                    prop_assert_eq!(game.board().get(row, col), CellValue::from(mark));
                    if game.status() == GameStatus::InProgress {
                        prop_assert_eq!(game.current_turn(), mark.opponent());
                    }
                }
                Err(DomainError::InvalidMove(InvalidMoveKind::CellOccupied, _)) => {
                    prop_assert_eq!(game.board(), &before);
                    prop_assert_eq!(game.current_turn(), mark);
                    prop_assert_eq!(game.status(), GameStatus::InProgress);
                }
                Err(other) => {
                    return Err(TestCaseError::fail(format!("unexpected rejection: {other}")));
                }
            }

            // Cells are write-once: whatever was set before is unchanged.
            for (r, c, value) in before.cells() {
                if value != CellValue::Empty {
                    prop_assert_eq!(game.board().get(r, c), value);
                }
            }
        }
    }

    /// A terminal aggregate rejects every move with GameFinished, for both
    /// marks and every cell.
    #[test]
    fn terminal_games_reject_everything((row, col) in coord()) {
        let mut game = GameState::new();
        // Quick X win down the first column.
        for (mark, r, c) in [
            (Mark::X, 1, 1),
            (Mark::O, 1, 2),
            (Mark::X, 2, 1),
            (Mark::O, 2, 2),
            (Mark::X, 3, 1),
        ] {
            game.apply_move(mark, r, c).unwrap();
        }
        prop_assert_eq!(game.status(), GameStatus::XWon);

        for mark in [Mark::X, Mark::O] {
            match game.apply_move(mark, row, col) {
                Err(DomainError::InvalidMove(InvalidMoveKind::GameFinished, _)) => {}
                other => {
                    return Err(TestCaseError::fail(format!(
                        "expected GameFinished, got {other:?}"
                    )));
                }
            }
        }
    }

    /// Packed-string round trip holds for any reachable board.
    #[test]
    fn packed_codec_round_trips(moves in prop::collection::vec(coord(), 0..20)) {
        let mut game = GameState::new();
        for (row, col) in moves {
            if game.status().is_terminal() {
                break;
            }
            let mark = game.current_turn();
            let _ = game.apply_move(mark, row, col);
        }

        let packed = game.board().to_packed_string();
        prop_assert_eq!(packed.len(), 9);
        let restored = crate::domain::board::Board::from_packed_str(&packed).unwrap();
        prop_assert_eq!(&restored, game.board());
    }
}
