//! Domain layer: pure game rules, no I/O.

pub mod board;
pub mod game;

#[cfg(test)]
mod tests_props;

// Re-exports for ergonomics
pub use board::{Board, CellValue, Mark};
pub use game::{GameState, GameStatus};
