//! Data transfer objects for the games adapter.

use crate::entities::games::{GameStatus, PlayerMark};

/// Column values for a fresh game row.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub status: GameStatus,
    pub current_turn: PlayerMark,
    pub board: String,
}

/// Full-state update, applied with an optimistic lock check.
///
/// A move always persists the whole aggregate (status, turn, board), so
/// there is no partial-update builder here.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: i64,
    pub expected_lock_version: i32,
    pub status: GameStatus,
    pub current_turn: PlayerMark,
    pub board: String,
}
