//! Game application service: create, fetch, move.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::info;

use crate::domain::board::Mark;
use crate::errors::domain::DomainError;
use crate::repos::games::{self, Game};

/// Game domain service.
///
/// Stateless; each operation runs inside the caller's transaction, so the
/// load -> validate -> mutate -> persist cycle commits or rolls back as a
/// unit. Together with the optimistic lock check in the repository this
/// serializes concurrent moves against the same game id: the second writer
/// sees a stale `lock_version` and gets a conflict instead of a lost
/// update.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Create and persist a freshly initialized game.
    pub async fn create_game(&self, txn: &DatabaseTransaction) -> Result<Game, DomainError> {
        info!("Creating new game");
        let game = games::create_game(txn).await?;
        info!(game_id = game.id, "Game created");
        Ok(game)
    }

    /// Fetch a game by id, or fail with a not-found error.
    pub async fn get_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<Game, DomainError> {
        games::require_game(conn, game_id).await
    }

    /// Apply a move and persist the mutated aggregate.
    ///
    /// `row` and `col` must already be validated to 1..=3 by the caller;
    /// the aggregate relies on that contract.
    pub async fn make_move(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        mark: Mark,
        row: u8,
        col: u8,
    ) -> Result<Game, DomainError> {
        let mut game = games::require_game(txn, game_id).await?;
        game.state.apply_move(mark, row, col)?;
        let saved = games::update_game(txn, game.id, game.lock_version, &game.state).await?;
        info!(game_id, player = %mark, row = %row, col = %col, "Move applied");
        Ok(saved)
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
