//! Game repository: domain-facing model over the SeaORM adapter.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
use crate::adapters::games_sea::{GameCreate, GameUpdate};
use crate::domain::board::{Board, Mark};
use crate::domain::game::{GameState, GameStatus};
use crate::entities::games;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Game domain model
///
/// A game as the domain layer sees it: identifier and timestamps (owned
/// by this access layer, never generated by the aggregate), the pure
/// aggregate state, and the optimistic lock counter. Converted fallibly
/// from the database model when loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub state: GameState,
    pub lock_version: i32,
}

impl TryFrom<games::Model> for Game {
    type Error = DomainError;

    fn try_from(model: games::Model) -> Result<Self, DomainError> {
        let board = Board::from_packed_str(&model.board)?;
        let state = GameState::from_parts(
            model.status.into(),
            model.current_turn.into(),
            board,
        );
        Ok(Game {
            id: model.id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            state,
            lock_version: model.lock_version,
        })
    }
}

// Entity <-> domain enum conversions. Both sides are closed vocabularies,
// so these are total.

impl From<games::GameStatus> for GameStatus {
    fn from(status: games::GameStatus) -> Self {
        match status {
            games::GameStatus::InProgress => GameStatus::InProgress,
            games::GameStatus::XWon => GameStatus::XWon,
            games::GameStatus::OWon => GameStatus::OWon,
            games::GameStatus::Draw => GameStatus::Draw,
        }
    }
}

impl From<GameStatus> for games::GameStatus {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => games::GameStatus::InProgress,
            GameStatus::XWon => games::GameStatus::XWon,
            GameStatus::OWon => games::GameStatus::OWon,
            GameStatus::Draw => games::GameStatus::Draw,
        }
    }
}

impl From<games::PlayerMark> for Mark {
    fn from(mark: games::PlayerMark) -> Self {
        match mark {
            games::PlayerMark::X => Mark::X,
            games::PlayerMark::O => Mark::O,
        }
    }
}

impl From<Mark> for games::PlayerMark {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => games::PlayerMark::X,
            Mark::O => games::PlayerMark::O,
        }
    }
}

/// Insert a freshly initialized game (empty board, in progress, X to move).
pub async fn create_game(txn: &DatabaseTransaction) -> Result<Game, DomainError> {
    let state = GameState::new();
    let dto = GameCreate {
        status: state.status().into(),
        current_turn: state.current_turn().into(),
        board: state.board().to_packed_string(),
    };
    let model = games_adapter::create_game(txn, dto)
        .await
        .map_err(map_db_err)?;
    Game::try_from(model)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let model = games_adapter::find_by_id(conn, game_id)
        .await
        .map_err(map_db_err)?;
    model.map(Game::try_from).transpose()
}

/// Find game by ID or return error if not found.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let model = games_adapter::require_game(conn, game_id)
        .await
        .map_err(map_db_err)?;
    Game::try_from(model)
}

/// Persist the whole aggregate with an optimistic lock check.
///
/// `expected_lock_version` is the version the caller loaded; a mismatch
/// means another move got there first and surfaces as an
/// `OptimisticLock` conflict.
pub async fn update_game(
    txn: &DatabaseTransaction,
    id: i64,
    expected_lock_version: i32,
    state: &GameState,
) -> Result<Game, DomainError> {
    let dto = GameUpdate {
        id,
        expected_lock_version,
        status: state.status().into(),
        current_turn: state.current_turn().into(),
        board: state.board().to_packed_string(),
    };
    let model = games_adapter::update_game(txn, dto)
        .await
        .map_err(map_db_err)?;
    Game::try_from(model)
}
