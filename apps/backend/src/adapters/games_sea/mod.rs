//! SeaORM adapter for the games table - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, GameUpdate};

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        created_at: Set(now),
        updated_at: Set(now),
        status: Set(dto.status),
        current_turn: Set(dto.current_turn),
        board: Set(dto.board),
        lock_version: Set(1),
    };
    game_active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Id.eq(game_id))
        .one(conn)
        .await
}

/// Find game by ID or return RecordNotFound error.
///
/// Converts `None` into a `DbErr::RecordNotFound`, eliminating the
/// repetitive `ok_or_else` pattern when a game must exist.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("Game with id {game_id} not found")))
}

/// Apply an optimistic update with lock version check, then refetch.
///
/// - Writes status, current_turn, board and updated_at in one statement
/// - Increments lock_version and filters by (id, expected_lock_version)
/// - Checks rows_affected to distinguish NotFound vs OptimisticLock
/// - Refetches and returns the updated model
pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let result = games::Entity::update_many()
        .col_expr(games::Column::Status, Expr::val(dto.status).into())
        .col_expr(games::Column::CurrentTurn, Expr::val(dto.current_turn).into())
        .col_expr(games::Column::Board, Expr::val(dto.board).into())
        .col_expr(games::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .filter(games::Column::Id.eq(dto.id))
        .filter(games::Column::LockVersion.eq(dto.expected_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        // Either the game doesn't exist or the lock version doesn't match;
        // refetch to tell the two apart.
        let game = games::Entity::find_by_id(dto.id).one(conn).await?;
        return match game {
            Some(game) => {
                let payload = format!(
                    "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                    dto.expected_lock_version, game.lock_version
                );
                Err(sea_orm::DbErr::Custom(payload))
            }
            None => Err(sea_orm::DbErr::RecordNotFound(format!(
                "Game with id {} not found",
                dto.id
            ))),
        };
    }

    games::Entity::find_by_id(dto.id)
        .one(conn)
        .await?
        .ok_or_else(|| {
            sea_orm::DbErr::RecordNotFound(format!("Game with id {} not found", dto.id))
        })
}
