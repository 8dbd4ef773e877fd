//! Game HTTP routes: create, status, move.

use actix_web::{web, HttpRequest};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::domain::board::{CellValue, Mark};
use crate::domain::game::GameStatus;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::games::Game;
use crate::services::games::GameService;
use crate::state::app_state::AppState;

/// Public view of a game, returned by every endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub status: GameStatus,
    pub current_turn: Mark,
    pub board: Vec<CellDto>,
}

#[derive(Debug, Serialize)]
pub struct CellDto {
    pub row: u8,
    pub column: u8,
    pub value: CellValue,
}

impl GameResponse {
    pub fn from_domain(game: &Game) -> Self {
        Self {
            id: game.id,
            created_at: game.created_at,
            status: game.state.status(),
            current_turn: game.state.current_turn(),
            board: game
                .state
                .board()
                .cells()
                .map(|(row, column, value)| CellDto { row, column, value })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
    match_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub match_id: i64,
    pub player_id: String,
    pub square: Square,
}

#[derive(Debug, Deserialize)]
pub struct Square {
    pub x: i64,
    pub y: i64,
}

fn parse_game_id(raw: &str) -> Result<i64, AppError> {
    let id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidGameId, format!("Invalid game id: {raw}"))
    })?;
    validate_game_id(id)
}

fn validate_game_id(id: i64) -> Result<i64, AppError> {
    if id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidGameId,
            format!("Game id must be positive, got: {id}"),
        ));
    }
    Ok(id)
}

/// Bounds-check a 1-based board coordinate. The aggregate assumes its
/// inputs are already in range, so this is the last line of defense.
fn validate_coord(name: &str, value: i64) -> Result<u8, AppError> {
    if !(1..=3).contains(&value) {
        return Err(AppError::invalid(
            ErrorCode::InvalidCoordinate,
            format!("{name} coordinate must be between 1 and 3, got: {value}"),
        ));
    }
    Ok(value as u8)
}

fn parse_mark(token: &str) -> Result<Mark, AppError> {
    Mark::from_token(token).ok_or_else(|| {
        AppError::invalid(
            ErrorCode::InvalidMark,
            format!("playerId must be \"X\" or \"O\", got: {token:?}"),
        )
    })
}

/// POST /api/games/create
///
/// Creates a new game: empty board, in progress, X to move.
async fn create_game(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameResponse>, AppError> {
    let game = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = GameService::new();
            Ok(service.create_game(txn).await?)
        })
    })
    .await?;

    Ok(web::Json(GameResponse::from_domain(&game)))
}

/// GET /api/games/status?matchId={id}
async fn game_status(
    http_req: HttpRequest,
    query: web::Query<StatusQuery>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameResponse>, AppError> {
    let id = parse_game_id(&query.match_id)?;

    let game = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = GameService::new();
            Ok(service.get_game(txn, id).await?)
        })
    })
    .await?;

    Ok(web::Json(GameResponse::from_domain(&game)))
}

/// POST /api/games/move
///
/// Applies one move. Rule violations (finished game, wrong turn, occupied
/// cell) come back as 400s with their specific codes; a concurrent move on
/// the same game surfaces as a 409.
async fn make_move(
    http_req: HttpRequest,
    body: ValidatedJson<MoveRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameResponse>, AppError> {
    let req = body.into_inner();
    let id = validate_game_id(req.match_id)?;
    let mark = parse_mark(&req.player_id)?;
    let row = validate_coord("x", req.square.x)?;
    let col = validate_coord("y", req.square.y)?;

    let game = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = GameService::new();
            Ok(service.make_move(txn, id, mark, row, col).await?)
        })
    })
    .await?;

    Ok(web::Json(GameResponse::from_domain(&game)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/create").route(web::post().to(create_game)));
    cfg.service(web::resource("/status").route(web::get().to(game_status)));
    cfg.service(web::resource("/move").route(web::post().to(make_move)));
}
