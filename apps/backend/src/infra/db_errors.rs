//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; the repos layer converts it into
//! `crate::errors::domain::DomainError` here, and higher layers then map
//! `DomainError` to `AppError` via `From`.

use tracing::warn;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

/// Translate a `DbErr` into a `DomainError`.
///
/// The only entity this service persists is a game, so a record-level
/// not-found is always a missing game.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(msg) => {
            warn!(trace_id = %trace_id, "game not found");
            DomainError::not_found(NotFoundKind::Game, msg.clone())
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("OPTIMISTIC_LOCK:") => {
            #[derive(serde::Deserialize)]
            struct LockInfo {
                expected: i32,
                actual: i32,
            }

            if let Some(json_str) = msg.strip_prefix("OPTIMISTIC_LOCK:") {
                if let Ok(info) = serde_json::from_str::<LockInfo>(json_str) {
                    warn!(
                        trace_id = %trace_id,
                        expected = info.expected,
                        actual = info.actual,
                        "optimistic lock conflict detected"
                    );
                    return DomainError::conflict(
                        ConflictKind::OptimisticLock,
                        format!(
                            "Game was modified concurrently (expected version {}, actual version {}). Please refresh and retry.",
                            info.expected, info.actual
                        ),
                    );
                }
            }

            // Unparseable payload; keep the conflict classification.
            DomainError::conflict(
                ConflictKind::OptimisticLock,
                "Game was modified concurrently. Please refresh and retry.",
            )
        }
        sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
            DomainError::infra(InfraErrorKind::DbUnavailable, e.to_string())
        }
        _ => DomainError::infra(InfraErrorKind::Other("Db".into()), e.to_string()),
    }
}
