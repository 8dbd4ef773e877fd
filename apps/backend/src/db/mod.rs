pub mod txn;

use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Centralized helper to access the database connection from AppState.
///
/// Returns a borrowed reference to the DatabaseConnection if available,
/// or an `AppError::db_unavailable` if the database is not configured.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state
        .db()
        .ok_or_else(|| AppError::db_unavailable("no database configured"))
}

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;

    use super::*;

    #[test]
    fn test_require_db_without_db() {
        let app_state = AppState::without_db();
        let result = require_db(&app_state);

        match result {
            Err(err @ AppError::DbUnavailable { .. }) => {
                let response = err.error_response();
                assert_eq!(
                    response.status(),
                    actix_web::http::StatusCode::SERVICE_UNAVAILABLE
                );
            }
            other => panic!("expected DbUnavailable, got {other:?}"),
        }
    }
}
