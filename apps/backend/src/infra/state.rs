use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { db_kind: None }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(kind) = self.db_kind {
            // single entrypoint: build + migrate
            let conn = bootstrap_db(kind).await?;
            Ok(AppState::new(conn))
        } else {
            Ok(AppState::without_db())
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_succeeds_without_db_option() {
        let state = build_state().build().await.unwrap();
        assert!(state.db().is_none());
    }

    #[tokio::test]
    async fn test_build_with_sqlite_memory_connects_and_migrates() {
        let state = build_state()
            .with_db(DbKind::SqliteMemory)
            .build()
            .await
            .unwrap();
        assert!(state.db().is_some());
    }
}
