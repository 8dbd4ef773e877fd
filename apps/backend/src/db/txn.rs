use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use sea_orm::{DatabaseTransaction, TransactionTrait};

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// A shared transaction wrapper that can be injected into request extensions
///
/// Tests inject one to keep a whole request/assertion cycle inside a single
/// rolled-back transaction.
#[derive(Clone)]
pub struct SharedTxn(pub Arc<DatabaseTransaction>);

impl SharedTxn {
    /// Get a reference to the underlying database transaction
    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.0
    }

    /// Extract a SharedTxn from request extensions, if one was injected.
    pub fn from_req(req: &HttpRequest) -> Option<SharedTxn> {
        req.extensions().get::<SharedTxn>().cloned()
    }
}

/// Execute a function within a database transaction
///
/// 1) If a SharedTxn is in request extensions -> use it (no commit/rollback here)
/// 2) Otherwise -> begin a transaction, run the closure, commit on Ok /
///    rollback on Err
pub async fn with_txn<R, F>(
    req: Option<&HttpRequest>,
    state: &AppState,
    f: F,
) -> Result<R, AppError>
where
    F: for<'t> FnOnce(
        &'t DatabaseTransaction,
    ) -> Pin<Box<dyn Future<Output = Result<R, AppError>> + 't>>,
{
    // Extract any SharedTxn out of request extensions *before* awaiting to
    // avoid holding a RefCell borrow.
    let shared_txn = req.and_then(SharedTxn::from_req);
    if let Some(shared) = shared_txn {
        return f(shared.transaction()).await;
    }

    let db = require_db(state)?;
    let txn = db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
