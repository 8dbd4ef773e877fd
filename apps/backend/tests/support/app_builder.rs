use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App};
use tictactoe_backend::config::db::DbKind;
use tictactoe_backend::infra::state::build_state;
use tictactoe_backend::middleware::request_trace::RequestTrace;
use tictactoe_backend::routes;
use tictactoe_backend::state::app_state::AppState;

/// Build an AppState backed by a fresh in-memory SQLite database with the
/// schema migrated. Each call gets its own database.
pub async fn test_state() -> AppState {
    build_state()
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
        .expect("build test state with DB")
}

/// Spin up the full route tree (with request tracing) as an in-process
/// service. CORS and the structured logger are left out; they only wrap
/// behavior under test with noise.
pub async fn init_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
