mod support;

use actix_web::{test, web, App};
use tictactoe_backend::infra::state::build_state;
use tictactoe_backend::routes;

// The health endpoint must not need a database.
#[actix_web::test]
async fn healthcheck_returns_ok_without_db() {
    let state = build_state().build().await.expect("state without db");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let res = test::call_service(&app, req).await;
    assert!(res.status().is_success());

    let body = test::read_body(res).await;
    assert_eq!(&body[..], b"ok");
}
