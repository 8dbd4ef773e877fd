//! Every error path must produce the RFC-7807 problem shape with a trace id.

mod support;

use actix_web::test;
use serde_json::{json, Value};

use crate::support::{assert_problem_details, init_app, test_state};

#[actix_web::test]
async fn not_found_conforms_to_problem_details() {
    let app = init_app(test_state().await).await;

    let req = test::TestRequest::get()
        .uri("/api/games/status?matchId=999999")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 404);
    assert_eq!(
        res.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/problem+json")
    );
    assert!(res.headers().contains_key("x-trace-id"));

    let body: Value = test::read_body_json(res).await;
    assert_problem_details(&body, 404, "GAME_NOT_FOUND");
}

#[actix_web::test]
async fn rule_violation_conforms_to_problem_details() {
    let app = init_app(test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/api/games/create")
        .to_request();
    let res = test::call_service(&app, req).await;
    let created: Value = test::read_body_json(res).await;
    let id = created["id"].as_i64().unwrap();

    // O cannot open the game.
    let req = test::TestRequest::post()
        .uri("/api/games/move")
        .set_json(json!({
            "matchId": id,
            "playerId": "O",
            "square": { "x": 1, "y": 1 }
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 400);

    let body: Value = test::read_body_json(res).await;
    assert_problem_details(&body, 400, "NOT_PLAYERS_TURN");
}

#[actix_web::test]
async fn validation_error_conforms_to_problem_details() {
    let app = init_app(test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/api/games/move")
        .set_json(json!({
            "matchId": 1,
            "playerId": "X",
            "square": { "x": 9, "y": 1 }
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 400);

    let body: Value = test::read_body_json(res).await;
    assert_problem_details(&body, 400, "INVALID_COORDINATE");
}

#[actix_web::test]
async fn trace_ids_match_between_header_and_body() {
    let app = init_app(test_state().await).await;

    let req = test::TestRequest::get()
        .uri("/api/games/status?matchId=999999")
        .to_request();
    let res = test::call_service(&app, req).await;

    let request_id = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header")
        .to_string();
    let trace_header = res
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header")
        .to_string();

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["trace_id"].as_str(), Some(trace_header.as_str()));
    assert_eq!(request_id, trace_header);
}
