use serde_json::Value;

/// Assert the standard RFC-7807 shape produced by `AppError`.
pub fn assert_problem_details(body: &Value, expected_status: u16, expected_code: &str) {
    assert_eq!(
        body["status"].as_u64(),
        Some(u64::from(expected_status)),
        "status field mismatch in {body}"
    );
    assert_eq!(
        body["code"].as_str(),
        Some(expected_code),
        "code field mismatch in {body}"
    );
    assert!(
        body["type"]
            .as_str()
            .unwrap_or_default()
            .ends_with(expected_code),
        "type field should end with the code in {body}"
    );
    assert!(
        !body["title"].as_str().unwrap_or_default().is_empty(),
        "title must be present in {body}"
    );
    assert!(
        !body["detail"].as_str().unwrap_or_default().is_empty(),
        "detail must be present in {body}"
    );
    assert!(
        !body["trace_id"].as_str().unwrap_or_default().is_empty(),
        "trace_id must be present in {body}"
    );
}
