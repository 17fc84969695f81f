use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post(uri: &str, body: &'static str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn manages_a_calendar_over_http() {
    let app = router(AppState::in_memory());

    let (status, created) = send(
        &app,
        post(
            "/api/create_event",
            r#"{"user_id":123,"date":"2026-01-15","title":"Meeting","content":"Description"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["result"]["id"], 1);

    let (status, day) = send(&app, get("/api/events_for_day?user_id=123&date=2026-01-15")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(day["result"][0]["title"], "Meeting");
    assert_eq!(day["result"][0]["content"], "Description");

    let (status, _) = send(
        &app,
        post(
            "/api/update_event",
            r#"{"id":1,"user_id":123,"date":"2026-01-15","title":"New title","content":"New description"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, week) = send(&app, get("/api/events_for_week?user_id=123&date=2026-01-15")).await;
    assert_eq!(week["result"][0]["title"], "New title");
    assert_eq!(week["result"][0]["content"], "New description");

    let (status, _) = send(
        &app,
        post("/api/delete_event", r#"{"user_id":123,"event_id":1}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, month) =
        send(&app, get("/api/events_for_month?user_id=123&date=2026-01-15")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(month, serde_json::json!({ "result": [] }));

    let (status, _) = send(
        &app,
        post(
            "/api/create_event",
            r#"{"user_id":123,"date":"2026-01-16","title":"Follow-up"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, day) = send(&app, get("/api/events_for_day?user_id=123&date=2026-01-16")).await;
    assert_eq!(day["result"][0]["id"], 2, "deleted ids are not reused");
    assert!(day["result"][0].get("content").is_none());
}

#[tokio::test]
async fn serves_graphql_next_to_the_rest_api() {
    let app = router(AppState::in_memory());

    let (status, _) = send(
        &app,
        post(
            "/api/create_event",
            r#"{"user_id":5,"date":"2026-03-02","title":"Kickoff"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = send(
        &app,
        post(
            "/gql",
            r#"{"query":"{ eventsForMonth(userId: 5, date: \"2026-03-31\") { id title } }"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({ "data": { "eventsForMonth": [{ "id": 1, "title": "Kickoff" }] } })
    );
}
