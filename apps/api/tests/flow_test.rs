use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use clinic_booking_api::router::create_router;
use clinic_booking_api::state::AppState;
use shared_utils::test_utils::{SessionTestUtils, TestConfig};

fn create_test_app(config: TestConfig) -> Router {
    create_router(AppState::from_config(config.to_arc()))
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", SessionTestUtils::bearer(token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, json) = send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app(TestConfig::default());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_patient_books_and_admin_cancels() {
    let app = create_test_app(TestConfig::default());
    let patient = login(&app, "paciente@demo.com", "paciente123").await;
    let admin = login(&app, "admin@demo.com", "admin123").await;

    let (status, json) = send(&app, "GET", "/specialists/search?q=cardio&specialty=all", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    let specialist_id = json["specialists"][0]["id"].as_str().unwrap().to_string();
    assert_eq!(specialist_id, "s1");

    let (status, json) = send(
        &app,
        "POST",
        "/appointments",
        Some(&patient),
        Some(json!({ "specialistId": specialist_id, "date": "2026-04-01", "time": "09:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let appointment_id = json["appointment"]["id"].as_str().unwrap().to_string();

    let (status, json) = send(
        &app,
        "PATCH",
        &format!("/appointments/{}/status", appointment_id),
        Some(&admin),
        Some(json!({ "status": "cancelled", "reason": "patient request" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["appointment"]["status"], "cancelled");
    assert_eq!(json["appointment"]["reason"], "patient request");
    assert_eq!(json["appointment"]["date"], "2026-04-01");
    assert_eq!(json["appointment"]["time"], "09:00");

    let (status, json) = send(&app, "GET", "/appointments/mine", Some(&patient), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 3);
    assert_eq!(json["appointments"][2]["status"], "cancelled");

    let (status, json) = send(&app, "GET", "/appointments/stats", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 5);
    assert_eq!(json["cancelled"], 1);
}

#[tokio::test]
async fn test_admin_records_sanction() {
    let app = create_test_app(TestConfig::default());
    let admin = login(&app, "admin@demo.com", "admin123").await;

    let (status, _) = send(
        &app,
        "POST",
        "/sanctions",
        Some(&admin),
        Some(json!({ "patientName": "José García", "reason": "missed two appointments" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = send(&app, "GET", "/sanctions", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 2);
    assert_eq!(json["sanctions"][1]["type"], "warning");
}

#[tokio::test]
async fn test_logout_revokes_token_across_cells() {
    let app = create_test_app(TestConfig::default());
    let patient = login(&app, "paciente@demo.com", "paciente123").await;

    let (status, _) = send(&app, "POST", "/auth/logout", Some(&patient), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(&app, "GET", "/appointments/mine", Some(&patient), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Session has ended");
}

#[tokio::test]
async fn test_unseeded_ledgers_start_empty() {
    let mut config = TestConfig::default().to_app_config();
    config.seed_demo_data = false;
    let app = create_router(AppState::from_config(std::sync::Arc::new(config)));
    let admin = login(&app, "admin@demo.com", "admin123").await;

    let (_, json) = send(&app, "GET", "/appointments", Some(&admin), None).await;
    assert_eq!(json["total"], 0);

    let (_, json) = send(&app, "GET", "/sanctions", Some(&admin), None).await;
    assert_eq!(json["total"], 0);

    let (status, _) = send(&app, "GET", "/specialists/s1", None, None).await;
    assert_eq!(status, StatusCode::OK);
}
