mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{parse_body, TestApp};
use serde_json::json;
use tower::ServiceExt;

async fn pay(
    app: &TestApp,
    token: &str,
    booking_id: &str,
    number: &str,
    expiry: &str,
    cvv: &str,
) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri(format!("/payments/{booking_id}"))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(json!({
                "name": "JUAN PEREZ",
                "number": number,
                "expiry": expiry,
                "cvv": cvv
            }).to_string()))
            .unwrap()
    ).await.unwrap()
}

async fn setup_pending_booking(app: &TestApp) -> (String, String) {
    let admin = app.seed_admin().await;
    let hotel = app.create_hotel(&admin, "Hotel Sol", "Ayacucho", 100.0).await;
    let token = app.register_user("Alice", "alice@test.com", "password1").await;

    let res = app.create_booking(&token, hotel["id"].as_str().unwrap(), "2025-07-01", "2025-07-03").await;
    let booking = parse_body(res).await;

    (token, booking["id"].as_str().unwrap().to_string())
}

async fn booking_status(app: &TestApp, token: &str, booking_id: &str) -> String {
    let res = app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri(format!("/bookings/{booking_id}"))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    parse_body(res).await["status"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_successful_payment_marks_booking_paid() {
    let app = TestApp::new().await;
    let (token, booking_id) = setup_pending_booking(&app).await;

    let res = pay(&app, &token, &booking_id, "4242424242424242", "12/99", "123").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["booking"]["status"], "paid");
}

#[tokio::test]
async fn test_second_payment_attempt_conflicts() {
    let app = TestApp::new().await;
    let (token, booking_id) = setup_pending_booking(&app).await;

    let res = pay(&app, &token, &booking_id, "4242424242424242", "12/99", "123").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = pay(&app, &token, &booking_id, "4242424242424242", "12/99", "123").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(booking_status(&app, &token, &booking_id).await, "paid");
}

#[tokio::test]
async fn test_cancelled_booking_cannot_be_paid() {
    let app = TestApp::new().await;
    let (token, booking_id) = setup_pending_booking(&app).await;

    app.router.clone().oneshot(
        Request::builder()
            .method("PATCH")
            .uri(format!("/bookings/{booking_id}/cancel"))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let res = pay(&app, &token, &booking_id, "4242424242424242", "12/99", "123").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(booking_status(&app, &token, &booking_id).await, "cancelled");
}

#[tokio::test]
async fn test_malformed_card_is_rejected_without_state_change() {
    let app = TestApp::new().await;
    let (token, booking_id) = setup_pending_booking(&app).await;

    // Fails the checksum
    let res = pay(&app, &token, &booking_id, "4242424242424241", "12/99", "123").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Too short
    let res = pay(&app, &token, &booking_id, "42424242", "12/99", "123").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Bad cvv
    let res = pay(&app, &token, &booking_id, "4242424242424242", "12/99", "12").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert_eq!(booking_status(&app, &token, &booking_id).await, "pending");
}

#[tokio::test]
async fn test_expired_card_is_rejected() {
    let app = TestApp::new().await;
    let (token, booking_id) = setup_pending_booking(&app).await;

    let res = pay(&app, &token, &booking_id, "4242424242424242", "01/20", "123").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert!(body["message"].as_str().unwrap().contains("expired"));
}

#[tokio::test]
async fn test_issuer_decline_leaves_booking_pending() {
    let app = TestApp::new().await;
    let (token, booking_id) = setup_pending_booking(&app).await;

    let res = pay(&app, &token, &booking_id, "4000000000000002", "12/99", "123").await;
    assert_eq!(res.status(), StatusCode::PAYMENT_REQUIRED);
    assert_eq!(booking_status(&app, &token, &booking_id).await, "pending");
}

#[tokio::test]
async fn test_cannot_pay_someone_elses_booking() {
    let app = TestApp::new().await;
    let (_, booking_id) = setup_pending_booking(&app).await;
    let bob = app.register_user("Bob", "bob@test.com", "password2").await;

    let res = pay(&app, &bob, &booking_id, "4242424242424242", "12/99", "123").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
