mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{parse_body, TestApp};
use tower::ServiceExt;

#[tokio::test]
async fn test_create_booking_derives_price_and_starts_pending() {
    let app = TestApp::new().await;
    let admin = app.seed_admin().await;
    let hotel = app.create_hotel(&admin, "Hotel Sol", "Ayacucho", 120.0).await;
    let token = app.register_user("Alice", "alice@test.com", "password1").await;

    let res = app.create_booking(&token, hotel["id"].as_str().unwrap(), "2025-07-01", "2025-07-05").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["status"], "pending");
    assert_eq!(body["total_price"], 480.0);
    assert_eq!(body["check_in"], "2025-07-01");
    assert_eq!(body["check_out"], "2025-07-05");
}

#[tokio::test]
async fn test_checkout_must_be_after_checkin() {
    let app = TestApp::new().await;
    let admin = app.seed_admin().await;
    let hotel = app.create_hotel(&admin, "Hotel Sol", "Ayacucho", 100.0).await;
    let token = app.register_user("Alice", "alice@test.com", "password1").await;
    let hotel_id = hotel["id"].as_str().unwrap();

    let res = app.create_booking(&token, hotel_id, "2025-06-10", "2025-06-08").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert!(body["message"].as_str().unwrap().contains("Check-out"));

    // Zero nights is also rejected
    let res = app.create_booking(&token, hotel_id, "2025-06-10", "2025-06-10").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_overlapping_booking_conflicts_adjacent_does_not() {
    let app = TestApp::new().await;
    let admin = app.seed_admin().await;
    let hotel = app.create_hotel(&admin, "Hotel Sol", "Ayacucho", 100.0).await;
    let token = app.register_user("Alice", "alice@test.com", "password1").await;
    let hotel_id = hotel["id"].as_str().unwrap();

    let res = app.create_booking(&token, hotel_id, "2025-07-01", "2025-07-05").await;
    assert_eq!(res.status(), StatusCode::OK);

    // Shares 2025-07-04
    let res = app.create_booking(&token, hotel_id, "2025-07-04", "2025-07-06").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Checkout-morning handoff on 2025-07-05
    let res = app.create_booking(&token, hotel_id, "2025-07-05", "2025-07-07").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cancelled_booking_releases_its_dates() {
    let app = TestApp::new().await;
    let admin = app.seed_admin().await;
    let hotel = app.create_hotel(&admin, "Hotel Sol", "Ayacucho", 100.0).await;
    let token = app.register_user("Alice", "alice@test.com", "password1").await;
    let hotel_id = hotel["id"].as_str().unwrap();

    let res = app.create_booking(&token, hotel_id, "2025-07-01", "2025-07-05").await;
    let booking = parse_body(res).await;

    let res = app.router.clone().oneshot(
        Request::builder()
            .method("PATCH")
            .uri(format!("/bookings/{}/cancel", booking["id"].as_str().unwrap()))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.create_booking(&token, hotel_id, "2025-07-01", "2025-07-05").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_booking_unknown_hotel_is_not_found() {
    let app = TestApp::new().await;
    let token = app.register_user("Alice", "alice@test.com", "password1").await;

    let res = app.create_booking(&token, "missing-hotel", "2025-07-01", "2025-07-05").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_requires_auth() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/bookings")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"hotelId":"h1","checkIn":"2025-07-01","checkOut":"2025-07-02"}"#))
            .unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_date_is_rejected() {
    let app = TestApp::new().await;
    let admin = app.seed_admin().await;
    let hotel = app.create_hotel(&admin, "Hotel Sol", "Ayacucho", 100.0).await;
    let token = app.register_user("Alice", "alice@test.com", "password1").await;

    let res = app.create_booking(&token, hotel["id"].as_str().unwrap(), "01/07/2025", "2025-07-05").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_occupied_dates_are_public_ordered_and_exclude_cancelled() {
    let app = TestApp::new().await;
    let admin = app.seed_admin().await;
    let hotel = app.create_hotel(&admin, "Hotel Sol", "Ayacucho", 100.0).await;
    let token = app.register_user("Alice", "alice@test.com", "password1").await;
    let hotel_id = hotel["id"].as_str().unwrap();

    app.create_booking(&token, hotel_id, "2025-08-10", "2025-08-12").await;
    app.create_booking(&token, hotel_id, "2025-08-01", "2025-08-03").await;

    let res = app.create_booking(&token, hotel_id, "2025-08-20", "2025-08-22").await;
    let doomed = parse_body(res).await;
    app.router.clone().oneshot(
        Request::builder()
            .method("PATCH")
            .uri(format!("/bookings/{}/cancel", doomed["id"].as_str().unwrap()))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    // No auth header: the calendar is public
    let res = app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri(format!("/bookings/occupied/{hotel_id}"))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let ranges = parse_body(res).await;
    let ranges = ranges.as_array().unwrap();
    assert_eq!(ranges.len(), 2);
    assert_eq!(ranges[0]["from"], "2025-08-01");
    assert_eq!(ranges[0]["to"], "2025-08-03");
    assert_eq!(ranges[1]["from"], "2025-08-10");
}
