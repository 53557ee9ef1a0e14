use axum::{
    body::Body,
    extract::Request,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, booking, contact, health, hotel, payment, review};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))

        // Hotels
        .route("/hotels", get(hotel::list_hotels).post(hotel::create_hotel))
        .route("/hotels/search", get(hotel::search_hotels))
        .route("/hotels/{hotel_id}", get(hotel::get_hotel).patch(hotel::update_hotel).delete(hotel::delete_hotel))

        // Bookings
        .route("/bookings", post(booking::create_booking))
        .route("/bookings/occupied/{hotel_id}", get(booking::occupied_dates))
        .route("/bookings/my-bookings", get(booking::my_bookings))
        .route("/bookings/all", get(booking::all_bookings))
        .route("/bookings/admin/stats", get(booking::admin_stats))
        .route("/bookings/{booking_id}", get(booking::get_booking))
        .route("/bookings/{booking_id}/cancel", patch(booking::cancel_booking))

        // Payments
        .route("/payments/{booking_id}", post(payment::process_payment))

        // Reviews
        .route("/reviews", post(review::create_review))
        .route("/reviews/hotel/{hotel_id}", get(review::hotel_reviews))

        // Contact messages
        .route("/contacts", post(contact::submit_message).get(contact::list_messages))
        .route("/contacts/{message_id}/read", patch(contact::mark_read))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
