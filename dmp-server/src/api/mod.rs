//! API routes

pub mod auth;
pub mod bookings;
pub mod health;
pub mod stores;

use axum::Router;
use axum::routing::{get, patch, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Registration and login (no auth)
    let auth_routes = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/admin", post(auth::register_admin));

    // Store catalog with projected occupancy (public read)
    let catalog = Router::new().route("/api/stores", get(stores::list));

    // Booking operations (JWT authenticated via the CurrentUser extractor)
    let bookings = Router::new()
        .route("/api/bookings", post(bookings::create).get(bookings::list))
        .route("/api/bookings/{id}", patch(bookings::update_status));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(auth_routes)
        .merge(catalog)
        .merge(bookings)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
