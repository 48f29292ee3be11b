//! Booking API handlers

use axum::extract::{Path, Query, State};
use axum::{Json, http::StatusCode};
use serde::Deserialize;
use shared::error::AppResult;
use shared::models::{BookingDetail, BookingStatus, BookingStatusUpdate};

use crate::auth::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<BookingStatus>,
}

/// POST /api/bookings - request a zone booking (any authenticated user)
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<shared::models::BookingCreate>,
) -> AppResult<(StatusCode, Json<BookingDetail>)> {
    let detail = state.bookings.create(&user, &payload).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /api/bookings - list bookings, scoped by role
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<BookingDetail>>> {
    let details = state.bookings.list(&user, query.status).await?;
    Ok(Json(details))
}

/// PATCH /api/bookings/{id} - transition a booking's status (admin only)
pub async fn update_status(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<BookingStatusUpdate>,
) -> AppResult<Json<BookingDetail>> {
    let detail = state.bookings.transition(&user, id, payload.status).await?;
    Ok(Json(detail))
}
