//! Booking use-cases
//!
//! Create, list and transition, with validation and role scoping.
//! Creation always lands in PENDING; nothing a customer sends can pick
//! another status.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BookingCreate, BookingDetail, BookingFilter, BookingStatus};

use crate::auth::CurrentUser;
use crate::booking::machine;
use crate::booking::repository::BookingRepository;

#[derive(Clone)]
pub struct BookingService<R> {
    repo: R,
}

impl<R: BookingRepository> BookingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a booking owned by the caller, always in PENDING
    pub async fn create(
        &self,
        actor: &CurrentUser,
        data: &BookingCreate,
    ) -> AppResult<BookingDetail> {
        if data.start_date > data.end_date {
            return Err(AppError::with_message(
                ErrorCode::InvalidBookingDates,
                format!(
                    "start_date {} is after end_date {}",
                    data.start_date, data.end_date
                ),
            ));
        }
        if !(data.total_price > 0.0) {
            return Err(AppError::new(ErrorCode::InvalidBookingPrice));
        }
        if !self.repo.zone_exists(data.zone_id).await? {
            return Err(
                AppError::validation(format!("Zone {} does not exist", data.zone_id))
                    .with_detail("zone_id", data.zone_id),
            );
        }

        let booking = self.repo.create(actor.id, data).await?;

        tracing::info!(
            booking_id = booking.id,
            zone_id = booking.zone_id,
            user_id = actor.id,
            "booking created"
        );

        self.repo
            .find_detail(booking.id)
            .await?
            .ok_or_else(|| AppError::booking_not_found(booking.id))
    }

    /// List bookings, scoped by role: admins see everything and may
    /// filter by status; customers always get exactly their own rows.
    pub async fn list(
        &self,
        actor: &CurrentUser,
        status: Option<BookingStatus>,
    ) -> AppResult<Vec<BookingDetail>> {
        let filter = if actor.is_admin() {
            BookingFilter {
                status,
                owner_id: None,
            }
        } else {
            BookingFilter {
                status: None,
                owner_id: Some(actor.id),
            }
        };

        Ok(self.repo.list(&filter).await?)
    }

    /// Transition a booking's status (admin only)
    pub async fn transition(
        &self,
        actor: &CurrentUser,
        booking_id: i64,
        target: BookingStatus,
    ) -> AppResult<BookingDetail> {
        machine::transition(&self.repo, booking_id, target, actor).await
    }
}
