//! Booking storage port
//!
//! The trait every booking store implements. The only non-obvious
//! operation is [`BookingRepository::update_status_checked`]: a
//! compare-and-set that makes the expected status part of the write,
//! so two admins racing on the same booking cannot both win.

use shared::error::AppError;
use shared::models::{Booking, BookingCreate, BookingDetail, BookingFilter, BookingStatus};
use thiserror::Error;

/// Storage-level errors
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("booking {0} not found")]
    NotFound(i64),

    /// The conditional status write matched the row but not the expected
    /// status: someone else transitioned the booking first.
    #[error("booking status is {current}, expected {expected}")]
    StatusConflict {
        current: BookingStatus,
        expected: BookingStatus,
    },

    #[error("database error: {0}")]
    Database(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => AppError::booking_not_found(id),
            RepoError::StatusConflict { current, expected } => AppError::invalid_transition(
                format!("Booking status changed to {current} while expecting {expected}"),
            )
            .with_detail("current_status", current.as_str()),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait BookingRepository {
    async fn find(&self, id: i64) -> RepoResult<Option<Booking>>;

    async fn find_detail(&self, id: i64) -> RepoResult<Option<BookingDetail>>;

    /// List bookings, newest first
    async fn list(&self, filter: &BookingFilter) -> RepoResult<Vec<BookingDetail>>;

    async fn zone_exists(&self, zone_id: i64) -> RepoResult<bool>;

    /// Insert a new booking owned by `user_id`; the stored status is
    /// always PENDING regardless of anything in the payload.
    async fn create(&self, user_id: i64, data: &BookingCreate) -> RepoResult<Booking>;

    /// Atomically set the status to `target` if and only if the current
    /// status still equals `expected`.
    async fn update_status_checked(
        &self,
        id: i64,
        expected: BookingStatus,
        target: BookingStatus,
    ) -> RepoResult<Booking>;
}
