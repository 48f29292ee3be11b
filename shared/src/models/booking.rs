//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Booking status
///
/// Lifecycle: PENDING is the only initial status; REJECTED and BOOKED are
/// terminal. Legal transitions are encoded in [`BookingStatus::can_transition_to`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum BookingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Booked,
}

impl BookingStatus {
    /// All statuses a booking can ever carry
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Approved,
        BookingStatus::Rejected,
        BookingStatus::Booked,
    ];

    /// Whether no further transition is allowed from this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Rejected | BookingStatus::Booked)
    }

    /// The transition table: PENDING -> APPROVED | REJECTED, APPROVED -> BOOKED
    pub fn can_transition_to(&self, target: BookingStatus) -> bool {
        matches!(
            (self, target),
            (BookingStatus::Pending, BookingStatus::Approved)
                | (BookingStatus::Pending, BookingStatus::Rejected)
                | (BookingStatus::Approved, BookingStatus::Booked)
        )
    }

    /// Wire representation (matches serde/database encoding)
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
            BookingStatus::Booked => "BOOKED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking entity
///
/// A time-bounded reservation request against a Zone, owned by a User.
/// Bookings are never deleted; rejected ones stay for audit history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: i64,
    pub zone_id: i64,
    pub user_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Total price in currency units
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: i64,
}

/// Create booking payload (customer-facing; status is always PENDING)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub zone_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Total price in currency units
    pub total_price: f64,
}

/// Update status payload (admin-facing)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
}

/// Filter for booking list queries
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub owner_id: Option<i64>,
}

/// Booking joined with zone, store and user summary (for list/detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BookingDetail {
    pub id: i64,
    pub zone_id: i64,
    pub user_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: i64,
    pub zone_unique_id: String,
    pub zone_equipment: String,
    pub zone_price: f64,
    pub store_id: i64,
    pub store_name: String,
    pub store_city: String,
    pub user_name: String,
    pub user_email: String,
}
