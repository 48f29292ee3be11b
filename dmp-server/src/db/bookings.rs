//! Booking repository (Postgres)

use shared::models::{Booking, BookingCreate, BookingDetail, BookingFilter, BookingStatus};
use shared::util::now_millis;
use sqlx::PgPool;

use crate::booking::repository::{BookingRepository, RepoError, RepoResult};

const BOOKING_COLUMNS: &str =
    "id, zone_id, user_id, start_date, end_date, total_price, status, created_at";

const DETAIL_SELECT: &str = r#"
    SELECT
        b.id, b.zone_id, b.user_id, b.start_date, b.end_date,
        b.total_price, b.status, b.created_at,
        z.unique_id AS zone_unique_id,
        z.equipment AS zone_equipment,
        z.price AS zone_price,
        s.id AS store_id,
        s.name AS store_name,
        s.city AS store_city,
        u.name AS user_name,
        u.email AS user_email
    FROM bookings b
    JOIN zones z ON z.id = b.zone_id
    JOIN stores s ON s.id = z.store_id
    JOIN users u ON u.id = b.user_id
"#;

#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BookingRepository for PgBookingRepository {
    async fn find(&self, id: i64) -> RepoResult<Option<Booking>> {
        let booking: Option<Booking> = sqlx::query_as(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(booking)
    }

    async fn find_detail(&self, id: i64) -> RepoResult<Option<BookingDetail>> {
        let detail: Option<BookingDetail> =
            sqlx::query_as(&format!("{DETAIL_SELECT} WHERE b.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(detail)
    }

    async fn list(&self, filter: &BookingFilter) -> RepoResult<Vec<BookingDetail>> {
        let details: Vec<BookingDetail> = sqlx::query_as(&format!(
            r#"
            {DETAIL_SELECT}
            WHERE ($1::text IS NULL OR b.status = $1)
              AND ($2::bigint IS NULL OR b.user_id = $2)
            ORDER BY b.created_at DESC
            "#
        ))
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(details)
    }

    async fn zone_exists(&self, zone_id: i64) -> RepoResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM zones WHERE id = $1)")
            .bind(zone_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn create(&self, user_id: i64, data: &BookingCreate) -> RepoResult<Booking> {
        let booking: Booking = sqlx::query_as(&format!(
            r#"
            INSERT INTO bookings (zone_id, user_id, start_date, end_date, total_price, status, created_at)
            VALUES ($1, $2, $3, $4, $5, 'PENDING', $6)
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(data.zone_id)
        .bind(user_id)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.total_price)
        .bind(now_millis())
        .fetch_one(&self.pool)
        .await?;
        Ok(booking)
    }

    async fn update_status_checked(
        &self,
        id: i64,
        expected: BookingStatus,
        target: BookingStatus,
    ) -> RepoResult<Booking> {
        // The expected status is part of the WHERE clause, so a concurrent
        // transition makes this update match zero rows instead of clobbering.
        let updated: Option<Booking> = sqlx::query_as(&format!(
            r#"
            UPDATE bookings SET status = $1
            WHERE id = $2 AND status = $3
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(target.as_str())
        .bind(id)
        .bind(expected.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(booking) => Ok(booking),
            // Zero rows: either the booking vanished or someone else won
            None => match self.find(id).await? {
                Some(current) => Err(RepoError::StatusConflict {
                    current: current.status,
                    expected,
                }),
                None => Err(RepoError::NotFound(id)),
            },
        }
    }
}
