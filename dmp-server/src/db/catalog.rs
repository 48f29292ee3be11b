//! Store and zone catalog queries (read-only)

use shared::models::{Booking, Store, Zone};
use sqlx::PgPool;

pub async fn count_stores(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM stores")
        .fetch_one(pool)
        .await
}

pub async fn list_stores(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Store>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, external_id, name, region, city, equipment_format, created_at
        FROM stores
        ORDER BY name
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn list_zones_for_stores(
    pool: &PgPool,
    store_ids: &[i64],
) -> Result<Vec<Zone>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, store_id, unique_id, equipment, purpose, category,
               supplier, brand, price, comment, created_at
        FROM zones
        WHERE store_id = ANY($1)
        ORDER BY unique_id
        "#,
    )
    .bind(store_ids)
    .fetch_all(pool)
    .await
}

pub async fn list_bookings_for_zones(
    pool: &PgPool,
    zone_ids: &[i64],
) -> Result<Vec<Booking>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, zone_id, user_id, start_date, end_date, total_price, status, created_at
        FROM bookings
        WHERE zone_id = ANY($1)
        "#,
    )
    .bind(zone_ids)
    .fetch_all(pool)
    .await
}
