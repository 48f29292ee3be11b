//! Store catalog handlers
//!
//! The catalog is read-only here: stores and zones are provisioned out of
//! band, and each zone's occupancy is projected from its bookings at
//! request time.

use axum::Json;
use axum::extract::{Query, State};
use chrono::Utc;
use serde::Deserialize;
use shared::error::{AppError, AppResult};
use shared::models::{Booking, Pagination, StorePage, StoreWithZones, ZoneWithStatus};
use std::collections::HashMap;

use crate::booking::projector::{monthly_availability, project_occupancy};
use crate::db::catalog;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 15;
const MAX_LIMIT: i64 = 100;
/// Months of availability projected per zone, starting from the current month
const AVAILABILITY_MONTHS: usize = 12;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /api/stores - paginated catalog with projected zone occupancy
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<StorePage>> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let total = catalog::count_stores(&state.pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let stores = catalog::list_stores(&state.pool, limit, (page - 1) * limit)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let store_ids: Vec<i64> = stores.iter().map(|s| s.id).collect();
    let zones = catalog::list_zones_for_stores(&state.pool, &store_ids)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let zone_ids: Vec<i64> = zones.iter().map(|z| z.id).collect();
    let bookings = catalog::list_bookings_for_zones(&state.pool, &zone_ids)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let mut by_zone: HashMap<i64, Vec<Booking>> = HashMap::new();
    for booking in bookings {
        by_zone.entry(booking.zone_id).or_default().push(booking);
    }

    let today = Utc::now().date_naive();
    let policy = state.occupancy_policy;

    let mut by_store: HashMap<i64, Vec<ZoneWithStatus>> = HashMap::new();
    for zone in zones {
        let store_id = zone.store_id;
        let zone_bookings = by_zone.remove(&zone.id).unwrap_or_default();
        let with_status = ZoneWithStatus {
            status: project_occupancy(&zone_bookings, policy),
            monthly_availability: monthly_availability(
                &zone_bookings,
                today,
                AVAILABILITY_MONTHS,
                policy,
            ),
            zone,
        };
        by_store.entry(store_id).or_default().push(with_status);
    }

    let stores: Vec<StoreWithZones> = stores
        .into_iter()
        .map(|store| {
            let dmp_zones = by_store.remove(&store.id).unwrap_or_default();
            StoreWithZones { store, dmp_zones }
        })
        .collect();

    let total_pages = if total == 0 { 0 } else { (total + limit - 1) / limit };

    Ok(Json(StorePage {
        stores,
        pagination: Pagination {
            total,
            page,
            limit,
            total_pages,
        },
    }))
}
