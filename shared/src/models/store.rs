//! Store Model

use super::zone::ZoneWithStatus;
use serde::{Deserialize, Serialize};

/// Store entity (read-only catalog; provisioning happens outside this service)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Store {
    pub id: i64,
    pub external_id: String,
    pub name: String,
    pub region: String,
    pub city: String,
    pub equipment_format: Option<String>,
    pub created_at: i64,
}

/// Store with zones and their projected occupancy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreWithZones {
    #[serde(flatten)]
    pub store: Store,
    pub dmp_zones: Vec<ZoneWithStatus>,
}

/// Pagination metadata for list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

/// Paginated store catalog response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorePage {
    pub stores: Vec<StoreWithZones>,
    pub pagination: Pagination,
}
