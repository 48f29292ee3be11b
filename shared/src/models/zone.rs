//! DMP Zone Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Zone product category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ZoneCategory {
    Food,
    NonFood,
}

/// Derived zone occupancy
///
/// Never stored: recomputed from the zone's booking set on every read,
/// so it cannot drift from the bookings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Occupancy {
    Vacant,
    Occupied,
}

/// DMP zone entity (bookable fixture slot inside a store)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Zone {
    pub id: i64,
    pub store_id: i64,
    pub unique_id: String,
    pub equipment: String,
    pub purpose: String,
    pub category: ZoneCategory,
    pub supplier: Option<String>,
    pub brand: Option<String>,
    /// Monthly price in currency units
    pub price: f64,
    pub comment: Option<String>,
    pub created_at: i64,
}

/// Zone with projected occupancy (for catalog views)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneWithStatus {
    #[serde(flatten)]
    pub zone: Zone,
    pub status: Occupancy,
    /// Availability per upcoming month, keyed "YYYY-MM"
    pub monthly_availability: BTreeMap<String, bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_serde() {
        assert_eq!(
            serde_json::to_string(&Occupancy::Occupied).unwrap(),
            "\"OCCUPIED\""
        );
        assert_eq!(
            serde_json::to_string(&Occupancy::Vacant).unwrap(),
            "\"VACANT\""
        );
    }

    #[test]
    fn test_category_serde() {
        assert_eq!(
            serde_json::to_string(&ZoneCategory::NonFood).unwrap(),
            "\"NON_FOOD\""
        );
    }
}
