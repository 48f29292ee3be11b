//! dmp-server — store-fixture zone booking marketplace
//!
//! Axum service exposing registration/login, the store catalog with
//! projected zone occupancy, and the booking lifecycle (request,
//! role-scoped listing, admin-gated status transitions).

pub mod api;
pub mod auth;
pub mod booking;
pub mod config;
pub mod db;
pub mod state;
