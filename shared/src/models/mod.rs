//! Data models
//!
//! Shared between the server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (PostgreSQL BIGSERIAL).

pub mod booking;
pub mod store;
pub mod user;
pub mod zone;

// Re-exports
pub use booking::*;
pub use store::*;
pub use user::*;
pub use zone::*;
