//! Postgres adapters
//!
//! Runtime-checked sqlx queries against the schema in `migrations/`.

pub mod bookings;
pub mod catalog;
pub mod users;

use crate::booking::repository::RepoError;

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}
