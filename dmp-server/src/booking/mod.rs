//! Booking core
//!
//! The domain layer of the marketplace: the status state machine,
//! the occupancy projector, the booking use-cases and the storage port
//! they run against. Everything here is storage-agnostic; the Postgres
//! adapter lives in [`crate::db`].

pub mod machine;
pub mod projector;
pub mod repository;
pub mod service;

pub use repository::{BookingRepository, RepoError, RepoResult};
pub use service::BookingService;
