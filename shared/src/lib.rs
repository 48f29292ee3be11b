//! Shared types for the DMP booking marketplace
//!
//! Common types used across the server and API clients: data models,
//! error codes and response structures.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
