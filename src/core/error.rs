//! Error types for dispatch operations.

use thiserror::Error;

use crate::util::types::{CarId, Seats, MAX_SEATS};

/// Errors produced by dispatch components.
///
/// Ordinary outcomes (a journey that must wait, an unknown id on locate,
/// a repeated drop-off) are not errors: the engine models them as enum
/// results. Only conditions a caller must handle as failures live here.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Car rejected by the strict add policy.
    #[error("car {id} rejected: id must be positive and seats within 1..={MAX_SEATS}, got {seats}")]
    InvalidCar {
        /// Identifier of the offending car.
        id: CarId,
        /// Seat count of the offending car.
        seats: Seats,
    },
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
