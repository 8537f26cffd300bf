//! Error types for the roomlet library.
//!
//! This module provides a comprehensive error hierarchy for all operations
//! in the roomlet library, using `thiserror` for ergonomic error handling.
//!
//! None of these errors are retried internally: every variant is a
//! deterministic outcome of current state, surfaced directly to the caller.

use thiserror::Error;

use crate::house::HouseId;
use crate::reservation::{ReservationId, ReservationStatus};

/// Result type alias for operations that may fail with a roomlet error.
///
/// # Examples
///
/// ```
/// use roomlet::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the roomlet library.
///
/// This enum encompasses all possible error conditions that can occur
/// during room reservation operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The room cannot accept new reservations (unavailable or the
    /// reservation queue is at its cap).
    #[error("room full: house {house_id} is not accepting reservations")]
    RoomFull {
        /// The house that rejected the reservation.
        house_id: HouseId,
    },

    /// The room is at hard capacity and the reservation cannot be approved.
    #[error("house full: house {house_id} already has {max_occupants} approved occupant(s)")]
    HouseFull {
        /// The house that is at capacity.
        house_id: HouseId,
        /// The authoritative capacity of the house.
        max_occupants: u32,
    },

    /// The student already has an active reservation on this house.
    #[error("duplicate reservation: student {student_id} already has an active reservation on house {house_id}")]
    DuplicateReservation {
        /// The student attempting to reserve.
        student_id: String,
        /// The house being reserved.
        house_id: HouseId,
    },

    /// The caller is not allowed to perform this operation.
    #[error("forbidden: {details}")]
    Forbidden {
        /// Details about the authorization mismatch.
        details: String,
    },

    /// A reservation status transition that the state machine does not allow.
    #[error("invalid transition for reservation {reservation_id}: {from} -> {to}")]
    InvalidTransition {
        /// The reservation whose status change was rejected.
        reservation_id: ReservationId,
        /// The current status.
        from: ReservationStatus,
        /// The requested status.
        to: ReservationStatus,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if this error indicates a missing house or reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomlet::Error;
    ///
    /// let err = Error::NotFound { resource: "house 7".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a capacity rejection (`RoomFull` or `HouseFull`).
    ///
    /// # Examples
    ///
    /// ```
    /// use roomlet::{Error, HouseId};
    ///
    /// let err = Error::RoomFull { house_id: HouseId::new(1) };
    /// assert!(err.is_capacity());
    /// ```
    #[must_use]
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::RoomFull { .. } | Self::HouseFull { .. })
    }
}
