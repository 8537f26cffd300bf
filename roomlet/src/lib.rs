#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # roomlet
//!
//! A library for managing room reservations in student housing.
//!
//! This library provides core types and functionality for listing houses,
//! admitting reservation requests, tracking occupancy, and walking
//! reservations through their approval lifecycle.
//!
//! ## Core Types
//!
//! - [`House`] and [`RoomType`]: Housing listings with occupancy tracking
//! - [`Reservation`] and [`ReservationStatus`]: Reservation lifecycle state
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use roomlet::{HouseBuilder, RoomType};
//!
//! // Build a listing; capacity defaults by room type
//! let house = HouseBuilder::new("landlord-1", "Sunny double", "12 College Walk", RoomType::Double)
//!     .build()
//!     .unwrap();
//! assert_eq!(house.effective_max_occupants(), 2);
//! assert!(house.is_available);
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod house;
pub mod logging;
pub mod operations;
pub mod reservation;

// Re-export key types at crate root for convenience
pub use config::{Config, ResolvedConfig};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use house::{House, HouseBuilder, HouseId, RoomType};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    create_reservation, delete_reservation, expire_reservations, update_reservation_status,
    CreateReservationOptions, DeleteReservationOptions, ExpireResult, StatusUpdate,
    UpdateStatusOptions,
};
pub use reservation::{
    Reservation, ReservationBuilder, ReservationId, ReservationStatus, StudentId, ValidationError,
};
