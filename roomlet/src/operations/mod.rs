//! Reservation lifecycle operations.
//!
//! Every operation here runs as a single IMMEDIATE transaction: it
//! acquires the write lock up front, expires past-due pending
//! reservations, applies its change, and commits. An error anywhere in
//! the middle drops the transaction and rolls everything back, so
//! occupancy counters and reservation statuses never go out of step.
//!
//! # Examples
//!
//! ```no_run
//! use roomlet::config::ResolvedConfig;
//! use roomlet::database::{Database, DatabaseConfig};
//! use roomlet::operations::{create_reservation, CreateReservationOptions};
//! use roomlet::{HouseId, StudentId};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/roomlet.db")).unwrap();
//! let config = ResolvedConfig::default();
//!
//! let student = StudentId::new("student-42").unwrap();
//! let options = CreateReservationOptions::new(student, HouseId::new(1));
//! let reservation = create_reservation(&mut db, &config, options).unwrap();
//! println!("reserved with status {}", reservation.status);
//! ```

pub mod create;
pub mod delete;
pub mod expire;
pub mod init;
pub mod query;
pub mod status;

#[cfg(test)]
mod proptests;

pub use create::{create_reservation, CreateReservationOptions};
pub use delete::{delete_reservation, DeleteReservationOptions};
pub use expire::{expire_reservations, ExpireResult};
pub use init::{init_database, InitOptions, InitResult};
pub use query::{
    approved_houses_for_student, find_reservation_for_student, get_reservation,
    list_reservations_for_house, list_reservations_for_student,
};
pub use status::{update_reservation_status, StatusUpdate, UpdateStatusOptions};
