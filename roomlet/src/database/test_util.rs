//! Shared test utilities for database unit tests.
//!
//! Helper functions used across multiple database and operations test
//! modules.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::house::{House, HouseBuilder, HouseId, RoomType};
use crate::reservation::{Reservation, ReservationBuilder};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a test house for the given landlord and room type.
///
/// The capacity is left unset, so the room type default applies.
///
/// # Panics
///
/// Panics if the house cannot be built.
#[must_use]
pub fn create_test_house(landlord_id: &str, room_type: RoomType) -> House {
    HouseBuilder::new(landlord_id, "Test room", "1 Test St", room_type)
        .build()
        .unwrap()
}

/// Creates a pending test reservation for the given student and house.
///
/// # Panics
///
/// Panics if the reservation cannot be built.
#[must_use]
pub fn create_test_reservation(student_id: &str, house_id: HouseId) -> Reservation {
    ReservationBuilder::new(student_id, house_id).build().unwrap()
}
