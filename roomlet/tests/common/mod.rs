//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the roomlet library.

use std::path::PathBuf;

use roomlet::config::ResolvedConfig;
use roomlet::{Database, DatabaseConfig, House, HouseBuilder, HouseId, RoomType};

/// Creates a test database in a temporary location.
///
/// The temp directory is leaked so the database file outlives this call.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let db_path = create_test_database_path();
    let config = DatabaseConfig::new(db_path);
    Database::open(config).expect("should open test database")
}

/// Returns a path for a fresh test database without opening it.
///
/// Used by concurrency tests that open several connections to the same file.
#[allow(dead_code)]
pub fn create_test_database_path() -> PathBuf {
    let temp_dir = tempfile::tempdir().expect("should create temp dir");
    let db_path = temp_dir.path().join("test.db");
    // Keep the temp_dir alive by forgetting it - this is a test helper
    std::mem::forget(temp_dir);
    db_path
}

/// Default test configuration (7 day TTL, queue multiplier 5).
#[allow(dead_code)]
pub fn create_test_config() -> ResolvedConfig {
    ResolvedConfig::default()
}

/// Builder for creating test houses with sensible defaults.
#[allow(dead_code)]
pub struct HouseFixture {
    landlord_id: String,
    title: String,
    address: String,
    room_type: RoomType,
    max_occupants: Option<u32>,
}

#[allow(dead_code)]
impl HouseFixture {
    /// Creates a new fixture builder with default values.
    pub fn new() -> Self {
        Self {
            landlord_id: "landlord-1".to_string(),
            title: "Test room".to_string(),
            address: "1 Test Street".to_string(),
            room_type: RoomType::Double,
            max_occupants: None,
        }
    }

    /// Sets the room type for the listing.
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    /// Sets an explicit capacity for the listing.
    pub fn with_max_occupants(mut self, max_occupants: u32) -> Self {
        self.max_occupants = Some(max_occupants);
        self
    }

    /// Sets the landlord identifier.
    pub fn with_landlord(mut self, landlord_id: impl Into<String>) -> Self {
        self.landlord_id = landlord_id.into();
        self
    }

    /// Builds the house.
    ///
    /// # Panics
    ///
    /// Panics if the fixture fails validation. This is acceptable in test
    /// code where we want to fail fast on invalid fixtures.
    pub fn build(self) -> House {
        let mut builder = HouseBuilder::new(
            self.landlord_id,
            self.title,
            self.address,
            self.room_type,
        );
        if let Some(max) = self.max_occupants {
            builder = builder.max_occupants(max);
        }
        builder.build().expect("fixture should build valid house")
    }

    /// Builds the house and inserts it into the database.
    pub fn create(self, db: &mut Database) -> HouseId {
        let house = self.build();
        db.create_house(&house).expect("should insert test house")
    }
}

impl Default for HouseFixture {
    fn default() -> Self {
        Self::new()
    }
}
