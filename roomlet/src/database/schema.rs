//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the roomlet reservation system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the houses table.
///
/// `max_occupants` is nullable: when the landlord does not state a
/// capacity, the room type default applies and is persisted the first time
/// it is needed. `current_occupants` and `is_available` are the occupancy
/// counters the reservation lifecycle maintains.
pub const CREATE_HOUSES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS houses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        landlord_id TEXT NOT NULL,
        title TEXT NOT NULL,
        address TEXT NOT NULL,
        room_type TEXT NOT NULL,
        max_occupants INTEGER,
        current_occupants INTEGER NOT NULL DEFAULT 0,
        is_available INTEGER NOT NULL DEFAULT 1,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// One row per reservation request. Status is stored as its lowercase
/// string form; timestamps are Unix epoch seconds.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_id TEXT NOT NULL,
        house_id INTEGER NOT NULL REFERENCES houses(id),
        status TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        expires_at INTEGER NOT NULL
    )";

/// SQL statement to create an index on (`house_id`, status).
///
/// This index speeds up the active-count and bulk-waitlist queries that
/// run inside every lifecycle transaction.
pub const CREATE_HOUSE_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_house_status ON reservations(house_id, status)";

/// SQL statement to create an index on the `student_id` column.
///
/// This index speeds up per-student listings and the duplicate check.
pub const CREATE_STUDENT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_student ON reservations(student_id)";

/// SQL statement to create an index on the `landlord_id` column.
pub const CREATE_LANDLORD_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_houses_landlord ON houses(landlord_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a house.
pub const INSERT_HOUSE: &str = r"
    INSERT INTO houses
    (landlord_id, title, address, room_type, max_occupants, current_occupants, is_available, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to insert a reservation.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (student_id, house_id, status, created_at, expires_at)
    VALUES (?, ?, ?, ?, ?)
";

/// SQL statement to delete a reservation by id.
pub const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?";
