//! Database layer for persistent storage of houses and reservations.
//!
//! This module provides a SQLite-based storage layer, including connection
//! management, schema versioning, and CRUD operations for both record
//! types. The lifecycle semantics (admission, waitlisting, expiry) live in
//! [`crate::operations`]; this layer is the raw storage underneath them.
//!
//! # Examples
//!
//! ```no_run
//! use roomlet::database::{Database, DatabaseConfig};
//! use roomlet::{HouseBuilder, RoomType};
//!
//! let config = DatabaseConfig::new("/tmp/roomlet.db");
//! let mut db = Database::open(config).unwrap();
//!
//! let house = HouseBuilder::new("landlord-1", "Sunny room", "12 Elm St", RoomType::Double)
//!     .build()
//!     .unwrap();
//! let id = db.create_house(&house).unwrap();
//!
//! let listed = Database::list_available_houses(db.connection()).unwrap();
//! println!("{} houses accepting reservations", listed.len());
//! ```

mod config;
mod connection;
mod houses;
pub mod migrations;
mod reservations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
