//! Database operations for house records.
//!
//! Row mapping and CRUD for the houses table. The static methods take a
//! `&Connection` so they can run inside a caller-held transaction; the
//! `&mut self` methods wrap themselves in an IMMEDIATE transaction.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::error::{Error, Result};
use crate::house::{House, HouseId, RoomType};

use super::connection::Database;
use super::schema::INSERT_HOUSE;

/// Converts a `DateTime<Utc>` to Unix epoch seconds for storage.
pub(super) fn datetime_to_unix_secs(time: DateTime<Utc>) -> i64 {
    time.timestamp()
}

/// Converts Unix epoch seconds from the database to a `DateTime<Utc>`.
///
/// # Errors
///
/// Returns a corruption error if the value is outside the representable
/// range.
pub(super) fn unix_secs_to_datetime(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| Error::DatabaseCorruption {
        details: format!("timestamp {secs} out of range"),
    })
}

/// Deserializes a house from a database row.
///
/// Expects fields in this order: id, `landlord_id`, title, address,
/// `room_type`, `max_occupants`, `current_occupants`, `is_available`,
/// `created_at`.
fn row_to_house(row: &rusqlite::Row<'_>) -> rusqlite::Result<House> {
    let id: i64 = row.get(0)?;
    let landlord_id: String = row.get(1)?;
    let title: String = row.get(2)?;
    let address: String = row.get(3)?;
    let room_type_str: String = row.get(4)?;
    let max_occupants: Option<u32> = row.get(5)?;
    let current_occupants: u32 = row.get(6)?;
    let is_available: bool = row.get(7)?;
    let created_secs: i64 = row.get(8)?;

    let room_type: RoomType = room_type_str
        .parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e)))?;

    let created_at = unix_secs_to_datetime(created_secs)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(8, rusqlite::types::Type::Integer, Box::new(e)))?;

    Ok(House {
        id: HouseId::new(id),
        landlord_id,
        title,
        address,
        room_type,
        max_occupants,
        current_occupants,
        is_available,
        created_at,
    })
}

const SELECT_HOUSE: &str = r"
    SELECT id, landlord_id, title, address, room_type, max_occupants,
           current_occupants, is_available, created_at
    FROM houses
    WHERE id = ?
";

const LIST_BY_LANDLORD: &str = r"
    SELECT id, landlord_id, title, address, room_type, max_occupants,
           current_occupants, is_available, created_at
    FROM houses
    WHERE landlord_id = ?
    ORDER BY created_at DESC, id DESC
";

const LIST_AVAILABLE: &str = r"
    SELECT id, landlord_id, title, address, room_type, max_occupants,
           current_occupants, is_available, created_at
    FROM houses
    WHERE is_available = 1
    ORDER BY created_at DESC, id DESC
";

const LIST_ALL: &str = r"
    SELECT id, landlord_id, title, address, room_type, max_occupants,
           current_occupants, is_available, created_at
    FROM houses
    ORDER BY created_at DESC, id DESC
";

const UPDATE_OCCUPANCY: &str = r"
    UPDATE houses
    SET max_occupants = ?, current_occupants = ?, is_available = ?
    WHERE id = ?
";

impl Database {
    /// Registers a new house and returns its assigned id.
    ///
    /// Runs in its own IMMEDIATE transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the transaction cannot be
    /// started or committed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use roomlet::database::{Database, DatabaseConfig};
    /// use roomlet::{HouseBuilder, RoomType};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/roomlet.db")).unwrap();
    /// let house = HouseBuilder::new("landlord-1", "Sunny room", "12 Elm St", RoomType::Double)
    ///     .build()
    ///     .unwrap();
    /// let id = db.create_house(&house).unwrap();
    /// println!("registered house {id}");
    /// ```
    pub fn create_house(&mut self, house: &House) -> Result<HouseId> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let id = Self::insert_house(&tx, house)?;
        tx.commit()?;
        Ok(id)
    }

    /// Inserts a house using a caller-held connection or transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_house(conn: &Connection, house: &House) -> Result<HouseId> {
        conn.execute(
            INSERT_HOUSE,
            params![
                house.landlord_id,
                house.title,
                house.address,
                house.room_type.as_str(),
                house.max_occupants,
                house.current_occupants,
                house.is_available,
                datetime_to_unix_secs(house.created_at),
            ],
        )?;
        Ok(HouseId::new(conn.last_insert_rowid()))
    }

    /// Retrieves a house by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(house))` if the house exists
    /// - `Ok(None)` if it doesn't
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_house(conn: &Connection, id: HouseId) -> Result<Option<House>> {
        Ok(conn
            .query_row(SELECT_HOUSE, [id.value()], row_to_house)
            .optional()?)
    }

    /// Lists all houses registered by a landlord, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_houses_by_landlord(conn: &Connection, landlord_id: &str) -> Result<Vec<House>> {
        let mut stmt = conn.prepare(LIST_BY_LANDLORD)?;
        let houses = stmt
            .query_map([landlord_id], row_to_house)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(houses)
    }

    /// Lists all houses currently accepting reservations, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_available_houses(conn: &Connection) -> Result<Vec<House>> {
        let mut stmt = conn.prepare(LIST_AVAILABLE)?;
        let houses = stmt
            .query_map([], row_to_house)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(houses)
    }

    /// Lists every house, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_all_houses(conn: &Connection) -> Result<Vec<House>> {
        let mut stmt = conn.prepare(LIST_ALL)?;
        let houses = stmt
            .query_map([], row_to_house)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(houses)
    }

    /// Writes a house's occupancy counters back to storage.
    ///
    /// Persists `max_occupants` as well, so a capacity resolved from the
    /// room type sticks after its first use.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the house row no longer exists.
    pub fn update_house_occupancy(conn: &Connection, house: &House) -> Result<()> {
        let updated = conn.execute(
            UPDATE_OCCUPANCY,
            params![
                house.max_occupants,
                house.current_occupants,
                house.is_available,
                house.id.value(),
            ],
        )?;
        if updated == 0 {
            return Err(Error::NotFound {
                resource: format!("house {}", house.id),
            });
        }
        Ok(())
    }
}
