//! Database operations for reservation records.
//!
//! Row mapping and CRUD for the reservations table, plus the bulk queries
//! the lifecycle operations run inside their transactions: active counts,
//! duplicate lookup, bulk waitlisting, and the expiry sweep.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::error::Result;
use crate::house::HouseId;
use crate::reservation::{Reservation, ReservationId, ReservationStatus, StudentId};

use super::connection::Database;
use super::houses::{datetime_to_unix_secs, unix_secs_to_datetime};
use super::schema::{DELETE_RESERVATION, INSERT_RESERVATION};

/// Deserializes a reservation from a database row.
///
/// Expects fields in this order: id, `student_id`, `house_id`, status,
/// `created_at`, `expires_at`.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let student_id: String = row.get(1)?;
    let house_id: i64 = row.get(2)?;
    let status_str: String = row.get(3)?;
    let created_secs: i64 = row.get(4)?;
    let expires_secs: i64 = row.get(5)?;

    let student_id = StudentId::new(student_id)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e)))?;

    let status: ReservationStatus = status_str
        .parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e)))?;

    let created_at = unix_secs_to_datetime(created_secs)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Integer, Box::new(e)))?;
    let expires_at = unix_secs_to_datetime(expires_secs)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Integer, Box::new(e)))?;

    Ok(Reservation {
        id: ReservationId::new(id),
        student_id,
        house_id: HouseId::new(house_id),
        status,
        created_at,
        expires_at,
    })
}

const SELECT_RESERVATION: &str = r"
    SELECT id, student_id, house_id, status, created_at, expires_at
    FROM reservations
    WHERE id = ?
";

const LIST_BY_STUDENT: &str = r"
    SELECT id, student_id, house_id, status, created_at, expires_at
    FROM reservations
    WHERE student_id = ?
    ORDER BY created_at DESC, id DESC
";

const LIST_BY_HOUSE: &str = r"
    SELECT id, student_id, house_id, status, created_at, expires_at
    FROM reservations
    WHERE house_id = ?
    ORDER BY created_at DESC, id DESC
";

const COUNT_ACTIVE: &str = r"
    SELECT COUNT(*)
    FROM reservations
    WHERE house_id = ? AND status IN ('pending', 'approved')
";

const FIND_ACTIVE_FOR_STUDENT: &str = r"
    SELECT id, student_id, house_id, status, created_at, expires_at
    FROM reservations
    WHERE student_id = ? AND house_id = ? AND status IN ('pending', 'approved')
    LIMIT 1
";

const WAITLIST_OTHER_PENDING: &str = r"
    UPDATE reservations
    SET status = 'waitlist'
    WHERE house_id = ? AND status = 'pending' AND id != ?
";

const EXPIRE_DUE_PENDING: &str = r"
    UPDATE reservations
    SET status = 'expired'
    WHERE status = 'pending' AND expires_at < ?
";

const UPDATE_STATUS: &str = "UPDATE reservations SET status = ? WHERE id = ?";

const SELECT_APPROVED_HOUSE_IDS: &str = r"
    SELECT DISTINCT house_id
    FROM reservations
    WHERE student_id = ? AND status = 'approved'
    ORDER BY house_id
";

impl Database {
    /// Creates a reservation row and returns its assigned id.
    ///
    /// Runs in its own IMMEDIATE transaction. The lifecycle-level
    /// admission checks live in [`crate::operations`]; this is the bare
    /// row insert.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the transaction cannot be
    /// started or committed.
    pub fn create_reservation(&mut self, reservation: &Reservation) -> Result<ReservationId> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let id = Self::insert_reservation(&tx, reservation)?;
        tx.commit()?;
        Ok(id)
    }

    /// Inserts a reservation using a caller-held connection or transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_reservation(conn: &Connection, reservation: &Reservation) -> Result<ReservationId> {
        conn.execute(
            INSERT_RESERVATION,
            params![
                reservation.student_id.as_str(),
                reservation.house_id.value(),
                reservation.status.as_str(),
                datetime_to_unix_secs(reservation.created_at),
                datetime_to_unix_secs(reservation.expires_at),
            ],
        )?;
        Ok(ReservationId::new(conn.last_insert_rowid()))
    }

    /// Retrieves a reservation by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(reservation))` if it exists
    /// - `Ok(None)` if it doesn't
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_reservation(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
        Ok(conn
            .query_row(SELECT_RESERVATION, [id.value()], row_to_reservation)
            .optional()?)
    }

    /// Lists a student's reservations, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations_for_student(
        conn: &Connection,
        student_id: &StudentId,
    ) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_BY_STUDENT)?;
        let reservations = stmt
            .query_map([student_id.as_str()], row_to_reservation)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(reservations)
    }

    /// Lists a house's reservations, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations_for_house(
        conn: &Connection,
        house_id: HouseId,
    ) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_BY_HOUSE)?;
        let reservations = stmt
            .query_map([house_id.value()], row_to_reservation)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(reservations)
    }

    /// Counts a house's active (pending or approved) reservations.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_active_reservations(conn: &Connection, house_id: HouseId) -> Result<u32> {
        Ok(conn.query_row(COUNT_ACTIVE, [house_id.value()], |row| row.get(0))?)
    }

    /// Finds a student's active reservation on a house, if any.
    ///
    /// At most one can exist per (student, house); this is the duplicate
    /// check run before admitting a new reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_active_reservation(
        conn: &Connection,
        student_id: &StudentId,
        house_id: HouseId,
    ) -> Result<Option<Reservation>> {
        Ok(conn
            .query_row(
                FIND_ACTIVE_FOR_STUDENT,
                params![student_id.as_str(), house_id.value()],
                row_to_reservation,
            )
            .optional()?)
    }

    /// Moves every other pending reservation on a house to the waitlist.
    ///
    /// Called when an approval fills the house, in the same transaction as
    /// the approval itself. Returns the number of reservations waitlisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn waitlist_other_pending(
        conn: &Connection,
        house_id: HouseId,
        exclude: ReservationId,
    ) -> Result<usize> {
        Ok(conn.execute(
            WAITLIST_OTHER_PENDING,
            params![house_id.value(), exclude.value()],
        )?)
    }

    /// Flips every pending reservation past its deadline to expired.
    ///
    /// Returns the number of reservations expired.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn expire_due_pending(conn: &Connection, now: DateTime<Utc>) -> Result<usize> {
        Ok(conn.execute(EXPIRE_DUE_PENDING, [datetime_to_unix_secs(now)])?)
    }

    /// Writes a reservation's status back to storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn set_reservation_status(
        conn: &Connection,
        id: ReservationId,
        status: ReservationStatus,
    ) -> Result<()> {
        conn.execute(UPDATE_STATUS, params![status.as_str(), id.value()])?;
        Ok(())
    }

    /// Deletes a reservation row. Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_reservation_row(conn: &Connection, id: ReservationId) -> Result<usize> {
        Ok(conn.execute(DELETE_RESERVATION, [id.value()])?)
    }

    /// Lists the ids of houses where a student holds an approved
    /// reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_approved_house_ids(
        conn: &Connection,
        student_id: &StudentId,
    ) -> Result<Vec<HouseId>> {
        let mut stmt = conn.prepare(SELECT_APPROVED_HOUSE_IDS)?;
        let ids = stmt
            .query_map([student_id.as_str()], |row| {
                let id: i64 = row.get(0)?;
                Ok(HouseId::new(id))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(ids)
    }
}
