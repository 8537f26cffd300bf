//! Read operations with lazy expiry applied.
//!
//! Every query here starts by expiring past-due pending reservations
//! inside the same transaction it reads from, so callers never observe a
//! pending reservation that is already past its deadline.

use chrono::{DateTime, Utc};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::house::{House, HouseId};
use crate::reservation::{Reservation, ReservationId, StudentId};

/// Fetches a reservation by id, expiring due reservations first.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the reservation does not exist.
///
/// # Examples
///
/// ```no_run
/// use chrono::Utc;
/// use roomlet::database::{Database, DatabaseConfig};
/// use roomlet::operations::get_reservation;
/// use roomlet::ReservationId;
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/roomlet.db")).unwrap();
/// let reservation = get_reservation(&mut db, ReservationId::new(1), Utc::now()).unwrap();
/// println!("status: {}", reservation.status);
/// ```
pub fn get_reservation(
    db: &mut Database,
    id: ReservationId,
    now: DateTime<Utc>,
) -> Result<Reservation> {
    let tx = db.begin_transaction()?;
    Database::expire_due_pending(&tx, now)?;
    let reservation = Database::get_reservation(&tx, id)?.ok_or_else(|| Error::NotFound {
        resource: format!("reservation {id}"),
    })?;
    tx.commit()?;
    Ok(reservation)
}

/// Lists a student's reservations, newest first, expiring due ones first.
///
/// # Errors
///
/// Returns an error if the database operations fail.
pub fn list_reservations_for_student(
    db: &mut Database,
    student_id: &StudentId,
    now: DateTime<Utc>,
) -> Result<Vec<Reservation>> {
    let tx = db.begin_transaction()?;
    Database::expire_due_pending(&tx, now)?;
    let reservations = Database::list_reservations_for_student(&tx, student_id)?;
    tx.commit()?;
    Ok(reservations)
}

/// Lists a house's reservations, newest first, expiring due ones first.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the house does not exist.
pub fn list_reservations_for_house(
    db: &mut Database,
    house_id: HouseId,
    now: DateTime<Utc>,
) -> Result<Vec<Reservation>> {
    let tx = db.begin_transaction()?;
    Database::expire_due_pending(&tx, now)?;
    if Database::get_house(&tx, house_id)?.is_none() {
        return Err(Error::NotFound {
            resource: format!("house {house_id}"),
        });
    }
    let reservations = Database::list_reservations_for_house(&tx, house_id)?;
    tx.commit()?;
    Ok(reservations)
}

/// Finds a student's active reservation on a house, if any.
///
/// Active means pending or approved. Due pending reservations are expired
/// first, so a stale request never shows up as active.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the house does not exist.
pub fn find_reservation_for_student(
    db: &mut Database,
    student_id: &StudentId,
    house_id: HouseId,
    now: DateTime<Utc>,
) -> Result<Option<Reservation>> {
    let tx = db.begin_transaction()?;
    Database::expire_due_pending(&tx, now)?;
    if Database::get_house(&tx, house_id)?.is_none() {
        return Err(Error::NotFound {
            resource: format!("house {house_id}"),
        });
    }
    let reservation = Database::find_active_reservation(&tx, student_id, house_id)?;
    tx.commit()?;
    Ok(reservation)
}

/// Lists the houses where a student holds an approved reservation.
///
/// # Errors
///
/// Returns an error if the database operations fail, or a corruption
/// error if an approved reservation points at a missing house.
pub fn approved_houses_for_student(
    db: &mut Database,
    student_id: &StudentId,
    now: DateTime<Utc>,
) -> Result<Vec<House>> {
    let tx = db.begin_transaction()?;
    Database::expire_due_pending(&tx, now)?;
    let ids = Database::list_approved_house_ids(&tx, student_id)?;
    let mut houses = Vec::with_capacity(ids.len());
    for id in ids {
        let house = Database::get_house(&tx, id)?.ok_or_else(|| Error::DatabaseCorruption {
            details: format!("approved reservation references missing house {id}"),
        })?;
        houses.push(house);
    }
    tx.commit()?;
    Ok(houses)
}
