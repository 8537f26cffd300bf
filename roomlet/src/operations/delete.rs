//! Reservation deletion (student cancellation).
//!
//! Only the reserving student may cancel. Cancelling an approved
//! reservation releases its occupancy slot and reopens the house when a
//! slot frees up, same as a revocation.

use chrono::{DateTime, Utc};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId, ReservationStatus, StudentId};

/// Options for deleting a reservation.
#[derive(Debug, Clone)]
pub struct DeleteReservationOptions {
    /// The reservation to delete.
    pub reservation_id: ReservationId,
    /// The student making the request. Must own the reservation.
    pub requester: StudentId,
    /// The current time; defaults to now. Tests pin this.
    pub now: Option<DateTime<Utc>>,
}

impl DeleteReservationOptions {
    /// Creates options with the required fields.
    #[must_use]
    pub fn new(reservation_id: ReservationId, requester: StudentId) -> Self {
        Self {
            reservation_id,
            requester,
            now: None,
        }
    }

    /// Pins the operation's notion of the current time.
    #[must_use]
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }
}

/// Deletes a reservation on behalf of its owner.
///
/// Runs as one IMMEDIATE transaction. If the reservation was approved,
/// its occupancy slot is released (clamped at zero) and the house's
/// availability recomputed before the row is removed.
///
/// Returns the reservation as it stood before deletion.
///
/// # Errors
///
/// - [`Error::NotFound`] if the reservation does not exist
/// - [`Error::Forbidden`] if the requester is not the reserving student
///
/// # Examples
///
/// ```no_run
/// use roomlet::database::{Database, DatabaseConfig};
/// use roomlet::operations::{delete_reservation, DeleteReservationOptions};
/// use roomlet::{ReservationId, StudentId};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/roomlet.db")).unwrap();
/// let requester = StudentId::new("student-1").unwrap();
/// let removed = delete_reservation(
///     &mut db,
///     DeleteReservationOptions::new(ReservationId::new(1), requester),
/// )
/// .unwrap();
/// println!("cancelled reservation on house {}", removed.house_id);
/// ```
pub fn delete_reservation(
    db: &mut Database,
    options: DeleteReservationOptions,
) -> Result<Reservation> {
    let now = options.now.unwrap_or_else(Utc::now);
    let tx = db.begin_transaction()?;

    Database::expire_due_pending(&tx, now)?;

    let reservation =
        Database::get_reservation(&tx, options.reservation_id)?.ok_or_else(|| Error::NotFound {
            resource: format!("reservation {}", options.reservation_id),
        })?;

    if reservation.student_id != options.requester {
        return Err(Error::Forbidden {
            details: "only the reserving student may cancel a reservation".to_string(),
        });
    }

    if reservation.status == ReservationStatus::Approved {
        let mut house =
            Database::get_house(&tx, reservation.house_id)?.ok_or_else(|| Error::NotFound {
                resource: format!("house {}", reservation.house_id),
            })?;
        if house.max_occupants.is_none() {
            house.max_occupants = Some(house.room_type.default_max_occupants());
        }
        house.current_occupants = house.current_occupants.saturating_sub(1);
        house.recompute_availability();
        Database::update_house_occupancy(&tx, &house)?;
    }

    Database::delete_reservation_row(&tx, reservation.id)?;
    tx.commit()?;

    log::debug!(
        "deleted reservation {} (was {}) on house {}",
        reservation.id,
        reservation.status,
        reservation.house_id
    );

    Ok(reservation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolvedConfig;
    use crate::database::test_util::{create_test_database, create_test_house};
    use crate::house::{HouseId, RoomType};
    use crate::operations::create::{create_reservation, CreateReservationOptions};
    use crate::operations::status::{update_reservation_status, UpdateStatusOptions};

    fn reserve(db: &mut Database, student: &str, house_id: HouseId) -> Reservation {
        create_reservation(
            db,
            &ResolvedConfig::default(),
            CreateReservationOptions::new(StudentId::new(student).unwrap(), house_id),
        )
        .unwrap()
    }

    fn student(id: &str) -> StudentId {
        StudentId::new(id).unwrap()
    }

    #[test]
    fn test_owner_deletes_pending() {
        let mut db = create_test_database();
        let house_id = db
            .create_house(&create_test_house("l1", RoomType::Double))
            .unwrap();
        let r = reserve(&mut db, "s1", house_id);

        let removed = delete_reservation(
            &mut db,
            DeleteReservationOptions::new(r.id, student("s1")),
        )
        .unwrap();
        assert_eq!(removed.id, r.id);

        assert!(Database::get_reservation(db.connection(), r.id)
            .unwrap()
            .is_none());

        // Pending never held a slot
        let house = Database::get_house(db.connection(), house_id)
            .unwrap()
            .unwrap();
        assert_eq!(house.current_occupants, 0);
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let mut db = create_test_database();
        let house_id = db
            .create_house(&create_test_house("l1", RoomType::Double))
            .unwrap();
        let r = reserve(&mut db, "s1", house_id);

        let err = delete_reservation(
            &mut db,
            DeleteReservationOptions::new(r.id, student("intruder")),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Forbidden { .. }));

        assert!(Database::get_reservation(db.connection(), r.id)
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_deleting_approved_releases_slot() {
        let mut db = create_test_database();
        let house_id = db
            .create_house(&create_test_house("l1", RoomType::Single))
            .unwrap();
        let r = reserve(&mut db, "s1", house_id);
        update_reservation_status(
            &mut db,
            UpdateStatusOptions::new(r.id, ReservationStatus::Approved),
        )
        .unwrap();

        let before = Database::get_house(db.connection(), house_id)
            .unwrap()
            .unwrap();
        assert!(!before.is_available);

        delete_reservation(
            &mut db,
            DeleteReservationOptions::new(r.id, student("s1")),
        )
        .unwrap();

        let after = Database::get_house(db.connection(), house_id)
            .unwrap()
            .unwrap();
        assert_eq!(after.current_occupants, 0);
        assert!(after.is_available);
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut db = create_test_database();
        let house_id = db
            .create_house(&create_test_house("l1", RoomType::Single))
            .unwrap();
        let r = reserve(&mut db, "s1", house_id);

        // Force an inconsistent zero count with an approved reservation
        Database::set_reservation_status(db.connection(), r.id, ReservationStatus::Approved)
            .unwrap();

        delete_reservation(
            &mut db,
            DeleteReservationOptions::new(r.id, student("s1")),
        )
        .unwrap();

        let house = Database::get_house(db.connection(), house_id)
            .unwrap()
            .unwrap();
        assert_eq!(house.current_occupants, 0);
        assert!(house.is_available);
    }

    #[test]
    fn test_delete_missing_reservation() {
        let mut db = create_test_database();
        let err = delete_reservation(
            &mut db,
            DeleteReservationOptions::new(ReservationId::new(404), student("s1")),
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
