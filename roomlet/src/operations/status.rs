//! Reservation status transitions.
//!
//! This is the heart of the lifecycle: approvals consume occupancy slots,
//! revocations release them, and filling the house parks every other
//! pending request on the waitlist. Each call runs as one IMMEDIATE
//! transaction, so the hard capacity check and the occupancy write can
//! never interleave with a concurrent approval.

use chrono::{DateTime, Utc};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::house::House;
use crate::reservation::{Reservation, ReservationId, ReservationStatus};

/// Options for a status update.
#[derive(Debug, Clone)]
pub struct UpdateStatusOptions {
    /// The reservation to update.
    pub reservation_id: ReservationId,
    /// The requested status.
    pub new_status: ReservationStatus,
    /// The current time; defaults to now. Tests pin this.
    pub now: Option<DateTime<Utc>>,
}

impl UpdateStatusOptions {
    /// Creates options with the required fields.
    #[must_use]
    pub fn new(reservation_id: ReservationId, new_status: ReservationStatus) -> Self {
        Self {
            reservation_id,
            new_status,
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

/// Result of a status update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// The reservation after the update.
    pub reservation: Reservation,
    /// Number of pending reservations moved to the waitlist because this
    /// update filled the house.
    pub waitlisted: usize,
}

/// Updates a reservation's status, applying the occupancy rules.
///
/// - Approving from pending or waitlist performs the hard capacity check
///   and increments occupancy. If the house is now full, every other
///   pending reservation on it moves to the waitlist in the same
///   transaction.
/// - Moving an approved reservation to rejected or waitlist releases its
///   slot (decrement clamped at zero).
/// - Setting the current status again is a no-op.
/// - Availability is recomputed from the counters after every update, so
///   a freed slot immediately reopens the house.
///
/// Past-due pending reservations are expired before the reservation is
/// read, so approving a stale request fails with an invalid transition.
///
/// # Errors
///
/// - [`Error::NotFound`] if the reservation or its house does not exist
/// - [`Error::InvalidTransition`] if the state machine forbids the change
/// - [`Error::HouseFull`] if an approval hits the hard capacity limit
///
/// # Examples
///
/// ```no_run
/// use roomlet::database::{Database, DatabaseConfig};
/// use roomlet::operations::{update_reservation_status, UpdateStatusOptions};
/// use roomlet::{ReservationId, ReservationStatus};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/roomlet.db")).unwrap();
/// let options = UpdateStatusOptions::new(ReservationId::new(1), ReservationStatus::Approved);
/// let update = update_reservation_status(&mut db, options).unwrap();
/// println!("{} pending moved to waitlist", update.waitlisted);
/// ```
pub fn update_reservation_status(
    db: &mut Database,
    options: UpdateStatusOptions,
) -> Result<StatusUpdate> {
    let now = options.now.unwrap_or_else(Utc::now);
    let tx = db.begin_transaction()?;

    Database::expire_due_pending(&tx, now)?;

    let mut reservation =
        Database::get_reservation(&tx, options.reservation_id)?.ok_or_else(|| Error::NotFound {
            resource: format!("reservation {}", options.reservation_id),
        })?;

    if reservation.status == options.new_status {
        tx.commit()?;
        return Ok(StatusUpdate {
            reservation,
            waitlisted: 0,
        });
    }

    if !reservation.status.can_transition_to(options.new_status) {
        return Err(Error::InvalidTransition {
            reservation_id: reservation.id,
            from: reservation.status,
            to: options.new_status,
        });
    }

    let mut house =
        Database::get_house(&tx, reservation.house_id)?.ok_or_else(|| Error::NotFound {
            resource: format!("house {}", reservation.house_id),
        })?;

    if house.max_occupants.is_none() {
        house.max_occupants = Some(house.room_type.default_max_occupants());
    }
    let max_occupants = house.effective_max_occupants();

    let mut waitlisted = 0;
    let was_approved = reservation.status == ReservationStatus::Approved;

    if options.new_status == ReservationStatus::Approved {
        if house.current_occupants >= max_occupants {
            return Err(Error::HouseFull {
                house_id: house.id,
                max_occupants,
            });
        }
        house.current_occupants += 1;
        if house.current_occupants == max_occupants {
            waitlisted = Database::waitlist_other_pending(&tx, house.id, reservation.id)?;
        }
    } else if was_approved {
        release_slot(&mut house);
    }

    reservation.status = options.new_status;
    Database::set_reservation_status(&tx, reservation.id, reservation.status)?;

    house.recompute_availability();
    Database::update_house_occupancy(&tx, &house)?;

    tx.commit()?;

    log::debug!(
        "reservation {} -> {}, house {} at {}/{}",
        reservation.id,
        reservation.status,
        house.id,
        house.current_occupants,
        max_occupants
    );

    Ok(StatusUpdate {
        reservation,
        waitlisted,
    })
}

/// Releases one occupancy slot, clamped at zero.
fn release_slot(house: &mut House) {
    house.current_occupants = house.current_occupants.saturating_sub(1);
}
