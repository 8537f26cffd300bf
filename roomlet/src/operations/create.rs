//! Reservation creation with admission control.
//!
//! Creating a reservation admits the student into the house's queue. The
//! whole check-and-insert runs in one IMMEDIATE transaction, so two
//! concurrent requests for the last queue slot serialize.

use chrono::{DateTime, Utc};

use crate::config::ResolvedConfig;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::house::HouseId;
use crate::reservation::{Reservation, ReservationBuilder, StudentId};

/// Options for creating a reservation.
///
/// # Examples
///
/// ```
/// use roomlet::operations::CreateReservationOptions;
/// use roomlet::{HouseId, StudentId};
///
/// let student = StudentId::new("student-1").unwrap();
/// let options = CreateReservationOptions::new(student, HouseId::new(3));
/// ```
#[derive(Debug, Clone)]
pub struct CreateReservationOptions {
    /// The reserving student.
    pub student_id: StudentId,
    /// The house to reserve.
    pub house_id: HouseId,
    /// The current time; defaults to now. Tests pin this.
    pub now: Option<DateTime<Utc>>,
}

impl CreateReservationOptions {
    /// Creates options with the required fields.
    #[must_use]
    pub fn new(student_id: StudentId, house_id: HouseId) -> Self {
        Self {
            student_id,
            house_id,
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

/// Creates a pending reservation, enforcing the admission rules.
///
/// The checks and the insert run in a single IMMEDIATE transaction:
///
/// 1. Past-due pending reservations are expired first, so a stale request
///    never blocks a new one.
/// 2. The house must exist and be accepting reservations; its capacity is
///    resolved from the room type and persisted if it was unset.
/// 3. The house's active queue (pending + approved) must be below
///    `max_occupants * queue_multiplier`.
/// 4. The student must not already hold an active reservation here.
///
/// # Errors
///
/// - [`Error::NotFound`] if the house does not exist
/// - [`Error::RoomFull`] if the house is unavailable or its queue is full
/// - [`Error::DuplicateReservation`] if the student already has an active
///   reservation on this house
///
/// # Examples
///
/// ```no_run
/// use roomlet::config::ResolvedConfig;
/// use roomlet::database::{Database, DatabaseConfig};
/// use roomlet::operations::{create_reservation, CreateReservationOptions};
/// use roomlet::{HouseId, StudentId};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/roomlet.db")).unwrap();
/// let config = ResolvedConfig::default();
///
/// let student = StudentId::new("student-1").unwrap();
/// let options = CreateReservationOptions::new(student, HouseId::new(3));
/// let reservation = create_reservation(&mut db, &config, options).unwrap();
/// println!("reservation {} expires {}", reservation.id, reservation.expires_at);
/// ```
pub fn create_reservation(
    db: &mut Database,
    config: &ResolvedConfig,
    options: CreateReservationOptions,
) -> Result<Reservation> {
    let now = options.now.unwrap_or_else(Utc::now);
    // Storage keeps Unix seconds; truncate so the returned record matches
    // what every later read produces
    let now = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);
    let tx = db.begin_transaction()?;

    Database::expire_due_pending(&tx, now)?;

    let mut house = Database::get_house(&tx, options.house_id)?.ok_or_else(|| Error::NotFound {
        resource: format!("house {}", options.house_id),
    })?;

    // Persist the capacity the first time it is resolved
    if house.max_occupants.is_none() {
        house.max_occupants = Some(house.room_type.default_max_occupants());
        Database::update_house_occupancy(&tx, &house)?;
    }
    let max_occupants = house.effective_max_occupants();

    if !house.is_available {
        return Err(Error::RoomFull {
            house_id: house.id,
        });
    }

    let active = Database::count_active_reservations(&tx, house.id)?;
    let queue_cap = max_occupants * config.queue_multiplier;
    if active >= queue_cap {
        return Err(Error::RoomFull {
            house_id: house.id,
        });
    }

    if Database::find_active_reservation(&tx, &options.student_id, house.id)?.is_some() {
        return Err(Error::DuplicateReservation {
            student_id: options.student_id.as_str().to_string(),
            house_id: house.id,
        });
    }

    let mut reservation = ReservationBuilder::new(options.student_id.as_str(), house.id)
        .created_at(now)
        .ttl_days(config.ttl_days)
        .build()?;
    reservation.id = Database::insert_reservation(&tx, &reservation)?;

    tx.commit()?;

    log::debug!(
        "created reservation {} for student {} on house {}",
        reservation.id,
        reservation.student_id,
        reservation.house_id
    );

    Ok(reservation)
}
