//! Integration tests for the full reservation lifecycle.
//!
//! Walks a listing from its first reservation through approvals,
//! auto-waitlisting at capacity, revocation, waitlist promotion, and
//! student cancellation, checking the occupancy counters at every step.

mod common;
use common::{create_test_config, create_test_database, HouseFixture};

use roomlet::operations::{
    approved_houses_for_student, create_reservation, delete_reservation, get_reservation,
    list_reservations_for_house, update_reservation_status, CreateReservationOptions,
    DeleteReservationOptions, UpdateStatusOptions,
};
use roomlet::{
    Database, Error, HouseId, Reservation, ReservationStatus, RoomType, StudentId,
};
use chrono::Utc;

fn student(id: &str) -> StudentId {
    StudentId::new(id).unwrap()
}

fn reserve(db: &mut Database, id: &str, house_id: HouseId) -> Reservation {
    create_reservation(
        db,
        &create_test_config(),
        CreateReservationOptions::new(student(id), house_id),
    )
    .unwrap()
}

fn set_status(db: &mut Database, reservation: &Reservation, status: ReservationStatus) -> usize {
    update_reservation_status(db, UpdateStatusOptions::new(reservation.id, status))
        .unwrap()
        .waitlisted
}

fn house_state(db: &mut Database, house_id: HouseId) -> (u32, bool) {
    let house = Database::get_house(db.connection(), house_id)
        .unwrap()
        .unwrap();
    (house.current_occupants, house.is_available)
}

#[test]
fn test_full_lifecycle_on_a_double() {
    let mut db = create_test_database();
    let house_id = HouseFixture::new()
        .with_room_type(RoomType::Double)
        .create(&mut db);

    // Four students request the same double room
    let r1 = reserve(&mut db, "s1", house_id);
    let r2 = reserve(&mut db, "s2", house_id);
    let r3 = reserve(&mut db, "s3", house_id);
    let r4 = reserve(&mut db, "s4", house_id);
    assert_eq!(house_state(&mut db, house_id), (0, true));

    // First approval takes one of two slots
    assert_eq!(set_status(&mut db, &r1, ReservationStatus::Approved), 0);
    assert_eq!(house_state(&mut db, house_id), (1, true));

    // Second approval fills the house and waitlists the remaining pending
    assert_eq!(set_status(&mut db, &r2, ReservationStatus::Approved), 2);
    assert_eq!(house_state(&mut db, house_id), (2, false));
    for r in [&r3, &r4] {
        let fetched = get_reservation(&mut db, r.id, Utc::now()).unwrap();
        assert_eq!(fetched.status, ReservationStatus::Waitlist);
    }

    // A full house admits no new reservations
    let err = create_reservation(
        &mut db,
        &create_test_config(),
        CreateReservationOptions::new(student("s5"), house_id),
    )
    .unwrap_err();
    assert!(matches!(err, Error::RoomFull { .. }));

    // Revoking an approval frees the slot and reopens the listing
    assert_eq!(set_status(&mut db, &r2, ReservationStatus::Rejected), 0);
    assert_eq!(house_state(&mut db, house_id), (1, true));

    // Manual promotion from the waitlist takes the freed slot; r4 is
    // already waitlisted, so refilling moves nothing
    assert_eq!(set_status(&mut db, &r3, ReservationStatus::Approved), 0);
    assert_eq!(house_state(&mut db, house_id), (2, false));
    let r4 = get_reservation(&mut db, r4.id, Utc::now()).unwrap();
    assert_eq!(r4.status, ReservationStatus::Waitlist);

    // The approved student shows up in their approved-houses view
    let approved = approved_houses_for_student(&mut db, &student("s3"), Utc::now()).unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].id, house_id);

    // Student cancellation releases the slot like a revocation does
    delete_reservation(
        &mut db,
        DeleteReservationOptions::new(r1.id, student("s1")),
    )
    .unwrap();
    assert_eq!(house_state(&mut db, house_id), (1, true));

    // Three reservations remain on the listing after the cancellation
    let remaining = list_reservations_for_house(&mut db, house_id, Utc::now()).unwrap();
    assert_eq!(remaining.len(), 3);
}

#[test]
fn test_approval_at_capacity_is_rejected_cleanly() {
    let mut db = create_test_database();
    let house_id = HouseFixture::new()
        .with_room_type(RoomType::Single)
        .create(&mut db);

    let r1 = reserve(&mut db, "s1", house_id);
    let r2 = reserve(&mut db, "s2", house_id);

    // Filling the single waitlists the other pending request
    assert_eq!(set_status(&mut db, &r1, ReservationStatus::Approved), 1);

    // Promoting it while the house is full must fail without side effects
    let err = update_reservation_status(
        &mut db,
        UpdateStatusOptions::new(r2.id, ReservationStatus::Approved),
    )
    .unwrap_err();
    assert!(matches!(err, Error::HouseFull { max_occupants: 1, .. }));
    assert_eq!(house_state(&mut db, house_id), (1, false));

    let r2 = get_reservation(&mut db, r2.id, Utc::now()).unwrap();
    assert_eq!(r2.status, ReservationStatus::Waitlist);
}

#[test]
fn test_stated_capacity_overrides_room_type_default() {
    let mut db = create_test_database();
    let house_id = HouseFixture::new()
        .with_room_type(RoomType::Dorm)
        .with_max_occupants(2)
        .create(&mut db);

    let r1 = reserve(&mut db, "s1", house_id);
    let r2 = reserve(&mut db, "s2", house_id);
    set_status(&mut db, &r1, ReservationStatus::Approved);
    set_status(&mut db, &r2, ReservationStatus::Approved);

    // The stated capacity of 2 wins over the dorm default of 4
    assert_eq!(house_state(&mut db, house_id), (2, false));
}

#[test]
fn test_duplicate_active_reservation_rejected() {
    let mut db = create_test_database();
    let house_id = HouseFixture::new().create(&mut db);

    let r1 = reserve(&mut db, "s1", house_id);

    let err = create_reservation(
        &mut db,
        &create_test_config(),
        CreateReservationOptions::new(student("s1"), house_id),
    )
    .unwrap_err();
    assert!(matches!(err, Error::DuplicateReservation { .. }));

    // An approved reservation still blocks a second request
    set_status(&mut db, &r1, ReservationStatus::Approved);
    let err = create_reservation(
        &mut db,
        &create_test_config(),
        CreateReservationOptions::new(student("s1"), house_id),
    )
    .unwrap_err();
    assert!(matches!(err, Error::DuplicateReservation { .. }));

    // A rejected one no longer does
    set_status(&mut db, &r1, ReservationStatus::Rejected);
    reserve(&mut db, "s1", house_id);
}

#[test]
fn test_queue_cap_counts_pending_and_approved() {
    let mut db = create_test_database();
    let house_id = HouseFixture::new()
        .with_room_type(RoomType::Single)
        .create(&mut db);

    // Single with multiplier 5 admits five active reservations
    let first = reserve(&mut db, "s1", house_id);
    for id in ["s2", "s3", "s4", "s5"] {
        reserve(&mut db, id, house_id);
    }

    let err = create_reservation(
        &mut db,
        &create_test_config(),
        CreateReservationOptions::new(student("s6"), house_id),
    )
    .unwrap_err();
    assert!(matches!(err, Error::RoomFull { .. }));

    // Waitlisted reservations do not count against the cap
    set_status(&mut db, &first, ReservationStatus::Waitlist);
    reserve(&mut db, "s6", house_id);
}
