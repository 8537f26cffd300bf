//! Property-based tests for the reservation lifecycle.
//!
//! These tests drive randomized operation sequences against a real
//! database and assert the occupancy invariants after every step.

use proptest::prelude::*;

use crate::config::ResolvedConfig;
use crate::database::test_util::{create_test_database, create_test_house};
use crate::database::Database;
use crate::house::RoomType;
use crate::operations::create::{create_reservation, CreateReservationOptions};
use crate::operations::delete::{delete_reservation, DeleteReservationOptions};
use crate::operations::status::{update_reservation_status, UpdateStatusOptions};
use crate::reservation::{ReservationId, ReservationStatus, StudentId};

/// One randomized action against the lifecycle.
#[derive(Debug, Clone)]
enum Action {
    Reserve(u8),
    SetStatus(u8, ReservationStatus),
    Delete(u8),
}

fn action_strategy() -> impl Strategy<Value = Action> {
    let status = prop_oneof![
        Just(ReservationStatus::Approved),
        Just(ReservationStatus::Rejected),
        Just(ReservationStatus::Waitlist),
    ];
    prop_oneof![
        (0u8..6).prop_map(Action::Reserve),
        ((0u8..6), status).prop_map(|(s, st)| Action::SetStatus(s, st)),
        (0u8..6).prop_map(Action::Delete),
    ]
}

fn student(idx: u8) -> StudentId {
    StudentId::new(format!("student-{idx}")).unwrap()
}

/// Property: no interleaving of lifecycle operations can break the
/// occupancy invariants.
///
/// After every operation, successful or not:
/// - `current_occupants <= max_occupants`
/// - `is_available == (current_occupants < max_occupants)`
/// - the number of approved reservations equals `current_occupants`
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_occupancy_invariants_hold(actions in prop::collection::vec(action_strategy(), 1..40)) {
        let mut db = create_test_database();
        let config = ResolvedConfig::default();
        let house_id = db
            .create_house(&create_test_house("l1", RoomType::Double))
            .unwrap();

        // Track the latest reservation id per student
        let mut latest: [Option<ReservationId>; 6] = [None; 6];

        for action in actions {
            match action {
                Action::Reserve(s) => {
                    if let Ok(r) = create_reservation(
                        &mut db,
                        &config,
                        CreateReservationOptions::new(student(s), house_id),
                    ) {
                        latest[s as usize] = Some(r.id);
                    }
                }
                Action::SetStatus(s, status) => {
                    if let Some(id) = latest[s as usize] {
                        let _ = update_reservation_status(
                            &mut db,
                            UpdateStatusOptions::new(id, status),
                        );
                    }
                }
                Action::Delete(s) => {
                    if let Some(id) = latest[s as usize] {
                        if delete_reservation(
                            &mut db,
                            DeleteReservationOptions::new(id, student(s)),
                        )
                        .is_ok()
                        {
                            latest[s as usize] = None;
                        }
                    }
                }
            }

            let house = Database::get_house(db.connection(), house_id)
                .unwrap()
                .unwrap();
            let max = house.effective_max_occupants();
            prop_assert!(house.current_occupants <= max);
            prop_assert_eq!(house.is_available, house.current_occupants < max);

            let approved = Database::list_reservations_for_house(db.connection(), house_id)
                .unwrap()
                .iter()
                .filter(|r| r.status == ReservationStatus::Approved)
                .count();
            prop_assert_eq!(approved as u32, house.current_occupants);
        }
    }
}

/// Property: terminal statuses admit no transitions, active statuses
/// never reach pending again.
proptest! {
    #[test]
    fn prop_state_machine_terminality(from_idx in 0u8..5, to_idx in 0u8..5) {
        let all = [
            ReservationStatus::Pending,
            ReservationStatus::Approved,
            ReservationStatus::Rejected,
            ReservationStatus::Expired,
            ReservationStatus::Waitlist,
        ];
        let from = all[from_idx as usize];
        let to = all[to_idx as usize];

        if from.is_terminal() {
            prop_assert!(!from.can_transition_to(to));
        }
        if to == ReservationStatus::Pending {
            prop_assert!(!from.can_transition_to(to));
        }
        // Only pending can expire
        if to == ReservationStatus::Expired && from != ReservationStatus::Pending {
            prop_assert!(!from.can_transition_to(to));
        }
    }
}

/// Property: the queue cap bounds active reservations at all times.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_queue_cap_bounds_active(multiplier in 1u32..4, attempts in 1u8..20) {
        let mut db = create_test_database();
        let config = ResolvedConfig {
            queue_multiplier: multiplier,
            ..ResolvedConfig::default()
        };
        let house_id = db
            .create_house(&create_test_house("l1", RoomType::Single))
            .unwrap();

        for i in 0..attempts {
            let _ = create_reservation(
                &mut db,
                &config,
                CreateReservationOptions::new(student(i), house_id),
            );
            let active =
                Database::count_active_reservations(db.connection(), house_id).unwrap();
            prop_assert!(active <= multiplier);
        }
    }
}
