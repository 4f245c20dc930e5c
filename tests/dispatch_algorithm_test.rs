//! Integration tests for the dispatch engine.
//!
//! Covers fleet-load filtering, best-fit selection, queueing on no fit,
//! input rejection, tie-breaking, drop-off idempotence, and the
//! waiting-list reprocessing protocol after fleet changes.

use carpool_dispatch::core::{
    Car, CarPoolService, DispatchPolicy, Dispatcher, DropOffOutcome, JourneyOutcome, LocateOutcome,
};

fn dispatcher_with(cars: &[(i64, i64)]) -> Dispatcher {
    let mut dispatcher = Dispatcher::new(DispatchPolicy::default());
    dispatcher.load_cars(cars.iter().map(|&(id, seats)| Car { id, seats }).collect());
    dispatcher
}

#[test]
fn load_keeps_only_valid_cars() {
    let mut dispatcher = dispatcher_with(&[(1, -2), (-2, 3), (3, 0), (0, 4), (2, 3), (6, 7)]);
    assert_eq!(dispatcher.status().cars_available, 1);

    // The one surviving entry is car 2 with 3 seats.
    assert_eq!(dispatcher.journey(1, 3), JourneyOutcome::Assigned(2));
}

#[test]
fn best_fit_picks_the_only_qualifying_car() {
    let mut dispatcher = dispatcher_with(&[(1, 3), (2, 4), (3, 6)]);
    assert_eq!(dispatcher.journey(1, 5), JourneyOutcome::Assigned(3));
}

#[test]
fn best_fit_minimizes_leftover_seats() {
    let mut dispatcher = dispatcher_with(&[(1, 3), (4, 4), (7, 6)]);
    // Leftovers would be 2, 3, and 5; car 1 wins.
    assert_eq!(dispatcher.journey(9, 1), JourneyOutcome::Assigned(1));
}

#[test]
fn no_fit_queues_the_journey() {
    let mut dispatcher = dispatcher_with(&[(1, 2), (2, 3)]);
    assert_eq!(dispatcher.journey(1, 5), JourneyOutcome::Queued);
    assert_eq!(dispatcher.locate(1), LocateOutcome::Waiting);
    assert_eq!(dispatcher.status().cars_available, 2);
}

#[test]
fn empty_fleet_queues_the_journey() {
    let mut dispatcher = dispatcher_with(&[]);
    assert_eq!(dispatcher.journey(1, 5), JourneyOutcome::Queued);
}

#[test]
fn oversized_demand_is_rejected_regardless_of_fleet() {
    let mut dispatcher = dispatcher_with(&[(1, 6)]);
    assert_eq!(dispatcher.journey(1, 7), JourneyOutcome::Rejected);
    assert_eq!(dispatcher.locate(1), LocateOutcome::NotFound);
    assert_eq!(dispatcher.status().cars_available, 1);
}

#[test]
fn drop_off_is_idempotent() {
    let mut dispatcher = dispatcher_with(&[]);
    assert_eq!(dispatcher.journey(1, 6), JourneyOutcome::Queued);
    assert_eq!(dispatcher.drop_off(1), DropOffOutcome::Removed(1));
    assert_eq!(dispatcher.drop_off(1), DropOffOutcome::NotFound);
    assert_eq!(dispatcher.locate(1), LocateOutcome::NotFound);
}

#[test]
fn drop_off_of_unknown_journey_is_not_found() {
    let mut dispatcher = dispatcher_with(&[(1, 4)]);
    assert_eq!(dispatcher.drop_off(99), DropOffOutcome::NotFound);
}

#[test]
fn reprocessing_replays_the_waitlist_in_submission_order() {
    let mut dispatcher = dispatcher_with(&[(10, 2)]);

    // Only journey 3 can ride immediately.
    assert_eq!(dispatcher.journey(1, 5), JourneyOutcome::Queued);
    assert_eq!(dispatcher.journey(2, 4), JourneyOutcome::Queued);
    assert_eq!(dispatcher.journey(3, 2), JourneyOutcome::Assigned(10));
    assert_eq!(dispatcher.journey(4, 3), JourneyOutcome::Queued);
    assert_eq!(dispatcher.status().journeys_waiting, 3);

    // A reload brings capacity; the waitlist is untouched until the next
    // submission triggers a reprocessing pass.
    dispatcher.load_cars(vec![Car { id: 20, seats: 5 }, Car { id: 21, seats: 4 }]);
    assert_eq!(dispatcher.locate(1), LocateOutcome::Waiting);
    assert_eq!(dispatcher.locate(2), LocateOutcome::Waiting);

    // The pass serves 1 then 2 from the snapshot, in their original
    // order and under their own ids; 4 still has no car, and neither
    // does the new journey.
    assert_eq!(dispatcher.journey(5, 6), JourneyOutcome::Queued);
    assert_eq!(dispatcher.locate(1), LocateOutcome::Assigned(20));
    assert_eq!(dispatcher.locate(2), LocateOutcome::Assigned(21));
    assert_eq!(dispatcher.locate(4), LocateOutcome::Waiting);
    assert_eq!(dispatcher.locate(5), LocateOutcome::Waiting);

    let status = dispatcher.status();
    assert_eq!(status.cars_available, 0);
    assert_eq!(status.journeys_waiting, 2);
    assert_eq!(status.journeys_assigned, 3);
}

#[test]
fn earlier_waiting_journey_takes_the_car_the_new_one_wanted() {
    let mut dispatcher = dispatcher_with(&[]);
    assert_eq!(dispatcher.journey(1, 4), JourneyOutcome::Queued);

    dispatcher.load_cars(vec![Car { id: 7, seats: 4 }]);

    // The waiting journey outranks the submission that triggered the
    // pass, even though both fit the single car.
    assert_eq!(dispatcher.journey(2, 4), JourneyOutcome::Queued);
    assert_eq!(dispatcher.locate(1), LocateOutcome::Assigned(7));
    assert_eq!(dispatcher.locate(2), LocateOutcome::Waiting);
}

#[test]
fn reload_preserves_assignments_and_waiting_entries() {
    let mut dispatcher = dispatcher_with(&[(1, 4)]);
    assert_eq!(dispatcher.journey(1, 4), JourneyOutcome::Assigned(1));
    assert_eq!(dispatcher.journey(2, 6), JourneyOutcome::Queued);

    dispatcher.load_cars(vec![]);

    assert_eq!(dispatcher.locate(1), LocateOutcome::Assigned(1));
    assert_eq!(dispatcher.locate(2), LocateOutcome::Waiting);
    // An assigned journey is not waiting, so there is nothing to drop.
    assert_eq!(dispatcher.drop_off(1), DropOffOutcome::NotFound);
}

#[test]
fn resubmission_updates_demand_and_keeps_queue_position() {
    let mut dispatcher = dispatcher_with(&[]);
    assert_eq!(dispatcher.journey(1, 6), JourneyOutcome::Queued);
    assert_eq!(dispatcher.journey(2, 5), JourneyOutcome::Queued);
    assert_eq!(dispatcher.journey(1, 2), JourneyOutcome::Queued);
    assert_eq!(dispatcher.status().journeys_waiting, 2);

    dispatcher.load_cars(vec![Car { id: 9, seats: 2 }]);

    // Journey 1 kept its head-of-queue slot with the updated demand.
    assert_eq!(dispatcher.journey(3, 6), JourneyOutcome::Queued);
    assert_eq!(dispatcher.locate(1), LocateOutcome::Assigned(9));
    assert_eq!(dispatcher.locate(2), LocateOutcome::Waiting);
}

#[test]
fn permissive_add_extends_the_fleet_beyond_load_bounds() {
    let mut dispatcher = dispatcher_with(&[]);
    assert_eq!(dispatcher.add_car(Car { id: 1, seats: 9 }).unwrap(), 1);

    // The oversize car is a real fleet member and can serve any demand
    // up to the journey ceiling.
    assert_eq!(dispatcher.journey(1, 6), JourneyOutcome::Assigned(1));
}

#[test]
fn add_car_updates_an_existing_entry() {
    let mut dispatcher = dispatcher_with(&[(1, 2)]);
    assert_eq!(dispatcher.add_car(Car { id: 1, seats: 6 }).unwrap(), 1);
    assert_eq!(dispatcher.status().cars_available, 1);
    assert_eq!(dispatcher.journey(1, 5), JourneyOutcome::Assigned(1));
}
