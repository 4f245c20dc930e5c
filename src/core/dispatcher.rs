//! The allocation engine: best-fit matching with opportunistic
//! waiting-list reprocessing.

use serde::{Deserialize, Serialize};

use crate::core::{AssignmentLedger, Car, DispatchError, Fleet, Waitlist};
use crate::util::types::{valid_id, valid_seats, CarId, JourneyId, Seats};

/// Outcome of a journey submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyOutcome {
    /// Input failed validation; no state was touched.
    Rejected,
    /// No car fits right now; the journey waits in submission order.
    Queued,
    /// The journey was matched and the car removed from the fleet.
    Assigned(CarId),
}

/// Outcome of a drop-off request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropOffOutcome {
    /// The journey was waiting and has been unregistered.
    Removed(JourneyId),
    /// The journey is not waiting: unknown, already riding, or already
    /// dropped.
    NotFound,
}

/// Outcome of a locate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocateOutcome {
    /// The journey travels with this car.
    Assigned(CarId),
    /// The journey is still waiting for a fitting car.
    Waiting,
    /// The journey was never accepted, or was dropped off while waiting.
    NotFound,
}

/// Occupancy snapshot served by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Cars still available for assignment.
    pub cars_available: usize,
    /// Journeys waiting for a fitting car.
    pub journeys_waiting: usize,
    /// Journeys with a committed assignment.
    pub journeys_assigned: usize,
}

/// Policy knobs for dispatch behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchPolicy {
    /// Apply the bulk-load bounds to incremental adds as well.
    ///
    /// Historically the single-car add path accepted any entry while the
    /// bulk load validated and dropped. `false` preserves that permissive
    /// behavior; `true` makes `add_car` reject out-of-range cars.
    #[serde(default)]
    pub strict_add: bool,
}

/// The operation set the transport shell programs against.
///
/// One concrete implementation exists ([`Dispatcher`]); the trait keeps
/// handlers decoupled from engine internals.
pub trait CarPoolService {
    /// Occupancy snapshot for readiness and monitoring.
    fn status(&self) -> StatusSnapshot;

    /// Replace the whole fleet, silently dropping invalid entries.
    ///
    /// Waiting journeys and committed assignments survive the reload
    /// untouched, even though their original cars may be gone.
    fn load_cars(&mut self, cars: Vec<Car>);

    /// Add a single car, or update the seat count of an existing id.
    fn add_car(&mut self, car: Car) -> Result<CarId, DispatchError>;

    /// Submit a journey: replay the waiting list against the current
    /// fleet, then try to match this journey.
    fn journey(&mut self, id: JourneyId, people: Seats) -> JourneyOutcome;

    /// Unregister a waiting journey. A committed assignment is not
    /// released back to the fleet; seats only return via a full reload.
    fn drop_off(&mut self, id: JourneyId) -> DropOffOutcome;

    /// Where a journey currently stands. An assignment outranks a stale
    /// waiting entry.
    fn locate(&self, id: JourneyId) -> LocateOutcome;
}

/// Best-fit car pooling engine.
///
/// Owns the fleet, the waiting list, and the assignment ledger, and is
/// the only code that mutates more than one of them per call. Every
/// operation runs to completion synchronously; a concurrent host wraps
/// the whole engine in one mutex so a submission's reprocessing pass and
/// primary attempt are atomic with respect to other callers.
#[derive(Debug, Default)]
pub struct Dispatcher {
    policy: DispatchPolicy,
    fleet: Fleet,
    waitlist: Waitlist,
    assignments: AssignmentLedger,
}

impl Dispatcher {
    /// Create an engine with an empty fleet under `policy`.
    #[must_use]
    pub fn new(policy: DispatchPolicy) -> Self {
        Self {
            policy,
            fleet: Fleet::new(),
            waitlist: Waitlist::new(),
            assignments: AssignmentLedger::new(),
        }
    }

    /// One opportunistic pass over the waiting list.
    ///
    /// Works from a point-in-time snapshot in submission order. Each
    /// waiting journey is retried against the fleet as it stands after
    /// earlier matches in the same pass, and a fulfilled entry is
    /// recorded under its own id, not the id of the submission that
    /// triggered the pass.
    fn reprocess_waitlist(&mut self) {
        for (waiting_id, people) in self.waitlist.snapshot() {
            let Some(car_id) = self.fleet.best_fit(people) else {
                continue;
            };
            let _ = self.fleet.remove(car_id);
            let _ = self.waitlist.remove(waiting_id);
            self.assignments.record(waiting_id, car_id);
            tracing::info!(journey_id = waiting_id, car_id, "waiting journey assigned");
        }
    }
}

impl CarPoolService for Dispatcher {
    fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            cars_available: self.fleet.len(),
            journeys_waiting: self.waitlist.len(),
            journeys_assigned: self.assignments.len(),
        }
    }

    fn load_cars(&mut self, cars: Vec<Car>) {
        let offered = cars.len();
        self.fleet.replace(cars);
        tracing::info!(
            offered,
            loaded = self.fleet.len(),
            journeys_waiting = self.waitlist.len(),
            "fleet loaded"
        );
    }

    fn add_car(&mut self, car: Car) -> Result<CarId, DispatchError> {
        if self.policy.strict_add && !car.is_valid() {
            return Err(DispatchError::InvalidCar { id: car.id, seats: car.seats });
        }
        self.fleet.add_or_update(car);
        tracing::debug!(car_id = car.id, seats = car.seats, "car added");
        Ok(car.id)
    }

    fn journey(&mut self, id: JourneyId, people: Seats) -> JourneyOutcome {
        if !valid_id(id) || !valid_seats(people) {
            tracing::warn!(journey_id = id, people, "journey rejected");
            return JourneyOutcome::Rejected;
        }

        self.reprocess_waitlist();

        match self.fleet.best_fit(people) {
            Some(car_id) => {
                let _ = self.fleet.remove(car_id);
                self.assignments.record(id, car_id);
                tracing::info!(journey_id = id, car_id, "journey assigned");
                JourneyOutcome::Assigned(car_id)
            }
            None => {
                self.waitlist.enqueue(id, people);
                tracing::debug!(journey_id = id, people, "no fitting car, journey waiting");
                JourneyOutcome::Queued
            }
        }
    }

    fn drop_off(&mut self, id: JourneyId) -> DropOffOutcome {
        self.waitlist.remove(id).map_or_else(
            || DropOffOutcome::NotFound,
            |removed| {
                tracing::debug!(journey_id = removed, "waiting journey dropped off");
                DropOffOutcome::Removed(removed)
            },
        )
    }

    fn locate(&self, id: JourneyId) -> LocateOutcome {
        if let Some(car_id) = self.assignments.lookup(id) {
            LocateOutcome::Assigned(car_id)
        } else if self.waitlist.contains(id) {
            LocateOutcome::Waiting
        } else {
            LocateOutcome::NotFound
        }
    }
}
