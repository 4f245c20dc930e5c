//! Ledger of committed journey-to-car assignments.

use std::collections::HashMap;

use crate::util::types::{CarId, JourneyId};

/// One-way record of which car each journey was given.
///
/// Entries live for the whole process: dropping a journey off does not
/// erase its assignment, and a fleet reload leaves the ledger untouched
/// even though the recorded cars are gone from the pool.
#[derive(Debug, Default)]
pub struct AssignmentLedger {
    by_journey: HashMap<JourneyId, CarId>,
}

impl AssignmentLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self { by_journey: HashMap::new() }
    }

    /// Record that `journey_id` travels with `car_id`.
    pub fn record(&mut self, journey_id: JourneyId, car_id: CarId) {
        self.by_journey.insert(journey_id, car_id);
    }

    /// Car assigned to `journey_id`, if any.
    #[must_use]
    pub fn lookup(&self, journey_id: JourneyId) -> Option<CarId> {
        self.by_journey.get(&journey_id).copied()
    }

    /// Number of committed assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_journey.len()
    }

    /// True when no assignment has been committed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_journey.is_empty()
    }
}
