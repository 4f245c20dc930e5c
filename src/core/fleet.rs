//! Fleet ledger: the cars still available for assignment, and the
//! best-fit search over them.

use serde::{Deserialize, Serialize};

use crate::util::types::{valid_id, valid_seats, CarId, Seats};

/// A car offering a fixed block of seats to exactly one journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Unique car identifier.
    pub id: CarId,
    /// Seats the car offers. Consumed whole; never split across journeys.
    pub seats: Seats,
}

impl Car {
    /// True when the car satisfies the id and seat bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        valid_id(self.id) && valid_seats(self.seats)
    }
}

/// Insertion-ordered ledger of available cars.
///
/// A car leaves the ledger only by being matched to a journey or by a
/// bulk reload; there is no automatic return of capacity. Iteration is
/// insertion order, which is what makes `best_fit` ties deterministic.
#[derive(Debug, Default)]
pub struct Fleet {
    cars: Vec<Car>,
}

impl Fleet {
    /// Create an empty fleet.
    #[must_use]
    pub const fn new() -> Self {
        Self { cars: Vec::new() }
    }

    /// Replace the whole ledger with `cars`, silently dropping entries
    /// that violate the id or seat bounds. Duplicated ids keep the last
    /// entry, at the position of the first.
    pub fn replace(&mut self, cars: Vec<Car>) {
        self.cars.clear();
        for car in cars {
            if car.is_valid() {
                self.add_or_update(car);
            } else {
                tracing::debug!(car_id = car.id, seats = car.seats, "dropping invalid car from load");
            }
        }
    }

    /// Insert a car, or update the seat count of an existing id in place
    /// (keeping its position). No bounds are enforced here; the caller
    /// owns the validation policy.
    pub fn add_or_update(&mut self, car: Car) {
        if let Some(existing) = self.cars.iter_mut().find(|c| c.id == car.id) {
            existing.seats = car.seats;
        } else {
            self.cars.push(car);
        }
    }

    /// Detach and return the car with `id`, if present.
    pub fn remove(&mut self, id: CarId) -> Option<Car> {
        let idx = self.cars.iter().position(|c| c.id == id)?;
        Some(self.cars.remove(idx))
    }

    /// Find the car that leaves the fewest seats empty when serving
    /// `demand`.
    ///
    /// Scans in insertion order; among cars with `seats >= demand` the
    /// smallest leftover wins, and on equal leftover the earliest-loaded
    /// car is kept. `None` when no car fits.
    #[must_use]
    pub fn best_fit(&self, demand: Seats) -> Option<CarId> {
        let mut best: Option<(CarId, Seats)> = None;
        for car in &self.cars {
            if car.seats < demand {
                continue;
            }
            let leftover = car.seats - demand;
            match best {
                Some((_, current)) if current <= leftover => {}
                _ => best = Some((car.id, leftover)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Number of cars currently available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// True when no cars are available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Iterate the ledger in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter()
    }
}
