//! Waiting list for journeys with no currently-fitting car.

use crate::util::types::{JourneyId, Seats};

/// Insertion-ordered set of journeys waiting for a car.
///
/// Re-enqueueing an id keeps its original queue position and updates the
/// demand; the latest submission wins. Order is what the reprocessing
/// pass replays, so it is part of the engine's contract.
#[derive(Debug, Default)]
pub struct Waitlist {
    entries: Vec<(JourneyId, Seats)>,
}

impl Waitlist {
    /// Create an empty waiting list.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert a journey, or update the demand of one already waiting.
    pub fn enqueue(&mut self, id: JourneyId, people: Seats) {
        if let Some(entry) = self.entries.iter_mut().find(|(waiting, _)| *waiting == id) {
            entry.1 = people;
        } else {
            self.entries.push((id, people));
        }
    }

    /// Remove a waiting journey, returning its id when it was present.
    pub fn remove(&mut self, id: JourneyId) -> Option<JourneyId> {
        let idx = self.entries.iter().position(|(waiting, _)| *waiting == id)?;
        self.entries.remove(idx);
        Some(id)
    }

    /// True when `id` is still waiting.
    #[must_use]
    pub fn contains(&self, id: JourneyId) -> bool {
        self.entries.iter().any(|(waiting, _)| *waiting == id)
    }

    /// Point-in-time copy of the queue in insertion order.
    ///
    /// Entries enqueued after the snapshot was taken are not in it, so a
    /// reprocessing pass never revisits journeys it parked itself.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(JourneyId, Seats)> {
        self.entries.clone()
    }

    /// Number of waiting journeys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
