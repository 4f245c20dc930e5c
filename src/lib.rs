//! # Carpool Dispatch
//!
//! A best-fit car pooling service: groups of people ("journeys") request
//! a block of seats, a fleet of fixed-capacity cars serves them, and
//! journeys that cannot ride yet wait in submission order until a fleet
//! change frees a fitting car.
//!
//! ## Matching model
//!
//! - A car is consumed whole by a single journey. Capacity is never split
//!   across groups and never refunded when the journey ends; only a full
//!   fleet reload (`PUT /cars`) returns seats to the pool.
//! - Among the cars that can hold a journey, the one leaving the fewest
//!   seats empty wins. Ties go to the earliest-loaded car.
//! - Every submission first replays the waiting list in insertion order
//!   against the current fleet, so journeys parked before a reload are
//!   served as soon as capacity reappears, without a background scheduler.
//!
//! ## Quick start
//!
//! ```rust
//! use carpool_dispatch::core::{
//!     Car, CarPoolService, DispatchPolicy, Dispatcher, JourneyOutcome,
//! };
//!
//! let mut dispatcher = Dispatcher::new(DispatchPolicy::default());
//! dispatcher.load_cars(vec![Car { id: 1, seats: 4 }, Car { id: 2, seats: 6 }]);
//!
//! assert_eq!(dispatcher.journey(42, 4), JourneyOutcome::Assigned(1));
//! ```
//!
//! The HTTP surface in [`http`] is a thin shell over the engine: it maps
//! engine outcomes to status codes and rejects malformed payloads before
//! they reach the dispatcher. The engine itself never sees wire formats.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Allocation engine: fleet bookkeeping, best-fit matching, and the
/// waiting-list reprocessing protocol.
pub mod core;
/// Configuration models for the service and dispatch policy.
pub mod config;
/// HTTP transport shell over the engine.
pub mod http;
/// Shared utilities.
pub mod util;
