//! Allocation engine: fleet bookkeeping, best-fit matching, and the
//! waiting-list reprocessing protocol.

pub mod assignments;
pub mod dispatcher;
pub mod error;
pub mod fleet;
pub mod waitlist;

pub use assignments::AssignmentLedger;
pub use dispatcher::{
    CarPoolService, DispatchPolicy, Dispatcher, DropOffOutcome, JourneyOutcome, LocateOutcome,
    StatusSnapshot,
};
pub use error::{AppResult, DispatchError};
pub use fleet::{Car, Fleet};
pub use waitlist::Waitlist;
