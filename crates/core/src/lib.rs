//! Pure booking domain logic: no I/O, no async.
//!
//! - [`seating`] -- turns a raw party size into the seat count that is billed.
//! - [`allocation`] -- picks the cheapest adequate table and prices the party.
//! - [`tables`] -- inventory rules (capacity range, table cap).
//! - [`reservations`] -- cancellation and modification guards.

pub mod allocation;
pub mod error;
pub mod reservations;
pub mod seating;
pub mod tables;
pub mod types;
