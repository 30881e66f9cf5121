//! `board-roster` — who flies, where they sit, and in what order they board.
//!
//! Two concerns live here, both settled before the first simulation tick:
//!
//! - [`Roster`]: the immutable passenger set, one [`Passenger`] per seat of a
//!   [`CabinLayout`][board_core::CabinLayout], ids dense and row-major.
//! - [`BoardingOrder`]: a permutation of the roster's ids — the sequence in
//!   which passengers are offered the aisle.  Always validated: a malformed
//!   order fails construction, never a running simulation.

pub mod error;
pub mod order;
pub mod passenger;
pub mod roster;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RosterError, RosterResult};
pub use order::BoardingOrder;
pub use passenger::Passenger;
pub use roster::Roster;
