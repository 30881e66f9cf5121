//! The immutable passenger record.

use board_core::{PassengerId, SeatPos};

/// One ticketed passenger: an identity and an assigned seat.
///
/// Created once by [`Roster::build`][crate::Roster::build] and never
/// modified.  A passenger's position while walking the aisle is simulation
/// state and lives in the stepper's queue records, not here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id: PassengerId,
    pub seat: SeatPos,
}
