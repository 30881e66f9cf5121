//! Roster and boarding-order precondition errors.
//!
//! Every variant is a construction-time rejection; nothing in this crate can
//! fail after a `Roster`/`BoardingOrder` exists.

use board_core::{PassengerId, SeatPos};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("boarding order has {got} entries for a roster of {expected}")]
    OrderLengthMismatch { expected: usize, got: usize },

    #[error("boarding order names {0}, who is not in the roster")]
    UnknownPassenger(PassengerId),

    #[error("{0} appears more than once in the boarding order")]
    DuplicateBoarder(PassengerId),

    #[error("passenger ids must be dense and in storage order (index {index} holds {id})")]
    NonSequentialId { index: usize, id: PassengerId },

    #[error("seat {0} is outside the cabin")]
    SeatOutsideCabin(SeatPos),

    #[error("seat {0} is assigned to more than one passenger")]
    DuplicateSeat(SeatPos),
}

/// Shorthand result type for `board-roster`.
pub type RosterResult<T> = Result<T, RosterError>;
