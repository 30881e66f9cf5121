//! Seat coordinates.

use std::fmt;

/// A fixed seat in the cabin: 1-based row and 1-based seat-within-row.
///
/// `Copy + Eq + Hash` so occupied seats can live in a `HashSet` and be
/// compared by value everywhere.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatPos {
    /// Row counted from the front of the cabin, starting at 1.
    pub row: u32,
    /// Seat counted from the left wall, starting at 1.
    pub seat: u32,
}

impl SeatPos {
    #[inline]
    pub const fn new(row: u32, seat: u32) -> Self {
        Self { row, seat }
    }
}

impl fmt::Display for SeatPos {
    /// Airline style where possible: row 12 seat 3 prints as `12C`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (1..=26).contains(&self.seat) {
            let letter = (b'A' + (self.seat - 1) as u8) as char;
            write!(f, "{}{}", self.row, letter)
        } else {
            write!(f, "{}#{}", self.row, self.seat)
        }
    }
}
