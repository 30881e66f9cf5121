//! Cabin dimensions and seat enumeration.

use crate::error::{CoreError, CoreResult};
use crate::seat::SeatPos;

/// Physical layout of the cabin: `rows × seats_per_row` seats served by a
/// single front-entry aisle.
///
/// `aisle_after` is the number of seats to the left of the aisle (0 puts the
/// aisle against the wall).  It only affects where the aisle is drawn; the
/// boarding logic itself never looks at it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CabinLayout {
    rows: u32,
    seats_per_row: u32,
    aisle_after: u32,
}

impl CabinLayout {
    /// Validate dimensions and build a layout.
    ///
    /// Zero rows or zero seats per row is a caller error, rejected here so a
    /// malformed cabin can never reach the roster or the stepper.
    pub fn new(rows: u32, seats_per_row: u32, aisle_after: u32) -> CoreResult<Self> {
        if rows == 0 || seats_per_row == 0 {
            return Err(CoreError::InvalidDimensions { rows, seats_per_row });
        }
        if aisle_after > seats_per_row {
            return Err(CoreError::AisleOutOfRange { aisle_after, seats_per_row });
        }
        Ok(Self { rows, seats_per_row, aisle_after })
    }

    /// A short-haul narrow-body: 38 rows of 6, aisle between seats 3 and 4.
    pub fn narrow_body() -> Self {
        Self { rows: 38, seats_per_row: 6, aisle_after: 3 }
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn seats_per_row(&self) -> u32 {
        self.seats_per_row
    }

    #[inline]
    pub fn aisle_after(&self) -> u32 {
        self.aisle_after
    }

    /// Total seat (and therefore passenger) capacity.
    #[inline]
    pub fn seat_count(&self) -> usize {
        self.rows as usize * self.seats_per_row as usize
    }

    /// `true` if `pos` names a real seat in this cabin.
    pub fn contains(&self, pos: SeatPos) -> bool {
        (1..=self.rows).contains(&pos.row) && (1..=self.seats_per_row).contains(&pos.seat)
    }

    /// All seats in row-major order (row 1 seat 1, row 1 seat 2, …).
    ///
    /// This is also the id order of a full roster.
    pub fn seat_positions(&self) -> impl Iterator<Item = SeatPos> + '_ {
        let seats = self.seats_per_row;
        (1..=self.rows).flat_map(move |row| (1..=seats).map(move |seat| SeatPos::new(row, seat)))
    }
}
