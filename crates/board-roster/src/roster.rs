//! Roster construction.

use std::collections::HashSet;

use board_core::{CabinLayout, PassengerId, SeatPos};

use crate::error::{RosterError, RosterResult};
use crate::passenger::Passenger;

/// The full set of passengers for a flight.
///
/// Passengers are stored in id order, so id `i` lives at index `i` — lookups
/// are direct indexing, no map needed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    passengers: Vec<Passenger>,
}

impl Roster {
    /// Build a full roster for `layout`: one passenger per seat, ids assigned
    /// sequentially in row-major seat order (row 1 seat 1 gets id 0).
    pub fn build(layout: &CabinLayout) -> Self {
        let passengers = layout
            .seat_positions()
            .enumerate()
            .map(|(i, seat)| Passenger { id: PassengerId(i as u32), seat })
            .collect();
        Self { passengers }
    }

    /// Build a roster from an explicit passenger list (e.g. a partially
    /// booked flight).
    ///
    /// Validates what `build` guarantees by construction: ids dense and in
    /// storage order, every seat inside `layout`, no seat assigned twice.
    pub fn from_passengers(
        passengers: Vec<Passenger>,
        layout: &CabinLayout,
    ) -> RosterResult<Self> {
        let mut seats_taken: HashSet<SeatPos> = HashSet::with_capacity(passengers.len());
        for (index, p) in passengers.iter().enumerate() {
            if p.id.index() != index {
                return Err(RosterError::NonSequentialId { index, id: p.id });
            }
            if !layout.contains(p.seat) {
                return Err(RosterError::SeatOutsideCabin(p.seat));
            }
            if !seats_taken.insert(p.seat) {
                return Err(RosterError::DuplicateSeat(p.seat));
            }
        }
        Ok(Self { passengers })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Look up a passenger by id.  `None` for ids outside the roster.
    #[inline]
    pub fn get(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id.index())
    }

    /// The seat assigned to `id`, if the id is in the roster.
    #[inline]
    pub fn seat_of(&self, id: PassengerId) -> Option<SeatPos> {
        self.get(id).map(|p| p.seat)
    }

    /// Iterator over all passengers in id (= row-major seat) order.
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter()
    }

    /// Iterator over all ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = PassengerId> + '_ {
        (0..self.passengers.len() as u32).map(PassengerId)
    }
}
