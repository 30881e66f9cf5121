//! Boarding orders — validated permutations of the roster.

use board_core::{PassengerId, SimRng};

use crate::error::{RosterError, RosterResult};
use crate::roster::Roster;

/// The sequence in which passengers are offered entry to the aisle.
///
/// Always a bijection onto the roster: every passenger appears exactly once.
/// Built either from an explicit id sequence (validated) or from one of the
/// canonical constructors below.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardingOrder {
    ids: Vec<PassengerId>,
}

impl BoardingOrder {
    /// Validate `ids` as a permutation of `roster`'s passenger ids.
    ///
    /// Fails fast on a length mismatch, an id not in the roster, or a
    /// repeated id — a malformed order must never reach the stepper.
    pub fn from_ids(ids: Vec<PassengerId>, roster: &Roster) -> RosterResult<Self> {
        if ids.len() != roster.len() {
            return Err(RosterError::OrderLengthMismatch {
                expected: roster.len(),
                got: ids.len(),
            });
        }
        let mut seen = vec![false; roster.len()];
        for &id in &ids {
            let Some(slot) = seen.get_mut(id.index()) else {
                return Err(RosterError::UnknownPassenger(id));
            };
            if *slot {
                return Err(RosterError::DuplicateBoarder(id));
            }
            *slot = true;
        }
        Ok(Self { ids })
    }

    /// Roster order: row 1 boards first.
    pub fn front_to_back(roster: &Roster) -> Self {
        Self { ids: roster.ids().collect() }
    }

    /// Reverse roster order: the last row boards first.
    pub fn back_to_front(roster: &Roster) -> Self {
        let mut ids: Vec<PassengerId> = roster.ids().collect();
        ids.reverse();
        Self { ids }
    }

    /// Uniform random order, reproducible from `rng`'s seed.
    pub fn shuffled(roster: &Roster, rng: &mut SimRng) -> Self {
        let mut ids: Vec<PassengerId> = roster.ids().collect();
        rng.shuffle(&mut ids);
        Self { ids }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The id at position `index` in boarding sequence.
    #[inline]
    pub fn get(&self, index: usize) -> Option<PassengerId> {
        self.ids.get(index).copied()
    }

    pub fn as_slice(&self) -> &[PassengerId] {
        &self.ids
    }
}
