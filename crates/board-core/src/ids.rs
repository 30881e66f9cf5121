//! Strongly typed passenger identifier.
//!
//! Ids are dense 0-based indices: the roster stores passengers in id order,
//! so `id.index()` is a direct `Vec` index.  `Copy + Ord + Hash` so ids can
//! be used as map keys and sorted collection elements without ceremony.

use std::fmt;

/// Index of a passenger in the roster.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerId(pub u32);

impl PassengerId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "passenger {}", self.0)
    }
}

impl From<PassengerId> for usize {
    #[inline(always)]
    fn from(id: PassengerId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for PassengerId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PassengerId, Self::Error> {
        u32::try_from(n).map(PassengerId)
    }
}
