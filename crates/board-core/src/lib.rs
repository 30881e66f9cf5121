//! `board-core` — foundational types for the single-aisle boarding simulator.
//!
//! This crate is a dependency of every other `board-*` crate.  It
//! intentionally has no `board-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                  |
//! |-----------|-------------------------------------------|
//! | [`ids`]   | `PassengerId`                             |
//! | [`seat`]  | `SeatPos` (row/seat coordinates)          |
//! | [`tick`]  | `Tick` step counter                       |
//! | [`cabin`] | `CabinLayout` (validated dimensions)      |
//! | [`rng`]   | `SimRng` (seeded, reproducible)           |
//! | [`error`] | `CoreError`, `CoreResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cabin;
pub mod error;
pub mod ids;
pub mod rng;
pub mod seat;
pub mod tick;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cabin::CabinLayout;
pub use error::{CoreError, CoreResult};
pub use ids::PassengerId;
pub use rng::SimRng;
pub use seat::SeatPos;
pub use tick::Tick;
