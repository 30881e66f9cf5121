//! Core error type.
//!
//! Sub-crates define their own error enums (`RosterError`, `SimError`)
//! rather than funnelling everything through one type; each names the
//! precondition it enforces.

use thiserror::Error;

/// Errors from cabin-layout construction.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cabin needs at least one row and one seat per row (got {rows}×{seats_per_row})")]
    InvalidDimensions { rows: u32, seats_per_row: u32 },

    #[error("aisle after seat {aisle_after} does not fit a {seats_per_row}-seat row")]
    AisleOutOfRange { aisle_after: u32, seats_per_row: u32 },
}

/// Shorthand result type for `board-core`.
pub type CoreResult<T> = Result<T, CoreError>;
