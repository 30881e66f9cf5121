//! `board-view` — draws a boarding tick on screen.
//!
//! The crate splits cleanly in two:
//!
//! - [`geometry`]: pure pixel math (window size, seat rectangles, aisle
//!   position).  No windowing dependency, fully unit-tested.
//! - [`draw`] + [`colors`]: the thin macroquad layer that paints what the
//!   geometry computed.
//!
//! The simulation core never sees this crate; the driving loop reads the
//! stepper's per-tick output and hands it to [`draw::draw_cabin`].

pub mod colors;
pub mod draw;
pub mod geometry;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use draw::{draw_cabin, window_conf};
pub use geometry::{CabinGeometry, Rect, AISLE_SPACING, SEAT_SIZE, SEAT_SPACING};
