//! Fixed cabin palette.

use macroquad::color::Color;

/// Cabin floor / background.
pub const CABIN: Color = Color::new(1.0, 1.0, 1.0, 1.0);
/// A seat nobody has reached yet.
pub const EMPTY_SEAT: Color = Color::new(1.0, 0.0, 0.0, 1.0);
/// An occupied seat.
pub const FULL_SEAT: Color = Color::new(0.0, 1.0, 0.0, 1.0);
/// A passenger walking the aisle.
pub const PASSENGER: Color = Color::new(1.0, 1.0, 0.0, 1.0);
