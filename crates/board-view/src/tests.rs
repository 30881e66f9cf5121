//! Unit tests for the backend-free cabin geometry.

use board_core::{CabinLayout, SeatPos};

use crate::geometry::{CabinGeometry, AISLE_SPACING, SEAT_SIZE, SEAT_SPACING};

fn narrow_body_geometry() -> CabinGeometry {
    CabinGeometry::new(CabinLayout::narrow_body())
}

#[test]
fn window_fits_the_cabin() {
    let geom = narrow_body_geometry();
    // 38 rows of 15 px pitch plus the top margin.
    assert_eq!(geom.window_height(), 3.0 + 38.0 * 15.0);
    // 6 seats of 15 px pitch plus the left margin and the aisle gap.
    assert_eq!(geom.window_width(), 18.0 + 3.0 + 6.0 * 15.0);
}

#[test]
fn first_seat_sits_at_the_margin() {
    let geom = narrow_body_geometry();
    let r = geom.seat_rect(SeatPos::new(1, 1));
    assert_eq!((r.x, r.y), (SEAT_SPACING, SEAT_SPACING));
    assert_eq!((r.w, r.h), (SEAT_SIZE, SEAT_SIZE));
}

#[test]
fn seats_beyond_the_divider_shift_by_the_aisle_gap() {
    let geom = narrow_body_geometry();
    let pitch = SEAT_SIZE + SEAT_SPACING;

    // Seat 3 is the last one left of the aisle.
    let left = geom.seat_rect(SeatPos::new(1, 3));
    assert_eq!(left.x, SEAT_SPACING + 2.0 * pitch);

    // Seat 4 is the first one right of the aisle.
    let right = geom.seat_rect(SeatPos::new(1, 4));
    assert_eq!(right.x, SEAT_SPACING + 3.0 * pitch + AISLE_SPACING);
}

#[test]
fn aisle_column_is_constant_and_between_the_seat_banks() {
    let geom = narrow_body_geometry();
    let pitch = SEAT_SIZE + SEAT_SPACING;

    let top = geom.aisle_rect(1);
    let bottom = geom.aisle_rect(38);
    assert_eq!(top.x, bottom.x);
    assert_eq!(top.x, SEAT_SPACING + 3.0 * pitch);

    // The aisle column starts right of seat 3 and ends left of seat 4.
    let left = geom.seat_rect(SeatPos::new(1, 3));
    let right = geom.seat_rect(SeatPos::new(1, 4));
    assert!(top.x >= left.x + SEAT_SIZE);
    assert!(top.x + SEAT_SIZE <= right.x);
}

#[test]
fn rows_advance_down_the_window() {
    let geom = narrow_body_geometry();
    let pitch = SEAT_SIZE + SEAT_SPACING;
    assert_eq!(geom.aisle_rect(2).y - geom.aisle_rect(1).y, pitch);
    assert_eq!(
        geom.seat_rect(SeatPos::new(10, 1)).y,
        SEAT_SPACING + 9.0 * pitch
    );
}
