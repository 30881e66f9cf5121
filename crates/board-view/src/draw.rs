//! The thin macroquad layer: window sizing and per-frame drawing.

use macroquad::prelude::{clear_background, draw_rectangle, Conf};

use board_sim::BoardingSim;

use crate::colors;
use crate::geometry::CabinGeometry;

/// Window configuration sized to fit `geom` exactly.
pub fn window_conf(geom: &CabinGeometry, title: &str) -> Conf {
    Conf {
        window_title: title.to_owned(),
        window_width: geom.window_width() as i32,
        window_height: geom.window_height() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Draw the current boarding state: every seat colored by occupancy, then
/// the queued passengers in the aisle.
pub fn draw_cabin(geom: &CabinGeometry, sim: &BoardingSim) {
    clear_background(colors::CABIN);

    for pos in geom.layout().seat_positions() {
        let color = if sim.seated().contains(&pos) {
            colors::FULL_SEAT
        } else {
            colors::EMPTY_SEAT
        };
        let r = geom.seat_rect(pos);
        draw_rectangle(r.x, r.y, r.w, r.h, color);
    }

    for p in sim.queued() {
        let r = geom.aisle_rect(p.row);
        draw_rectangle(r.x, r.y, r.w, r.h, colors::PASSENGER);
    }
}
