//! shorthaul — watch a narrow-body cabin board through a single front aisle.
//!
//! A 38-row, 6-abreast cabin boards in a seeded random order, one aisle
//! step per quarter second.  Seats flip from red to green as passengers
//! reach them; close the window or press Escape to stop early.

use macroquad::prelude::*;

use board_core::{CabinLayout, SimRng};
use board_roster::{BoardingOrder, Roster};
use board_sim::BoardingSim;
use board_view::{draw_cabin, CabinGeometry};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
/// Wall-clock seconds each boarding tick stays on screen.
const STEP_INTERVAL: f64 = 0.25;

fn window_conf() -> Conf {
    let geom = CabinGeometry::new(CabinLayout::narrow_body());
    board_view::window_conf(&geom, "shorthaul — single-aisle boarding")
}

#[macroquad::main(window_conf)]
async fn main() {
    let layout = CabinLayout::narrow_body();
    let geom = CabinGeometry::new(layout);
    let roster = Roster::build(&layout);
    let passengers = roster.len();
    let order = BoardingOrder::shuffled(&roster, &mut SimRng::new(SEED));

    let mut sim = match BoardingSim::new(layout, roster, order) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("boarding setup failed: {e}");
            return;
        }
    };

    println!("=== shorthaul — {passengers} passengers, seed {SEED} ===");

    prevent_quit();
    let mut last_step = get_time();
    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            println!(
                "stopped after {} steps ({} of {passengers} seated)",
                sim.ticks().0,
                sim.seated().len()
            );
            return;
        }

        if get_time() - last_step >= STEP_INTERVAL {
            sim.tick();
            last_step = get_time();
        }

        draw_cabin(&geom, &sim);
        next_frame().await;

        if sim.is_complete() {
            break;
        }
    }

    println!("{} steps needed", sim.ticks().0);
}
