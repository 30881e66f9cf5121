//! compare_orders — headless tick counts for canonical boarding orders.
//!
//! Boards the same narrow-body cabin with back-to-front, front-to-back, and
//! a handful of seeded shuffles, and prints how many ticks (and total aisle
//! steps walked) each order needed.

use anyhow::Result;

use board_core::{CabinLayout, SimRng, Tick};
use board_roster::{BoardingOrder, Roster};
use board_sim::{BoardingObserver, BoardingSim, TickActivity};

const SEED: u64 = 42;
const SHUFFLE_RUNS: u64 = 5;

/// Observer that accumulates the total number of single-row steps walked.
#[derive(Default)]
struct WalkStats {
    row_steps: u64,
}

impl BoardingObserver for WalkStats {
    fn on_tick_end(&mut self, _tick: Tick, activity: &TickActivity) {
        self.row_steps += activity.advanced as u64;
    }
}

fn board(layout: CabinLayout, roster: Roster, order: BoardingOrder) -> Result<(Tick, u64)> {
    let mut sim = BoardingSim::new(layout, roster, order)?;
    let mut stats = WalkStats::default();
    let total = sim.run(&mut stats);
    Ok((total, stats.row_steps))
}

fn main() -> Result<()> {
    let layout = CabinLayout::narrow_body();
    let roster = Roster::build(&layout);

    println!("=== compare_orders — {} seats, single aisle ===", roster.len());
    println!();
    println!("{:<16} {:>8} {:>12}", "order", "ticks", "aisle steps");
    println!("{}", "-".repeat(38));

    let (ticks, steps) = board(layout, roster.clone(), BoardingOrder::back_to_front(&roster))?;
    println!("{:<16} {:>8} {:>12}", "back-to-front", ticks.0, steps);

    let (ticks, steps) = board(layout, roster.clone(), BoardingOrder::front_to_back(&roster))?;
    println!("{:<16} {:>8} {:>12}", "front-to-back", ticks.0, steps);

    for i in 0..SHUFFLE_RUNS {
        let order = BoardingOrder::shuffled(&roster, &mut SimRng::new(SEED + i));
        let (ticks, steps) = board(layout, roster.clone(), order)?;
        println!("{:<16} {:>8} {:>12}", format!("shuffled #{i}"), ticks.0, steps);
    }

    Ok(())
}
