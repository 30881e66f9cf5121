//! The `BoardingSim` struct and its tick function.

use std::collections::HashSet;

use board_core::{CabinLayout, SeatPos, Tick};
use board_roster::{BoardingOrder, Roster};

use crate::error::{SimError, SimResult};
use crate::observer::BoardingObserver;
use crate::queue::{AisleQueue, QueuedPassenger};

// ── TickActivity ──────────────────────────────────────────────────────────────

/// What happened during one tick — returned by [`BoardingSim::tick`] and
/// passed to observers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickActivity {
    /// Passengers who reached their row and sat down.
    pub seated: usize,
    /// Queued passengers who moved forward one row.
    pub advanced: usize,
    /// Whether a new passenger entered the aisle at row 1.
    pub admitted: bool,
}

// ── BoardingSim ───────────────────────────────────────────────────────────────

/// The boarding state machine.
///
/// Each passenger moves through three states: waiting at the gate → queued
/// in the aisle → seated.  All transitions happen inside [`tick`][Self::tick],
/// and the per-tick outputs (occupied seats, aisle occupancy) are readable
/// between ticks for rendering.
///
/// Construction validates its inputs and fails fast; after that nothing can
/// fail — a tick is a total function on owned state.
pub struct BoardingSim {
    layout: CabinLayout,
    roster: Roster,
    order: BoardingOrder,

    /// Occupied seats.  Grows monotonically, never shrinks.
    seated: HashSet<SeatPos>,

    /// Passengers in the aisle, front to back.
    aisle: AisleQueue,

    /// How many entries of `order` have been admitted so far.
    next_boarder: usize,

    /// Ticks elapsed since construction.
    now: Tick,
}

impl BoardingSim {
    // ── Construction ──────────────────────────────────────────────────────

    /// Build a stepper with every passenger still waiting at the gate.
    ///
    /// `order` must cover `roster` exactly (its own constructor already
    /// guarantees it is duplicate-free and in-range) and every assigned seat
    /// must exist in `layout`.
    pub fn new(layout: CabinLayout, roster: Roster, order: BoardingOrder) -> SimResult<Self> {
        if order.len() != roster.len() {
            return Err(SimError::OrderSizeMismatch {
                expected: roster.len(),
                got: order.len(),
            });
        }
        for p in roster.iter() {
            if !layout.contains(p.seat) {
                return Err(SimError::SeatOutsideCabin(p.seat));
            }
        }

        let capacity = roster.len();
        Ok(Self {
            layout,
            roster,
            order,
            seated: HashSet::with_capacity(capacity),
            aisle: AisleQueue::new(),
            next_boarder: 0,
            now: Tick::ZERO,
        })
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Advance the simulation by one discrete step.
    ///
    /// The three phases run in a fixed order; reordering them breaks the
    /// one-passenger-per-row invariant.
    pub fn tick(&mut self) -> TickActivity {
        let mut activity = TickActivity::default();

        // ── Phase 1: seat arrivals ────────────────────────────────────────
        //
        // A passenger standing at its own row sits down before anyone moves,
        // so the aisle position it held is free for the cascade below.
        let before = self.aisle.len();
        let seated = &mut self.seated;
        self.aisle.retain(|p| {
            if p.row == p.seat.row {
                seated.insert(p.seat);
                false
            } else {
                true
            }
        });
        activity.seated = before - self.aisle.len();

        // ── Phase 2: advance the queue ────────────────────────────────────
        //
        // Front to back, so a passenger may step into a row the passenger
        // ahead vacated this same tick.  `claimed[r]` marks rows holding a
        // queued passenger at the end of the phase: movers claim their
        // target row, blocked passengers claim the row they stay in.
        let mut claimed = vec![false; self.layout.rows() as usize + 2];
        for p in self.aisle.iter_mut() {
            let next = (p.row + 1) as usize;
            if !claimed[next] {
                p.row += 1;
                claimed[next] = true;
                activity.advanced += 1;
            } else {
                claimed[p.row as usize] = true;
            }
        }

        // ── Phase 3: admit one new passenger ──────────────────────────────
        //
        // Single entry point: row 1 must be free *after* the advance phase,
        // and at most one passenger enters per tick.
        if !claimed[1] && self.next_boarder < self.order.len() {
            if let Some(id) = self.order.get(self.next_boarder) {
                if let Some(p) = self.roster.get(id) {
                    self.aisle.push_back(QueuedPassenger { id, seat: p.seat, row: 1 });
                    activity.admitted = true;
                }
            }
            self.next_boarder += 1;
        }

        self.now = self.now + 1;
        activity
    }

    /// Run tick-by-tick until boarding completes, invoking `observer` at
    /// every tick boundary.  Returns the total tick count consumed.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: BoardingObserver>(&mut self, observer: &mut O) -> Tick {
        while !self.is_complete() {
            let now = self.now;
            observer.on_tick_start(now);
            let activity = self.tick();
            observer.on_tick_end(now, &activity);
        }
        observer.on_complete(self.now, self.seated.len());
        self.now
    }

    // ── Read model ────────────────────────────────────────────────────────

    /// `true` once every passenger has been admitted and the aisle is empty.
    ///
    /// At that point `seated()` holds exactly one entry per passenger.  A
    /// zero-passenger roster is complete before the first tick.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.next_boarder == self.order.len() && self.aisle.is_empty()
    }

    /// Seats occupied so far.
    pub fn seated(&self) -> &HashSet<SeatPos> {
        &self.seated
    }

    /// Passengers currently in the aisle, front to back.
    pub fn queued(&self) -> &[QueuedPassenger] {
        self.aisle.as_slice()
    }

    /// Ticks elapsed since construction.
    #[inline]
    pub fn ticks(&self) -> Tick {
        self.now
    }

    /// Passengers admitted into the aisle so far (queued or already seated).
    #[inline]
    pub fn boarded(&self) -> usize {
        self.next_boarder
    }

    /// Passengers still waiting at the gate.
    #[inline]
    pub fn waiting(&self) -> usize {
        self.order.len() - self.next_boarder
    }

    pub fn layout(&self) -> &CabinLayout {
        &self.layout
    }
}
