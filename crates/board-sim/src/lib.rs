//! `board-sim` — the boarding state machine.
//!
//! # Three-phase tick
//!
//! ```text
//! for each tick until (everyone admitted AND aisle empty):
//!   ① Seat arrivals — queued passengers standing at their own row sit
//!                     down and leave the aisle.
//!   ② Advance       — remaining passengers step forward one row,
//!                     front to back, one passenger per row.
//!   ③ Admit one     — if aisle row 1 ended the tick free, the next
//!                     passenger in boarding order enters there.
//! ```
//!
//! The phase order is load-bearing: seating first vacates aisle positions
//! for the cascade, and admission last keeps the entry single-file.  See
//! [`BoardingSim::tick`] for the details.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use board_core::CabinLayout;
//! use board_roster::{BoardingOrder, Roster};
//! use board_sim::{BoardingSim, NoopObserver};
//!
//! let layout = CabinLayout::narrow_body();
//! let roster = Roster::build(&layout);
//! let order  = BoardingOrder::back_to_front(&roster);
//! let mut sim = BoardingSim::new(layout, roster, order)?;
//! let total = sim.run(&mut NoopObserver);
//! ```

pub mod error;
pub mod observer;
pub mod queue;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SimError, SimResult};
pub use observer::{BoardingObserver, NoopObserver};
pub use queue::{AisleQueue, QueuedPassenger};
pub use sim::{BoardingSim, TickActivity};
