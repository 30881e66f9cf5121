//! Boarding observer trait for progress reporting and rendering hooks.

use board_core::Tick;

use crate::sim::TickActivity;

/// Callbacks invoked by [`BoardingSim::run`][crate::BoardingSim::run] at key
/// points in the boarding loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl BoardingObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, activity: &TickActivity) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} sat down", activity.seated);
///         }
///     }
/// }
/// ```
pub trait BoardingObserver {
    /// Called at the very start of each tick, before any phase runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with a summary of what happened.
    fn on_tick_end(&mut self, _tick: Tick, _activity: &TickActivity) {}

    /// Called once when the last passenger sits down.
    ///
    /// `total` is the tick count the whole boarding consumed; `seated` the
    /// number of occupied seats (equal to the roster size).
    fn on_complete(&mut self, _total: Tick, _seated: usize) {}
}

/// A [`BoardingObserver`] that does nothing.  Use when you need to call
/// `run` but don't want callbacks.
pub struct NoopObserver;

impl BoardingObserver for NoopObserver {}
