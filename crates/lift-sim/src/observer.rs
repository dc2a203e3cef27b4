//! Observer trait for progress reporting and data collection.

use lift_core::Tick;

use crate::Building;

/// Callbacks invoked by [`Building::run_ticks`] at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The building reference passed to
/// `on_tick_end` is the full read-only query surface — positions, queues,
/// statistics — for renderers and collectors; treat it as frozen until the
/// next tick.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl BuildingObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, building: &Building) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} delivered", building.stats().transported);
///         }
///     }
/// }
/// ```
pub trait BuildingObserver {
    /// Called immediately before a tick is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick completed, with the post-tick state.
    fn on_tick_end(&mut self, _tick: Tick, _building: &Building) {}
}

/// A [`BuildingObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want progress callbacks.
pub struct NoopObserver;

impl BuildingObserver for NoopObserver {}
