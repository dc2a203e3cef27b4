//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter advanced by an external
//! driver (a timer, a step button, a test loop) — the core never owns the
//! cadence.  Using an integer tick as the canonical time unit means all
//! schedule arithmetic is exact (no floating-point drift) and comparisons are
//! O(1).
//!
//! The default calibration is 1 tick = 1 simulated minute, so a day is 1,440
//! ticks and the peak-hour windows are plain minute-of-day ranges.  Nothing
//! else in the engine depends on that mapping; `PeakSchedule::ticks_per_day`
//! re-calibrates it.

use std::fmt;

use crate::{LiftError, LiftResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at 1 tick/minute a u64 lasts far longer
/// than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── PeakSchedule ──────────────────────────────────────────────────────────────

/// An inclusive tick-of-day range during which traffic peaks.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakWindow {
    /// First tick-of-day inside the window.
    pub start: u32,
    /// Last tick-of-day inside the window (inclusive).
    pub end: u32,
}

impl PeakWindow {
    #[inline]
    pub fn contains(&self, tick_of_day: u32) -> bool {
        tick_of_day >= self.start && tick_of_day <= self.end
    }
}

/// Time-of-day windows during which the energy heuristic favors
/// responsiveness over efficiency.
///
/// The day repeats every `ticks_per_day` ticks; window bounds are
/// ticks-of-day, both ends inclusive.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakSchedule {
    /// Length of one simulated day in ticks.
    pub ticks_per_day: u32,
    /// Peak windows, in tick-of-day coordinates.
    pub windows: Vec<PeakWindow>,
}

impl PeakSchedule {
    /// The classic office-building profile: 1-minute ticks, morning rush
    /// 07:00–10:00 and evening rush 16:00–19:00.
    pub fn office_hours() -> Self {
        Self {
            ticks_per_day: 1_440,
            windows: vec![
                PeakWindow { start: 420, end: 600 },   // 07:00–10:00
                PeakWindow { start: 960, end: 1_140 }, // 16:00–19:00
            ],
        }
    }

    /// A schedule with no peak windows (every tick is off-peak).
    pub fn never() -> Self {
        Self { ticks_per_day: 1_440, windows: Vec::new() }
    }

    /// `true` when `tick` falls inside any peak window of its day.
    pub fn is_peak(&self, tick: Tick) -> bool {
        let tick_of_day = (tick.0 % self.ticks_per_day as u64) as u32;
        self.windows.iter().any(|w| w.contains(tick_of_day))
    }

    fn validate(&self) -> LiftResult<()> {
        if self.ticks_per_day == 0 {
            return Err(LiftError::Config("ticks_per_day must be positive".into()));
        }
        for w in &self.windows {
            if w.start > w.end || w.end >= self.ticks_per_day {
                return Err(LiftError::Config(format!(
                    "peak window {}..={} does not fit a {}-tick day",
                    w.start, w.end, self.ticks_per_day
                )));
            }
        }
        Ok(())
    }
}

impl Default for PeakSchedule {
    fn default() -> Self {
        Self::office_hours()
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Ticks a car stays parked at a floor to load/unload before it may depart.
pub const DEFAULT_DWELL_TICKS: u32 = 3;

/// Top-level simulation configuration.
///
/// Typically assembled by the application (or `lift-sim`'s builder) and
/// handed to `Building` at construction; fixed for the lifetime of a run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of floors, indexed `0..floor_count`.  At least 2.
    pub floor_count: u16,

    /// Number of cars in the fleet.  At least 1; fleet order is fixed and
    /// used as the dispatch tie-break order.
    pub elevator_count: u16,

    /// Maximum passengers per car.  At least 1.
    pub elevator_capacity: usize,

    /// Ticks a car dwells at a floor after stopping.  At least 1.
    pub dwell_ticks: u32,

    /// Peak-hour calendar consumed by the energy heuristic.
    pub peak: PeakSchedule,

    /// Master RNG seed for traffic generation.  The same seed always
    /// produces identical request streams.
    pub seed: u64,
}

impl SimConfig {
    /// Configuration with the default dwell time, peak calendar, and seed.
    pub fn new(floor_count: u16, elevator_count: u16, elevator_capacity: usize) -> Self {
        Self {
            floor_count,
            elevator_count,
            elevator_capacity,
            dwell_ticks: DEFAULT_DWELL_TICKS,
            peak: PeakSchedule::default(),
            seed: 0,
        }
    }

    /// Reject structurally impossible configurations at the boundary so the
    /// tick loop never has to re-check them.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floor_count < 2 {
            return Err(LiftError::Config(format!(
                "a building needs at least 2 floors, got {}",
                self.floor_count
            )));
        }
        if self.elevator_count == 0 {
            return Err(LiftError::Config("fleet must have at least one car".into()));
        }
        if self.elevator_capacity == 0 {
            return Err(LiftError::Config("car capacity must be positive".into()));
        }
        if self.dwell_ticks == 0 {
            return Err(LiftError::Config("dwell_ticks must be positive".into()));
        }
        self.peak.validate()
    }
}
