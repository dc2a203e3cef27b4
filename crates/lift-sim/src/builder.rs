//! Fluent builder for constructing a [`Building`].

use lift_core::{ElevatorId, FloorId, LiftResult, PeakSchedule, SimConfig, Tick};
use lift_dispatch::{Dispatcher, Heuristic};
use lift_model::{Elevator, Floor};

use crate::{Building, BuildingStats};

/// Fluent builder for [`Building`].
///
/// # Required inputs
///
/// Floor count (≥ 2), fleet size (≥ 1), and car capacity (≥ 1) — the same
/// triple [`Building::new`] takes.
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                  |
/// |-------------------|------------------------------------------|
/// | `.dwell_ticks(n)` | 3                                        |
/// | `.peak(schedule)` | office hours (07:00–10:00, 16:00–19:00)  |
/// | `.heuristic(h)`   | `Heuristic::Fcfs`                        |
/// | `.seed(s)`        | 0 (recorded for traffic layers)          |
///
/// # Example
///
/// ```rust,ignore
/// let mut building = BuildingBuilder::new(12, 3, 8)
///     .dwell_ticks(2)
///     .heuristic(Heuristic::WaitTimeOptimized)
///     .build()?;
/// ```
pub struct BuildingBuilder {
    config:    SimConfig,
    heuristic: Heuristic,
}

impl BuildingBuilder {
    pub fn new(floor_count: u16, elevator_count: u16, capacity: usize) -> Self {
        Self {
            config:    SimConfig::new(floor_count, elevator_count, capacity),
            heuristic: Heuristic::Fcfs,
        }
    }

    /// Ticks a car dwells at a floor after stopping.
    pub fn dwell_ticks(mut self, dwell_ticks: u32) -> Self {
        self.config.dwell_ticks = dwell_ticks;
        self
    }

    /// Peak-hour calendar consumed by the energy heuristic.
    pub fn peak(mut self, peak: PeakSchedule) -> Self {
        self.config.peak = peak;
        self
    }

    /// Initial dispatch policy (switchable later via `set_heuristic`).
    pub fn heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Master seed, recorded in the config for traffic layers to pick up.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate the configuration and assemble the building: every floor
    /// empty, every car idle on the ground floor.
    pub fn build(self) -> LiftResult<Building> {
        self.config.validate()?;

        let floors = (0..self.config.floor_count).map(|i| Floor::new(FloorId(i))).collect();
        let elevators = (0..self.config.elevator_count)
            .map(|i| {
                Elevator::new(ElevatorId(i), self.config.elevator_capacity, self.config.dwell_ticks)
            })
            .collect();

        Ok(Building {
            floors,
            elevators,
            dispatcher: Dispatcher::new(self.heuristic),
            peak_hour: self.config.peak.is_peak(Tick::ZERO),
            current_tick: Tick::ZERO,
            next_person_id: 0,
            stats: BuildingStats::default(),
            config: self.config,
        })
    }
}
