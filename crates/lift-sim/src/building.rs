//! The `Building` aggregate and its per-tick update.

use lift_core::{FloorId, LiftError, LiftResult, PersonId, SimConfig, Tick};
use lift_dispatch::{Dispatcher, FloorCall, Heuristic};
use lift_model::{Elevator, Floor, Person};

use crate::{BuildingBuilder, BuildingObserver, BuildingStats};

/// The whole simulated building: floors, the car fleet, the dispatcher, and
/// the aggregate statistics.
///
/// Floor count and fleet size are fixed for the lifetime of an instance.
/// All state advances through [`update`][Building::update] — one call per
/// logical tick, driven externally.  Everything else is read-only queries,
/// boundary-validated injection, and snapshots.
#[derive(Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Building {
    pub(crate) config:    SimConfig,
    pub(crate) floors:    Vec<Floor>,
    pub(crate) elevators: Vec<Elevator>,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) peak_hour: bool,
    /// Last tick passed to `update` (`Tick::ZERO` before the first call).
    pub(crate) current_tick: Tick,
    pub(crate) next_person_id: u32,
    pub(crate) stats: BuildingStats,
}

impl Building {
    /// A building with the default dwell time, peak calendar, and FCFS
    /// dispatch.  Use [`BuildingBuilder`] for the other knobs.
    pub fn new(floor_count: u16, elevator_count: u16, capacity: usize) -> LiftResult<Building> {
        BuildingBuilder::new(floor_count, elevator_count, capacity).build()
    }

    // ── Queries (read-only surface for rendering/statistics layers) ───────

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    #[inline]
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    #[inline]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    #[inline]
    pub fn peak_hour(&self) -> bool {
        self.peak_hour
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    #[inline]
    pub fn stats(&self) -> &BuildingStats {
        &self.stats
    }

    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.dispatcher.heuristic()
    }

    /// Switch the dispatch policy mid-run; no other state is touched.
    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.dispatcher.set_heuristic(heuristic);
    }

    // ── Request injection (the only write boundary besides update) ────────

    /// Register a transport request: a person appears on `origin` wanting to
    /// reach `destination`.
    ///
    /// Rejected at the boundary — and never visible to the tick loop — when
    /// either floor is out of range or the floors are equal.
    pub fn inject_request(
        &mut self,
        origin:      FloorId,
        destination: FloorId,
        tick:        Tick,
    ) -> LiftResult<PersonId> {
        self.check_floor(origin)?;
        self.check_floor(destination)?;
        if origin == destination {
            return Err(LiftError::SameFloor(origin));
        }

        let id = PersonId(self.next_person_id);
        self.next_person_id += 1;
        self.floors[origin.index()].enqueue(Person::new(id, origin, destination, tick));
        self.stats.injected += 1;
        Ok(id)
    }

    fn check_floor(&self, floor: FloorId) -> LiftResult<()> {
        if floor.index() < self.floors.len() {
            Ok(())
        } else {
            Err(LiftError::InvalidFloor { floor, floor_count: self.config.floor_count })
        }
    }

    // ── The tick loop ─────────────────────────────────────────────────────

    /// Advance the whole building by one logical tick.
    ///
    /// Deterministic: cars update in fleet order, floors are scanned in
    /// index order, and dispatch ties break on fleet order — identical
    /// inputs always produce identical runs.
    pub fn update(&mut self, tick: Tick) {
        self.current_tick = tick;
        self.stats.ticks += 1;

        // ── Phase 1: peak-hour flag ───────────────────────────────────────
        self.peak_hour = self.config.peak.is_peak(tick);

        // ── Phase 2: advance every car ────────────────────────────────────
        for i in 0..self.elevators.len() {
            let delivered = self.elevators[i].step();
            for person in &delivered {
                self.stats.record_arrival(person);
            }
        }

        // ── Phase 3: waiting-time accrual ─────────────────────────────────
        for floor in &mut self.floors {
            floor.tick_waiting();
        }

        // ── Phase 4: hall-call scan ───────────────────────────────────────
        //
        // Direct boarding first; the dispatcher is only consulted for
        // floors whose queue survived it (demand-driven, not polled).
        for f in 0..self.floors.len() {
            if !self.floors[f].has_call() {
                continue;
            }
            self.board_at_floor(f);

            let floor = &self.floors[f];
            if floor.has_waiting() {
                let call = FloorCall {
                    floor: floor.index(),
                    up:    floor.up_requested(),
                    down:  floor.down_requested(),
                };
                self.dispatcher.note_call(call.floor);
                // A decline is not an error: the call stays recorded and is
                // retried next tick.
                let _ = self.dispatcher.dispatch(&call, &mut self.elevators, self.peak_hour);
            } else {
                let index = floor.index();
                self.floors[f].clear_calls();
                self.dispatcher.drop_call(index);
            }
        }

        // ── Phase 5: drain per-car counters into the aggregate ────────────
        for car in &mut self.elevators {
            self.stats.absorb(car.take_counters());
        }
    }

    /// One boarding pass per stationary car at floor `f` (at most one
    /// attempt per passenger per tick): match the car's committed direction
    /// or board unconditionally if it has none; mismatches requeue at the
    /// back in their original relative order.
    fn board_at_floor(&mut self, f: usize) {
        for e in 0..self.elevators.len() {
            let here = self.floors[f].index();
            let car = &mut self.elevators[e];
            if car.is_moving() || car.current_floor() != here {
                continue;
            }

            let floor = &mut self.floors[f];
            let mut skipped: Vec<Person> = Vec::new();
            loop {
                if !car.has_space() {
                    break;
                }
                let Some(person) = floor.pop_waiting() else { break };
                // Re-read per passenger: an idle car commits to a direction
                // with its first boarder.
                let matches = car
                    .committed_direction()
                    .is_none_or(|dir| person.direction() == dir);
                if matches {
                    if let Some(bounced) = car.board(person) {
                        skipped.push(bounced);
                        break;
                    }
                } else {
                    skipped.push(person);
                }
            }
            for person in skipped {
                floor.requeue(person);
            }
            floor.refresh_calls();
        }
    }

    // ── Convenience driver ────────────────────────────────────────────────

    /// Run `n` consecutive ticks from the current position, invoking
    /// observer hooks at each boundary.  Strictly layered on
    /// [`update`][Building::update]; real drivers with their own tick
    /// numbering call `update` directly.
    pub fn run_ticks<O: BuildingObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let tick = if self.stats.ticks == 0 {
                Tick::ZERO
            } else {
                self.current_tick + 1
            };
            observer.on_tick_start(tick);
            self.update(tick);
            observer.on_tick_end(tick, self);
        }
    }
}
