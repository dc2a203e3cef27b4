//! The per-car state machine.
//!
//! # States
//!
//! ```text
//!            ┌──────────── register_stop / board ────────────┐
//!            ▼                                               │
//!   Idle ── select ──► MovingUp / MovingDown ── stop ──► Parked
//!    ▲                        ▲                            │
//!    └──── dwell expires, ────┘◄── dwell expires, ─────────┘
//!          nothing pending         stops pending (SCAN pick)
//! ```
//!
//! A moving car advances one floor per tick and parks whenever the floor it
//! reaches is in its pending-stop set — the planned target stays in the set
//! until serviced, so intermediate stops registered mid-flight are handled by
//! the same check.  A parked car dwells for a fixed number of ticks
//! (boarding and unboarding happen while parked), then either continues its
//! sweep or goes idle.
//!
//! # Target selection (SCAN)
//!
//! The next target is the nearest pending stop strictly beyond the current
//! floor in the car's heading; if none exists the heading flips once and the
//! search repeats.  Two passes always suffice: a nonempty pending set
//! contains no stop equal to the current floor (`register_stop` guarantees
//! it), so one of the two directions must hold a stop.  The search is a
//! bounded loop, not recursion.

use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

use lift_core::{Direction, ElevatorId, FloorId};

use crate::Person;

// ── Motion ────────────────────────────────────────────────────────────────────

/// What the car is doing this tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    /// Stationary, nothing pending, dwell long expired.
    Idle,
    /// Advancing one floor per tick toward the target.
    MovingUp,
    MovingDown,
    /// Dwelling at a floor after a stop; passengers load/unload here.
    Parked,
}

// ── Counters ──────────────────────────────────────────────────────────────────

/// Per-car counters drained into the building-wide statistics once per tick.
///
/// Drained (and reset) via [`Elevator::take_counters`] so one aggregation
/// pass never double-counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorCounters {
    /// Passengers delivered to their destination.
    pub delivered: u64,
    /// Floors actually traveled.
    pub floors_traveled: u64,
    /// Sum of delivered passengers' ride ticks.
    pub ride_ticks: u64,
    /// Ticks spent idle (parked past the dwell with nothing to do).
    pub idle_ticks: u64,
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// One car: position, motion state, pending stops, and onboard passengers.
///
/// Cars are created once at fleet initialization and live for the whole run;
/// every mutation goes through [`step`][Elevator::step] (the per-tick state
/// machine), [`register_stop`][Elevator::register_stop] (dispatch), or
/// [`board`][Elevator::board] (floor-side loading).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    id:             ElevatorId,
    current_floor:  FloorId,
    motion:         Motion,
    /// Last committed direction of travel.  Survives parking so the SCAN
    /// sweep resumes where it left off; starts `Up` on the ground floor.
    heading:        Direction,
    /// Floor the car is moving toward.  `None` while stationary.
    target_floor:   Option<FloorId>,
    dwell_remaining: u32,
    dwell_ticks:    u32,
    pending_stops:  BTreeSet<FloorId>,
    onboard:        Vec<Person>,
    capacity:       usize,
    counters:       ElevatorCounters,
}

impl Elevator {
    /// A fresh idle car on the ground floor.
    pub fn new(id: ElevatorId, capacity: usize, dwell_ticks: u32) -> Self {
        Self {
            id,
            current_floor: FloorId(0),
            motion: Motion::Idle,
            heading: Direction::Up,
            target_floor: None,
            dwell_remaining: 0,
            dwell_ticks,
            pending_stops: BTreeSet::new(),
            onboard: Vec::with_capacity(capacity),
            capacity,
            counters: ElevatorCounters::default(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn current_floor(&self) -> FloorId {
        self.current_floor
    }

    #[inline]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    #[inline]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    #[inline]
    pub fn target_floor(&self) -> Option<FloorId> {
        self.target_floor
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        matches!(self.motion, Motion::MovingUp | Motion::MovingDown)
    }

    #[inline]
    pub fn occupancy(&self) -> usize {
        self.onboard.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn has_space(&self) -> bool {
        self.onboard.len() < self.capacity
    }

    /// Floors the car has committed to visit, in ascending order.
    #[inline]
    pub fn pending_stops(&self) -> &BTreeSet<FloorId> {
        &self.pending_stops
    }

    #[inline]
    pub fn has_stop(&self, floor: FloorId) -> bool {
        self.pending_stops.contains(&floor)
    }

    /// Read-only view of onboard passengers (for rendering layers).
    pub fn onboard(&self) -> impl Iterator<Item = &Person> {
        self.onboard.iter()
    }

    /// The direction this car is committed to.
    ///
    /// Moving cars: the direction of travel.  Stationary cars with pending
    /// stops: the direction the SCAN rule will pick next.  `None` when
    /// nothing is pending — the car will take passengers either way.
    pub fn committed_direction(&self) -> Option<Direction> {
        match self.motion {
            Motion::MovingUp   => Some(Direction::Up),
            Motion::MovingDown => Some(Direction::Down),
            Motion::Parked | Motion::Idle => {
                if self.pending_stops.is_empty() {
                    None
                } else if self.next_stop_toward(self.heading).is_some() {
                    Some(self.heading)
                } else {
                    Some(self.heading.opposite())
                }
            }
        }
    }

    // ── Per-tick state machine ────────────────────────────────────────────

    /// Advance the car one tick.  Returns the passengers delivered this tick
    /// (already marked `Arrived`) for the building to fold into statistics.
    pub fn step(&mut self) -> Vec<Person> {
        match self.motion {
            Motion::MovingUp => {
                self.current_floor = self.current_floor.above();
                self.heading = Direction::Up;
                self.after_move()
            }
            Motion::MovingDown => {
                self.current_floor = self.current_floor.below();
                self.heading = Direction::Down;
                self.after_move()
            }
            Motion::Parked => {
                self.dwell_remaining = self.dwell_remaining.saturating_sub(1);
                if self.dwell_remaining == 0 {
                    if self.pending_stops.is_empty() {
                        self.motion = Motion::Idle;
                        self.counters.idle_ticks += 1;
                    } else {
                        self.select_next_target();
                    }
                }
                Vec::new()
            }
            Motion::Idle => {
                // Pending stops on an idle car only appear on restored
                // snapshots; registration normally selects immediately.
                if self.pending_stops.is_empty() {
                    self.counters.idle_ticks += 1;
                } else {
                    self.select_next_target();
                }
                Vec::new()
            }
        }
    }

    /// Book-keeping after a one-floor move: riders accrue their ride tick
    /// for the traveled floor, then the car parks if this floor is pending.
    fn after_move(&mut self) -> Vec<Person> {
        self.counters.floors_traveled += 1;
        for rider in &mut self.onboard {
            rider.tick_ride();
        }
        if self.pending_stops.remove(&self.current_floor) {
            self.motion = Motion::Parked;
            self.dwell_remaining = self.dwell_ticks;
            self.target_floor = None;
            self.unload()
        } else {
            Vec::new()
        }
    }

    /// SCAN pick: nearest pending stop in the heading, flipping at most once.
    fn select_next_target(&mut self) {
        for _ in 0..2 {
            if let Some(stop) = self.next_stop_toward(self.heading) {
                self.target_floor = Some(stop);
                self.motion = match self.heading {
                    Direction::Up   => Motion::MovingUp,
                    Direction::Down => Motion::MovingDown,
                };
                return;
            }
            self.heading = self.heading.opposite();
        }
        // Unreachable while the pending set is nonempty (callers guard);
        // kept as the safe terminal state rather than a panic.
        self.motion = Motion::Idle;
        self.target_floor = None;
    }

    /// Nearest pending stop strictly beyond the current floor in `heading`.
    fn next_stop_toward(&self, heading: Direction) -> Option<FloorId> {
        match heading {
            Direction::Up => self
                .pending_stops
                .range((Excluded(self.current_floor), Unbounded))
                .next()
                .copied(),
            Direction::Down => self.pending_stops.range(..self.current_floor).next_back().copied(),
        }
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Commit the car to visit `floor`.
    ///
    /// Ignored when the car is already there or the stop is already pending.
    /// An idle car departs immediately (well, next tick) rather than waiting
    /// for another dwell cycle.
    pub fn register_stop(&mut self, floor: FloorId) {
        if floor == self.current_floor || self.pending_stops.contains(&floor) {
            return;
        }
        self.pending_stops.insert(floor);
        if self.motion == Motion::Idle {
            self.select_next_target();
        }
    }

    /// Take a passenger onboard: `Waiting → Riding`, destination registered
    /// as a stop.
    ///
    /// Returns the person back untouched when the car is full — the caller
    /// requeues them and the boarding is retried a later tick.
    pub fn board(&mut self, mut person: Person) -> Option<Person> {
        if self.onboard.len() >= self.capacity {
            return Some(person);
        }
        person.begin_ride();
        self.register_stop(person.destination());
        self.onboard.push(person);
        None
    }

    /// Unload every rider destined for the current floor.
    fn unload(&mut self) -> Vec<Person> {
        let here = self.current_floor;
        let (mut delivered, kept): (Vec<Person>, Vec<Person>) = std::mem::take(&mut self.onboard)
            .into_iter()
            .partition(|p| p.destination() == here);
        self.onboard = kept;
        for person in &mut delivered {
            person.complete();
            self.counters.delivered += 1;
            self.counters.ride_ticks += person.ride_ticks() as u64;
        }
        delivered
    }

    // ── Statistics drain ──────────────────────────────────────────────────

    /// Hand the accumulated counters to the aggregation pass and reset them.
    pub fn take_counters(&mut self) -> ElevatorCounters {
        std::mem::take(&mut self.counters)
    }
}
