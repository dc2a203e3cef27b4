//! A single transport request and its lifecycle counters.

use lift_core::{Direction, FloorId, PersonId, Tick};

/// Lifecycle of a request: strictly forward, no regression.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersonState {
    /// In a floor's waiting queue.
    Waiting,
    /// Onboard a car.
    Riding,
    /// Delivered; counters frozen.
    Arrived,
}

/// One passenger: an origin→destination request plus timing counters.
///
/// `wait_ticks` accrues only while `Waiting`, `ride_ticks` only while
/// `Riding` (one per floor actually traveled).  Once `Arrived` both freeze,
/// so `total_ticks` is fixed from that point on.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    id:           PersonId,
    origin:       FloorId,
    destination:  FloorId,
    state:        PersonState,
    wait_ticks:   u32,
    ride_ticks:   u32,
    created_tick: Tick,
}

impl Person {
    /// A fresh `Waiting` request.  The caller (the `Building` boundary) has
    /// already validated that `origin != destination` and both are in range.
    pub fn new(id: PersonId, origin: FloorId, destination: FloorId, created_tick: Tick) -> Self {
        Self {
            id,
            origin,
            destination,
            state: PersonState::Waiting,
            wait_ticks: 0,
            ride_ticks: 0,
            created_tick,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[inline]
    pub fn origin(&self) -> FloorId {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> FloorId {
        self.destination
    }

    #[inline]
    pub fn state(&self) -> PersonState {
        self.state
    }

    #[inline]
    pub fn wait_ticks(&self) -> u32 {
        self.wait_ticks
    }

    #[inline]
    pub fn ride_ticks(&self) -> u32 {
        self.ride_ticks
    }

    #[inline]
    pub fn created_tick(&self) -> Tick {
        self.created_tick
    }

    /// Wait plus ride time.  Final once the person has `Arrived`.
    #[inline]
    pub fn total_ticks(&self) -> u32 {
        self.wait_ticks + self.ride_ticks
    }

    /// The direction this person needs a car to travel.
    ///
    /// Never `None`: `origin != destination` is enforced at injection.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::between(self.origin, self.destination).unwrap_or(Direction::Up)
    }

    // ── Counter ticks ─────────────────────────────────────────────────────

    /// One tick spent in a waiting queue.  No-op outside `Waiting`.
    pub fn tick_wait(&mut self) {
        if self.state == PersonState::Waiting {
            self.wait_ticks += 1;
        }
    }

    /// One floor traveled onboard.  No-op outside `Riding`.
    pub fn tick_ride(&mut self) {
        if self.state == PersonState::Riding {
            self.ride_ticks += 1;
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// `Waiting → Riding`, on boarding a car.
    pub fn begin_ride(&mut self) {
        debug_assert_eq!(self.state, PersonState::Waiting);
        if self.state == PersonState::Waiting {
            self.state = PersonState::Riding;
        }
    }

    /// `Riding → Arrived`, on unloading at the destination.  Counters are
    /// frozen from here on.
    pub fn complete(&mut self) {
        debug_assert_eq!(self.state, PersonState::Riding);
        if self.state == PersonState::Riding {
            self.state = PersonState::Arrived;
        }
    }
}
