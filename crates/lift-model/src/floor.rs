//! A floor: its FIFO waiting queue and hall-call flags.

use std::collections::VecDeque;

use lift_core::{Direction, FloorId};

use crate::Person;

/// One floor of the building.
///
/// Call-flag invariant: a flag is set iff at least one queued person needs
/// that direction.  The flags are set on enqueue and recomputed after every
/// boarding pass via [`refresh_calls`][Floor::refresh_calls].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor {
    index:          FloorId,
    waiting:        VecDeque<Person>,
    up_requested:   bool,
    down_requested: bool,
}

impl Floor {
    pub fn new(index: FloorId) -> Self {
        Self {
            index,
            waiting: VecDeque::new(),
            up_requested: false,
            down_requested: false,
        }
    }

    #[inline]
    pub fn index(&self) -> FloorId {
        self.index
    }

    #[inline]
    pub fn up_requested(&self) -> bool {
        self.up_requested
    }

    #[inline]
    pub fn down_requested(&self) -> bool {
        self.down_requested
    }

    /// An unanswered hall call in either direction.
    #[inline]
    pub fn has_call(&self) -> bool {
        self.up_requested || self.down_requested
    }

    #[inline]
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    #[inline]
    pub fn has_waiting(&self) -> bool {
        !self.waiting.is_empty()
    }

    // ── Queue operations ──────────────────────────────────────────────────

    /// Append a person to the back of the queue and press their call button.
    pub fn enqueue(&mut self, person: Person) {
        match person.direction() {
            Direction::Up   => self.up_requested = true,
            Direction::Down => self.down_requested = true,
        }
        self.waiting.push_back(person);
    }

    /// Pop the person at the front of the queue, if any.
    pub fn pop_waiting(&mut self) -> Option<Person> {
        self.waiting.pop_front()
    }

    /// Return a person (direction mismatch or full car) to the back of the
    /// queue.  Successive requeues preserve their relative order.
    pub fn requeue(&mut self, person: Person) {
        self.waiting.push_back(person);
    }

    /// One waiting tick for every queued person.
    pub fn tick_waiting(&mut self) {
        for person in &mut self.waiting {
            person.tick_wait();
        }
    }

    // ── Call flags ────────────────────────────────────────────────────────

    /// Recompute both flags from the remaining queue.  Clears them when the
    /// queue is empty.
    pub fn refresh_calls(&mut self) {
        self.up_requested = false;
        self.down_requested = false;
        for person in &self.waiting {
            match person.direction() {
                Direction::Up   => self.up_requested = true,
                Direction::Down => self.down_requested = true,
            }
        }
    }

    pub fn clear_calls(&mut self) {
        self.up_requested = false;
        self.down_requested = false;
    }

    /// Read-only view of the queue, front first (for rendering layers).
    pub fn waiting(&self) -> impl Iterator<Item = &Person> {
        self.waiting.iter()
    }
}
