//! The dispatcher: pending-call record and per-heuristic car selection.

use std::collections::VecDeque;

use lift_core::{Direction, ElevatorId, FloorId};
use lift_model::Elevator;

use crate::Heuristic;

// ── FloorCall ─────────────────────────────────────────────────────────────────

/// An unanswered hall call: the floor and the direction(s) requested there.
///
/// Both flags may be set when passengers on the floor want both directions.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FloorCall {
    pub floor: FloorId,
    pub up:    bool,
    pub down:  bool,
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

/// Selects which car answers a hall call under the active [`Heuristic`].
///
/// Stateless over the entities it reads — its only own state is the
/// arrival-ordered pending-call record that FCFS serves from.  The record is
/// kept under every heuristic (append on a new call, drop when a floor's
/// queue drains) so switching to FCFS mid-run resumes from a faithful
/// arrival order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dispatcher {
    heuristic:     Heuristic,
    pending_calls: VecDeque<FloorId>,
}

impl Dispatcher {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic, pending_calls: VecDeque::new() }
    }

    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Switch policy mid-run.  Pending calls and all car state carry over.
    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.heuristic = heuristic;
    }

    /// Arrival-ordered floors with unserved calls (oldest first).
    pub fn pending_calls(&self) -> impl Iterator<Item = FloorId> + '_ {
        self.pending_calls.iter().copied()
    }

    /// Record a call for `floor` unless it is already pending.
    pub fn note_call(&mut self, floor: FloorId) {
        if !self.pending_calls.contains(&floor) {
            self.pending_calls.push_back(floor);
        }
    }

    /// Forget the call record for `floor` (its queue drained).
    pub fn drop_call(&mut self, floor: FloorId) {
        self.pending_calls.retain(|&f| f != floor);
    }

    /// Pick a car for `call` and register the stop on it.
    ///
    /// Returns `None` when no car qualifies (FCFS with every car moving) —
    /// the call stays pending and is retried next tick, never escalated.
    pub fn dispatch(
        &mut self,
        call:      &FloorCall,
        fleet:     &mut [Elevator],
        peak_hour: bool,
    ) -> Option<ElevatorId> {
        match self.heuristic {
            Heuristic::Fcfs => self.dispatch_fcfs(fleet),
            Heuristic::WaitTimeOptimized => {
                assign_min(fleet, call, |e| wait_time_score(e, call))
            }
            Heuristic::EnergyOptimized => {
                assign_min(fleet, call, |e| energy_score(e, call, peak_hour))
            }
        }
    }

    /// FCFS always serves the *head* of the record, whatever floor triggered
    /// this invocation: (a) a car already en route to the head floor covers
    /// it; else (b) the first stationary car in fleet order takes it.
    fn dispatch_fcfs(&mut self, fleet: &mut [Elevator]) -> Option<ElevatorId> {
        let head = *self.pending_calls.front()?;

        if let Some(car) = fleet.iter().find(|e| e.has_stop(head)) {
            return Some(car.id());
        }
        if let Some(car) = fleet.iter_mut().find(|e| !e.is_moving()) {
            car.register_stop(head);
            return Some(car.id());
        }
        None
    }
}

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Register the call on the minimum-score car; ties go to the first car in
/// fleet order (strict `<` keeps the earlier index).
fn assign_min<F>(fleet: &mut [Elevator], call: &FloorCall, score: F) -> Option<ElevatorId>
where
    F: Fn(&Elevator) -> u32,
{
    let mut best: Option<(usize, u32)> = None;
    for (i, car) in fleet.iter().enumerate() {
        let s = score(car);
        if best.is_none_or(|(_, b)| s < b) {
            best = Some((i, s));
        }
    }
    let (i, _) = best?;
    fleet[i].register_stop(call.floor);
    Some(fleet[i].id())
}

/// Estimated ticks until `car` reaches the call floor.
///
/// Base travel distance, plus 2 per intermediate stop it would make on the
/// way, plus the full out-and-back cost of finishing the current sweep when
/// the call lies behind it, plus one tick per passenger already onboard,
/// plus a flat 5 when the requested direction opposes the car's heading.
pub(crate) fn wait_time_score(car: &Elevator, call: &FloorCall) -> u32 {
    let here = car.current_floor();
    let mut score = here.distance_to(call.floor);

    if car.is_moving() {
        for &stop in car.pending_stops() {
            let between = (here < stop && stop < call.floor) || (call.floor < stop && stop < here);
            if between {
                score += 2;
            }
        }

        let away = match car.heading() {
            Direction::Up   => call.floor < here,
            Direction::Down => call.floor > here,
        };
        if away {
            // Furthest pending stop in the travel direction: the sweep runs
            // there before the car can turn around.
            let sweep_end = match car.heading() {
                Direction::Up   => car.pending_stops().last().copied(),
                Direction::Down => car.pending_stops().first().copied(),
            };
            if let Some(end) = sweep_end {
                score += 2 * here.distance_to(end);
            }
        }
    }

    score += car.occupancy() as u32;

    if (call.up && car.heading() == Direction::Down)
        || (call.down && car.heading() == Direction::Up)
    {
        score += 5;
    }

    score
}

/// Estimated travel cost of sending `car` to the call floor.
///
/// During peak hours the cost is the bare distance — responsiveness beats
/// efficiency.  Off-peak, a moving car is half price when the call lies
/// along its travel direction and double when it would have to divert, plus
/// one per passenger onboard, plus the detour from every already-pending
/// stop to the call floor.
pub(crate) fn energy_score(car: &Elevator, call: &FloorCall, peak_hour: bool) -> u32 {
    let here = car.current_floor();
    let mut score = here.distance_to(call.floor);

    if peak_hour {
        return score;
    }

    if car.is_moving() {
        let along = match car.heading() {
            Direction::Up   => call.floor > here,
            Direction::Down => call.floor < here,
        };
        if along {
            score /= 2;
        } else {
            score *= 2;
        }
    }

    score += car.occupancy() as u32;

    for &stop in car.pending_stops() {
        score += stop.distance_to(call.floor);
    }

    score
}
