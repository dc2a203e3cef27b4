//! Unit tests for the entity state machines.

use lift_core::{Direction, ElevatorId, FloorId, PersonId, Tick};

use crate::{Elevator, Floor, Motion, Person, PersonState};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn person(id: u32, origin: u16, destination: u16) -> Person {
    Person::new(PersonId(id), FloorId(origin), FloorId(destination), Tick::ZERO)
}

fn car(capacity: usize, dwell_ticks: u32) -> Elevator {
    Elevator::new(ElevatorId(0), capacity, dwell_ticks)
}

/// Step until the car parks (bounded so a broken state machine fails loudly).
fn step_until_parked(elevator: &mut Elevator) -> Vec<Person> {
    for _ in 0..64 {
        let delivered = elevator.step();
        if elevator.motion() == Motion::Parked {
            return delivered;
        }
    }
    panic!("car never parked: {:?}", elevator.motion());
}

// ── Person lifecycle ──────────────────────────────────────────────────────────

#[cfg(test)]
mod person_tests {
    use super::*;

    #[test]
    fn counters_accrue_only_in_matching_state() {
        let mut p = person(0, 1, 4);
        p.tick_ride(); // not riding yet
        p.tick_wait();
        assert_eq!((p.wait_ticks(), p.ride_ticks()), (1, 0));

        p.begin_ride();
        p.tick_wait(); // not waiting any more
        p.tick_ride();
        assert_eq!((p.wait_ticks(), p.ride_ticks()), (1, 1));

        p.complete();
        p.tick_wait();
        p.tick_ride();
        assert_eq!((p.wait_ticks(), p.ride_ticks()), (1, 1), "frozen after arrival");
        assert_eq!(p.total_ticks(), 2);
        assert_eq!(p.state(), PersonState::Arrived);
    }

    #[test]
    fn direction_follows_floor_order() {
        assert_eq!(person(0, 1, 4).direction(), Direction::Up);
        assert_eq!(person(1, 4, 1).direction(), Direction::Down);
    }
}

// ── Floor queue and call flags ────────────────────────────────────────────────

#[cfg(test)]
mod floor_tests {
    use super::*;

    #[test]
    fn enqueue_presses_matching_button() {
        let mut floor = Floor::new(FloorId(2));
        floor.enqueue(person(0, 2, 5));
        assert!(floor.up_requested() && !floor.down_requested());

        floor.enqueue(person(1, 2, 0));
        assert!(floor.up_requested() && floor.down_requested());
    }

    #[test]
    fn refresh_recomputes_from_remaining_queue() {
        let mut floor = Floor::new(FloorId(2));
        floor.enqueue(person(0, 2, 5)); // up
        floor.enqueue(person(1, 2, 0)); // down

        let boarded = floor.pop_waiting().unwrap();
        assert_eq!(boarded.id(), PersonId(0));
        floor.refresh_calls();
        assert!(!floor.up_requested() && floor.down_requested());

        floor.pop_waiting();
        floor.refresh_calls();
        assert!(!floor.has_call());
    }

    #[test]
    fn requeue_preserves_relative_order() {
        let mut floor = Floor::new(FloorId(0));
        for id in 0..3 {
            floor.enqueue(person(id, 0, 3));
        }
        // Pop all three, requeue the first two in pop order.
        let a = floor.pop_waiting().unwrap();
        let b = floor.pop_waiting().unwrap();
        let c = floor.pop_waiting().unwrap();
        floor.requeue(a);
        floor.requeue(b);
        floor.requeue(c);
        let order: Vec<PersonId> = std::iter::from_fn(|| floor.pop_waiting())
            .map(|p| p.id())
            .collect();
        assert_eq!(order, vec![PersonId(0), PersonId(1), PersonId(2)]);
    }

    #[test]
    fn tick_waiting_touches_every_queued_person() {
        let mut floor = Floor::new(FloorId(0));
        floor.enqueue(person(0, 0, 3));
        floor.enqueue(person(1, 0, 2));
        floor.tick_waiting();
        floor.tick_waiting();
        assert!(floor.waiting().all(|p| p.wait_ticks() == 2));
    }
}

// ── Elevator state machine ────────────────────────────────────────────────────

#[cfg(test)]
mod elevator_tests {
    use super::*;

    #[test]
    fn idle_car_departs_on_registration() {
        let mut e = car(4, 3);
        e.register_stop(FloorId(3));
        assert_eq!(e.motion(), Motion::MovingUp);
        assert_eq!(e.target_floor(), Some(FloorId(3)));
    }

    #[test]
    fn register_stop_ignores_current_floor_and_duplicates() {
        let mut e = car(4, 3);
        e.register_stop(FloorId(0));
        assert_eq!(e.motion(), Motion::Idle);
        assert!(e.pending_stops().is_empty());

        e.register_stop(FloorId(2));
        e.register_stop(FloorId(2));
        assert_eq!(e.pending_stops().len(), 1);
    }

    #[test]
    fn moves_one_floor_per_tick_and_parks_at_target() {
        let mut e = car(4, 2);
        e.register_stop(FloorId(2));
        e.step();
        assert_eq!(e.current_floor(), FloorId(1));
        assert!(e.is_moving());
        e.step();
        assert_eq!(e.current_floor(), FloorId(2));
        assert_eq!(e.motion(), Motion::Parked);
        assert!(!e.has_stop(FloorId(2)), "serviced stop is removed on arrival");
    }

    #[test]
    fn dwell_holds_the_car_before_the_next_leg() {
        let mut e = car(4, 3);
        e.register_stop(FloorId(1));
        e.step(); // arrives, parks
        e.register_stop(FloorId(4));
        e.step();
        e.step();
        assert_eq!(e.motion(), Motion::Parked, "two of three dwell ticks spent");
        e.step();
        assert_eq!(e.motion(), Motion::MovingUp, "departs as the dwell expires");
    }

    #[test]
    fn scan_continues_heading_then_flips_once() {
        let mut e = car(4, 1);
        e.register_stop(FloorId(3));
        step_until_parked(&mut e); // now at 3, heading up
        e.register_stop(FloorId(1));
        e.step(); // dwell expires; nothing above → flip down
        assert_eq!(e.motion(), Motion::MovingDown);
        assert_eq!(e.heading(), Direction::Down);
        assert_eq!(e.target_floor(), Some(FloorId(1)));
    }

    #[test]
    fn nearest_stop_in_heading_wins() {
        let mut e = car(4, 1);
        e.register_stop(FloorId(5));
        e.register_stop(FloorId(2));
        // Idle pick already happened at the first registration (target 5);
        // the nearer stop 2 is reached first anyway while sweeping up.
        let delivered = step_until_parked(&mut e);
        assert!(delivered.is_empty());
        assert_eq!(e.current_floor(), FloorId(2));
        assert!(e.has_stop(FloorId(5)), "further stop still pending");
    }

    #[test]
    fn unplanned_stop_registered_mid_flight_is_serviced() {
        let mut e = car(4, 1);
        e.register_stop(FloorId(4));
        e.step(); // at 1
        e.register_stop(FloorId(2));
        e.step(); // at 2 → coincides with a pending stop
        assert_eq!(e.current_floor(), FloorId(2));
        assert_eq!(e.motion(), Motion::Parked);
        assert!(e.has_stop(FloorId(4)));
    }

    #[test]
    fn boarding_registers_destination_and_starts_ride() {
        let mut e = car(4, 3);
        let returned = e.board(person(0, 0, 2));
        assert!(returned.is_none());
        assert_eq!(e.occupancy(), 1);
        assert!(e.has_stop(FloorId(2)));
        assert!(e.onboard().all(|p| p.state() == PersonState::Riding));
    }

    #[test]
    fn full_car_returns_the_person_untouched() {
        let mut e = car(1, 3);
        assert!(e.board(person(0, 0, 2)).is_none());
        let bounced = e.board(person(1, 0, 3)).expect("car is full");
        assert_eq!(bounced.id(), PersonId(1));
        assert_eq!(bounced.state(), PersonState::Waiting);
        assert_eq!(e.occupancy(), 1);
        assert!(!e.has_stop(FloorId(3)), "rejected destination not registered");
    }

    #[test]
    fn one_floor_trip_records_one_ride_tick() {
        let mut e = car(4, 1);
        e.board(person(0, 0, 1));
        let delivered = e.step();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].ride_ticks(), 1);
        assert_eq!(delivered[0].state(), PersonState::Arrived);
    }

    #[test]
    fn unload_delivers_only_riders_for_this_floor() {
        let mut e = car(4, 1);
        e.board(person(0, 0, 2));
        e.board(person(1, 0, 4));
        let delivered = step_until_parked(&mut e);
        assert_eq!(e.current_floor(), FloorId(2));
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].id(), PersonId(0));
        assert_eq!(e.occupancy(), 1);
    }

    #[test]
    fn counters_drain_once() {
        let mut e = car(4, 1);
        e.board(person(0, 0, 2));
        step_until_parked(&mut e);
        let counters = e.take_counters();
        assert_eq!(counters.delivered, 1);
        assert_eq!(counters.floors_traveled, 2);
        assert_eq!(counters.ride_ticks, 2);
        assert_eq!(e.take_counters(), Default::default(), "second drain is empty");
    }

    #[test]
    fn idle_car_accrues_idle_ticks() {
        let mut e = car(4, 3);
        e.step();
        e.step();
        assert_eq!(e.take_counters().idle_ticks, 2);
    }

    #[test]
    fn car_never_overshoots_its_stops() {
        let mut e = car(4, 1);
        e.register_stop(FloorId(3));
        for _ in 0..20 {
            e.step();
            assert!(e.current_floor() <= FloorId(3));
        }
    }

    #[test]
    fn committed_direction_reflects_motion_and_pending() {
        let mut e = car(4, 1);
        assert_eq!(e.committed_direction(), None);

        e.register_stop(FloorId(3));
        assert_eq!(e.committed_direction(), Some(Direction::Up));

        step_until_parked(&mut e); // parked at 3, heading up, nothing pending
        assert_eq!(e.committed_direction(), None);

        e.register_stop(FloorId(1));
        // Parked, heading up, but the only stop is below → committed down.
        assert_eq!(e.committed_direction(), Some(Direction::Down));
    }
}
