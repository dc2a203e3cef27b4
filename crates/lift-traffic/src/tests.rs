//! Unit tests for traffic sources.

use std::io::Cursor;

use lift_core::{FloorId, Tick};

use crate::{RequestGenerator, TrafficError, TrafficPlan};

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator_tests {
    use super::*;

    #[test]
    fn requests_are_always_well_formed() {
        let mut generator = RequestGenerator::new(42, 6).unwrap();
        for _ in 0..1_000 {
            let r = generator.next_request();
            assert!(r.origin.0 < 6 && r.destination.0 < 6);
            assert_ne!(r.origin, r.destination);
        }
    }

    #[test]
    fn same_seed_replays_the_same_stream() {
        let mut a = RequestGenerator::new(9, 10).unwrap();
        let mut b = RequestGenerator::new(9, 10).unwrap();
        assert_eq!(a.burst(50), b.burst(50));
    }

    #[test]
    fn both_directions_occur() {
        let mut generator = RequestGenerator::new(1, 8).unwrap();
        let requests = generator.burst(200);
        assert!(requests.iter().any(|r| r.destination > r.origin));
        assert!(requests.iter().any(|r| r.destination < r.origin));
    }

    #[test]
    fn single_floor_building_rejected() {
        assert!(RequestGenerator::new(0, 1).is_err());
    }
}

// ── Traffic plan ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod plan_tests {
    use super::*;

    const SCENARIO: &str = "\
tick,origin,destination
12,4,0
0,0,4
0,3,1
5,2,5
";

    #[test]
    fn loads_and_sorts_by_tick() {
        let plan = TrafficPlan::load_reader(Cursor::new(SCENARIO)).unwrap();
        assert_eq!(plan.len(), 4);
        assert_eq!(plan.next_tick(), Some(Tick(0)));
    }

    #[test]
    fn drain_due_returns_everything_up_to_now() {
        let mut plan = TrafficPlan::load_reader(Cursor::new(SCENARIO)).unwrap();

        let due = plan.drain_due(Tick(5));
        assert_eq!(due.len(), 3);
        assert!(due.iter().all(|e| e.tick <= Tick(5)));
        // Same-tick rows keep their file order.
        assert_eq!(due[0].origin, FloorId(0));
        assert_eq!(due[1].origin, FloorId(3));

        assert_eq!(plan.len(), 1);
        assert!(plan.drain_due(Tick(11)).is_empty());
        assert_eq!(plan.drain_due(Tick(12)).len(), 1);
        assert!(plan.is_empty());
    }

    #[test]
    fn header_only_file_is_an_empty_plan() {
        let plan = TrafficPlan::load_reader(Cursor::new("tick,origin,destination\n")).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.next_tick(), None);
    }

    #[test]
    fn malformed_rows_are_parse_errors() {
        let bad = "tick,origin,destination\n0,not_a_floor,4\n";
        assert!(matches!(
            TrafficPlan::load_reader(Cursor::new(bad)),
            Err(TrafficError::Parse(_))
        ));
    }
}
