//! tower — a full day in a 12-floor office building.
//!
//! Runs 1,440 one-minute ticks: a scripted morning of deliveries plus random
//! background demand that swells during the peak windows, under the
//! energy-optimized dispatch policy.  Halfway through, the run is
//! snapshotted to JSON and restored, demonstrating host-side save/load.

use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;

use lift_core::Tick;
use lift_dispatch::Heuristic;
use lift_model::Motion;
use lift_sim::{Building, BuildingBuilder};
use lift_traffic::{RequestGenerator, TrafficPlan};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOORS:          u16   = 12;
const CARS:            u16   = 3;
const CAPACITY:        usize = 8;
const DWELL_TICKS:     u32   = 2;
const SEED:            u64   = 42;
const SIM_TICKS:       u64   = 1_440; // one day at 1 tick = 1 minute
const REPORT_INTERVAL: u64   = 240;   // every 4 simulated hours
const SNAPSHOT_TICK:   u64   = 720;   // noon

/// Per-tick probability of a spontaneous request.
const DEMAND_PEAK:     f64 = 0.20;
const DEMAND_OFF_PEAK: f64 = 0.03;

// ── Scripted traffic ──────────────────────────────────────────────────────────

// A courier round during the morning rush: ground floor up to the offices,
// then the return trips.
const SCENARIO_CSV: &str = "\
tick,origin,destination
420,0,7
420,0,3
425,0,10
431,0,5
460,7,0
466,3,0
472,10,0
480,5,0
";

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut building = BuildingBuilder::new(FLOORS, CARS, CAPACITY)
        .dwell_ticks(DWELL_TICKS)
        .heuristic(Heuristic::EnergyOptimized)
        .seed(SEED)
        .build()?;

    let mut plan = TrafficPlan::load_reader(Cursor::new(SCENARIO_CSV))?;
    let mut generator = RequestGenerator::new(SEED, FLOORS)?;

    println!(
        "tower: {FLOORS} floors, {CARS} cars (capacity {CAPACITY}), {} dispatch",
        building.heuristic()
    );

    let started = Instant::now();
    for t in 0..SIM_TICKS {
        let tick = Tick(t);

        // Scripted arrivals due this tick.
        for event in plan.drain_due(tick) {
            building.inject_request(event.origin, event.destination, tick)?;
        }

        // Background demand, heavier while the previous tick was peak.
        let demand = if building.peak_hour() { DEMAND_PEAK } else { DEMAND_OFF_PEAK };
        if generator.chance(demand) {
            let request = generator.next_request();
            building.inject_request(request.origin, request.destination, tick)?;
        }

        building.update(tick);

        if t == SNAPSHOT_TICK {
            building = checkpoint_roundtrip(&building)?;
        }
        if (t + 1) % REPORT_INTERVAL == 0 {
            report_progress(tick, &building);
        }
    }

    print_summary(&building, started);
    Ok(())
}

/// Serialize the building to JSON and bring it back — what a host save/load
/// layer does, minus the disk.
fn checkpoint_roundtrip(building: &Building) -> Result<Building> {
    let json = serde_json::to_string(&building.snapshot())?;
    let restored = Building::restore(serde_json::from_str(&json)?)?;
    println!(
        "  [checkpoint] snapshot at {}: {} bytes of JSON, restored cleanly",
        building.current_tick(),
        json.len()
    );
    Ok(restored)
}

fn report_progress(tick: Tick, building: &Building) {
    let stats = building.stats();
    let waiting: usize = building.floors().iter().map(|f| f.waiting_count()).sum();
    let riding: usize = building.elevators().iter().map(|e| e.occupancy()).sum();
    println!(
        "  {tick}: {} delivered, {waiting} waiting, {riding} riding{}",
        stats.transported,
        if building.peak_hour() { " (peak)" } else { "" }
    );
}

fn print_summary(building: &Building, started: Instant) {
    let stats = building.stats();
    println!("\n── day complete in {:.2?} ──", started.elapsed());
    println!("requests injected     {}", stats.injected);
    println!("passengers delivered  {}", stats.transported);
    println!("mean wait / ride / total  {:.1} / {:.1} / {:.1} ticks",
        stats.mean_wait_ticks(),
        stats.mean_ride_ticks(),
        stats.mean_journey_ticks()
    );
    println!("fleet floors traveled {}", stats.floors_traveled);
    println!("fleet idle ticks      {}", stats.idle_ticks);

    for car in building.elevators() {
        let state = match car.motion() {
            Motion::Idle       => "idle",
            Motion::Parked     => "parked",
            Motion::MovingUp   => "moving up",
            Motion::MovingDown => "moving down",
        };
        println!(
            "  car {}: floor {}, {state}, {}/{} aboard",
            car.id().0,
            car.current_floor().0,
            car.occupancy(),
            car.capacity()
        );
    }
}
