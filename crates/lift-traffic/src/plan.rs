//! CSV traffic plans.
//!
//! # CSV format
//!
//! One row per scripted request:
//!
//! ```csv
//! tick,origin,destination
//! 0,0,4
//! 0,3,1
//! 12,4,0
//! ```
//!
//! Rows need not be sorted; loading sorts them by tick (stable, so same-tick
//! rows keep their file order).  Floor validity is *not* checked here — the
//! `Building` boundary validates on injection, keeping that rule in one
//! place.

use std::collections::VecDeque;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{FloorId, Tick};

use crate::TrafficError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TrafficRecord {
    tick:        u64,
    origin:      u16,
    destination: u16,
}

// ── TrafficEvent ──────────────────────────────────────────────────────────────

/// One scripted request: who appears where, and when.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TrafficEvent {
    pub tick:        Tick,
    pub origin:      FloorId,
    pub destination: FloorId,
}

// ── TrafficPlan ───────────────────────────────────────────────────────────────

/// A tick-ordered queue of scripted requests.
///
/// Drive it alongside the building: each tick, drain the due events and
/// inject them.
#[derive(Clone, Debug, Default)]
pub struct TrafficPlan {
    events: VecDeque<TrafficEvent>,
}

impl TrafficPlan {
    /// Load a plan from a CSV file.
    pub fn load_csv(path: &Path) -> Result<Self, TrafficError> {
        let file = std::fs::File::open(path).map_err(TrafficError::Io)?;
        Self::load_reader(file)
    }

    /// Like [`load_csv`][Self::load_csv] but accepts any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`) or embedded scenarios.
    pub fn load_reader<R: Read>(reader: R) -> Result<Self, TrafficError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut events: Vec<TrafficEvent> = Vec::new();

        for result in csv_reader.deserialize::<TrafficRecord>() {
            let row = result.map_err(|e| TrafficError::Parse(e.to_string()))?;
            events.push(TrafficEvent {
                tick:        Tick(row.tick),
                origin:      FloorId(row.origin),
                destination: FloorId(row.destination),
            });
        }

        events.sort_by_key(|e| e.tick);
        Ok(Self { events: events.into() })
    }

    /// Remove and return every event due at or before `now`, oldest first.
    pub fn drain_due(&mut self, now: Tick) -> Vec<TrafficEvent> {
        let split = self
            .events
            .iter()
            .position(|e| e.tick > now)
            .unwrap_or(self.events.len());
        self.events.drain(..split).collect()
    }

    /// Tick of the next pending event, if any.
    pub fn next_tick(&self) -> Option<Tick> {
        self.events.front().map(|e| e.tick)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
