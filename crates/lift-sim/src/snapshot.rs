//! Opaque, versioned state snapshots.
//!
//! The core owns *what* is saved — every entity, counter, and pending call —
//! while the host owns *how*: `Snapshot` is `Serialize`/`Deserialize`, so a
//! save/load layer can push it through JSON, bincode, or anything else serde
//! speaks, without the engine knowing the format.

use lift_core::FloorId;

use crate::{Building, SnapshotError};

/// Bumped whenever the serialized shape of [`Building`] changes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A complete, self-contained copy of a building's state.
///
/// Produce with [`Building::snapshot`], restore with [`Building::restore`].
/// The inner state is deliberately private: a snapshot is a storage token,
/// not a second query surface.
#[derive(Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    version:  u32,
    building: Building,
}

impl Building {
    /// Capture the complete current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { version: SNAPSHOT_VERSION, building: self.clone() }
    }

    /// Rebuild a building from a snapshot.
    ///
    /// Validates the version and the structural invariants (floor/fleet
    /// counts, floor indices, car positions, capacities) so a tampered or
    /// corrupted snapshot is rejected here instead of derailing the tick
    /// loop later.  The failure path constructs nothing.
    pub fn restore(snapshot: Snapshot) -> Result<Building, SnapshotError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::Version {
                expected: SNAPSHOT_VERSION,
                got:      snapshot.version,
            });
        }

        let building = snapshot.building;
        let config = &building.config;
        config
            .validate()
            .map_err(|e| SnapshotError::Corrupt(e.to_string()))?;

        if building.floors.len() != config.floor_count as usize {
            return Err(SnapshotError::Corrupt(format!(
                "expected {} floors, snapshot has {}",
                config.floor_count,
                building.floors.len()
            )));
        }
        for (i, floor) in building.floors.iter().enumerate() {
            if floor.index() != FloorId(i as u16) {
                return Err(SnapshotError::Corrupt(format!(
                    "floor at position {i} claims index {}",
                    floor.index()
                )));
            }
        }

        if building.elevators.len() != config.elevator_count as usize {
            return Err(SnapshotError::Corrupt(format!(
                "expected {} cars, snapshot has {}",
                config.elevator_count,
                building.elevators.len()
            )));
        }
        for car in &building.elevators {
            if car.current_floor().index() >= building.floors.len() {
                return Err(SnapshotError::Corrupt(format!(
                    "car {} is at out-of-range floor {}",
                    car.id(),
                    car.current_floor()
                )));
            }
            if car.occupancy() > car.capacity() {
                return Err(SnapshotError::Corrupt(format!(
                    "car {} holds {} passengers over its capacity {}",
                    car.id(),
                    car.occupancy(),
                    car.capacity()
                )));
            }
            if let Some(stop) = car.pending_stops().last() {
                if stop.index() >= building.floors.len() {
                    return Err(SnapshotError::Corrupt(format!(
                        "car {} has out-of-range pending stop {stop}",
                        car.id()
                    )));
                }
            }
        }

        Ok(building)
    }
}
