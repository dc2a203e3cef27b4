//! Random request generation.

use lift_core::{FloorId, LiftError, LiftResult, SimRng};

/// One transport demand: somebody at `origin` wants to reach `destination`.
///
/// Always well-formed: `origin != destination`, both within the floor count
/// the generator was built with.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TravelRequest {
    pub origin:      FloorId,
    pub destination: FloorId,
}

/// Uniform random requests over a building's floors.
///
/// Deterministic: the same seed yields the same request stream, so simulation
/// runs comparing heuristics can replay identical traffic.
pub struct RequestGenerator {
    rng:         SimRng,
    floor_count: u16,
}

impl RequestGenerator {
    pub fn new(seed: u64, floor_count: u16) -> LiftResult<Self> {
        if floor_count < 2 {
            return Err(LiftError::Config(format!(
                "request generation needs at least 2 floors, got {floor_count}"
            )));
        }
        Ok(Self { rng: SimRng::new(seed), floor_count })
    }

    /// Draw one request: uniform origin, uniform destination over the
    /// remaining floors (no rejection loop — the destination draw skips the
    /// origin by construction).
    pub fn next_request(&mut self) -> TravelRequest {
        let origin = self.rng.gen_range(0..self.floor_count);
        let mut destination = self.rng.gen_range(0..self.floor_count - 1);
        if destination >= origin {
            destination += 1;
        }
        TravelRequest { origin: FloorId(origin), destination: FloorId(destination) }
    }

    /// Draw a batch of requests arriving at the same moment.
    pub fn burst(&mut self, count: usize) -> Vec<TravelRequest> {
        (0..count).map(|_| self.next_request()).collect()
    }

    /// `true` with probability `p` — for drivers that inject with some
    /// chance per tick.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }
}
