//! Vertical travel direction.

use std::fmt;

use crate::FloorId;

/// Which way a car (or a waiting passenger) wants to travel.
///
/// Floors keep one call flag per direction; cars keep their last committed
/// direction across stops so the SCAN sweep can continue where it left off.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The reverse direction.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Direction of travel from `from` to `to`, or `None` when they are the
    /// same floor (no travel needed).
    #[inline]
    pub fn between(from: FloorId, to: FloorId) -> Option<Direction> {
        match to.0.cmp(&from.0) {
            std::cmp::Ordering::Greater => Some(Direction::Up),
            std::cmp::Ordering::Less    => Some(Direction::Down),
            std::cmp::Ordering::Equal   => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up   => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}
