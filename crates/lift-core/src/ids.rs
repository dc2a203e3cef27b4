//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into per-floor/per-car `Vec`s via `id.0 as usize`, but
//! callers should prefer the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Sequential index of an injected transport request.
    pub struct PersonId(u32);
}

typed_id! {
    /// Index of a car in the fleet.  Fleet order is the dispatch tie-break order.
    pub struct ElevatorId(u16);
}

typed_id! {
    /// 0-based floor index.  `u16` keeps call records and stop sets compact
    /// (max 65,534 floors — taller than any building).
    pub struct FloorId(u16);
}

impl FloorId {
    /// Absolute floor gap between `self` and `other`.
    ///
    /// The base cost in every dispatch heuristic: one tick of travel per floor.
    #[inline]
    pub fn distance_to(self, other: FloorId) -> u32 {
        self.0.abs_diff(other.0) as u32
    }

    /// The floor directly above.
    #[inline]
    pub fn above(self) -> FloorId {
        FloorId(self.0 + 1)
    }

    /// The floor directly below.
    ///
    /// # Panics
    /// Panics in debug mode when called on the ground floor.
    #[inline]
    pub fn below(self) -> FloorId {
        FloorId(self.0 - 1)
    }
}
