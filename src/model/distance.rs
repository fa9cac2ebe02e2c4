// Tentative distances for the path automata

use super::Weight;
use std::fmt;

/// A best-known distance; `Infinite` means "not reached yet"
///
/// Ordering puts `Infinite` above every finite value, so a plain `<` is the
/// relaxation test. Adding a weight to `Infinite` stays `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Distance {
    Finite(i64),
    #[default]
    Infinite,
}

impl Distance {
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(self) -> Option<i64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }

    /// Extend a path by one edge
    pub fn plus(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }

    /// Join two path segments; infinite if either is unreachable
    pub fn join(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a.saturating_add(b)),
            _ => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "∞"),
        }
    }
}
