//! Stop types.

use std::fmt;

use super::Coordinates;

/// Index of a stop in the catalogue.
///
/// Ids are assigned contiguously from zero in insertion order and are never
/// reused, so they double as indices into per-stop tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

/// A named location where buses call.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Unique, case-sensitive name
    pub name: String,
    /// Position of the stop
    pub coordinates: Coordinates,
}

impl Stop {
    /// Create a new stop.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", StopId(7)), "StopId(7)");
    }

    #[test]
    fn ordering_follows_index() {
        assert!(StopId(1) < StopId(2));
        assert_eq!(StopId(3), StopId(3));
    }
}
