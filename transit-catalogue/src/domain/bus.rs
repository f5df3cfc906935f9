//! Bus route types.
//!
//! A bus is either a closed loop (roundtrip) or a line that runs to its last
//! stop and back again. The shape decides how the stored stop sequence is
//! traversed, which in turn drives both the statistics and the routing graph.

use std::collections::HashSet;
use std::fmt;

use super::StopId;

/// Index of a bus in the catalogue.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub usize);

impl fmt::Debug for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BusId({})", self.0)
    }
}

/// A named bus route.
///
/// # Invariants
///
/// - Every id in `stops` refers to a stop of the catalogue that created it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    /// Unique route name
    pub name: String,
    /// Stops in stored order; a stop may appear more than once
    pub stops: Vec<StopId>,
    /// Closed loop if true, there-and-back line otherwise
    pub is_roundtrip: bool,
}

impl Bus {
    /// Create a new bus route.
    pub fn new(name: impl Into<String>, stops: Vec<StopId>, is_roundtrip: bool) -> Self {
        Self {
            name: name.into(),
            stops,
            is_roundtrip,
        }
    }

    /// Returns true if the stored sequence starts and ends at the same stop.
    pub fn is_closed(&self) -> bool {
        match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Returns true if the route has too few stops to travel anywhere.
    pub fn is_degenerate(&self) -> bool {
        self.stops.len() < 2
    }

    /// The full sequence of stops a bus visits on one complete run.
    ///
    /// - Roundtrip: the stored sequence, plus a closing call at the first stop
    ///   if the sequence is not already closed.
    /// - Line: the stored sequence forward, then backward without repeating
    ///   the turnaround stop.
    pub fn traversal(&self) -> Vec<StopId> {
        let mut route = self.stops.clone();
        if self.is_roundtrip {
            if !self.is_closed() {
                if let Some(&first) = self.stops.first() {
                    route.push(first);
                }
            }
        } else {
            route.extend(self.stops.iter().rev().skip(1));
        }
        route
    }

    /// Number of stop calls on one complete run.
    pub fn stop_count(&self) -> usize {
        let n = self.stops.len();
        if n == 0 {
            return 0;
        }
        if self.is_roundtrip {
            if self.is_closed() { n } else { n + 1 }
        } else {
            2 * n - 1
        }
    }

    /// Number of distinct stops in the stored sequence.
    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    /// Stop sequences that can be ridden without getting off.
    ///
    /// A roundtrip route has a single direction along its traversal; a line
    /// route can be ridden forward or backward along the stored sequence.
    pub fn directions(&self) -> Vec<Vec<StopId>> {
        if self.is_roundtrip {
            vec![self.traversal()]
        } else {
            vec![
                self.stops.clone(),
                self.stops.iter().rev().copied().collect(),
            ]
        }
    }
}
