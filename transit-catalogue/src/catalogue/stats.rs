//! Per-route statistics.

use crate::domain::Bus;

use super::TransportCatalogue;

/// Aggregates for one bus route over a complete run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BusStatistics {
    /// Stop calls on a complete run
    pub stop_count: usize,
    /// Distinct stops in the stored sequence
    pub unique_stop_count: usize,
    /// Road length in meters
    pub route_length: u64,
    /// Great-circle length in meters
    pub geo_length: f64,
}

impl BusStatistics {
    /// Ratio of road length to great-circle length.
    ///
    /// Zero for a route with no geographic extent.
    pub fn curvature(&self) -> f64 {
        if self.geo_length > 0.0 {
            self.route_length as f64 / self.geo_length
        } else {
            0.0
        }
    }
}

/// Walk a bus's traversal and accumulate its statistics.
///
/// Routes with fewer than two stops have nowhere to go and report all zeros.
pub(super) fn count_stations(catalogue: &TransportCatalogue, bus: &Bus) -> BusStatistics {
    if bus.is_degenerate() {
        return BusStatistics::default();
    }

    let route = bus.traversal();
    let (route_length, geo_length) = route.windows(2).fold((0u64, 0.0f64), |(road, geo), pair| {
        (
            road + catalogue.road_distance(pair[0], pair[1]),
            geo + catalogue.geo_distance(pair[0], pair[1]),
        )
    });

    BusStatistics {
        stop_count: bus.stop_count(),
        unique_stop_count: bus.unique_stop_count(),
        route_length,
        geo_length,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Coordinates, StopId};
    use proptest::prelude::*;

    const NAMES: [&str; 5] = ["S0", "S1", "S2", "S3", "S4"];

    /// Catalogue of five stops spread over a small area.
    /// Each recorded pair gets its straight-line distance (rounded up) plus its
    /// extra meters, so recorded distances never undercut geography.
    fn build(coords: &[(f64, f64)], recorded: &[(usize, usize, u32)]) -> TransportCatalogue {
        let mut cat = TransportCatalogue::new();
        for (name, &(lat, lng)) in NAMES.iter().zip(coords) {
            cat.add_stop(*name, Coordinates::new(lat, lng)).unwrap();
        }
        for &(from, to, extra) in recorded {
            let geo = cat.geo_distance(StopId(from), StopId(to)).ceil() as u32;
            let geo_back = cat.geo_distance(StopId(to), StopId(from)).ceil() as u32;
            cat.set_distance(NAMES[from], NAMES[to], geo.max(geo_back) + extra)
                .unwrap();
        }
        cat
    }

    fn coords() -> impl Strategy<Value = Vec<(f64, f64)>> {
        prop::collection::vec((55.0f64..56.0, 37.0f64..38.0), 5)
    }

    fn recorded() -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
        prop::collection::vec((0usize..5, 0usize..5, 0u32..5000), 0..10)
    }

    fn route() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(0usize..5, 2..8)
    }

    fn road(cat: &TransportCatalogue, stops: &[StopId]) -> u64 {
        stops
            .windows(2)
            .map(|pair| cat.road_distance(pair[0], pair[1]))
            .sum()
    }

    proptest! {
        /// A line's length is its forward length plus its backward length
        #[test]
        fn line_is_forward_plus_backward(c in coords(), r in recorded(), stops in route()) {
            let mut cat = build(&c, &r);
            let names: Vec<&str> = stops.iter().map(|&i| NAMES[i]).collect();
            cat.add_bus("L", &names, false).unwrap();

            let forward: Vec<StopId> = stops.iter().copied().map(StopId).collect();
            let backward: Vec<StopId> = forward.iter().rev().copied().collect();
            let stats = cat.bus_statistics("L").unwrap();

            prop_assert_eq!(stats.stop_count, 2 * stops.len() - 1);
            prop_assert_eq!(stats.route_length, road(&cat, &forward) + road(&cat, &backward));
        }

        /// Recorded distances that never undercut geography give curvature >= 1
        #[test]
        fn curvature_at_least_one(c in coords(), stops in route(), extra in 0u32..500) {
            let mut pairs = Vec::new();
            for from in 0..5 {
                for to in 0..5 {
                    pairs.push((from, to, extra));
                }
            }
            let mut cat = build(&c, &pairs);
            let names: Vec<&str> = stops.iter().map(|&i| NAMES[i]).collect();
            cat.add_bus("R", &names, true).unwrap();

            let stats = cat.bus_statistics("R").unwrap();
            if stats.geo_length > 0.0 {
                prop_assert!(stats.curvature() >= 1.0);
            } else {
                prop_assert_eq!(stats.curvature(), 0.0);
            }
        }

        /// Roundtrip stop count depends on whether the stored sequence is closed
        #[test]
        fn roundtrip_stop_count(c in coords(), stops in route()) {
            let mut cat = build(&c, &[]);
            let names: Vec<&str> = stops.iter().map(|&i| NAMES[i]).collect();
            cat.add_bus("R", &names, true).unwrap();

            let closed = stops.first() == stops.last();
            let stats = cat.bus_statistics("R").unwrap();
            prop_assert_eq!(stats.stop_count, if closed { stops.len() } else { stops.len() + 1 });
        }
    }
}
