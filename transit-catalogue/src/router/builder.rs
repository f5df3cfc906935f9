//! Construction of the two-layer routing graph.
//!
//! Every stop gets two vertices: a *wait* vertex (standing at the stop) and a
//! *ride* vertex (on a bus that was boarded there). A wait edge charges the
//! boarding wait once; a ride edge goes from the ride vertex of the boarding
//! stop straight to the wait vertex of every stop reachable on the same bus
//! without getting off. Riding through costs no extra waits, while changing
//! buses pays the wait again.

use tracing::{debug, trace};

use crate::catalogue::TransportCatalogue;
use crate::domain::{BusId, StopId};

use super::config::{RouterConfig, RoutingSettings};
use super::graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
use super::solver::Router;

/// The two graph vertices of a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopVertices {
    pub wait: VertexId,
    pub ride: VertexId,
}

impl StopVertices {
    /// Vertices for a stop: `2 * id` and `2 * id + 1`.
    fn for_stop(stop: StopId) -> Self {
        Self {
            wait: VertexId(2 * stop.0),
            ride: VertexId(2 * stop.0 + 1),
        }
    }
}

/// What a graph edge stands for, recorded when the edge is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeInfo {
    /// Wait at `stop` for the next bus.
    Wait { stop: StopId, time: f64 },
    /// Ride `bus` from `from` for `span_count` stops.
    Ride {
        bus: BusId,
        from: StopId,
        span_count: usize,
        time: f64,
    },
}

impl EdgeInfo {
    /// Minutes this edge takes.
    pub fn time(&self) -> f64 {
        match self {
            EdgeInfo::Wait { time, .. } | EdgeInfo::Ride { time, .. } => *time,
        }
    }
}

/// Builds a [`TransportRouter`] from a finished catalogue.
///
/// `build` consumes the builder, so a graph is built exactly once per
/// builder and never appended to afterwards.
pub struct RouteGraphBuilder<'a> {
    catalogue: &'a TransportCatalogue,
    settings: RoutingSettings,
    config: RouterConfig,
    graph: DirectedWeightedGraph,
    edges: Vec<EdgeInfo>,
}

impl<'a> RouteGraphBuilder<'a> {
    /// Start building over `catalogue`.
    ///
    /// The catalogue stays borrowed for as long as the resulting router
    /// lives, so it cannot change under the graph.
    pub fn new(catalogue: &'a TransportCatalogue, settings: RoutingSettings) -> Self {
        Self {
            catalogue,
            settings,
            config: RouterConfig::default(),
            graph: DirectedWeightedGraph::new(2 * catalogue.stop_count()),
            edges: Vec::new(),
        }
    }

    /// Use a non-default solver configuration.
    pub fn with_config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the graph and hand it to the solver.
    pub fn build(mut self) -> TransportRouter<'a> {
        let catalogue = self.catalogue;

        for (stop_id, _) in catalogue.stops() {
            self.add_wait_edge(stop_id);
        }

        for (bus_id, bus) in catalogue.buses() {
            if bus.is_degenerate() {
                trace!(bus = %bus.name, "Skipping bus with fewer than two stops");
                continue;
            }
            let before = self.edges.len();
            for direction in bus.directions() {
                self.add_ride_edges(bus_id, &direction);
            }
            trace!(bus = %bus.name, edges = self.edges.len() - before, "Added ride edges");
        }

        debug!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "Routing graph built"
        );

        TransportRouter {
            catalogue,
            router: Router::new(self.graph, &self.config),
            edges: self.edges,
        }
    }

    fn add_wait_edge(&mut self, stop: StopId) {
        let vertices = StopVertices::for_stop(stop);
        let time = self.settings.bus_wait_time;
        self.add_edge(vertices.wait, vertices.ride, EdgeInfo::Wait { stop, time });
    }

    /// One edge for every (board, alight) pair along one riding direction.
    ///
    /// Distance is carried forward from the previous alighting stop, so each
    /// boarding position costs a single pass over the rest of the sequence.
    fn add_ride_edges(&mut self, bus: BusId, stops: &[StopId]) {
        for i in 0..stops.len() {
            let board = StopVertices::for_stop(stops[i]);
            let mut distance = 0u64;
            for j in (i + 1)..stops.len() {
                distance += self.catalogue.road_distance(stops[j - 1], stops[j]);
                self.add_edge(
                    board.ride,
                    StopVertices::for_stop(stops[j]).wait,
                    EdgeInfo::Ride {
                        bus,
                        from: stops[i],
                        span_count: j - i,
                        time: self.settings.travel_time(distance),
                    },
                );
            }
        }
    }

    /// Add an edge weighted by the time its metadata records.
    fn add_edge(&mut self, from: VertexId, to: VertexId, info: EdgeInfo) -> EdgeId {
        let id = self.graph.add_edge(Edge {
            from,
            to,
            weight: info.time(),
        });
        debug_assert_eq!(id.0, self.edges.len());
        self.edges.push(info);
        id
    }
}

/// Trip planner over a frozen catalogue.
///
/// Holds the solver and the metadata of every graph edge. Queries take
/// `&self`, so one router can serve many threads at once.
pub struct TransportRouter<'a> {
    pub(super) catalogue: &'a TransportCatalogue,
    pub(super) router: Router,
    /// Indexed by `EdgeId`.
    pub(super) edges: Vec<EdgeInfo>,
}

impl<'a> TransportRouter<'a> {
    /// Build a router with default solver configuration.
    pub fn new(catalogue: &'a TransportCatalogue, settings: RoutingSettings) -> Self {
        RouteGraphBuilder::new(catalogue, settings).build()
    }

    /// The vertices of a stop, if the stop is known.
    pub fn stop_vertices(&self, name: &str) -> Option<StopVertices> {
        self.catalogue.stop_id(name).map(StopVertices::for_stop)
    }

    /// Metadata recorded for an edge.
    pub fn edge_info(&self, id: EdgeId) -> &EdgeInfo {
        &self.edges[id.0]
    }

    /// The underlying graph.
    pub fn graph(&self) -> &DirectedWeightedGraph {
        self.router.graph()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;

    fn catalogue() -> TransportCatalogue {
        let mut cat = TransportCatalogue::new();
        cat.add_stop("A", Coordinates::new(0.0, 0.0)).unwrap();
        cat.add_stop("B", Coordinates::new(0.0, 1.0)).unwrap();
        cat.add_stop("C", Coordinates::new(0.0, 2.0)).unwrap();
        cat.set_distance("A", "B", 1000).unwrap();
        cat.set_distance("B", "C", 1000).unwrap();
        cat
    }

    fn ride_edges(router: &TransportRouter<'_>) -> Vec<(StopId, usize, f64)> {
        router
            .edges
            .iter()
            .filter_map(|info| match *info {
                EdgeInfo::Ride {
                    from,
                    span_count,
                    time,
                    ..
                } => Some((from, span_count, time)),
                EdgeInfo::Wait { .. } => None,
            })
            .collect()
    }

    #[test]
    fn two_vertices_per_stop() {
        let cat = catalogue();
        let router = TransportRouter::new(&cat, RoutingSettings::new(5.0, 30.0));

        assert_eq!(router.graph().vertex_count(), 6);
        assert_eq!(
            router.stop_vertices("B"),
            Some(StopVertices {
                wait: VertexId(2),
                ride: VertexId(3)
            })
        );
        assert!(router.stop_vertices("Z").is_none());
    }

    #[test]
    fn wait_edges_only_without_buses() {
        let cat = catalogue();
        let router = TransportRouter::new(&cat, RoutingSettings::new(5.0, 30.0));

        assert_eq!(router.graph().edge_count(), 3);
        for (i, info) in router.edges.iter().enumerate() {
            assert_eq!(
                *info,
                EdgeInfo::Wait {
                    stop: StopId(i),
                    time: 5.0
                }
            );
            let edge = router.graph().edge(EdgeId(i));
            assert_eq!(edge.from, VertexId(2 * i));
            assert_eq!(edge.to, VertexId(2 * i + 1));
        }
    }

    #[test]
    fn line_has_edges_both_ways() {
        let mut cat = catalogue();
        cat.add_bus("2", &["A", "B", "C"], false).unwrap();
        let router = TransportRouter::new(&cat, RoutingSettings::new(5.0, 30.0));

        // 3 pairs forward, 3 pairs backward
        assert_eq!(
            ride_edges(&router),
            vec![
                (StopId(0), 1, 2.0),
                (StopId(0), 2, 4.0),
                (StopId(1), 1, 2.0),
                (StopId(2), 1, 2.0),
                (StopId(2), 2, 4.0),
                (StopId(1), 1, 2.0),
            ]
        );
        assert_eq!(router.graph().edge_count(), 3 + 6);
    }

    #[test]
    fn ride_edge_links_ride_to_wait() {
        let mut cat = catalogue();
        cat.add_bus("2", &["A", "B"], false).unwrap();
        let router = TransportRouter::new(&cat, RoutingSettings::new(5.0, 30.0));

        // First ride edge comes right after the three wait edges
        let edge = router.graph().edge(EdgeId(3));
        assert_eq!(edge.from, VertexId(1));
        assert_eq!(edge.to, VertexId(2));
        assert_eq!(
            *router.edge_info(EdgeId(3)),
            EdgeInfo::Ride {
                bus: BusId(0),
                from: StopId(0),
                span_count: 1,
                time: 2.0
            }
        );
    }

    #[test]
    fn roundtrip_rides_closing_leg() {
        let mut cat = catalogue();
        cat.set_distance("C", "A", 3000).unwrap();
        cat.add_bus("1", &["A", "B", "C"], true).unwrap();
        let router = TransportRouter::new(&cat, RoutingSettings::new(5.0, 30.0));

        let rides = ride_edges(&router);
        // Traversal A B C A: 4 positions, 6 forward pairs only
        assert_eq!(rides.len(), 6);
        assert!(rides.contains(&(StopId(2), 1, 6.0)));
        assert!(rides.contains(&(StopId(1), 2, 8.0)));
    }

    #[test]
    fn degenerate_bus_adds_nothing() {
        let mut cat = catalogue();
        cat.add_bus("solo", &["A"], false).unwrap();
        let router = TransportRouter::new(&cat, RoutingSettings::new(5.0, 30.0));
        assert!(ride_edges(&router).is_empty());
    }

    #[test]
    fn builder_accepts_config() {
        let mut cat = catalogue();
        cat.add_bus("2", &["A", "B"], false).unwrap();
        let router = RouteGraphBuilder::new(&cat, RoutingSettings::default())
            .with_config(RouterConfig { cache_capacity: 1 })
            .build();
        assert_eq!(router.graph().edge_count(), 5);
    }

    #[test]
    fn edge_info_time() {
        let wait = EdgeInfo::Wait {
            stop: StopId(0),
            time: 6.0,
        };
        let ride = EdgeInfo::Ride {
            bus: BusId(0),
            from: StopId(0),
            span_count: 3,
            time: 1.5,
        };
        assert_eq!(wait.time(), 6.0);
        assert_eq!(ride.time(), 1.5);
    }
}
