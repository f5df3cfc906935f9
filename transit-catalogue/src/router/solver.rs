//! Single-source shortest paths over a [`DirectedWeightedGraph`].
//!
//! Paths are computed on demand with Dijkstra's algorithm and memoised in a
//! bounded cache, so repeated queries between the same vertices are cheap.
//! The graph is immutable once handed to the solver, which makes the solver
//! safe to share between threads.

use std::sync::Arc;

use moka::sync::Cache;
use ordered_float::OrderedFloat;
use pathfinding::prelude::dijkstra;
use tracing::trace;

use super::config::RouterConfig;
use super::graph::{DirectedWeightedGraph, EdgeId, VertexId};

/// A minimum-weight path.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    /// Sum of the edge weights along the path.
    pub weight: f64,
    /// Edges from source to target, in travel order.
    pub edges: Vec<EdgeId>,
}

/// Shortest-path solver owning its graph.
pub struct Router {
    graph: DirectedWeightedGraph,
    cache: Cache<(VertexId, VertexId), Option<Arc<RouteInfo>>>,
}

impl Router {
    /// Take ownership of a finished graph.
    pub fn new(graph: DirectedWeightedGraph, config: &RouterConfig) -> Self {
        Self {
            graph,
            cache: Cache::new(config.cache_capacity),
        }
    }

    /// The graph being searched.
    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// Minimum-weight path from `from` to `to`, or `None` if unreachable.
    ///
    /// A vertex reaches itself with weight zero and no edges.
    pub fn build_route(&self, from: VertexId, to: VertexId) -> Option<Arc<RouteInfo>> {
        if let Some(cached) = self.cache.get(&(from, to)) {
            trace!(from = from.0, to = to.0, "Route cache hit");
            return cached;
        }
        let route = self.shortest_path(from, to).map(Arc::new);
        self.cache.insert((from, to), route.clone());
        route
    }

    fn shortest_path(&self, from: VertexId, to: VertexId) -> Option<RouteInfo> {
        let n = self.graph.vertex_count();
        if from.0 >= n || to.0 >= n {
            return None;
        }

        let Some((vertices, cost)) = dijkstra(
            &from,
            |&vertex| {
                self.graph.incident_edges(vertex).iter().map(move |&id| {
                    let edge = self.graph.edge(id);
                    (edge.to, OrderedFloat(edge.weight))
                })
            },
            |&vertex| vertex == to,
        ) else {
            trace!(from = from.0, to = to.0, "No path");
            return None;
        };

        let edges: Vec<EdgeId> = vertices
            .windows(2)
            .filter_map(|pair| self.cheapest_edge(pair[0], pair[1]))
            .collect();

        trace!(
            from = from.0,
            to = to.0,
            weight = cost.0,
            edges = edges.len(),
            "Path found"
        );

        Some(RouteInfo {
            weight: cost.into_inner(),
            edges,
        })
    }

    /// The lightest edge between two adjacent path vertices.
    ///
    /// The search only switches to a strictly cheaper parallel edge, so the
    /// first of several equally light edges is the one it used.
    fn cheapest_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.graph
            .incident_edges(from)
            .iter()
            .copied()
            .filter(|&id| self.graph.edge(id).to == to)
            .fold(None, |best: Option<EdgeId>, id| match best {
                Some(b) if self.graph.edge(b).weight <= self.graph.edge(id).weight => Some(b),
                _ => Some(id),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::graph::Edge;

    fn edge(from: usize, to: usize, weight: f64) -> Edge {
        Edge {
            from: VertexId(from),
            to: VertexId(to),
            weight,
        }
    }

    fn router(vertices: usize, edges: &[Edge]) -> Router {
        let mut graph = DirectedWeightedGraph::new(vertices);
        for e in edges {
            graph.add_edge(*e);
        }
        Router::new(graph, &RouterConfig::default())
    }

    #[test]
    fn picks_cheaper_detour() {
        // 0 -> 1 costs 10 directly, 3 via 2
        let router = router(3, &[edge(0, 1, 10.0), edge(0, 2, 1.0), edge(2, 1, 2.0)]);

        let route = router.build_route(VertexId(0), VertexId(1)).unwrap();
        assert_eq!(route.weight, 3.0);
        assert_eq!(route.edges, vec![EdgeId(1), EdgeId(2)]);
    }

    #[test]
    fn self_route_is_empty() {
        let router = router(2, &[edge(0, 1, 1.0)]);
        let route = router.build_route(VertexId(0), VertexId(0)).unwrap();
        assert_eq!(route.weight, 0.0);
        assert!(route.edges.is_empty());
    }

    #[test]
    fn unreachable_is_none() {
        let router = router(3, &[edge(0, 1, 1.0)]);
        assert!(router.build_route(VertexId(1), VertexId(0)).is_none());
        assert!(router.build_route(VertexId(0), VertexId(2)).is_none());
    }

    #[test]
    fn out_of_range_is_none() {
        let router = router(2, &[edge(0, 1, 1.0)]);
        assert!(router.build_route(VertexId(0), VertexId(5)).is_none());
        assert!(router.build_route(VertexId(9), VertexId(0)).is_none());
    }

    #[test]
    fn tie_keeps_first_edge() {
        let router = router(2, &[edge(0, 1, 4.0), edge(0, 1, 4.0)]);
        let route = router.build_route(VertexId(0), VertexId(1)).unwrap();
        assert_eq!(route.edges, vec![EdgeId(0)]);
    }

    #[test]
    fn cheaper_parallel_edge_wins() {
        let router = router(2, &[edge(0, 1, 4.0), edge(0, 1, 2.5), edge(0, 1, 2.5)]);
        let route = router.build_route(VertexId(0), VertexId(1)).unwrap();
        assert_eq!(route.weight, 2.5);
        assert_eq!(route.edges, vec![EdgeId(1)]);
    }

    #[test]
    fn zero_weight_cycle_terminates() {
        let router = router(3, &[edge(0, 1, 0.0), edge(1, 0, 0.0), edge(1, 2, 1.0)]);
        let route = router.build_route(VertexId(0), VertexId(2)).unwrap();
        assert_eq!(route.weight, 1.0);
        assert_eq!(route.edges, vec![EdgeId(0), EdgeId(2)]);
    }

    #[test]
    fn repeated_query_is_stable() {
        let router = router(3, &[edge(0, 1, 1.5), edge(1, 2, 2.5)]);
        let first = router.build_route(VertexId(0), VertexId(2));
        let second = router.build_route(VertexId(0), VertexId(2));
        assert_eq!(first, second);
        assert_eq!(second.unwrap().weight, 4.0);
    }
}
