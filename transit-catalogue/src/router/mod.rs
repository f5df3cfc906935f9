//! Minimum-time trip planning.
//!
//! The catalogue is turned into a weighted directed graph with a wait vertex
//! and a ride vertex per stop. A shortest-path solver runs over that graph,
//! and its edge sequences are mapped back into wait and ride legs.

mod builder;
mod config;
mod graph;
mod itinerary;
mod solver;

pub use builder::{EdgeInfo, RouteGraphBuilder, StopVertices, TransportRouter};
pub use config::{RouterConfig, RoutingSettings, SettingsError};
pub use graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
pub use itinerary::{Itinerary, ItineraryLeg, RouteError};
pub use solver::{RouteInfo, Router};
