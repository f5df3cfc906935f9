//! Data transfer objects for request documents and their answers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalogue::BusStatistics;
use crate::router::{Itinerary, ItineraryLeg, RoutingSettings};

/// A complete request document.
///
/// Keys other than the ones below (such as render settings) are ignored.
#[derive(Debug, Deserialize)]
pub struct RequestDocument {
    /// Stops and buses to load
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Wait time and velocity for trip planning
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,

    /// Queries to answer, in order
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// An entity to load into the catalogue.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),

    /// Any other entity type; skipped on load
    #[serde(other)]
    Unknown,
}

/// A stop and the road distances from it to its neighbours.
#[derive(Debug, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Meters from this stop to each named neighbour.
    ///
    /// Wider than the catalogue's distance type so that a negative or
    /// oversized value is skipped on load instead of failing the document.
    #[serde(default)]
    pub road_distances: BTreeMap<String, i64>,
}

/// A bus route over named stops.
#[derive(Debug, Deserialize)]
pub struct BusRequest {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

/// A query.
///
/// Kept loose so that a malformed or unsupported query is answered with an
/// error instead of failing the whole document.
#[derive(Debug, Deserialize)]
pub struct StatRequest {
    pub id: i64,

    /// "Bus", "Stop" or "Route"
    #[serde(rename = "type")]
    pub kind: String,

    /// Bus or stop name
    pub name: Option<String>,

    /// Route origin
    pub from: Option<String>,

    /// Route destination
    pub to: Option<String>,
}

/// Answer to one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus(BusResponse),
    Stop(StopResponse),
    Route(RouteResponse),
    Error(ErrorResponse),
}

/// Statistics of a bus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub request_id: i64,
    pub curvature: f64,
    pub route_length: u64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

impl BusResponse {
    pub fn new(request_id: i64, stats: &BusStatistics) -> Self {
        Self {
            request_id,
            curvature: stats.curvature(),
            route_length: stats.route_length,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
        }
    }
}

/// Buses calling at a stop, sorted by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    pub request_id: i64,
    pub buses: Vec<String>,
}

/// A planned trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub request_id: i64,
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

impl RouteResponse {
    pub fn new(request_id: i64, itinerary: &Itinerary<'_>) -> Self {
        Self {
            request_id,
            total_time: itinerary.total_time,
            items: itinerary.legs.iter().map(RouteItem::from).collect(),
        }
    }
}

/// One leg of a planned trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl From<&ItineraryLeg<'_>> for RouteItem {
    fn from(leg: &ItineraryLeg<'_>) -> Self {
        let time = leg.time();
        match *leg {
            ItineraryLeg::Wait { stop_name, .. } => RouteItem::Wait {
                stop_name: stop_name.to_string(),
                time,
            },
            ItineraryLeg::Bus {
                bus, span_count, ..
            } => RouteItem::Bus {
                bus: bus.to_string(),
                span_count,
                time,
            },
        }
    }
}

/// A query that could not be answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub request_id: i64,
    pub error_message: String,
}

impl ErrorResponse {
    pub const NOT_FOUND: &'static str = "not found";
    pub const UNKNOWN_TYPE: &'static str = "unknown request type";

    pub fn not_found(request_id: i64) -> Self {
        Self {
            request_id,
            error_message: Self::NOT_FOUND.to_string(),
        }
    }

    pub fn unknown_type(request_id: i64) -> Self {
        Self {
            request_id,
            error_message: Self::UNKNOWN_TYPE.to_string(),
        }
    }
}
