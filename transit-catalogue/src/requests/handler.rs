//! Answering queries against a loaded catalogue.

use tracing::{debug, warn};

use crate::catalogue::{BusesForStop, TransportCatalogue};
use crate::router::TransportRouter;

use super::dto::{
    BusResponse, ErrorResponse, RouteResponse, StatRequest, StatResponse, StopResponse,
};

/// Turns queries into responses.
///
/// Trip queries need a router; without one they are answered as not found.
pub struct RequestHandler<'a> {
    catalogue: &'a TransportCatalogue,
    router: Option<&'a TransportRouter<'a>>,
}

impl<'a> RequestHandler<'a> {
    pub fn new(
        catalogue: &'a TransportCatalogue,
        router: Option<&'a TransportRouter<'a>>,
    ) -> Self {
        Self { catalogue, router }
    }

    /// Answer one query.
    pub fn handle(&self, request: &StatRequest) -> StatResponse {
        let id = request.id;
        match request.kind.as_str() {
            "Bus" => match request.name.as_deref() {
                Some(name) => self.bus_info(id, name),
                None => StatResponse::Error(ErrorResponse::not_found(id)),
            },
            "Stop" => match request.name.as_deref() {
                Some(name) => self.stop_info(id, name),
                None => StatResponse::Error(ErrorResponse::not_found(id)),
            },
            "Route" => match (request.from.as_deref(), request.to.as_deref()) {
                (Some(from), Some(to)) => self.route_info(id, from, to),
                _ => StatResponse::Error(ErrorResponse::not_found(id)),
            },
            other => {
                warn!(request_id = id, kind = other, "Unsupported request type");
                StatResponse::Error(ErrorResponse::unknown_type(id))
            }
        }
    }

    /// Statistics of a bus.
    pub fn bus_info(&self, id: i64, name: &str) -> StatResponse {
        match self.catalogue.bus_statistics(name) {
            Some(stats) => StatResponse::Bus(BusResponse::new(id, &stats)),
            None => StatResponse::Error(ErrorResponse::not_found(id)),
        }
    }

    /// Buses calling at a stop.
    pub fn stop_info(&self, id: i64, name: &str) -> StatResponse {
        let buses = match self.catalogue.buses_for_stop(name) {
            BusesForStop::NotFound => return StatResponse::Error(ErrorResponse::not_found(id)),
            BusesForStop::NoBuses => Vec::new(),
            BusesForStop::Buses(names) => names.into_iter().map(str::to_string).collect(),
        };
        StatResponse::Stop(StopResponse {
            request_id: id,
            buses,
        })
    }

    /// Fastest trip between two stops.
    pub fn route_info(&self, id: i64, from: &str, to: &str) -> StatResponse {
        let Some(router) = self.router else {
            return StatResponse::Error(ErrorResponse::not_found(id));
        };
        match router.route(from, to) {
            Ok(itinerary) => StatResponse::Route(RouteResponse::new(id, &itinerary)),
            Err(e) => {
                debug!(request_id = id, error = %e, "Route not found");
                StatResponse::Error(ErrorResponse::not_found(id))
            }
        }
    }
}
