//! JSON request documents.
//!
//! A document carries the network to load, the routing settings and a list
//! of queries. Loading is lenient: entities that cannot be added are logged
//! and skipped, and each query gets its own answer, error or not.

mod dto;
mod error;
mod handler;


use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::catalogue::TransportCatalogue;
use crate::domain::Coordinates;
use crate::router::RouteGraphBuilder;

pub use dto::{
    BaseRequest, BusRequest, BusResponse, ErrorResponse, RequestDocument, RouteItem,
    RouteResponse, StatRequest, StatResponse, StopRequest, StopResponse,
};
pub use error::RequestError;
pub use handler::RequestHandler;

/// Parse a request document from a reader.
pub fn read_document<R: Read>(reader: R) -> Result<RequestDocument, RequestError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a request document from a file.
pub fn read_document_from_path(path: impl AsRef<Path>) -> Result<RequestDocument, RequestError> {
    let file = File::open(path)?;
    read_document(BufReader::new(file))
}

/// Load the base requests of a document into a fresh catalogue.
///
/// Stops go in first, then road distances, then buses, so that entities may
/// refer to stops listed later in the document.
pub fn fill_catalogue(requests: &[BaseRequest]) -> TransportCatalogue {
    let mut catalogue = TransportCatalogue::new();

    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            let coordinates = Coordinates::new(stop.latitude, stop.longitude);
            if let Err(e) = catalogue.add_stop(stop.name.as_str(), coordinates) {
                warn!(error = %e, "Skipping stop");
            }
        }
    }

    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            for (neighbour, &meters) in &stop.road_distances {
                let Ok(distance) = u32::try_from(meters) else {
                    warn!(
                        from = %stop.name,
                        to = %neighbour,
                        meters,
                        "Skipping out-of-range road distance"
                    );
                    continue;
                };
                if let Err(e) = catalogue.set_distance(&stop.name, neighbour, distance) {
                    warn!(error = %e, from = %stop.name, "Skipping road distance");
                }
            }
        }
    }

    for request in requests {
        match request {
            BaseRequest::Bus(bus) => {
                if let Err(e) = catalogue.add_bus(bus.name.as_str(), &bus.stops, bus.is_roundtrip) {
                    warn!(error = %e, "Skipping bus");
                }
            }
            BaseRequest::Unknown => warn!("Skipping base request of unknown type"),
            BaseRequest::Stop(_) => {}
        }
    }

    debug!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        "Catalogue loaded"
    );
    catalogue
}

/// Load a document's network and answer all of its queries in order.
///
/// The routing graph is only built if some query asks for a trip. Invalid
/// routing settings leave it unbuilt: trip queries are then answered with
/// "not found" while the other queries are answered as usual.
pub fn process_document(document: &RequestDocument) -> Vec<StatResponse> {
    let catalogue = fill_catalogue(&document.base_requests);

    let needs_router = document
        .stat_requests
        .iter()
        .any(|request| request.kind == "Route");

    let router = if needs_router {
        let settings = document.routing_settings.unwrap_or_default();
        match settings.validate() {
            Ok(()) => Some(RouteGraphBuilder::new(&catalogue, settings).build()),
            Err(e) => {
                warn!(error = %e, "Invalid routing settings, trip queries will not be answered");
                None
            }
        }
    } else {
        None
    };

    let handler = RequestHandler::new(&catalogue, router.as_ref());
    document
        .stat_requests
        .iter()
        .map(|request| handler.handle(request))
        .collect()
}
