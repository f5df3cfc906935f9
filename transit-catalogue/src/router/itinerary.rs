//! Turning solver output back into a readable trip.

use tracing::debug;

use super::builder::{EdgeInfo, TransportRouter};

/// Error from planning a trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// One of the endpoints is not a known stop
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// Both stops exist but no sequence of buses connects them
    #[error("no route from {from} to {to}")]
    NoPath { from: String, to: String },
}

/// One step of a trip.
#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryLeg<'a> {
    /// Wait at a stop for the next bus.
    Wait { stop_name: &'a str, time: f64 },
    /// Ride a bus from a stop for a number of stops.
    Bus {
        bus: &'a str,
        from_stop: &'a str,
        span_count: usize,
        time: f64,
    },
}

impl ItineraryLeg<'_> {
    /// Minutes this leg takes.
    pub fn time(&self) -> f64 {
        match self {
            ItineraryLeg::Wait { time, .. } | ItineraryLeg::Bus { time, .. } => *time,
        }
    }
}

/// A minimum-time trip between two stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary<'a> {
    /// Total minutes, equal to the sum of the leg times.
    pub total_time: f64,
    pub legs: Vec<ItineraryLeg<'a>>,
}

impl<'a> TransportRouter<'a> {
    /// Plan the fastest trip from one stop to another.
    ///
    /// A trip starts by waiting at `from` and ends standing at `to`. Asking
    /// for a trip to the same stop yields an empty, zero-time itinerary.
    pub fn route(&self, from: &str, to: &str) -> Result<Itinerary<'a>, RouteError> {
        if from == to {
            return Ok(Itinerary {
                total_time: 0.0,
                legs: Vec::new(),
            });
        }

        let start = self
            .stop_vertices(from)
            .ok_or_else(|| RouteError::UnknownStop(from.to_string()))?;
        let finish = self
            .stop_vertices(to)
            .ok_or_else(|| RouteError::UnknownStop(to.to_string()))?;

        let Some(info) = self.router.build_route(start.wait, finish.wait) else {
            debug!(from, to, "No route between stops");
            return Err(RouteError::NoPath {
                from: from.to_string(),
                to: to.to_string(),
            });
        };

        let catalogue = self.catalogue;
        let legs = info
            .edges
            .iter()
            .map(|&edge| match *self.edge_info(edge) {
                EdgeInfo::Wait { stop, time } => ItineraryLeg::Wait {
                    stop_name: catalogue.stop_by_id(stop).name.as_str(),
                    time,
                },
                EdgeInfo::Ride {
                    bus,
                    from,
                    span_count,
                    time,
                } => ItineraryLeg::Bus {
                    bus: catalogue.bus_by_id(bus).name.as_str(),
                    from_stop: catalogue.stop_by_id(from).name.as_str(),
                    span_count,
                    time,
                },
            })
            .collect();

        Ok(Itinerary {
            total_time: info.weight,
            legs,
        })
    }
}
