//! The transport catalogue: stops, buses and road distances.
//!
//! The catalogue is filled during a load phase and only read afterwards.
//! Building a [`crate::router::TransportRouter`] borrows the catalogue, so
//! it cannot be mutated while a router built from it is alive.

mod stats;

use std::collections::{BTreeSet, HashMap};

use tracing::{trace, warn};

use crate::domain::{Bus, BusId, CatalogueError, Coordinates, Stop, StopId, compute_distance};

pub use stats::BusStatistics;

/// Route membership of a stop.
///
/// "No such stop" and "stop with no buses" are different answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusesForStop<'a> {
    /// The stop was never added
    NotFound,
    /// The stop exists but no bus calls there
    NoBuses,
    /// Names of buses calling at the stop, sorted
    Buses(BTreeSet<&'a str>),
}

/// Owner of all stops, buses and road distances.
#[derive(Debug, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_index: HashMap<String, StopId>,
    bus_index: HashMap<String, BusId>,
    /// Buses calling at each stop, indexed by `StopId`.
    buses_for_stop: Vec<BTreeSet<BusId>>,
    /// Directed road distances in meters.
    distances: HashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop.
    ///
    /// A name that already exists is rejected and the existing stop is kept,
    /// so routes that already reference it stay valid.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        let name = name.into();
        if self.stop_index.contains_key(&name) {
            warn!(stop = %name, "Rejecting duplicate stop");
            return Err(CatalogueError::DuplicateStop(name));
        }

        let id = StopId(self.stops.len());
        trace!(stop = %name, id = id.0, "Adding stop");
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop::new(name, coordinates));
        self.buses_for_stop.push(BTreeSet::new());
        Ok(id)
    }

    /// Add a bus route over already-known stops.
    ///
    /// All or nothing: if any stop is unknown the bus is not stored at all.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stops: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId, CatalogueError> {
        let name = name.into();
        if self.bus_index.contains_key(&name) {
            warn!(bus = %name, "Rejecting duplicate bus");
            return Err(CatalogueError::DuplicateBus(name));
        }

        let mut stop_ids = Vec::with_capacity(stops.len());
        for stop in stops {
            let stop: &str = stop.as_ref();
            match self.stop_id(stop) {
                Some(id) => stop_ids.push(id),
                None => {
                    warn!(bus = %name, stop, "Rejecting bus with unknown stop");
                    return Err(CatalogueError::MalformedRoute {
                        bus: name,
                        stop: stop.to_string(),
                    });
                }
            }
        }

        let id = BusId(self.buses.len());
        for stop_id in &stop_ids {
            self.buses_for_stop[stop_id.0].insert(id);
        }
        trace!(bus = %name, id = id.0, stops = stop_ids.len(), is_roundtrip, "Adding bus");
        self.bus_index.insert(name.clone(), id);
        self.buses.push(Bus::new(name, stop_ids, is_roundtrip));
        Ok(id)
    }

    /// Record the road distance from one stop to another, in meters.
    ///
    /// Setting the same ordered pair twice keeps the last value.
    pub fn set_distance(
        &mut self,
        from: &str,
        to: &str,
        distance: u32,
    ) -> Result<(), CatalogueError> {
        let from_id = self
            .stop_id(from)
            .ok_or_else(|| CatalogueError::UnknownStop(from.to_string()))?;
        let to_id = self
            .stop_id(to)
            .ok_or_else(|| CatalogueError::UnknownStop(to.to_string()))?;
        self.distances.insert((from_id, to_id), distance);
        Ok(())
    }

    /// Recorded road distance between two stops, in meters.
    ///
    /// Falls back to the reverse direction. Returns `None` if neither
    /// direction was recorded; a recorded zero is returned as `Some(0)`.
    pub fn distance(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
    }

    /// Road distance used for travel, in meters.
    ///
    /// The recorded distance if there is one, else the great-circle distance
    /// rounded to the nearest meter.
    pub fn road_distance(&self, from: StopId, to: StopId) -> u64 {
        match self.distance(from, to) {
            Some(d) => u64::from(d),
            None => self.geo_distance(from, to).round() as u64,
        }
    }

    /// Great-circle distance between two stops, in meters.
    pub fn geo_distance(&self, from: StopId, to: StopId) -> f64 {
        compute_distance(
            self.stops[from.0].coordinates,
            self.stops[to.0].coordinates,
        )
    }

    /// Look up a stop by exact name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id.0])
    }

    /// Look up a stop id by exact name.
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// The stop with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalogue.
    pub fn stop_by_id(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    /// Look up a bus by exact name.
    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.bus_index.get(name).map(|id| &self.buses[id.0])
    }

    /// The bus with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalogue.
    pub fn bus_by_id(&self, id: BusId) -> &Bus {
        &self.buses[id.0]
    }

    /// All stops in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> + '_ {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i), s))
    }

    /// All buses in insertion order.
    pub fn buses(&self) -> impl Iterator<Item = (BusId, &Bus)> + '_ {
        self.buses.iter().enumerate().map(|(i, b)| (BusId(i), b))
    }

    /// Number of stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of buses.
    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Statistics for a bus route, or `None` if the bus is unknown.
    pub fn bus_statistics(&self, name: &str) -> Option<BusStatistics> {
        self.bus(name).map(|bus| stats::count_stations(self, bus))
    }

    /// Names of the buses calling at a stop.
    pub fn buses_for_stop(&self, name: &str) -> BusesForStop<'_> {
        let Some(id) = self.stop_id(name) else {
            return BusesForStop::NotFound;
        };
        let buses = &self.buses_for_stop[id.0];
        if buses.is_empty() {
            return BusesForStop::NoBuses;
        }
        BusesForStop::Buses(
            buses
                .iter()
                .map(|bus| self.buses[bus.0].name.as_str())
                .collect(),
        )
    }
}
