//! Domain types for the transit catalogue.
//!
//! Stops and buses live in arenas owned by the catalogue and refer to each
//! other through stable integer ids, never through references.

mod bus;
mod coordinates;
mod error;
mod stop;

pub use bus::{Bus, BusId};
pub use coordinates::{Coordinates, compute_distance};
pub use error::CatalogueError;
pub use stop::{Stop, StopId};
