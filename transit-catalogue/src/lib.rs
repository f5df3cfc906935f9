//! Transit catalogue and trip planner.
//!
//! Answers structured queries about a bus network: per-route statistics,
//! per-stop route membership and minimum-time itineraries between stops.

pub mod catalogue;
pub mod domain;
pub mod requests;
pub mod router;
