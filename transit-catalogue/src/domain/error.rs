//! Domain error types.
//!
//! These errors describe rejected catalogue mutations. A rejected mutation
//! never leaves the catalogue partially updated.

/// Errors from loading stops, buses and distances into the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A stop name that the catalogue does not know
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// A stop with this name was already added
    #[error("stop {0} already exists")]
    DuplicateStop(String),

    /// A bus with this name was already added
    #[error("bus {0} already exists")]
    DuplicateBus(String),

    /// A bus references a stop that has not been added
    #[error("bus {bus} references unknown stop {stop}")]
    MalformedRoute { bus: String, stop: String },
}
