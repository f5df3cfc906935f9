//! Request layer error types.

/// Errors that stop a request document from being answered at all.
///
/// Problems with individual requests never end up here; they are answered
/// in place with an error message.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Reading the input failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a valid request document
    #[error("invalid request document: {0}")]
    Json(#[from] serde_json::Error),
}
