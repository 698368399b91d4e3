use thiserror::Error;

/// Message shown for every non-success HTTP status.
pub const SERVICE_ERROR_MESSAGE: &str =
    "Failed to predict car price. Please check your API endpoint.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// The service answered with a non-success status. Status and body are
    /// deliberately not carried.
    #[error("Failed to predict car price. Please check your API endpoint.")]
    Service,

    /// The request never completed (DNS, refused connection, timeout).
    #[error("{0}")]
    Transport(String),

    /// A success response whose body could not be read as a prediction.
    #[error("Invalid prediction response: {0}")]
    MalformedResponse(String),
}
