use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, CORS, ...).
    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The backend answered successfully but the body was not what we expected.
    #[error("Failed to parse {what}: {reason}")]
    Decode { what: &'static str, reason: String },
}
