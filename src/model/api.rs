use serde::{Deserialize, Serialize};

/// The body the backend returns when an API request fails
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
