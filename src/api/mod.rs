//! Typed client for the tire request backend.
//!
//! All endpoints live under the configured base URL (for example `http://localhost:5000/api`).
//! Non-success responses are turned into [`ApiError::Status`], using the backend's
//! `{"error": "..."}` body as the message when it provides one.

pub mod auth;
pub mod request;
pub mod vehicle;

use dioxus_logger::tracing;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{api::ApiError, Error},
    model::api::ErrorDto,
};

/// HTTP client bound to one backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    /// Creates a client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decodes a successful JSON body, or converts the response into an error.
    ///
    /// # Arguments
    /// - `response` - Response returned by the backend
    /// - `what` - Short description of the payload, used in decode error messages
    async fn parse<T: DeserializeOwned>(response: Response, what: &'static str) -> Result<T, Error> {
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Failed to parse {} from backend: {}", what, e);

            ApiError::Decode {
                what,
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Builds an [`ApiError::Status`] from a failed response.
    async fn status_error(response: Response) -> Error {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<ErrorDto>(&text) {
            Ok(error_dto) => error_dto.error,
            Err(_) if text.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => text,
        };

        ApiError::Status {
            status: status.as_u16(),
            message,
        }
        .into()
    }

    fn is_not_found(response: &Response) -> bool {
        response.status() == StatusCode::NOT_FOUND
    }
}
