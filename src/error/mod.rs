//! Error types for the tireflow client.
//!
//! Every fallible operation returns [`Error`], which aggregates the domain specific error
//! types through `#[from]` so `?` works across layers. Views never show the raw error text;
//! they show [`Error::user_message`], which collapses transport and backend failures into a
//! single generic banner.

pub mod api;
pub mod approval;
pub mod config;
pub mod validation;

use thiserror::Error;

use crate::error::{
    api::ApiError, approval::TransitionError, config::ConfigError, validation::ValidationError,
};

/// Main error type for the tireflow client.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Backend communication error.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Form input rejected before anything was sent.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Reviewer decision not valid for the request's current status.
    #[error(transparent)]
    TransitionError(#[from] TransitionError),
    /// A submission is already in flight.
    #[error("A submission is already in progress")]
    SubmissionInProgress,
}

impl Error {
    /// Message suitable for the notice banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationError(err) => err.to_string(),
            Self::TransitionError(err) => err.to_string(),
            Self::SubmissionInProgress => "Your request is already being processed.".to_string(),
            Self::ApiError(_) | Self::ConfigError(_) => {
                "An error occurred while submitting your request".to_string()
            }
        }
    }

    /// Whether the user has to sign in before retrying.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(ValidationError::NotAuthenticated)
                | Self::ApiError(ApiError::Status { status: 401, .. })
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::ApiError(ApiError::Transport(err))
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(ValidationError::Constraints(err))
    }
}
