//! Reviewer decisions on tire requests.

use dioxus_logger::tracing;

use crate::{
    api::ApiClient,
    error::Error,
    model::{
        approval::{ApprovalStage, ReviewAction},
        request::TireRequest,
    },
};

pub struct ReviewService<'a> {
    api: &'a ApiClient,
}

impl<'a> ReviewService<'a> {
    /// Creates a new instance of [`ReviewService`]
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Applies a reviewer's decision to a request.
    ///
    /// The transition is checked locally first; a decision the workflow does not allow is
    /// rejected without contacting the backend.
    ///
    /// # Arguments
    /// - `request` - The request as last fetched
    /// - `stage` - Stage the reviewer acts for
    /// - `action` - Approve or reject
    ///
    /// # Returns
    /// - `Ok(TireRequest)` - The record as stored after the update
    /// - `Err(Error::TransitionError)` - The decision is not valid for the current status
    /// - `Err(Error::ApiError)` - The backend call failed
    pub async fn review(
        &self,
        request: &TireRequest,
        stage: ApprovalStage,
        action: ReviewAction,
    ) -> Result<TireRequest, Error> {
        let mut updated = request.clone();
        let next = updated.apply_review(stage, action)?;

        let stored = self.api.update_status(request.id, &next).await?;

        tracing::info!(
            "Request #{} moved from {} to {} by {} review",
            request.id,
            request.status,
            stored.status,
            stage
        );

        Ok(stored)
    }
}
