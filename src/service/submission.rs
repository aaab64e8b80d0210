//! Submitting a tire request.
//!
//! [`SubmissionService::submit`] is the only path from the form to the network. It refuses to
//! start while another submission holds the [`SubmissionGate`], and it validates the whole form
//! before issuing the single `POST`, so a rejected form never touches the backend.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use dioxus_logger::tracing;

use crate::{
    api::ApiClient,
    error::Error,
    model::{request::TireRequest, user::UserDto},
    service::{form::RequestForm, registry::VehicleRegistry},
};

/// Busy flag guarding the submit action.
///
/// Cloning shares the flag.
#[derive(Clone, Debug, Default)]
pub struct SubmissionGate {
    busy: Arc<AtomicBool>,
}

/// Proof that the holder owns the gate; releases it when dropped.
#[derive(Debug)]
pub struct SubmissionPermit {
    busy: Arc<AtomicBool>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the gate if it is free.
    pub fn try_acquire(&self) -> Option<SubmissionPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmissionPermit {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for SubmissionPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

pub struct SubmissionService<'a> {
    api: &'a ApiClient,
    registry: &'a VehicleRegistry,
    gate: &'a SubmissionGate,
}

impl<'a> SubmissionService<'a> {
    /// Creates a new instance of [`SubmissionService`]
    pub fn new(api: &'a ApiClient, registry: &'a VehicleRegistry, gate: &'a SubmissionGate) -> Self {
        Self {
            api,
            registry,
            gate,
        }
    }

    /// Validates and submits the form.
    ///
    /// # Arguments
    /// - `user` - The signed-in user, if any
    /// - `form` - Current form state
    ///
    /// # Returns
    /// - `Ok(TireRequest)` - The record created by the backend
    /// - `Err(Error::SubmissionInProgress)` - Another submission holds the gate
    /// - `Err(Error::ValidationError)` - The form was rejected; nothing was sent
    /// - `Err(Error::ApiError)` - The backend call failed
    pub async fn submit(
        &self,
        user: Option<&UserDto>,
        form: &RequestForm,
    ) -> Result<TireRequest, Error> {
        let _permit = self
            .gate
            .try_acquire()
            .ok_or(Error::SubmissionInProgress)?;

        let request = form.validate(user, self.registry)?;

        let created = self.api.create_request(&request).await?;

        tracing::info!(
            "Tire request #{} submitted for vehicle {} ({})",
            created.id,
            created.vehicle_number,
            created.status
        );

        Ok(created)
    }
}
