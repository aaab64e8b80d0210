use dioxus_logger::tracing;
use reqwest::multipart::{Form, Part};

use crate::{
    api::ApiClient,
    error::Error,
    model::{
        request::{NewTireRequest, StatusUpdateDto, TireRequest},
        status::RequestStatus,
    },
};

impl ApiClient {
    /// Fetches the requests submitted by one user.
    ///
    /// A 404 is treated as "no requests yet".
    pub async fn get_user_requests(&self, user_id: i64) -> Result<Vec<TireRequest>, Error> {
        let response = self
            .http
            .get(self.url(&format!("/requests/user/{}", user_id)))
            .send()
            .await?;

        if Self::is_not_found(&response) {
            return Ok(Vec::new());
        }

        Self::parse(response, "user requests").await
    }

    /// Fetches every request, for reviewers.
    pub async fn get_requests(&self) -> Result<Vec<TireRequest>, Error> {
        let response = self.http.get(self.url("/requests")).send().await?;

        if Self::is_not_found(&response) {
            return Ok(Vec::new());
        }

        Self::parse(response, "requests").await
    }

    /// Submits a new request as multipart form data.
    ///
    /// Every scalar field is sent as a text part; each attached image is sent as an `images`
    /// file part.
    ///
    /// # Returns
    /// - `Ok(TireRequest)` - The created record, normally with status `pending`
    /// - `Err(Error)` - Transport failure or non-success response
    pub async fn create_request(&self, request: &NewTireRequest) -> Result<TireRequest, Error> {
        let mut form = Form::new();
        for (name, value) in request.text_fields() {
            form = form.text(name, value);
        }
        for image in &request.images {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)?;
            form = form.part("images", part);
        }

        tracing::debug!(
            "Submitting tire request for vehicle {} with {} image(s)",
            request.vehicle_number,
            request.images.len()
        );

        let response = self
            .http
            .post(self.url("/requests"))
            .multipart(form)
            .send()
            .await?;

        Self::parse(response, "created request").await
    }

    /// Sets a request's status.
    ///
    /// The caller is responsible for only sending statuses the approval workflow allows; see
    /// [`ReviewService`](crate::service::review::ReviewService).
    pub async fn update_status(
        &self,
        request_id: i64,
        status: &RequestStatus,
    ) -> Result<TireRequest, Error> {
        let response = self
            .http
            .put(self.url(&format!("/requests/{}/status", request_id)))
            .json(&StatusUpdateDto {
                status: status.clone(),
            })
            .send()
            .await?;

        Self::parse(response, "updated request").await
    }
}
