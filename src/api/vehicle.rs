use crate::{api::ApiClient, error::Error, model::vehicle::Vehicle};

impl ApiClient {
    /// Fetches every registered vehicle.
    pub async fn get_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        let response = self.http.get(self.url("/vehicles")).send().await?;

        if Self::is_not_found(&response) {
            return Ok(Vec::new());
        }

        Self::parse(response, "vehicle list").await
    }
}
