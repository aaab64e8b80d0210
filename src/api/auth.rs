use reqwest::StatusCode;

use crate::{api::ApiClient, error::Error, model::user::UserDto};

impl ApiClient {
    /// Fetches the signed-in user.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - A user is signed in
    /// - `Ok(None)` - No session (401 or 404)
    /// - `Err(Error)` - Transport or backend failure
    pub async fn get_current_user(&self) -> Result<Option<UserDto>, Error> {
        let request = self.http.get(self.url("/auth/user"));
        // Session cookies live on the API origin, which differs from the page origin
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request.send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND => Ok(None),
            _ => Self::parse(response, "user").await.map(Some),
        }
    }

    /// URL of the external login page.
    pub fn login_url(&self) -> String {
        self.url("/auth/login")
    }

    pub fn logout_url(&self) -> String {
        self.url("/auth/logout")
    }
}
