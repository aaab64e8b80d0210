//! Declarative builder for test environments.
//!
//! Endpoints are queued on the [`TestBuilder`] and created on the mock server during
//! [`TestBuilder::build`].

use mockito::Mock;
use tireflow::model::{
    request::TireRequest, status::RequestStatus, user::UserDto, vehicle::Vehicle,
};

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
///
/// Provides an interface for configuring the mock backend a test talks to. Methods can be
/// chained together and finalized with `build()`.
pub struct TestBuilder {
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    vehicle_endpoints: Vec<(Vec<Vehicle>, usize)>,
    user_request_endpoints: Vec<(i64, Vec<TireRequest>, usize)>,
    request_endpoints: Vec<(Vec<TireRequest>, usize)>,
    submit_endpoints: Vec<(TireRequest, usize)>,
    status_endpoints: Vec<(i64, RequestStatus, TireRequest, usize)>,
    current_user_endpoints: Vec<(Option<UserDto>, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            vehicle_endpoints: Vec::new(),
            user_request_endpoints: Vec::new(),
            request_endpoints: Vec::new(),
            submit_endpoints: Vec::new(),
            status_endpoints: Vec::new(),
            current_user_endpoints: Vec::new(),
        }
    }

    /// Add a mock `/vehicles` endpoint returning `vehicles`.
    ///
    /// # Arguments
    /// - `vehicles` - Registry contents to return
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_vehicles_endpoint(mut self, vehicles: Vec<Vehicle>, expected_requests: usize) -> Self {
        self.vehicle_endpoints.push((vehicles, expected_requests));
        self
    }

    /// Add a mock `/requests/user/{user_id}` endpoint returning `requests`.
    pub fn with_user_requests_endpoint(
        mut self,
        user_id: i64,
        requests: Vec<TireRequest>,
        expected_requests: usize,
    ) -> Self {
        self.user_request_endpoints
            .push((user_id, requests, expected_requests));
        self
    }

    /// Add a mock `/requests` listing endpoint returning `requests`.
    pub fn with_requests_endpoint(
        mut self,
        requests: Vec<TireRequest>,
        expected_requests: usize,
    ) -> Self {
        self.request_endpoints.push((requests, expected_requests));
        self
    }

    /// Add a mock submission endpoint that answers with `created`.
    ///
    /// The endpoint only matches multipart bodies carrying `created`'s vehicle number,
    /// tire size and quantities.
    pub fn with_submit_endpoint(mut self, created: TireRequest, expected_requests: usize) -> Self {
        self.submit_endpoints.push((created, expected_requests));
        self
    }

    /// Add a mock status update endpoint for `request_id`.
    ///
    /// # Arguments
    /// - `request_id` - Request whose status is updated
    /// - `status` - Status the body must carry
    /// - `updated` - Record to answer with
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_status_endpoint(
        mut self,
        request_id: i64,
        status: RequestStatus,
        updated: TireRequest,
        expected_requests: usize,
    ) -> Self {
        self.status_endpoints
            .push((request_id, status, updated, expected_requests));
        self
    }

    /// Add a mock `/auth/user` endpoint. `None` answers 401.
    pub fn with_current_user_endpoint(
        mut self,
        user: Option<UserDto>,
        expected_requests: usize,
    ) -> Self {
        self.current_user_endpoints.push((user, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and create every queued endpoint.
    ///
    /// Custom endpoints are created first so tests can stack several mocks on one path
    /// (e.g. an error followed by a success).
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Mock server and a client pointed at it
    /// - `Err(TestError)` - The setup could not be created
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (vehicles, expected) in self.vehicle_endpoints {
            mocks.push(setup.requests().create_vehicles_endpoint(vehicles, expected));
        }

        for (user_id, requests, expected) in self.user_request_endpoints {
            mocks.push(
                setup
                    .requests()
                    .create_user_requests_endpoint(user_id, requests, expected),
            );
        }

        for (requests, expected) in self.request_endpoints {
            mocks.push(setup.requests().create_requests_endpoint(requests, expected));
        }

        for (created, expected) in self.submit_endpoints {
            mocks.push(setup.requests().create_submit_endpoint(created, expected));
        }

        for (request_id, status, updated, expected) in self.status_endpoints {
            mocks.push(
                setup
                    .requests()
                    .create_status_endpoint(request_id, status, updated, expected),
            );
        }

        for (user, expected) in self.current_user_endpoints {
            mocks.push(setup.requests().create_current_user_endpoint(user, expected));
        }

        // Keep mocks alive for the duration of the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::factory;

    #[tokio::test]
    async fn builder_points_client_at_mock_server() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_vehicles_endpoint(vec![factory::mock_vehicle()], 1)
            .build()
            .await?;

        assert_eq!(test.api.login_url(), format!("{}/auth/login", test.server.url()));

        let vehicles = test.api.get_vehicles().await?;
        assert_eq!(vehicles, vec![factory::mock_vehicle()]);

        test.assert_mocks();

        Ok(())
    }
}
