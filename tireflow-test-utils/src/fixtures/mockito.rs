//! Mock backend endpoints.
//!
//! Every endpoint verifies it was called exactly `expected_requests` times when
//! [`TestSetup::assert_mocks`](crate::TestSetup::assert_mocks) runs.

use mockito::{Matcher, Mock};
use tireflow::model::{
    request::TireRequest, status::RequestStatus, user::UserDto, vehicle::Vehicle,
};

use crate::fixtures::RequestFixtures;

impl<'a> RequestFixtures<'a> {
    /// Create a mock GET endpoint at `/vehicles`.
    pub fn create_vehicles_endpoint(
        &mut self,
        vehicles: Vec<Vehicle>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/vehicles")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&vehicles).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock GET endpoint at `/requests/user/{user_id}`.
    pub fn create_user_requests_endpoint(
        &mut self,
        user_id: i64,
        requests: Vec<TireRequest>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/requests/user/{}", user_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&requests).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock GET endpoint at `/requests`.
    pub fn create_requests_endpoint(
        &mut self,
        requests: Vec<TireRequest>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/requests")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&requests).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock multipart POST endpoint at `/requests` answering with `created`.
    ///
    /// The body must carry the vehicle number, tire size and quantities of `created`.
    pub fn create_submit_endpoint(
        &mut self,
        created: TireRequest,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/requests")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data".to_string()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(format!("name=\"vehicleNumber\"\r\n\r\n{}", created.vehicle_number)),
                Matcher::Regex(format!(
                    "name=\"tireSizeRequired\"\r\n\r\n{}",
                    created.tire_size_required
                )),
                Matcher::Regex(format!("name=\"tireSize\"\r\n\r\n{}", created.tire_size_required)),
                Matcher::Regex(format!("name=\"quantity\"\r\n\r\n{}\r\n", created.quantity)),
                Matcher::Regex(format!(
                    "name=\"tubesQuantity\"\r\n\r\n{}\r\n",
                    created.tubes_quantity
                )),
            ]))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&created).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock PUT endpoint at `/requests/{id}/status` expecting `status`.
    pub fn create_status_endpoint(
        &mut self,
        request_id: i64,
        status: RequestStatus,
        updated: TireRequest,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/requests/{}/status", request_id);

        self.setup
            .server
            .mock("PUT", url.as_str())
            .match_body(Matcher::Json(serde_json::json!({ "status": status.as_str() })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&updated).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock GET endpoint at `/auth/user`; `None` answers 401.
    pub fn create_current_user_endpoint(
        &mut self,
        user: Option<UserDto>,
        expected_requests: usize,
    ) -> Mock {
        let mock = self.setup.server.mock("GET", "/auth/user");

        match user {
            Some(user) => mock
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(serde_json::to_string(&user).unwrap()),
            None => mock
                .with_status(401)
                .with_header("content-type", "application/json")
                .with_body(r#"{"error":"Not authenticated"}"#),
        }
        .expect(expected_requests)
        .create()
    }

    /// Create a mock endpoint that fails with `status` and an `{"error": ...}` body.
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        message: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!({ "error": message }).to_string())
            .expect(expected_requests)
            .create()
    }
}
