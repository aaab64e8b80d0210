use mockito::{Mock, Server, ServerGuard};
use tireflow::api::ApiClient;

use crate::{error::TestError, fixtures::RequestFixtures};

/// A mock backend and a client pointed at it.
pub struct TestSetup {
    pub server: ServerGuard,
    pub api: ApiClient,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let api = ApiClient::new(server.url());

        Ok(TestSetup {
            server,
            api,
            mocks: Vec::new(),
        })
    }

    /// Access the backend endpoint fixtures.
    pub fn requests(&mut self) -> RequestFixtures<'_> {
        RequestFixtures { setup: self }
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on all mocks created by the TestBuilder to verify
    /// they were invoked the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
