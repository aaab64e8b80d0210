//! Test fixtures for backend data and HTTP mocks.
//!
//! - `factory` - Vehicles, users and tire requests as the backend returns them
//! - `mockito` - Mock endpoints serving those records

pub mod factory;
pub mod mockito;

use crate::setup::TestSetup;

/// Endpoint fixtures bound to a [`TestSetup`]'s mock server.
pub struct RequestFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}
