//! Tests for ApiClient::get_vehicles.
//!
//! This module verifies the vehicle registry is fetched and decoded from the backend, and
//! that failed responses surface as status errors.

use tireflow::error::{api::ApiError, Error};
use tireflow_test_utils::prelude::*;

/// Tests fetching the vehicle registry.
///
/// Verifies that every registered vehicle is returned with its tire size.
///
/// Expected: Ok with both vehicles
#[tokio::test]
async fn returns_registered_vehicles() -> Result<(), TestError> {
    let vehicles = vec![
        factory::mock_vehicle(),
        factory::mock_vehicle_with_number(8, "XYZ-789"),
    ];
    let test = TestBuilder::new()
        .with_vehicles_endpoint(vehicles.clone(), 1)
        .build()
        .await?;

    let result = test.api.get_vehicles().await?;

    assert_eq!(result, vehicles);
    assert_eq!(result[0].tire_size, TEST_TIRE_SIZE);

    test.assert_mocks();

    Ok(())
}

/// Tests a backend failure while loading the registry.
///
/// Verifies that the backend's `error` message is kept on the status error.
///
/// Expected: Err(ApiError::Status) with status 500 and the backend message
#[tokio::test]
async fn fails_with_backend_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/vehicles")
                .with_status(500)
                .with_header("content-type", "application/json")
                .with_body(r#"{"error":"database unavailable"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test.api.get_vehicles().await;

    match result {
        Err(Error::ApiError(ApiError::Status { status, message })) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("Expected status error, got {:?}", other),
    }

    test.assert_mocks();

    Ok(())
}
