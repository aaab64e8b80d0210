//! Tests for the ApiClient request endpoints.
//!
//! This module verifies listing a user's requests, listing all requests for reviewers and
//! updating a request's status, including how missing and malformed responses are handled.

use tireflow::{
    error::{api::ApiError, Error},
    model::status::RequestStatus,
};
use tireflow_test_utils::prelude::*;

/// Tests fetching a user's own requests.
///
/// Expected: Ok with the user's requests in backend order
#[tokio::test]
async fn returns_user_requests() -> Result<(), TestError> {
    let requests = vec![
        factory::mock_request(1, RequestStatus::Pending),
        factory::mock_request(2, RequestStatus::SupervisorApproved),
    ];
    let test = TestBuilder::new()
        .with_user_requests_endpoint(TEST_USER_ID, requests.clone(), 1)
        .build()
        .await?;

    let result = test.api.get_user_requests(TEST_USER_ID).await?;

    assert_eq!(result, requests);
    assert!(result[1].supervisor_approved);

    test.assert_mocks();

    Ok(())
}

/// Tests fetching requests for a user who has none.
///
/// Verifies that the backend's 404 for an unknown user is read as an empty list.
///
/// Expected: Ok with no requests
#[tokio::test]
async fn missing_user_requests_are_empty() -> Result<(), TestError> {
    let path = format!("/requests/user/{}", TEST_USER_ID);
    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", path.as_str())
                .with_status(404)
                .with_body(r#"{"error":"No requests found"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test.api.get_user_requests(TEST_USER_ID).await?;

    assert!(result.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Tests fetching all requests for review.
///
/// Expected: Ok with every request, unknown statuses preserved
#[tokio::test]
async fn returns_all_requests() -> Result<(), TestError> {
    let mut odd = factory::mock_request(3, RequestStatus::Pending);
    odd.status = RequestStatus::parse("on hold");

    let requests = vec![factory::mock_pending_request(), odd];
    let test = TestBuilder::new()
        .with_requests_endpoint(requests.clone(), 1)
        .build()
        .await?;

    let result = test.api.get_requests().await?;

    assert_eq!(result, requests);
    assert_eq!(result[1].status.as_str(), "on hold");

    test.assert_mocks();

    Ok(())
}

/// Tests a response body that is not a request list.
///
/// Expected: Err(ApiError::Decode)
#[tokio::test]
async fn malformed_body_is_decode_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/requests")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"requests": "soon"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test.api.get_requests().await;

    assert!(matches!(result, Err(Error::ApiError(ApiError::Decode { .. }))));

    test.assert_mocks();

    Ok(())
}

/// Tests updating a request's status.
///
/// Verifies that the status is sent as its exact wire string and the stored record is
/// returned.
///
/// Expected: Ok with the updated record
#[tokio::test]
async fn updates_status() -> Result<(), TestError> {
    let updated = factory::mock_request(TEST_REQUEST_ID, RequestStatus::TechnicalManagerApproved);
    let test = TestBuilder::new()
        .with_status_endpoint(
            TEST_REQUEST_ID,
            RequestStatus::TechnicalManagerApproved,
            updated.clone(),
            1,
        )
        .build()
        .await?;

    let result = test
        .api
        .update_status(TEST_REQUEST_ID, &RequestStatus::TechnicalManagerApproved)
        .await?;

    assert_eq!(result, updated);

    test.assert_mocks();

    Ok(())
}

/// Tests a failed status update without an error body.
///
/// Verifies that the HTTP reason phrase is used when the backend sends no message.
///
/// Expected: Err(ApiError::Status) with "Not Found"
#[tokio::test]
async fn empty_error_body_uses_reason_phrase() -> Result<(), TestError> {
    let path = format!("/requests/{}/status", TEST_REQUEST_ID);
    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("PUT", path.as_str())
                .with_status(404)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test
        .api
        .update_status(TEST_REQUEST_ID, &RequestStatus::Rejected)
        .await;

    match result {
        Err(Error::ApiError(ApiError::Status { status, message })) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("Expected status error, got {:?}", other),
    }

    test.assert_mocks();

    Ok(())
}
