//! Tests for SubmissionService::submit.
//!
//! This module verifies that a valid form is sent to the backend as multipart form data,
//! that invalid forms and missing sessions never reach the backend, and that only one
//! submission can be in flight at a time.

use mockito::Matcher;
use tireflow::{
    error::{api::ApiError, validation::ValidationError, Error},
    model::{request::ImageUpload, status::RequestStatus},
    service::{
        registry::VehicleRegistry,
        submission::{SubmissionGate, SubmissionService},
    },
};
use tireflow_test_utils::prelude::*;

fn registry() -> VehicleRegistry {
    VehicleRegistry::new(vec![
        factory::mock_vehicle(),
        factory::mock_vehicle_with_number(8, "XYZ-789"),
    ])
}

/// Tests submitting a valid request for a registered vehicle.
///
/// Verifies that the vehicle number, the tire size taken from the registry and both
/// quantities are sent, and the created record comes back pending.
///
/// Expected: Ok with a pending request for 4 tires of size 185/65R15
#[tokio::test]
async fn submits_registered_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_submit_endpoint(factory::mock_pending_request(), 1)
        .build()
        .await?;
    let registry = registry();
    let gate = SubmissionGate::new();
    let user = factory::mock_user();
    let form = factory::mock_filled_form(&registry);

    let created = SubmissionService::new(&test.api, &registry, &gate)
        .submit(Some(&user), &form)
        .await?;

    assert_eq!(created.status, RequestStatus::Pending);
    assert_eq!(created.vehicle_number, TEST_VEHICLE_NUMBER);
    assert_eq!(created.tire_size_required, TEST_TIRE_SIZE);
    assert_eq!(created.quantity, 4);
    assert!(!gate.is_busy());

    test.assert_mocks();

    Ok(())
}

/// Tests submitting a request with an attached photo.
///
/// Verifies that the photo goes out as an `images` file part with its name and content type.
///
/// Expected: Ok and the backend saw the file part
#[tokio::test]
async fn attached_image_is_sent_as_file_part() -> Result<(), TestError> {
    let created = factory::mock_pending_request();
    let body = serde_json::to_string(&created)?;
    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("POST", "/requests")
                .match_body(Matcher::AllOf(vec![
                    Matcher::Regex(
                        "name=\"images\"; filename=\"worn-tread.jpg\"".to_string(),
                    ),
                    Matcher::Regex("Content-Type: image/jpeg\r\n\r\nfake-jpeg".to_string()),
                ]))
                .with_status(201)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let registry = registry();
    let gate = SubmissionGate::new();
    let user = factory::mock_user();
    let mut form = factory::mock_filled_form(&registry);
    form.set_image(
        0,
        ImageUpload {
            file_name: "worn-tread.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: b"fake-jpeg".to_vec(),
        },
    )
    .map_err(Error::from)?;

    let result = SubmissionService::new(&test.api, &registry, &gate)
        .submit(Some(&user), &form)
        .await?;

    assert_eq!(result.id, created.id);

    test.assert_mocks();

    Ok(())
}

/// Tests submitting a vehicle number that is not in the registry.
///
/// Expected: Err(ValidationError::VehicleNotFound) and no backend call
#[tokio::test]
async fn unregistered_vehicle_is_not_sent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| server.mock("POST", "/requests").expect(0).create())
        .build()
        .await?;
    let registry = registry();
    let gate = SubmissionGate::new();
    let user = factory::mock_user();
    let mut form = factory::mock_filled_form(&registry);
    form.set_vehicle_number("NOPE-000", &registry);

    let result = SubmissionService::new(&test.api, &registry, &gate)
        .submit(Some(&user), &form)
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::VehicleNotFound(_)))
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests submitting without a signed-in user.
///
/// Expected: Err(ValidationError::NotAuthenticated) that asks for a login, no backend call
#[tokio::test]
async fn requires_signed_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| server.mock("POST", "/requests").expect(0).create())
        .build()
        .await?;
    let registry = registry();
    let gate = SubmissionGate::new();
    let form = factory::mock_filled_form(&registry);

    let result = SubmissionService::new(&test.api, &registry, &gate)
        .submit(None, &form)
        .await;

    match result {
        Err(e) => assert!(e.requires_login()),
        Ok(created) => panic!("Expected an error, got request #{}", created.id),
    }

    test.assert_mocks();

    Ok(())
}

/// Tests submitting while another submission holds the gate.
///
/// Expected: Err(Error::SubmissionInProgress) and no backend call
#[tokio::test]
async fn busy_gate_rejects_second_submit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| server.mock("POST", "/requests").expect(0).create())
        .build()
        .await?;
    let registry = registry();
    let gate = SubmissionGate::new();
    let user = factory::mock_user();
    let form = factory::mock_filled_form(&registry);

    let _permit = gate.try_acquire();
    let result = SubmissionService::new(&test.api, &registry, &gate)
        .submit(Some(&user), &form)
        .await;

    assert!(matches!(result, Err(Error::SubmissionInProgress)));

    test.assert_mocks();

    Ok(())
}

/// Tests a submission the backend refuses.
///
/// Verifies that the banner text stays generic and the gate is released for a retry.
///
/// Expected: Err(ApiError::Status) with the generic user message
#[tokio::test]
async fn backend_failure_releases_gate() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/requests")
                .with_status(500)
                .with_header("content-type", "application/json")
                .with_body(r#"{"error":"upload failed"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let registry = registry();
    let gate = SubmissionGate::new();
    let user = factory::mock_user();
    let form = factory::mock_filled_form(&registry);

    let result = SubmissionService::new(&test.api, &registry, &gate)
        .submit(Some(&user), &form)
        .await;

    match result {
        Err(e @ Error::ApiError(ApiError::Status { status: 500, .. })) => {
            assert_eq!(
                e.user_message(),
                "An error occurred while submitting your request"
            );
        }
        other => panic!("Expected status error, got {:?}", other),
    }
    assert!(!gate.is_busy());

    test.assert_mocks();

    Ok(())
}
