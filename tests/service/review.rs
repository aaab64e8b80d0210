//! Tests for ReviewService::review.
//!
//! This module verifies that reviewer decisions are sent as the next status in the approval
//! chain, and that decisions the workflow does not allow never reach the backend.

use tireflow::{
    error::{approval::TransitionError, Error},
    model::{
        approval::{ApprovalStage, ReviewAction},
        status::RequestStatus,
    },
    service::review::ReviewService,
};
use tireflow_test_utils::prelude::*;

/// Tests a supervisor approving a pending request.
///
/// Expected: Ok with status "supervisor approved"
#[tokio::test]
async fn supervisor_approves_pending() -> Result<(), TestError> {
    let updated = factory::mock_request(TEST_REQUEST_ID, RequestStatus::SupervisorApproved);
    let test = TestBuilder::new()
        .with_status_endpoint(
            TEST_REQUEST_ID,
            RequestStatus::SupervisorApproved,
            updated.clone(),
            1,
        )
        .build()
        .await?;

    let result = ReviewService::new(&test.api)
        .review(
            &factory::mock_pending_request(),
            ApprovalStage::Supervisor,
            ReviewAction::Approve,
        )
        .await?;

    assert_eq!(result, updated);
    assert!(result.supervisor_approved);

    test.assert_mocks();

    Ok(())
}

/// Tests an engineer giving the final approval.
///
/// Expected: Ok with status "engineer approved"
#[tokio::test]
async fn engineer_gives_final_approval() -> Result<(), TestError> {
    let updated = factory::mock_request(TEST_REQUEST_ID, RequestStatus::EngineerApproved);
    let test = TestBuilder::new()
        .with_status_endpoint(
            TEST_REQUEST_ID,
            RequestStatus::EngineerApproved,
            updated.clone(),
            1,
        )
        .build()
        .await?;

    let request = factory::mock_request(TEST_REQUEST_ID, RequestStatus::TechnicalManagerApproved);
    let result = ReviewService::new(&test.api)
        .review(&request, ApprovalStage::Engineer, ReviewAction::Approve)
        .await?;

    assert!(result.status.is_complete());

    test.assert_mocks();

    Ok(())
}

/// Tests rejecting a request and then trying to move it again.
///
/// Verifies that a rejected request is terminal: the second decision fails locally.
///
/// Expected: first call Ok with "rejected", second Err(TransitionError::Terminal) with one
/// backend call in total
#[tokio::test]
async fn rejected_request_is_terminal() -> Result<(), TestError> {
    let updated = factory::mock_request(TEST_REQUEST_ID, RequestStatus::Rejected);
    let test = TestBuilder::new()
        .with_status_endpoint(TEST_REQUEST_ID, RequestStatus::Rejected, updated, 1)
        .build()
        .await?;
    let service = ReviewService::new(&test.api);

    let rejected = service
        .review(
            &factory::mock_pending_request(),
            ApprovalStage::Supervisor,
            ReviewAction::Reject,
        )
        .await?;
    assert_eq!(rejected.status, RequestStatus::Rejected);

    let result = service
        .review(&rejected, ApprovalStage::TechnicalManager, ReviewAction::Approve)
        .await;

    assert!(matches!(
        result,
        Err(Error::TransitionError(TransitionError::Terminal(
            RequestStatus::Rejected
        )))
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests a reviewer acting out of turn.
///
/// Expected: Err(TransitionError::WrongStage) and no backend call
#[tokio::test]
async fn wrong_stage_is_not_sent() -> Result<(), TestError> {
    let path = format!("/requests/{}/status", TEST_REQUEST_ID);
    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| server.mock("PUT", path.as_str()).expect(0).create())
        .build()
        .await?;

    let result = ReviewService::new(&test.api)
        .review(
            &factory::mock_pending_request(),
            ApprovalStage::Engineer,
            ReviewAction::Approve,
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::TransitionError(TransitionError::WrongStage {
            expected: ApprovalStage::Supervisor,
            ..
        }))
    ));

    test.assert_mocks();

    Ok(())
}
