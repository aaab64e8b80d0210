//! Approval stages and the transition rules between request statuses.
//!
//! A request moves forward one stage at a time:
//!
//! ```text
//! pending -> supervisor approved -> technical-manager approved -> engineer approved
//!    \               \                          \
//!     +---------------+--------------------------+--> rejected
//! ```
//!
//! Each stage may only act on a request that is waiting for it, and `rejected`,
//! `engineer approved` and `complete` accept no further transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::approval::TransitionError, model::status::RequestStatus};

/// One of the three reviewer stages gating a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApprovalStage {
    Supervisor,
    TechnicalManager,
    Engineer,
}

/// What a reviewer decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ApprovalStage {
    /// Stages in the order a request passes through them.
    pub const ALL: [ApprovalStage; 3] = [
        ApprovalStage::Supervisor,
        ApprovalStage::TechnicalManager,
        ApprovalStage::Engineer,
    ];

    /// Status a request must hold for this stage to review it.
    pub fn awaiting_status(&self) -> RequestStatus {
        match self {
            Self::Supervisor => RequestStatus::Pending,
            Self::TechnicalManager => RequestStatus::SupervisorApproved,
            Self::Engineer => RequestStatus::TechnicalManagerApproved,
        }
    }

    /// Status a request takes once this stage approves it.
    pub fn approved_status(&self) -> RequestStatus {
        match self {
            Self::Supervisor => RequestStatus::SupervisorApproved,
            Self::TechnicalManager => RequestStatus::TechnicalManagerApproved,
            Self::Engineer => RequestStatus::EngineerApproved,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Supervisor => "Supervisor",
            Self::TechnicalManager => "Technical",
            Self::Engineer => "Engineer",
        }
    }
}

impl fmt::Display for ApprovalStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Supervisor => "supervisor",
            Self::TechnicalManager => "technical manager",
            Self::Engineer => "engineer",
        };
        f.write_str(name)
    }
}

impl RequestStatus {
    /// Computes the status that results from `stage` taking `action` on a request in this status.
    ///
    /// # Returns
    /// - `Ok(RequestStatus)` - The next status
    /// - `Err(TransitionError::Terminal)` - The request is already complete or rejected
    /// - `Err(TransitionError::UnknownStatus)` - The current status is not understood, so no
    ///   transition is safe
    /// - `Err(TransitionError::WrongStage)` - The request is waiting on a different stage
    pub fn transition(
        &self,
        stage: ApprovalStage,
        action: ReviewAction,
    ) -> Result<RequestStatus, TransitionError> {
        if let Self::Unknown(raw) = self {
            return Err(TransitionError::UnknownStatus(raw.clone()));
        }

        if self.is_terminal() {
            return Err(TransitionError::Terminal(self.clone()));
        }

        let expected = self
            .awaiting_stage()
            .ok_or_else(|| TransitionError::Terminal(self.clone()))?;

        if expected != stage {
            return Err(TransitionError::WrongStage {
                stage,
                expected,
                status: self.clone(),
            });
        }

        Ok(match action {
            ReviewAction::Approve => stage.approved_status(),
            ReviewAction::Reject => RequestStatus::Rejected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approvals_advance_one_stage_at_a_time() {
        let mut status = RequestStatus::Pending;
        for stage in ApprovalStage::ALL {
            status = status.transition(stage, ReviewAction::Approve).unwrap();
        }
        assert_eq!(status, RequestStatus::EngineerApproved);
        assert!(status.is_complete());
    }

    #[test]
    fn supervisor_approval_of_pending_request() {
        let next = RequestStatus::Pending
            .transition(ApprovalStage::Supervisor, ReviewAction::Approve)
            .unwrap();
        assert_eq!(next, RequestStatus::SupervisorApproved);
    }

    #[test]
    fn rejection_is_final() {
        let rejected = RequestStatus::Pending
            .transition(ApprovalStage::Supervisor, ReviewAction::Reject)
            .unwrap();
        assert_eq!(rejected, RequestStatus::Rejected);

        for stage in ApprovalStage::ALL {
            for action in [ReviewAction::Approve, ReviewAction::Reject] {
                assert!(matches!(
                    rejected.transition(stage, action),
                    Err(TransitionError::Terminal(RequestStatus::Rejected))
                ));
            }
        }
    }

    #[test]
    fn stages_cannot_be_skipped() {
        let result =
            RequestStatus::Pending.transition(ApprovalStage::Engineer, ReviewAction::Approve);
        assert!(matches!(
            result,
            Err(TransitionError::WrongStage {
                stage: ApprovalStage::Engineer,
                expected: ApprovalStage::Supervisor,
                ..
            })
        ));
    }

    #[test]
    fn completed_requests_are_immutable() {
        for status in [RequestStatus::Complete, RequestStatus::EngineerApproved] {
            assert!(status
                .transition(ApprovalStage::Engineer, ReviewAction::Reject)
                .is_err());
        }
    }

    #[test]
    fn unknown_status_never_transitions() {
        let status = RequestStatus::Unknown("on hold".to_string());
        assert!(matches!(
            status.transition(ApprovalStage::Supervisor, ReviewAction::Approve),
            Err(TransitionError::UnknownStatus(_))
        ));
    }

    #[test]
    fn any_waiting_stage_may_reject() {
        for stage in ApprovalStage::ALL {
            let next = stage
                .awaiting_status()
                .transition(stage, ReviewAction::Reject)
                .unwrap();
            assert_eq!(next, RequestStatus::Rejected);
        }
    }

    #[test]
    fn stage_serializes_as_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ApprovalStage::TechnicalManager).unwrap(),
            "\"technical-manager\""
        );
    }
}
