use thiserror::Error;

use crate::model::{approval::ApprovalStage, status::RequestStatus};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    #[error("Request is already {0} and cannot change status")]
    Terminal(RequestStatus),
    #[error("Request has unrecognized status {0:?}; refusing to change it")]
    UnknownStatus(String),
    #[error("Request is {status} and waiting on the {expected} stage, not the {stage} stage")]
    WrongStage {
        stage: ApprovalStage,
        expected: ApprovalStage,
        status: RequestStatus,
    },
}
