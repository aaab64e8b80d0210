use crate::model::{approval::ApprovalStage, user::UserDto};

/// The signed-in user, shared through context.
///
/// `fetched` distinguishes "no session" from "not asked yet" so views can avoid flashing the
/// login prompt while the session lookup is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    pub fetched: bool,
}

impl UserState {
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|user| user.id)
    }

    /// Stage the signed-in user reviews, if any.
    pub fn review_stage(&self) -> Option<ApprovalStage> {
        self.user.as_ref().and_then(|user| user.role.review_stage())
    }
}
