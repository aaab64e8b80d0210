use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::approval::ApprovalStage;

/// Role of the signed-in user within the approval workflow.
///
/// Roles this client does not know about are treated as plain requesters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    User,
    Supervisor,
    TechnicalManager,
    Engineer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Supervisor => "supervisor",
            Self::TechnicalManager => "technical-manager",
            Self::Engineer => "engineer",
        }
    }

    /// The approval stage this role reviews, if it reviews at all.
    pub fn review_stage(&self) -> Option<ApprovalStage> {
        match self {
            Self::User => None,
            Self::Supervisor => Some(ApprovalStage::Supervisor),
            Self::TechnicalManager => Some(ApprovalStage::TechnicalManager),
            Self::Engineer => Some(ApprovalStage::Engineer),
        }
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();

        Ok(match raw.as_str() {
            "supervisor" => Self::Supervisor,
            "technical-manager" => Self::TechnicalManager,
            "engineer" => Self::Engineer,
            _ => Self::User,
        })
    }
}

/// The signed-in user as reported by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}
