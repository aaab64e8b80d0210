//! Request lifecycle status as reported by the backend.
//!
//! The backend stores status as a free-form string. Parsing is total: any value outside the
//! known set is kept as [`RequestStatus::Unknown`] so that a newer backend can never break
//! rendering of a dashboard.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::approval::ApprovalStage;

/// Lifecycle status of a tire request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    /// Submitted, waiting for the supervisor.
    Pending,
    /// Supervisor approved, waiting for the technical manager.
    SupervisorApproved,
    /// Technical manager approved, waiting for the engineer.
    TechnicalManagerApproved,
    /// Engineer approved. Terminal.
    EngineerApproved,
    /// Marked complete by the backend. Terminal.
    Complete,
    /// Rejected at some stage. Terminal.
    Rejected,
    /// Any status string this client does not know about.
    Unknown(String),
}

/// Visual severity used to colour a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSeverity {
    Warning,
    Error,
    Success,
    Neutral,
}

impl StatusSeverity {
    /// daisyUI badge modifier for this severity; pair it with the base `badge` class.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Warning => "badge-warning",
            Self::Error => "badge-error",
            Self::Success => "badge-success",
            Self::Neutral => "badge-ghost",
        }
    }
}

impl RequestStatus {
    /// Every status the backend is known to emit.
    pub const KNOWN: [RequestStatus; 6] = [
        RequestStatus::Pending,
        RequestStatus::SupervisorApproved,
        RequestStatus::TechnicalManagerApproved,
        RequestStatus::EngineerApproved,
        RequestStatus::Complete,
        RequestStatus::Rejected,
    ];

    /// Parses a wire status string, falling back to [`RequestStatus::Unknown`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => Self::Pending,
            "supervisor approved" => Self::SupervisorApproved,
            "technical-manager approved" => Self::TechnicalManagerApproved,
            "engineer approved" => Self::EngineerApproved,
            "complete" => Self::Complete,
            "rejected" => Self::Rejected,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The exact string the backend uses for this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::SupervisorApproved => "supervisor approved",
            Self::TechnicalManagerApproved => "technical-manager approved",
            Self::EngineerApproved => "engineer approved",
            Self::Complete => "complete",
            Self::Rejected => "rejected",
            Self::Unknown(raw) => raw,
        }
    }

    /// Human readable label shown on dashboards and tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::SupervisorApproved => "Supervisor Approved",
            Self::TechnicalManagerApproved => "Technical Review Done",
            Self::EngineerApproved | Self::Complete => "Complete",
            Self::Rejected => "Rejected",
            Self::Unknown(_) => "Unknown",
        }
    }

    pub fn severity(&self) -> StatusSeverity {
        match self {
            Self::Pending | Self::SupervisorApproved | Self::TechnicalManagerApproved => {
                StatusSeverity::Warning
            }
            Self::EngineerApproved | Self::Complete => StatusSeverity::Success,
            Self::Rejected => StatusSeverity::Error,
            Self::Unknown(_) => StatusSeverity::Neutral,
        }
    }

    /// Whether every approval stage has been passed.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::EngineerApproved | Self::Complete)
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        self.is_complete() || matches!(self, Self::Rejected)
    }

    /// The approval stage this request is currently waiting on, if any.
    pub fn awaiting_stage(&self) -> Option<ApprovalStage> {
        ApprovalStage::ALL
            .into_iter()
            .find(|stage| stage.awaiting_status() == *self)
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for RequestStatus {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl Serialize for RequestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;

        Ok(match raw {
            Some(raw) => Self::parse(&raw),
            None => Self::Unknown(String::new()),
        })
    }
}
