use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    error::approval::TransitionError,
    model::{
        approval::{ApprovalStage, ReviewAction},
        de,
        status::RequestStatus,
    },
};

/// Maximum number of images that can be attached to a request.
pub const MAX_IMAGES: usize = 7;

/// Bounds enforced on [`NewTireRequest::quantity`] and mirrored by the form's number inputs.
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 10;
/// Upper bound on [`NewTireRequest::tubes_quantity`]; zero tubes is allowed.
pub const MAX_TUBES: u32 = 10;

/// A tire replacement request as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TireRequest {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub vehicle_id: Option<i64>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub vehicle_number: String,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub vehicle_brand: String,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub vehicle_model: String,
    #[serde(default, deserialize_with = "de::lenient_opt_u32")]
    pub year: Option<u32>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub tire_size: String,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub tire_size_required: String,
    #[serde(default, deserialize_with = "de::lenient_u32")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "de::lenient_u32")]
    pub tubes_quantity: u32,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub request_reason: String,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub requester_name: String,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub requester_email: String,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub requester_phone: String,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub user_section: String,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub cost_center: String,
    #[serde(default)]
    pub last_replacement_date: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub existing_tire_make: String,
    #[serde(default, deserialize_with = "de::lenient_u32")]
    pub present_km_reading: u32,
    #[serde(default, deserialize_with = "de::lenient_u32")]
    pub previous_km_reading: u32,
    #[serde(default)]
    pub tire_wear_pattern: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub images: Vec<Option<String>>,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub supervisor_approved: bool,
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub technical_manager_approved: bool,
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub engineer_approved: bool,
    #[serde(default, deserialize_with = "de::lenient_timestamp")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl TireRequest {
    /// Tire size to display, preferring the size the backend recorded.
    pub fn display_tire_size(&self) -> &str {
        if self.tire_size.is_empty() {
            &self.tire_size_required
        } else {
            &self.tire_size
        }
    }

    /// Image URLs that are actually present, in slot order.
    pub fn attached_images(&self) -> impl Iterator<Item = &str> {
        self.images
            .iter()
            .filter_map(|image| image.as_deref())
            .filter(|url| !url.trim().is_empty())
    }

    /// Whether the given stage's approval flag is set on this record.
    pub fn stage_passed(&self, stage: ApprovalStage) -> bool {
        match stage {
            ApprovalStage::Supervisor => self.supervisor_approved,
            ApprovalStage::TechnicalManager => self.technical_manager_approved,
            ApprovalStage::Engineer => self.engineer_approved,
        }
    }

    /// Stages whose approval flag is set, in workflow order.
    pub fn passed_stages(&self) -> Vec<ApprovalStage> {
        ApprovalStage::ALL
            .into_iter()
            .filter(|stage| self.stage_passed(*stage))
            .collect()
    }

    /// Applies a reviewer decision to this record.
    ///
    /// On success the status is advanced (or set to rejected) and, for approvals, the matching
    /// stage flag is set. On error the record is left untouched.
    ///
    /// # Returns
    /// - `Ok(RequestStatus)` - The new status that should be sent to the backend
    /// - `Err(TransitionError)` - The decision is not valid for the current status
    pub fn apply_review(
        &mut self,
        stage: ApprovalStage,
        action: ReviewAction,
    ) -> Result<RequestStatus, TransitionError> {
        let next = self.status.transition(stage, action)?;

        if action == ReviewAction::Approve {
            match stage {
                ApprovalStage::Supervisor => self.supervisor_approved = true,
                ApprovalStage::TechnicalManager => self.technical_manager_approved = true,
                ApprovalStage::Engineer => self.engineer_approved = true,
            }
        }
        self.status = next.clone();

        Ok(next)
    }
}

/// Wear pattern classifications offered by the request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WearPattern {
    Yes,
    No,
    OneEdge,
    Middle,
    BothEdge,
    MiddleCrack,
    SidewallCrack,
    NormalWear,
}

impl WearPattern {
    pub const ALL: [WearPattern; 8] = [
        WearPattern::Yes,
        WearPattern::No,
        WearPattern::OneEdge,
        WearPattern::Middle,
        WearPattern::BothEdge,
        WearPattern::MiddleCrack,
        WearPattern::SidewallCrack,
        WearPattern::NormalWear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::OneEdge => "one edge",
            Self::Middle => "middle",
            Self::BothEdge => "both edge",
            Self::MiddleCrack => "middle crack",
            Self::SidewallCrack => "sidewall crack",
            Self::NormalWear => "normal wear",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pattern| pattern.as_str() == raw)
    }
}

/// An image selected for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Body of a status change sent by a reviewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateDto {
    pub status: RequestStatus,
}

/// A validated request ready to be sent to the backend.
///
/// Produced by [`RequestForm::validate`](crate::service::form::RequestForm::validate); every
/// numeric field has already been coerced.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewTireRequest {
    pub user_id: i64,
    pub vehicle_id: i64,
    #[validate(length(min = 1))]
    pub vehicle_number: String,
    pub year: u32,
    pub vehicle_brand: String,
    pub vehicle_model: String,
    #[validate(length(min = 1))]
    pub tire_size_required: String,
    #[validate(range(min = 1, max = 10))]
    pub quantity: u32,
    #[validate(range(min = 0, max = 10))]
    pub tubes_quantity: u32,
    #[validate(length(min = 1))]
    pub request_reason: String,
    #[validate(length(min = 1))]
    pub requester_name: String,
    #[validate(email)]
    pub requester_email: String,
    #[validate(length(min = 1))]
    pub requester_phone: String,
    #[validate(length(min = 1))]
    pub user_section: String,
    #[validate(length(min = 1))]
    pub last_replacement_date: String,
    #[validate(length(min = 1))]
    pub existing_tire_make: String,
    #[validate(length(min = 1))]
    pub cost_center: String,
    pub present_km_reading: u32,
    pub previous_km_reading: u32,
    pub tire_wear_pattern: Option<WearPattern>,
    pub comments: String,
    /// At most [`MAX_IMAGES`], one per filled form slot.
    pub images: Vec<ImageUpload>,
}

impl NewTireRequest {
    /// Scalar fields as multipart text parts, keyed by their wire names.
    ///
    /// `tireSize` mirrors `tireSizeRequired`; the backend stores the former.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("userId", self.user_id.to_string()),
            ("vehicleId", self.vehicle_id.to_string()),
            ("vehicleNumber", self.vehicle_number.clone()),
            ("year", self.year.to_string()),
            ("vehicleBrand", self.vehicle_brand.clone()),
            ("vehicleModel", self.vehicle_model.clone()),
            ("tireSizeRequired", self.tire_size_required.clone()),
            ("tireSize", self.tire_size_required.clone()),
            ("quantity", self.quantity.to_string()),
            ("tubesQuantity", self.tubes_quantity.to_string()),
            ("requestReason", self.request_reason.clone()),
            ("requesterName", self.requester_name.clone()),
            ("requesterEmail", self.requester_email.clone()),
            ("requesterPhone", self.requester_phone.clone()),
            ("userSection", self.user_section.clone()),
            ("lastReplacementDate", self.last_replacement_date.clone()),
            ("existingTireMake", self.existing_tire_make.clone()),
            ("costCenter", self.cost_center.clone()),
            ("presentKmReading", self.present_km_reading.to_string()),
            ("previousKmReading", self.previous_km_reading.to_string()),
            (
                "tireWearPattern",
                self.tire_wear_pattern
                    .map(|pattern| pattern.as_str().to_string())
                    .unwrap_or_default(),
            ),
            ("comments", self.comments.clone()),
        ]
    }
}
