//! Editable state of the tire request form.
//!
//! The form keeps every input as the raw string the user typed. Vehicle-derived fields (year,
//! brand, model, tire size) are not editable: they are filled from the registry whenever the
//! vehicle number matches a registered vehicle and cleared whenever it does not.
//! [`RequestForm::validate`] turns the raw state into a [`NewTireRequest`] or explains why it
//! cannot be submitted.

use chrono::NaiveDate;
use validator::Validate;

use crate::{
    error::{validation::ValidationError, Error},
    model::{
        request::{ImageUpload, NewTireRequest, WearPattern, MAX_IMAGES},
        user::UserDto,
        vehicle::Vehicle,
    },
    service::registry::VehicleRegistry,
};

/// Outcome of looking up the entered vehicle number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VehicleMatch {
    /// Nothing entered yet.
    #[default]
    Empty,
    /// The number matches a registered vehicle.
    Found,
    /// The number matches no registered vehicle; submission is blocked.
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestForm {
    pub requester_name: String,
    pub requester_email: String,
    pub requester_phone: String,
    pub user_section: String,
    pub last_replacement_date: String,
    pub existing_tire_make: String,
    pub cost_center: String,
    pub quantity: String,
    pub tubes_quantity: String,
    pub present_km_reading: String,
    pub previous_km_reading: String,
    pub tire_wear_pattern: Option<WearPattern>,
    pub comments: String,
    pub request_reason: String,

    vehicle_number: String,
    vehicle_touched: bool,
    vehicle_match: VehicleMatch,
    vehicle_id: Option<i64>,
    year: String,
    vehicle_brand: String,
    vehicle_model: String,
    tire_size_required: String,

    images: [Option<ImageUpload>; MAX_IMAGES],
}

impl Default for RequestForm {
    fn default() -> Self {
        Self {
            requester_name: String::new(),
            requester_email: String::new(),
            requester_phone: String::new(),
            user_section: String::new(),
            last_replacement_date: String::new(),
            existing_tire_make: String::new(),
            cost_center: String::new(),
            quantity: "1".to_string(),
            tubes_quantity: "0".to_string(),
            present_km_reading: String::new(),
            previous_km_reading: String::new(),
            tire_wear_pattern: None,
            comments: String::new(),
            request_reason: String::new(),
            vehicle_number: String::new(),
            vehicle_touched: false,
            vehicle_match: VehicleMatch::Empty,
            vehicle_id: None,
            year: String::new(),
            vehicle_brand: String::new(),
            vehicle_model: String::new(),
            tire_size_required: String::new(),
            images: Default::default(),
        }
    }
}

impl RequestForm {
    pub fn vehicle_number(&self) -> &str {
        &self.vehicle_number
    }

    pub fn vehicle_match(&self) -> VehicleMatch {
        self.vehicle_match
    }

    /// Registry id of the matched vehicle.
    pub fn vehicle_id(&self) -> Option<i64> {
        self.vehicle_id
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn vehicle_brand(&self) -> &str {
        &self.vehicle_brand
    }

    pub fn vehicle_model(&self) -> &str {
        &self.vehicle_model
    }

    pub fn tire_size_required(&self) -> &str {
        &self.tire_size_required
    }

    /// Whether the submit action must be disabled because of the vehicle number.
    pub fn vehicle_blocked(&self) -> bool {
        self.vehicle_match == VehicleMatch::NotFound
    }

    /// Whether to show the "vehicle not found" hint (only after the field lost focus).
    pub fn show_vehicle_not_found(&self) -> bool {
        self.vehicle_blocked() && self.vehicle_touched
    }

    /// Updates the vehicle number and re-runs the registry lookup.
    pub fn set_vehicle_number(
        &mut self,
        vehicle_number: impl Into<String>,
        registry: &VehicleRegistry,
    ) -> VehicleMatch {
        self.vehicle_number = vehicle_number.into();
        self.vehicle_touched = false;
        self.refresh_vehicle(registry)
    }

    /// Marks the vehicle field as visited.
    pub fn touch_vehicle(&mut self) {
        self.vehicle_touched = true;
    }

    /// Fills the vehicle fields from an autosuggest pick.
    pub fn select_suggestion(&mut self, vehicle: &Vehicle) {
        self.vehicle_number = vehicle.vehicle_number.clone();
        self.fill_vehicle(vehicle);
    }

    /// Re-runs the lookup for the current vehicle number, e.g. after the registry reloaded.
    pub fn refresh_vehicle(&mut self, registry: &VehicleRegistry) -> VehicleMatch {
        if self.vehicle_number.is_empty() {
            self.clear_vehicle();
            self.vehicle_match = VehicleMatch::Empty;
            return self.vehicle_match;
        }

        match registry.find(&self.vehicle_number) {
            Some(vehicle) => {
                let vehicle = vehicle.clone();
                self.fill_vehicle(&vehicle);
            }
            None => {
                self.clear_vehicle();
                self.vehicle_match = VehicleMatch::NotFound;
            }
        }

        self.vehicle_match
    }

    fn fill_vehicle(&mut self, vehicle: &Vehicle) {
        self.vehicle_id = Some(vehicle.id);
        self.year = vehicle.year.map(|year| year.to_string()).unwrap_or_default();
        self.vehicle_brand = vehicle.make.clone();
        self.vehicle_model = vehicle.model.clone();
        self.tire_size_required = vehicle.tire_size.clone();
        self.vehicle_match = VehicleMatch::Found;
    }

    fn clear_vehicle(&mut self) {
        self.vehicle_id = None;
        self.year.clear();
        self.vehicle_brand.clear();
        self.vehicle_model.clear();
        self.tire_size_required.clear();
    }

    pub fn images(&self) -> &[Option<ImageUpload>; MAX_IMAGES] {
        &self.images
    }

    /// Puts an image in one of the upload slots, replacing what was there.
    pub fn set_image(&mut self, slot: usize, image: ImageUpload) -> Result<(), ValidationError> {
        let entry = self
            .images
            .get_mut(slot)
            .ok_or(ValidationError::InvalidImageSlot(slot))?;
        *entry = Some(image);
        Ok(())
    }

    pub fn clear_image(&mut self, slot: usize) -> Result<(), ValidationError> {
        let entry = self
            .images
            .get_mut(slot)
            .ok_or(ValidationError::InvalidImageSlot(slot))?;
        *entry = None;
        Ok(())
    }

    /// Checks the form and builds the payload to submit.
    ///
    /// Checks run in this order, stopping at the first failure: signed in, vehicle number
    /// registered, required fields present, numbers well formed, field constraints (quantity
    /// 1–10, tubes 0–10, email shape). Vehicle-derived fields are taken from the matched
    /// registry record.
    ///
    /// # Arguments
    /// - `user` - The signed-in user, if any
    /// - `registry` - Registry to match the vehicle number against
    ///
    /// # Returns
    /// - `Ok(NewTireRequest)` - Payload ready for submission
    /// - `Err(Error::ValidationError)` - Why the form cannot be submitted
    pub fn validate(
        &self,
        user: Option<&UserDto>,
        registry: &VehicleRegistry,
    ) -> Result<NewTireRequest, Error> {
        let user = user.ok_or(ValidationError::NotAuthenticated)?;

        let vehicle = registry
            .find(&self.vehicle_number)
            .ok_or_else(|| ValidationError::VehicleNotFound(self.vehicle_number.clone()))?;

        let required = [
            ("requesterName", &self.requester_name),
            ("requesterEmail", &self.requester_email),
            ("requesterPhone", &self.requester_phone),
            ("userSection", &self.user_section),
            ("lastReplacementDate", &self.last_replacement_date),
            ("existingTireMake", &self.existing_tire_make),
            ("quantity", &self.quantity),
            ("tubesQuantity", &self.tubes_quantity),
            ("costCenter", &self.cost_center),
            ("presentKmReading", &self.present_km_reading),
            ("previousKmReading", &self.previous_km_reading),
            ("requestReason", &self.request_reason),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field).into());
        }
        if vehicle.tire_size.trim().is_empty() {
            return Err(ValidationError::MissingField("tireSizeRequired").into());
        }

        let last_replacement_date = self.last_replacement_date.trim();
        if NaiveDate::parse_from_str(last_replacement_date, "%Y-%m-%d").is_err() {
            return Err(ValidationError::InvalidDate {
                field: "lastReplacementDate",
                value: self.last_replacement_date.clone(),
            }
            .into());
        }

        let request = NewTireRequest {
            user_id: user.id,
            vehicle_id: vehicle.id,
            vehicle_number: vehicle.vehicle_number.clone(),
            year: vehicle.year.unwrap_or(0),
            vehicle_brand: vehicle.make.clone(),
            vehicle_model: vehicle.model.clone(),
            tire_size_required: vehicle.tire_size.clone(),
            quantity: coerce_number("quantity", &self.quantity)?,
            tubes_quantity: coerce_number("tubesQuantity", &self.tubes_quantity)?,
            request_reason: self.request_reason.trim().to_string(),
            requester_name: self.requester_name.trim().to_string(),
            requester_email: self.requester_email.trim().to_string(),
            requester_phone: self.requester_phone.trim().to_string(),
            user_section: self.user_section.trim().to_string(),
            last_replacement_date: last_replacement_date.to_string(),
            existing_tire_make: self.existing_tire_make.trim().to_string(),
            cost_center: self.cost_center.trim().to_string(),
            present_km_reading: coerce_number("presentKmReading", &self.present_km_reading)?,
            previous_km_reading: coerce_number("previousKmReading", &self.previous_km_reading)?,
            tire_wear_pattern: self.tire_wear_pattern,
            comments: self.comments.trim().to_string(),
            images: self.images.iter().flatten().cloned().collect(),
        };

        request.validate()?;

        Ok(request)
    }
}

/// Converts a numeric input to a number, treating blank input as zero.
pub fn coerce_number(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }

    raw.parse::<u32>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}
