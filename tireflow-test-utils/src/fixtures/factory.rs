//! Backend records used across tests.

use chrono::{TimeZone, Utc};
use tireflow::{
    model::{
        request::TireRequest,
        status::RequestStatus,
        user::{UserDto, UserRole},
        vehicle::Vehicle,
    },
    service::{form::RequestForm, registry::VehicleRegistry},
};

use crate::constant::{
    TEST_REQUEST_ID, TEST_TIRE_SIZE, TEST_USER_ID, TEST_VEHICLE_ID, TEST_VEHICLE_NUMBER,
};

/// Registered vehicle `ABC-123` (Toyota Axio, 185/65R15).
pub fn mock_vehicle() -> Vehicle {
    Vehicle {
        id: TEST_VEHICLE_ID,
        vehicle_number: TEST_VEHICLE_NUMBER.to_string(),
        make: "Toyota".to_string(),
        model: "Axio".to_string(),
        year: Some(2017),
        tire_size: TEST_TIRE_SIZE.to_string(),
        vehicle_type: Some("Car".to_string()),
    }
}

/// Another registered vehicle with a distinct number.
pub fn mock_vehicle_with_number(id: i64, vehicle_number: &str) -> Vehicle {
    Vehicle {
        id,
        vehicle_number: vehicle_number.to_string(),
        ..mock_vehicle()
    }
}

pub fn mock_user() -> UserDto {
    mock_user_with_role(UserRole::User)
}

pub fn mock_user_with_role(role: UserRole) -> UserDto {
    UserDto {
        id: TEST_USER_ID,
        name: "Saman Perera".to_string(),
        email: Some("saman@example.com".to_string()),
        role,
    }
}

/// A request for [`mock_vehicle`] in the given status.
pub fn mock_request(id: i64, status: RequestStatus) -> TireRequest {
    let supervisor_approved = matches!(
        status,
        RequestStatus::SupervisorApproved
            | RequestStatus::TechnicalManagerApproved
            | RequestStatus::EngineerApproved
            | RequestStatus::Complete
    );
    let technical_manager_approved = matches!(
        status,
        RequestStatus::TechnicalManagerApproved
            | RequestStatus::EngineerApproved
            | RequestStatus::Complete
    );
    let engineer_approved = matches!(
        status,
        RequestStatus::EngineerApproved | RequestStatus::Complete
    );

    TireRequest {
        id,
        user_id: Some(TEST_USER_ID),
        vehicle_id: Some(TEST_VEHICLE_ID),
        vehicle_number: TEST_VEHICLE_NUMBER.to_string(),
        vehicle_type: Some("Car".to_string()),
        vehicle_brand: "Toyota".to_string(),
        vehicle_model: "Axio".to_string(),
        year: Some(2017),
        tire_size: TEST_TIRE_SIZE.to_string(),
        tire_size_required: TEST_TIRE_SIZE.to_string(),
        quantity: 4,
        tubes_quantity: 0,
        request_reason: "Tread worn below limit".to_string(),
        requester_name: "Saman Perera".to_string(),
        requester_email: "saman@example.com".to_string(),
        requester_phone: "0771234567".to_string(),
        user_section: "Transport".to_string(),
        cost_center: "CC-101".to_string(),
        last_replacement_date: Some("2023-01-15".to_string()),
        existing_tire_make: "Dunlop".to_string(),
        present_km_reading: 82000,
        previous_km_reading: 41000,
        tire_wear_pattern: None,
        comments: None,
        images: Vec::new(),
        status,
        supervisor_approved,
        technical_manager_approved,
        engineer_approved,
        submitted_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).single(),
    }
}

/// A freshly submitted request with the default id.
pub fn mock_pending_request() -> TireRequest {
    mock_request(TEST_REQUEST_ID, RequestStatus::Pending)
}

/// A form for [`mock_vehicle`] that passes validation against `registry`.
pub fn mock_filled_form(registry: &VehicleRegistry) -> RequestForm {
    let mut form = RequestForm::default();
    form.requester_name = "Saman Perera".to_string();
    form.requester_email = "saman@example.com".to_string();
    form.requester_phone = "0771234567".to_string();
    form.user_section = "Transport".to_string();
    form.last_replacement_date = "2023-01-15".to_string();
    form.existing_tire_make = "Dunlop".to_string();
    form.cost_center = "CC-101".to_string();
    form.quantity = "4".to_string();
    form.present_km_reading = "82000".to_string();
    form.previous_km_reading = "41000".to_string();
    form.request_reason = "Tread worn below limit".to_string();
    form.set_vehicle_number(TEST_VEHICLE_NUMBER, registry);
    form
}
