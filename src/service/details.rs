//! Read-only snapshot of a request for the details modal.

use crate::model::request::TireRequest;

/// One label/value line in a details section.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
    /// Render with preserved line breaks (free-text fields).
    pub multiline: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    pub title: &'static str,
    pub rows: Vec<DetailRow>,
}

/// An attached image, numbered from 1 in slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailImage {
    pub number: usize,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestDetails {
    pub sections: Vec<DetailSection>,
    pub images: Vec<DetailImage>,
}

fn row(label: &'static str, value: impl Into<String>) -> DetailRow {
    DetailRow {
        label,
        value: value.into(),
        multiline: false,
    }
}

fn text_row(label: &'static str, value: impl Into<String>) -> DetailRow {
    DetailRow {
        label,
        value: value.into(),
        multiline: true,
    }
}

impl From<&TireRequest> for RequestDetails {
    fn from(request: &TireRequest) -> Self {
        let vehicle = DetailSection {
            title: "Vehicle Information",
            rows: vec![
                row("Vehicle Number", request.vehicle_number.clone()),
                row(
                    "Vehicle Type",
                    request.vehicle_type.clone().unwrap_or_default(),
                ),
                row(
                    "Make/Model",
                    format!("{} {}", request.vehicle_brand, request.vehicle_model)
                        .trim()
                        .to_string(),
                ),
                row(
                    "Current KM Reading",
                    format!("{} km", request.present_km_reading),
                ),
            ],
        };

        let tubes = if request.tubes_quantity == 0 {
            "None".to_string()
        } else {
            request.tubes_quantity.to_string()
        };
        let wear_pattern = request
            .tire_wear_pattern
            .as_deref()
            .filter(|pattern| !pattern.trim().is_empty())
            .map(|pattern| pattern.replace('_', " "))
            .unwrap_or_else(|| "Not specified".to_string());

        let tires = DetailSection {
            title: "Tire Details",
            rows: vec![
                row("Tire Size", request.display_tire_size()),
                row("Quantity Requested", format!("{} tires", request.quantity)),
                row("Tubes Requested", tubes),
                row(
                    "Last Replacement KM",
                    format!("{} km", request.previous_km_reading),
                ),
                row("Wear Pattern", wear_pattern),
            ],
        };

        let requester = DetailSection {
            title: "Requester Information",
            rows: vec![
                row("Name", request.requester_name.clone()),
                row("Section", request.user_section.clone()),
                row(
                    "Contact",
                    format!("{} / {}", request.requester_phone, request.requester_email),
                ),
                row("Cost Center", request.cost_center.clone()),
            ],
        };

        let mut additional = DetailSection {
            title: "Additional Information",
            rows: vec![text_row("Request Reason", request.request_reason.clone())],
        };
        if let Some(comments) = request
            .comments
            .as_deref()
            .filter(|comments| !comments.trim().is_empty())
        {
            additional
                .rows
                .push(text_row("Additional Notes", comments.to_string()));
        }

        let images = request
            .attached_images()
            .enumerate()
            .map(|(index, url)| DetailImage {
                number: index + 1,
                url: url.to_string(),
            })
            .collect();

        Self {
            sections: vec![vehicle, tires, requester, additional],
            images,
        }
    }
}

impl RequestDetails {
    /// Looks up a row's value by section title and row label.
    pub fn value(&self, section: &str, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.title == section)?
            .rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(extra: serde_json::Value) -> TireRequest {
        let mut base = serde_json::json!({
            "id": 9,
            "vehicleNumber": "ABC-123",
            "vehicleBrand": "Toyota",
            "vehicleModel": "Axio",
            "tireSize": "185/65R15",
            "quantity": 4,
            "tubesQuantity": 0,
            "presentKmReading": 82000,
            "previousKmReading": 41000,
            "requesterName": "Saman",
            "requesterPhone": "0771234567",
            "requesterEmail": "saman@example.com",
            "requestReason": "Worn out"
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            for (key, value) in extra {
                base.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn builds_four_sections() {
        let details = RequestDetails::from(&request(serde_json::json!({})));
        let titles: Vec<_> = details.sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Vehicle Information",
                "Tire Details",
                "Requester Information",
                "Additional Information"
            ]
        );
        assert_eq!(
            details.value("Vehicle Information", "Make/Model"),
            Some("Toyota Axio")
        );
        assert_eq!(
            details.value("Requester Information", "Contact"),
            Some("0771234567 / saman@example.com")
        );
    }

    #[test]
    fn zero_tubes_read_as_none() {
        let details = RequestDetails::from(&request(serde_json::json!({})));
        assert_eq!(details.value("Tire Details", "Tubes Requested"), Some("None"));

        let details = RequestDetails::from(&request(serde_json::json!({"tubesQuantity": 2})));
        assert_eq!(details.value("Tire Details", "Tubes Requested"), Some("2"));
    }

    #[test]
    fn wear_pattern_underscores_become_spaces() {
        let details =
            RequestDetails::from(&request(serde_json::json!({"tireWearPattern": "one_edge"})));
        assert_eq!(details.value("Tire Details", "Wear Pattern"), Some("one edge"));

        let details = RequestDetails::from(&request(serde_json::json!({})));
        assert_eq!(
            details.value("Tire Details", "Wear Pattern"),
            Some("Not specified")
        );
    }

    #[test]
    fn comments_only_when_present() {
        let details = RequestDetails::from(&request(serde_json::json!({"comments": ""})));
        assert_eq!(details.value("Additional Information", "Additional Notes"), None);

        let details =
            RequestDetails::from(&request(serde_json::json!({"comments": "Urgent\nfront axle"})));
        assert_eq!(
            details.value("Additional Information", "Additional Notes"),
            Some("Urgent\nfront axle")
        );
    }

    #[test]
    fn images_skip_empty_slots() {
        let details = RequestDetails::from(&request(serde_json::json!({
            "images": [null, "/uploads/1.jpg", "", "/uploads/2.jpg"]
        })));
        assert_eq!(
            details.images,
            vec![
                DetailImage {
                    number: 1,
                    url: "/uploads/1.jpg".to_string()
                },
                DetailImage {
                    number: 2,
                    url: "/uploads/2.jpg".to_string()
                },
            ]
        );
    }
}
