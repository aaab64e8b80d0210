use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("You must be logged in to submit a tire request.")]
    NotAuthenticated,
    #[error("Please select a valid vehicle number from the list.")]
    VehicleNotFound(String),
    #[error("Please fill in the required field: {0}")]
    MissingField(&'static str),
    #[error("{field} must be a whole number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} must be a date (YYYY-MM-DD), got {value:?}")]
    InvalidDate { field: &'static str, value: String },
    #[error("Image slot {0} does not exist")]
    InvalidImageSlot(usize),
    #[error("Please check the highlighted fields: {0}")]
    Constraints(#[from] validator::ValidationErrors),
}

impl ValidationError {
    /// Wire (camelCase) names of the fields that failed validation, sorted.
    pub fn fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = match self {
            Self::VehicleNotFound(_) => vec!["vehicleNumber".to_string()],
            Self::MissingField(field)
            | Self::InvalidNumber { field, .. }
            | Self::InvalidDate { field, .. } => {
                vec![field.to_string()]
            }
            Self::Constraints(errors) => errors
                .field_errors()
                .keys()
                .map(|field| camel_case(field))
                .collect(),
            Self::NotAuthenticated | Self::InvalidImageSlot(_) => Vec::new(),
        };
        fields.sort();
        fields
    }
}

/// `requester_email` -> `requesterEmail`
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_fields_use_wire_names() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("tubes_quantity", validator::ValidationError::new("range"));
        errors.add("requester_email", validator::ValidationError::new("email"));

        let err = ValidationError::Constraints(errors);
        assert_eq!(err.fields(), vec!["requesterEmail", "tubesQuantity"]);
    }

    #[test]
    fn camel_case_leaves_single_words_alone() {
        assert_eq!(camel_case("quantity"), "quantity");
        assert_eq!(camel_case("present_km_reading"), "presentKmReading");
    }
}
