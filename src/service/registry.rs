use crate::model::vehicle::Vehicle;

/// Snapshot of the vehicle registry used to validate and autofill request forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleRegistry {
    vehicles: Vec<Vehicle>,
}

impl VehicleRegistry {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Finds the vehicle whose number matches `vehicle_number` exactly.
    pub fn find(&self, vehicle_number: &str) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.vehicle_number == vehicle_number)
    }

    /// Vehicles whose number contains `input`, ignoring case and surrounding whitespace.
    ///
    /// An empty input suggests nothing.
    pub fn suggest(&self, input: &str) -> Vec<&Vehicle> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.vehicles
            .iter()
            .filter(|vehicle| vehicle.vehicle_number.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: i64, number: &str) -> Vehicle {
        Vehicle {
            id,
            vehicle_number: number.to_string(),
            make: "Toyota".to_string(),
            model: "Hiace".to_string(),
            year: Some(2018),
            tire_size: "185/65R15".to_string(),
            vehicle_type: None,
        }
    }

    fn registry() -> VehicleRegistry {
        VehicleRegistry::new(vec![
            vehicle(1, "ABC-123"),
            vehicle(2, "abd-456"),
            vehicle(3, "XYZ-789"),
        ])
    }

    #[test]
    fn find_requires_exact_match() {
        let registry = registry();
        assert_eq!(registry.find("ABC-123").map(|v| v.id), Some(1));
        assert!(registry.find("abc-123").is_none());
        assert!(registry.find("ABC-12").is_none());
        assert!(registry.find(" ABC-123").is_none());
    }

    #[test]
    fn suggestions_are_case_insensitive_substrings() {
        let registry = registry();
        let ids: Vec<i64> = registry.suggest(" ab").iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2]);

        assert_eq!(registry.suggest("789").len(), 1);
        assert!(registry.suggest("   ").is_empty());
    }
}
