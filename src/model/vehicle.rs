use serde::{Deserialize, Serialize};

use crate::model::de;

/// A registered fleet vehicle as returned by the vehicle registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    pub vehicle_number: String,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub make: String,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub model: String,
    #[serde(default, deserialize_with = "de::lenient_opt_u32")]
    pub year: Option<u32>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub tire_size: String,
    #[serde(default)]
    pub vehicle_type: Option<String>,
}
