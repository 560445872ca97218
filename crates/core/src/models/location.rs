use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::time_slot::{default_time_slots, TimeSlot};

/// Locations installed when storage holds nothing usable.
pub const DEFAULT_LOCATIONS: [&str; 2] = ["Grand Canyon", "CN Tower"];

/// A named destination with its bookable time slots.
///
/// Serialized with camelCase keys (`locationName`, `timeSlots`) so the
/// persisted layout matches what the board has always written. Records with
/// missing fields are still accepted; the gaps read as empty or unbooked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    /// Fields found in persisted data that this model does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Location {
    /// Creates a location seeded with the three default, unbooked slots.
    pub fn new(location_name: impl Into<String>) -> Self {
        Self {
            location_name: location_name.into(),
            time_slots: default_time_slots(),
            extra: Map::new(),
        }
    }

    /// Whether the location record itself carries a truthy `booked` field.
    ///
    /// Only slots are ever booked by the board, so this is false unless the
    /// persisted data says otherwise.
    pub fn is_booked(&self) -> bool {
        self.extra.get("booked").is_some_and(is_truthy)
    }
}

pub fn default_locations() -> Vec<Location> {
    DEFAULT_LOCATIONS.iter().map(|name| Location::new(*name)).collect()
}

// JavaScript truthiness, which is what the persisted data was written against.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
