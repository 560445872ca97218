use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Labels every new location is seeded with, in display order.
pub const DEFAULT_TIME_SLOTS: [&str; 3] = ["9am-12pm", "12pm-3pm", "3pm-6pm"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(default)]
    pub time: String,
    /// Missing in persisted data means unbooked.
    #[serde(default)]
    pub booked: bool,
    /// Fields found in persisted data that this model does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TimeSlot {
    pub fn unbooked(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            booked: false,
            extra: Map::new(),
        }
    }

    /// Returns a copy of this slot with the booked flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            booked: !self.booked,
            ..self.clone()
        }
    }
}

pub fn default_time_slots() -> Vec<TimeSlot> {
    DEFAULT_TIME_SLOTS.iter().map(|time| TimeSlot::unbooked(*time)).collect()
}
