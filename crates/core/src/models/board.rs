use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    pub location_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSlotRequest {
    pub location_name: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationsQuery {
    #[serde(default = "default_booked")]
    pub booked: bool,
}

fn default_booked() -> bool {
    true
}

/// One row of a reservation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRow {
    pub location_name: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub destinations: usize,
    pub headline: String,
}

impl BoardSummary {
    pub fn new(destinations: usize) -> Self {
        Self {
            destinations,
            headline: format!("Our Highlights ({destinations} destinations to choose from)"),
        }
    }
}
