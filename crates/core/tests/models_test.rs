use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_value};
use bookboard_core::models::{
    board::{BoardSummary, CreateLocationRequest, ReservationsQuery, ToggleSlotRequest},
    location::{default_locations, Location},
    time_slot::{TimeSlot, DEFAULT_TIME_SLOTS},
};

#[test]
fn test_new_location_is_seeded_with_default_slots() {
    let location = Location::new("Paris");

    assert_eq!(location.location_name, "Paris");
    let labels: Vec<&str> = location.time_slots.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(labels, vec!["9am-12pm", "12pm-3pm", "3pm-6pm"]);
    assert!(location.time_slots.iter().all(|s| !s.booked));
}

#[test]
fn test_default_locations() {
    let locations = default_locations();

    let names: Vec<&str> = locations.iter().map(|l| l.location_name.as_str()).collect();
    assert_eq!(names, vec!["Grand Canyon", "CN Tower"]);
    for location in &locations {
        assert_eq!(location.time_slots.len(), DEFAULT_TIME_SLOTS.len());
    }
}

#[test]
fn test_location_serializes_with_camel_case_keys() {
    let value = to_value(Location::new("CN Tower")).expect("Failed to serialize location");

    assert_eq!(
        value,
        json!({
            "locationName": "CN Tower",
            "timeSlots": [
                { "time": "9am-12pm", "booked": false },
                { "time": "12pm-3pm", "booked": false },
                { "time": "3pm-6pm", "booked": false },
            ]
        })
    );
}

#[test]
fn test_unknown_fields_are_preserved() {
    let text = r#"{"locationName":"Louvre","timeSlots":[{"time":"9am-12pm","booked":true,"note":"vip"}],"rating":5}"#;

    let location: Location = from_str(text).expect("Failed to deserialize location");
    assert_eq!(location.extra.get("rating"), Some(&json!(5)));
    assert_eq!(location.time_slots[0].extra.get("note"), Some(&json!("vip")));

    let value = to_value(&location).expect("Failed to serialize location");
    assert_eq!(value["rating"], json!(5));
    assert_eq!(value["timeSlots"][0]["note"], json!("vip"));
}

#[rstest]
#[case(json!({}), false)]
#[case(json!({ "booked": false }), false)]
#[case(json!({ "booked": 0 }), false)]
#[case(json!({ "booked": null }), false)]
#[case(json!({ "booked": true }), true)]
#[case(json!({ "booked": "yes" }), true)]
fn test_location_level_booked_flag(#[case] extra: serde_json::Value, #[case] expected: bool) {
    let mut location = Location::new("Louvre");
    if let serde_json::Value::Object(map) = extra {
        location.extra = map;
    }

    assert_eq!(location.is_booked(), expected);
}

#[test]
fn test_slot_toggled_keeps_label() {
    let slot = TimeSlot::unbooked("12pm-3pm");
    let toggled = slot.toggled();

    assert_eq!(toggled.time, "12pm-3pm");
    assert!(toggled.booked);
    assert_eq!(toggled.toggled(), slot);
}

#[test]
fn test_requests_use_camel_case() {
    let create: CreateLocationRequest =
        from_str(r#"{"locationName":"Paris"}"#).expect("Failed to deserialize create request");
    assert_eq!(create.location_name, "Paris");

    let toggle: ToggleSlotRequest = from_str(r#"{"locationName":"Paris","time":"3pm-6pm"}"#)
        .expect("Failed to deserialize toggle request");
    assert_eq!(toggle.location_name, "Paris");
    assert_eq!(toggle.time, "3pm-6pm");
}

#[test]
fn test_reservations_query_defaults_to_booked() {
    let query: ReservationsQuery = from_str("{}").expect("Failed to deserialize query");
    assert!(query.booked);
}

#[test]
fn test_board_summary_headline() {
    let summary = BoardSummary::new(2);

    assert_eq!(summary.destinations, 2);
    assert_eq!(summary.headline, "Our Highlights (2 destinations to choose from)");
}
