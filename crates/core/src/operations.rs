//! Pure state transitions over a location list.
//!
//! None of these touch storage; [`crate::store::ReservationStore`] pairs them
//! with persistence.

use crate::models::location::Location;

/// Appends a freshly seeded location, or returns `None` when the name is taken.
pub fn create_location(locations: &[Location], location_name: &str) -> Option<Vec<Location>> {
    if locations.iter().any(|l| l.location_name == location_name) {
        return None;
    }

    let mut updated = Vec::with_capacity(locations.len() + 1);
    updated.extend_from_slice(locations);
    updated.push(Location::new(location_name));
    Some(updated)
}

/// Flips the slot labelled `time` of the location named `location_name`.
///
/// Unknown names or labels produce an identical copy of the input.
pub fn toggle_slot(locations: &[Location], location_name: &str, time: &str) -> Vec<Location> {
    locations
        .iter()
        .map(|location| {
            if location.location_name != location_name {
                return location.clone();
            }
            Location {
                time_slots: location
                    .time_slots
                    .iter()
                    .map(|slot| if slot.time == time { slot.toggled() } else { slot.clone() })
                    .collect(),
                ..location.clone()
            }
        })
        .collect()
}

/// `(location name, time label)` of every slot whose booked flag equals
/// `booked`, in location order then slot order.
pub fn reservations(
    locations: &[Location],
    booked: bool,
) -> impl Iterator<Item = (&str, &str)> + '_ {
    locations.iter().flat_map(move |location| {
        location
            .time_slots
            .iter()
            .filter(move |slot| slot.booked == booked)
            .map(move |slot| (location.location_name.as_str(), slot.time.as_str()))
    })
}

/// Destinations counted by the board header: locations whose own record is
/// not marked booked. Slot bookings do not reduce this number.
pub fn destinations_available(locations: &[Location]) -> usize {
    locations.iter().filter(|l| !l.is_booked()).count()
}
