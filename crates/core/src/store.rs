//! # Reservation Store
//!
//! Holds the canonical location list and is the only place it changes.
//! Every change produces a new [`Snapshot`], writes it through the
//! [`PersistenceBridge`] and only then makes it current, so callers either
//! see the complete new list or the old one.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    errors::BoardResult,
    models::{
        board::BoardSummary,
        location::{default_locations, Location},
    },
    operations,
    persistence::{KeyValueStore, PersistenceBridge},
};

/// The full location list at one point in time.
pub type Snapshot = Arc<[Location]>;

#[derive(Debug)]
pub struct ReservationStore<S> {
    bridge: PersistenceBridge<S>,
    locations: Snapshot,
}

impl<S: KeyValueStore> ReservationStore<S> {
    /// Builds the store from whatever `storage` holds.
    ///
    /// Missing, unreadable or malformed data is logged and replaced by the
    /// default locations. The adopted list is written back once; a failure of
    /// that write is logged and otherwise ignored.
    pub fn initialize(storage: S) -> Self {
        let mut bridge = PersistenceBridge::new(storage);

        let locations = match bridge.load() {
            Ok(Some(locations)) => {
                info!(count = locations.len(), "Loaded persisted reservations");
                locations
            }
            Ok(None) => {
                info!("No persisted reservations, starting from defaults");
                default_locations()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load persisted reservations, starting from defaults");
                default_locations()
            }
        };

        if let Err(e) = bridge.save(&locations) {
            warn!(error = %e, "Failed to persist initial reservations");
        }

        Self {
            bridge,
            locations: locations.into(),
        }
    }

    /// The current snapshot.
    pub fn locations(&self) -> Snapshot {
        Arc::clone(&self.locations)
    }

    /// Adds a location seeded with the default time slots.
    ///
    /// A name that already exists leaves the store untouched and writes
    /// nothing.
    pub fn create_location(&mut self, location_name: &str) -> BoardResult<Snapshot> {
        match operations::create_location(&self.locations, location_name) {
            Some(updated) => {
                debug!(location_name, "Creating location");
                self.commit(updated)
            }
            None => {
                debug!(location_name, "Location already exists");
                Ok(self.locations())
            }
        }
    }

    /// Flips one slot's booked flag and persists the result.
    pub fn toggle_slot(&mut self, location_name: &str, time: &str) -> BoardResult<Snapshot> {
        debug!(location_name, time, "Toggling slot");
        let updated = operations::toggle_slot(&self.locations, location_name, time);
        self.commit(updated)
    }

    /// Clears the persisted list and reinstalls the defaults.
    pub fn reset(&mut self) -> BoardResult<Snapshot> {
        info!("Resetting reservations to defaults");
        self.bridge.clear()?;
        self.commit(default_locations())
    }

    /// Rows whose booked flag equals `booked`, recomputed from the current
    /// snapshot.
    pub fn reservations(&self, booked: bool) -> impl Iterator<Item = (&str, &str)> + '_ {
        operations::reservations(&self.locations, booked)
    }

    pub fn destinations_available(&self) -> usize {
        operations::destinations_available(&self.locations)
    }

    pub fn summary(&self) -> BoardSummary {
        BoardSummary::new(self.destinations_available())
    }

    pub fn storage(&self) -> &S {
        self.bridge.storage()
    }

    pub fn into_storage(self) -> S {
        self.bridge.into_storage()
    }

    fn commit(&mut self, locations: Vec<Location>) -> BoardResult<Snapshot> {
        self.bridge.save(&locations)?;
        self.locations = locations.into();
        Ok(self.locations())
    }
}
