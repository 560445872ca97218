//! Storage adapters for the reservation board.
//!
//! [`FileStore`] keeps the board's key-value data in a JSON file on disk;
//! [`mock::MockKvStore`] stands in for it in tests.

pub mod file_store;
pub mod mock;

pub use file_store::FileStore;

use std::path::Path;

use bookboard_core::persistence::KeyValueStore;

/// Opens the file-backed store used by the running board.
pub fn open_store(path: impl AsRef<Path>) -> Box<dyn KeyValueStore + Send> {
    Box::new(FileStore::new(path.as_ref()))
}
