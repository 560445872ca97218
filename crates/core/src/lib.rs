//! # Bookboard Core
//!
//! Data model, state transitions and persistence contract of the reservation
//! board. Storage backends plug in through [`persistence::KeyValueStore`].

pub mod errors;
pub mod models;
pub mod operations;
pub mod persistence;
pub mod store;
