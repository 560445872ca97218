pub mod board;
pub mod location;
pub mod time_slot;
