//! Data persistence and file operations

pub mod tags;

pub use tags::*;
