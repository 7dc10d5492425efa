//! Error types for fetching and tagging

pub mod tag_error;

pub use tag_error::*;
