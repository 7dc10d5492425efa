//! Core data types and structures

pub mod cursor;
pub mod graphql;
pub mod networks;
pub mod pools;
pub mod tags;

pub use cursor::*;
pub use graphql::*;
pub use networks::*;
pub use pools::*;
pub use tags::*;
