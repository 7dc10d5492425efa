//! Paginated fetch-and-transform pipelines

pub mod definitions;
pub mod driver;
pub mod registry;

pub use definitions::*;
pub use driver::*;
pub use registry::*;
