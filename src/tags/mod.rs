//! Contract tag construction

pub mod sanitize;
pub mod transformer;

pub use sanitize::*;
pub use transformer::*;
