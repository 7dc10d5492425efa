//! Pool Tag Harvester - subgraph liquidity pools as registry contract tags
//!
//! Pages through a protocol's subgraph by creation timestamp and turns every
//! liquidity pool into a `ContractTag` keyed by its CAIP-10 style address.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod pipeline;
pub mod tags;
pub mod utils;
pub mod storage;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{FetchError, TagError, TagResult};
pub use pipeline::{collect_all_tags, return_tags, return_tags_for, PipelineDefinition};
pub use types::*;
