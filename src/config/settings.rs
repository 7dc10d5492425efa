//! Harvester configuration settings and environment variable handling

use std::env;

// Pagination constants
pub const PAGE_SIZE: usize = 1000;

// Tag formatting constants
pub const ADDRESS_NAMESPACE: &str = "eip155";
pub const API_KEY_PLACEHOLDER: &str = "[api-key]";
pub const ADDRESS_PLACEHOLDER: &str = "{address}";

// Transport constants
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 5;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

pub const DEFAULT_PIPELINE: &str = "uniswap-v3";
pub const DEFAULT_NETWORK_ID: &str = "42161";

#[derive(Debug, Clone)]
pub struct Config {
    // Gateway API key substituted into endpoint templates
    pub subgraph_api_key: Option<String>,
    pub pipeline: String,
    pub network_id: String,
    pub output_dir: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            subgraph_api_key: env::var("SUBGRAPH_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            pipeline: env::var("TAG_PIPELINE")
                .unwrap_or_else(|_| DEFAULT_PIPELINE.to_string()),
            network_id: env::var("TAG_NETWORK_ID")
                .unwrap_or_else(|_| DEFAULT_NETWORK_ID.to_string()),
            output_dir: env::var("TAG_OUTPUT_DIR")
                .unwrap_or_else(|_| "output".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
                .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS),
        }
    }
}
