//! Pool Tag Harvester - Main Entry Point
//!
//! Runs one configured pipeline against one network and saves the tags.

use anyhow::Result;
use pool_tag_harvester::*;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = CONFIG.clone();
    let output_dir = Path::new(&config.output_dir);

    // Initialize logging
    utils::setup_output_directories(output_dir)?;
    let _logging_guard = utils::setup_logging(output_dir)?;

    info!("🏷️  Pool Tag Harvester v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   Pipeline: {}", config.pipeline);
    info!("   Network: {}", config.network_id);
    info!("   Output: {}", config.output_dir);
    info!("   Request Timeout: {}s", config.request_timeout_secs);

    let Some(api_key) = config.subgraph_api_key.as_deref() else {
        error!("❌ SUBGRAPH_API_KEY is not set");
        return Err(anyhow::anyhow!("SUBGRAPH_API_KEY is required"));
    };

    let start_time = Instant::now();
    let tags = pipeline::return_tags_for(&config.pipeline, &config.network_id, api_key).await?;

    utils::print_tag_summary(&config.pipeline, &config.network_id, &tags, start_time);
    let path = storage::save_tags(&tags, output_dir, &config.pipeline, &config.network_id)?;

    info!("✅ Wrote {} tags to {}", tags.len(), path.display());
    Ok(())
}
