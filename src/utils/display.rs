//! Display and printing utilities

use std::collections::BTreeMap;
use std::time::Instant;
use tracing::info;
use crate::types::ContractTag;

pub fn print_tag_summary(
    pipeline: &str,
    network_id: &str,
    tags: &[ContractTag],
    start_time: Instant,
) {
    info!("\n📊 Tag Harvest Summary");
    info!("   Pipeline: {}", pipeline);
    info!("   Network: {}", network_id);
    info!("   Tags collected: {}", tags.len());
    info!("   Elapsed: {:.1}s", start_time.elapsed().as_secs_f64());

    let mut by_project: BTreeMap<&str, usize> = BTreeMap::new();
    for tag in tags {
        *by_project.entry(tag.project_name.as_str()).or_insert(0) += 1;
    }
    for (project, count) in by_project {
        info!("     {}: {}", project, count);
    }

    for tag in tags.iter().take(3) {
        info!("   e.g. {} → {}", tag.contract_address, tag.public_name_tag);
    }
}
