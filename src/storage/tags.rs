//! Contract tag storage

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::types::ContractTag;

pub fn tags_file_path(output_dir: &Path, pipeline: &str, network_id: &str) -> PathBuf {
    output_dir.join("tags").join(format!(
        "{}_{}_{}.json",
        pipeline,
        network_id,
        Utc::now().format("%Y-%m-%d")
    ))
}

pub fn save_tags(
    tags: &[ContractTag],
    output_dir: &Path,
    pipeline: &str,
    network_id: &str,
) -> Result<PathBuf> {
    let path = tags_file_path(output_dir, pipeline, network_id);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(&path, serde_json::to_string_pretty(tags)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        path = %path.display(),
        tags = tags.len(),
        pipeline,
        network = network_id,
        "Saved contract tags"
    );

    Ok(path)
}
