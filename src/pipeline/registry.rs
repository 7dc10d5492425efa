//! Lookup of built-in pipelines by name

use anyhow::Result;
use crate::{
    pipeline::{return_tags, CURVE_GNOSIS, UBESWAP, UNISWAP_V3},
    types::ContractTag,
};

pub const PIPELINE_NAMES: &[&str] = &[UNISWAP_V3.slug, UBESWAP.slug, CURVE_GNOSIS.slug];

/// Run the built-in pipeline called `name`.
pub async fn return_tags_for(
    name: &str,
    network_id: &str,
    credential: &str,
) -> Result<Vec<ContractTag>> {
    let tags = match name {
        n if n == UNISWAP_V3.slug => return_tags(&UNISWAP_V3, network_id, credential).await?,
        n if n == UBESWAP.slug => return_tags(&UBESWAP, network_id, credential).await?,
        n if n == CURVE_GNOSIS.slug => return_tags(&CURVE_GNOSIS, network_id, credential).await?,
        other => {
            return Err(anyhow::anyhow!(
                "Unknown pipeline '{}' (available: {})",
                other,
                PIPELINE_NAMES.join(", ")
            ));
        }
    };
    Ok(tags)
}
