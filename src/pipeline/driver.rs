//! Pagination driver: walks a subgraph by creation timestamp

use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info};
use crate::{
    config::{CONFIG, PAGE_SIZE},
    errors::{FetchError, FetchResult, TagError, TagResult},
    network::{PageSource, SubgraphClient},
    pipeline::PipelineDefinition,
    types::{ContractTag, Cursor, NetworkEndpoint, Pool},
};

/// Fetch every pool for `network_id` and return one tag per pool.
///
/// Builds a gateway client with `credential` substituted into the network's
/// endpoint template. All-or-nothing: any failure discards collected tags.
pub async fn return_tags<C, R>(
    definition: &PipelineDefinition<C, R>,
    network_id: &str,
    credential: &str,
) -> TagResult<Vec<ContractTag>>
where
    C: Cursor,
    R: DeserializeOwned + Into<Pool> + Send + 'static,
{
    let endpoint = ensure_supported(definition, network_id)?;

    let client = SubgraphClient::new(
        endpoint.url(credential),
        Duration::from_secs(CONFIG.request_timeout_secs),
    )
    .map_err(|source| fetch_failed(definition, network_id, source))?;

    collect_all_tags(definition, &client, network_id).await
}

/// Page through `source` until a short page, transforming records in order.
pub async fn collect_all_tags<C, R, S>(
    definition: &PipelineDefinition<C, R>,
    source: &S,
    network_id: &str,
) -> TagResult<Vec<ContractTag>>
where
    C: Cursor,
    R: Into<Pool> + Send,
    S: PageSource<C, R> + ?Sized,
{
    ensure_supported(definition, network_id)?;

    info!(
        project = definition.project_name,
        network = network_id,
        "Collecting pool tags"
    );

    let tags = paginate(definition, source, network_id)
        .await
        .map_err(|source| fetch_failed(definition, network_id, source))?;

    info!(
        project = definition.project_name,
        network = network_id,
        tags = tags.len(),
        "✅ Collected pool tags"
    );
    Ok(tags)
}

fn ensure_supported<C, R>(
    definition: &PipelineDefinition<C, R>,
    network_id: &str,
) -> TagResult<&'static NetworkEndpoint> {
    definition
        .endpoint(network_id)
        .ok_or_else(|| TagError::UnsupportedNetwork {
            network_id: network_id.to_string(),
            supported: definition.supported_networks(),
        })
}

fn fetch_failed<C, R>(
    definition: &PipelineDefinition<C, R>,
    network_id: &str,
    source: FetchError,
) -> TagError {
    match &source {
        FetchError::Unexpected { context, source: cause } => error!(
            "❌ {} fetch failed on network {}: {}: {:#}",
            definition.project_name, network_id, context, cause
        ),
        known => error!(
            "❌ {} fetch failed on network {}: {}",
            definition.project_name, network_id, known
        ),
    }
    TagError::FetchFailed {
        project: definition.project_name.to_string(),
        network_id: network_id.to_string(),
        source,
    }
}

async fn paginate<C, R, S>(
    definition: &PipelineDefinition<C, R>,
    source: &S,
    network_id: &str,
) -> FetchResult<Vec<ContractTag>>
where
    C: Cursor,
    R: Into<Pool> + Send,
    S: PageSource<C, R> + ?Sized,
{
    let ctx = definition.tag_context(network_id);
    let mut cursor = C::default();
    let mut tags = Vec::new();
    let mut page_number = 0usize;

    loop {
        page_number += 1;
        let page = source
            .fetch_page(definition.query, definition.response_field, cursor)
            .await?;
        let page_len = page.len();

        debug!(page = page_number, cursor = %cursor, records = page_len, "Fetched page");

        let mut last_timestamp = None;
        for record in page {
            let pool: Pool = record.into();
            tags.push((definition.transform)(&pool, &ctx));
            last_timestamp = Some(pool.created_timestamp);
        }

        if page_len < PAGE_SIZE {
            break;
        }

        cursor = next_cursor(cursor, last_timestamp.as_deref().unwrap_or_default())?;
    }

    Ok(tags)
}

fn next_cursor<C: Cursor>(current: C, raw: &str) -> FetchResult<C> {
    let next = C::parse_timestamp(raw).ok_or_else(|| FetchError::Cursor {
        reason: format!("last record timestamp '{}' is not an integer", raw),
    })?;

    if next <= current {
        return Err(FetchError::Cursor {
            reason: format!(
                "cursor did not advance: last record timestamp {} is not after {}",
                next, current
            ),
        });
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::UNISWAP_V3;
    use crate::types::{LiquidityPoolRecord, PoolToken};
    use alloy::primitives::U256;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio_test::{assert_err, assert_ok};

    /// Serves canned pages and records every cursor it was asked for.
    struct ScriptedSource {
        pages: Mutex<VecDeque<FetchResult<Vec<LiquidityPoolRecord>>>>,
        cursors: Mutex<Vec<U256>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<FetchResult<Vec<LiquidityPoolRecord>>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                cursors: Mutex::new(Vec::new()),
            }
        }

        fn cursors(&self) -> Vec<U256> {
            self.cursors.lock().unwrap().clone()
        }

        fn calls(&self) -> usize {
            self.cursors.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PageSource<U256, LiquidityPoolRecord> for ScriptedSource {
        async fn fetch_page(
            &self,
            _query: &str,
            _field: &str,
            cursor: U256,
        ) -> FetchResult<Vec<LiquidityPoolRecord>> {
            self.cursors.lock().unwrap().push(cursor);
            self.pages.lock().unwrap().pop_front().unwrap_or(Ok(Vec::new()))
        }
    }

    fn record(timestamp: u64) -> LiquidityPoolRecord {
        LiquidityPoolRecord {
            id: format!("0x{:x}", timestamp),
            name: None,
            created_timestamp: timestamp.to_string(),
            input_tokens: vec![
                PoolToken { id: "0xa".into(), name: "Wrapped Ether".into(), symbol: "WETH".into() },
                PoolToken { id: "0xb".into(), name: "USD Coin".into(), symbol: "USDC".into() },
            ],
        }
    }

    fn page(first_timestamp: u64, len: usize) -> Vec<LiquidityPoolRecord> {
        (0..len as u64).map(|i| record(first_timestamp + i)).collect()
    }

    #[tokio::test]
    async fn unsupported_network_never_fetches() {
        let source = ScriptedSource::new(vec![Ok(page(1, 3))]);

        let err = assert_err!(collect_all_tags(&UNISWAP_V3, &source, "1").await);

        assert!(matches!(err, TagError::UnsupportedNetwork { ref network_id, .. } if network_id == "1"));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn stops_after_short_page() {
        let source = ScriptedSource::new(vec![
            Ok(page(1, PAGE_SIZE)),
            Ok(page(1001, PAGE_SIZE)),
            Ok(page(2001, 345)),
        ]);

        let tags = assert_ok!(collect_all_tags(&UNISWAP_V3, &source, "42161").await);

        assert_eq!(source.calls(), 3);
        assert_eq!(tags.len(), 2 * PAGE_SIZE + 345);
        assert_eq!(tags[0].contract_address, "eip155:42161:0x1");
        assert_eq!(tags[PAGE_SIZE].contract_address, "eip155:42161:0x3e9");
        assert_eq!(tags.last().unwrap().contract_address, "eip155:42161:0x929");
    }

    #[tokio::test]
    async fn cursor_follows_last_record_of_previous_page() {
        let source = ScriptedSource::new(vec![
            Ok(page(10, PAGE_SIZE)),
            Ok(page(5000, PAGE_SIZE)),
            Ok(page(9000, 1)),
        ]);

        assert_ok!(collect_all_tags(&UNISWAP_V3, &source, "137").await);

        assert_eq!(
            source.cursors(),
            vec![U256::ZERO, U256::from(1009u64), U256::from(5999u64)]
        );
    }

    #[tokio::test]
    async fn exact_multiple_ends_on_empty_page() {
        let source = ScriptedSource::new(vec![Ok(page(1, PAGE_SIZE)), Ok(Vec::new())]);

        let tags = assert_ok!(collect_all_tags(&UNISWAP_V3, &source, "10").await);

        assert_eq!(source.calls(), 2);
        assert_eq!(tags.len(), PAGE_SIZE);
    }

    #[tokio::test]
    async fn unparsable_cursor_is_fatal() {
        let mut full = page(1, PAGE_SIZE);
        full.last_mut().unwrap().created_timestamp = "yesterday".to_string();
        let source = ScriptedSource::new(vec![Ok(full), Ok(page(2000, 5))]);

        let err = assert_err!(collect_all_tags(&UNISWAP_V3, &source, "42161").await);

        assert!(matches!(
            err,
            TagError::FetchFailed { source: FetchError::Cursor { .. }, .. }
        ));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn non_advancing_cursor_is_fatal() {
        let mut first = page(1, PAGE_SIZE - 1);
        first.push(record(7));
        let stuck = (0..PAGE_SIZE).map(|_| record(7)).collect();
        let source = ScriptedSource::new(vec![Ok(first), Ok(stuck)]);

        let err = assert_err!(collect_all_tags(&UNISWAP_V3, &source, "42161").await);

        match err {
            TagError::FetchFailed { source: FetchError::Cursor { reason }, .. } => {
                assert!(reason.contains("did not advance"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn query_error_discards_partial_output() {
        let source = ScriptedSource::new(vec![
            Ok(page(1, PAGE_SIZE)),
            Err(FetchError::Query { messages: vec!["boom".to_string()] }),
        ]);

        let err = assert_err!(collect_all_tags(&UNISWAP_V3, &source, "42220").await);

        let message = err.to_string();
        assert!(message.contains("Failed to fetch"), "{message}");
        assert!(message.contains("boom"), "{message}");
    }

    #[test]
    fn next_cursor_requires_strict_progress() {
        assert_eq!(next_cursor(5u64, "6").unwrap(), 6);
        assert!(next_cursor(5u64, "5").is_err());
        assert!(next_cursor(5u64, "4").is_err());
        assert!(next_cursor(5u64, "").is_err());
    }
}
