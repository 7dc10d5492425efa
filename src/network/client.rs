//! Subgraph GraphQL client: one POST per page

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};
use crate::{
    errors::{FetchError, FetchResult},
    types::{Cursor, GraphQlRequest, GraphQlResponse, PageVariables},
};

/// Anything that can serve one page of raw records for a cursor.
#[async_trait]
pub trait PageSource<C: Cursor, R>: Send + Sync {
    async fn fetch_page(&self, query: &str, field: &str, cursor: C) -> FetchResult<Vec<R>>;
}

#[derive(Debug, Clone)]
pub struct SubgraphClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SubgraphClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                warn!("⚠️ Failed to initialize HTTP client: {}", e);
                FetchError::Unexpected {
                    context: "Failed to build HTTP client".to_string(),
                    source: e.into(),
                }
            })?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Run `query` with `$lastTimestamp` bound and return the array under `field`.
    pub async fn post_query<R: DeserializeOwned>(
        &self,
        query: &str,
        field: &str,
        last_timestamp: Value,
    ) -> FetchResult<Vec<R>> {
        debug!(field, last_timestamp = %last_timestamp, "Posting subgraph query");

        let request = GraphQlRequest {
            query,
            variables: PageVariables { last_timestamp },
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| FetchError::Unexpected {
                context: "HTTP request failed".to_string(),
                source: e.without_url().into(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("⚠️ Subgraph returned error status {}: {}", status, body);
            return Err(FetchError::Transport {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Unexpected {
            context: "Failed to read response body".to_string(),
            source: e.without_url().into(),
        })?;

        decode_page(field, &body)
    }
}

#[async_trait]
impl<C, R> PageSource<C, R> for SubgraphClient
where
    C: Cursor,
    R: DeserializeOwned + Send + 'static,
{
    async fn fetch_page(&self, query: &str, field: &str, cursor: C) -> FetchResult<Vec<R>> {
        self.post_query(query, field, cursor.to_variable()).await
    }
}

/// Validate a GraphQL envelope and pull the record array out of `data.<field>`.
pub fn decode_page<R: DeserializeOwned>(field: &str, body: &[u8]) -> FetchResult<Vec<R>> {
    let envelope: GraphQlResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::Shape {
            field: field.to_string(),
            detail: format!("malformed response body: {}", e),
        })?;

    if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
        for err in &errors {
            error!("GraphQL error: {}", err.message);
        }
        return Err(FetchError::Query {
            messages: errors.into_iter().map(|err| err.message).collect(),
        });
    }

    let records = envelope
        .data
        .and_then(|mut data| data.remove(field))
        .filter(|value| !value.is_null())
        .ok_or_else(|| FetchError::Shape {
            field: field.to_string(),
            detail: "no data found".to_string(),
        })?;

    serde_json::from_value(records).map_err(|e| FetchError::Shape {
        field: field.to_string(),
        detail: format!("unexpected record shape: {}", e),
    })
}
