//! Custom error types for the harvester

use thiserror::Error;

/// Failure of a single page fetch or of the pagination protocol.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error! status: {status}")]
    Transport {
        status: u16,
    },

    #[error("GraphQL query failed: {}", .messages.join("; "))]
    Query {
        messages: Vec<String>,
    },

    #[error("No data found for '{field}': {detail}")]
    Shape {
        field: String,
        detail: String,
    },

    #[error("Invalid pagination cursor: {reason}")]
    Cursor {
        reason: String,
    },

    #[error("Unexpected error: {context}")]
    Unexpected {
        context: String,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Error, Debug)]
pub enum TagError {
    #[error("Unsupported network: {network_id} (supported: {})", .supported.join(", "))]
    UnsupportedNetwork {
        network_id: String,
        supported: Vec<String>,
    },

    #[error("Failed to fetch {project} pools on network {network_id}: {source}")]
    FetchFailed {
        project: String,
        network_id: String,
        #[source]
        source: FetchError,
    },
}

pub type FetchResult<T> = Result<T, FetchError>;
pub type TagResult<T> = Result<T, TagError>;
