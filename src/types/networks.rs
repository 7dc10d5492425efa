//! Network identifiers and subgraph endpoint tables

use crate::config::API_KEY_PLACEHOLDER;

/// One supported chain and the gateway URL serving its subgraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkEndpoint {
    pub network_id: &'static str,
    pub url_template: &'static str,
}

impl NetworkEndpoint {
    pub const fn new(network_id: &'static str, url_template: &'static str) -> Self {
        Self { network_id, url_template }
    }

    pub fn url(&self, credential: &str) -> String {
        self.url_template.replace(API_KEY_PLACEHOLDER, credential)
    }
}

pub fn find_endpoint<'a>(
    endpoints: &'a [NetworkEndpoint],
    network_id: &str,
) -> Option<&'a NetworkEndpoint> {
    endpoints.iter().find(|endpoint| endpoint.network_id == network_id)
}

// Chain ids
pub const ARBITRUM_ONE: &str = "42161";
pub const POLYGON: &str = "137";
pub const OPTIMISM: &str = "10";
pub const CELO: &str = "42220";
pub const GNOSIS: &str = "100";

// Messari standardized Uniswap v3 subgraphs
pub const UNISWAP_V3_ENDPOINTS: &[NetworkEndpoint] = &[
    NetworkEndpoint::new(
        ARBITRUM_ONE,
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/name/messari/uniswap-v3-arbitrum",
    ),
    NetworkEndpoint::new(
        POLYGON,
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/name/messari/uniswap-v3-polygon",
    ),
    NetworkEndpoint::new(
        OPTIMISM,
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/name/messari/uniswap-v3-optimism",
    ),
    NetworkEndpoint::new(
        CELO,
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/name/messari/uniswap-v3-celo",
    ),
];

pub const UBESWAP_ENDPOINTS: &[NetworkEndpoint] = &[NetworkEndpoint::new(
    CELO,
    "https://gateway.thegraph.com/api/[api-key]/subgraphs/name/ubeswap/ubeswap",
)];

pub const CURVE_GNOSIS_ENDPOINTS: &[NetworkEndpoint] = &[NetworkEndpoint::new(
    GNOSIS,
    "https://gateway.thegraph.com/api/[api-key]/subgraphs/name/curvefi/curve-gnosis",
)];
