//! Pipeline definitions: one per subgraph schema

use alloy::primitives::U256;
use std::marker::PhantomData;
use crate::{
    tags::{pool_to_tag, TagContext, TransformFn},
    types::{
        CoinPoolRecord, LiquidityPoolRecord, NetworkEndpoint, PairRecord,
        CURVE_GNOSIS_ENDPOINTS, UBESWAP_ENDPOINTS, UNISWAP_V3_ENDPOINTS,
        find_endpoint,
    },
};

/// Everything that varies between subgraph schemas.
///
/// `C` is the cursor width the schema's timestamp field needs and `R` the raw
/// record the response field deserializes into.
pub struct PipelineDefinition<C, R> {
    pub slug: &'static str,
    pub project_name: &'static str,
    pub website_template: &'static str,
    pub endpoints: &'static [NetworkEndpoint],
    pub query: &'static str,
    pub response_field: &'static str,
    pub transform: TransformFn,
    marker: PhantomData<fn() -> (C, R)>,
}

impl<C, R> PipelineDefinition<C, R> {
    pub const fn new(
        slug: &'static str,
        project_name: &'static str,
        website_template: &'static str,
        endpoints: &'static [NetworkEndpoint],
        query: &'static str,
        response_field: &'static str,
    ) -> Self {
        Self {
            slug,
            project_name,
            website_template,
            endpoints,
            query,
            response_field,
            transform: pool_to_tag,
            marker: PhantomData,
        }
    }

    pub const fn with_transform(mut self, transform: TransformFn) -> Self {
        self.transform = transform;
        self
    }

    pub fn endpoint(&self, network_id: &str) -> Option<&'static NetworkEndpoint> {
        find_endpoint(self.endpoints, network_id)
    }

    pub fn supported_networks(&self) -> Vec<String> {
        self.endpoints
            .iter()
            .map(|endpoint| endpoint.network_id.to_string())
            .collect()
    }

    pub fn tag_context<'a>(&'a self, network_id: &'a str) -> TagContext<'a> {
        TagContext {
            network_id,
            project_name: self.project_name,
            website_template: self.website_template,
        }
    }
}

const UNISWAP_V3_QUERY: &str = r#"
query GetPools($lastTimestamp: BigInt) {
  liquidityPools(
    first: 1000
    orderBy: createdTimestamp
    orderDirection: asc
    where: { createdTimestamp_gt: $lastTimestamp }
  ) {
    id
    name
    createdTimestamp
    inputTokens {
      id
      name
      symbol
    }
  }
}
"#;

const UBESWAP_QUERY: &str = r#"
query GetPairs($lastTimestamp: BigInt) {
  pairs(
    first: 1000
    orderBy: createdAtTimestamp
    orderDirection: asc
    where: { createdAtTimestamp_gt: $lastTimestamp }
  ) {
    id
    createdAtTimestamp
    token0 {
      id
      name
      symbol
    }
    token1 {
      id
      name
      symbol
    }
  }
}
"#;

const CURVE_GNOSIS_QUERY: &str = r#"
query GetPools($lastTimestamp: Int) {
  pools(
    first: 1000
    orderBy: creationTimestamp
    orderDirection: asc
    where: { creationTimestamp_gt: $lastTimestamp }
  ) {
    id
    name
    creationTimestamp
    coins {
      id
      name
      symbol
    }
  }
}
"#;

pub const UNISWAP_V3: PipelineDefinition<U256, LiquidityPoolRecord> = PipelineDefinition::new(
    "uniswap-v3",
    "Uniswap v3",
    "https://info.uniswap.org/#/pools/{address}",
    UNISWAP_V3_ENDPOINTS,
    UNISWAP_V3_QUERY,
    "liquidityPools",
);

pub const UBESWAP: PipelineDefinition<U256, PairRecord> = PipelineDefinition::new(
    "ubeswap",
    "Ubeswap",
    "https://info.ubeswap.org/pair/{address}",
    UBESWAP_ENDPOINTS,
    UBESWAP_QUERY,
    "pairs",
);

pub const CURVE_GNOSIS: PipelineDefinition<u64, CoinPoolRecord> = PipelineDefinition::new(
    "curve-gnosis",
    "Curve",
    "https://curve.fi/#/xdai/pools/{address}/deposit",
    CURVE_GNOSIS_ENDPOINTS,
    CURVE_GNOSIS_QUERY,
    "pools",
);
