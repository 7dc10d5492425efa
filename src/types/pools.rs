//! Pool-related types and structures

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PoolToken {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

/// Schema-independent view of one subgraph pool record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub id: String,
    pub created_timestamp: String,
    pub name: Option<String>,
    pub tokens: Vec<PoolToken>,
}

impl Pool {
    /// Display name when the record carries a non-blank one.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Messari standardized `liquidityPools` entity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityPoolRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "timestamp_text")]
    pub created_timestamp: String,
    #[serde(default)]
    pub input_tokens: Vec<PoolToken>,
}

impl From<LiquidityPoolRecord> for Pool {
    fn from(record: LiquidityPoolRecord) -> Self {
        Pool {
            id: record.id,
            created_timestamp: record.created_timestamp,
            name: record.name,
            tokens: record.input_tokens,
        }
    }
}

/// Uniswap v2 style `pairs` entity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRecord {
    pub id: String,
    #[serde(deserialize_with = "timestamp_text")]
    pub created_at_timestamp: String,
    pub token0: PoolToken,
    pub token1: PoolToken,
}

impl From<PairRecord> for Pool {
    fn from(record: PairRecord) -> Self {
        Pool {
            id: record.id,
            created_timestamp: record.created_at_timestamp,
            name: None,
            tokens: vec![record.token0, record.token1],
        }
    }
}

/// Multi-coin `pools` entity with an integer creation timestamp.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPoolRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "timestamp_text")]
    pub creation_timestamp: String,
    #[serde(default)]
    pub coins: Vec<PoolToken>,
}

impl From<CoinPoolRecord> for Pool {
    fn from(record: CoinPoolRecord) -> Self {
        Pool {
            id: record.id,
            created_timestamp: record.creation_timestamp,
            name: record.name,
            tokens: record.coins,
        }
    }
}

// Subgraphs send `BigInt` as a decimal string and `Int` as a JSON number.
fn timestamp_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(text) => text,
        RawTimestamp::Number(number) => number.to_string(),
    })
}
