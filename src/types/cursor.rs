//! Pagination cursor types

use alloy::primitives::U256;
use serde_json::Value;
use std::fmt::{Debug, Display};

/// Creation-timestamp cursor sent as the `$lastTimestamp` query variable.
///
/// `Int` schemas page with `u64`, `BigInt` schemas with `U256`; neither
/// ever passes through a float.
pub trait Cursor: Copy + Default + Ord + Display + Debug + Send + Sync + 'static {
    /// Parse a timestamp as delivered by the subgraph.
    fn parse_timestamp(raw: &str) -> Option<Self>;

    /// Encode as a GraphQL variable value.
    fn to_variable(self) -> Value;
}

impl Cursor for u64 {
    fn parse_timestamp(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }

    fn to_variable(self) -> Value {
        Value::from(self)
    }
}

impl Cursor for U256 {
    fn parse_timestamp(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        U256::from_str_radix(raw, 10).ok()
    }

    // BigInt variables travel as decimal strings
    fn to_variable(self) -> Value {
        Value::String(self.to_string())
    }
}
