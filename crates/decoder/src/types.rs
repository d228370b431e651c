//! The Tendermint-RPC-shaped inputs the parser takes (§5).
//!
//! These mirror what a `/block` and `/block_results` RPC call returns:
//! heights and timestamps as decimal/RFC-3339 strings, transactions as
//! base64, and per-message logs as a JSON-encoded string (only present
//! when the transaction succeeded).

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct BlockHeader {
    #[serde(deserialize_with = "deserialize_string_i64")]
    pub height: i64,
    pub time: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockData {
    pub txs: Vec<String>,
}

/// A block as returned by the node, immutable input to the parser.
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub data: BlockData,
}

impl Block {
    pub fn height(&self) -> i64 {
        self.header.height
    }
}

/// One transaction's execution outcome (§5 `TxResult`).
#[derive(Debug, Clone, Deserialize)]
pub struct TxResult {
    pub code: u32,
    /// JSON-encoded `[{msg_index, events}]` on success; a plain error
    /// string (or absent) on failure. The parser must not dereference
    /// this on failed transactions.
    #[serde(default)]
    pub log: String,
}

impl TxResult {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// The paired execution results for a [`Block`]'s transactions (§5
/// `BlockResults`): `|txs_results| == |block.data.txs|`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockResults {
    #[serde(deserialize_with = "deserialize_string_i64")]
    pub height: i64,
    pub txs_results: Vec<TxResult>,
}

fn deserialize_string_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<i64>().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_results_height_parses_from_string() {
        let raw = r#"{"height": "100", "txs_results": [{"code": 0, "log": "[]"}]}"#;
        let results: BlockResults = serde_json::from_str(raw).unwrap();
        assert_eq!(results.height, 100);
        assert!(results.txs_results[0].is_success());
    }

    #[test]
    fn failed_tx_result_has_no_usable_log() {
        let raw = r#"{"code": 5, "log": "insufficient funds"}"#;
        let result: TxResult = serde_json::from_str(raw).unwrap();
        assert!(!result.is_success());
    }
}
