//! The common header carried by every non-secondary, non-genesis command.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgCommonHeader {
    pub block_height: i64,
    pub tx_hash: String,
    pub tx_success: bool,
    pub msg_index: usize,
}
