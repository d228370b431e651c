//! `x/slashing` message parameters (§4.5.4).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgUnjailParams {
    pub validator_addr: String,
}
