//! `x/bank` message parameters (§4.5.2).

use serde::{Deserialize, Serialize};

use crate::coin::Coins;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSendParams {
    pub from_address: String,
    pub to_address: String,
    pub amount: Coins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgMultiSendInput {
    pub address: String,
    pub coins: Coins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgMultiSendOutput {
    pub address: String,
    pub coins: Coins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgMultiSendParams {
    pub inputs: Vec<MsgMultiSendInput>,
    pub outputs: Vec<MsgMultiSendOutput>,
}
