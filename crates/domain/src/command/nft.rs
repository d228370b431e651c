//! `x/nft` (Crypto.org NFT module) message parameters (§4.5.8).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgIssueDenomParams {
    pub denom_id: String,
    pub denom_name: String,
    pub schema: String,
    pub sender: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgMintNftParams {
    pub denom_id: String,
    pub token_id: String,
    pub token_name: String,
    pub uri: String,
    pub data: String,
    pub sender: String,
    pub recipient: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgTransferNftParams {
    pub denom_id: String,
    pub token_id: String,
    pub sender: String,
    pub recipient: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgEditNftParams {
    pub denom_id: String,
    pub token_id: String,
    pub token_name: String,
    pub uri: String,
    pub data: String,
    pub sender: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgBurnNftParams {
    pub denom_id: String,
    pub token_id: String,
    pub sender: String,
}
