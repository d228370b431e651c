//! Minimal hand-written protobuf definitions for the Crypto.org chain's
//! `x/nft` module (vendored from `irismod/modules/nft`). This module is
//! chain-specific and not part of `cosmos-sdk-proto`, so unlike the
//! standard Cosmos SDK / IBC messages decoded in [`crate::tx`], its wire
//! schema is declared here directly.

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct MsgIssueDenom {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub schema: String,
    #[prost(string, tag = "4")]
    pub sender: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct MsgMintNft {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub denom_id: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub uri: String,
    #[prost(string, tag = "5")]
    pub data: String,
    #[prost(string, tag = "6")]
    pub sender: String,
    #[prost(string, tag = "7")]
    pub recipient: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct MsgEditNft {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub denom_id: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub uri: String,
    #[prost(string, tag = "5")]
    pub data: String,
    #[prost(string, tag = "6")]
    pub sender: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct MsgTransferNft {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub denom_id: String,
    #[prost(string, tag = "3")]
    pub sender: String,
    #[prost(string, tag = "4")]
    pub recipient: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct MsgBurnNft {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub denom_id: String,
    #[prost(string, tag = "3")]
    pub sender: String,
}
