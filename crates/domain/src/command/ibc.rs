//! IBC (`ics02-client`, `ics03-connection`, `ics04-channel`, `ics20-transfer`)
//! message parameters (§4.6).
//!
//! Handshake messages (`MsgConnectionOpenInit`, `MsgChannelOpenInit`, ...)
//! carry no identifier for the object they create — the chain assigns one
//! and reports it only in the post-execution event log, so `connectionId`
//! and `channelId` below are always recovered from there, never from the
//! message body.

use serde::{Deserialize, Serialize};

use crate::coin::Coin;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgCreateClientParams {
    pub client_id: String,
    pub client_state: serde_json::Value,
    pub consensus_state: serde_json::Value,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgUpdateClientParams {
    pub client_id: String,
    pub header: serde_json::Value,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgConnectionOpenInitParams {
    pub connection_id: String,
    pub client_id: String,
    pub counterparty: serde_json::Value,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgConnectionOpenTryParams {
    pub connection_id: String,
    pub client_id: String,
    pub counterparty: serde_json::Value,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgConnectionOpenAckParams {
    pub connection_id: String,
    pub counterparty_connection_id: String,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgConnectionOpenConfirmParams {
    pub connection_id: String,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgChannelOpenInitParams {
    pub port_id: String,
    pub channel_id: String,
    pub counterparty: serde_json::Value,
    pub ordering: String,
    pub connection_hops: Vec<String>,
    pub version: String,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgChannelOpenTryParams {
    pub port_id: String,
    pub channel_id: String,
    pub counterparty: serde_json::Value,
    pub ordering: String,
    pub connection_hops: Vec<String>,
    pub version: String,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgChannelOpenAckParams {
    pub port_id: String,
    pub channel_id: String,
    pub counterparty_channel_id: String,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgChannelOpenConfirmParams {
    pub port_id: String,
    pub channel_id: String,
    pub signer: String,
}

/// A packet's `timeout_height`, carried as decimal strings the way the
/// chain's own JSON encoding represents `uint64` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeoutHeight {
    pub revision_number: String,
    pub revision_height: String,
}

/// ICS-20 fungible token packet data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FungibleTokenPacketData {
    pub denom: String,
    pub amount: String,
    pub sender: String,
    pub receiver: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgTransferParams {
    pub source_port: String,
    pub source_channel: String,
    pub token: Coin,
    pub sender: String,
    pub receiver: String,
    pub timeout_height: TimeoutHeight,
    pub timeout_timestamp: String,
    pub packet_sequence: String,
    pub destination_port: String,
    pub destination_channel: String,
    pub channel_ordering: String,
    pub connection_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgRecvPacketParams {
    pub packet_sequence: String,
    pub source_port: String,
    pub source_channel: String,
    pub destination_port: String,
    pub destination_channel: String,
    pub data: FungibleTokenPacketData,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgAcknowledgementParams {
    pub packet_sequence: String,
    pub source_port: String,
    pub source_channel: String,
    pub destination_port: String,
    pub destination_channel: String,
    pub acknowledgement: String,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgTimeoutParams {
    pub packet_sequence: String,
    pub source_port: String,
    pub source_channel: String,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgTimeoutOnCloseParams {
    pub packet_sequence: String,
    pub source_port: String,
    pub source_channel: String,
    pub signer: String,
}
