//! Wire-format transaction decoding (§4.1, §6).
//!
//! Input is the base64-of-protobuf bytes of a Cosmos-SDK `Tx`. Decoding
//! stops at `TxBody.messages`: each message's `Any` envelope is translated
//! into a generic, string-keyed JSON body keyed by the proto field names
//! jsonpb would produce, with the type URL carried alongside rather than
//! embedded. The per-message parsers own everything past that point —
//! this crate never interprets message semantics, so adding a message type
//! to the dispatcher never requires a decoder change (it does require
//! adding a translation arm here the first time the chain defines it).

use cosmos_sdk_proto::cosmos::bank::v1beta1 as bank;
use cosmos_sdk_proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use cosmos_sdk_proto::cosmos::distribution::v1beta1 as distribution;
use cosmos_sdk_proto::cosmos::gov::v1beta1 as gov;
use cosmos_sdk_proto::cosmos::slashing::v1beta1 as slashing;
use cosmos_sdk_proto::cosmos::staking::v1beta1 as staking;
use cosmos_sdk_proto::cosmos::tx::v1beta1::{TxBody, TxRaw};
use cosmos_sdk_proto::ibc::applications::transfer::v1 as ibc_transfer;
use cosmos_sdk_proto::ibc::core::channel::v1 as ibc_channel;
use cosmos_sdk_proto::ibc::core::client::v1 as ibc_client;
use cosmos_sdk_proto::ibc::core::connection::v1 as ibc_connection;
use prost::Message as _;
use prost_types::Any;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use crate::error::DecodeError;
use crate::nft_proto;

/// One decoded message: its type URL and a generic JSON body with field
/// names matching the chain's own JSON (jsonpb) rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub type_url: String,
    pub body: Value,
}

/// A decoded transaction: its hash and ordered messages (§5 `Transaction`).
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub hash: String,
    pub messages: Vec<Message>,
}

/// Decodes `wireBytes` into a [`Transaction`]. The hash is the
/// uppercase-hex SHA-256 of the raw bytes, computed over the wire envelope
/// before any protobuf parsing (§4.2).
pub fn decode(wire_bytes: &[u8]) -> Result<Transaction, DecodeError> {
    let hash = hex::encode_upper(Sha256::digest(wire_bytes));

    let tx_raw = TxRaw::decode(wire_bytes)?;
    let body = TxBody::decode(tx_raw.body_bytes.as_slice())?;

    let messages = body
        .messages
        .iter()
        .map(translate_any)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Transaction { hash, messages })
}

fn coin_json(coin: &ProtoCoin) -> Value {
    json!({"denom": coin.denom, "amount": coin.amount})
}

fn coins_json(coins: &[ProtoCoin]) -> Value {
    Value::Array(coins.iter().map(coin_json).collect())
}

fn height_json(height: &Option<ibc_client::Height>) -> Value {
    match height {
        Some(h) => json!({
            "revisionNumber": h.revision_number.to_string(),
            "revisionHeight": h.revision_height.to_string(),
        }),
        None => json!({"revisionNumber": "0", "revisionHeight": "0"}),
    }
}

/// Translates one `Any`-wrapped message into `{type_url, body}`. Unknown
/// type URLs decode to an empty body — the top-level dispatcher skips
/// them, logging at debug level (§4.2).
fn translate_any(any: &Any) -> Result<Message, DecodeError> {
    let type_url = any.type_url.clone();
    let bytes = any.value.as_slice();

    let body = match type_url.as_str() {
        "/cosmos.bank.v1beta1.MsgSend" => {
            let msg = bank::MsgSend::decode(bytes)?;
            json!({
                "fromAddress": msg.from_address,
                "toAddress": msg.to_address,
                "amount": coins_json(&msg.amount),
            })
        }
        "/cosmos.bank.v1beta1.MsgMultiSend" => {
            let msg = bank::MsgMultiSend::decode(bytes)?;
            json!({
                "inputs": msg.inputs.iter().map(|i| json!({
                    "address": i.address,
                    "coins": coins_json(&i.coins),
                })).collect::<Vec<_>>(),
                "outputs": msg.outputs.iter().map(|o| json!({
                    "address": o.address,
                    "coins": coins_json(&o.coins),
                })).collect::<Vec<_>>(),
            })
        }

        "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress" => {
            let msg = distribution::MsgSetWithdrawAddress::decode(bytes)?;
            json!({
                "delegatorAddress": msg.delegator_address,
                "withdrawAddress": msg.withdraw_address,
            })
        }
        "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward" => {
            let msg = distribution::MsgWithdrawDelegatorReward::decode(bytes)?;
            json!({
                "delegatorAddress": msg.delegator_address,
                "validatorAddress": msg.validator_address,
            })
        }
        "/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission" => {
            let msg = distribution::MsgWithdrawValidatorCommission::decode(bytes)?;
            json!({"validatorAddress": msg.validator_address})
        }
        "/cosmos.distribution.v1beta1.MsgFundCommunityPool" => {
            let msg = distribution::MsgFundCommunityPool::decode(bytes)?;
            json!({
                "depositor": msg.depositor,
                "amount": coins_json(&msg.amount),
            })
        }

        "/cosmos.gov.v1beta1.MsgSubmitProposal" => {
            let msg = gov::MsgSubmitProposal::decode(bytes)?;
            let content = match &msg.content {
                Some(content_any) => translate_content(content_any)?,
                None => return Err(DecodeError::MissingField("content")),
            };
            json!({
                "content": content,
                "initialDeposit": coins_json(&msg.initial_deposit),
                "proposer": msg.proposer,
            })
        }
        "/cosmos.gov.v1beta1.MsgVote" => {
            let msg = gov::MsgVote::decode(bytes)?;
            json!({
                "proposalId": msg.proposal_id.to_string(),
                "voter": msg.voter,
                "option": msg.option,
            })
        }
        "/cosmos.gov.v1beta1.MsgDeposit" => {
            let msg = gov::MsgDeposit::decode(bytes)?;
            json!({
                "proposalId": msg.proposal_id.to_string(),
                "depositor": msg.depositor,
                "amount": coins_json(&msg.amount),
            })
        }

        "/cosmos.staking.v1beta1.MsgDelegate" => {
            let msg = staking::MsgDelegate::decode(bytes)?;
            json!({
                "delegatorAddress": msg.delegator_address,
                "validatorAddress": msg.validator_address,
                "amount": msg.amount.as_ref().map(coin_json),
            })
        }
        "/cosmos.staking.v1beta1.MsgUndelegate" => {
            let msg = staking::MsgUndelegate::decode(bytes)?;
            json!({
                "delegatorAddress": msg.delegator_address,
                "validatorAddress": msg.validator_address,
                "amount": msg.amount.as_ref().map(coin_json),
            })
        }
        "/cosmos.staking.v1beta1.MsgBeginRedelegate" => {
            let msg = staking::MsgBeginRedelegate::decode(bytes)?;
            json!({
                "delegatorAddress": msg.delegator_address,
                "validatorSrcAddress": msg.validator_src_address,
                "validatorDstAddress": msg.validator_dst_address,
                "amount": msg.amount.as_ref().map(coin_json),
            })
        }
        "/cosmos.staking.v1beta1.MsgCreateValidator" => {
            let msg = staking::MsgCreateValidator::decode(bytes)?;
            let description = msg.description.unwrap_or_default();
            let commission = msg.commission.unwrap_or_default();
            json!({
                "description": {
                    "moniker": description.moniker,
                    "identity": description.identity,
                    "website": description.website,
                    "securityContact": description.security_contact,
                    "details": description.details,
                },
                "commission": {
                    "rate": commission.rate,
                    "maxRate": commission.max_rate,
                    "maxChangeRate": commission.max_change_rate,
                },
                "minSelfDelegation": msg.min_self_delegation,
                "delegatorAddress": msg.delegator_address,
                "validatorAddress": msg.validator_address,
                "pubkey": msg.pubkey.as_ref().map(|a| hex::encode(&a.value)),
                "amount": msg.value.as_ref().map(coin_json),
            })
        }
        "/cosmos.staking.v1beta1.MsgEditValidator" => {
            let msg = staking::MsgEditValidator::decode(bytes)?;
            let description = msg.description.unwrap_or_default();
            json!({
                "description": {
                    "moniker": description.moniker,
                    "identity": description.identity,
                    "website": description.website,
                    "securityContact": description.security_contact,
                    "details": description.details,
                },
                "validatorAddress": msg.validator_address,
                "commissionRate": msg.commission_rate,
                "minSelfDelegation": msg.min_self_delegation,
            })
        }

        "/cosmos.slashing.v1beta1.MsgUnjail" => {
            let msg = slashing::MsgUnjail::decode(bytes)?;
            json!({"validatorAddr": msg.validator_addr})
        }

        "/chainmain.nft.v1.MsgIssueDenom" => {
            let msg = nft_proto::MsgIssueDenom::decode(bytes)?;
            json!({
                "id": msg.id,
                "name": msg.name,
                "schema": msg.schema,
                "sender": msg.sender,
            })
        }
        "/chainmain.nft.v1.MsgMintNFT" => {
            let msg = nft_proto::MsgMintNft::decode(bytes)?;
            json!({
                "id": msg.id,
                "denomId": msg.denom_id,
                "name": msg.name,
                "uri": msg.uri,
                "data": msg.data,
                "sender": msg.sender,
                "recipient": msg.recipient,
            })
        }
        "/chainmain.nft.v1.MsgEditNFT" => {
            let msg = nft_proto::MsgEditNft::decode(bytes)?;
            json!({
                "id": msg.id,
                "denomId": msg.denom_id,
                "name": msg.name,
                "uri": msg.uri,
                "data": msg.data,
                "sender": msg.sender,
            })
        }
        "/chainmain.nft.v1.MsgTransferNFT" => {
            let msg = nft_proto::MsgTransferNft::decode(bytes)?;
            json!({
                "id": msg.id,
                "denomId": msg.denom_id,
                "sender": msg.sender,
                "recipient": msg.recipient,
            })
        }
        "/chainmain.nft.v1.MsgBurnNFT" => {
            let msg = nft_proto::MsgBurnNft::decode(bytes)?;
            json!({
                "id": msg.id,
                "denomId": msg.denom_id,
                "sender": msg.sender,
            })
        }

        "/ibc.core.client.v1.MsgCreateClient" => {
            let msg = ibc_client::MsgCreateClient::decode(bytes)?;
            json!({
                "clientState": msg.client_state.map(|a| a.type_url),
                "consensusState": msg.consensus_state.map(|a| a.type_url),
                "signer": msg.signer,
            })
        }
        "/ibc.core.client.v1.MsgUpdateClient" => {
            let msg = ibc_client::MsgUpdateClient::decode(bytes)?;
            json!({
                "clientId": msg.client_id,
                "header": msg.client_message.map(|a| a.type_url),
                "signer": msg.signer,
            })
        }

        "/ibc.core.connection.v1.MsgConnectionOpenInit" => {
            let msg = ibc_connection::MsgConnectionOpenInit::decode(bytes)?;
            json!({
                "clientId": msg.client_id,
                "counterparty": msg.counterparty.map(|c| json!({
                    "clientId": c.client_id,
                    "connectionId": c.connection_id,
                })),
                "signer": msg.signer,
            })
        }
        "/ibc.core.connection.v1.MsgConnectionOpenTry" => {
            let msg = ibc_connection::MsgConnectionOpenTry::decode(bytes)?;
            json!({
                "clientId": msg.client_id,
                "counterparty": msg.counterparty.map(|c| json!({
                    "clientId": c.client_id,
                    "connectionId": c.connection_id,
                })),
                "signer": msg.signer,
            })
        }
        "/ibc.core.connection.v1.MsgConnectionOpenAck" => {
            let msg = ibc_connection::MsgConnectionOpenAck::decode(bytes)?;
            json!({
                "connectionId": msg.connection_id,
                "counterpartyConnectionId": msg.counterparty_connection_id,
                "signer": msg.signer,
            })
        }
        "/ibc.core.connection.v1.MsgConnectionOpenConfirm" => {
            let msg = ibc_connection::MsgConnectionOpenConfirm::decode(bytes)?;
            json!({
                "connectionId": msg.connection_id,
                "signer": msg.signer,
            })
        }

        "/ibc.core.channel.v1.MsgChannelOpenInit" => {
            let msg = ibc_channel::MsgChannelOpenInit::decode(bytes)?;
            let channel = msg.channel.unwrap_or_default();
            json!({
                "portId": msg.port_id,
                "counterparty": channel.counterparty.map(|c| json!({
                    "portId": c.port_id,
                    "channelId": c.channel_id,
                })),
                "ordering": channel.ordering,
                "connectionHops": channel.connection_hops,
                "version": channel.version,
                "signer": msg.signer,
            })
        }
        "/ibc.core.channel.v1.MsgChannelOpenTry" => {
            let msg = ibc_channel::MsgChannelOpenTry::decode(bytes)?;
            let channel = msg.channel.unwrap_or_default();
            json!({
                "portId": msg.port_id,
                "counterparty": channel.counterparty.map(|c| json!({
                    "portId": c.port_id,
                    "channelId": c.channel_id,
                })),
                "ordering": channel.ordering,
                "connectionHops": channel.connection_hops,
                "version": channel.version,
                "signer": msg.signer,
            })
        }
        "/ibc.core.channel.v1.MsgChannelOpenAck" => {
            let msg = ibc_channel::MsgChannelOpenAck::decode(bytes)?;
            json!({
                "portId": msg.port_id,
                "channelId": msg.channel_id,
                "counterpartyChannelId": msg.counterparty_channel_id,
                "signer": msg.signer,
            })
        }
        "/ibc.core.channel.v1.MsgChannelOpenConfirm" => {
            let msg = ibc_channel::MsgChannelOpenConfirm::decode(bytes)?;
            json!({
                "portId": msg.port_id,
                "channelId": msg.channel_id,
                "signer": msg.signer,
            })
        }
        "/ibc.core.channel.v1.MsgRecvPacket" => {
            let msg = ibc_channel::MsgRecvPacket::decode(bytes)?;
            let packet = msg.packet.unwrap_or_default();
            json!({
                "packetSequence": packet.sequence.to_string(),
                "sourcePort": packet.source_port,
                "sourceChannel": packet.source_channel,
                "destinationPort": packet.destination_port,
                "destinationChannel": packet.destination_channel,
                "data": packet.data,
                "signer": msg.signer,
            })
        }
        "/ibc.core.channel.v1.MsgAcknowledgement" => {
            let msg = ibc_channel::MsgAcknowledgement::decode(bytes)?;
            let packet = msg.packet.unwrap_or_default();
            json!({
                "packetSequence": packet.sequence.to_string(),
                "sourcePort": packet.source_port,
                "sourceChannel": packet.source_channel,
                "destinationPort": packet.destination_port,
                "destinationChannel": packet.destination_channel,
                "acknowledgement": hex::encode(&msg.acknowledgement),
                "signer": msg.signer,
            })
        }
        "/ibc.core.channel.v1.MsgTimeout" => {
            let msg = ibc_channel::MsgTimeout::decode(bytes)?;
            let packet = msg.packet.unwrap_or_default();
            json!({
                "packetSequence": packet.sequence.to_string(),
                "sourcePort": packet.source_port,
                "sourceChannel": packet.source_channel,
                "signer": msg.signer,
            })
        }
        "/ibc.core.channel.v1.MsgTimeoutOnClose" => {
            let msg = ibc_channel::MsgTimeoutOnClose::decode(bytes)?;
            let packet = msg.packet.unwrap_or_default();
            json!({
                "packetSequence": packet.sequence.to_string(),
                "sourcePort": packet.source_port,
                "sourceChannel": packet.source_channel,
                "signer": msg.signer,
            })
        }

        "/ibc.applications.transfer.v1.MsgTransfer" => {
            let msg = ibc_transfer::MsgTransfer::decode(bytes)?;
            json!({
                "sourcePort": msg.source_port,
                "sourceChannel": msg.source_channel,
                "token": msg.token.as_ref().map(coin_json),
                "sender": msg.sender,
                "receiver": msg.receiver,
                "timeoutHeight": height_json(&msg.timeout_height),
                "timeoutTimestamp": msg.timeout_timestamp.to_string(),
            })
        }

        _ => {
            tracing::debug!(type_url = %type_url, "skipping unrecognized message type");
            Value::Null
        }
    };

    Ok(Message { type_url, body })
}

/// Translates a governance proposal's nested `content` `Any`, tagging the
/// result with `@type` so the parser can dispatch on it the same way it
/// dispatches on a top-level message (§4.5.5).
fn translate_content(any: &Any) -> Result<Value, DecodeError> {
    use cosmos_sdk_proto::cosmos::distribution::v1beta1::CommunityPoolSpendProposal;
    use cosmos_sdk_proto::cosmos::gov::v1beta1::TextProposal;
    use cosmos_sdk_proto::cosmos::params::v1beta1::ParameterChangeProposal;
    use cosmos_sdk_proto::cosmos::upgrade::v1beta1::{
        CancelSoftwareUpgradeProposal, SoftwareUpgradeProposal,
    };

    let type_url = any.type_url.clone();
    let bytes = any.value.as_slice();

    let mut fields = match type_url.as_str() {
        "/cosmos.params.v1beta1.ParameterChangeProposal" => {
            let content = ParameterChangeProposal::decode(bytes)?;
            json!({
                "title": content.title,
                "description": content.description,
                "changes": content.changes.iter().map(|c| json!({
                    "subspace": c.subspace,
                    "key": c.key,
                    "value": c.value,
                })).collect::<Vec<_>>(),
            })
        }
        "/cosmos.distribution.v1beta1.CommunityPoolSpendProposal" => {
            let content = CommunityPoolSpendProposal::decode(bytes)?;
            json!({
                "title": content.title,
                "description": content.description,
                "recipient": content.recipient,
                "amount": coins_json(&content.amount),
            })
        }
        "/cosmos.upgrade.v1beta1.SoftwareUpgradeProposal" => {
            let content = SoftwareUpgradeProposal::decode(bytes)?;
            let plan = content.plan.unwrap_or_default();
            json!({
                "title": content.title,
                "description": content.description,
                "plan": {
                    "name": plan.name,
                    "time": chrono::DateTime::<chrono::Utc>::from_timestamp(
                        plan.time.as_ref().map(|t| t.seconds).unwrap_or_default(),
                        0,
                    ).unwrap_or_default(),
                    "height": plan.height,
                    "info": plan.info,
                },
            })
        }
        "/cosmos.upgrade.v1beta1.CancelSoftwareUpgradeProposal" => {
            let content = CancelSoftwareUpgradeProposal::decode(bytes)?;
            json!({
                "title": content.title,
                "description": content.description,
            })
        }
        "/cosmos.gov.v1beta1.TextProposal" => {
            let content = TextProposal::decode(bytes)?;
            json!({
                "title": content.title,
                "description": content.description,
            })
        }
        _ => return Err(DecodeError::MissingField("content.@type")),
    };

    if let Value::Object(map) = &mut fields {
        map.insert("@type".to_string(), Value::String(type_url));
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_type_url_decodes_to_null_body() {
        let any = Any {
            type_url: "/something.unknown.v1.MsgFoo".to_string(),
            value: vec![],
        };
        let message = translate_any(&any).unwrap();
        assert_eq!(message.body, Value::Null);
    }
}
