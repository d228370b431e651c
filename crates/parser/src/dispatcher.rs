//! The top-level entry point (§4, §8): decodes every transaction in a
//! block, pairs each with its execution result, and dispatches every
//! message to its per-type parser in strict `(tx_index, msg_index,
//! parser-internal)` order.
//!
//! This function is pure and total over its inputs: the same
//! `(block, block_results, ctx)` triple always produces the same command
//! list, and a transaction's own fields never make this function error —
//! only a recognized message type whose invariants the chain violated
//! does (§4.2, §8 universal properties).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::debug;

use indexer_decoder::{Block, BlockResults, Message};
use indexer_domain::chain_context::ChainContext;
use indexer_domain::command::Command;
use indexer_domain::event_log::ParsedTxsResultLog;
use indexer_domain::{MsgCommonHeader, ParserInvariantError, ParserInvariantKind};

use crate::{bank, distribution, gov, ibc, nft, slashing, staking};

/// Decodes and parses every transaction in `block`/`block_results` into
/// the ordered command stream an indexer would persist.
///
/// # Errors
/// Returns the first [`ParserInvariantError`] encountered — a decode
/// failure or a recognized message type missing a field/event its success
/// path guarantees.
pub fn parse_block_results_txs_msg_to_commands(
    block: &Block,
    block_results: &BlockResults,
    ctx: &ChainContext,
) -> Result<Vec<Command>, ParserInvariantError> {
    let mut commands = Vec::new();

    for (tx_index, (tx_base64, tx_result)) in block
        .data
        .txs
        .iter()
        .zip(block_results.txs_results.iter())
        .enumerate()
    {
        let wire_bytes = BASE64.decode(tx_base64).map_err(|e| {
            ParserInvariantError::new(
                ParserInvariantKind::MalformedMessageField {
                    field: format!("tx[{tx_index}] is not valid base64: {e}"),
                },
                String::new(),
                0,
            )
        })?;
        let tx = indexer_decoder::decode(&wire_bytes).map_err(|e| {
            ParserInvariantError::new(
                ParserInvariantKind::MalformedMessageField {
                    field: format!("tx[{tx_index}] failed to decode: {e}"),
                },
                String::new(),
                0,
            )
        })?;

        let tx_success = tx_result.is_success();
        let log = if tx_success {
            Some(ParsedTxsResultLog::parse(&tx_result.log).map_err(|e| {
                ParserInvariantError::new(
                    ParserInvariantKind::MalformedMessageField {
                        field: format!("tx[{tx_index}] log: {e}"),
                    },
                    tx.hash.clone(),
                    0,
                )
            })?)
        } else {
            None
        };

        for (msg_index, message) in tx.messages.iter().enumerate() {
            let header = MsgCommonHeader {
                block_height: block.height(),
                tx_hash: tx.hash.clone(),
                tx_success,
                msg_index,
            };
            let message_log = log
                .as_ref()
                .map(|l| l.message_log(msg_index))
                .transpose()
                .map_err(|e| {
                    ParserInvariantError::new(
                        ParserInvariantKind::MalformedMessageField {
                            field: format!("message log: {e}"),
                        },
                        header.tx_hash.clone(),
                        msg_index,
                    )
                })?;

            commands.extend(dispatch_message(&header, message, message_log, ctx)?);
        }
    }

    Ok(commands)
}

fn dispatch_message(
    header: &MsgCommonHeader,
    message: &Message,
    message_log: Option<&indexer_domain::event_log::MessageLog>,
    ctx: &ChainContext,
) -> Result<Vec<Command>, ParserInvariantError> {
    let body = &message.body;
    match message.type_url.as_str() {
        "/cosmos.bank.v1beta1.MsgSend" => bank::parse_msg_send(header, body),
        "/cosmos.bank.v1beta1.MsgMultiSend" => bank::parse_msg_multi_send(header, body),

        "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress" => {
            distribution::parse_msg_set_withdraw_address(header, body)
        }
        "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward" => {
            distribution::parse_msg_withdraw_delegator_reward(header, body, message_log)
        }
        "/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission" => {
            distribution::parse_msg_withdraw_validator_commission(header, body, message_log)
        }
        "/cosmos.distribution.v1beta1.MsgFundCommunityPool" => {
            distribution::parse_msg_fund_community_pool(header, body)
        }

        "/cosmos.gov.v1beta1.MsgSubmitProposal" => {
            gov::parse_msg_submit_proposal(header, body, message_log)
        }
        "/cosmos.gov.v1beta1.MsgVote" => gov::parse_msg_vote(header, body),
        "/cosmos.gov.v1beta1.MsgDeposit" => gov::parse_msg_deposit(header, body, message_log),

        "/cosmos.staking.v1beta1.MsgDelegate" => {
            staking::parse_msg_delegate(header, body, message_log, ctx)
        }
        "/cosmos.staking.v1beta1.MsgUndelegate" => {
            staking::parse_msg_undelegate(header, body, message_log, ctx)
        }
        "/cosmos.staking.v1beta1.MsgBeginRedelegate" => {
            staking::parse_msg_begin_redelegate(header, body, message_log, ctx)
        }
        "/cosmos.staking.v1beta1.MsgCreateValidator" => {
            staking::parse_msg_create_validator(header, body)
        }
        "/cosmos.staking.v1beta1.MsgEditValidator" => {
            staking::parse_msg_edit_validator(header, body)
        }

        "/cosmos.slashing.v1beta1.MsgUnjail" => slashing::parse_msg_unjail(header, body),

        "/chainmain.nft.v1.MsgIssueDenom" => nft::parse_msg_issue_denom(header, body),
        "/chainmain.nft.v1.MsgMintNFT" => nft::parse_msg_mint_nft(header, body),
        "/chainmain.nft.v1.MsgEditNFT" => nft::parse_msg_edit_nft(header, body),
        "/chainmain.nft.v1.MsgTransferNFT" => nft::parse_msg_transfer_nft(header, body),
        "/chainmain.nft.v1.MsgBurnNFT" => nft::parse_msg_burn_nft(header, body),

        "/ibc.core.client.v1.MsgCreateClient" => {
            ibc::client::parse_msg_create_client(header, body, message_log)
        }
        "/ibc.core.client.v1.MsgUpdateClient" => ibc::client::parse_msg_update_client(header, body),

        "/ibc.core.connection.v1.MsgConnectionOpenInit" => {
            ibc::connection::parse_msg_connection_open_init(header, body, message_log)
        }
        "/ibc.core.connection.v1.MsgConnectionOpenTry" => {
            ibc::connection::parse_msg_connection_open_try(header, body, message_log)
        }
        "/ibc.core.connection.v1.MsgConnectionOpenAck" => {
            ibc::connection::parse_msg_connection_open_ack(header, body)
        }
        "/ibc.core.connection.v1.MsgConnectionOpenConfirm" => {
            ibc::connection::parse_msg_connection_open_confirm(header, body)
        }

        "/ibc.core.channel.v1.MsgChannelOpenInit" => {
            ibc::channel::parse_msg_channel_open_init(header, body, message_log)
        }
        "/ibc.core.channel.v1.MsgChannelOpenTry" => {
            ibc::channel::parse_msg_channel_open_try(header, body, message_log)
        }
        "/ibc.core.channel.v1.MsgChannelOpenAck" => {
            ibc::channel::parse_msg_channel_open_ack(header, body)
        }
        "/ibc.core.channel.v1.MsgChannelOpenConfirm" => {
            ibc::channel::parse_msg_channel_open_confirm(header, body)
        }
        "/ibc.core.channel.v1.MsgRecvPacket" => {
            ibc::packet::parse_msg_recv_packet(header, body, message_log, ctx)
        }
        "/ibc.core.channel.v1.MsgAcknowledgement" => {
            ibc::packet::parse_msg_acknowledgement(header, body)
        }
        "/ibc.core.channel.v1.MsgTimeout" => ibc::packet::parse_msg_timeout(header, body),
        "/ibc.core.channel.v1.MsgTimeoutOnClose" => {
            ibc::packet::parse_msg_timeout_on_close(header, body)
        }

        "/ibc.applications.transfer.v1.MsgTransfer" => {
            ibc::transfer::parse_msg_transfer(header, body, message_log)
        }

        other => {
            debug!(type_url = other, "skipping unrecognized message type");
            Ok(Vec::new())
        }
    }
}
