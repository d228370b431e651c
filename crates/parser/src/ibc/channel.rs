//! `ics04-channel` handshake message parsers. Mirrors
//! [`crate::ibc::connection`]: `OpenInit`/`OpenTry` recover their assigned
//! `channel_id` from the event log, `OpenAck`/`OpenConfirm` already know
//! it.

use indexer_domain::command::ibc::{
    MsgChannelOpenAckParams, MsgChannelOpenConfirmParams, MsgChannelOpenInitParams,
    MsgChannelOpenTryParams,
};
use indexer_domain::command::{Cmd, Command};
use indexer_domain::event_log::MessageLog;
use indexer_domain::{MsgCommonHeader, ParserInvariantError, ParserInvariantKind};
use serde_json::Value;

use crate::util::{invariant, string_field};

fn assigned_channel_id(
    header: &MsgCommonHeader,
    message_log: Option<&MessageLog>,
    event_type: &str,
) -> Result<String, ParserInvariantError> {
    message_log
        .and_then(|log| log.event_by_type(event_type))
        .ok_or_else(|| {
            invariant(
                header,
                ParserInvariantKind::MissingEvent {
                    event_type: event_type.to_string(),
                },
            )
        })?
        .must_attribute_by_key("channel_id")
        .map(str::to_string)
        .map_err(|kind| invariant(header, kind))
}

fn str_vec_field(body: &Value, field: &str) -> Vec<String> {
    body.get(field)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub fn parse_msg_channel_open_init(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgChannelOpenInitParams {
        port_id: string_field(header, body, "portId")?,
        channel_id: assigned_channel_id(header, message_log, "channel_open_init")?,
        counterparty: body.get("counterparty").cloned().unwrap_or(Value::Null),
        ordering: string_field(header, body, "ordering")?,
        connection_hops: str_vec_field(body, "connectionHops"),
        version: string_field(header, body, "version")?,
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgChannelOpenInit(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_channel_open_try(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgChannelOpenTryParams {
        port_id: string_field(header, body, "portId")?,
        channel_id: assigned_channel_id(header, message_log, "channel_open_try")?,
        counterparty: body.get("counterparty").cloned().unwrap_or(Value::Null),
        ordering: string_field(header, body, "ordering")?,
        connection_hops: str_vec_field(body, "connectionHops"),
        version: string_field(header, body, "version")?,
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgChannelOpenTry(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_channel_open_ack(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgChannelOpenAckParams {
        port_id: string_field(header, body, "portId")?,
        channel_id: string_field(header, body, "channelId")?,
        counterparty_channel_id: string_field(header, body, "counterpartyChannelId")?,
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgChannelOpenAck(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_channel_open_confirm(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgChannelOpenConfirmParams {
        port_id: string_field(header, body, "portId")?,
        channel_id: string_field(header, body, "channelId")?,
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgChannelOpenConfirm(Cmd::new(
        header.clone(),
        params,
    ))])
}
