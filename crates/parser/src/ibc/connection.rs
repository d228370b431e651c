//! `ics03-connection` handshake message parsers.
//!
//! `MsgConnectionOpenInit`/`Try` assign no connection identifier in the
//! message; it is recovered from the corresponding event. `OpenAck`/
//! `OpenConfirm` already know the connection id they're targeting, so no
//! event lookup is needed for those two.

use indexer_domain::command::ibc::{
    MsgConnectionOpenAckParams, MsgConnectionOpenConfirmParams, MsgConnectionOpenInitParams,
    MsgConnectionOpenTryParams,
};
use indexer_domain::command::{Cmd, Command};
use indexer_domain::event_log::MessageLog;
use indexer_domain::{MsgCommonHeader, ParserInvariantError, ParserInvariantKind};
use serde_json::Value;

use crate::util::{invariant, string_field};

fn assigned_connection_id(
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
        .must_attribute_by_key("connection_id")
        .map(str::to_string)
        .map_err(|kind| invariant(header, kind))
}

pub fn parse_msg_connection_open_init(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgConnectionOpenInitParams {
        connection_id: assigned_connection_id(header, message_log, "connection_open_init")?,
        client_id: string_field(header, body, "clientId")?,
        counterparty: body.get("counterparty").cloned().unwrap_or(Value::Null),
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgConnectionOpenInit(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_connection_open_try(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgConnectionOpenTryParams {
        connection_id: assigned_connection_id(header, message_log, "connection_open_try")?,
        client_id: string_field(header, body, "clientId")?,
        counterparty: body.get("counterparty").cloned().unwrap_or(Value::Null),
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgConnectionOpenTry(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_connection_open_ack(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgConnectionOpenAckParams {
        connection_id: string_field(header, body, "connectionId")?,
        counterparty_connection_id: string_field(header, body, "counterpartyConnectionId")?,
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgConnectionOpenAck(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_connection_open_confirm(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgConnectionOpenConfirmParams {
        connection_id: string_field(header, body, "connectionId")?,
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgConnectionOpenConfirm(Cmd::new(
        header.clone(),
        params,
    ))])
}
