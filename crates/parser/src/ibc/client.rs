//! `ics02-client` message parsers.
//!
//! `MsgCreateClient` assigns no identifier in the message itself; the
//! chain reports it in the `create_client` event's `client_id` attribute.

use indexer_domain::command::ibc::{MsgCreateClientParams, MsgUpdateClientParams};
use indexer_domain::command::{Cmd, Command};
use indexer_domain::event_log::MessageLog;
use indexer_domain::{MsgCommonHeader, ParserInvariantError, ParserInvariantKind};
use serde_json::Value;

use crate::util::{invariant, string_field};

pub fn parse_msg_create_client(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
) -> Result<Vec<Command>, ParserInvariantError> {
    let client_id = message_log
        .and_then(|log| log.event_by_type("create_client"))
        .ok_or_else(|| {
            invariant(
                header,
                ParserInvariantKind::MissingEvent {
                    event_type: "create_client".to_string(),
                },
            )
        })?
        .must_attribute_by_key("client_id")
        .map_err(|kind| invariant(header, kind))?
        .to_string();

    let params = MsgCreateClientParams {
        client_id,
        client_state: body.get("clientState").cloned().unwrap_or(Value::Null),
        consensus_state: body.get("consensusState").cloned().unwrap_or(Value::Null),
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgCreateClient(Cmd::new(header.clone(), params))])
}

pub fn parse_msg_update_client(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgUpdateClientParams {
        client_id: string_field(header, body, "clientId")?,
        header: body.get("header").cloned().unwrap_or(Value::Null),
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgUpdateClient(Cmd::new(header.clone(), params))])
}
