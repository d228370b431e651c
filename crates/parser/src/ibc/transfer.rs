//! `ics20-transfer` `MsgTransfer` parser (§4.6, §8 S4).
//!
//! The message itself only carries the sender's side of the transfer
//! (`sourcePort`/`sourceChannel`/`token`/...); the packet the chain
//! actually sent — its sequence number, destination, ordering and
//! connection — is only known once `ibc-go`'s channel keeper emits a
//! `send_packet` event, so those five fields are recovered from there.

use indexer_domain::command::ibc::{MsgTransferParams, TimeoutHeight};
use indexer_domain::command::{Cmd, Command};
use indexer_domain::event_log::MessageLog;
use indexer_domain::{MsgCommonHeader, ParserInvariantError, ParserInvariantKind};
use serde_json::Value;

use crate::util::{coin_field, invariant, string_field};

fn send_packet_attribute(
    header: &MsgCommonHeader,
    message_log: Option<&MessageLog>,
    key: &str,
) -> Result<String, ParserInvariantError> {
    message_log
        .and_then(|log| log.event_by_type("send_packet"))
        .ok_or_else(|| {
            invariant(
                header,
                ParserInvariantKind::MissingEvent {
                    event_type: "send_packet".to_string(),
                },
            )
        })?
        .must_attribute_by_key(key)
        .map(str::to_string)
        .map_err(|kind| invariant(header, kind))
}

fn timeout_height_field(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<TimeoutHeight, ParserInvariantError> {
    let malformed = || {
        invariant(
            header,
            ParserInvariantKind::MalformedMessageField {
                field: "timeoutHeight".to_string(),
            },
        )
    };
    let height = body.get("timeoutHeight").ok_or_else(malformed)?;
    Ok(TimeoutHeight {
        revision_number: height
            .get("revisionNumber")
            .and_then(Value::as_str)
            .ok_or_else(malformed)?
            .to_string(),
        revision_height: height
            .get("revisionHeight")
            .and_then(Value::as_str)
            .ok_or_else(malformed)?
            .to_string(),
    })
}

pub fn parse_msg_transfer(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgTransferParams {
        source_port: string_field(header, body, "sourcePort")?,
        source_channel: string_field(header, body, "sourceChannel")?,
        token: coin_field(header, body, "token")?,
        sender: string_field(header, body, "sender")?,
        receiver: string_field(header, body, "receiver")?,
        timeout_height: timeout_height_field(header, body)?,
        timeout_timestamp: string_field(header, body, "timeoutTimestamp")?,
        packet_sequence: send_packet_attribute(header, message_log, "packet_sequence")?,
        destination_port: send_packet_attribute(header, message_log, "packet_dst_port")?,
        destination_channel: send_packet_attribute(header, message_log, "packet_dst_channel")?,
        channel_ordering: send_packet_attribute(header, message_log, "packet_channel_ordering")?,
        connection_id: send_packet_attribute(header, message_log, "packet_connection")?,
    };
    Ok(vec![Command::CreateMsgTransfer(Cmd::new(
        header.clone(),
        params,
    ))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexer_domain::event_log::ParsedTxsResultLog;

    fn header() -> MsgCommonHeader {
        MsgCommonHeader {
            block_height: 24,
            tx_hash: "HASH".to_string(),
            tx_success: true,
            msg_index: 0,
        }
    }

    #[test]
    fn parses_msg_transfer_recovering_packet_fields_from_send_packet_event() {
        let log = ParsedTxsResultLog::parse(
            r#"[{"msg_index": 0, "events": [
                {"type": "send_packet", "attributes": [
                    {"key": "packet_sequence", "value": "1"},
                    {"key": "packet_dst_port", "value": "transfer"},
                    {"key": "packet_dst_channel", "value": "channel-0"},
                    {"key": "packet_channel_ordering", "value": "ORDER_UNORDERED"},
                    {"key": "packet_connection", "value": "connection-0"}
                ]}
            ]}]"#,
        )
        .unwrap();
        let message_log = log.message_log(0).unwrap();

        let body = serde_json::json!({
            "sourcePort": "transfer",
            "sourceChannel": "channel-0",
            "token": {"denom": "basecro", "amount": "1234"},
            "sender": "cro10snhlvkpuc4xhq82uyg5ex2eezmmf5ed5tmqsv",
            "receiver": "cro1dulwqgcdpemn8c34sjd92fxepz5p0sqpeevw7f",
            "timeoutHeight": {"revisionNumber": "2", "revisionHeight": "1023"},
            "timeoutTimestamp": "0",
        });

        let commands = parse_msg_transfer(&header(), &body, Some(message_log)).unwrap();
        assert_eq!(commands.len(), 1);
        let Command::CreateMsgTransfer(cmd) = &commands[0] else {
            panic!("expected CreateMsgTransfer");
        };
        assert_eq!(cmd.params.packet_sequence, "1");
        assert_eq!(cmd.params.destination_channel, "channel-0");
        assert_eq!(cmd.params.connection_id, "connection-0");
    }
}
