//! Packet-lifecycle message parsers: `MsgRecvPacket`, `MsgAcknowledgement`,
//! `MsgTimeout`, `MsgTimeoutOnClose`.
//!
//! `MsgRecvPacket`'s ICS-20 payload is the one place the event layout
//! genuinely differs by SDK version: chains on `cosmos-sdk` 0.43 and later
//! emit a `fungible_token_packet` event carrying `amount`/`denom`/`sender`/
//! `receiver` as separate attributes, while older chains only attach the
//! packet's raw `packet_data` JSON string to the `recv_packet` event
//! itself. [`ChainContext::cosmos_sdk_version`] picks which one to read.

use semver::Version;
use serde_json::Value;

use indexer_domain::chain_context::ChainContext;
use indexer_domain::command::ibc::{
    FungibleTokenPacketData, MsgAcknowledgementParams, MsgRecvPacketParams, MsgTimeoutOnCloseParams,
    MsgTimeoutParams,
};
use indexer_domain::command::{Cmd, Command};
use indexer_domain::event_log::MessageLog;
use indexer_domain::{MsgCommonHeader, ParserInvariantError, ParserInvariantKind};

use crate::util::{invariant, string_field};

const FUNGIBLE_TOKEN_PACKET_EVENT_SDK_VERSION: Version = Version::new(0, 43, 0);

fn missing_event(header: &MsgCommonHeader, event_type: &str) -> ParserInvariantError {
    invariant(
        header,
        ParserInvariantKind::MissingEvent {
            event_type: event_type.to_string(),
        },
    )
}

fn fungible_token_packet_data_from_attributes(
    header: &MsgCommonHeader,
    message_log: Option<&MessageLog>,
) -> Result<FungibleTokenPacketData, ParserInvariantError> {
    let event = message_log
        .and_then(|log| log.event_by_type("fungible_token_packet"))
        .ok_or_else(|| missing_event(header, "fungible_token_packet"))?;
    Ok(FungibleTokenPacketData {
        denom: event
            .must_attribute_by_key("denom")
            .map_err(|kind| invariant(header, kind))?
            .to_string(),
        amount: event
            .must_attribute_by_key("amount")
            .map_err(|kind| invariant(header, kind))?
            .to_string(),
        sender: event
            .must_attribute_by_key("sender")
            .map_err(|kind| invariant(header, kind))?
            .to_string(),
        receiver: event
            .must_attribute_by_key("receiver")
            .map_err(|kind| invariant(header, kind))?
            .to_string(),
    })
}

fn fungible_token_packet_data_from_packet_data_attribute(
    header: &MsgCommonHeader,
    message_log: Option<&MessageLog>,
) -> Result<FungibleTokenPacketData, ParserInvariantError> {
    let raw = message_log
        .and_then(|log| log.event_by_type("recv_packet"))
        .ok_or_else(|| missing_event(header, "recv_packet"))?
        .must_attribute_by_key("packet_data")
        .map_err(|kind| invariant(header, kind))?;
    serde_json::from_str(raw).map_err(|e| {
        invariant(
            header,
            ParserInvariantKind::MalformedMessageField {
                field: format!("packet_data: {e}"),
            },
        )
    })
}

fn fungible_token_packet_data(
    header: &MsgCommonHeader,
    message_log: Option<&MessageLog>,
    ctx: &ChainContext,
) -> Result<FungibleTokenPacketData, ParserInvariantError> {
    if ctx.cosmos_sdk_version >= FUNGIBLE_TOKEN_PACKET_EVENT_SDK_VERSION {
        fungible_token_packet_data_from_attributes(header, message_log)
    } else {
        fungible_token_packet_data_from_packet_data_attribute(header, message_log)
    }
}

pub fn parse_msg_recv_packet(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
    ctx: &ChainContext,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgRecvPacketParams {
        packet_sequence: string_field(header, body, "packetSequence")?,
        source_port: string_field(header, body, "sourcePort")?,
        source_channel: string_field(header, body, "sourceChannel")?,
        destination_port: string_field(header, body, "destinationPort")?,
        destination_channel: string_field(header, body, "destinationChannel")?,
        data: fungible_token_packet_data(header, message_log, ctx)?,
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgRecvPacket(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_acknowledgement(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgAcknowledgementParams {
        packet_sequence: string_field(header, body, "packetSequence")?,
        source_port: string_field(header, body, "sourcePort")?,
        source_channel: string_field(header, body, "sourceChannel")?,
        destination_port: string_field(header, body, "destinationPort")?,
        destination_channel: string_field(header, body, "destinationChannel")?,
        acknowledgement: string_field(header, body, "acknowledgement")?,
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgAcknowledgement(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_timeout(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgTimeoutParams {
        packet_sequence: string_field(header, body, "packetSequence")?,
        source_port: string_field(header, body, "sourcePort")?,
        source_channel: string_field(header, body, "sourceChannel")?,
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgTimeout(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_timeout_on_close(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgTimeoutOnCloseParams {
        packet_sequence: string_field(header, body, "packetSequence")?,
        source_port: string_field(header, body, "sourcePort")?,
        source_channel: string_field(header, body, "sourceChannel")?,
        signer: string_field(header, body, "signer")?,
    };
    Ok(vec![Command::CreateMsgTimeoutOnClose(Cmd::new(
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
            block_height: 1,
            tx_hash: "HASH".to_string(),
            tx_success: true,
            msg_index: 0,
        }
    }

    fn body() -> Value {
        serde_json::json!({
            "packetSequence": "1",
            "sourcePort": "transfer",
            "sourceChannel": "channel-0",
            "destinationPort": "transfer",
            "destinationChannel": "channel-0",
            "signer": "cro1recipient",
        })
    }

    #[test]
    fn recv_packet_reads_fungible_token_event_on_new_sdk() {
        let log = ParsedTxsResultLog::parse(
            r#"[{"msg_index": 0, "events": [
                {"type": "fungible_token_packet", "attributes": [
                    {"key": "denom", "value": "basecro"},
                    {"key": "amount", "value": "1234"},
                    {"key": "sender", "value": "cro1sender"},
                    {"key": "receiver", "value": "cro1receiver"}
                ]}
            ]}]"#,
        )
        .unwrap();
        let message_log = log.message_log(0).unwrap();
        let ctx = ChainContext::new("cro", "basecro", Version::new(0, 43, 0));

        let commands = parse_msg_recv_packet(&header(), &body(), Some(message_log), &ctx).unwrap();
        let Command::CreateMsgRecvPacket(cmd) = &commands[0] else {
            panic!("expected CreateMsgRecvPacket");
        };
        assert_eq!(cmd.params.data.denom, "basecro");
        assert_eq!(cmd.params.data.amount, "1234");
    }

    #[test]
    fn recv_packet_reads_packet_data_attribute_on_old_sdk() {
        let log = ParsedTxsResultLog::parse(
            r#"[{"msg_index": 0, "events": [
                {"type": "recv_packet", "attributes": [
                    {"key": "packet_data", "value": "{\"denom\":\"basecro\",\"amount\":\"1234\",\"sender\":\"cro1sender\",\"receiver\":\"cro1receiver\"}"}
                ]}
            ]}]"#,
        )
        .unwrap();
        let message_log = log.message_log(0).unwrap();
        let ctx = ChainContext::new("cro", "basecro", Version::new(0, 42, 0));

        let commands = parse_msg_recv_packet(&header(), &body(), Some(message_log), &ctx).unwrap();
        let Command::CreateMsgRecvPacket(cmd) = &commands[0] else {
            panic!("expected CreateMsgRecvPacket");
        };
        assert_eq!(cmd.params.data.receiver, "cro1receiver");
    }
}
