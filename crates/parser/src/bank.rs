//! `x/bank` message parsers (§4.5.2). Neither message needs the event log:
//! the transfer they describe is fully determined by the message body.

use indexer_domain::command::bank::{MsgMultiSendInput, MsgMultiSendOutput, MsgMultiSendParams, MsgSendParams};
use indexer_domain::command::{Cmd, Command};
use indexer_domain::coin::coins_from_amount_values;
use indexer_domain::{MsgCommonHeader, ParserInvariantError};
use serde_json::Value;

use crate::util::{coins_field, invariant, string_field};

pub fn parse_msg_send(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgSendParams {
        from_address: string_field(header, body, "fromAddress")?,
        to_address: string_field(header, body, "toAddress")?,
        amount: coins_field(header, body, "amount")?,
    };
    Ok(vec![Command::CreateMsgSend(Cmd::new(header.clone(), params))])
}

pub fn parse_msg_multi_send(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    use indexer_domain::ParserInvariantKind;

    let malformed = |field: &str| {
        invariant(
            header,
            ParserInvariantKind::MalformedMessageField {
                field: field.to_string(),
            },
        )
    };

    let inputs = body
        .get("inputs")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("inputs"))?
        .iter()
        .map(|input| {
            let address = input
                .get("address")
                .and_then(Value::as_str)
                .ok_or_else(|| malformed("inputs[].address"))?
                .to_string();
            let coins_values = input
                .get("coins")
                .and_then(Value::as_array)
                .ok_or_else(|| malformed("inputs[].coins"))?;
            let coins = coins_from_amount_values(coins_values).map_err(|_| malformed("inputs[].coins"))?;
            Ok(MsgMultiSendInput { address, coins })
        })
        .collect::<Result<Vec<_>, ParserInvariantError>>()?;

    let outputs = body
        .get("outputs")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("outputs"))?
        .iter()
        .map(|output| {
            let address = output
                .get("address")
                .and_then(Value::as_str)
                .ok_or_else(|| malformed("outputs[].address"))?
                .to_string();
            let coins_values = output
                .get("coins")
                .and_then(Value::as_array)
                .ok_or_else(|| malformed("outputs[].coins"))?;
            let coins = coins_from_amount_values(coins_values).map_err(|_| malformed("outputs[].coins"))?;
            Ok(MsgMultiSendOutput { address, coins })
        })
        .collect::<Result<Vec<_>, ParserInvariantError>>()?;

    let params = MsgMultiSendParams { inputs, outputs };
    Ok(vec![Command::CreateMsgMultiSend(Cmd::new(header.clone(), params))])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> MsgCommonHeader {
        MsgCommonHeader {
            block_height: 1,
            tx_hash: "HASH".to_string(),
            tx_success: true,
            msg_index: 0,
        }
    }

    #[test]
    fn parses_msg_send() {
        let body = serde_json::json!({
            "fromAddress": "cro1a",
            "toAddress": "cro1b",
            "amount": [{"denom": "basecro", "amount": "100"}],
        });
        let commands = parse_msg_send(&header(), &body).unwrap();
        match &commands[0] {
            Command::CreateMsgSend(cmd) => {
                assert_eq!(cmd.params.from_address, "cro1a");
                assert_eq!(cmd.params.to_address, "cro1b");
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn missing_field_is_invariant_error() {
        let body = serde_json::json!({"fromAddress": "cro1a"});
        assert!(parse_msg_send(&header(), &body).is_err());
    }
}
