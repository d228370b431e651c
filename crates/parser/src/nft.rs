//! `x/nft` (Crypto.org NFT module) message parsers (§4.5.8). Every field
//! the resulting command needs is already in the message body.

use indexer_domain::command::nft::{
    MsgBurnNftParams, MsgEditNftParams, MsgIssueDenomParams, MsgMintNftParams, MsgTransferNftParams,
};
use indexer_domain::command::{Cmd, Command};
use indexer_domain::{MsgCommonHeader, ParserInvariantError};
use serde_json::Value;

use crate::util::string_field;

pub fn parse_msg_issue_denom(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgIssueDenomParams {
        denom_id: string_field(header, body, "id")?,
        denom_name: string_field(header, body, "name")?,
        schema: string_field(header, body, "schema")?,
        sender: string_field(header, body, "sender")?,
    };
    Ok(vec![Command::CreateMsgIssueDenom(Cmd::new(header.clone(), params))])
}

pub fn parse_msg_mint_nft(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgMintNftParams {
        denom_id: string_field(header, body, "denomId")?,
        token_id: string_field(header, body, "id")?,
        token_name: string_field(header, body, "name")?,
        uri: string_field(header, body, "uri")?,
        data: string_field(header, body, "data")?,
        sender: string_field(header, body, "sender")?,
        recipient: string_field(header, body, "recipient")?,
    };
    Ok(vec![Command::CreateMsgMintNft(Cmd::new(header.clone(), params))])
}

pub fn parse_msg_transfer_nft(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgTransferNftParams {
        denom_id: string_field(header, body, "denomId")?,
        token_id: string_field(header, body, "id")?,
        sender: string_field(header, body, "sender")?,
        recipient: string_field(header, body, "recipient")?,
    };
    Ok(vec![Command::CreateMsgTransferNft(Cmd::new(header.clone(), params))])
}

pub fn parse_msg_edit_nft(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgEditNftParams {
        denom_id: string_field(header, body, "denomId")?,
        token_id: string_field(header, body, "id")?,
        token_name: string_field(header, body, "name")?,
        uri: string_field(header, body, "uri")?,
        data: string_field(header, body, "data")?,
        sender: string_field(header, body, "sender")?,
    };
    Ok(vec![Command::CreateMsgEditNft(Cmd::new(header.clone(), params))])
}

pub fn parse_msg_burn_nft(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgBurnNftParams {
        denom_id: string_field(header, body, "denomId")?,
        token_id: string_field(header, body, "id")?,
        sender: string_field(header, body, "sender")?,
    };
    Ok(vec![Command::CreateMsgBurnNft(Cmd::new(header.clone(), params))])
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
    fn parses_msg_burn_nft() {
        let body = serde_json::json!({"id": "token1", "denomId": "denom1", "sender": "cro1a"});
        let commands = parse_msg_burn_nft(&header(), &body).unwrap();
        match &commands[0] {
            Command::CreateMsgBurnNft(cmd) => {
                assert_eq!(cmd.params.token_id, "token1");
                assert_eq!(cmd.params.denom_id, "denom1");
            }
            _ => panic!("wrong variant"),
        }
    }
}
