//! `x/slashing` message parser (§4.5.4).

use indexer_domain::command::slashing::MsgUnjailParams;
use indexer_domain::command::{Cmd, Command};
use indexer_domain::{MsgCommonHeader, ParserInvariantError};
use serde_json::Value;

use crate::util::string_field;

pub fn parse_msg_unjail(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgUnjailParams {
        validator_addr: string_field(header, body, "validatorAddr")?,
    };
    Ok(vec![Command::CreateMsgUnjail(Cmd::new(header.clone(), params))])
}
