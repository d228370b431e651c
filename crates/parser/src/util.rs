//! Shared field-extraction helpers for the per-message parsers.
//!
//! Every parser receives a message body as a generic [`serde_json::Value`]
//! (the decoder's output) and a [`MsgCommonHeader`] naming the transaction
//! it came from. These helpers turn "field missing or wrong shape" into a
//! [`ParserInvariantError`] tagged with that header, since the `@type` a
//! message carries is a contract that its fields exist (§4.2 step 1).

use indexer_domain::coin::{coin_from_amount_value, coins_from_amount_values, Coin, Coins};
use indexer_domain::{MsgCommonHeader, ParserInvariantError, ParserInvariantKind};
use serde_json::Value;

pub fn invariant(header: &MsgCommonHeader, kind: ParserInvariantKind) -> ParserInvariantError {
    ParserInvariantError::new(kind, header.tx_hash.clone(), header.msg_index)
}

fn malformed(field: &str) -> ParserInvariantKind {
    ParserInvariantKind::MalformedMessageField {
        field: field.to_string(),
    }
}

pub fn str_field<'a>(
    header: &MsgCommonHeader,
    body: &'a Value,
    field: &'static str,
) -> Result<&'a str, ParserInvariantError> {
    body.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| invariant(header, malformed(field)))
}

pub fn string_field(
    header: &MsgCommonHeader,
    body: &Value,
    field: &'static str,
) -> Result<String, ParserInvariantError> {
    str_field(header, body, field).map(str::to_string)
}

pub fn coin_field(
    header: &MsgCommonHeader,
    body: &Value,
    field: &'static str,
) -> Result<Coin, ParserInvariantError> {
    let value = body.get(field).ok_or_else(|| invariant(header, malformed(field)))?;
    coin_from_amount_value(value).map_err(|_| invariant(header, malformed(field)))
}

pub fn coins_field(
    header: &MsgCommonHeader,
    body: &Value,
    field: &'static str,
) -> Result<Coins, ParserInvariantError> {
    let values = body
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| invariant(header, malformed(field)))?;
    coins_from_amount_values(values).map_err(|_| invariant(header, malformed(field)))
}
