//! Genesis-only parsing (§4.5.7): the chain's initial validator set is
//! embedded in the genesis file as `gentx` messages rather than ordinary
//! block transactions, so this entry point takes a bare message body and
//! produces a command with no [`indexer_domain::MsgCommonHeader`].

use indexer_domain::coin::coin_from_amount_value;
use indexer_domain::command::genesis::{CreateGenesisValidatorParams, ValidatorStatus};
use indexer_domain::command::{Command, GenesisValidator};
use indexer_domain::validator::{ValidatorCommission, ValidatorDescription};
use indexer_domain::{CoinError, ParserInvariantError, ParserInvariantKind};
use serde_json::Value;

fn malformed(field: &str) -> ParserInvariantError {
    ParserInvariantError::new(
        ParserInvariantKind::MalformedMessageField {
            field: field.to_string(),
        },
        String::new(),
        0,
    )
}

fn str_field<'a>(body: &'a Value, field: &str) -> Result<&'a str, ParserInvariantError> {
    body.get(field).and_then(Value::as_str).ok_or_else(|| malformed(field))
}

/// Parses a genesis `gentx`'s `MsgCreateValidator` into a
/// [`CreateGenesisValidatorParams`] command. All genesis validators start
/// `Bonded` and unjailed — neither field is present in the gentx itself.
pub fn parse_genesis_gen_tx_msg_create_validator(
    body: &Value,
) -> Result<Command, ParserInvariantError> {
    let get_description = |field: &str| -> String {
        body.get("description")
            .and_then(|d| d.get(field))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let get_commission = |field: &str| -> Result<String, ParserInvariantError> {
        body.get("commission")
            .and_then(|c| c.get(field))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| malformed(&format!("commission.{field}")))
    };

    let amount_value = body.get("amount").ok_or_else(|| malformed("amount"))?;
    let amount = coin_from_amount_value(amount_value).map_err(|_: CoinError| malformed("amount"))?;

    let params = CreateGenesisValidatorParams {
        status: ValidatorStatus::Bonded,
        jailed: false,
        description: ValidatorDescription {
            moniker: get_description("moniker"),
            identity: get_description("identity"),
            website: get_description("website"),
            security_contact: get_description("securityContact"),
            details: get_description("details"),
        },
        commission: ValidatorCommission {
            rate: get_commission("rate")?,
            max_rate: get_commission("maxRate")?,
            max_change_rate: get_commission("maxChangeRate")?,
        },
        min_self_delegation: str_field(body, "minSelfDelegation")?.to_string(),
        delegator_address: str_field(body, "delegatorAddress")?.to_string(),
        validator_address: str_field(body, "validatorAddress")?.to_string(),
        tendermint_pubkey: str_field(body, "pubkey")?.to_string(),
        amount,
    };
    Ok(Command::CreateGenesisValidator(GenesisValidator::new(params)))
}
