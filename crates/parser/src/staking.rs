//! `x/staking` message parsers (§4.5.4).
//!
//! `MsgDelegate`, `MsgUndelegate` and `MsgBeginRedelegate` each implicitly
//! withdraw the delegator's outstanding reward on the source validator
//! before applying the (re)delegation. `autoClaimedRewards` recovers that
//! amount by summing every `transfer` event sent from the chain's
//! distribution module account within the same message's event log —
//! there can be more than one such transfer (e.g. a redelegation can touch
//! both the source and destination validators' pending commission), so a
//! single `transfer` lookup is not enough. Only the sender is checked;
//! non-matching transfers (by recipient) are not expected to appear here
//! but are ignored rather than rejected if they do.

use indexer_domain::chain_context::ChainContext;
use indexer_domain::coin::{parse_coins_normalized, Coin};
use indexer_domain::command::staking::{
    MsgBeginRedelegateParams, MsgCreateValidatorParams, MsgDelegateParams, MsgEditValidatorParams,
    MsgUndelegateParams,
};
use indexer_domain::command::{Cmd, Command};
use indexer_domain::event_log::MessageLog;
use indexer_domain::validator::{ValidatorCommission, ValidatorDescription};
use indexer_domain::{MsgCommonHeader, ParserInvariantError, ParserInvariantKind};
use serde_json::Value;

use crate::util::{coin_field, invariant, string_field};

/// Sums every `transfer` event sent from `from`, in event order. Returns a
/// zero coin in `staking_denom` if there is none — a delegator with no
/// pending reward (or a failed transaction) triggers no transfer at all.
/// An amount a matching event carries but that fails to parse is a parser
/// invariant violation, not an expected absence.
fn sum_auto_claimed_rewards(
    header: &MsgCommonHeader,
    message_log: Option<&MessageLog>,
    from: &str,
    staking_denom: &str,
) -> Result<Coin, ParserInvariantError> {
    let mut total = Coin::zero(staking_denom);
    let Some(log) = message_log else {
        return Ok(total);
    };
    for event in log.events_by_type("transfer") {
        if event.attribute_by_key("sender") != Some(from) {
            continue;
        }
        let raw = event.must_attribute_by_key("amount").map_err(|kind| invariant(header, kind))?;
        let amount = parse_coins_normalized(raw).map_err(|e| {
            invariant(
                header,
                ParserInvariantKind::UnparseableAmount {
                    value: raw.to_string(),
                    reason: e.to_string(),
                },
            )
        })?;
        for coin in amount.0 {
            if coin.denom == total.denom {
                total = total.add(&coin).unwrap_or(total);
            }
        }
    }
    Ok(total)
}

fn validator_description(body: &Value) -> ValidatorDescription {
    let get = |field: &str| -> String {
        body.get("description")
            .and_then(|d| d.get(field))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    ValidatorDescription {
        moniker: get("moniker"),
        identity: get("identity"),
        website: get("website"),
        security_contact: get("securityContact"),
        details: get("details"),
    }
}

pub fn parse_msg_delegate(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
    ctx: &ChainContext,
) -> Result<Vec<Command>, ParserInvariantError> {
    let delegator_address = string_field(header, body, "delegatorAddress")?;
    let validator_address = string_field(header, body, "validatorAddress")?;
    let amount = coin_field(header, body, "amount")?;

    let auto_claimed_rewards = sum_auto_claimed_rewards(
        header,
        message_log,
        &ctx.module_accounts().distribution,
        &ctx.staking_denom,
    )?;

    let params = MsgDelegateParams {
        delegator_address,
        validator_address,
        amount,
        auto_claimed_rewards,
    };
    Ok(vec![Command::CreateMsgDelegate(Cmd::new(header.clone(), params))])
}

pub fn parse_msg_undelegate(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
    ctx: &ChainContext,
) -> Result<Vec<Command>, ParserInvariantError> {
    let delegator_address = string_field(header, body, "delegatorAddress")?;
    let validator_address = string_field(header, body, "validatorAddress")?;
    let amount = coin_field(header, body, "amount")?;

    let auto_claimed_rewards = sum_auto_claimed_rewards(
        header,
        message_log,
        &ctx.module_accounts().distribution,
        &ctx.staking_denom,
    )?;

    let completion_time = if header.tx_success {
        let completion_time_raw = message_log
            .and_then(|log| log.event_by_type("unbond"))
            .ok_or_else(|| {
                invariant(
                    header,
                    ParserInvariantKind::MissingEvent {
                        event_type: "unbond".to_string(),
                    },
                )
            })?
            .must_attribute_by_key("completion_time")
            .map_err(|kind| invariant(header, kind))?;
        let parsed = chrono::DateTime::parse_from_rfc3339(completion_time_raw)
            .map_err(|e| {
                invariant(
                    header,
                    ParserInvariantKind::UnparseableTimestamp {
                        value: completion_time_raw.to_string(),
                        reason: e.to_string(),
                    },
                )
            })?
            .with_timezone(&chrono::Utc);
        Some(parsed)
    } else {
        None
    };

    let params = MsgUndelegateParams {
        delegator_address,
        validator_address,
        completion_time,
        amount,
        auto_claimed_rewards,
    };
    Ok(vec![Command::CreateMsgUndelegate(Cmd::new(header.clone(), params))])
}

pub fn parse_msg_begin_redelegate(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
    ctx: &ChainContext,
) -> Result<Vec<Command>, ParserInvariantError> {
    let delegator_address = string_field(header, body, "delegatorAddress")?;
    let validator_src_address = string_field(header, body, "validatorSrcAddress")?;
    let validator_dst_address = string_field(header, body, "validatorDstAddress")?;
    let amount = coin_field(header, body, "amount")?;

    let auto_claimed_rewards = sum_auto_claimed_rewards(
        header,
        message_log,
        &ctx.module_accounts().distribution,
        &ctx.staking_denom,
    )?;

    let params = MsgBeginRedelegateParams {
        delegator_address,
        validator_src_address,
        validator_dst_address,
        amount,
        auto_claimed_rewards,
    };
    Ok(vec![Command::CreateMsgBeginRedelegate(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_create_validator(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let commission_rate = |field: &str| -> Result<String, ParserInvariantError> {
        body.get("commission")
            .and_then(|c| c.get(field))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                invariant(
                    header,
                    ParserInvariantKind::MalformedMessageField {
                        field: format!("commission.{field}"),
                    },
                )
            })
    };

    let params = MsgCreateValidatorParams {
        description: validator_description(body),
        commission: ValidatorCommission {
            rate: commission_rate("rate")?,
            max_rate: commission_rate("maxRate")?,
            max_change_rate: commission_rate("maxChangeRate")?,
        },
        min_self_delegation: string_field(header, body, "minSelfDelegation")?,
        delegator_address: string_field(header, body, "delegatorAddress")?,
        validator_address: string_field(header, body, "validatorAddress")?,
        tendermint_pubkey: string_field(header, body, "pubkey")?,
        amount: coin_field(header, body, "amount")?,
    };
    Ok(vec![Command::CreateMsgCreateValidator(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_edit_validator(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgEditValidatorParams {
        description: validator_description(body),
        validator_address: string_field(header, body, "validatorAddress")?,
        commission_rate: body
            .get("commissionRate")
            .and_then(Value::as_str)
            .map(str::to_string),
        min_self_delegation: body
            .get("minSelfDelegation")
            .and_then(Value::as_str)
            .map(str::to_string),
    };
    Ok(vec![Command::CreateMsgEditValidator(Cmd::new(
        header.clone(),
        params,
    ))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexer_domain::event_log::ParsedTxsResultLog;
    use num_bigint::BigUint;
    use semver::Version;

    fn header() -> MsgCommonHeader {
        MsgCommonHeader {
            block_height: 1,
            tx_hash: "HASH".to_string(),
            tx_success: true,
            msg_index: 0,
        }
    }

    fn ctx() -> ChainContext {
        ChainContext::new("cro", "basecro", Version::new(0, 43, 0))
    }

    #[test]
    fn delegate_sums_auto_claimed_reward_transfers() {
        let distribution = ctx().module_accounts().distribution;
        let log = ParsedTxsResultLog::parse(&format!(
            r#"[{{"msg_index": 0, "events": [
                {{"type": "transfer", "attributes": [
                    {{"key": "recipient", "value": "cro1d"}},
                    {{"key": "sender", "value": "{distribution}"}},
                    {{"key": "amount", "value": "10basecro"}}
                ]}}
            ]}}]"#
        ))
        .unwrap();
        let message_log = log.message_log(0).unwrap();

        let body = serde_json::json!({
            "delegatorAddress": "cro1d",
            "validatorAddress": "crocncl1v",
            "amount": {"denom": "basecro", "amount": "1000"},
        });
        let commands = parse_msg_delegate(&header(), &body, Some(message_log), &ctx()).unwrap();
        match &commands[0] {
            Command::CreateMsgDelegate(cmd) => {
                assert_eq!(cmd.params.auto_claimed_rewards.amount, BigUint::from(10u32));
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn delegate_with_no_transfer_event_has_zero_auto_claimed_reward() {
        let body = serde_json::json!({
            "delegatorAddress": "cro1d",
            "validatorAddress": "crocncl1v",
            "amount": {"denom": "basecro", "amount": "1000"},
        });
        let commands = parse_msg_delegate(&header(), &body, None, &ctx()).unwrap();
        match &commands[0] {
            Command::CreateMsgDelegate(cmd) => {
                assert!(cmd.params.auto_claimed_rewards.is_zero());
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn delegate_sums_reward_transfer_regardless_of_recipient() {
        let distribution = ctx().module_accounts().distribution;
        let log = ParsedTxsResultLog::parse(&format!(
            r#"[{{"msg_index": 0, "events": [
                {{"type": "transfer", "attributes": [
                    {{"key": "recipient", "value": "cro1someoneelse"}},
                    {{"key": "sender", "value": "{distribution}"}},
                    {{"key": "amount", "value": "10basecro"}}
                ]}}
            ]}}]"#
        ))
        .unwrap();
        let message_log = log.message_log(0).unwrap();

        let body = serde_json::json!({
            "delegatorAddress": "cro1d",
            "validatorAddress": "crocncl1v",
            "amount": {"denom": "basecro", "amount": "1000"},
        });
        let commands = parse_msg_delegate(&header(), &body, Some(message_log), &ctx()).unwrap();
        match &commands[0] {
            Command::CreateMsgDelegate(cmd) => {
                assert_eq!(cmd.params.auto_claimed_rewards.amount, BigUint::from(10u32));
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn delegate_with_unparseable_reward_transfer_amount_is_an_invariant_error() {
        let distribution = ctx().module_accounts().distribution;
        let log = ParsedTxsResultLog::parse(&format!(
            r#"[{{"msg_index": 0, "events": [
                {{"type": "transfer", "attributes": [
                    {{"key": "recipient", "value": "cro1d"}},
                    {{"key": "sender", "value": "{distribution}"}},
                    {{"key": "amount", "value": "not-a-coin"}}
                ]}}
            ]}}]"#
        ))
        .unwrap();
        let message_log = log.message_log(0).unwrap();

        let body = serde_json::json!({
            "delegatorAddress": "cro1d",
            "validatorAddress": "crocncl1v",
            "amount": {"denom": "basecro", "amount": "1000"},
        });
        let err = parse_msg_delegate(&header(), &body, Some(message_log), &ctx()).unwrap_err();
        assert!(matches!(
            err.kind,
            ParserInvariantKind::UnparseableAmount { .. }
        ));
    }
}
