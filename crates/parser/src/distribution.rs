//! `x/distribution` message parsers (§4.5.3).
//!
//! `MsgWithdrawDelegatorReward` and `MsgWithdrawValidatorCommission` carry
//! neither the recipient nor the amount actually transferred — both are
//! recovered from the message's `transfer` event. A failed transaction, or
//! a reward/commission of exactly zero, emits no `transfer` event; in that
//! case the amount falls back to the empty [`Coins`], and the recipient
//! falls back to the delegator address for a reward, or the empty string
//! for a commission (the message carries no delegator to fall back to).

use indexer_domain::coin::{parse_coins_normalized, Coins};
use indexer_domain::command::distribution::{
    MsgFundCommunityPoolParams, MsgSetWithdrawAddressParams, MsgWithdrawDelegatorRewardParams,
    MsgWithdrawValidatorCommissionParams,
};
use indexer_domain::command::{Cmd, Command};
use indexer_domain::event_log::MessageLog;
use indexer_domain::{MsgCommonHeader, ParserInvariantError, ParserInvariantKind};
use serde_json::Value;

use crate::util::{coins_field, invariant, string_field};

/// The amount and recipient actually transferred to `fallback_recipient`,
/// recovered from the message's `transfer` event if one exists. An amount
/// the event carries but that fails to parse is a parser invariant
/// violation, not an expected absence.
fn transfer_outcome(
    header: &MsgCommonHeader,
    message_log: Option<&MessageLog>,
    fallback_recipient: &str,
) -> Result<(String, Coins), ParserInvariantError> {
    let transfer = message_log.and_then(|log| log.event_by_type("transfer"));
    match transfer {
        Some(event) => {
            let recipient = event
                .attribute_by_key("recipient")
                .unwrap_or(fallback_recipient)
                .to_string();
            let amount = match event.attribute_by_key("amount") {
                Some(raw) => parse_coins_normalized(raw).map_err(|e| {
                    invariant(
                        header,
                        ParserInvariantKind::UnparseableAmount {
                            value: raw.to_string(),
                            reason: e.to_string(),
                        },
                    )
                })?,
                None => Coins::empty(),
            };
            Ok((recipient, amount))
        }
        None => Ok((fallback_recipient.to_string(), Coins::empty())),
    }
}

pub fn parse_msg_set_withdraw_address(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgSetWithdrawAddressParams {
        delegator_address: string_field(header, body, "delegatorAddress")?,
        withdraw_address: string_field(header, body, "withdrawAddress")?,
    };
    Ok(vec![Command::CreateMsgSetWithdrawAddress(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_withdraw_delegator_reward(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
) -> Result<Vec<Command>, ParserInvariantError> {
    let delegator_address = string_field(header, body, "delegatorAddress")?;
    let validator_address = string_field(header, body, "validatorAddress")?;
    let (recipient_address, amount) = transfer_outcome(header, message_log, &delegator_address)?;

    let params = MsgWithdrawDelegatorRewardParams {
        delegator_address,
        validator_address,
        recipient_address,
        amount,
    };
    Ok(vec![Command::CreateMsgWithdrawDelegatorReward(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_withdraw_validator_commission(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
) -> Result<Vec<Command>, ParserInvariantError> {
    let validator_address = string_field(header, body, "validatorAddress")?;
    // The message carries no delegator address to fall back to: absent a
    // `transfer` event, the recipient is the empty string.
    let (recipient_address, amount) = transfer_outcome(header, message_log, "")?;

    let params = MsgWithdrawValidatorCommissionParams {
        validator_address,
        recipient_address,
        amount,
    };
    Ok(vec![Command::CreateMsgWithdrawValidatorCommission(Cmd::new(
        header.clone(),
        params,
    ))])
}

pub fn parse_msg_fund_community_pool(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgFundCommunityPoolParams {
        depositor: string_field(header, body, "depositor")?,
        amount: coins_field(header, body, "amount")?,
    };
    Ok(vec![Command::CreateMsgFundCommunityPool(Cmd::new(
        header.clone(),
        params,
    ))])
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
    fn withdraw_reward_without_transfer_event_falls_back_to_delegator() {
        let body = serde_json::json!({
            "delegatorAddress": "cro1d",
            "validatorAddress": "crocncl1v",
        });
        let commands = parse_msg_withdraw_delegator_reward(&header(), &body, None).unwrap();
        match &commands[0] {
            Command::CreateMsgWithdrawDelegatorReward(cmd) => {
                assert_eq!(cmd.params.recipient_address, "cro1d");
                assert!(cmd.params.amount.is_empty());
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn withdraw_commission_without_transfer_event_falls_back_to_empty_recipient() {
        let body = serde_json::json!({"validatorAddress": "crocncl1v"});
        let commands = parse_msg_withdraw_validator_commission(&header(), &body, None).unwrap();
        match &commands[0] {
            Command::CreateMsgWithdrawValidatorCommission(cmd) => {
                assert_eq!(cmd.params.recipient_address, "");
                assert!(cmd.params.amount.is_empty());
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn withdraw_reward_with_unparseable_transfer_amount_is_an_invariant_error() {
        use indexer_domain::event_log::ParsedTxsResultLog;

        let log = ParsedTxsResultLog::parse(
            r#"[{"msg_index": 0, "events": [
                {"type": "transfer", "attributes": [
                    {"key": "recipient", "value": "cro1d"},
                    {"key": "amount", "value": "not-a-coin"}
                ]}
            ]}]"#,
        )
        .unwrap();
        let message_log = log.message_log(0).unwrap();

        let body = serde_json::json!({
            "delegatorAddress": "cro1d",
            "validatorAddress": "crocncl1v",
        });
        let err = parse_msg_withdraw_delegator_reward(&header(), &body, Some(message_log))
            .unwrap_err();
        assert!(matches!(
            err.kind,
            ParserInvariantKind::UnparseableAmount { .. }
        ));
    }
}
