//! `x/distribution` message parameters (§4.5.3).
//!
//! `MsgWithdrawDelegatorReward` and `MsgWithdrawValidatorCommission` recover
//! `recipientAddress`/`amount` by cross-referencing the post-execution
//! `transfer` event rather than the message body, which carries neither: a
//! failed transaction or a zero-reward withdrawal emits no `transfer` event,
//! in which case `recipientAddress` falls back to the delegator/validator
//! address and `amount` is the empty [`Coins`].

use serde::{Deserialize, Serialize};

use crate::coin::Coins;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSetWithdrawAddressParams {
    pub delegator_address: String,
    pub withdraw_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgWithdrawDelegatorRewardParams {
    pub delegator_address: String,
    pub validator_address: String,
    pub recipient_address: String,
    pub amount: Coins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgWithdrawValidatorCommissionParams {
    pub validator_address: String,
    pub recipient_address: String,
    pub amount: Coins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgFundCommunityPoolParams {
    pub depositor: String,
    pub amount: Coins,
}
