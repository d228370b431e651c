//! `x/staking` message parameters (§4.5.4).
//!
//! `MsgDelegate`, `MsgUndelegate` and `MsgBeginRedelegate` each implicitly
//! withdraw (and re-delegate) the delegator's outstanding reward on the
//! source validator first; `autoClaimedRewards` recovers that amount by
//! summing the `transfer` events from the distribution module account to
//! the delegator in the same message's event log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coin::Coin;
use crate::validator::{ValidatorCommission, ValidatorDescription};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgDelegateParams {
    pub delegator_address: String,
    pub validator_address: String,
    pub amount: Coin,
    pub auto_claimed_rewards: Coin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgUndelegateParams {
    pub delegator_address: String,
    pub validator_address: String,
    pub completion_time: Option<DateTime<Utc>>,
    pub amount: Coin,
    pub auto_claimed_rewards: Coin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgBeginRedelegateParams {
    pub delegator_address: String,
    pub validator_src_address: String,
    pub validator_dst_address: String,
    pub amount: Coin,
    pub auto_claimed_rewards: Coin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgCreateValidatorParams {
    pub description: ValidatorDescription,
    pub commission: ValidatorCommission,
    pub min_self_delegation: String,
    pub delegator_address: String,
    pub validator_address: String,
    pub tendermint_pubkey: String,
    pub amount: Coin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgEditValidatorParams {
    pub description: ValidatorDescription,
    pub validator_address: String,
    pub commission_rate: Option<String>,
    pub min_self_delegation: Option<String>,
}
