//! Genesis-only commands (§4.5.7): the chain's initial validator set arrives
//! as `gentx` messages embedded in the genesis file rather than as ordinary
//! block transactions, so `CreateGenesisValidator` carries no
//! [`crate::header::MsgCommonHeader`] — there is no block height or
//! transaction hash to attach it to.

use serde::{Deserialize, Serialize};

use crate::coin::Coin;
use crate::validator::{ValidatorCommission, ValidatorDescription};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ValidatorStatus {
    Bonded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGenesisValidatorParams {
    pub status: ValidatorStatus,
    pub jailed: bool,
    pub description: ValidatorDescription,
    pub commission: ValidatorCommission,
    pub min_self_delegation: String,
    pub delegator_address: String,
    pub validator_address: String,
    pub tendermint_pubkey: String,
    pub amount: Coin,
}
