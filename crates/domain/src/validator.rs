//! Shared validator sub-objects for `MsgCreateValidator` / `MsgEditValidator`
//! / the genesis gen-tx path (§4.5.6).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorDescription {
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub security_contact: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorCommission {
    pub rate: String,
    pub max_rate: String,
    pub max_change_rate: String,
}
