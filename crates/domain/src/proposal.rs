//! Governance proposal content types.
//!
//! `MsgSubmitProposal` carries a `content` field whose `@type` selects one
//! of these five shapes (§4.5.5). The dispatcher parses `content` once into
//! the matching struct below and embeds it directly in the resulting
//! command; any other `@type` is a [`crate::ParserInvariantKind::UnknownProposalContent`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coin::Coins;

pub const PARAMETER_CHANGE_TYPE_URL: &str = "/cosmos.params.v1beta1.ParameterChangeProposal";
pub const COMMUNITY_POOL_SPEND_TYPE_URL: &str =
    "/cosmos.distribution.v1beta1.CommunityPoolSpendProposal";
pub const SOFTWARE_UPGRADE_TYPE_URL: &str = "/cosmos.upgrade.v1beta1.SoftwareUpgradeProposal";
pub const CANCEL_SOFTWARE_UPGRADE_TYPE_URL: &str =
    "/cosmos.upgrade.v1beta1.CancelSoftwareUpgradeProposal";
pub const TEXT_PROPOSAL_TYPE_URL: &str = "/cosmos.gov.v1beta1.TextProposal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamChange {
    pub subspace: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterChangeContent {
    pub title: String,
    pub description: String,
    pub changes: Vec<ParamChange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPoolSpendContent {
    pub title: String,
    pub description: String,
    pub recipient: String,
    pub amount: Coins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareUpgradePlan {
    pub name: String,
    pub time: DateTime<Utc>,
    pub height: i64,
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareUpgradeContent {
    pub title: String,
    pub description: String,
    pub plan: SoftwareUpgradePlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelSoftwareUpgradeContent {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub title: String,
    pub description: String,
}
