//! `x/gov` message parameters (§4.5.5).
//!
//! `MsgSubmitProposal` fans out into one of five `MsgSubmit*Proposal`
//! commands depending on `content.@type`; all five share every field except
//! `content`, whose shape is the discriminant.

use serde::{Deserialize, Serialize};

use crate::coin::Coins;
use crate::proposal::{
    CancelSoftwareUpgradeContent, CommunityPoolSpendContent, ParameterChangeContent,
    SoftwareUpgradeContent, TextContent,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSubmitParamChangeProposalParams {
    pub proposal_id: String,
    pub content: ParameterChangeContent,
    pub proposer_address: String,
    pub initial_deposit: Coins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSubmitCommunityPoolSpendProposalParams {
    pub proposal_id: String,
    pub content: CommunityPoolSpendContent,
    pub proposer_address: String,
    pub initial_deposit: Coins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSubmitSoftwareUpgradeProposalParams {
    pub proposal_id: String,
    pub content: SoftwareUpgradeContent,
    pub proposer_address: String,
    pub initial_deposit: Coins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSubmitCancelSoftwareUpgradeProposalParams {
    pub proposal_id: String,
    pub content: CancelSoftwareUpgradeContent,
    pub proposer_address: String,
    pub initial_deposit: Coins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSubmitTextProposalParams {
    pub proposal_id: String,
    pub content: TextContent,
    pub proposer_address: String,
    pub initial_deposit: Coins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgVoteParams {
    pub proposal_id: String,
    pub voter: String,
    pub option: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgDepositParams {
    pub proposal_id: String,
    pub depositor: String,
    pub amount: Coins,
}

/// Synthesized once a proposal's deposit total first crosses the chain's
/// minimum deposit (§4.5.5, §8 S1). Carries no transaction context: it is
/// derived purely from accumulated deposit state, not from a single message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalVotingPeriodStartParams {
    pub proposal_id: String,
}
