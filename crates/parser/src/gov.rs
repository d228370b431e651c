//! `x/gov` message parsers (§4.5.5, §8 S1).
//!
//! `MsgSubmitProposal` fans out on its decoded `content.@type` into one of
//! five commands sharing every field but `content`. Both it and
//! `MsgDeposit` can additionally synthesize a
//! [`Command::StartProposalVotingPeriod`]: the signal is the *presence* of
//! a `voting_period_start` attribute (its value, not its content, is the
//! proposal id to start) on, respectively, the message's own
//! `submit_proposal` event or one of its `proposal_deposit` events — so the
//! signal is present in the same message's event log rather than requiring
//! any cross-block state.

use indexer_domain::command::gov::{
    MsgDepositParams, MsgSubmitCancelSoftwareUpgradeProposalParams,
    MsgSubmitCommunityPoolSpendProposalParams, MsgSubmitParamChangeProposalParams,
    MsgSubmitSoftwareUpgradeProposalParams, MsgSubmitTextProposalParams, MsgVoteParams,
    ProposalVotingPeriodStartParams,
};
use indexer_domain::command::{Cmd, Command, ProposalVotingPeriodStart};
use indexer_domain::event_log::MessageLog;
use indexer_domain::proposal::{
    self, CancelSoftwareUpgradeContent, CommunityPoolSpendContent, ParameterChangeContent,
    SoftwareUpgradeContent, TextContent,
};
use indexer_domain::{MsgCommonHeader, ParserInvariantError, ParserInvariantKind};
use serde_json::Value;

use crate::util::{coins_field, invariant, string_field};

/// `voting_period_start`'s presence (not its value) on the message's own
/// `submit_proposal` event signals that this proposal's deposit already
/// met the minimum at submission time; the attribute's value is the
/// proposal id to start voting on.
fn voting_period_start_from_submit_proposal_event(
    message_log: Option<&MessageLog>,
) -> Option<String> {
    message_log
        .and_then(|log| log.event_by_type("submit_proposal"))
        .filter(|event| event.has_attribute("voting_period_start"))
        .and_then(|event| event.attribute_by_key("voting_period_start"))
        .map(str::to_string)
}

/// Same signal, sourced from the first `proposal_deposit` event (of
/// possibly several logged for this message) that carries it.
fn voting_period_start_from_proposal_deposit_events(
    message_log: Option<&MessageLog>,
) -> Option<String> {
    message_log
        .into_iter()
        .flat_map(|log| log.events_by_type("proposal_deposit"))
        .find(|event| event.has_attribute("voting_period_start"))
        .and_then(|event| event.attribute_by_key("voting_period_start"))
        .map(str::to_string)
}

fn proposal_id_from_event(
    header: &MsgCommonHeader,
    message_log: Option<&MessageLog>,
) -> Result<String, ParserInvariantError> {
    let event = message_log
        .and_then(|log| log.event_by_type("submit_proposal"))
        .ok_or_else(|| {
            invariant(
                header,
                ParserInvariantKind::MissingEvent {
                    event_type: "submit_proposal".to_string(),
                },
            )
        })?;
    event
        .must_attribute_by_key("proposal_id")
        .map(str::to_string)
        .map_err(|kind| invariant(header, kind))
}

pub fn parse_msg_submit_proposal(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
) -> Result<Vec<Command>, ParserInvariantError> {
    let proposal_id = proposal_id_from_event(header, message_log)?;
    let proposer_address = string_field(header, body, "proposer")?;
    let initial_deposit = coins_field(header, body, "initialDeposit")?;
    let content = body.get("content").ok_or_else(|| {
        invariant(
            header,
            ParserInvariantKind::MalformedMessageField {
                field: "content".to_string(),
            },
        )
    })?;
    let content_type = content
        .get("@type")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            invariant(
                header,
                ParserInvariantKind::MalformedMessageField {
                    field: "content.@type".to_string(),
                },
            )
        })?;

    let mut commands = match content_type {
        proposal::PARAMETER_CHANGE_TYPE_URL => {
            let content: ParameterChangeContent = serde_json::from_value(content.clone())
                .map_err(|e| malformed_content(header, e))?;
            vec![Command::CreateMsgSubmitParamChangeProposal(Cmd::new(
                header.clone(),
                MsgSubmitParamChangeProposalParams {
                    proposal_id: proposal_id.clone(),
                    content,
                    proposer_address,
                    initial_deposit,
                },
            ))]
        }
        proposal::COMMUNITY_POOL_SPEND_TYPE_URL => {
            let content: CommunityPoolSpendContent = serde_json::from_value(content.clone())
                .map_err(|e| malformed_content(header, e))?;
            vec![Command::CreateMsgSubmitCommunityPoolSpendProposal(Cmd::new(
                header.clone(),
                MsgSubmitCommunityPoolSpendProposalParams {
                    proposal_id: proposal_id.clone(),
                    content,
                    proposer_address,
                    initial_deposit,
                },
            ))]
        }
        proposal::SOFTWARE_UPGRADE_TYPE_URL => {
            let content: SoftwareUpgradeContent = serde_json::from_value(content.clone())
                .map_err(|e| malformed_content(header, e))?;
            vec![Command::CreateMsgSubmitSoftwareUpgradeProposal(Cmd::new(
                header.clone(),
                MsgSubmitSoftwareUpgradeProposalParams {
                    proposal_id: proposal_id.clone(),
                    content,
                    proposer_address,
                    initial_deposit,
                },
            ))]
        }
        proposal::CANCEL_SOFTWARE_UPGRADE_TYPE_URL => {
            let content: CancelSoftwareUpgradeContent = serde_json::from_value(content.clone())
                .map_err(|e| malformed_content(header, e))?;
            vec![Command::CreateMsgSubmitCancelSoftwareUpgradeProposal(Cmd::new(
                header.clone(),
                MsgSubmitCancelSoftwareUpgradeProposalParams {
                    proposal_id: proposal_id.clone(),
                    content,
                    proposer_address,
                    initial_deposit,
                },
            ))]
        }
        proposal::TEXT_PROPOSAL_TYPE_URL => {
            let content: TextContent = serde_json::from_value(content.clone())
                .map_err(|e| malformed_content(header, e))?;
            vec![Command::CreateMsgSubmitTextProposal(Cmd::new(
                header.clone(),
                MsgSubmitTextProposalParams {
                    proposal_id: proposal_id.clone(),
                    content,
                    proposer_address,
                    initial_deposit,
                },
            ))]
        }
        other => {
            return Err(invariant(
                header,
                ParserInvariantKind::UnknownProposalContent {
                    content_type: other.to_string(),
                },
            ))
        }
    };

    if let Some(proposal_id) = voting_period_start_from_submit_proposal_event(message_log) {
        commands.push(Command::StartProposalVotingPeriod(
            ProposalVotingPeriodStart::new(
                header.block_height,
                ProposalVotingPeriodStartParams { proposal_id },
            ),
        ));
    }

    Ok(commands)
}

fn malformed_content(header: &MsgCommonHeader, error: serde_json::Error) -> ParserInvariantError {
    invariant(
        header,
        ParserInvariantKind::MalformedMessageField {
            field: format!("content: {error}"),
        },
    )
}

pub fn parse_msg_vote(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<Vec<Command>, ParserInvariantError> {
    let params = MsgVoteParams {
        proposal_id: proposal_id_field(header, body)?,
        voter: string_field(header, body, "voter")?,
        option: string_field(header, body, "option")?.to_string(),
    };
    Ok(vec![Command::CreateMsgVote(Cmd::new(header.clone(), params))])
}

pub fn parse_msg_deposit(
    header: &MsgCommonHeader,
    body: &Value,
    message_log: Option<&MessageLog>,
) -> Result<Vec<Command>, ParserInvariantError> {
    let proposal_id = proposal_id_field(header, body)?;
    let params = MsgDepositParams {
        proposal_id: proposal_id.clone(),
        depositor: string_field(header, body, "depositor")?,
        amount: coins_field(header, body, "amount")?,
    };
    let mut commands = vec![Command::CreateMsgDeposit(Cmd::new(header.clone(), params))];

    if let Some(proposal_id) = voting_period_start_from_proposal_deposit_events(message_log) {
        commands.push(Command::StartProposalVotingPeriod(
            ProposalVotingPeriodStart::new(
                header.block_height,
                ProposalVotingPeriodStartParams { proposal_id },
            ),
        ));
    }

    Ok(commands)
}

fn proposal_id_field(
    header: &MsgCommonHeader,
    body: &Value,
) -> Result<String, ParserInvariantError> {
    match body.get("proposalId") {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(invariant(
            header,
            ParserInvariantKind::MalformedMessageField {
                field: "proposalId".to_string(),
            },
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexer_domain::event_log::ParsedTxsResultLog;

    fn header() -> MsgCommonHeader {
        MsgCommonHeader {
            block_height: 1,
            tx_hash: "HASH".to_string(),
            tx_success: true,
            msg_index: 0,
        }
    }

    #[test]
    fn deposit_crossing_threshold_emits_voting_period_start() {
        let log = ParsedTxsResultLog::parse(
            r#"[{"msg_index": 0, "events": [
                {"type": "proposal_deposit", "attributes": [
                    {"key": "voting_period_start", "value": "1"}
                ]}
            ]}]"#,
        )
        .unwrap();
        let message_log = log.message_log(0).unwrap();

        let body = serde_json::json!({
            "proposalId": "1",
            "depositor": "cro1a",
            "amount": [{"denom": "basecro", "amount": "1000000"}],
        });
        let commands = parse_msg_deposit(&header(), &body, Some(message_log)).unwrap();
        assert_eq!(commands.len(), 2);
        match &commands[1] {
            Command::StartProposalVotingPeriod(cmd) => {
                assert_eq!(cmd.params.proposal_id, "1");
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn deposit_below_threshold_emits_only_deposit_command() {
        let body = serde_json::json!({
            "proposalId": "7",
            "depositor": "cro1a",
            "amount": [{"denom": "basecro", "amount": "1"}],
        });
        let commands = parse_msg_deposit(&header(), &body, None).unwrap();
        assert_eq!(commands.len(), 1);
    }
}
