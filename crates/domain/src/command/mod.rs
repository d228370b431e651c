//! The command model: the typed, serializable output of the message
//! parser (§4.5, §4.6, §8).
//!
//! Every ordinary (non-genesis) command pairs a [`MsgCommonHeader`] with a
//! params struct specific to its message type, wrapped in [`Cmd`]. [`Cmd`]
//! carries no behavior of its own beyond [`Cmd::exec`] — serializing itself
//! to the wire shape `{name, version, height, uuid, msgName, txHash,
//! msgIndex, params}` — so the ~40 concrete command variants differ only in
//! which params type they wrap. [`CommandKind`] supplies the two constants
//! (`MSG_NAME`, `EVENT_NAME`) that distinguish them, leaving `Cmd<P>::exec`
//! to do the actual work once for all of them.
//!
//! `ProposalVotingPeriodStart` and `CreateGenesisValidator` are the two
//! exceptions: the former is derived from accumulated deposit state rather
//! than a single message, the latter from a genesis `gentx` rather than a
//! block transaction, so neither carries a `MsgCommonHeader`.

pub mod bank;
pub mod distribution;
pub mod genesis;
pub mod gov;
pub mod ibc;
pub mod nft;
pub mod slashing;
pub mod staking;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::header::MsgCommonHeader;

/// The static identity of one command variant's params type.
pub trait CommandKind {
    const MSG_NAME: &'static str;
    const EVENT_NAME: &'static str;
    const VERSION: u32 = 1;
}

macro_rules! impl_command_kind {
    ($ty:path, $msg_name:expr, $event_name:expr) => {
        impl CommandKind for $ty {
            const MSG_NAME: &'static str = $msg_name;
            const EVENT_NAME: &'static str = $event_name;
        }
    };
}

impl_command_kind!(bank::MsgSendParams, "MsgSend", "MsgSendCreated");
impl_command_kind!(bank::MsgMultiSendParams, "MsgMultiSend", "MsgMultiSendCreated");

impl_command_kind!(
    distribution::MsgSetWithdrawAddressParams,
    "MsgSetWithdrawAddress",
    "MsgSetWithdrawAddressCreated"
);
impl_command_kind!(
    distribution::MsgWithdrawDelegatorRewardParams,
    "MsgWithdrawDelegatorReward",
    "MsgWithdrawDelegatorRewardCreated"
);
impl_command_kind!(
    distribution::MsgWithdrawValidatorCommissionParams,
    "MsgWithdrawValidatorCommission",
    "MsgWithdrawValidatorCommissionCreated"
);
impl_command_kind!(
    distribution::MsgFundCommunityPoolParams,
    "MsgFundCommunityPool",
    "MsgFundCommunityPoolCreated"
);

impl_command_kind!(
    gov::MsgSubmitParamChangeProposalParams,
    "MsgSubmitProposal",
    "MsgSubmitParamChangeProposalCreated"
);
impl_command_kind!(
    gov::MsgSubmitCommunityPoolSpendProposalParams,
    "MsgSubmitProposal",
    "MsgSubmitCommunityPoolSpendProposalCreated"
);
impl_command_kind!(
    gov::MsgSubmitSoftwareUpgradeProposalParams,
    "MsgSubmitProposal",
    "MsgSubmitSoftwareUpgradeProposalCreated"
);
impl_command_kind!(
    gov::MsgSubmitCancelSoftwareUpgradeProposalParams,
    "MsgSubmitProposal",
    "MsgSubmitCancelSoftwareUpgradeProposalCreated"
);
impl_command_kind!(
    gov::MsgSubmitTextProposalParams,
    "MsgSubmitProposal",
    "MsgSubmitTextProposalCreated"
);
impl_command_kind!(gov::MsgVoteParams, "MsgVote", "MsgVoteCreated");
impl_command_kind!(gov::MsgDepositParams, "MsgDeposit", "MsgDepositCreated");

impl_command_kind!(staking::MsgDelegateParams, "MsgDelegate", "MsgDelegateCreated");
impl_command_kind!(staking::MsgUndelegateParams, "MsgUndelegate", "MsgUndelegateCreated");
impl_command_kind!(
    staking::MsgBeginRedelegateParams,
    "MsgBeginRedelegate",
    "MsgBeginRedelegateCreated"
);
impl_command_kind!(
    staking::MsgCreateValidatorParams,
    "MsgCreateValidator",
    "MsgCreateValidatorCreated"
);
impl_command_kind!(
    staking::MsgEditValidatorParams,
    "MsgEditValidator",
    "MsgEditValidatorCreated"
);

impl_command_kind!(slashing::MsgUnjailParams, "MsgUnjail", "MsgUnjailCreated");

impl_command_kind!(nft::MsgIssueDenomParams, "MsgIssueDenom", "MsgIssueDenomCreated");
impl_command_kind!(nft::MsgMintNftParams, "MsgMintNFT", "MsgMintNFTCreated");
impl_command_kind!(nft::MsgTransferNftParams, "MsgTransferNFT", "MsgTransferNFTCreated");
impl_command_kind!(nft::MsgEditNftParams, "MsgEditNFT", "MsgEditNFTCreated");
impl_command_kind!(nft::MsgBurnNftParams, "MsgBurnNFT", "MsgBurnNFTCreated");

impl_command_kind!(ibc::MsgCreateClientParams, "MsgCreateClient", "MsgCreateClientCreated");
impl_command_kind!(ibc::MsgUpdateClientParams, "MsgUpdateClient", "MsgUpdateClientCreated");
impl_command_kind!(
    ibc::MsgConnectionOpenInitParams,
    "MsgConnectionOpenInit",
    "MsgConnectionOpenInitCreated"
);
impl_command_kind!(
    ibc::MsgConnectionOpenTryParams,
    "MsgConnectionOpenTry",
    "MsgConnectionOpenTryCreated"
);
impl_command_kind!(
    ibc::MsgConnectionOpenAckParams,
    "MsgConnectionOpenAck",
    "MsgConnectionOpenAckCreated"
);
impl_command_kind!(
    ibc::MsgConnectionOpenConfirmParams,
    "MsgConnectionOpenConfirm",
    "MsgConnectionOpenConfirmCreated"
);
impl_command_kind!(
    ibc::MsgChannelOpenInitParams,
    "MsgChannelOpenInit",
    "MsgChannelOpenInitCreated"
);
impl_command_kind!(
    ibc::MsgChannelOpenTryParams,
    "MsgChannelOpenTry",
    "MsgChannelOpenTryCreated"
);
impl_command_kind!(
    ibc::MsgChannelOpenAckParams,
    "MsgChannelOpenAck",
    "MsgChannelOpenAckCreated"
);
impl_command_kind!(
    ibc::MsgChannelOpenConfirmParams,
    "MsgChannelOpenConfirm",
    "MsgChannelOpenConfirmCreated"
);
impl_command_kind!(ibc::MsgTransferParams, "MsgTransfer", "MsgTransferCreated");
impl_command_kind!(ibc::MsgRecvPacketParams, "MsgRecvPacket", "MsgRecvPacketCreated");
impl_command_kind!(
    ibc::MsgAcknowledgementParams,
    "MsgAcknowledgement",
    "MsgAcknowledgementCreated"
);
impl_command_kind!(ibc::MsgTimeoutParams, "MsgTimeout", "MsgTimeoutCreated");
impl_command_kind!(
    ibc::MsgTimeoutOnCloseParams,
    "MsgTimeoutOnClose",
    "MsgTimeoutOnCloseCreated"
);

/// A command produced from one transaction message: a header (block
/// height, tx hash/success, message index) plus the message-specific
/// params.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cmd<P> {
    pub header: MsgCommonHeader,
    pub uuid: Uuid,
    pub params: P,
}

impl<P> Cmd<P> {
    pub fn new(header: MsgCommonHeader, params: P) -> Self {
        Self {
            header,
            uuid: Uuid::new_v4(),
            params,
        }
    }
}

impl<P> Cmd<P>
where
    P: CommandKind + Serialize,
{
    pub fn msg_name(&self) -> &'static str {
        P::MSG_NAME
    }

    pub fn event_name(&self) -> &'static str {
        P::EVENT_NAME
    }

    /// The wire shape emitted to downstream consumers (§8 S4).
    pub fn exec(&self) -> serde_json::Value {
        serde_json::json!({
            "name": P::EVENT_NAME,
            "version": P::VERSION,
            "height": self.header.block_height,
            "uuid": self.uuid.to_string(),
            "msgName": P::MSG_NAME,
            "txHash": self.header.tx_hash,
            "msgIndex": self.header.msg_index,
            "params": self.params,
        })
    }
}

/// Synthesized when a proposal's accumulated deposit first crosses the
/// chain's minimum deposit threshold, not parsed from any single message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalVotingPeriodStart {
    pub uuid: Uuid,
    pub block_height: i64,
    pub params: gov::ProposalVotingPeriodStartParams,
}

impl ProposalVotingPeriodStart {
    pub fn new(block_height: i64, params: gov::ProposalVotingPeriodStartParams) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            block_height,
            params,
        }
    }

    pub fn exec(&self) -> serde_json::Value {
        serde_json::json!({
            "name": "ProposalVotingPeriodStarted",
            "version": 1,
            "height": self.block_height,
            "uuid": self.uuid.to_string(),
            "params": self.params,
        })
    }
}

/// Parsed from a genesis `gentx`, not a block transaction: carries no
/// height, hash or message index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenesisValidator {
    pub uuid: Uuid,
    pub params: genesis::CreateGenesisValidatorParams,
}

impl GenesisValidator {
    pub fn new(params: genesis::CreateGenesisValidatorParams) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            params,
        }
    }

    pub fn exec(&self) -> serde_json::Value {
        serde_json::json!({
            "name": "GenesisValidatorCreated",
            "version": 1,
            "uuid": self.uuid.to_string(),
            "params": self.params,
        })
    }
}

/// The ~40 concrete command variants the parser can produce from one
/// block (§4.5, §4.6), plus the two header-less variants derived from
/// aggregate state rather than a single message.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateMsgSend(Cmd<bank::MsgSendParams>),
    CreateMsgMultiSend(Cmd<bank::MsgMultiSendParams>),

    CreateMsgSetWithdrawAddress(Cmd<distribution::MsgSetWithdrawAddressParams>),
    CreateMsgWithdrawDelegatorReward(Cmd<distribution::MsgWithdrawDelegatorRewardParams>),
    CreateMsgWithdrawValidatorCommission(Cmd<distribution::MsgWithdrawValidatorCommissionParams>),
    CreateMsgFundCommunityPool(Cmd<distribution::MsgFundCommunityPoolParams>),

    CreateMsgSubmitParamChangeProposal(Cmd<gov::MsgSubmitParamChangeProposalParams>),
    CreateMsgSubmitCommunityPoolSpendProposal(
        Cmd<gov::MsgSubmitCommunityPoolSpendProposalParams>,
    ),
    CreateMsgSubmitSoftwareUpgradeProposal(Cmd<gov::MsgSubmitSoftwareUpgradeProposalParams>),
    CreateMsgSubmitCancelSoftwareUpgradeProposal(
        Cmd<gov::MsgSubmitCancelSoftwareUpgradeProposalParams>,
    ),
    CreateMsgSubmitTextProposal(Cmd<gov::MsgSubmitTextProposalParams>),
    CreateMsgVote(Cmd<gov::MsgVoteParams>),
    CreateMsgDeposit(Cmd<gov::MsgDepositParams>),

    CreateMsgDelegate(Cmd<staking::MsgDelegateParams>),
    CreateMsgUndelegate(Cmd<staking::MsgUndelegateParams>),
    CreateMsgBeginRedelegate(Cmd<staking::MsgBeginRedelegateParams>),
    CreateMsgCreateValidator(Cmd<staking::MsgCreateValidatorParams>),
    CreateMsgEditValidator(Cmd<staking::MsgEditValidatorParams>),

    CreateMsgUnjail(Cmd<slashing::MsgUnjailParams>),

    CreateMsgIssueDenom(Cmd<nft::MsgIssueDenomParams>),
    CreateMsgMintNft(Cmd<nft::MsgMintNftParams>),
    CreateMsgTransferNft(Cmd<nft::MsgTransferNftParams>),
    CreateMsgEditNft(Cmd<nft::MsgEditNftParams>),
    CreateMsgBurnNft(Cmd<nft::MsgBurnNftParams>),

    CreateMsgCreateClient(Cmd<ibc::MsgCreateClientParams>),
    CreateMsgUpdateClient(Cmd<ibc::MsgUpdateClientParams>),
    CreateMsgConnectionOpenInit(Cmd<ibc::MsgConnectionOpenInitParams>),
    CreateMsgConnectionOpenTry(Cmd<ibc::MsgConnectionOpenTryParams>),
    CreateMsgConnectionOpenAck(Cmd<ibc::MsgConnectionOpenAckParams>),
    CreateMsgConnectionOpenConfirm(Cmd<ibc::MsgConnectionOpenConfirmParams>),
    CreateMsgChannelOpenInit(Cmd<ibc::MsgChannelOpenInitParams>),
    CreateMsgChannelOpenTry(Cmd<ibc::MsgChannelOpenTryParams>),
    CreateMsgChannelOpenAck(Cmd<ibc::MsgChannelOpenAckParams>),
    CreateMsgChannelOpenConfirm(Cmd<ibc::MsgChannelOpenConfirmParams>),
    CreateMsgTransfer(Cmd<ibc::MsgTransferParams>),
    CreateMsgRecvPacket(Cmd<ibc::MsgRecvPacketParams>),
    CreateMsgAcknowledgement(Cmd<ibc::MsgAcknowledgementParams>),
    CreateMsgTimeout(Cmd<ibc::MsgTimeoutParams>),
    CreateMsgTimeoutOnClose(Cmd<ibc::MsgTimeoutOnCloseParams>),

    StartProposalVotingPeriod(ProposalVotingPeriodStart),
    CreateGenesisValidator(GenesisValidator),
}

impl Command {
    /// The `MsgCommonHeader` carried by every variant but the two derived
    /// from aggregate/genesis state.
    pub fn header(&self) -> Option<&MsgCommonHeader> {
        match self {
            Command::CreateMsgSend(c) => Some(&c.header),
            Command::CreateMsgMultiSend(c) => Some(&c.header),
            Command::CreateMsgSetWithdrawAddress(c) => Some(&c.header),
            Command::CreateMsgWithdrawDelegatorReward(c) => Some(&c.header),
            Command::CreateMsgWithdrawValidatorCommission(c) => Some(&c.header),
            Command::CreateMsgFundCommunityPool(c) => Some(&c.header),
            Command::CreateMsgSubmitParamChangeProposal(c) => Some(&c.header),
            Command::CreateMsgSubmitCommunityPoolSpendProposal(c) => Some(&c.header),
            Command::CreateMsgSubmitSoftwareUpgradeProposal(c) => Some(&c.header),
            Command::CreateMsgSubmitCancelSoftwareUpgradeProposal(c) => Some(&c.header),
            Command::CreateMsgSubmitTextProposal(c) => Some(&c.header),
            Command::CreateMsgVote(c) => Some(&c.header),
            Command::CreateMsgDeposit(c) => Some(&c.header),
            Command::CreateMsgDelegate(c) => Some(&c.header),
            Command::CreateMsgUndelegate(c) => Some(&c.header),
            Command::CreateMsgBeginRedelegate(c) => Some(&c.header),
            Command::CreateMsgCreateValidator(c) => Some(&c.header),
            Command::CreateMsgEditValidator(c) => Some(&c.header),
            Command::CreateMsgUnjail(c) => Some(&c.header),
            Command::CreateMsgIssueDenom(c) => Some(&c.header),
            Command::CreateMsgMintNft(c) => Some(&c.header),
            Command::CreateMsgTransferNft(c) => Some(&c.header),
            Command::CreateMsgEditNft(c) => Some(&c.header),
            Command::CreateMsgBurnNft(c) => Some(&c.header),
            Command::CreateMsgCreateClient(c) => Some(&c.header),
            Command::CreateMsgUpdateClient(c) => Some(&c.header),
            Command::CreateMsgConnectionOpenInit(c) => Some(&c.header),
            Command::CreateMsgConnectionOpenTry(c) => Some(&c.header),
            Command::CreateMsgConnectionOpenAck(c) => Some(&c.header),
            Command::CreateMsgConnectionOpenConfirm(c) => Some(&c.header),
            Command::CreateMsgChannelOpenInit(c) => Some(&c.header),
            Command::CreateMsgChannelOpenTry(c) => Some(&c.header),
            Command::CreateMsgChannelOpenAck(c) => Some(&c.header),
            Command::CreateMsgChannelOpenConfirm(c) => Some(&c.header),
            Command::CreateMsgTransfer(c) => Some(&c.header),
            Command::CreateMsgRecvPacket(c) => Some(&c.header),
            Command::CreateMsgAcknowledgement(c) => Some(&c.header),
            Command::CreateMsgTimeout(c) => Some(&c.header),
            Command::CreateMsgTimeoutOnClose(c) => Some(&c.header),
            Command::StartProposalVotingPeriod(_) | Command::CreateGenesisValidator(_) => None,
        }
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            Command::CreateMsgSend(c) => c.event_name(),
            Command::CreateMsgMultiSend(c) => c.event_name(),
            Command::CreateMsgSetWithdrawAddress(c) => c.event_name(),
            Command::CreateMsgWithdrawDelegatorReward(c) => c.event_name(),
            Command::CreateMsgWithdrawValidatorCommission(c) => c.event_name(),
            Command::CreateMsgFundCommunityPool(c) => c.event_name(),
            Command::CreateMsgSubmitParamChangeProposal(c) => c.event_name(),
            Command::CreateMsgSubmitCommunityPoolSpendProposal(c) => c.event_name(),
            Command::CreateMsgSubmitSoftwareUpgradeProposal(c) => c.event_name(),
            Command::CreateMsgSubmitCancelSoftwareUpgradeProposal(c) => c.event_name(),
            Command::CreateMsgSubmitTextProposal(c) => c.event_name(),
            Command::CreateMsgVote(c) => c.event_name(),
            Command::CreateMsgDeposit(c) => c.event_name(),
            Command::CreateMsgDelegate(c) => c.event_name(),
            Command::CreateMsgUndelegate(c) => c.event_name(),
            Command::CreateMsgBeginRedelegate(c) => c.event_name(),
            Command::CreateMsgCreateValidator(c) => c.event_name(),
            Command::CreateMsgEditValidator(c) => c.event_name(),
            Command::CreateMsgUnjail(c) => c.event_name(),
            Command::CreateMsgIssueDenom(c) => c.event_name(),
            Command::CreateMsgMintNft(c) => c.event_name(),
            Command::CreateMsgTransferNft(c) => c.event_name(),
            Command::CreateMsgEditNft(c) => c.event_name(),
            Command::CreateMsgBurnNft(c) => c.event_name(),
            Command::CreateMsgCreateClient(c) => c.event_name(),
            Command::CreateMsgUpdateClient(c) => c.event_name(),
            Command::CreateMsgConnectionOpenInit(c) => c.event_name(),
            Command::CreateMsgConnectionOpenTry(c) => c.event_name(),
            Command::CreateMsgConnectionOpenAck(c) => c.event_name(),
            Command::CreateMsgConnectionOpenConfirm(c) => c.event_name(),
            Command::CreateMsgChannelOpenInit(c) => c.event_name(),
            Command::CreateMsgChannelOpenTry(c) => c.event_name(),
            Command::CreateMsgChannelOpenAck(c) => c.event_name(),
            Command::CreateMsgChannelOpenConfirm(c) => c.event_name(),
            Command::CreateMsgTransfer(c) => c.event_name(),
            Command::CreateMsgRecvPacket(c) => c.event_name(),
            Command::CreateMsgAcknowledgement(c) => c.event_name(),
            Command::CreateMsgTimeout(c) => c.event_name(),
            Command::CreateMsgTimeoutOnClose(c) => c.event_name(),
            Command::StartProposalVotingPeriod(_) => "ProposalVotingPeriodStarted",
            Command::CreateGenesisValidator(_) => "GenesisValidatorCreated",
        }
    }

    /// Serializes this command to the wire shape downstream consumers
    /// receive (§8 S4).
    pub fn exec(&self) -> serde_json::Value {
        match self {
            Command::CreateMsgSend(c) => c.exec(),
            Command::CreateMsgMultiSend(c) => c.exec(),
            Command::CreateMsgSetWithdrawAddress(c) => c.exec(),
            Command::CreateMsgWithdrawDelegatorReward(c) => c.exec(),
            Command::CreateMsgWithdrawValidatorCommission(c) => c.exec(),
            Command::CreateMsgFundCommunityPool(c) => c.exec(),
            Command::CreateMsgSubmitParamChangeProposal(c) => c.exec(),
            Command::CreateMsgSubmitCommunityPoolSpendProposal(c) => c.exec(),
            Command::CreateMsgSubmitSoftwareUpgradeProposal(c) => c.exec(),
            Command::CreateMsgSubmitCancelSoftwareUpgradeProposal(c) => c.exec(),
            Command::CreateMsgSubmitTextProposal(c) => c.exec(),
            Command::CreateMsgVote(c) => c.exec(),
            Command::CreateMsgDeposit(c) => c.exec(),
            Command::CreateMsgDelegate(c) => c.exec(),
            Command::CreateMsgUndelegate(c) => c.exec(),
            Command::CreateMsgBeginRedelegate(c) => c.exec(),
            Command::CreateMsgCreateValidator(c) => c.exec(),
            Command::CreateMsgEditValidator(c) => c.exec(),
            Command::CreateMsgUnjail(c) => c.exec(),
            Command::CreateMsgIssueDenom(c) => c.exec(),
            Command::CreateMsgMintNft(c) => c.exec(),
            Command::CreateMsgTransferNft(c) => c.exec(),
            Command::CreateMsgEditNft(c) => c.exec(),
            Command::CreateMsgBurnNft(c) => c.exec(),
            Command::CreateMsgCreateClient(c) => c.exec(),
            Command::CreateMsgUpdateClient(c) => c.exec(),
            Command::CreateMsgConnectionOpenInit(c) => c.exec(),
            Command::CreateMsgConnectionOpenTry(c) => c.exec(),
            Command::CreateMsgConnectionOpenAck(c) => c.exec(),
            Command::CreateMsgConnectionOpenConfirm(c) => c.exec(),
            Command::CreateMsgChannelOpenInit(c) => c.exec(),
            Command::CreateMsgChannelOpenTry(c) => c.exec(),
            Command::CreateMsgChannelOpenAck(c) => c.exec(),
            Command::CreateMsgChannelOpenConfirm(c) => c.exec(),
            Command::CreateMsgTransfer(c) => c.exec(),
            Command::CreateMsgRecvPacket(c) => c.exec(),
            Command::CreateMsgAcknowledgement(c) => c.exec(),
            Command::CreateMsgTimeout(c) => c.exec(),
            Command::CreateMsgTimeoutOnClose(c) => c.exec(),
            Command::StartProposalVotingPeriod(c) => c.exec(),
            Command::CreateGenesisValidator(c) => c.exec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::Coin;
    use num_bigint::BigUint;

    fn header() -> MsgCommonHeader {
        MsgCommonHeader {
            block_height: 100,
            tx_hash: "ABCDEF".to_string(),
            tx_success: true,
            msg_index: 0,
        }
    }

    #[test]
    fn exec_shape_matches_wire_contract() {
        let cmd = Command::CreateMsgDelegate(Cmd::new(
            header(),
            staking::MsgDelegateParams {
                delegator_address: "cro1d".to_string(),
                validator_address: "crocncl1v".to_string(),
                amount: Coin::new(BigUint::from(100u32), "basecro"),
                auto_claimed_rewards: Coin::zero("basecro"),
            },
        ));

        let value = cmd.exec();
        assert_eq!(value["name"], "MsgDelegateCreated");
        assert_eq!(value["msgName"], "MsgDelegate");
        assert_eq!(value["height"], 100);
        assert_eq!(value["txHash"], "ABCDEF");
        assert_eq!(value["msgIndex"], 0);
        assert!(value["uuid"].is_string());
        assert_eq!(value["params"]["delegatorAddress"], "cro1d");
    }

    #[test]
    fn header_less_variants_report_no_header() {
        let cmd = Command::StartProposalVotingPeriod(ProposalVotingPeriodStart::new(
            42,
            gov::ProposalVotingPeriodStartParams {
                proposal_id: "7".to_string(),
            },
        ));
        assert!(cmd.header().is_none());
        assert_eq!(cmd.event_name(), "ProposalVotingPeriodStarted");
        assert_eq!(cmd.exec()["height"], 42);
    }
}
