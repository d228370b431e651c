//! Typed invariant-violation errors.
//!
//! The source implementation panics when on-chain data contradicts what a
//! recognized message type guarantees (a missing `submit_proposal` event,
//! an unparseable auto-claim amount, an unknown governance proposal content
//! type, ...). Those are real bugs in the indexer or the chain node, not
//! recoverable parser states, but a library should never panic on untrusted
//! input: `ParserInvariantError` is what the source's panics become here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parser invariant violated in tx {tx_hash} msg {msg_index}: {kind}")]
pub struct ParserInvariantError {
    pub kind: ParserInvariantKind,
    pub tx_hash: String,
    pub msg_index: usize,
}

impl ParserInvariantError {
    pub fn new(kind: ParserInvariantKind, tx_hash: impl Into<String>, msg_index: usize) -> Self {
        Self {
            kind,
            tx_hash: tx_hash.into(),
            msg_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserInvariantKind {
    #[error("missing `{event_type}` event in transaction result log")]
    MissingEvent { event_type: String },

    #[error("missing `{attribute}` attribute on `{event_type}` event")]
    MissingEventAttribute { event_type: String, attribute: String },

    #[error("required message field `{field}` is missing or has the wrong shape")]
    MalformedMessageField { field: String },

    #[error("unrecognized governance proposal content type `{content_type}`")]
    UnknownProposalContent { content_type: String },

    #[error("could not parse `{value}` as a coin amount: {reason}")]
    UnparseableAmount { value: String, reason: String },

    #[error("could not parse `{value}` as an RFC-3339 timestamp: {reason}")]
    UnparseableTimestamp { value: String, reason: String },
}
