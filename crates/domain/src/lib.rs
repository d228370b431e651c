//! Shared domain types for the chain indexer's message-to-command parser:
//! the coin/amount model, the parsed event-log view, chain context, the
//! typed invariant-error vocabulary, and the command model produced by the
//! parser crate.

pub mod chain_context;
pub mod coin;
pub mod command;
pub mod error;
pub mod event_log;
pub mod header;
pub mod proposal;
pub mod validator;

pub use chain_context::{ChainContext, ModuleAccounts};
pub use coin::{Coin, CoinError, Coins};
pub use command::Command;
pub use error::{ParserInvariantError, ParserInvariantKind};
pub use event_log::{Attribute, Event, EventLogError, MessageLog, ParsedTxsResultLog};
pub use header::MsgCommonHeader;
