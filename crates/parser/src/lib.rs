//! Turns decoded block data into the typed command stream a chain indexer
//! persists (§4). [`parse_block_results_txs_msg_to_commands`] is the one
//! function downstream crates call; everything else is the per-message
//! parser it dispatches to.

pub mod bank;
pub mod dispatcher;
pub mod distribution;
pub mod genesis;
pub mod gov;
pub mod ibc;
pub mod nft;
pub mod slashing;
pub mod staking;
pub mod util;

pub use dispatcher::parse_block_results_txs_msg_to_commands;
pub use genesis::parse_genesis_gen_tx_msg_create_validator;
