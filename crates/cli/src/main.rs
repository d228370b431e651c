//! Demo fixture runner for the message-to-command parser.
//!
//! Reads a `/block` and `/block_results` Tendermint RPC response pair from
//! disk and prints the resulting command stream as JSON lines, one
//! `cmd.exec()` per line — the shape a downstream projection would
//! subscribe to. Not the sync manager the production indexer would run;
//! that component is out of scope here (see the crate's parent spec).

mod config;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use indexer_decoder::{Block, BlockResults};

/// Parse a Cosmos-SDK block's transactions into the indexer's command
/// stream and print them as JSON lines.
#[derive(Debug, Parser)]
#[command(name = "indexer-cli", version, about)]
struct Args {
    /// Path to a `/block` RPC response JSON file.
    block_path: PathBuf,

    /// Path to the matching `/block_results` RPC response JSON file.
    block_results_path: PathBuf,
}

fn main() -> Result<()> {
    indexer_common::init_tracing();

    let args = Args::parse();
    let ctx = config::chain_context_from_env()?;

    let block: Block = read_json(&args.block_path)?;
    let block_results: BlockResults = read_json(&args.block_results_path)?;

    info!(
        height = block.height(),
        txs = block.data.txs.len(),
        "parsing block"
    );

    let commands =
        indexer_parser::parse_block_results_txs_msg_to_commands(&block, &block_results, &ctx)
            .context("failed to parse block into commands")?;

    info!(count = commands.len(), "parsed commands");
    for command in &commands {
        println!("{}", command.exec());
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {} as JSON", path.display()))
}
