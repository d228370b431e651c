//! Integration tests against the full `(Block, BlockResults, ChainContext)
//! -> Commands` pipeline, exercising the universal properties the dispatch
//! layer must hold: determinism, order preservation, the length law
//! (every recognized message produces at least one command; unrecognized
//! ones produce none), and failed-transaction collapse.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use cosmos_sdk_proto::cosmos::bank::v1beta1::{Input, MsgMultiSend, MsgSend, Output};
use cosmos_sdk_proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use cosmos_sdk_proto::cosmos::tx::v1beta1::{TxBody, TxRaw};
use prost::Message as _;
use prost_types::Any;
use semver::Version;

use indexer_decoder::{Block, BlockResults};
use indexer_domain::chain_context::ChainContext;
use indexer_domain::command::Command;
use indexer_parser::parse_block_results_txs_msg_to_commands;

fn any_for<M: prost::Message>(type_url: &str, msg: &M) -> Any {
    Any {
        type_url: type_url.to_string(),
        value: msg.encode_to_vec(),
    }
}

fn encode_tx(messages: Vec<Any>) -> String {
    let body = TxBody {
        messages,
        ..Default::default()
    };
    let tx_raw = TxRaw {
        body_bytes: body.encode_to_vec(),
        auth_info_bytes: Vec::new(),
        signatures: Vec::new(),
    };
    BASE64.encode(tx_raw.encode_to_vec())
}

fn block_with_txs(height: i64, txs: Vec<String>) -> Block {
    let raw = serde_json::json!({
        "header": {"height": height.to_string(), "time": "2023-01-01T00:00:00Z"},
        "data": {"txs": txs},
    });
    serde_json::from_value(raw).unwrap()
}

fn block_results(height: i64, txs_results: Vec<serde_json::Value>) -> BlockResults {
    let raw = serde_json::json!({"height": height.to_string(), "txs_results": txs_results});
    serde_json::from_value(raw).unwrap()
}

fn ctx() -> ChainContext {
    ChainContext::new("cro", "basecro", Version::new(0, 43, 0))
}

fn sample_msg_send() -> Any {
    any_for(
        "/cosmos.bank.v1beta1.MsgSend",
        &MsgSend {
            from_address: "cro1sender".to_string(),
            to_address: "cro1receiver".to_string(),
            amount: vec![ProtoCoin {
                denom: "basecro".to_string(),
                amount: "100".to_string(),
            }],
        },
    )
}

#[test]
fn recognized_message_produces_a_command_and_is_deterministic() {
    let tx = encode_tx(vec![sample_msg_send()]);
    let block = block_with_txs(10, vec![tx.clone()]);
    let results = block_results(10, vec![serde_json::json!({"code": 0, "log": "[{\"msg_index\":0,\"events\":[]}]"})]);

    let first = parse_block_results_txs_msg_to_commands(&block, &results, &ctx()).unwrap();
    let second = parse_block_results_txs_msg_to_commands(&block, &results, &ctx()).unwrap();

    assert_eq!(first.len(), 1);
    assert!(matches!(first[0], Command::CreateMsgSend(_)));
    assert_eq!(first.len(), second.len());
    assert_eq!(first[0].event_name(), second[0].event_name());
}

#[test]
fn unrecognized_message_type_produces_no_command() {
    let unknown = Any {
        type_url: "/some.unknown.v1.MsgDoesNotExist".to_string(),
        value: vec![],
    };
    let tx = encode_tx(vec![unknown]);
    let block = block_with_txs(10, vec![tx]);
    let results = block_results(10, vec![serde_json::json!({"code": 0, "log": "[{\"msg_index\":0,\"events\":[]}]"})]);

    let commands = parse_block_results_txs_msg_to_commands(&block, &results, &ctx()).unwrap();
    assert!(commands.is_empty());
}

#[test]
fn failed_transaction_still_produces_commands_with_zeroed_log_derived_fields() {
    let tx = encode_tx(vec![sample_msg_send()]);
    let block = block_with_txs(10, vec![tx]);
    let results = block_results(10, vec![serde_json::json!({"code": 5, "log": "insufficient funds"})]);

    let commands = parse_block_results_txs_msg_to_commands(&block, &results, &ctx()).unwrap();
    assert_eq!(commands.len(), 1);
    let header = commands[0].header().unwrap();
    assert!(!header.tx_success);
}

#[test]
fn commands_preserve_tx_then_message_order() {
    let multi_send = any_for(
        "/cosmos.bank.v1beta1.MsgMultiSend",
        &MsgMultiSend {
            inputs: vec![Input {
                address: "cro1in".to_string(),
                coins: vec![ProtoCoin {
                    denom: "basecro".to_string(),
                    amount: "10".to_string(),
                }],
            }],
            outputs: vec![Output {
                address: "cro1out".to_string(),
                coins: vec![ProtoCoin {
                    denom: "basecro".to_string(),
                    amount: "10".to_string(),
                }],
            }],
        },
    );

    let tx0 = encode_tx(vec![sample_msg_send(), multi_send]);
    let tx1 = encode_tx(vec![sample_msg_send()]);
    let block = block_with_txs(10, vec![tx0, tx1]);
    let log = "[{\"msg_index\":0,\"events\":[]},{\"msg_index\":1,\"events\":[]}]";
    let results = block_results(
        10,
        vec![
            serde_json::json!({"code": 0, "log": log}),
            serde_json::json!({"code": 0, "log": "[{\"msg_index\":0,\"events\":[]}]"}),
        ],
    );

    let commands = parse_block_results_txs_msg_to_commands(&block, &results, &ctx()).unwrap();
    assert_eq!(commands.len(), 3);
    assert!(matches!(commands[0], Command::CreateMsgSend(_)));
    assert!(matches!(commands[1], Command::CreateMsgMultiSend(_)));
    assert!(matches!(commands[2], Command::CreateMsgSend(_)));
}
