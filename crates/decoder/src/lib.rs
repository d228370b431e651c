//! Transaction decoding: the ≈5% of the system that turns an opaque
//! wire-encoded Cosmos-SDK transaction into a structured, generically
//! typed list of messages (§4.1).

pub mod error;
pub mod nft_proto;
pub mod tx;
pub mod types;

pub use error::DecodeError;
pub use tx::{decode, Message, Transaction};
pub use types::{Block, BlockHeader, BlockResults, TxResult};
