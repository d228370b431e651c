//! # Chain Indexing Common Library
//!
//! Shared ambient infrastructure used by every crate in this workspace:
//! error wrapping and structured logging setup. The parsing core itself
//! (`indexer-parser`) never needs more than this.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
pub use logging::init_tracing;
