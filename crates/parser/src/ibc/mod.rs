//! The IBC sub-dispatcher (§4.6): a second tier for `ibc.core.*` and
//! `ibc.applications.transfer.*` messages, each of which needs the event
//! log to recover an identifier the chain assigns (`client_id`,
//! `connection_id`, `channel_id`) or a packet field the message itself
//! doesn't carry.

pub mod channel;
pub mod client;
pub mod connection;
pub mod packet;
pub mod transfer;
