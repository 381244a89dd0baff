//! Adapter for the mm2 wallet daemon.
//!
//! [`Mm2Client`] speaks mm2's JSON-RPC. [`Mm2Service`] polls it from a
//! background thread and serves the [`crate::Backend`] queries from the
//! most recent snapshot.

mod config;
mod rpc;
mod service;

pub use config::Mm2Config;
pub use rpc::Mm2Client;
pub use service::Mm2Service;
