//! This crate is the boundary between the dashboard and the wallet daemon.
//!
//! The dashboard core only ever talks to the daemon through the [`Backend`]
//! trait. [`mm2::Mm2Service`] is the production implementation; it keeps a
//! snapshot of the daemon's state fresh on a background thread so every
//! query made from the render thread returns immediately.

pub mod backend;
pub mod coin;
pub mod coins_config;
pub mod error;
pub mod fiat_amount;
pub mod fiat_currency;
pub mod mm2;
pub mod prefs;
pub mod price_lookup;
pub mod price_map;

pub use backend::Backend;
pub use coin::CoinInfo;
pub use coin::Transaction;
pub use error::BackendError;
