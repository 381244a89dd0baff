//! The query interface the dashboard consumes.

use std::sync::Arc;

use crate::coin::CoinInfo;
use crate::coin::Transaction;
use crate::error::BackendError;

/// Synchronous, non-blocking queries against the wallet daemon.
///
/// Every call reflects the daemon's state at the moment it is made. Answers
/// may change between two frames; callers must not assume that two calls
/// observe the same state.
pub trait Backend {
    /// Coins the wallet currently tracks, in daemon order.
    fn enabled_coins(&self) -> Vec<CoinInfo>;

    /// Coins that could be enabled. Available before the daemon is ready.
    fn enableable_coins(&self) -> Vec<CoinInfo>;

    /// Describes `ticker`. Unknown tickers yield [`CoinInfo::default`].
    fn coin_info(&self, ticker: &str) -> CoinInfo;

    /// Pre-formatted balance of `ticker`.
    fn balance(&self, ticker: &str) -> Result<String, BackendError>;

    /// Transaction history of `ticker`, in daemon order.
    fn transaction_history(&self, ticker: &str) -> Vec<Transaction>;

    /// Whether the daemon has finished booting and answers queries.
    fn is_running(&self) -> bool;
}

impl<T: Backend + ?Sized> Backend for Arc<T> {
    fn enabled_coins(&self) -> Vec<CoinInfo> {
        (**self).enabled_coins()
    }

    fn enableable_coins(&self) -> Vec<CoinInfo> {
        (**self).enableable_coins()
    }

    fn coin_info(&self, ticker: &str) -> CoinInfo {
        (**self).coin_info(ticker)
    }

    fn balance(&self, ticker: &str) -> Result<String, BackendError> {
        (**self).balance(ticker)
    }

    fn transaction_history(&self, ticker: &str) -> Vec<Transaction> {
        (**self).transaction_history(ticker)
    }

    fn is_running(&self) -> bool {
        (**self).is_running()
    }
}
