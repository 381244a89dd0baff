use std::time::Duration;

/// Connection settings for the mm2 daemon.
///
/// # Environment Variables
/// - `MM2_RPC_PORT`: RPC port on localhost. Defaults to 7783.
/// - `MM2_USERPASS`: RPC password. Defaults to empty.
/// - `MM2_POLL_MILLIS`: snapshot refresh interval. Defaults to 1000.
/// - `MM2_TX_HISTORY_LIMIT`: transactions fetched per coin. Defaults to 50.
/// - `MM2_TIMEOUT_MILLIS`: per-request deadline. Defaults to 5000.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mm2Config {
    pub rpc_port: u16,
    pub userpass: String,
    pub poll_interval: Duration,
    pub tx_history_limit: usize,
    pub request_timeout: Duration,
}

impl Mm2Config {
    const DEFAULT_PORT: u16 = 7783;
    const DEFAULT_POLL_MILLIS: u64 = 1000;
    const DEFAULT_TX_HISTORY_LIMIT: usize = 50;
    const DEFAULT_TIMEOUT_MILLIS: u64 = 5000;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            rpc_port: lookup("MM2_RPC_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(Self::DEFAULT_PORT),
            userpass: lookup("MM2_USERPASS").unwrap_or_default(),
            poll_interval: Duration::from_millis(
                lookup("MM2_POLL_MILLIS")
                    .and_then(|s| s.parse().ok())
                    .filter(|&ms: &u64| ms > 0)
                    .unwrap_or(Self::DEFAULT_POLL_MILLIS),
            ),
            tx_history_limit: lookup("MM2_TX_HISTORY_LIMIT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(Self::DEFAULT_TX_HISTORY_LIMIT),
            request_timeout: Duration::from_millis(
                lookup("MM2_TIMEOUT_MILLIS")
                    .and_then(|s| s.parse().ok())
                    .filter(|&ms: &u64| ms > 0)
                    .unwrap_or(Self::DEFAULT_TIMEOUT_MILLIS),
            ),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://127.0.0.1:{}", self.rpc_port)
    }
}

impl Default for Mm2Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
