use std::collections::HashMap;
use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use tokio::time::MissedTickBehavior;

use super::Mm2Client;
use super::Mm2Config;
use crate::backend::Backend;
use crate::coin::CoinInfo;
use crate::coin::Transaction;
use crate::coins_config::CoinsConfig;
use crate::error::BackendError;

/// Everything the dashboard may ask about, as of the last poll.
#[derive(Debug, Clone, Default)]
struct Snapshot {
    running: bool,
    enabled: Vec<String>,
    balances: HashMap<String, Result<String, BackendError>>,
    histories: HashMap<String, Vec<Transaction>>,
}

/// [`Backend`] backed by a polled mm2 daemon.
///
/// Queries never touch the network: they read the latest snapshot, which a
/// background thread replaces wholesale every poll interval.
pub struct Mm2Service {
    coins: CoinsConfig,
    snapshot: Arc<RwLock<Snapshot>>,
    stop: Arc<AtomicBool>,
}

impl Mm2Service {
    /// Starts polling the daemon described by `config`. Returns immediately;
    /// [`Backend::is_running`] stays false until the daemon answers.
    pub fn start(config: Mm2Config, coins: CoinsConfig) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let snapshot = Arc::new(RwLock::new(Snapshot::default()));
        let stop = Arc::new(AtomicBool::new(false));
        let poller = Poller {
            client: Mm2Client::new(&config).map_err(io::Error::other)?,
            config,
            snapshot: snapshot.clone(),
            stop: stop.clone(),
        };

        std::thread::Builder::new()
            .name("mm2-poller".to_string())
            .spawn(move || runtime.block_on(poller.run()))?;

        Ok(Self {
            coins,
            snapshot,
            stop,
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        // a poisoned lock still holds the last complete snapshot
        self.snapshot.read().unwrap_or_else(|e| e.into_inner())
    }

    fn display_info(&self, ticker: &str) -> CoinInfo {
        self.coins
            .get(ticker)
            .cloned()
            .unwrap_or_else(|| CoinInfo::new(ticker, ticker))
    }

    #[cfg(test)]
    fn with_snapshot(coins: CoinsConfig, snapshot: Snapshot) -> Self {
        Self {
            coins,
            snapshot: Arc::new(RwLock::new(snapshot)),
            stop: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl Drop for Mm2Service {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

impl Backend for Mm2Service {
    fn enabled_coins(&self) -> Vec<CoinInfo> {
        let snapshot = self.read();
        snapshot
            .enabled
            .iter()
            .map(|ticker| self.display_info(ticker))
            .collect()
    }

    fn enableable_coins(&self) -> Vec<CoinInfo> {
        self.coins.coins().to_vec()
    }

    fn coin_info(&self, ticker: &str) -> CoinInfo {
        self.coins.get(ticker).cloned().unwrap_or_default()
    }

    fn balance(&self, ticker: &str) -> Result<String, BackendError> {
        let snapshot = self.read();
        if !snapshot.running {
            return Err(BackendError::NotRunning);
        }
        snapshot
            .balances
            .get(ticker)
            .cloned()
            .unwrap_or_else(|| Err(BackendError::NotFound(ticker.to_string())))
    }

    fn transaction_history(&self, ticker: &str) -> Vec<Transaction> {
        self.read()
            .histories
            .get(ticker)
            .cloned()
            .unwrap_or_default()
    }

    fn is_running(&self) -> bool {
        self.read().running
    }
}

struct Poller {
    client: Mm2Client,
    config: Mm2Config,
    snapshot: Arc<RwLock<Snapshot>>,
    stop: Arc<AtomicBool>,
}

impl Poller {
    async fn run(self) {
        let mut interval = tokio::time::interval(self.config.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while !self.stop.load(Ordering::Relaxed) {
            interval.tick().await;
            let next = self.refresh().await;
            if self.stop.load(Ordering::Relaxed) {
                break;
            }
            self.publish(next);
        }
        debug!("mm2 poller stopped");
    }

    /// Queries the daemon once. Any connection-class failure yields a
    /// not-running snapshot; per-coin failures are kept per coin.
    async fn refresh(&self) -> Snapshot {
        if let Err(e) = self.client.version().await {
            debug!("mm2 not answering: {}", e);
            return Snapshot::default();
        }

        let enabled = match self.client.enabled_coins().await {
            Ok(tickers) => tickers,
            Err(e) if e.is_connection_error() => return Snapshot::default(),
            Err(e) => {
                warn!("get_enabled_coins failed: {}", e);
                Vec::new()
            }
        };

        let mut balances = HashMap::new();
        let mut histories = HashMap::new();
        for ticker in &enabled {
            let balance = self.client.my_balance(ticker).await;
            match &balance {
                Err(e) if e.is_connection_error() => return Snapshot::default(),
                Err(e) => warn!("my_balance({}) failed: {}", ticker, e),
                Ok(_) => {}
            }
            balances.insert(ticker.clone(), balance);

            let history = match self
                .client
                .my_tx_history(ticker, self.config.tx_history_limit)
                .await
            {
                Ok(history) => history,
                Err(e) if e.is_connection_error() => return Snapshot::default(),
                Err(e) => {
                    warn!("my_tx_history({}) failed: {}", ticker, e);
                    Vec::new()
                }
            };
            histories.insert(ticker.clone(), history);
        }

        Snapshot {
            running: true,
            enabled,
            balances,
            histories,
        }
    }

    fn publish(&self, next: Snapshot) {
        let mut current = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        match (current.running, next.running) {
            (false, true) => info!("mm2 is ready, {} coin(s) enabled", next.enabled.len()),
            (true, false) => warn!("mm2 stopped answering"),
            _ => {}
        }
        *current = next;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn tx(change: &str) -> Transaction {
        Transaction {
            am_i_sender: change.starts_with('-'),
            my_balance_change: change.to_string(),
            from: vec!["addr2".to_string()],
            to: vec!["addr1".to_string()],
        }
    }

    fn running_snapshot() -> Snapshot {
        Snapshot {
            running: true,
            enabled: vec!["RICK".to_string(), "KMD".to_string(), "DOC".to_string()],
            balances: HashMap::from([
                ("RICK".to_string(), Ok("7.77".to_string())),
                (
                    "KMD".to_string(),
                    Err(BackendError::Rpc("electrum down".to_string())),
                ),
            ]),
            histories: HashMap::from([("RICK".to_string(), vec![tx("-5"), tx("2")])]),
        }
    }

    #[test]
    fn not_running_until_first_successful_poll() {
        let service = Mm2Service::with_snapshot(CoinsConfig::builtin(), Snapshot::default());
        assert!(!service.is_running());
        assert!(service.enabled_coins().is_empty());
        assert_eq!(service.balance("KMD"), Err(BackendError::NotRunning));
    }

    #[test]
    fn enableable_coins_come_from_config_before_ready() {
        let service = Mm2Service::with_snapshot(CoinsConfig::builtin(), Snapshot::default());
        let tickers: Vec<_> = service
            .enableable_coins()
            .into_iter()
            .map(|c| c.ticker)
            .collect();
        assert_eq!(tickers, ["KMD", "RICK", "MORTY"]);
    }

    #[test]
    fn enabled_coins_keep_daemon_order_and_join_names() {
        let service = Mm2Service::with_snapshot(CoinsConfig::builtin(), running_snapshot());
        assert_eq!(
            service.enabled_coins(),
            vec![
                CoinInfo::new("RICK", "Rick"),
                CoinInfo::new("KMD", "Komodo"),
                CoinInfo::new("DOC", "DOC"),
            ]
        );
    }

    #[test]
    fn balances_report_per_coin_outcomes() {
        let service = Mm2Service::with_snapshot(CoinsConfig::builtin(), running_snapshot());
        assert_eq!(service.balance("RICK"), Ok("7.77".to_string()));
        assert_eq!(
            service.balance("KMD"),
            Err(BackendError::Rpc("electrum down".to_string()))
        );
        assert_eq!(
            service.balance("UNKNOWN"),
            Err(BackendError::NotFound("UNKNOWN".to_string()))
        );
    }

    #[test]
    fn unknown_coin_info_is_default() {
        let service = Mm2Service::with_snapshot(CoinsConfig::builtin(), running_snapshot());
        assert_eq!(service.coin_info("UNKNOWN"), CoinInfo::default());
        assert_eq!(service.coin_info("KMD").display_name, "Komodo");
    }

    #[test]
    fn history_is_returned_as_given() {
        let service = Mm2Service::with_snapshot(CoinsConfig::builtin(), running_snapshot());
        let history = service.transaction_history("RICK");
        assert_eq!(history, vec![tx("-5"), tx("2")]);
        assert!(service.transaction_history("MORTY").is_empty());
    }

    fn poller(config: Mm2Config) -> Poller {
        Poller {
            client: Mm2Client::new(&config).unwrap(),
            config,
            snapshot: Arc::new(RwLock::new(Snapshot::default())),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    #[tokio::test]
    async fn poller_reports_not_running_when_nothing_listens() {
        // port 9 (discard) is not an mm2 daemon on any test machine
        let poller = poller(Mm2Config {
            rpc_port: 9,
            ..Mm2Config::default()
        });
        let snapshot = poller.refresh().await;
        assert!(!snapshot.running);
        assert!(snapshot.enabled.is_empty());
    }

    #[tokio::test]
    async fn poller_gives_up_on_a_daemon_that_never_answers() {
        // accepts connections and never writes a byte back
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        std::thread::spawn(move || {
            let mut held = Vec::new();
            for stream in listener.incoming().flatten() {
                held.push(stream);
            }
        });

        let poller = poller(Mm2Config {
            rpc_port: port,
            request_timeout: Duration::from_millis(200),
            ..Mm2Config::default()
        });
        let snapshot = tokio::time::timeout(Duration::from_secs(5), poller.refresh())
            .await
            .expect("refresh outlived the request timeout");
        assert!(!snapshot.running);
    }
}
