//! The list of coins the daemon knows how to enable.
//!
//! Read from a JSON array of `{"coin": "KMD", "fname": "Komodo", ...}`
//! objects. Fields other than `coin` and `fname` are ignored.

use std::io;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::coin::CoinInfo;

#[derive(Error, Debug)]
pub enum CoinsConfigError {
    #[error("failed to read coins config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse coins config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct CoinsConfigEntry {
    coin: String,
    #[serde(default)]
    fname: String,
}

/// Enableable coins, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinsConfig {
    coins: Vec<CoinInfo>,
}

impl CoinsConfig {
    /// The coins shipped with the application when no configuration exists.
    pub fn builtin() -> Self {
        Self {
            coins: vec![
                CoinInfo::new("KMD", "Komodo"),
                CoinInfo::new("RICK", "Rick"),
                CoinInfo::new("MORTY", "Morty"),
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<CoinsConfigEntry> = serde_json::from_str(json)?;
        Ok(Self {
            coins: entries
                .into_iter()
                .map(|e| CoinInfo::new(e.coin, e.fname))
                .collect(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, CoinsConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| CoinsConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| CoinsConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`CoinsConfig::load`], but a missing file yields [`CoinsConfig::builtin`].
    /// A file that exists and cannot be read or parsed is still an error.
    pub fn load_or_builtin(path: &Path) -> Result<Self, CoinsConfigError> {
        match Self::load(path) {
            Err(CoinsConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                dioxus_logger::tracing::warn!(
                    "no coins config at {}, using built-in coin list",
                    path.display()
                );
                Ok(Self::builtin())
            }
            other => other,
        }
    }

    pub fn coins(&self) -> &[CoinInfo] {
        &self.coins
    }

    pub fn get(&self, ticker: &str) -> Option<&CoinInfo> {
        self.coins.iter().find(|c| c.ticker == ticker)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn parses_coin_and_fname_and_ignores_the_rest() {
        let json = r#"[
            {"coin": "KMD", "fname": "Komodo", "rpcport": 7771, "txversion": 4},
            {"coin": "RICK", "fname": "Rick", "asset": "RICK"},
            {"coin": "MORTY"}
        ]"#;
        let config = CoinsConfig::from_json(json).unwrap();
        assert_eq!(
            config.coins(),
            &[
                CoinInfo::new("KMD", "Komodo"),
                CoinInfo::new("RICK", "Rick"),
                CoinInfo::new("MORTY", ""),
            ]
        );
        assert_eq!(config.get("RICK").map(|c| c.label()), Some("Rick"));
        assert!(config.get("BTC").is_none());
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let dir = TempDir::new().unwrap();
        let config = CoinsConfig::load_or_builtin(&dir.path().join("coins.json")).unwrap();
        assert_eq!(config, CoinsConfig::builtin());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let result = CoinsConfig::load_or_builtin(file.path());
        assert!(matches!(result, Err(CoinsConfigError::Parse { .. })));
    }
}
