//! Unit prices of coins in a single fiat currency.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use crate::fiat_currency::FiatCurrency;

/// Price of one unit of each coin, keyed by ticker.
///
/// Unit prices keep full precision, so coins worth a fraction of the
/// currency's minor unit still value correctly in bulk. Rounding to minor
/// units happens only on the valued amount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceMap {
    currency: FiatCurrency,
    prices: HashMap<String, f64>,
}

impl PriceMap {
    pub fn new(currency: FiatCurrency) -> Self {
        Self {
            currency,
            prices: HashMap::new(),
        }
    }

    /// Reads a `{"KMD": 1.25, ...}` object of unit prices.
    pub fn from_json(json: &str, currency: FiatCurrency) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, f64> = serde_json::from_str(json)?;
        let mut map = Self::new(currency);
        for (ticker, price) in raw {
            map.insert(ticker, price);
        }
        Ok(map)
    }

    /// Loads prices from `path`. A missing file yields an empty map.
    pub fn load_or_empty(path: &Path, currency: FiatCurrency) -> io::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json, currency)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                dioxus_logger::tracing::info!("no price table at {}", path.display());
                Ok(Self::new(currency))
            }
            Err(e) => Err(e),
        }
    }

    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    /// Inserts or replaces the unit price of `ticker` in major units of the
    /// map's currency, returning the old one. Non-finite prices are ignored.
    pub fn insert(&mut self, ticker: impl Into<String>, unit_price: f64) -> Option<f64> {
        if !unit_price.is_finite() {
            return None;
        }
        self.prices.insert(ticker.into(), unit_price)
    }

    pub fn get(&self, ticker: &str) -> Option<f64> {
        self.prices.get(ticker).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn parses_unit_prices() {
        let map = PriceMap::from_json(r#"{"KMD": 1.25, "RICK": 0}"#, FiatCurrency::USD).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("KMD"), Some(1.25));
        assert_eq!(map.get("MORTY"), None);
    }

    #[test]
    fn sub_cent_prices_keep_their_precision() {
        let map = PriceMap::from_json(r#"{"DOGE": 0.004}"#, FiatCurrency::USD).unwrap();
        assert_eq!(map.get("DOGE"), Some(0.004));
    }

    #[test]
    fn insert_replaces_and_skips_non_finite() {
        let mut map = PriceMap::new(FiatCurrency::USD);
        assert_eq!(map.insert("KMD", f64::NAN), None);
        assert!(map.is_empty());

        assert_eq!(map.insert("KMD", 1.0), None);
        assert_eq!(map.insert("KMD", 2.0), Some(1.0));
        assert_eq!(map.get("KMD"), Some(2.0));
    }

    #[test]
    fn missing_file_is_an_empty_map() {
        let dir = TempDir::new().unwrap();
        let map = PriceMap::load_or_empty(&dir.path().join("prices.json"), FiatCurrency::EUR).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.currency(), FiatCurrency::EUR);
    }

    #[test]
    fn malformed_file_is_invalid_data() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[1, 2]").unwrap();
        let err = PriceMap::load_or_empty(file.path(), FiatCurrency::USD).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
