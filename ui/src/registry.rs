//! Known coins and the assets wrapping them.

use indexmap::IndexMap;

/// A coin, identified by its ticker code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coin {
    code: String,
}

impl Coin {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Per-asset state. One asset exists for every registered coin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    coin: Coin,
}

impl Asset {
    pub fn coin(&self) -> &Coin {
        &self.coin
    }
}

/// Tickers registered before the daemon reports its own list.
pub const DEFAULT_COINS: [&str; 3] = ["KMD", "RICK", "MORTY"];

/// Ticker → coin and ticker → asset tables, in registration order.
///
/// Both tables always hold the same key set: they are only ever replaced
/// together by [`CoinRegistry::rebuild`].
#[derive(Debug, Clone, Default)]
pub struct CoinRegistry {
    coins: IndexMap<String, Coin>,
    assets: IndexMap<String, Asset>,
}

impl CoinRegistry {
    pub fn with_default_coins() -> Self {
        let mut registry = Self::default();
        registry.rebuild(DEFAULT_COINS);
        registry
    }

    /// Replaces every entry with one coin and one asset per ticker.
    /// Duplicate tickers keep their first position.
    pub fn rebuild<I, S>(&mut self, tickers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut coins = IndexMap::new();
        let mut assets = IndexMap::new();
        for ticker in tickers {
            let coin = Coin::new(ticker);
            let code = coin.code().to_string();
            assets.insert(code.clone(), Asset { coin: coin.clone() });
            coins.insert(code, coin);
        }
        self.coins = coins;
        self.assets = assets;
    }

    pub fn lookup(&self, ticker: &str) -> Option<&Coin> {
        self.coins.get(ticker)
    }

    pub fn lookup_asset(&self, ticker: &str) -> Option<&Asset> {
        self.assets.get(ticker)
    }

    pub fn first_asset(&self) -> Option<&Asset> {
        self.assets.first().map(|(_, asset)| asset)
    }

    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.coins.keys().map(String::as_str)
    }

    /// True when the registered tickers are exactly `tickers`, in order.
    pub fn matches<'a>(&self, tickers: impl IntoIterator<Item = &'a str>) -> bool {
        self.tickers().eq(tickers)
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_sets_match(registry: &CoinRegistry) -> bool {
        registry.coins.keys().all(|k| registry.assets.contains_key(k))
            && registry.assets.keys().all(|k| registry.coins.contains_key(k))
    }

    #[test]
    fn unknown_tickers_are_not_found() {
        let registry = CoinRegistry::with_default_coins();
        for ticker in ["BTC", "", "kmd", "KMD "] {
            assert!(registry.lookup(ticker).is_none());
            assert!(registry.lookup_asset(ticker).is_none());
        }
    }

    #[test]
    fn default_coins_in_order() {
        let registry = CoinRegistry::with_default_coins();
        assert_eq!(registry.tickers().collect::<Vec<_>>(), DEFAULT_COINS);
        assert_eq!(registry.first_asset().map(|a| a.coin().code()), Some("KMD"));
        assert_eq!(registry.lookup_asset("RICK").map(|a| a.coin()), registry.lookup("RICK"));
    }

    #[test]
    fn rebuild_replaces_both_tables() {
        let mut registry = CoinRegistry::with_default_coins();
        registry.rebuild(["DOC", "MARTY", "DOC"]);

        assert!(key_sets_match(&registry));
        assert_eq!(registry.len(), 2);
        assert!(registry.lookup("KMD").is_none());
        assert!(registry.lookup_asset("KMD").is_none());
        assert!(registry.matches(["DOC", "MARTY"]));
        assert!(!registry.matches(["MARTY", "DOC"]));
    }

    #[test]
    fn rebuild_with_nothing_empties_the_registry() {
        let mut registry = CoinRegistry::with_default_coins();
        registry.rebuild(Vec::<String>::new());
        assert!(registry.is_empty());
        assert!(registry.first_asset().is_none());
        assert!(key_sets_match(&registry));
    }
}
