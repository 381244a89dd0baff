use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::fiat_currency::FiatCurrency;

/// Application settings, read once at startup.
///
/// # Environment Variables
/// - `ATOMIC_DEX_ASSETS`: asset root holding `textures/icons` and `config`.
///   Defaults to `assets`.
/// - `ATOMIC_DEX_FIAT`: currency code for fiat values, e.g. "EUR". Defaults to USD.
/// - `ATOMIC_DEX_LIVE_CODING_DIR`: directory watched for code patches.
///   Hot reload stays off when unset.
/// - `ATOMIC_DEX_FRAME_MILLIS`: interval between UI frames. Defaults to 100.
#[derive(Clone, PartialEq, Debug)]
pub struct UserPrefs {
    assets_dir: PathBuf,
    fiat: FiatCurrency,
    live_coding_dir: Option<PathBuf>,
    frame_interval: Duration,
}

impl UserPrefs {
    const DEFAULT_ASSETS_DIR: &'static str = "assets";
    const DEFAULT_FRAME_MILLIS: u64 = 100;

    /// Initial window size in logical pixels.
    pub const WINDOW_SIZE: (f64, f64) = (1200.0, 800.0);

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from an arbitrary key lookup. Unset or unparsable
    /// values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let assets_dir = lookup("ATOMIC_DEX_ASSETS")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ASSETS_DIR.to_string())
            .into();

        let fiat = lookup("ATOMIC_DEX_FIAT")
            .and_then(|s| FiatCurrency::from_str(&s).ok())
            .unwrap_or_default();

        let live_coding_dir = lookup("ATOMIC_DEX_LIVE_CODING_DIR")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let frame_millis = lookup("ATOMIC_DEX_FRAME_MILLIS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(Self::DEFAULT_FRAME_MILLIS);

        Self {
            assets_dir,
            fiat,
            live_coding_dir,
            frame_interval: Duration::from_millis(frame_millis),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.assets_dir.join("textures").join("icons")
    }

    pub fn coins_config_path(&self) -> PathBuf {
        self.assets_dir.join("config").join("coins.json")
    }

    pub fn prices_path(&self) -> PathBuf {
        self.assets_dir.join("config").join("prices.json")
    }

    pub fn fiat(&self) -> FiatCurrency {
        self.fiat
    }

    pub fn live_coding_dir(&self) -> Option<&Path> {
        self.live_coding_dir.as_deref()
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn prefs(vars: &[(&str, &str)]) -> UserPrefs {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UserPrefs::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let prefs = prefs(&[]);
        assert_eq!(prefs.assets_dir(), Path::new("assets"));
        assert_eq!(prefs.icons_dir(), Path::new("assets/textures/icons"));
        assert_eq!(prefs.coins_config_path(), Path::new("assets/config/coins.json"));
        assert_eq!(prefs.fiat(), FiatCurrency::USD);
        assert_eq!(prefs.live_coding_dir(), None);
        assert_eq!(prefs.frame_interval(), Duration::from_millis(100));
    }

    #[test]
    fn reads_overrides() {
        let prefs = prefs(&[
            ("ATOMIC_DEX_ASSETS", "/opt/dex"),
            ("ATOMIC_DEX_FIAT", "eur"),
            ("ATOMIC_DEX_LIVE_CODING_DIR", "/tmp/patches"),
            ("ATOMIC_DEX_FRAME_MILLIS", "16"),
        ]);
        assert_eq!(prefs.prices_path(), Path::new("/opt/dex/config/prices.json"));
        assert_eq!(prefs.fiat(), FiatCurrency::EUR);
        assert_eq!(prefs.live_coding_dir(), Some(Path::new("/tmp/patches")));
        assert_eq!(prefs.frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn bad_values_fall_back() {
        let prefs = prefs(&[
            ("ATOMIC_DEX_FIAT", "doubloons"),
            ("ATOMIC_DEX_FRAME_MILLIS", "0"),
            ("ATOMIC_DEX_LIVE_CODING_DIR", ""),
        ]);
        assert_eq!(prefs.fiat(), FiatCurrency::USD);
        assert_eq!(prefs.frame_interval(), Duration::from_millis(100));
        assert_eq!(prefs.live_coding_dir(), None);
    }
}
