//! Pre-scaled coin icons, loaded once at startup.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use api::CoinInfo;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use image::imageops::FilterType;
use image::ImageFormat;
use thiserror::Error;

/// Icons are shown at a quarter of their source size.
pub const ICON_SCALE: f32 = 0.25;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("failed to read icon {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode icon {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// A decoded, smoothed and scaled icon, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    width: u32,
    height: u32,
    data_uri: Arc<str>,
}

impl Sprite {
    pub fn load(path: &Path) -> Result<Self, IconError> {
        let bytes = std::fs::read(path).map_err(|source| IconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let decode_error = |source| IconError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let image = image::load_from_memory(&bytes).map_err(decode_error)?;
        let width = scaled(image.width());
        let height = scaled(image.height());
        // Triangle filtering stands in for texture smoothing.
        let image = image.resize_exact(width, height, FilterType::Triangle);

        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(decode_error)?;

        Ok(Self {
            width,
            height,
            data_uri: format!("data:image/png;base64,{}", BASE64.encode(&png)).into(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The icon as an inline `data:` URI.
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

fn scaled(dimension: u32) -> u32 {
    ((dimension as f32 * ICON_SCALE).round() as u32).max(1)
}

/// File name of a ticker's icon: the lower-cased ticker plus `.png`.
pub fn icon_file_name(ticker: &str) -> String {
    format!("{}.png", ticker.to_lowercase())
}

/// Ticker → sprite. A ticker is present only if its icon file existed when
/// the cache was loaded; absence is normal and readers must handle it.
#[derive(Debug, Clone, Default)]
pub struct IconCache {
    sprites: HashMap<String, Sprite>,
}

impl IconCache {
    /// Loads the icon of every coin in `coins` found in `dir`.
    ///
    /// Missing files are skipped. A file that exists but cannot be read or
    /// decoded fails the whole load.
    pub fn load(dir: &Path, coins: &[CoinInfo]) -> Result<Self, IconError> {
        let mut sprites = HashMap::new();
        for coin in coins {
            let path = dir.join(icon_file_name(&coin.ticker));
            if !path.exists() {
                debug!("no icon for {}", coin.ticker);
                continue;
            }
            info!("loading {}", coin.ticker);
            sprites.insert(coin.ticker.clone(), Sprite::load(&path)?);
        }
        Ok(Self { sprites })
    }

    pub fn get(&self, ticker: &str) -> Option<&Sprite> {
        self.sprites.get(ticker)
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.sprites.contains_key(ticker)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;
    use image::RgbaImage;
    use tempfile::TempDir;

    use super::*;

    struct Fixture(TempDir);

    impl Fixture {
        fn new() -> Self {
            Self(TempDir::new().unwrap())
        }

        fn path(&self) -> &Path {
            self.0.path()
        }

        fn png(&self, file: &str, width: u32, height: u32) {
            RgbaImage::from_pixel(width, height, Rgba([0, 149, 143, 255]))
                .save(self.path().join(file))
                .unwrap();
        }
    }

    fn coins(tickers: &[&str]) -> Vec<CoinInfo> {
        tickers.iter().map(|t| CoinInfo::new(*t, "")).collect()
    }

    #[test]
    fn file_names_are_lower_cased() {
        assert_eq!(icon_file_name("KMD"), "kmd.png");
        assert_eq!(icon_file_name("wBTC"), "wbtc.png");
    }

    #[test]
    fn loads_present_icons_and_skips_missing_ones() {
        let fixture = Fixture::new();
        fixture.png("kmd.png", 128, 64);
        fixture.png("rick.png", 8, 8);

        let cache = IconCache::load(fixture.path(), &coins(&["KMD", "RICK", "MORTY"])).unwrap();
        assert_eq!(cache.len(), 2);
        assert!(cache.contains("KMD"));
        assert!(cache.contains("RICK"));
        assert!(cache.get("MORTY").is_none());
    }

    #[test]
    fn sprites_are_scaled_to_a_quarter() {
        let fixture = Fixture::new();
        fixture.png("kmd.png", 128, 64);
        fixture.png("rick.png", 2, 2);

        let cache = IconCache::load(fixture.path(), &coins(&["KMD", "RICK"])).unwrap();
        let kmd = cache.get("KMD").unwrap();
        assert_eq!((kmd.width(), kmd.height()), (32, 16));
        assert!(kmd.data_uri().starts_with("data:image/png;base64,"));

        let rick = cache.get("RICK").unwrap();
        assert_eq!((rick.width(), rick.height()), (1, 1));
    }

    #[test]
    fn corrupt_icon_fails_the_load() {
        let fixture = Fixture::new();
        fixture.png("kmd.png", 16, 16);
        std::fs::write(fixture.path().join("rick.png"), b"definitely not a png").unwrap();

        let result = IconCache::load(fixture.path(), &coins(&["KMD", "RICK"]));
        assert!(matches!(result, Err(IconError::Decode { .. })));
    }

    #[test]
    fn missing_directory_is_an_empty_cache() {
        let fixture = Fixture::new();
        let dir = fixture.path().join("does-not-exist");
        let cache = IconCache::load(&dir, &coins(&["KMD"])).unwrap();
        assert!(cache.is_empty());
    }
}
