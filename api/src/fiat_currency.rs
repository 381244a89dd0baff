//! Fiat currencies the value columns can be shown in.

use serde::Deserialize;
use serde::Serialize;

/// A fiat currency and its formatting rules.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    #[default]
    USD,
    EUR,
    GBP,
    CHF,
    JPY,
    KRW,
    CNY,
    KWD,
}

impl FiatCurrency {
    /// Digits after the decimal point: 0 for JPY and KRW, 3 for KWD, 2 otherwise.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::JPY | Self::KRW => 0,
            Self::KWD => 3,
            _ => 2,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::CHF => "CHF",
            Self::JPY | Self::CNY => "¥",
            Self::KRW => "₩",
            Self::KWD => "د.ك",
        }
    }

    /// The ISO 4217 code, e.g. "USD".
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(FiatCurrency::from_str("eur").unwrap(), FiatCurrency::EUR);
        assert_eq!(FiatCurrency::from_str("USD").unwrap(), FiatCurrency::USD);
        assert!(FiatCurrency::from_str("XYZ").is_err());
    }

    #[test]
    fn code_matches_variant_name() {
        assert_eq!(FiatCurrency::KWD.code(), "KWD");
        assert_eq!(FiatCurrency::default().code(), "USD");
    }
}
