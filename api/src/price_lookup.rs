//! Fiat valuation of coin amounts.
//!
//! The daemon reports amounts only in coin units. Anything shown in fiat
//! goes through a [`PriceLookup`], which may know nothing at all; callers
//! render `None` as a placeholder.

use std::sync::Arc;

use num_traits::CheckedAdd;

use crate::fiat_amount::FiatAmount;
use crate::fiat_currency::FiatCurrency;
use crate::price_map::PriceMap;

/// An amount of one coin, as the daemon formatted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holding {
    pub ticker: String,
    pub amount: String,
}

pub trait PriceLookup {
    fn currency(&self) -> FiatCurrency;

    /// Fiat value of `amount` units of `ticker`, if a price is known and the
    /// amount parses as a number.
    fn fiat_value(&self, ticker: &str, amount: &str) -> Option<FiatAmount>;

    /// False when no price is known for any coin.
    fn has_prices(&self) -> bool {
        true
    }

    /// Sum of the fiat values of `holdings`. `None` if any single holding
    /// cannot be valued.
    fn portfolio_total(&self, holdings: &[Holding]) -> Option<FiatAmount> {
        if !self.has_prices() {
            return None;
        }
        holdings
            .iter()
            .try_fold(FiatAmount::zero(self.currency()), |total, h| {
                total.checked_add(&self.fiat_value(&h.ticker, &h.amount)?)
            })
    }
}

impl PriceLookup for PriceMap {
    fn currency(&self) -> FiatCurrency {
        PriceMap::currency(self)
    }

    fn fiat_value(&self, ticker: &str, amount: &str) -> Option<FiatAmount> {
        let unit_price = self.get(ticker)?;
        let units: f64 = amount.trim().parse().ok()?;
        if !units.is_finite() {
            return None;
        }
        Some(FiatAmount::new_from_float(units * unit_price, self.currency()))
    }

    fn has_prices(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: PriceLookup + ?Sized> PriceLookup for Arc<T> {
    fn currency(&self) -> FiatCurrency {
        (**self).currency()
    }

    fn fiat_value(&self, ticker: &str, amount: &str) -> Option<FiatAmount> {
        (**self).fiat_value(ticker, amount)
    }

    fn has_prices(&self) -> bool {
        (**self).has_prices()
    }

    fn portfolio_total(&self, holdings: &[Holding]) -> Option<FiatAmount> {
        (**self).portfolio_total(holdings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices() -> PriceMap {
        PriceMap::from_json(r#"{"KMD": 1.25, "RICK": 0.5}"#, FiatCurrency::USD).unwrap()
    }

    fn holding(ticker: &str, amount: &str) -> Holding {
        Holding {
            ticker: ticker.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn values_signed_amounts() {
        let map = prices();
        assert_eq!(
            map.fiat_value("KMD", "10").map(|v| v.to_string_with_code()),
            Some("12.50 USD".to_string())
        );
        assert_eq!(
            map.fiat_value("KMD", "-5").map(|v| v.to_string()),
            Some("-6.25".to_string())
        );
        assert_eq!(
            map.fiat_value("KMD", "+2").map(|v| v.as_minor_units()),
            Some(250)
        );
    }

    #[test]
    fn sub_cent_prices_value_bulk_amounts() {
        let map = PriceMap::from_json(r#"{"DOGE": 0.004}"#, FiatCurrency::USD).unwrap();
        assert_eq!(
            map.fiat_value("DOGE", "1000").map(|v| v.to_string_with_code()),
            Some("4.00 USD".to_string())
        );
        assert_eq!(
            map.fiat_value("DOGE", "1").map(|v| v.as_minor_units()),
            Some(0)
        );
    }

    #[test]
    fn unknown_coin_or_unparsable_amount_has_no_value() {
        let map = prices();
        assert_eq!(map.fiat_value("MORTY", "1"), None);
        assert_eq!(map.fiat_value("KMD", ""), None);
        assert_eq!(map.fiat_value("KMD", "abc"), None);
    }

    #[test]
    fn total_is_all_or_nothing() {
        let map = prices();
        let total = map.portfolio_total(&[holding("KMD", "10"), holding("RICK", "3")]);
        assert_eq!(total.map(|t| t.as_minor_units()), Some(1400));

        let partial = map.portfolio_total(&[holding("KMD", "10"), holding("MORTY", "3")]);
        assert_eq!(partial, None);
    }

    #[test]
    fn empty_price_table_values_nothing() {
        let map = PriceMap::new(FiatCurrency::USD);
        assert_eq!(map.portfolio_total(&[]), None);
        assert_eq!(map.fiat_value("KMD", "1"), None);
    }
}
