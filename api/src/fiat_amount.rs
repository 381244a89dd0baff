//! A fixed-point amount of fiat money.

use std::fmt;

use num_traits::CheckedAdd;

use crate::fiat_currency::FiatCurrency;

/// A monetary value stored in the currency's smallest unit (e.g. cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiatAmount {
    amount: i64,
    currency: FiatCurrency,
}

impl FiatAmount {
    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    pub fn as_minor_units(&self) -> i64 {
        self.amount
    }

    pub fn zero(currency: FiatCurrency) -> Self {
        Self::new_from_minor(0, currency)
    }

    /// Rounds `value` to the nearest minor unit of `currency`.
    pub fn new_from_float(value: f64, currency: FiatCurrency) -> Self {
        let multiplier = 10_f64.powi(currency.decimals() as i32);
        let amount = (value * multiplier).round() as i64;
        Self { amount, currency }
    }

    pub fn new_from_minor(amount: i64, currency: FiatCurrency) -> Self {
        Self { amount, currency }
    }

    /// The amount in major units, e.g. dollars rather than cents.
    pub fn as_major_f64(&self) -> f64 {
        self.amount as f64 / 10_f64.powi(self.currency.decimals() as i32)
    }

    /// Formats the amount with its currency code, e.g. "25.34 USD".
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self, self.currency.code())
    }
}

/// Formats as a plain number with the currency's decimals, e.g. "25.34".
impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as usize;
        if decimals == 0 {
            return write!(f, "{}", self.amount);
        }

        let divisor = 10_i64.pow(decimals as u32);
        let sign = if self.amount < 0 { "-" } else { "" };
        let major_units = (self.amount / divisor).abs();
        let minor_units = self.amount.abs() % divisor;

        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            major_units,
            minor_units,
            width = decimals
        )
    }
}

/// `None` when the currencies differ or the sum overflows.
impl CheckedAdd for FiatAmount {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        if self.currency != v.currency {
            return None;
        }
        self.amount.checked_add(v.amount).map(|amount| Self {
            amount,
            currency: self.currency,
        })
    }
}

// `CheckedAdd` has `Add` as a supertrait.
impl std::ops::Add for FiatAmount {
    type Output = Self;

    /// Panics when the currencies differ; use [`CheckedAdd`] otherwise.
    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(&rhs) {
            Some(sum) => sum,
            None => panic!(
                "cannot add {:?} and {:?} amounts",
                self.currency, rhs.currency
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_floats_to_minor_units() {
        let amount = FiatAmount::new_from_float(123.456, FiatCurrency::USD);
        assert_eq!(amount.as_minor_units(), 12346);
        assert_eq!(amount.to_string(), "123.46");

        let yen = FiatAmount::new_from_float(99.6, FiatCurrency::JPY);
        assert_eq!(yen.to_string(), "100");
    }

    #[test]
    fn small_negative_amounts_keep_their_sign() {
        let amount = FiatAmount::new_from_minor(-5, FiatCurrency::USD);
        assert_eq!(amount.to_string(), "-0.05");
        assert_eq!(
            FiatAmount::new_from_minor(-1250, FiatCurrency::EUR).to_string_with_code(),
            "-12.50 EUR"
        );
    }

    #[test]
    fn checked_add_rejects_mixed_currencies() {
        let usd = FiatAmount::new_from_minor(100, FiatCurrency::USD);
        let eur = FiatAmount::new_from_minor(100, FiatCurrency::EUR);
        assert_eq!(usd.checked_add(&eur), None);
        assert_eq!(
            usd.checked_add(&usd),
            Some(FiatAmount::new_from_minor(200, FiatCurrency::USD))
        );
    }

    #[test]
    fn three_decimal_currency() {
        let amount = FiatAmount::new_from_minor(1234, FiatCurrency::KWD);
        assert_eq!(amount.to_string(), "1.234");
        assert!((amount.as_major_f64() - 1.234).abs() < 1e-9);
    }
}
