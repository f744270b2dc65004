//! Money type for representing monetary values.
//!
//! Uses an integer count of the currency's minor unit to avoid
//! floating-point drift when summing line totals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    ARS,
    BRL,
    CLP,
    MXN,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "ARS").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::ARS => "ARS",
            Currency::BRL => "BRL",
            Currency::CLP => "CLP",
            Currency::MXN => "MXN",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::ARS => "$",
            Currency::BRL => "R$",
            Currency::CLP => "CLP$",
            Currency::MXN => "MX$",
            Currency::USD => "US$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::CLP => 0,
            _ => 2,
        }
    }
}

impl FromStr for Currency {
    type Err = CommerceError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_uppercase().as_str() {
            "ARS" => Ok(Currency::ARS),
            "BRL" => Ok(Currency::BRL),
            "CLP" => Ok(Currency::CLP),
            "MXN" => Ok(Currency::MXN),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            _ => Err(CommerceError::UnknownCurrency(code.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents).
/// Arithmetic saturates instead of overflowing so cart totals stay total
/// functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Add another amount, saturating at the numeric bounds.
    ///
    /// The result keeps `self`'s currency.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money::new(self.amount_minor.saturating_add(other.amount_minor), self.currency)
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_mul(&self, factor: u32) -> Money {
        Money::new(
            self.amount_minor.saturating_mul(i64::from(factor)),
            self.currency,
        )
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        if places == 0 {
            return self.amount_minor.to_string();
        }
        let divisor = 10_u64.pow(places);
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        format!(
            "{}{}.{:0width$}",
            sign,
            abs / divisor,
            abs % divisor,
            width = places as usize
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::ARS).display(), "$49.99");
        assert_eq!(Money::new(5, Currency::USD).display(), "US$0.05");
        assert_eq!(Money::new(1500, Currency::CLP).display(), "CLP$1500");
        assert_eq!(Money::new(-250, Currency::EUR).display_amount(), "-2.50");
    }

    #[test]
    fn test_saturating_mul() {
        let m = Money::new(1000, Currency::ARS);
        assert_eq!(m.saturating_mul(3).amount_minor, 3000);

        let huge = Money::new(i64::MAX / 2, Currency::ARS);
        assert_eq!(huge.saturating_mul(3).amount_minor, i64::MAX);
    }

    #[test]
    fn test_saturating_add() {
        let a = Money::new(1000, Currency::ARS);
        let b = Money::new(500, Currency::ARS);
        assert_eq!(a.saturating_add(b).amount_minor, 1500);
        assert_eq!(
            Money::new(i64::MAX, Currency::ARS)
                .saturating_add(b)
                .amount_minor,
            i64::MAX
        );
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("ars".parse::<Currency>().unwrap(), Currency::ARS);
        assert_eq!(" USD ".parse::<Currency>().unwrap(), Currency::USD);
        assert!(matches!(
            "XYZ".parse::<Currency>(),
            Err(CommerceError::UnknownCurrency(_))
        ));
    }
}
