//! Money types with precise decimal arithmetic
//!
//! Claimed amounts are entered in won. Amounts are parsed from the digit-only
//! strings the intake form keeps and carried as `rust_decimal` values so the
//! receiving side never sees floating-point noise.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    KRW,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::KRW => 0,
        }
    }

    /// Returns the unit suffix used on the intake form
    pub fn unit(&self) -> &'static str {
        match self {
            Currency::KRW => "원",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::KRW => "KRW",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value, rounded to the currency's precision
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(currency.decimal_places()),
            currency,
        }
    }

    /// Creates a won amount
    pub fn krw(amount: Decimal) -> Self {
        Self::new(amount, Currency::KRW)
    }

    /// Parses a won amount from form input.
    ///
    /// Thousands separators, whitespace and a trailing `원` are accepted;
    /// anything else, an empty string, or a negative value is rejected.
    pub fn parse_krw(input: &str) -> Result<Self, MoneyError> {
        let cleaned: String = input
            .trim()
            .trim_end_matches(Currency::KRW.unit())
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();

        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyError::InvalidAmount(input.to_string()));
        }

        let amount = Decimal::from_str(&cleaned).map_err(|_| MoneyError::Overflow)?;
        Ok(Self::krw(amount))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Renders the amount with thousands separators and the unit suffix,
    /// e.g. `1,500,000원`
    pub fn to_display_string(&self) -> String {
        let rounded = self.amount.round_dp(self.currency.decimal_places());
        let digits = rounded.abs().trunc().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        format!("{}{}{}", sign, grouped, self.currency.unit())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_krw(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_digits() {
        let m = Money::parse_krw("1500000").unwrap();
        assert_eq!(m.amount(), dec!(1500000));
        assert_eq!(m.currency(), Currency::KRW);
    }

    #[test]
    fn test_parse_with_separators_and_unit() {
        let m = Money::parse_krw(" 1,500,000원 ").unwrap();
        assert_eq!(m.amount(), dec!(1500000));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Money::parse_krw(""), Err(MoneyError::InvalidAmount(_))));
        assert!(matches!(Money::parse_krw("12a"), Err(MoneyError::InvalidAmount(_))));
        assert!(matches!(Money::parse_krw("-100"), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::krw(dec!(1500000)).to_string(), "1,500,000원");
        assert_eq!(Money::krw(dec!(999)).to_string(), "999원");
        assert_eq!(Money::krw(dec!(0)).to_string(), "0원");
    }

    #[test]
    fn test_won_has_no_minor_units() {
        assert_eq!(Money::krw(dec!(100.6)).amount(), dec!(101));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn display_then_parse_preserves_amount(amount in 0i64..1_000_000_000_000i64) {
            let money = Money::krw(Decimal::from(amount));
            let parsed = Money::parse_krw(&money.to_display_string()).unwrap();
            prop_assert_eq!(parsed, money);
        }

        #[test]
        fn plain_digits_parse_exactly(amount in 0u64..1_000_000_000_000_000u64) {
            let parsed = Money::parse_krw(&amount.to_string()).unwrap();
            prop_assert_eq!(parsed.amount(), Decimal::from(amount));
        }
    }
}
