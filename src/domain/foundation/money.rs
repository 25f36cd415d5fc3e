//! Money value object.
//!
//! Amounts are held as unsigned integer cents, so a price can never be
//! negative and summation is exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use super::ValidationError;

/// Non-negative monetary amount in minor units (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from cents.
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates an amount from whole currency units.
    pub fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    /// Parses a decimal amount such as `"120"`, `"49.5"` or `"49.99"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::empty_field("price"));
        }

        let (units, fraction) = match s.split_once('.') {
            Some((units, fraction)) => (units, fraction),
            None => (s, ""),
        };

        if units.is_empty() || fraction.len() > 2 {
            return Err(ValidationError::invalid_format(
                "price",
                format!("'{}' is not a decimal amount with at most two places", s),
            ));
        }

        let parse = |digits: &str| -> Result<u64, ValidationError> {
            if !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(ValidationError::invalid_format(
                    "price",
                    format!("'{}' contains non-digit characters", s),
                ));
            }
            digits.parse::<u64>().map_err(|e| {
                ValidationError::invalid_format("price", e.to_string())
            })
        };

        let units = parse(units)?;
        let cents = match fraction.len() {
            0 => 0,
            1 => parse(fraction)? * 10,
            _ => parse(fraction)?,
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Money)
            .ok_or_else(|| ValidationError::invalid_format("price", "amount too large"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_units_converts_to_cents() {
        assert_eq!(Money::from_units(50).cents(), 5000);
    }

    #[test]
    fn sums_exactly() {
        let total: Money = [Money::from_units(50), Money::from_units(70)].iter().sum();
        assert_eq!(total, Money::from_units(120));
    }

    #[test]
    fn empty_sum_is_zero() {
        let total: Money = Vec::<Money>::new().into_iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Money::from_cents(12005).to_string(), "120.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn parses_decimal_strings() {
        assert_eq!("120".parse::<Money>().unwrap(), Money::from_units(120));
        assert_eq!("49.5".parse::<Money>().unwrap(), Money::from_cents(4950));
        assert_eq!("49.99".parse::<Money>().unwrap(), Money::from_cents(4999));
    }

    #[test]
    fn rejects_negative_and_malformed_amounts() {
        assert!("-5".parse::<Money>().is_err());
        assert!("1.234".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
    }

    #[test]
    fn serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(4999)).unwrap();
        assert_eq!(json, "4999");
    }
}
