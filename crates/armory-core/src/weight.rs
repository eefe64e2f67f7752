//! # Weight Module
//!
//! Provides the `Weight` type: a fixed-point decimal with exactly three
//! fractional digits.
//!
//! ## Why Integer Thousandths?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  As f64:   2.2 - 0.7 = 1.5000000000000002   ❌                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Thousandths (same idea as DECIMAL(18, 3))       │
//! │    2200 - 700 = 1500  →  "1.500"            ✅                          │
//! │                                                                         │
//! │  A patch that sets weight to 1.5 stores exactly 1.500, and reading     │
//! │  it back compares equal, byte for byte.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use armory_core::weight::Weight;
//!
//! let whip = Weight::from_thousandths(453);
//! assert_eq!(whip.to_string(), "0.453");
//!
//! let parsed: Weight = "1.5".parse().unwrap();
//! assert_eq!(parsed.thousandths(), 1500);
//!
//! // More precision than the column holds is rejected, never rounded
//! assert!("1.2345".parse::<Weight>().is_err());
//! ```

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of thousandths in one whole unit.
const SCALE: i64 = 1000;

/// Number of fractional digits stored.
const FRACTION_DIGITS: usize = 3;

// =============================================================================
// Weight Type
// =============================================================================

/// Weight of an item in kilograms, stored as integer thousandths.
///
/// ## Serialization
/// Serialized as a decimal string (`"2.000"`) so no float ever sits between
/// the caller and the stored value. Deserialization also accepts a JSON
/// number (`1.5`), read through its shortest decimal form, with the same
/// three-digit limit. In SQLite it is an INTEGER column holding the
/// thousandths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(into = "String")]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Weight(i64);

impl Weight {
    /// Creates a weight from thousandths of a unit.
    ///
    /// ## Example
    /// ```rust
    /// use armory_core::weight::Weight;
    ///
    /// let weight = Weight::from_thousandths(2250);
    /// assert_eq!(weight.to_string(), "2.250");
    /// ```
    #[inline]
    pub const fn from_thousandths(thousandths: i64) -> Self {
        Weight(thousandths)
    }

    /// Creates a weight from a whole number of units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Weight(units * SCALE)
    }

    /// Returns the raw value in thousandths.
    #[inline]
    pub const fn thousandths(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion (truncated toward zero).
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / SCALE
    }

    /// Returns the fractional portion in thousandths (always 0-999).
    #[inline]
    pub const fn fraction_part(&self) -> i64 {
        (self.0 % SCALE).abs()
    }

    /// Zero weight.
    #[inline]
    pub const fn zero() -> Self {
        Weight(0)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Reasons a decimal string cannot become a `Weight`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWeightError {
    #[error("weight is empty")]
    Empty,

    #[error("weight '{0}' is not a decimal number")]
    NotANumber(String),

    #[error("weight '{0}' has more than 3 fractional digits")]
    TooPrecise(String),

    #[error("weight '{0}' is out of range")]
    OutOfRange(String),
}

impl FromStr for Weight {
    type Err = ParseWeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ParseWeightError::Empty);
        }

        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
            return Err(ParseWeightError::NotANumber(raw.to_string()));
        }
        if fraction.len() > FRACTION_DIGITS {
            return Err(ParseWeightError::TooPrecise(raw.to_string()));
        }

        let out_of_range = || ParseWeightError::OutOfRange(raw.to_string());

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        // Right-pad the fraction to exactly three digits: "5" → "500"
        let fraction: i64 = format!("{:0<width$}", fraction, width = FRACTION_DIGITS)
            .parse()
            .map_err(|_| ParseWeightError::NotANumber(raw.to_string()))?;

        let magnitude = whole
            .checked_mul(SCALE)
            .and_then(|w| w.checked_add(fraction))
            .ok_or_else(out_of_range)?;

        Ok(Weight(if negative { -magnitude } else { magnitude }))
    }
}

struct WeightVisitor;

impl<'de> Visitor<'de> for WeightVisitor {
    type Value = Weight;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal weight as a string or number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Weight, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Weight, E> {
        value
            .checked_mul(SCALE)
            .map(Weight)
            .ok_or_else(|| E::custom(ParseWeightError::OutOfRange(value.to_string())))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Weight, E> {
        let whole = i64::try_from(value)
            .map_err(|_| E::custom(ParseWeightError::OutOfRange(value.to_string())))?;
        self.visit_i64(whole)
    }

    // f64 Display is the shortest string that round-trips, so 1.5 reads as "1.5"
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Weight, E> {
        self.visit_str(&value.to_string())
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WeightVisitor)
    }
}

impl From<Weight> for String {
    fn from(weight: Weight) -> Self {
        weight.to_string()
    }
}

/// Always renders three fractional digits, matching the storage scale.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:03}", sign, self.units().abs(), self.fraction_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_thousandths() {
        let weight = Weight::from_thousandths(2250);
        assert_eq!(weight.thousandths(), 2250);
        assert_eq!(weight.units(), 2);
        assert_eq!(weight.fraction_part(), 250);
    }

    #[test]
    fn test_display() {
        assert_eq!(Weight::from_thousandths(2000).to_string(), "2.000");
        assert_eq!(Weight::from_thousandths(453).to_string(), "0.453");
        assert_eq!(Weight::from_thousandths(-1250).to_string(), "-1.250");
        assert_eq!(Weight::zero().to_string(), "0.000");
    }

    #[test]
    fn test_parse_accepts_up_to_three_digits() {
        assert_eq!("2".parse::<Weight>().unwrap(), Weight::from_units(2));
        assert_eq!("1.5".parse::<Weight>().unwrap(), Weight::from_thousandths(1500));
        assert_eq!("0.453".parse::<Weight>().unwrap(), Weight::from_thousandths(453));
        assert_eq!(".25".parse::<Weight>().unwrap(), Weight::from_thousandths(250));
        assert_eq!("-1.25".parse::<Weight>().unwrap(), Weight::from_thousandths(-1250));
        assert_eq!(" 3.000 ".parse::<Weight>().unwrap(), Weight::from_units(3));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Weight>(), Err(ParseWeightError::Empty));
        assert!(matches!("abc".parse::<Weight>(), Err(ParseWeightError::NotANumber(_))));
        assert!(matches!("1.2.3".parse::<Weight>(), Err(ParseWeightError::NotANumber(_))));
        assert!(matches!(".".parse::<Weight>(), Err(ParseWeightError::NotANumber(_))));
        assert!(matches!("1.2345".parse::<Weight>(), Err(ParseWeightError::TooPrecise(_))));
        assert!(matches!(
            "99999999999999999999".parse::<Weight>(),
            Err(ParseWeightError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_display_parse_agree() {
        let weight = Weight::from_thousandths(12_345);
        assert_eq!(weight.to_string().parse::<Weight>().unwrap(), weight);
    }

    #[test]
    fn test_serde_uses_decimal_string() {
        let json = serde_json::to_string(&Weight::from_thousandths(1500)).unwrap();
        assert_eq!(json, "\"1.500\"");

        let parsed: Weight = serde_json::from_str("\"2.0\"").unwrap();
        assert_eq!(parsed, Weight::from_units(2));

        assert!(serde_json::from_str::<Weight>("\"heavy\"").is_err());
    }

    #[test]
    fn test_serde_accepts_json_numbers() {
        assert_eq!(
            serde_json::from_str::<Weight>("1.5").unwrap(),
            Weight::from_thousandths(1500)
        );
        assert_eq!(
            serde_json::from_str::<Weight>("0.453").unwrap(),
            Weight::from_thousandths(453)
        );
        assert_eq!(serde_json::from_str::<Weight>("2").unwrap(), Weight::from_units(2));
        assert_eq!(
            serde_json::from_str::<Weight>("-3").unwrap(),
            Weight::from_units(-3)
        );

        // Same precision rule as the string form
        assert!(serde_json::from_str::<Weight>("1.2345").is_err());
        assert!(serde_json::from_str::<Weight>("true").is_err());
    }
}
