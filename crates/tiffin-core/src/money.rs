//! # Money Module
//!
//! Provides the `Money` type for handling menu prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing prices as floats drifts:                                       │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (paise for INR)                      │
//! │    ₹80.50 is stored as 8050 and sums exactly.                           │
//! │    Rounding to whole rupees happens ONLY when formatting for display.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tiffin_core::money::Money;
//!
//! let dosa: Money = "80.50".parse().unwrap();
//! assert_eq!(dosa.minor(), 8050);
//!
//! let line = dosa.multiply_quantity(2);
//! assert_eq!(line.format_whole("₹"), "₹161");
//! assert_eq!(line.to_string(), "161.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

/// Minor units per major unit (100 paise = 1 rupee).
pub const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Menu button price ──► LineItem.unit_price ──► line total              │
/// │                                                    │                    │
/// │                                                    ▼                    │
/// │                         CartTotals.items_total = grand_total           │
/// │                              │                     │                    │
/// │                              ▼                     ▼                    │
/// │                   "₹200" (display)      am=200.00 (payment request)    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (paise).
    ///
    /// ```rust
    /// use tiffin_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(12050).major(), 120);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * MINOR_PER_MAJOR - minor)
        } else {
            Money(major * MINOR_PER_MAJOR + minor)
        }
    }

    /// Whole-rupee amount with no fraction (`Money::from_major(80)` is ₹80).
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the truncated major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a line quantity, saturating at the `i64`
    /// bounds.
    ///
    /// ```rust
    /// use tiffin_core::money::Money;
    ///
    /// let dosa = Money::from_major(80);
    /// assert_eq!(dosa.multiply_quantity(2), Money::from_major(160));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Rounds to whole major units, half away from zero.
    ///
    /// ```rust
    /// use tiffin_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(8049).round_to_major(), 80);
    /// assert_eq!(Money::from_minor(8050).round_to_major(), 81);
    /// assert_eq!(Money::from_minor(-8050).round_to_major(), -81);
    /// ```
    #[inline]
    pub const fn round_to_major(&self) -> i64 {
        let half = MINOR_PER_MAJOR / 2;
        let whole = self.0 / MINOR_PER_MAJOR;
        let rem = self.0 % MINOR_PER_MAJOR;
        if rem >= half {
            whole + 1
        } else if rem <= -half {
            whole - 1
        } else {
            whole
        }
    }

    /// Formats as `<symbol><integer>`, rounded to zero decimals.
    ///
    /// This is the display format for every price and total on the page.
    /// The rounding is applied only here; sums keep full precision.
    ///
    /// ```rust
    /// use tiffin_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(160).format_whole("₹"), "₹160");
    /// assert_eq!(Money::zero().format_whole("₹"), "₹0");
    /// ```
    pub fn format_whole(&self, symbol: &str) -> String {
        let rounded = self.round_to_major();
        if rounded < 0 {
            format!("-{}{}", symbol, rounded.unsigned_abs())
        } else {
            format!("{}{}", symbol, rounded)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal amount with no symbol (`200.00`).
///
/// Used where a machine-readable amount is needed, e.g. the `am` field of a
/// payment request. Use [`Money::format_whole`] for on-page display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

/// Parses a decimal amount such as `"80"`, `"80.5"` or `"80.50"`.
///
/// At most two fractional digits are accepted; anything finer than a paisa
/// is rejected rather than silently rounded.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("not a number"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("not a number"));
        }
        if frac.len() > 2 {
            return Err(invalid("more than two decimal places"));
        }

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount too large"))?
        };
        // "5" -> 50 paise, "05" -> 5 paise
        let minor: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("not a number"))? * 10,
            _ => frac.parse().map_err(|_| invalid("not a number"))?,
        };

        let magnitude = major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .ok_or_else(|| invalid("amount too large"))?;

        Ok(Money(if negative { -magnitude } else { magnitude }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// Arithmetic saturates at the i64 bounds.

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(8050);
        assert_eq!(money.minor(), 8050);
        assert_eq!(money.major(), 80);
        assert_eq!(money.minor_part(), 50);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).minor(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).minor(), -550);
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Money::from_minor(20000).to_string(), "200.00");
        assert_eq!(Money::from_minor(8005).to_string(), "80.05");
        assert_eq!(Money::from_minor(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_format_whole_rounds_only_at_display() {
        let half = Money::from_minor(4050); // 40.50
        assert_eq!(half.format_whole("₹"), "₹41");

        // 40.50 + 40.50 = 81 exactly, not 41 + 41 = 82
        let sum = half + half;
        assert_eq!(sum.format_whole("₹"), "₹81");

        assert_eq!(Money::from_minor(4049).format_whole("₹"), "₹40");
        assert_eq!(Money::from_minor(-4050).format_whole("₹"), "-₹41");
    }

    #[test]
    fn test_parse_accepts_decimal_forms() {
        assert_eq!("80".parse::<Money>().unwrap(), Money::from_major(80));
        assert_eq!("80.5".parse::<Money>().unwrap(), Money::from_minor(8050));
        assert_eq!("80.05".parse::<Money>().unwrap(), Money::from_minor(8005));
        assert_eq!(" 12.30 ".parse::<Money>().unwrap(), Money::from_minor(1230));
        assert_eq!(".5".parse::<Money>().unwrap(), Money::from_minor(50));
        assert_eq!("7.".parse::<Money>().unwrap(), Money::from_major(7));
        assert_eq!("-3".parse::<Money>().unwrap(), Money::from_major(-3));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", ".", "abc", "1.234", "1,50", "NaN", "1e3", "--1", "99999999999999999999"] {
            assert!(input.parse::<Money>().is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(80);
        let b = Money::from_major(120);

        assert_eq!((a + b).minor(), 20000);
        assert_eq!((b - a).minor(), 4000);
        assert_eq!((a * 3).minor(), 24000);

        let mut acc = Money::zero();
        acc += a;
        assert_eq!(acc, a);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_major(80), Money::from_minor(50), Money::zero()]
            .into_iter()
            .sum();
        assert_eq!(total.minor(), 8050);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_arithmetic_saturates_at_bounds() {
        let huge = Money::from_minor(5_000_000_000_000_000_000);

        assert_eq!(huge.multiply_quantity(2), Money::from_minor(i64::MAX));
        assert_eq!(huge.multiply_quantity(u32::MAX), Money::from_minor(i64::MAX));
        assert_eq!(huge + huge, Money::from_minor(i64::MAX));
        assert_eq!(
            Money::from_minor(i64::MIN) - Money::from_minor(1),
            Money::from_minor(i64::MIN)
        );

        let mut acc = huge;
        acc += huge;
        assert_eq!(acc.minor(), i64::MAX);

        let total: Money = [huge, huge, huge].into_iter().sum();
        assert_eq!(total.minor(), i64::MAX);
    }

    #[test]
    fn test_formatting_at_bounds() {
        let max = Money::from_minor(i64::MAX);
        assert_eq!(max.format_whole("₹"), "₹92233720368547758");
        assert_eq!(max.to_string(), "92233720368547758.07");

        let min = Money::from_minor(i64::MIN);
        assert_eq!(min.format_whole("₹"), "-₹92233720368547758");

        // Half-up rounding near the bound does not overflow
        let near = Money::from_minor(9_223_372_036_854_775_750);
        assert_eq!(near.format_whole("₹"), "₹92233720368547758");
    }
}
