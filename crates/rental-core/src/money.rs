//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    1.49 × 3 = 4.4700000000000001  ❌ WRONG!                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    149 cents × 3 = 447 cents                                           │
//! │    Every rental charge is exact to the cent                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::money::Money;
//!
//! let daily = Money::from_cents(199); // $1.99
//! let pre_discount = daily.multiply_days(2);
//! assert_eq!(pre_discount.cents(), 398);
//! assert_eq!(pre_discount.to_string(), "$3.98");
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Sub;

use crate::types::DiscountPercent;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents (USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction never has to special-case underflow
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Scale is fixed at 2**: A value can never carry sub-cent precision
///
/// ## Where Money is Used
/// ```text
/// ToolType.daily_charge ──► × charge days ──► pre-discount charge
///                                                   │
///                               percent_of(discount)┤
///                                                   ▼
///                              pre-discount − discount = final charge
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` = -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollars portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a daily rate by a number of charge days.
    ///
    /// Both operands are already exact, so the product needs no rounding.
    /// Saturates at the `i64` bounds instead of overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let daily = Money::from_cents(299); // $2.99
    /// assert_eq!(daily.multiply_days(3).cents(), 897); // $8.97
    /// ```
    #[inline]
    pub const fn multiply_days(&self, days: u32) -> Self {
        Money(self.0.saturating_mul(days as i64))
    }

    /// Returns `percent`% of this amount, rounded half-up to the cent.
    ///
    /// ## Half-Up Rounding
    /// ```text
    /// $2.99 × 50% = $1.495 → $1.50
    /// $4.47 × 25% = $1.1175 → $1.12
    /// ```
    /// Ties round away from zero, so a negative amount mirrors its positive
    /// counterpart.
    ///
    /// ## Implementation
    /// Integer math: `(cents * percent + 50) / 100`. The +50 is half of the
    /// divisor.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    /// use rental_core::types::DiscountPercent;
    ///
    /// let pre_discount = Money::from_cents(299);
    /// let discount = pre_discount.percent_of(DiscountPercent::new(50).unwrap());
    /// assert_eq!(discount.cents(), 150);
    /// ```
    pub fn percent_of(&self, percent: DiscountPercent) -> Money {
        // i128 keeps cents * percent from overflowing on huge amounts
        let scaled = self.0 as i128 * percent.value() as i128;
        let rounded = if scaled < 0 {
            (scaled - 50) / 100
        } else {
            (scaled + 50) / 100
        };
        Money::from_cents(rounded as i64)
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Inserts `,` between every group of three digits (`1234567` → `1,234,567`).
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

impl Money {
    const fn sign(&self) -> &'static str {
        if self.is_negative() {
            "-"
        } else {
            ""
        }
    }
}

/// US currency display: `$1,234.56`, `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}${}.{:02}",
            self.sign(),
            group_thousands(self.dollars().unsigned_abs()),
            self.cents_part()
        )
    }
}

/// Serialized as a plain two-decimal dollar string: `"3.58"`, `"-5.50"`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let decimal = format!(
            "{}{}.{:02}",
            self.sign(),
            self.dollars().unsigned_abs(),
            self.cents_part()
        );
        serializer.serialize_str(&decimal)
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(value: i64) -> DiscountPercent {
        DiscountPercent::new(value).unwrap()
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(1, 99).cents(), 199);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-$0.05");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_cents(123_456).to_string(), "$1,234.56");
        assert_eq!(Money::from_cents(100_000_000).to_string(), "$1,000,000.00");
        assert_eq!(Money::from_cents(99_999).to_string(), "$999.99");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a - b).cents(), 500);
        assert_eq!(a.multiply_days(3).cents(), 3000);
        assert_eq!(a.multiply_days(0).cents(), 0);
    }

    #[test]
    fn test_multiply_days_saturates() {
        assert_eq!(Money::from_cents(i64::MAX).multiply_days(2).cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MIN).multiply_days(2).cents(), i64::MIN);
        assert_eq!(
            Money::from_cents(299).multiply_days(u32::MAX).cents(),
            299 * i64::from(u32::MAX)
        );
    }

    #[test]
    fn test_serializes_as_decimal_dollars() {
        let json = |cents: i64| serde_json::to_value(Money::from_cents(cents)).unwrap();

        assert_eq!(json(358), "3.58");
        assert_eq!(json(199), "1.99");
        assert_eq!(json(5), "0.05");
        assert_eq!(json(0), "0.00");
        assert_eq!(json(-550), "-5.50");
        assert_eq!(json(123_456), "1234.56");
    }

    #[test]
    fn test_percent_of_rounds_half_up() {
        // $2.99 at 50% = $1.495 → $1.50
        assert_eq!(Money::from_cents(299).percent_of(pct(50)).cents(), 150);
        // $4.47 at 25% = $1.1175 → $1.12
        assert_eq!(Money::from_cents(447).percent_of(pct(25)).cents(), 112);
        // $3.98 at 10% = $0.398 → $0.40
        assert_eq!(Money::from_cents(398).percent_of(pct(10)).cents(), 40);
        // $1.04 at 10% = $0.104 → $0.10
        assert_eq!(Money::from_cents(104).percent_of(pct(10)).cents(), 10);
    }

    #[test]
    fn test_percent_of_bounds() {
        let amount = Money::from_cents(995);
        assert_eq!(amount.percent_of(pct(0)).cents(), 0);
        assert_eq!(amount.percent_of(pct(100)), amount);
    }

    #[test]
    fn test_percent_of_negative_mirrors_positive() {
        assert_eq!(Money::from_cents(-299).percent_of(pct(50)).cents(), -150);
    }
}
