//! # Domain Types
//!
//! Core domain types used throughout the rental counter.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Tool       │   │    ToolType     │   │  ChargePolicy   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  tool_type ─────┼──►│  Ladder         │──►│  daily_charge   │       │
//! │  │  brand          │   │  Chainsaw       │   │  weekday        │       │
//! │  │  code (LADW)    │   │  Jackhammer     │   │  weekend        │       │
//! │  └─────────────────┘   └─────────────────┘   │  holiday        │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   ToolBrand     │   │ DiscountPercent │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  display only   │   │  0..=100        │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RentalError, RentalResult};
use crate::money::Money;
use crate::MAX_DISCOUNT_PERCENT;

// =============================================================================
// Day Kind
// =============================================================================

/// The billing bucket a calendar day falls into.
///
/// Every day is exactly one kind; see
/// [`calendar::classify`](crate::calendar::classify) for the priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday, not a holiday.
    Weekday,
    /// Saturday or Sunday, not a holiday.
    Weekend,
    /// Observed Independence Day or Labor Day.
    Holiday,
}

// =============================================================================
// Charge Policy
// =============================================================================

/// Daily rate plus which kinds of day are billed for a tool type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChargePolicy {
    pub daily_charge: Money,
    pub weekday_charge: bool,
    pub weekend_charge: bool,
    pub holiday_charge: bool,
}

impl ChargePolicy {
    /// Whether a day of the given kind counts as a charge day.
    #[inline]
    pub const fn charges(&self, kind: DayKind) -> bool {
        match kind {
            DayKind::Weekday => self.weekday_charge,
            DayKind::Weekend => self.weekend_charge,
            DayKind::Holiday => self.holiday_charge,
        }
    }
}

// =============================================================================
// Tool Type
// =============================================================================

/// The kind of tool, which decides price and billable days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    Ladder,
    Chainsaw,
    Jackhammer,
}

const LADDER_POLICY: ChargePolicy = ChargePolicy {
    daily_charge: Money::from_major_minor(1, 99),
    weekday_charge: true,
    weekend_charge: true,
    holiday_charge: false,
};

const CHAINSAW_POLICY: ChargePolicy = ChargePolicy {
    daily_charge: Money::from_major_minor(1, 49),
    weekday_charge: true,
    weekend_charge: false,
    holiday_charge: true,
};

const JACKHAMMER_POLICY: ChargePolicy = ChargePolicy {
    daily_charge: Money::from_major_minor(2, 99),
    weekday_charge: true,
    weekend_charge: false,
    holiday_charge: false,
};

impl ToolType {
    /// Returns the constant charge policy for this tool type.
    ///
    /// | Type       | Daily | Weekday | Weekend | Holiday |
    /// |------------|-------|---------|---------|---------|
    /// | Ladder     | $1.99 | yes     | yes     | no      |
    /// | Chainsaw   | $1.49 | yes     | no      | yes     |
    /// | Jackhammer | $2.99 | yes     | no      | no      |
    #[inline]
    pub const fn policy(&self) -> ChargePolicy {
        match self {
            ToolType::Ladder => LADDER_POLICY,
            ToolType::Chainsaw => CHAINSAW_POLICY,
            ToolType::Jackhammer => JACKHAMMER_POLICY,
        }
    }

    /// Returns the daily rental charge.
    #[inline]
    pub const fn daily_charge(&self) -> Money {
        self.policy().daily_charge
    }

    /// Display name, e.g. `Jackhammer`.
    pub const fn name(&self) -> &'static str {
        match self {
            ToolType::Ladder => "Ladder",
            ToolType::Chainsaw => "Chainsaw",
            ToolType::Jackhammer => "Jackhammer",
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tool Brand
// =============================================================================

/// Manufacturer of a tool. Display only, no effect on pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolBrand {
    Werner,
    Stihl,
    Ridgid,
    Dewalt,
}

impl ToolBrand {
    pub const fn name(&self) -> &'static str {
        match self {
            ToolBrand::Werner => "Werner",
            ToolBrand::Stihl => "Stihl",
            ToolBrand::Ridgid => "Ridgid",
            ToolBrand::Dewalt => "Dewalt",
        }
    }
}

impl fmt::Display for ToolBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tool
// =============================================================================

/// A rentable tool.
///
/// Normally obtained from [`catalog::lookup`](crate::catalog::lookup). Tools
/// built by hand with [`Tool::new`] are checked against the catalog when
/// they are put on a checkout request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tool {
    tool_type: ToolType,
    brand: ToolBrand,
    code: String,
}

impl Tool {
    pub fn new(tool_type: ToolType, brand: ToolBrand, code: impl Into<String>) -> Self {
        Tool {
            tool_type,
            brand,
            code: code.into(),
        }
    }

    #[inline]
    pub fn tool_type(&self) -> ToolType {
        self.tool_type
    }

    #[inline]
    pub fn brand(&self) -> ToolBrand {
        self.brand
    }

    /// The four-letter tool code, e.g. `LADW`.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }
}

// =============================================================================
// Discount Percent
// =============================================================================

/// A whole-number discount between 0% and 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// Creates a discount, rejecting anything outside `[0, 100]`.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::types::DiscountPercent;
    ///
    /// assert_eq!(DiscountPercent::new(25).unwrap().value(), 25);
    /// assert!(DiscountPercent::new(101).is_err());
    /// assert!(DiscountPercent::new(-1).is_err());
    /// ```
    pub fn new(percent: i64) -> RentalResult<Self> {
        if !(0..=MAX_DISCOUNT_PERCENT as i64).contains(&percent) {
            return Err(RentalError::InvalidDiscountPercent);
        }
        Ok(DiscountPercent(percent as u8))
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountPercent(0)
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for DiscountPercent {
    fn default() -> Self {
        DiscountPercent::zero()
    }
}

impl TryFrom<i64> for DiscountPercent {
    type Error = RentalError;

    fn try_from(percent: i64) -> RentalResult<Self> {
        DiscountPercent::new(percent)
    }
}

impl From<DiscountPercent> for u8 {
    fn from(percent: DiscountPercent) -> u8 {
        percent.0
    }
}

/// Renders as `10%`.
impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_table() {
        let ladder = ToolType::Ladder.policy();
        assert_eq!(ladder.daily_charge.cents(), 199);
        assert!(ladder.charges(DayKind::Weekday));
        assert!(ladder.charges(DayKind::Weekend));
        assert!(!ladder.charges(DayKind::Holiday));

        let chainsaw = ToolType::Chainsaw.policy();
        assert_eq!(chainsaw.daily_charge.cents(), 149);
        assert!(chainsaw.charges(DayKind::Weekday));
        assert!(!chainsaw.charges(DayKind::Weekend));
        assert!(chainsaw.charges(DayKind::Holiday));

        let jackhammer = ToolType::Jackhammer.policy();
        assert_eq!(jackhammer.daily_charge.cents(), 299);
        assert!(jackhammer.charges(DayKind::Weekday));
        assert!(!jackhammer.charges(DayKind::Weekend));
        assert!(!jackhammer.charges(DayKind::Holiday));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ToolType::Jackhammer.to_string(), "Jackhammer");
        assert_eq!(ToolBrand::Ridgid.to_string(), "Ridgid");
        assert_eq!(ToolBrand::Dewalt.to_string(), "Dewalt");
    }

    #[test]
    fn test_tool_equality_uses_all_fields() {
        let a = Tool::new(ToolType::Jackhammer, ToolBrand::Ridgid, "JAKR");
        let b = Tool::new(ToolType::Jackhammer, ToolBrand::Ridgid, "JAKR");
        let other_brand = Tool::new(ToolType::Jackhammer, ToolBrand::Dewalt, "JAKR");
        let other_code = Tool::new(ToolType::Jackhammer, ToolBrand::Ridgid, "JAKD");

        assert_eq!(a, b);
        assert_ne!(a, other_brand);
        assert_ne!(a, other_code);
    }

    #[test]
    fn test_discount_percent_range() {
        assert_eq!(DiscountPercent::new(0).unwrap().value(), 0);
        assert_eq!(DiscountPercent::new(100).unwrap().value(), 100);
        assert_eq!(
            DiscountPercent::new(101),
            Err(RentalError::InvalidDiscountPercent)
        );
        assert_eq!(
            DiscountPercent::new(-1),
            Err(RentalError::InvalidDiscountPercent)
        );
    }

    #[test]
    fn test_discount_percent_display() {
        assert_eq!(DiscountPercent::new(10).unwrap().to_string(), "10%");
        assert_eq!(DiscountPercent::default().to_string(), "0%");
    }

    #[test]
    fn test_discount_percent_serde_rejects_out_of_range() {
        let parsed: DiscountPercent = serde_json::from_str("25").unwrap();
        assert_eq!(parsed.value(), 25);
        assert!(serde_json::from_str::<DiscountPercent>("150").is_err());
    }
}
