//! # Validation Module
//!
//! Input validation for the checkout counter.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal prompt (rental-cli)                                 │
//! │  └── validate_*(&str) -> bool  → re-prompt until true                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Parsing (THIS MODULE)                                        │
//! │  └── parse_*(&str) -> RentalResult<T>  → typed value or RentalError    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CheckoutRequestBuilder                                       │
//! │  └── every setter re-checks its field, so hand-built values are        │
//! │      held to the same rules                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `validate_*` predicate is total: it never panics and is exactly
//! `parse_*(..).is_ok()`.
//!
//! ## Usage
//! ```rust
//! use rental_core::validation::{parse_rental_days, validate_discount_percent};
//!
//! assert_eq!(parse_rental_days("5").unwrap(), 5);
//! assert!(!validate_discount_percent("101"));
//! ```

use chrono::NaiveDate;

use crate::catalog;
use crate::error::{RentalError, RentalResult};
use crate::types::{DiscountPercent, Tool};

// =============================================================================
// Tool Validators
// =============================================================================

/// Parses a tool code into its catalog tool.
///
/// ## Rules
/// - Must not be blank
/// - Exactly 4 alphabetic characters (surrounding whitespace is ignored)
/// - Must be one of the catalog codes, in any letter case
pub fn parse_tool_code(code: &str) -> RentalResult<Tool> {
    catalog::lookup(code).ok_or(RentalError::InvalidToolCode)
}

/// Whether `code` names a tool in the catalog.
///
/// ## Example
/// ```rust
/// use rental_core::validation::validate_tool_code;
///
/// assert!(validate_tool_code("LADW"));
/// assert!(validate_tool_code("chns"));
/// assert!(!validate_tool_code("JAKW"));
/// assert!(!validate_tool_code(""));
/// ```
pub fn validate_tool_code(code: &str) -> bool {
    parse_tool_code(code).is_ok()
}

/// Whether a tool matches its catalog entry exactly.
///
/// Catalog tools always pass. A hand-built tool passes only when its code,
/// type and brand are the ones the catalog lists under that code.
pub fn validate_tool(tool: &Tool) -> bool {
    catalog::lookup(tool.code()).is_some_and(|entry| entry == *tool)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a rental day count.
///
/// ## Rules
/// - Must be an integer
/// - Must be greater than 0
pub fn parse_rental_days(input: &str) -> RentalResult<u32> {
    let days: i64 = input
        .trim()
        .parse()
        .map_err(|_| RentalError::InvalidRentalDayCount)?;

    check_rental_days(days)
}

/// Range check shared by text and numeric input.
pub(crate) fn check_rental_days(days: i64) -> RentalResult<u32> {
    if days <= 0 {
        return Err(RentalError::InvalidRentalDayCount);
    }

    u32::try_from(days).map_err(|_| RentalError::InvalidRentalDayCount)
}

/// Whether `input` is a positive whole number of days.
pub fn validate_rental_days(input: &str) -> bool {
    parse_rental_days(input).is_ok()
}

/// Parses a discount percent.
///
/// ## Rules
/// - Must be an integer
/// - Must be between 0 and 100 inclusive
pub fn parse_discount_percent(input: &str) -> RentalResult<DiscountPercent> {
    let percent: i64 = input
        .trim()
        .parse()
        .map_err(|_| RentalError::InvalidDiscountPercent)?;

    DiscountPercent::new(percent)
}

/// Whether `input` is a whole percent in `[0, 100]`.
pub fn validate_discount_percent(input: &str) -> bool {
    parse_discount_percent(input).is_ok()
}

// =============================================================================
// Date Validators
// =============================================================================

/// Parses a checkout date written as `MM/DD/YY`.
///
/// ## Rules
/// - Month `01`-`12`, day `01`-`31`, two-digit year, two-digit fields only
/// - Must be a real date (`02/30/21` is rejected)
/// - Years map to 2000-2099 (`05/25/05` is 2005-05-25)
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use rental_core::validation::parse_checkout_date;
///
/// assert_eq!(
///     parse_checkout_date("07/02/20").unwrap(),
///     NaiveDate::from_ymd_opt(2020, 7, 2).unwrap()
/// );
/// assert!(parse_checkout_date("7/2/20").is_err());
/// ```
pub fn parse_checkout_date(input: &str) -> RentalResult<NaiveDate> {
    let input = input.trim();
    let bytes = input.as_bytes();

    let well_formed = bytes.len() == 8
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !well_formed {
        return Err(RentalError::InvalidCheckoutDate);
    }

    let field = |start: usize| -> u32 {
        u32::from(bytes[start] - b'0') * 10 + u32::from(bytes[start + 1] - b'0')
    };
    let (month, day, year) = (field(0), field(3), field(6));

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(RentalError::InvalidCheckoutDate);
    }

    NaiveDate::from_ymd_opt(2000 + year as i32, month, day).ok_or(RentalError::InvalidCheckoutDate)
}

/// Whether `input` is a real `MM/DD/YY` date.
pub fn validate_checkout_date(input: &str) -> bool {
    parse_checkout_date(input).is_ok()
}

/// Checks that a checkout date is present.
pub fn require_checkout_date(date: Option<NaiveDate>) -> RentalResult<NaiveDate> {
    date.ok_or(RentalError::InvalidCheckoutDate)
}

// =============================================================================
// Prompt Validators
// =============================================================================

/// Parses the "Checkout again? (y/n)" answer. `Some(true)` means go again.
pub fn parse_checkout_again(input: &str) -> Option<bool> {
    match input.trim() {
        "Y" | "y" => Some(true),
        "N" | "n" => Some(false),
        _ => None,
    }
}

/// Whether `input` is one of `Y`, `y`, `N`, `n`.
pub fn validate_checkout_again(input: &str) -> bool {
    parse_checkout_again(input).is_some()
}

// =============================================================================
// Unit Tests
// =============================================================================
