//! # Checkout Requests
//!
//! A [`CheckoutRequest`] is the validated input to the pricing engine.
//!
//! ## Fail-Fast Builder
//! ```text
//! CheckoutRequest::builder()
//!     .tool(tool)?                 ── InvalidToolCode
//!     .rental_day_count(5)?        ── InvalidRentalDayCount
//!     .discount_percent(10)?       ── InvalidDiscountPercent
//!     .checkout_date(Some(date))?  ── InvalidCheckoutDate
//!     .build()?                    ── error of the first missing field
//! ```
//! Each setter checks its own value the moment it is assigned, so a builder
//! never holds an invalid field. A finished request is immutable.

use chrono::{Days, NaiveDate};

use crate::error::{RentalError, RentalResult};
use crate::types::{DiscountPercent, Tool};
use crate::validation::{self, check_rental_days, require_checkout_date};

/// A fully validated checkout.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use rental_core::{catalog, CheckoutRequest};
///
/// let request = CheckoutRequest::builder()
///     .tool(catalog::lookup("LADW").unwrap())?
///     .rental_day_count(3)?
///     .discount_percent(10)?
///     .checkout_date(NaiveDate::from_ymd_opt(2020, 7, 2))?
///     .build()?;
///
/// assert_eq!(request.rental_day_count(), 3);
/// # Ok::<(), rental_core::RentalError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    tool: Tool,
    rental_day_count: u32,
    discount_percent: DiscountPercent,
    checkout_date: NaiveDate,
}

impl CheckoutRequest {
    /// Validates all four fields at once.
    pub fn new(
        tool: Tool,
        rental_day_count: i64,
        discount_percent: i64,
        checkout_date: Option<NaiveDate>,
    ) -> RentalResult<Self> {
        CheckoutRequest::builder()
            .tool(tool)?
            .rental_day_count(rental_day_count)?
            .discount_percent(discount_percent)?
            .checkout_date(checkout_date)?
            .build()
    }

    pub fn builder() -> CheckoutRequestBuilder {
        CheckoutRequestBuilder::default()
    }

    #[inline]
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    #[inline]
    pub fn rental_day_count(&self) -> u32 {
        self.rental_day_count
    }

    #[inline]
    pub fn discount_percent(&self) -> DiscountPercent {
        self.discount_percent
    }

    #[inline]
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// Checkout date plus the rental day count.
    pub fn due_date(&self) -> NaiveDate {
        // build() already proved this addition stays on the calendar
        due_date(self.checkout_date, self.rental_day_count).unwrap_or(NaiveDate::MAX)
    }
}

fn due_date(checkout_date: NaiveDate, rental_day_count: u32) -> Option<NaiveDate> {
    checkout_date.checked_add_days(Days::new(u64::from(rental_day_count)))
}

// =============================================================================
// Builder
// =============================================================================

/// Step-by-step construction of a [`CheckoutRequest`].
#[derive(Debug, Clone, Default)]
pub struct CheckoutRequestBuilder {
    tool: Option<Tool>,
    rental_day_count: Option<u32>,
    discount_percent: Option<DiscountPercent>,
    checkout_date: Option<NaiveDate>,
}

impl CheckoutRequestBuilder {
    /// Sets the tool. It must match its catalog entry.
    pub fn tool(mut self, tool: Tool) -> RentalResult<Self> {
        if !validation::validate_tool(&tool) {
            return Err(RentalError::InvalidToolCode);
        }
        self.tool = Some(tool);
        Ok(self)
    }

    /// Sets the number of rental days. Must be greater than 0.
    pub fn rental_day_count(mut self, days: i64) -> RentalResult<Self> {
        self.rental_day_count = Some(check_rental_days(days)?);
        Ok(self)
    }

    /// Sets the discount. Must be between 0 and 100.
    pub fn discount_percent(mut self, percent: i64) -> RentalResult<Self> {
        self.discount_percent = Some(DiscountPercent::new(percent)?);
        Ok(self)
    }

    /// Sets the checkout date. `None` is rejected.
    pub fn checkout_date(mut self, date: Option<NaiveDate>) -> RentalResult<Self> {
        self.checkout_date = Some(require_checkout_date(date)?);
        Ok(self)
    }

    /// Finishes the request.
    ///
    /// Fails with the error of the first unset field, in declaration order,
    /// or with `InvalidRentalDayCount` when the due date would fall past the
    /// last representable date.
    pub fn build(self) -> RentalResult<CheckoutRequest> {
        let tool = self.tool.ok_or(RentalError::InvalidToolCode)?;
        let rental_day_count = self
            .rental_day_count
            .ok_or(RentalError::InvalidRentalDayCount)?;
        let discount_percent = self
            .discount_percent
            .ok_or(RentalError::InvalidDiscountPercent)?;
        let checkout_date = self.checkout_date.ok_or(RentalError::InvalidCheckoutDate)?;

        if due_date(checkout_date, rental_day_count).is_none() {
            return Err(RentalError::InvalidRentalDayCount);
        }

        Ok(CheckoutRequest {
            tool,
            rental_day_count,
            discount_percent,
            checkout_date,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
