//! # Pricing Engine
//!
//! Turns a validated [`CheckoutRequest`] into a [`RentalAgreement`].
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  checkout_date + rental_days ─────────────────────────► due_date       │
//! │                                                            │            │
//! │  calendar::charge_days(checkout, due, policy) ◄────────────┘            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  daily_charge × charge_days ──────────────────► pre_discount (exact)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  pre_discount × discount% ────────────────────► discount (half-up)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  pre_discount − discount ─────────────────────► final (exact)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Every amount is [`Money`], so nothing ever carries more than two decimal
//! places. Pricing cannot fail once a request has been validated.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar;
use crate::checkout::CheckoutRequest;
use crate::error::RentalResult;
use crate::money::Money;
use crate::types::{DiscountPercent, Tool};

/// The priced, itemized result of a checkout.
///
/// Created once by [`price`] and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalAgreement {
    pub tool: Tool,
    pub rental_days: u32,
    pub checkout_date: NaiveDate,
    pub due_date: NaiveDate,
    pub daily_rental_charge: Money,
    pub charge_days: u32,
    pub pre_discount_charge: Money,
    pub discount_percent: DiscountPercent,
    pub discount_amount: Money,
    pub final_charge: Money,
}

/// Prices a validated checkout request.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use rental_core::{catalog, pricing, CheckoutRequest};
///
/// let request = CheckoutRequest::new(
///     catalog::lookup("CHNS").unwrap(),
///     5,
///     25,
///     NaiveDate::from_ymd_opt(2015, 7, 2),
/// )?;
/// let agreement = pricing::price(&request);
///
/// assert_eq!(agreement.charge_days, 3);
/// assert_eq!(agreement.pre_discount_charge.cents(), 447);
/// assert_eq!(agreement.discount_amount.cents(), 112);
/// assert_eq!(agreement.final_charge.cents(), 335);
/// # Ok::<(), rental_core::RentalError>(())
/// ```
pub fn price(request: &CheckoutRequest) -> RentalAgreement {
    let tool = request.tool();
    let rental_days = request.rental_day_count();
    let checkout_date = request.checkout_date();
    let due_date = request.due_date();
    let discount_percent = request.discount_percent();

    let policy = tool.tool_type().policy();
    let daily_rental_charge = policy.daily_charge;
    let charge_days = calendar::charge_days(checkout_date, due_date, &policy);

    let pre_discount_charge = daily_rental_charge.multiply_days(charge_days);
    let discount_amount = pre_discount_charge.percent_of(discount_percent);
    let final_charge = pre_discount_charge - discount_amount;

    tracing::debug!(
        tool_code = tool.code(),
        rental_days,
        charge_days,
        pre_discount_cents = pre_discount_charge.cents(),
        discount_cents = discount_amount.cents(),
        final_cents = final_charge.cents(),
        "priced rental agreement"
    );

    RentalAgreement {
        tool: tool.clone(),
        rental_days,
        checkout_date,
        due_date,
        daily_rental_charge,
        charge_days,
        pre_discount_charge,
        discount_percent,
        discount_amount,
        final_charge,
    }
}

/// Validates the raw fields and prices them in one step.
///
/// Same as building a [`CheckoutRequest`] with [`CheckoutRequest::new`] and
/// passing it to [`price`].
pub fn quote(
    tool: Tool,
    rental_days: i64,
    discount_percent: i64,
    checkout_date: Option<NaiveDate>,
) -> RentalResult<RentalAgreement> {
    let request = CheckoutRequest::new(tool, rental_days, discount_percent, checkout_date)?;
    Ok(price(&request))
}

// =============================================================================
// Unit Tests
// =============================================================================
