//! # Agreement Report
//!
//! Renders a [`RentalAgreement`] as the itemized text handed to the customer.
//!
//! ```text
//! Tool code: LADW
//! Tool type: Ladder
//! Tool brand: Werner
//! Rental days: 3
//! Checkout date: 07/02/20
//! Due date: 07/05/20
//! Daily rental charge: $1.99
//! Charge days: 2
//! Pre-discount charge: $3.98
//! Discount percent: 10%
//! Discount amount: $0.40
//! Final charge: $3.58
//! ```
//! Rendering builds a `String`; writing it anywhere is the caller's job.

use std::fmt;

use crate::money::group_thousands;
use crate::pricing::RentalAgreement;
use crate::DATE_FORMAT;

/// Renders the agreement, one `Label: value` line each, `\n` terminated.
pub fn render(agreement: &RentalAgreement) -> String {
    agreement.to_string()
}

impl fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tool code: {}", self.tool.code())?;
        writeln!(f, "Tool type: {}", self.tool.tool_type())?;
        writeln!(f, "Tool brand: {}", self.tool.brand())?;
        writeln!(f, "Rental days: {}", group_thousands(u64::from(self.rental_days)))?;
        writeln!(f, "Checkout date: {}", self.checkout_date.format(DATE_FORMAT))?;
        writeln!(f, "Due date: {}", self.due_date.format(DATE_FORMAT))?;
        writeln!(f, "Daily rental charge: {}", self.daily_rental_charge)?;
        writeln!(f, "Charge days: {}", group_thousands(u64::from(self.charge_days)))?;
        writeln!(f, "Pre-discount charge: {}", self.pre_discount_charge)?;
        writeln!(f, "Discount percent: {}", self.discount_percent)?;
        writeln!(f, "Discount amount: {}", self.discount_amount)?;
        writeln!(f, "Final charge: {}", self.final_charge)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
