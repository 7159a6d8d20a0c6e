//! # Error Types
//!
//! Domain-specific error types for rental-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rental-core errors (this file)                                        │
//! │  └── RentalError      - Checkout input rejected                        │
//! │                                                                         │
//! │  rental-cli errors (separate crate)                                    │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  └── CliError         - Terminal I/O failures                          │
//! │                                                                         │
//! │  Flow: RentalError → re-prompt (CLI)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant is a caller-input error; pricing itself never fails
//! 3. Messages are fixed strings the counter clerk sees verbatim

use thiserror::Error;

// =============================================================================
// Rental Error
// =============================================================================

/// Checkout input errors.
///
/// Raised the moment an invalid value is handed to a
/// [`CheckoutRequestBuilder`](crate::checkout::CheckoutRequestBuilder) setter,
/// or by the parsing functions in [`validation`](crate::validation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RentalError {
    /// Tool code is malformed, absent from the catalog, or the tool does not
    /// match its catalog entry.
    #[error("Invalid tool code")]
    InvalidToolCode,

    /// Rental day count is not a positive integer.
    ///
    /// ## When This Occurs
    /// - `0` or negative day counts
    /// - Non-numeric input (`"three"`)
    /// - A count so large the due date falls off the calendar
    #[error("Rental Day Count must be greater than 0")]
    InvalidRentalDayCount,

    /// Discount percent is not an integer in `[0, 100]`.
    #[error("Discount Percent must be between 0 and 100")]
    InvalidDiscountPercent,

    /// Checkout date is absent, or its text is not a real `MM/DD/YY` date.
    #[error("Checkout Date must not be null")]
    InvalidCheckoutDate,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RentalError.
pub type RentalResult<T> = Result<T, RentalError>;

// =============================================================================
// Unit Tests
// =============================================================================
