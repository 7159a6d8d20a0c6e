//! # rental-core: Pure Business Logic for the Tool Rental Counter
//!
//! This crate is the **heart** of the tool rental counter. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tool Rental Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rental-cli (terminal)                        │   │
//! │  │    Tool code ──► Days ──► Discount ──► Date ──► Agreement      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rental-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │ catalog  │ │ calendar │ │ pricing  │ │validation│          │   │
//! │  │   │  LADW    │ │ holidays │ │  Money   │ │ checkout │          │   │
//! │  │   │  JAKR …  │ │ weekends │ │ half-up  │ │ builder  │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Tool, tool type policy table, brand, discount percent
//! - [`catalog`] - The four rentable tools
//! - [`calendar`] - Holiday rules and charge-day counting
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Rental agreement calculation
//! - [`checkout`] - Validated checkout request and its builder
//! - [`validation`] - Text input checks
//! - [`report`] - Agreement rendering
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rental_core::{catalog, pricing, CheckoutRequest};
//!
//! let request = CheckoutRequest::new(
//!     catalog::lookup("JAKR").unwrap(),
//!     9,
//!     0,
//!     NaiveDate::from_ymd_opt(2015, 7, 2),
//! )?;
//!
//! let agreement = pricing::price(&request);
//! assert_eq!(agreement.charge_days, 5);
//! assert_eq!(agreement.final_charge.to_string(), "$14.95");
//! # Ok::<(), rental_core::RentalError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calendar;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{CheckoutRequest, CheckoutRequestBuilder};
pub use error::{RentalError, RentalResult};
pub use money::Money;
pub use pricing::RentalAgreement;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Length of every tool code (`LADW`, `CHNS`, ...).
pub const TOOL_CODE_LEN: usize = 4;

/// Largest discount a clerk can apply.
pub const MAX_DISCOUNT_PERCENT: u8 = 100;

/// `chrono` format for dates shown to and typed by the clerk (`MM/DD/YY`).
pub const DATE_FORMAT: &str = "%m/%d/%y";
