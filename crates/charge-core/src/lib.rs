//! # charge-core
//!
//! Core types and traits for the strike-charge Lightning invoicing
//! client.
//!
//! This crate provides:
//! - `ChargeService` trait for implementing invoicing providers
//! - `Charge` and `ChargeRequest` for the invoice lifecycle
//! - `Currency` for the enumerated set of accepted currencies
//! - `ChargeError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use charge_core::{ChargeRequest, ChargeService, Currency};
//!
//! // Build an invoice request for 4200 satoshis
//! let request = ChargeRequest::new(4200, Currency::Btc)
//!     .with_description("services rendered");
//!
//! // Create it through any provider implementing ChargeService
//! let mut charge = service.create_charge(&request).await?;
//!
//! // Hand charge.payment_request to the payer's wallet, then poll
//! service.refresh(&mut charge).await?;
//! if charge.is_paid() {
//!     // fulfill
//! }
//! ```

pub mod charge;
pub mod currency;
pub mod error;
pub mod service;

// Re-exports for convenience
pub use charge::{Charge, ChargeRequest};
pub use currency::Currency;
pub use error::{ChargeError, ChargeResult};
pub use service::{BoxedChargeService, ChargeService};
