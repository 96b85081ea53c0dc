//! # charge-strike
//!
//! ACINQ Strike provider for the strike-charge Lightning invoicing
//! client.
//!
//! Strike issues BOLT11 invoices over a small HTTP API with two
//! endpoints: charge creation and charge retrieval. This crate binds
//! a [`StrikeConfig`] (API key, host, base path) to a
//! [`StrikeClient`] implementing the `ChargeService` trait from
//! `charge-core`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use charge_core::{ChargeRequest, ChargeService, Currency};
//! use charge_strike::{StrikeClient, StrikeConfig};
//!
//! // Bind connection parameters once; testnet and mainnet configs
//! // can coexist in one process.
//! let config = StrikeConfig::new(
//!     api_key,
//!     charge_strike::config::TESTNET_HOST,
//!     "/api/v1/",
//! )?;
//! let client = StrikeClient::new(config);
//!
//! // Create an invoice for 4200 satoshis
//! let request = ChargeRequest::new(4200, Currency::Btc)
//!     .with_description("services rendered");
//! let mut charge = client.create_charge(&request).await?;
//!
//! // Show charge.payment_request to the payer, then poll on your
//! // own schedule. Refresh is a no-op once the charge is paid.
//! client.refresh(&mut charge).await?;
//! if charge.is_paid() {
//!     // fulfill the order
//! }
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::StrikeClient;
pub use config::StrikeConfig;
