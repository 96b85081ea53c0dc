//! # Charge Types
//!
//! Invoice request and charge record types for strike-charge-rs.
//!
//! A [`Charge`] mirrors one invoice held on the remote server. Charges
//! are only constructed by a [`crate::ChargeService`] implementation
//! from a server response, so `id` and `payment_request` are always
//! populated on a value the caller can reach.

use crate::currency::Currency;
use crate::error::{ChargeError, ChargeResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller input for creating a new invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Amount in satoshis; must be positive
    pub amount: i64,

    /// Invoice currency
    pub currency: Currency,

    /// Free-text invoice description
    #[serde(default)]
    pub description: String,

    /// Caller-supplied correlation id, forwarded verbatim to the server
    #[serde(default)]
    pub customer_id: String,
}

impl ChargeRequest {
    /// Create a request for the given amount in satoshis
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            description: String::new(),
            customer_id: String::new(),
        }
    }

    /// Builder: set the invoice description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set the customer correlation id
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = customer_id.into();
        self
    }

    /// Check the request locally, before any network call is made.
    ///
    /// Rejects non-positive amounts. Currency needs no check here: the
    /// enum cannot hold an unsupported code.
    pub fn validate(&self) -> ChargeResult<()> {
        if self.amount <= 0 {
            return Err(ChargeError::InvalidRequest(format!(
                "amount must be a positive number of satoshis, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// One invoice record, mirroring server-side state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Server-assigned charge identifier
    pub id: String,

    /// Requested amount in satoshis
    pub amount: i64,

    /// Invoice currency
    pub currency: Currency,

    /// Server-echoed amount in satoshis
    pub amount_satoshi: i64,

    /// Invoice description
    pub description: String,

    /// Customer correlation id; empty when the caller supplied none
    #[serde(default)]
    pub customer_id: String,

    /// BOLT11 payment request the payer's wallet consumes.
    /// Immutable once the server has created the invoice.
    pub payment_request: String,

    /// Hex-encoded payment hash of the invoice
    pub payment_hash: String,

    /// Whether payment has been observed to clear.
    /// Sticky: once true, the client never flips it back.
    pub paid: bool,

    /// Server-side creation time
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    /// Server-side last-update time
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

impl Charge {
    /// Whether payment has cleared, as of the last server observation
    pub fn is_paid(&self) -> bool {
        self.paid
    }
}
