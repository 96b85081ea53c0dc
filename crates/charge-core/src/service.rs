//! # Charge Service Trait
//!
//! Core trait for Lightning invoicing providers.
//!
//! ## Design Pattern
//!
//! The Strategy pattern keeps provider plumbing out of client code:
//! each invoicing backend implements [`ChargeService`], and callers
//! hold a `BoxedChargeService` when they want to stay provider
//! agnostic.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             ChargeService (trait)           │
//! │  ├── create_charge()                        │
//! │  ├── fetch_charge()                         │
//! │  └── refresh()          (provided)          │
//! └─────────────────────────────────────────────┘
//!                       ▲
//!               ┌───────┴───────┐
//!               │  StrikeClient │
//!               └───────────────┘
//! ```
//!
//! `refresh` is an explicit method rather than a lazy attribute so
//! that every call site that may perform network I/O says so.

use crate::charge::{Charge, ChargeRequest};
use crate::error::ChargeResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for invoicing provider implementations.
///
/// Every operation performs at most one outbound request. The library
/// never retries and never polls in the background; a "wait until
/// paid" loop belongs to the calling application.
#[async_trait]
pub trait ChargeService: Send + Sync {
    /// Create a new invoice on the remote server.
    ///
    /// Validates the request locally first; validation failures are
    /// returned before any network call. On success the returned
    /// [`Charge`] carries the server-assigned id and payment request.
    async fn create_charge(&self, request: &ChargeRequest) -> ChargeResult<Charge>;

    /// Retrieve an existing charge by its server-assigned id.
    ///
    /// All fields, including `paid`, come from the server response.
    async fn fetch_charge(&self, charge_id: &str) -> ChargeResult<Charge>;

    /// Re-query the server for the charge's current state.
    ///
    /// No-op when `charge.paid` is already true: a cleared Lightning
    /// payment is final, so the round trip is skipped. Otherwise the
    /// charge is overwritten with the server's view, which is how
    /// `paid` transitions from false to true.
    async fn refresh(&self, charge: &mut Charge) -> ChargeResult<()> {
        if charge.paid {
            return Ok(());
        }
        *charge = self.fetch_charge(&charge.id).await?;
        Ok(())
    }

    /// Get the provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed charge service (dynamic dispatch)
pub type BoxedChargeService = Arc<dyn ChargeService>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub provider that counts fetches and always reports paid.
    struct CountingService {
        fetches: AtomicUsize,
    }

    impl CountingService {
        fn new() -> Self {
            Self {
                fetches: AtomicUsize::new(0),
            }
        }

        fn served_charge(paid: bool) -> Charge {
            Charge {
                id: "ch_stub".to_string(),
                amount: 100,
                currency: Currency::Btc,
                amount_satoshi: 100,
                description: String::new(),
                customer_id: String::new(),
                payment_request: "lntb1u1p...".to_string(),
                payment_hash: "00ff".to_string(),
                paid,
                created: None,
                updated: None,
            }
        }
    }

    #[async_trait]
    impl ChargeService for CountingService {
        async fn create_charge(&self, _request: &ChargeRequest) -> ChargeResult<Charge> {
            Ok(Self::served_charge(false))
        }

        async fn fetch_charge(&self, _charge_id: &str) -> ChargeResult<Charge> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(Self::served_charge(true))
        }

        fn provider_name(&self) -> &'static str {
            "stub"
        }
    }

    #[tokio::test]
    async fn test_refresh_fetches_while_unpaid() {
        let service = CountingService::new();
        let mut charge = CountingService::served_charge(false);

        service.refresh(&mut charge).await.unwrap();

        assert!(charge.paid);
        assert_eq!(service.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refresh_skips_server_once_paid() {
        let service = CountingService::new();
        let mut charge = CountingService::served_charge(true);
        let before = charge.clone();

        service.refresh(&mut charge).await.unwrap();
        service.refresh(&mut charge).await.unwrap();

        assert_eq!(service.fetches.load(Ordering::SeqCst), 0);
        assert_eq!(charge, before);
    }
}
