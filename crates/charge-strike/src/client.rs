//! # Strike Charge Client
//!
//! Implementation of [`ChargeService`] against the Strike API.
//!
//! Strike accepts form-encoded requests authenticated as HTTP Basic
//! with the API key as user name and an empty password, and answers
//! with JSON charge bodies. Every operation here performs at most one
//! outbound request; there is no retry and no background polling.

use crate::config::StrikeConfig;
use async_trait::async_trait;
use charge_core::{Charge, ChargeError, ChargeRequest, ChargeResult, ChargeService, Currency};
use chrono::DateTime;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// HTTP client for Strike charges
///
/// Holds one immutable [`StrikeConfig`]; distinct configurations
/// (mainnet vs testnet) live in distinct clients.
pub struct StrikeClient {
    config: StrikeConfig,
    client: Client,
}

impl StrikeClient {
    /// Create a client for the given configuration
    pub fn new(config: StrikeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> ChargeResult<Self> {
        let config = StrikeConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &StrikeConfig {
        &self.config
    }

    /// Read the response body, mapping a non-success status to the
    /// matching error. `charge_id` distinguishes a 404 on retrieval
    /// from any other client error.
    async fn read_charge_body(
        &self,
        response: reqwest::Response,
        charge_id: Option<&str>,
    ) -> ChargeResult<Charge> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChargeError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Strike API error: status={}, body={}", status, body);

            if status == StatusCode::NOT_FOUND {
                if let Some(charge_id) = charge_id {
                    return Err(ChargeError::ChargeNotFound {
                        charge_id: charge_id.to_string(),
                    });
                }
            }
            return Err(api_error(status, &body));
        }

        let charge: StrikeChargeResponse = serde_json::from_str(&body).map_err(|e| {
            ChargeError::Serialization(format!("Failed to parse Strike response: {e}"))
        })?;

        Ok(charge.into())
    }
}

#[async_trait]
impl ChargeService for StrikeClient {
    #[instrument(skip(self, request), fields(amount = request.amount, currency = %request.currency))]
    async fn create_charge(&self, request: &ChargeRequest) -> ChargeResult<Charge> {
        request.validate()?;

        // Strike takes the creation fields form-encoded
        let form = [
            ("amount", request.amount.to_string()),
            ("currency", request.currency.as_str().to_string()),
            ("description", request.description.clone()),
            ("customer_id", request.customer_id.clone()),
        ];

        let url = self.config.charges_url();
        debug!("Creating Strike charge: {} sat", request.amount);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.api_key, Some(""))
            .form(&form)
            .send()
            .await
            .map_err(|e| ChargeError::Network(e.to_string()))?;

        let charge = self.read_charge_body(response, None).await?;

        info!("Created Strike charge: id={}", charge.id);
        Ok(charge)
    }

    #[instrument(skip(self))]
    async fn fetch_charge(&self, charge_id: &str) -> ChargeResult<Charge> {
        if charge_id.is_empty() {
            return Err(ChargeError::InvalidRequest(
                "charge id must not be empty".to_string(),
            ));
        }

        let url = self.config.charge_url(charge_id);
        debug!("Fetching Strike charge");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.api_key, Some(""))
            .send()
            .await
            .map_err(|e| ChargeError::Network(e.to_string()))?;

        self.read_charge_body(response, Some(charge_id)).await
    }

    fn provider_name(&self) -> &'static str {
        "strike"
    }
}

/// Map a non-success, non-404 status to [`ChargeError::Api`],
/// surfacing the server's message when the body carries one.
fn api_error(status: StatusCode, body: &str) -> ChargeError {
    if let Ok(parsed) = serde_json::from_str::<StrikeErrorResponse>(body) {
        if !parsed.message.is_empty() {
            return ChargeError::Api {
                status: status.as_u16(),
                message: parsed.message,
            };
        }
    }

    ChargeError::Api {
        status: status.as_u16(),
        message: format!("HTTP {status}: {body}"),
    }
}

// =============================================================================
// Strike API Types
// =============================================================================

/// Charge body as served by Strike; timestamps are epoch milliseconds
#[derive(Debug, Deserialize)]
struct StrikeChargeResponse {
    id: String,
    amount: i64,
    currency: Currency,
    amount_satoshi: i64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    customer_id: String,
    payment_request: String,
    payment_hash: String,
    paid: bool,
    #[serde(default)]
    created: Option<i64>,
    #[serde(default)]
    updated: Option<i64>,
}

impl From<StrikeChargeResponse> for Charge {
    fn from(response: StrikeChargeResponse) -> Self {
        Charge {
            id: response.id,
            amount: response.amount,
            currency: response.currency,
            amount_satoshi: response.amount_satoshi,
            description: response.description,
            customer_id: response.customer_id,
            payment_request: response.payment_request,
            payment_hash: response.payment_hash,
            paid: response.paid,
            created: response.created.and_then(DateTime::from_timestamp_millis),
            updated: response.updated.and_then(DateTime::from_timestamp_millis),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StrikeErrorResponse {
    #[serde(default)]
    message: String,
}
