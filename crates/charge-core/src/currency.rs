//! # Currency Types
//!
//! Currencies accepted by the Strike invoicing API.
//! Amounts are always expressed in the smallest unit (satoshis).

use serde::{Deserialize, Serialize};

/// Supported invoice currencies
///
/// Strike only settles over the Lightning Network, so Bitcoin is the
/// only code the API accepts today. Kept as an enum so the wire code
/// is validated at deserialization rather than at the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Btc,
}

impl Currency {
    /// Returns the wire code the API expects
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Btc => "btc",
        }
    }

    /// Returns the number of smallest units per whole coin
    /// (satoshis per bitcoin)
    pub fn smallest_units_per_coin(&self) -> i64 {
        match self {
            Currency::Btc => 100_000_000,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Btc
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}
