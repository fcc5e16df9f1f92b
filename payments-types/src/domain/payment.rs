//! Payment domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned identifier for a Payment.
///
/// Ids are surrogate keys handed out by the store at insertion time; the
/// service never mints one itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1)]
pub struct PaymentId(i64);

impl PaymentId {
    /// Wraps a raw key read back from the store.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw key.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A recorded payment.
///
/// Payments are immutable once created. Currency and status are free-form
/// tokens chosen by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Amount as supplied by the caller
    #[schema(example = 100)]
    pub amount: f64,
    /// Currency token, e.g. "USD"
    #[schema(example = "USD")]
    pub currency: String,
    /// Status token, e.g. "pending"
    #[schema(example = "pending")]
    pub status: String,
}

impl Payment {
    /// Reconstructs a payment from database fields.
    pub fn from_parts(id: PaymentId, amount: f64, currency: String, status: String) -> Self {
        Self {
            id,
            amount,
            currency,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_serializes_flat() {
        let payment = Payment::from_parts(
            PaymentId::from_i64(1),
            100.0,
            "USD".to_string(),
            "pending".to_string(),
        );

        let json = serde_json::to_value(&payment).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["amount"].as_f64(), Some(100.0));
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn test_payment_id_parse() {
        let id: PaymentId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);
        assert!("abc".parse::<PaymentId>().is_err());
    }
}
