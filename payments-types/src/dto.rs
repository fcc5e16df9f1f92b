//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// A caller-supplied amount.
///
/// Form-driven clients send numbers as strings, so both shapes are accepted
/// and handed to the store for coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    /// Returns the textual form passed to the store's numeric cast.
    pub fn as_text(&self) -> String {
        match self {
            Amount::Number(n) => n.to_string(),
            Amount::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

/// Reads an optional free-form token, accepting JSON numbers and booleans as
/// their textual form.
fn scalar_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
        Bool(bool),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(s) => s,
        Scalar::Number(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

/// Request to record a new payment.
///
/// Fields are not validated by the service; missing ones reach the store as
/// NULL. Scalar tokens are stored in their textual form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentRequest {
    /// Amount as a number or numeric string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>, example = 100)]
    pub amount: Option<Amount>,
    #[serde(
        default,
        deserialize_with = "scalar_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = "USD")]
    pub currency: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = "pending")]
    pub status: Option<String>,
}

impl CreatePaymentRequest {
    /// Builds a request with every field present.
    pub fn new(
        amount: impl Into<Amount>,
        currency: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            amount: Some(amount.into()),
            currency: Some(currency.into()),
            status: Some(status.into()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Probe / error DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body of the liveness probe.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}

/// Body of the readiness probe.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    /// "ready" or "not ready"
    #[schema(example = "ready")]
    pub status: String,
    /// Store error text when not ready
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Error body returned by the payments endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "connection refused")]
    pub error: String,
}
