//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payments_types::domain::{Payment, PaymentId};
use payments_types::dto::{CreatePaymentRequest, ErrorResponse, HealthResponse, ReadinessResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process is alive", body = HealthResponse, example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Readiness probe
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Store is reachable", body = ReadinessResponse, example = json!({"status": "ready"})),
        (status = 500, description = "Store is unreachable", body = ReadinessResponse, example = json!({"status": "not ready", "error": "connection refused"}))
    )
)]
async fn ready() {}

/// List all payments
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "payments",
    responses(
        (status = 200, description = "All payments ordered by id", body = Vec<Payment>),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
async fn list_payments() {}

/// Create a payment
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = Payment),
        (status = 400, description = "Body is not readable JSON", body = ErrorResponse),
        (status = 500, description = "Store rejected the insert or is unreachable", body = ErrorResponse)
    )
)]
async fn create_payment() {}

/// OpenAPI documentation for the Payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payments API",
        version = "1.0.0",
        description = "Lists and records payments. Inputs are stored as supplied; store failures are returned verbatim with HTTP 500.",
        license(name = "MIT"),
    ),
    paths(health, ready, list_payments, create_payment),
    components(schemas(
        Payment,
        PaymentId,
        CreatePaymentRequest,
        HealthResponse,
        ReadinessResponse,
        ErrorResponse,
    )),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "payments", description = "Payment records"),
    )
)]
pub struct ApiDoc;
