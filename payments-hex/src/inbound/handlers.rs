//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use payments_types::{
    AppError, CreatePaymentRequest, ErrorResponse, HealthResponse, PaymentRepository,
    ReadinessResponse,
};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<R: PaymentRepository> {
    pub service: PaymentService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Liveness probe. Never touches the store.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".into(),
    })
}

/// Readiness probe: one round-trip to the store.
#[tracing::instrument(skip(state))]
pub async fn ready<R: PaymentRepository>(State(state): State<Arc<AppState<R>>>) -> Response {
    match state.service.readiness().await {
        Ok(()) => Json(ReadinessResponse {
            status: "ready".into(),
            error: None,
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ReadinessResponse {
                status: "not ready".into(),
                error: Some(e.to_string()),
            }),
        )
            .into_response(),
    }
}

/// List all payments.
#[tracing::instrument(skip(state))]
pub async fn list_payments<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.service.list_payments().await?;
    Ok(Json(payments))
}

/// Reads the create body.
///
/// A body sent without a JSON content type is ignored, so every field reaches
/// the store as NULL. Unreadable JSON is answered with a JSON error body.
fn read_create_body(
    payload: Result<Json<CreatePaymentRequest>, JsonRejection>,
) -> Result<CreatePaymentRequest, ApiError> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(CreatePaymentRequest::default()),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected create body");
            Err(AppError::InvalidRequest(rejection.body_text()).into())
        }
    }
}

/// Create a payment.
#[tracing::instrument(skip(state, payload))]
pub async fn create_payment<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    payload: Result<Json<CreatePaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req = read_create_body(payload)?;
    let payment = state.service.create_payment(req).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}
