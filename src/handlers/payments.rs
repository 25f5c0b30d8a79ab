//! Payment HTTP handlers.
//!
//! This module implements the payment endpoints:
//! - GET /payments - Payment history
//! - POST /payments - Record a payment dated today
//! - GET /payments/spending - Total spent per subscription name

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    app::AppState,
    error::AppError,
    models::payment::{CreatePaymentRequest, Payment},
    services::payment_service::Spending,
};

/// List all payments.
pub async fn list_payments(State(state): State<AppState>) -> Result<Json<Vec<Payment>>, AppError> {
    Ok(Json(state.payments.list().await?))
}

/// Record a payment.
///
/// # Request Body
///
/// ```json
/// {
///   "subscriptionName": "Netflix",
///   "amount": 15.99
/// }
/// ```
///
/// # Response (201 Created)
///
/// ```json
/// {
///   "id": 7,
///   "subscriptionName": "Netflix",
///   "amount": 15.99,
///   "date": "2024-06-15"
/// }
/// ```
///
/// The `date` is set by the server. A `date` in the request body is ignored.
pub async fn create_payment(
    State(state): State<AppState>,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payment = state.payments.create(request).await?;

    Ok((StatusCode::CREATED, Json(payment)))
}

/// Spending grouped by subscription name.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "Netflix": 31.98,
///   "Spotify": 9.99
/// }
/// ```
///
/// An empty payment history yields `{}`.
pub async fn spending_by_subscription(
    State(state): State<AppState>,
) -> Result<Json<Spending>, AppError> {
    Ok(Json(state.payments.spending_by_subscription().await?))
}
