//! Subscription HTTP handlers.
//!
//! This module implements the subscription endpoints:
//! - GET /subscriptions - List every subscription
//! - POST /subscriptions - Create a subscription
//! - DELETE /subscriptions/{id} - Delete a subscription

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    app::AppState,
    error::AppError,
    models::subscription::{NewSubscription, Subscription},
};

/// List all subscriptions.
///
/// # Response (200 OK)
///
/// ```json
/// [
///   {
///     "id": 1,
///     "name": "Netflix",
///     "billingCycle": "monthly",
///     "amount": 15.99,
///     "nextPaymentDate": "2024-07-01"
///   }
/// ]
/// ```
pub async fn list_subscriptions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Subscription>>, AppError> {
    Ok(Json(state.subscriptions.list().await?))
}

/// Create a subscription.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Netflix",
///   "billingCycle": "monthly",
///   "amount": 15.99,
///   "nextPaymentDate": "2024-07-01"
/// }
/// ```
///
/// # Response
///
/// Returns 201 Created with the stored subscription, including its new `id`.
pub async fn create_subscription(
    State(state): State<AppState>,
    Json(request): Json<NewSubscription>,
) -> Result<impl IntoResponse, AppError> {
    let subscription = state.subscriptions.create(request).await?;

    Ok((StatusCode::CREATED, Json(subscription)))
}

/// Delete a subscription.
///
/// Returns 204 No Content, also when no subscription had that id.
pub async fn delete_subscription(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.subscriptions.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
