//! Router construction and shared handler state.

use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers,
    services::{payment_service::PaymentService, subscription_service::SubscriptionService},
};

/// State shared with every handler via `State` extraction.
#[derive(Clone)]
pub struct AppState {
    pub subscriptions: SubscriptionService,
    pub payments: PaymentService,
}

/// Build the HTTP router.
///
/// Cross-origin requests are accepted from any origin with any method and
/// header. There is no authentication layer.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/subscriptions",
            get(handlers::subscriptions::list_subscriptions)
                .post(handlers::subscriptions::create_subscription),
        )
        .route(
            "/subscriptions/{id}",
            delete(handlers::subscriptions::delete_subscription),
        )
        .route(
            "/payments",
            get(handlers::payments::list_payments).post(handlers::payments::create_payment),
        )
        .route(
            "/payments/spending",
            get(handlers::payments::spending_by_subscription),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use chrono::NaiveDate;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::store::memory::{MemoryPaymentStore, MemorySubscriptionStore};

    fn app() -> Router {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        router(AppState {
            subscriptions: SubscriptionService::new(Arc::new(MemorySubscriptionStore::new())),
            payments: PaymentService::with_clock(
                Arc::new(MemoryPaymentStore::new()),
                Arc::new(move || today),
            ),
        })
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        // Extractor rejections answer in plain text
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn create_subscription_returns_id_and_fields() {
        let app = app();

        let (status, body) = send(
            &app,
            "POST",
            "/subscriptions",
            Some(json!({
                "id": 999,
                "name": "Netflix",
                "billingCycle": "monthly",
                "amount": 15.99,
                "nextPaymentDate": "2024-07-01"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Netflix");
        assert_eq!(body["billingCycle"], "monthly");
        assert_eq!(body["amount"], 15.99);
        assert_eq!(body["nextPaymentDate"], "2024-07-01");

        let (status, list) = send(&app, "GET", "/subscriptions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([body]));
    }

    #[tokio::test]
    async fn delete_subscription_is_no_content_even_when_missing() {
        let app = app();
        send(
            &app,
            "POST",
            "/subscriptions",
            Some(json!({
                "name": "Netflix",
                "billingCycle": "monthly",
                "amount": 15.99,
                "nextPaymentDate": "2024-07-01"
            })),
        )
        .await;

        let (status, _) = send(&app, "DELETE", "/subscriptions/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "DELETE", "/subscriptions/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, list) = send(&app, "GET", "/subscriptions", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn delete_with_non_numeric_id_is_rejected() {
        let app = app();

        let (status, _) = send(&app, "DELETE", "/subscriptions/abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_payment_overrides_date() {
        let app = app();

        let (status, body) = send(
            &app,
            "POST",
            "/payments",
            Some(json!({
                "subscriptionName": "Netflix",
                "amount": 15.99,
                "date": "1999-01-01"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["date"], "2024-06-15");
        assert_eq!(body["subscriptionName"], "Netflix");

        let (_, list) = send(&app, "GET", "/payments", None).await;
        assert_eq!(list, json!([body]));
    }

    #[tokio::test]
    async fn spending_groups_by_name() {
        let app = app();

        let (status, empty) = send(&app, "GET", "/payments/spending", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(empty, json!({}));

        for (name, amount) in [("Netflix", 10.0), ("Spotify", 9.5), ("Netflix", 2.5)] {
            send(
                &app,
                "POST",
                "/payments",
                Some(json!({ "subscriptionName": name, "amount": amount })),
            )
            .await;
        }

        let (_, spending) = send(&app, "GET", "/payments/spending", None).await;
        assert_eq!(spending, json!({ "Netflix": 12.5, "Spotify": 9.5 }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_client_error() {
        let app = app();

        let (status, _) = send(
            &app,
            "POST",
            "/payments",
            Some(json!({ "subscriptionName": "Netflix", "amount": "lots" })),
        )
        .await;

        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn health_reports_connected_store() {
        let app = app();

        let (status, body) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"], "connected");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let app = app();
        let request = Request::builder()
            .method("GET")
            .uri("/subscriptions")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
