//! Subscription Tracker - Main Application Entry Point
//!
//! A REST API for tracking recurring subscriptions and the payments made
//! against them, plus a spending summary grouped by subscription name.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, or in-memory stores when no database is configured
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Pick the record stores (Postgres pool + migrations, or memory)
//! 3. Build services and the HTTP router
//! 4. Start server on configured port

mod app;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod services;
mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    app::AppState,
    services::{payment_service::PaymentService, subscription_service::SubscriptionService},
    store::{
        PaymentStore, SubscriptionStore,
        memory::{MemoryPaymentStore, MemorySubscriptionStore},
        postgres::{PgPaymentStore, PgSubscriptionStore},
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let subscription_store: Arc<dyn SubscriptionStore>;
    let payment_store: Arc<dyn PaymentStore>;

    match &config.database_url {
        Some(database_url) => {
            let pool = db::create_pool(database_url, config.database_max_connections).await?;
            tracing::info!("Database pool created");

            db::run_migrations(&pool).await?;
            tracing::info!("Database migrations complete");

            subscription_store = Arc::new(PgSubscriptionStore::new(pool.clone()));
            payment_store = Arc::new(PgPaymentStore::new(pool));
        }
        None => {
            tracing::warn!("DATABASE_URL not set, records will be kept in memory only");
            subscription_store = Arc::new(MemorySubscriptionStore::new());
            payment_store = Arc::new(MemoryPaymentStore::new());
        }
    }

    let state = AppState {
        subscriptions: SubscriptionService::new(subscription_store),
        payments: PaymentService::new(payment_store),
    };
    let app = app::router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
