//! Record stores for subscriptions and payments.
//!
//! Each entity gets its own storage trait. Services hold an `Arc<dyn ...>` to
//! the store they were built with, so the backing engine is chosen once at
//! startup:
//!
//! - [`postgres`]: sqlx-backed tables, used when `DATABASE_URL` is set
//! - [`memory`]: process-local tables, used for tests and database-less runs
//!
//! Stores assign ids and return records in ascending id order. Every call is a
//! single-record write or a single read; no cross-record transaction is used.

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        payment::{NewPayment, Payment},
        subscription::{NewSubscription, Subscription},
    },
};

pub mod memory;
pub mod postgres;

/// Storage for subscription records.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// Persist a new subscription and return it with its assigned id.
    async fn insert(&self, subscription: NewSubscription) -> Result<Subscription, AppError>;

    /// Every stored subscription.
    async fn find_all(&self) -> Result<Vec<Subscription>, AppError>;

    /// Remove a subscription. Returns `false` when no record had that id.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Storage for payment records. Payments are append-only.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Persist a new payment and return it with its assigned id.
    async fn insert(&self, payment: NewPayment) -> Result<Payment, AppError>;

    /// Every stored payment.
    async fn find_all(&self) -> Result<Vec<Payment>, AppError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
