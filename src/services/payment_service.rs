//! Payment service - payment history and spending per subscription.
//!
//! # Server-Side Dating
//!
//! A payment's `date` is always the server's current local date when the
//! payment is created. Whatever the client sends for a date is discarded
//! before the record reaches the store.
//!
//! # Spending Aggregation
//!
//! `spending_by_subscription` scans every stored payment and sums `amount`
//! per exact `subscription_name` (case-sensitive, no trimming). Names with
//! no payments are absent from the result rather than mapped to zero.

use std::{collections::BTreeMap, sync::Arc};

use chrono::{Local, NaiveDate};

use crate::{
    error::AppError,
    models::payment::{CreatePaymentRequest, NewPayment, Payment},
    store::PaymentStore,
};

/// Source of "today" for new payments.
pub type Today = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Spending totals keyed by subscription name.
pub type Spending = BTreeMap<String, f64>;

#[derive(Clone)]
pub struct PaymentService {
    store: Arc<dyn PaymentStore>,
    today: Today,
}

impl PaymentService {
    /// Service dating payments with the server's local calendar date.
    pub fn new(store: Arc<dyn PaymentStore>) -> Self {
        Self::with_clock(store, Arc::new(|| Local::now().date_naive()))
    }

    pub fn with_clock(store: Arc<dyn PaymentStore>, today: Today) -> Self {
        Self { store, today }
    }

    /// Every stored payment.
    pub async fn list(&self) -> Result<Vec<Payment>, AppError> {
        let payments = self.store.find_all().await?;
        tracing::debug!(count = payments.len(), "listed payments");
        Ok(payments)
    }

    /// Record a payment dated today.
    pub async fn create(&self, request: CreatePaymentRequest) -> Result<Payment, AppError> {
        let payment = NewPayment::dated(request, (self.today)());
        let payment = self.store.insert(payment).await?;
        tracing::info!(
            id = payment.id,
            subscription = %payment.subscription_name,
            date = %payment.date,
            "payment recorded"
        );
        Ok(payment)
    }

    /// Sum of payment amounts grouped by subscription name.
    pub async fn spending_by_subscription(&self) -> Result<Spending, AppError> {
        let payments = self.store.find_all().await?;
        Ok(sum_by_subscription(&payments))
    }

    /// Check that the underlying store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}

fn sum_by_subscription(payments: &[Payment]) -> Spending {
    let mut spending = Spending::new();
    for payment in payments {
        *spending
            .entry(payment.subscription_name.clone())
            .or_insert(0.0) += payment.amount;
    }
    spending
}
