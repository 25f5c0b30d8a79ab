//! In-memory stores.
//!
//! Records live in a `BTreeMap` keyed by id behind a `tokio::sync::RwLock`,
//! so iteration order is ascending id like the Postgres stores. Ids start at 1
//! and are never reused, even after a delete.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{PaymentStore, SubscriptionStore};
use crate::{
    error::AppError,
    models::{
        payment::{NewPayment, Payment},
        subscription::{NewSubscription, Subscription},
    },
};

#[derive(Debug)]
struct Table<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

/// Subscription store kept in process memory.
#[derive(Debug, Default)]
pub struct MemorySubscriptionStore {
    table: RwLock<Table<Subscription>>,
}

impl MemorySubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriptionStore for MemorySubscriptionStore {
    async fn insert(&self, subscription: NewSubscription) -> Result<Subscription, AppError> {
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| subscription.into_subscription(id)))
    }

    async fn find_all(&self) -> Result<Vec<Subscription>, AppError> {
        Ok(self.table.read().await.all())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Payment store kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryPaymentStore {
    table: RwLock<Table<Payment>>,
}

impl MemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for MemoryPaymentStore {
    async fn insert(&self, payment: NewPayment) -> Result<Payment, AppError> {
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| payment.into_payment(id)))
    }

    async fn find_all(&self) -> Result<Vec<Payment>, AppError> {
        Ok(self.table.read().await.all())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
