//! PostgreSQL stores built on the shared sqlx pool.

use async_trait::async_trait;

use super::{PaymentStore, SubscriptionStore};
use crate::{
    db::DbPool,
    error::AppError,
    models::{
        payment::{NewPayment, Payment},
        subscription::{NewSubscription, Subscription},
    },
};

/// Subscription store over the `subscriptions` table.
#[derive(Debug, Clone)]
pub struct PgSubscriptionStore {
    pool: DbPool,
}

impl PgSubscriptionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionStore for PgSubscriptionStore {
    async fn insert(&self, subscription: NewSubscription) -> Result<Subscription, AppError> {
        let subscription = sqlx::query_as::<_, Subscription>(
            r#"
            INSERT INTO subscriptions (name, billing_cycle, amount, next_payment_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, billing_cycle, amount, next_payment_date
            "#,
        )
        .bind(subscription.name)
        .bind(subscription.billing_cycle)
        .bind(subscription.amount)
        .bind(subscription.next_payment_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(subscription)
    }

    async fn find_all(&self) -> Result<Vec<Subscription>, AppError> {
        let subscriptions = sqlx::query_as::<_, Subscription>(
            r#"
            SELECT id, name, billing_cycle, amount, next_payment_date
            FROM subscriptions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(subscriptions)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Payment store over the `payments` table.
#[derive(Debug, Clone)]
pub struct PgPaymentStore {
    pool: DbPool,
}

impl PgPaymentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentStore for PgPaymentStore {
    async fn insert(&self, payment: NewPayment) -> Result<Payment, AppError> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (subscription_name, amount, date)
            VALUES ($1, $2, $3)
            RETURNING id, subscription_name, amount, date
            "#,
        )
        .bind(payment.subscription_name)
        .bind(payment.amount)
        .bind(payment.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(payment)
    }

    async fn find_all(&self) -> Result<Vec<Payment>, AppError> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT id, subscription_name, amount, date FROM payments ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
