//! Subscription service - list, create and delete subscriptions.

use std::sync::Arc;

use crate::{
    error::AppError,
    models::subscription::{NewSubscription, Subscription},
    store::SubscriptionStore,
};

/// Thin layer over a [`SubscriptionStore`].
///
/// No field is validated: any name, cycle label, date text or amount
/// (including zero or negative) is stored as given.
#[derive(Clone)]
pub struct SubscriptionService {
    store: Arc<dyn SubscriptionStore>,
}

impl SubscriptionService {
    pub fn new(store: Arc<dyn SubscriptionStore>) -> Self {
        Self { store }
    }

    /// Every stored subscription, unfiltered.
    pub async fn list(&self) -> Result<Vec<Subscription>, AppError> {
        let subscriptions = self.store.find_all().await?;
        tracing::debug!(count = subscriptions.len(), "listed subscriptions");
        Ok(subscriptions)
    }

    /// Store a new subscription and return it with its assigned id.
    pub async fn create(&self, request: NewSubscription) -> Result<Subscription, AppError> {
        let subscription = self.store.insert(request).await?;
        tracing::info!(
            id = subscription.id,
            name = %subscription.name,
            "subscription created"
        );
        Ok(subscription)
    }

    /// Delete a subscription by id.
    ///
    /// Deleting an id that does not exist succeeds without doing anything.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.store.delete_by_id(id).await? {
            tracing::info!(id, "subscription deleted");
        } else {
            tracing::debug!(id, "delete requested for unknown subscription");
        }
        Ok(())
    }

    /// Check that the underlying store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemorySubscriptionStore;

    fn service() -> SubscriptionService {
        SubscriptionService::new(Arc::new(MemorySubscriptionStore::new()))
    }

    fn request(name: &str, amount: f64) -> NewSubscription {
        NewSubscription {
            name: name.to_string(),
            billing_cycle: "monthly".to_string(),
            amount,
            next_payment_date: "2024-07-01".to_string(),
        }
    }

    #[tokio::test]
    async fn create_keeps_every_field_and_assigns_id() {
        let service = service();

        let created = service.create(request("Netflix", 15.99)).await.unwrap();

        assert_eq!(created.name, "Netflix");
        assert_eq!(created.billing_cycle, "monthly");
        assert_eq!(created.amount, 15.99);
        assert_eq!(created.next_payment_date, "2024-07-01");

        let listed = service.list().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn create_accepts_negative_and_zero_amounts() {
        let service = service();

        let negative = service.create(request("Refund", -3.0)).await.unwrap();
        let zero = service.create(request("Trial", 0.0)).await.unwrap();

        assert_eq!(negative.amount, -3.0);
        assert_eq!(zero.amount, 0.0);
        assert_ne!(negative.id, zero.id);
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let service = service();
        let netflix = service.create(request("Netflix", 15.99)).await.unwrap();
        let spotify = service.create(request("Spotify", 9.99)).await.unwrap();
        let hulu = service.create(request("Hulu", 7.99)).await.unwrap();

        service.delete(spotify.id).await.unwrap();

        assert_eq!(service.list().await.unwrap(), vec![netflix, hulu]);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_silent() {
        let service = service();
        let netflix = service.create(request("Netflix", 15.99)).await.unwrap();

        service.delete(netflix.id + 100).await.unwrap();

        assert_eq!(service.list().await.unwrap(), vec![netflix]);
    }

    #[tokio::test]
    async fn list_is_stable_without_writes() {
        let service = service();
        service.create(request("Netflix", 15.99)).await.unwrap();

        assert_eq!(service.list().await.unwrap(), service.list().await.unwrap());
    }
}
