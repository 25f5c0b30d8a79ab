//! Subscription data models and API request types.
//!
//! This module defines:
//! - `Subscription`: Stored record returned to clients
//! - `NewSubscription`: Request body for creating subscriptions

use serde::{Deserialize, Serialize};

/// Represents a subscription record.
///
/// # Database Table
///
/// Maps to the `subscriptions` table. A subscription is created once, never
/// updated in place, and removed by id.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "Netflix",
///   "billingCycle": "monthly",
///   "amount": 15.99,
///   "nextPaymentDate": "2024-07-01"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Store-assigned identifier
    pub id: i64,

    /// Display name, also used by payments to refer to this subscription
    pub name: String,

    /// Free-text label such as "monthly" or "yearly"
    pub billing_cycle: String,

    /// Charge per cycle, no currency attached
    pub amount: f64,

    /// Textual date of the next charge (not validated)
    pub next_payment_date: String,
}

/// Request body for creating a new subscription.
///
/// Every field is client supplied. An `id` sent by the client is ignored,
/// the store always assigns its own.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    pub name: String,
    pub billing_cycle: String,
    pub amount: f64,
    pub next_payment_date: String,
}

impl NewSubscription {
    /// Attach a store-assigned id, producing the stored record.
    pub fn into_subscription(self, id: i64) -> Subscription {
        Subscription {
            id,
            name: self.name,
            billing_cycle: self.billing_cycle,
            amount: self.amount,
            next_payment_date: self.next_payment_date,
        }
    }
}
